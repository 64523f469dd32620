//! In-memory scene description
//!
//! This is the contract with the editor and renderer: they own the scene
//! description, the engine builds its store from it.

use crate::ecs::{Color, RaySegment, Size};
use crate::foundation::math::Vec2;

/// Default size of an object when none is given
pub const DEFAULT_OBJECT_SIZE: f64 = 30.0;

/// Default size of a viewer when none is given
pub const DEFAULT_VIEWER_SIZE: f64 = 20.0;

/// Whether a viewer is the real eye or a mirror image of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewerVariant {
    /// The scene's actual viewer
    #[default]
    Real,
    /// Image of a viewer in a mirror
    Virtual,
}

/// Whether an object is a real light source or a mirror image of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectVariant {
    /// An authored light source
    #[default]
    Real,
    /// Image of an object in a mirror
    Virtual,
}

/// Role of a ray in a reflection path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RayKind {
    /// Authored directly in the scene
    #[default]
    Authored,
    /// From the object to the reflection point
    Incident,
    /// From the reflection point to the viewer
    Reflected,
}

/// A mirror in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorSpec {
    /// Unique identifier
    pub id: String,
    /// Anchor point
    pub position: Vec2,
    /// Orientation relative to the horizontal, in degrees
    pub angle_degrees: f64,
    /// `width` is the mirror length, `height` its drawn thickness
    pub size: Size,
    /// Fill color
    pub color: Option<String>,
    /// Initial velocity; mirrors start at rest when absent
    pub velocity: Option<Vec2>,
}

impl MirrorSpec {
    /// Create a mirror at rest with the default color
    pub fn new(id: impl Into<String>, position: Vec2, angle_degrees: f64, size: Size) -> Self {
        Self {
            id: id.into(),
            position,
            angle_degrees,
            size,
            color: None,
            velocity: None,
        }
    }

    /// Set the color
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the initial velocity
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

/// A light-emitting object
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSpec {
    /// Unique identifier
    pub id: String,
    /// Anchor point (top-left of the bounding box)
    pub position: Vec2,
    /// Bounding box; defaults to 30x30
    pub size: Option<Size>,
    /// Fill color
    pub color: Option<String>,
    /// Presentation flag, cleared once the object has been inspected
    pub is_pulsing: bool,
    /// Real or virtual
    pub variant: ObjectVariant,
}

impl ObjectSpec {
    /// Create a real, non-pulsing object
    pub fn new(id: impl Into<String>, position: Vec2) -> Self {
        Self {
            id: id.into(),
            position,
            size: None,
            color: None,
            is_pulsing: false,
            variant: ObjectVariant::Real,
        }
    }

    /// Set the size
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the color
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the pulsing flag
    #[must_use]
    pub fn pulsing(mut self, is_pulsing: bool) -> Self {
        self.is_pulsing = is_pulsing;
        self
    }

    /// Size with the default applied
    pub fn resolved_size(&self) -> Size {
        self.size.unwrap_or_else(|| Size::square(DEFAULT_OBJECT_SIZE))
    }
}

/// A viewer (eye)
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSpec {
    /// Unique identifier
    pub id: String,
    /// Anchor point (top-left of the bounding box)
    pub position: Vec2,
    /// Bounding box; defaults to 20x20
    pub size: Option<Size>,
    /// Fill color
    pub color: Option<String>,
    /// Real or virtual
    pub variant: ViewerVariant,
}

impl ViewerSpec {
    /// Create a real viewer
    pub fn new(id: impl Into<String>, position: Vec2) -> Self {
        Self {
            id: id.into(),
            position,
            size: None,
            color: None,
            variant: ViewerVariant::Real,
        }
    }

    /// Set the size
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the color
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Size with the default applied
    pub fn resolved_size(&self) -> Size {
        self.size.unwrap_or_else(|| Size::square(DEFAULT_VIEWER_SIZE))
    }
}

/// A drawn light segment
#[derive(Debug, Clone, PartialEq)]
pub struct RaySpec {
    /// Unique identifier
    pub id: String,
    /// Start point
    pub from: Vec2,
    /// End point
    pub to: Vec2,
    /// Stroke color; defaults to yellow
    pub color: Option<String>,
    /// Stroke width; defaults to 2
    pub width: Option<f64>,
    /// Role in a reflection path
    pub kind: RayKind,
}

impl RaySpec {
    /// Create an authored ray
    pub fn new(id: impl Into<String>, from: Vec2, to: Vec2) -> Self {
        Self {
            id: id.into(),
            from,
            to,
            color: None,
            width: None,
            kind: RayKind::Authored,
        }
    }

    /// Width with the default applied
    pub fn resolved_width(&self) -> f64 {
        self.width.unwrap_or(RaySegment::DEFAULT_WIDTH)
    }
}

/// Anything in the scene addressed by a string identifier
pub trait Identified {
    /// The identifier
    fn id(&self) -> &str;
}

macro_rules! identified {
    ($($spec:ty),*) => {
        $(impl Identified for $spec {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

identified!(MirrorSpec, ObjectSpec, ViewerSpec, RaySpec);

/// The full scene: mirrors, objects, viewers and rays
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneDescription {
    /// Mirrors, in enumeration order
    pub mirrors: Vec<MirrorSpec>,
    /// Light-emitting objects
    pub objects: Vec<ObjectSpec>,
    /// Viewers, real and virtual
    pub viewers: Vec<ViewerSpec>,
    /// Rays
    pub rays: Vec<RaySpec>,
}

impl SceneDescription {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Two vertical mirrors around a pulsing object with a viewer below it
    pub fn default_scene() -> Self {
        Self {
            mirrors: vec![
                MirrorSpec::new("mirror1", Vec2::new(400.0, 300.0), 90.0, Size::new(200.0, 20.0))
                    .with_color("blue"),
                MirrorSpec::new("mirror2", Vec2::new(225.0, 300.0), 90.0, Size::new(200.0, 20.0))
                    .with_color("green"),
            ],
            objects: vec![ObjectSpec::new("object1", Vec2::new(300.0, 250.0))
                .with_size(Size::square(30.0))
                .with_color("red")
                .pulsing(true)],
            viewers: vec![ViewerSpec::new("viewer1", Vec2::new(300.0, 350.0))
                .with_size(Size::square(30.0))
                .with_color("white")],
            rays: Vec::new(),
        }
    }

    /// Total number of entities the scene produces
    pub fn entity_count(&self) -> usize {
        self.mirrors.len() + self.objects.len() + self.viewers.len() + self.rays.len()
    }

    /// Every identifier in load order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.mirrors
            .iter()
            .map(Identified::id)
            .chain(self.objects.iter().map(Identified::id))
            .chain(self.rays.iter().map(Identified::id))
            .chain(self.viewers.iter().map(Identified::id))
    }

    /// Find a mirror by id
    pub fn find_mirror(&self, id: &str) -> Option<&MirrorSpec> {
        self.mirrors.iter().find(|mirror| mirror.id == id)
    }

    /// Find an object by id
    pub fn find_object(&self, id: &str) -> Option<&ObjectSpec> {
        self.objects.iter().find(|object| object.id == id)
    }

    /// Find a viewer by id
    pub fn find_viewer(&self, id: &str) -> Option<&ViewerSpec> {
        self.viewers.iter().find(|viewer| viewer.id == id)
    }

    /// The first real viewer
    pub fn primary_viewer(&self) -> Option<&ViewerSpec> {
        self.viewers
            .iter()
            .find(|viewer| viewer.variant == ViewerVariant::Real)
    }

    /// Identifier for the next mirror added through [`Self::add_mirror`]
    pub fn next_mirror_id(&self) -> String {
        let mut n = self.mirrors.len() + 1;
        loop {
            let candidate = format!("mirror-{n}");
            if !self.identifiers().any(|id| id == candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Append a default mirror and return its id
    pub fn add_mirror(&mut self) -> String {
        let id = self.next_mirror_id();
        self.mirrors.push(
            MirrorSpec::new(id.clone(), Vec2::new(400.0, 400.0), 90.0, Size::new(200.0, 15.0))
                .with_color("blue"),
        );
        id
    }

    /// Remove a mirror by id
    pub fn remove_mirror(&mut self, id: &str) -> Option<MirrorSpec> {
        let index = self.mirrors.iter().position(|mirror| mirror.id == id)?;
        Some(self.mirrors.remove(index))
    }
}

/// Resolved color for a mirror, object or viewer
pub(crate) fn color_or_default(color: Option<&String>) -> Color {
    color.map_or_else(Color::default, |c| Color::new(c.as_str()))
}

/// Resolved color for a ray
pub(crate) fn ray_color_or_default(color: Option<&String>) -> Color {
    color.map_or_else(|| Color::new(Color::DEFAULT_RAY), |c| Color::new(c.as_str()))
}
