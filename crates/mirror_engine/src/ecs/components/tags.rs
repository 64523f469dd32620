//! Marker tags

use std::fmt;

bitflags::bitflags! {
    /// Marker tags carried by every entity
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntityTags: u8 {
        /// Reflecting line segment
        const MIRROR = 1 << 0;
        /// Light-emitting object
        const OBJECT = 1 << 1;
        /// Viewer (eye)
        const VIEWER = 1 << 2;
        /// Drawn light segment
        const RAY = 1 << 3;
        /// Derived from a reflection rather than authored
        const VIRTUAL = 1 << 4;
    }
}

/// The kind of a scene entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Mirror
    Mirror,
    /// Light-emitting object
    Object,
    /// Viewer
    Viewer,
    /// Ray
    Ray,
}

impl EntityKind {
    /// The tag identifying this kind
    pub fn tag(self) -> EntityTags {
        match self {
            EntityKind::Mirror => EntityTags::MIRROR,
            EntityKind::Object => EntityTags::OBJECT,
            EntityKind::Viewer => EntityTags::VIEWER,
            EntityKind::Ray => EntityTags::RAY,
        }
    }

    /// Kind encoded in a tag set, if any
    pub fn from_tags(tags: EntityTags) -> Option<Self> {
        [EntityKind::Mirror, EntityKind::Object, EntityKind::Viewer, EntityKind::Ray]
            .into_iter()
            .find(|kind| tags.contains(kind.tag()))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Mirror => "mirror",
            EntityKind::Object => "object",
            EntityKind::Viewer => "viewer",
            EntityKind::Ray => "ray",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_tags() {
        assert_eq!(EntityKind::from_tags(EntityTags::MIRROR), Some(EntityKind::Mirror));
        assert_eq!(
            EntityKind::from_tags(EntityTags::VIEWER | EntityTags::VIRTUAL),
            Some(EntityKind::Viewer)
        );
        assert_eq!(EntityKind::from_tags(EntityTags::VIRTUAL), None);
    }
}
