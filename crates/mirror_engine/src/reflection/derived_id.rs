//! Identifiers for records produced by inspection
//!
//! An identifier encodes what was derived and from which object, viewer and
//! mirror, so inspecting the same triple again yields the same identifiers.

use std::fmt;

/// What a derived record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedKind {
    /// Mirror image of the viewer
    VirtualViewer,
    /// Mirror image of the object
    VirtualObject,
    /// Ray from the object to the reflection point
    IncidentRay,
    /// Ray from the reflection point to the viewer
    ReflectedRay,
}

impl DerivedKind {
    /// Identifier prefix
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::VirtualViewer => "virtual-viewer",
            Self::VirtualObject => "virtual-object",
            Self::IncidentRay => "incident-ray",
            Self::ReflectedRay => "reflected-ray",
        }
    }
}

impl fmt::Display for DerivedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Identifier of a record derived from `object_id`, `viewer_id` and `mirror_id`
pub fn derived_id(kind: DerivedKind, object_id: &str, viewer_id: &str, mirror_id: &str) -> String {
    format!("{kind}:{object_id}:{viewer_id}:{mirror_id}")
}
