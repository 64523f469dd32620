//! Presentation components read back by renderers

use std::fmt;

/// Named or RGB color string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Default color for mirrors, objects and viewers
    pub const DEFAULT: &'static str = "black";

    /// Default color for rays
    pub const DEFAULT_RAY: &'static str = "yellow";

    /// Create a color from any string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The color string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether an object is drawn with a pulsing animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pulsing(pub bool);
