//! Presentation context passed to every formatter

use serde::{Deserialize, Serialize};

/// Layout direction of the surrounding text. Supplied by the caller;
/// right-to-left only reverses the order of assembled multi-part sequences,
/// numeral glyphs are untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Separators and direction for rendered lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatContext {
    separator: String,
    part_separator: String,
    direction: TextDirection,
}

impl Default for FormatContext {
    fn default() -> Self {
        FormatContext {
            separator: String::new(),
            part_separator: " ".to_string(),
            direction: TextDirection::LeftToRight,
        }
    }
}

impl FormatContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Separator between a numeral and its unit symbol, default empty.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Separator between the parts of a multi-part rendering, default `" "`.
    pub fn with_part_separator(mut self, part_separator: impl Into<String>) -> Self {
        self.part_separator = part_separator.into();
        self
    }

    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn part_separator(&self) -> &str {
        &self.part_separator
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }
}
