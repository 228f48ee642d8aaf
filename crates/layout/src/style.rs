//! Resolved style building blocks

use layout_tokens::spacing::px;
use serde::{Deserialize, Serialize};

/// Content width of container boxes
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

/// Pixel values per edge
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
    /// Left edge
    pub left: f32,
}

impl Edges {
    /// Same value on every edge
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Block (top/bottom) and inline (left/right) values
    pub fn symmetric(block: f32, inline: f32) -> Self {
        Self {
            top: block,
            right: inline,
            bottom: block,
            left: inline,
        }
    }

    /// Shortest CSS shorthand for the four edges
    pub fn to_css(&self) -> String {
        let Edges {
            top,
            right,
            bottom,
            left,
        } = *self;
        if top == right && right == bottom && bottom == left {
            px(top)
        } else if top == bottom && right == left {
            format!("{} {}", px(top), px(right))
        } else {
            format!("{} {} {} {}", px(top), px(right), px(bottom), px(left))
        }
    }
}

/// Ordered CSS declarations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Declarations(Vec<(String, String)>);

impl Declarations {
    /// Empty declaration list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration
    pub fn push(&mut self, property: &str, value: impl Into<String>) {
        self.0.push((property.to_string(), value.into()));
    }

    /// Append a declaration when a value is present
    pub fn push_opt(&mut self, property: &str, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.push(property, value);
        }
    }

    /// Value of a property, if declared
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is declared
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inline style text
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Merge another list after this one
    pub fn extend(&mut self, other: Declarations) {
        self.0.extend(other.0);
    }
}
