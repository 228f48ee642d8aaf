//! Error types for layout resolution

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used across the layout crates
pub type Result<T> = std::result::Result<T, LayoutError>;

/// The family a raw token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Gap and padding magnitudes
    Spacing,
    /// Fraction schemes of a flex row
    Fraction,
    /// Per-item size overrides
    ItemSize,
    /// Flex direction
    Direction,
    /// Card orientation
    Orientation,
    /// Main axis alignment
    AlignPrimary,
    /// Cross axis alignment
    AlignSecondary,
    /// Section and card surface variants
    Variant,
    /// Card content alignment
    CardAlign,
    /// Card padding levels
    CardPadding,
    /// Structural element of a section
    ElementType,
    /// Viewport tier names
    Tier,
    /// Design-tool platform property
    Platform,
}

impl TokenKind {
    /// Human readable name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Spacing => "spacing",
            TokenKind::Fraction => "fraction",
            TokenKind::ItemSize => "item size",
            TokenKind::Direction => "direction",
            TokenKind::Orientation => "orientation",
            TokenKind::AlignPrimary => "primary alignment",
            TokenKind::AlignSecondary => "secondary alignment",
            TokenKind::Variant => "variant",
            TokenKind::CardAlign => "card alignment",
            TokenKind::CardPadding => "card padding",
            TokenKind::ElementType => "element type",
            TokenKind::Tier => "tier",
            TokenKind::Platform => "platform",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout errors
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A token outside the closed vocabulary
    #[error("Invalid {kind} token: {value:?}")]
    InvalidToken {
        /// Vocabulary the token was checked against
        kind: TokenKind,
        /// The rejected input
        value: String,
    },

    /// Breakpoint thresholds that do not partition the width domain
    #[error("Invalid breakpoints: {0}")]
    InvalidBreakpoints(String),

    /// Malformed configuration document
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl LayoutError {
    /// Build an invalid-token error and log the rejection
    pub fn invalid_token(kind: TokenKind, value: &str) -> Self {
        tracing::warn!(%kind, value, "rejected token outside the vocabulary");
        LayoutError::InvalidToken {
            kind,
            value: value.to_string(),
        }
    }

    /// Whether this error is an invalid-token rejection
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, LayoutError::InvalidToken { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_message() {
        let err = LayoutError::invalid_token(TokenKind::Spacing, "9999");
        assert_eq!(err.to_string(), "Invalid spacing token: \"9999\"");
        assert!(err.is_invalid_token());
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: LayoutError = json_err.into();
        assert!(matches!(err, LayoutError::Config(_)));
        assert!(!err.is_invalid_token());
    }
}
