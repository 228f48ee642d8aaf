//! Layout tokens for PageKit
//!
//! This crate holds the closed vocabulary of the layout engine and the pure
//! functions that resolve it against a viewport tier.
//!
//! # Modules
//!
//! - [`tier`] - Viewport tiers, breakpoint thresholds and derived flags
//! - [`spacing`] - Spacing scale and its per-tier tables
//! - [`fraction`] - Fraction schemes, item sizes and column bases
//! - [`directive`] - Direction, alignment, variant and element vocabulary
//! - [`resolver`] - Generic resolution entry point for untyped callers
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use layout_tokens::{spacing, FractionScheme, SpacingToken, Tier};
//!
//! let gap = spacing::resolve(SpacingToken::S1200, Tier::Desktop);
//! assert_eq!(gap, 48.0);
//!
//! let basis = layout_tokens::fraction::resolve(FractionScheme::Third, Tier::Mobile);
//! assert_eq!(basis.percent(), Some(100.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod vocabulary;

pub mod directive;
pub mod error;
pub mod fraction;
pub mod resolver;
pub mod spacing;
pub mod tier;

pub use directive::{
    collapse_for_tier, AlignPrimary, AlignSecondary, CardAlign, CardPadding, CardVariant,
    CollapsePolicy, Direction, ElementType, Orientation, Platform, SectionVariant,
};
pub use error::{LayoutError, Result, TokenKind};
pub use fraction::{Basis, FractionScheme, ItemSize};
pub use resolver::{ResolvedValue, TokenResolver};
pub use spacing::SpacingToken;
pub use tier::{breakpoints, BreakpointFlags, Breakpoints, Tier};
