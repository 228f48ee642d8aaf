//! Layout primitives for PageKit
//!
//! This crate provides the structural building blocks marketing pages are
//! composed from, and resolves them against the current viewport tier.
//!
//! # Primitives
//!
//! - [`Section`] - Top-level region with padding and a surface variant
//! - [`Flex`] - Flex container with gap, alignment and fraction schemes
//! - [`FlexItem`] - Child that overrides its share of a fraction scheme
//! - [`Card`] - Leaf surface that stacks vertically on mobile
//!
//! # Resolution
//!
//! A page is a tree of [`Node`]s. Rendering takes one [`LayoutContext`]
//! (captured once from the breakpoint detector) and produces a
//! [`ResolvedNode`] tree carrying concrete styles for the host renderer.
//!
//! ```rust
//! use layout::{Flex, LayoutContext, Node};
//! use layout_tokens::{FractionScheme, SpacingToken, Tier};
//!
//! let grid = Flex::new()
//!     .wrap()
//!     .with_type(FractionScheme::Third)
//!     .with_gap(SpacingToken::S600)
//!     .with_children(vec![Node::leaf("card"), Node::leaf("card"), Node::leaf("card")]);
//!
//! let resolved = Node::from(grid).render(&LayoutContext::for_tier(Tier::Mobile));
//! for child in &resolved.children {
//!     assert_eq!(child.item.as_ref().unwrap().basis.percent(), Some(100.0));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod card;
pub mod compositions;
pub mod context;
pub mod design_binding;
pub mod flex;
pub mod node;
pub mod section;
pub mod style;

pub use card::{Card, CardStyles};
pub use context::LayoutContext;
pub use design_binding::CardGridKind;
pub use flex::{Flex, FlexDirective, FlexItem, FlexStyles, ItemStyles};
pub use node::{Leaf, Node, ResolvedNode, ResolvedStyle};
pub use section::{Section, SectionDirective, SectionStyles};
pub use style::{Declarations, Edges};
