//! PageKit
//!
//! Responsive layout engine for composing marketing pages. The workspace
//! is split into three crates, re-exported here:
//!
//! - [`tokens`] - Tiers, spacing and fraction tables, the token vocabulary
//! - [`viewport`] - Breakpoint detection and tier change notification
//! - [`layout`] - Section, Flex, FlexItem and Card primitives, page trees
//!
//! ```rust
//! use pagekit::layout::{compositions, LayoutContext, Node};
//! use pagekit::viewport::BreakpointDetector;
//!
//! let detector = BreakpointDetector::new();
//! detector.update_width(Some(1440.0));
//!
//! let ctx = LayoutContext::capture(&detector);
//! let footer = Node::from(compositions::footer(&ctx.flags)).render(&ctx);
//! assert_eq!(footer.name, "footer");
//! ```

pub use layout;
pub use layout_tokens as tokens;
pub use viewport;

pub use layout::{Card, Flex, FlexItem, LayoutContext, Node, ResolvedNode, Section};
pub use layout_tokens::{LayoutError, Result, SpacingToken, Tier};
pub use viewport::BreakpointDetector;
