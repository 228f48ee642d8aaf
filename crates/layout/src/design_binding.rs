//! Design-tool bindings
//!
//! Design frames carry a `Platform` property instead of spacing tokens.
//! These helpers map it onto tokens and build the card grid sections the
//! frames describe. Only desktop and mobile frames define a grid gap.

use crate::flex::{Flex, FlexItem};
use crate::node::Node;
use crate::section::Section;
use layout_tokens::{
    AlignSecondary, Direction, FractionScheme, LayoutError, Platform, Result, SpacingToken,
    TokenKind,
};
use serde::{Deserialize, Serialize};

/// Card grid sections exposed to design tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardGridKind {
    /// Icon cards sized by content
    Icon,
    /// Testimonial cards in thirds
    Testimonials,
    /// Cards stacked in one column
    ContentList,
    /// Image cards in thirds
    Image,
    /// Review cards in thirds
    Reviews,
}

impl CardGridKind {
    /// Every grid kind
    pub const ALL: [CardGridKind; 5] = [
        CardGridKind::Icon,
        CardGridKind::Testimonials,
        CardGridKind::ContentList,
        CardGridKind::Image,
        CardGridKind::Reviews,
    ];

    /// Fraction scheme of the card row, if any
    pub fn scheme(&self) -> Option<FractionScheme> {
        match self {
            CardGridKind::Icon | CardGridKind::ContentList => None,
            CardGridKind::Testimonials | CardGridKind::Image | CardGridKind::Reviews => {
                Some(FractionScheme::Third)
            }
        }
    }

    /// Direction of the card row
    pub fn direction(&self) -> Direction {
        match self {
            CardGridKind::ContentList => Direction::Column,
            _ => Direction::Row,
        }
    }

    /// Build the section for a platform
    ///
    /// Platforms without a gap mapping get a card row with no gap.
    pub fn compose(&self, platform: Platform, top: Node, cards: Vec<Node>) -> Section {
        let mut row = Flex::new()
            .wrap()
            .with_direction(self.direction())
            .with_children(cards);
        if let Some(gap) = platform.gap_token() {
            row = row.with_gap(gap);
        }
        if let Some(scheme) = self.scheme() {
            row = row.with_type(scheme);
        }

        tracing::debug!(kind = ?self, %platform, "composed card grid");

        Section::new().with_padding(padding(platform)).child(
            Flex::column()
                .container()
                .with_gap(SpacingToken::S1200)
                .with_align_secondary(AlignSecondary::Stretch)
                .child(top)
                .child(FlexItem::new().child(row)),
        )
    }
}

/// Grid gap for a platform
///
/// Asking for the gap of a platform that defines none is an invalid token.
pub fn gap(platform: Platform) -> Result<SpacingToken> {
    platform
        .gap_token()
        .ok_or_else(|| LayoutError::invalid_token(TokenKind::Platform, platform.as_str()))
}

/// Section padding for a platform
pub fn padding(platform: Platform) -> SpacingToken {
    platform.padding_token()
}

/// Parse a design-tool platform property
pub fn platform(property: &str) -> Result<Platform> {
    property.parse()
}
