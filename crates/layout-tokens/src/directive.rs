//! Structural directive vocabulary
//!
//! Direction, alignment, variants and element types. None of these depend
//! on the tier except through [`collapse_for_tier`], the single policy
//! leaf components consult when they want to stack vertically on mobile.

use crate::error::TokenKind;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// Main axis of a flex container
    #[derive(Default)]
    pub enum Direction (TokenKind::Direction) {
        /// Horizontal
        #[default]
        Row => "row",
        /// Vertical
        Column => "column",
    }
}

impl Direction {
    /// Resolve a requested direction for a tier
    ///
    /// Generic flex containers always honour the caller's literal direction.
    pub fn resolve(self, _tier: Tier) -> Direction {
        self
    }
}

vocabulary! {
    /// Orientation of a leaf component such as a card
    #[derive(Default)]
    pub enum Orientation (TokenKind::Orientation) {
        /// Asset beside content
        Horizontal => "horizontal",
        /// Asset above content
        #[default]
        Vertical => "vertical",
    }
}

impl Orientation {
    /// Flex direction implementing this orientation
    pub fn direction(&self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Row,
            Orientation::Vertical => Direction::Column,
        }
    }
}

/// How a leaf component reacts to the mobile tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollapsePolicy {
    /// Always render the requested orientation
    #[default]
    Literal,
    /// Render vertically on mobile whatever was requested
    VerticalOnMobile,
}

/// Apply a collapse policy to a requested orientation
pub fn collapse_for_tier(requested: Orientation, policy: CollapsePolicy, tier: Tier) -> Orientation {
    match (policy, tier) {
        (CollapsePolicy::VerticalOnMobile, Tier::Mobile) => Orientation::Vertical,
        _ => requested,
    }
}

vocabulary! {
    /// Alignment along the main axis
    pub enum AlignPrimary (TokenKind::AlignPrimary) {
        /// Pack at the start
        Start => "start",
        /// Centre
        Center => "center",
        /// Pack at the end
        End => "end",
        /// Distribute with space between
        SpaceBetween => "space-between",
    }
}

impl AlignPrimary {
    /// CSS `justify-content` value
    pub fn css(&self) -> &'static str {
        match self {
            AlignPrimary::Start => "flex-start",
            AlignPrimary::Center => "center",
            AlignPrimary::End => "flex-end",
            AlignPrimary::SpaceBetween => "space-between",
        }
    }
}

vocabulary! {
    /// Alignment along the cross axis
    pub enum AlignSecondary (TokenKind::AlignSecondary) {
        /// Align to start
        Start => "start",
        /// Centre
        Center => "center",
        /// Align to end
        End => "end",
        /// Stretch to fill
        Stretch => "stretch",
    }
}

impl AlignSecondary {
    /// CSS `align-items` value
    pub fn css(&self) -> &'static str {
        match self {
            AlignSecondary::Start => "flex-start",
            AlignSecondary::Center => "center",
            AlignSecondary::End => "flex-end",
            AlignSecondary::Stretch => "stretch",
        }
    }
}

vocabulary! {
    /// Surface treatment of a section; never affects spacing
    #[derive(Default)]
    pub enum SectionVariant (TokenKind::Variant) {
        /// Page background
        #[default]
        Default => "default",
        /// Tinted neutral background
        Neutral => "neutral",
        /// Subtle background
        Subtle => "subtle",
        /// Page background with a top stroke
        Stroke => "stroke",
        /// Brand background
        Brand => "brand",
    }
}

vocabulary! {
    /// Structural element rendered by a section
    #[derive(Default)]
    pub enum ElementType (TokenKind::ElementType) {
        /// Generic section
        #[default]
        Section => "section",
        /// Page header
        Header => "header",
        /// Page footer
        Footer => "footer",
        /// Main content
        Main => "main",
        /// Plain block
        Div => "div",
    }
}

vocabulary! {
    /// Surface treatment of a card
    #[derive(Default)]
    pub enum CardVariant (TokenKind::Variant) {
        /// No surface
        #[default]
        Default => "default",
        /// Outlined
        Stroke => "stroke",
        /// Brand background
        Brand => "brand",
    }
}

vocabulary! {
    /// Alignment of card content
    #[derive(Default)]
    pub enum CardAlign (TokenKind::CardAlign) {
        /// Start
        #[default]
        Start => "start",
        /// Centre
        Center => "center",
        /// End
        End => "end",
    }
}

vocabulary! {
    /// Padding levels a card accepts
    pub enum CardPadding (TokenKind::CardPadding) {
        /// Compact
        S600 => "600",
        /// Roomy
        S800 => "800",
    }
}

impl CardPadding {
    /// Spacing token behind the padding level
    pub fn token(&self) -> crate::SpacingToken {
        match self {
            CardPadding::S600 => crate::SpacingToken::S600,
            CardPadding::S800 => crate::SpacingToken::S800,
        }
    }
}

vocabulary! {
    /// Platform property of design-tool section frames
    pub enum Platform (TokenKind::Platform) {
        /// Desktop frame
        Desktop => "Desktop",
        /// Mobile frame
        Mobile => "Mobile",
        /// Extra large frame
        ExtraLarge => "Extra Large",
        /// Ultra large frame
        UltraLarge => "Ultra Large",
    }
}

impl Platform {
    /// Gap token for the platform; only desktop and mobile frames define one
    pub fn gap_token(&self) -> Option<crate::SpacingToken> {
        match self {
            Platform::Desktop => Some(crate::SpacingToken::S1200),
            Platform::Mobile => Some(crate::SpacingToken::S600),
            Platform::ExtraLarge | Platform::UltraLarge => None,
        }
    }

    /// Section padding token for the platform
    pub fn padding_token(&self) -> crate::SpacingToken {
        match self {
            Platform::Desktop => crate::SpacingToken::S1200,
            Platform::Mobile => crate::SpacingToken::S600,
            Platform::ExtraLarge => crate::SpacingToken::S1600,
            Platform::UltraLarge => crate::SpacingToken::S4000,
        }
    }
}
