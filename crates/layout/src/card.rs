//! Card leaf layout
//!
//! Cards are the one leaf component with a tier-dependent shape: whatever
//! orientation the caller asks for, a card renders vertically on mobile.
//! The rule lives in [`collapse_for_tier`]; cards only name the policy.

use crate::context::LayoutContext;
use crate::node::Node;
use crate::style::Declarations;
use layout_tokens::spacing::px;
use layout_tokens::{
    collapse_for_tier, CardAlign, CardPadding, CardVariant, CollapsePolicy, Orientation,
};
use serde::{Deserialize, Serialize};

/// Policy every card applies to its requested orientation
pub const CARD_COLLAPSE: CollapsePolicy = CollapsePolicy::VerticalOnMobile;

/// Card component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Card {
    /// Content alignment
    #[serde(default)]
    pub align: CardAlign,
    /// Requested orientation
    #[serde(default)]
    pub direction: Orientation,
    /// Inner padding, none when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<CardPadding>,
    /// Surface treatment
    #[serde(default)]
    pub variant: CardVariant,
    /// Icon or image shown beside or above the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Box<Node>>,
    /// Card content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Card {
    /// Create a vertical card with no padding
    pub fn new() -> Self {
        Self::default()
    }

    /// Set alignment
    pub fn with_align(mut self, align: CardAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the requested orientation
    pub fn with_direction(mut self, direction: Orientation) -> Self {
        self.direction = direction;
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: CardPadding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set variant
    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the asset
    pub fn with_asset(mut self, asset: impl Into<Node>) -> Self {
        self.asset = Some(Box::new(asset.into()));
        self
    }

    /// Append a content child
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Compute styles for the current tier
    pub fn computed_styles(&self, ctx: &LayoutContext) -> CardStyles {
        let orientation = collapse_for_tier(self.direction, CARD_COLLAPSE, ctx.tier);
        let padding = self
            .padding
            .map(|padding| ctx.resolver().resolve_spacing(padding.token(), ctx.tier))
            .unwrap_or(0.0);

        tracing::trace!(
            requested = %self.direction,
            rendered = %orientation,
            tier = %ctx.tier,
            "resolved card orientation"
        );

        CardStyles {
            orientation,
            align: self.align,
            padding,
            variant: self.variant,
        }
    }
}

/// Resolved card styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardStyles {
    /// Orientation after the mobile collapse
    pub orientation: Orientation,
    /// Content alignment
    pub align: CardAlign,
    /// Padding in pixels
    pub padding: f32,
    /// Surface treatment
    pub variant: CardVariant,
}

impl CardStyles {
    /// CSS declarations
    pub fn declarations(&self) -> Declarations {
        let mut decls = Declarations::new();
        decls.push("display", "flex");
        decls.push("flex-direction", self.orientation.direction().as_str());
        decls.push(
            "align-items",
            match self.align {
                CardAlign::Start => "flex-start",
                CardAlign::Center => "center",
                CardAlign::End => "flex-end",
            },
        );
        decls.push("padding", px(self.padding));
        match self.variant {
            CardVariant::Default => {}
            CardVariant::Stroke => {
                decls.push("border", "1px solid var(--color-border-default)");
                decls.push("background", "var(--color-background-default)");
            }
            CardVariant::Brand => {
                decls.push("background", "var(--color-background-brand)");
            }
        }
        decls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_tokens::Tier;

    #[test]
    fn test_horizontal_card_is_vertical_on_mobile() {
        let card = Card::new().with_direction(Orientation::Horizontal);
        let styles = card.computed_styles(&LayoutContext::for_tier(Tier::Mobile));
        assert_eq!(styles.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_horizontal_card_kept_on_wider_tiers() {
        let card = Card::new().with_direction(Orientation::Horizontal);
        for tier in [Tier::Tablet, Tier::Desktop] {
            let styles = card.computed_styles(&LayoutContext::for_tier(tier));
            assert_eq!(styles.orientation, Orientation::Horizontal);
        }
    }

    #[test]
    fn test_default_card() {
        let card = Card::new();
        let styles = card.computed_styles(&LayoutContext::for_tier(Tier::Desktop));
        assert_eq!(styles.orientation, Orientation::Vertical);
        assert_eq!(styles.align, CardAlign::Start);
        assert_eq!(styles.padding, 0.0);
    }

    #[test]
    fn test_padding_scales_with_tier() {
        let card = Card::new().with_padding(CardPadding::S800);
        let mobile = card.computed_styles(&LayoutContext::for_tier(Tier::Mobile));
        assert_eq!(mobile.padding, 32.0);
        assert_eq!(mobile.declarations().get("padding"), Some("32px"));
    }

    #[test]
    fn test_variant_declarations() {
        let styles = Card::new()
            .with_variant(CardVariant::Stroke)
            .with_align(CardAlign::Center)
            .computed_styles(&LayoutContext::for_tier(Tier::Tablet));
        let decls = styles.declarations();
        assert_eq!(decls.get("border"), Some("1px solid var(--color-border-default)"));
        assert_eq!(decls.get("align-items"), Some("center"));
        assert_eq!(decls.get("flex-direction"), Some("column"));
    }

    #[test]
    fn test_rejects_unknown_padding() {
        let err = serde_json::from_str::<Card>(r#"{"padding": "700"}"#);
        assert!(err.is_err());
    }
}
