//! Section container
//!
//! A section is one top-level region of a page. It owns its padding and
//! surface; everything inside is laid out by nested flex containers.

use crate::context::LayoutContext;
use crate::node::Node;
use crate::style::{Declarations, Edges};
use layout_tokens::{ElementType, SectionVariant, SpacingToken};
use serde::{Deserialize, Serialize};

/// Layout directive of a section
///
/// `padding_top` and `padding_bottom` take precedence over `padding` on
/// their edge. Inline padding comes from `padding` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDirective {
    /// Structural element to render
    #[serde(default)]
    pub element_type: ElementType,
    /// Surface treatment
    #[serde(default)]
    pub variant: SectionVariant,
    /// Uniform padding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<SpacingToken>,
    /// Top padding, overriding `padding`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<SpacingToken>,
    /// Bottom padding, overriding `padding`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<SpacingToken>,
}

impl SectionDirective {
    /// Resolve against a render context
    pub fn resolve(&self, ctx: &LayoutContext) -> SectionStyles {
        let resolver = ctx.resolver();
        let edge = |token: Option<SpacingToken>| {
            token
                .map(|token| resolver.resolve_spacing(token, ctx.tier))
                .unwrap_or(0.0)
        };

        let padding = Edges {
            top: edge(self.padding_top.or(self.padding)),
            right: edge(self.padding),
            bottom: edge(self.padding_bottom.or(self.padding)),
            left: edge(self.padding),
        };
        let (background, border_top) = surface(self.variant);
        tracing::trace!(tier = %ctx.tier, padding = %padding.to_css(), "resolved section");

        SectionStyles {
            element: self.element_type,
            variant: self.variant,
            padding,
            background: background.to_string(),
            border_top: border_top.map(str::to_string),
        }
    }
}

/// Background and top border of a section variant
fn surface(variant: SectionVariant) -> (&'static str, Option<&'static str>) {
    match variant {
        SectionVariant::Default => ("var(--color-background-default)", None),
        SectionVariant::Neutral => ("var(--color-background-neutral)", None),
        SectionVariant::Subtle => ("var(--color-background-subtle)", None),
        SectionVariant::Stroke => (
            "var(--color-background-default)",
            Some("1px solid var(--color-border-default)"),
        ),
        SectionVariant::Brand => ("var(--color-background-brand)", None),
    }
}

/// Section component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    /// Layout directive
    #[serde(flatten)]
    pub directive: SectionDirective,
    /// Section content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Section {
    /// Create an empty section
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element type
    pub fn with_element(mut self, element: ElementType) -> Self {
        self.directive.element_type = element;
        self
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: SectionVariant) -> Self {
        self.directive.variant = variant;
        self
    }

    /// Set uniform padding
    pub fn with_padding(mut self, padding: SpacingToken) -> Self {
        self.directive.padding = Some(padding);
        self
    }

    /// Set top padding
    pub fn with_padding_top(mut self, padding: SpacingToken) -> Self {
        self.directive.padding_top = Some(padding);
        self
    }

    /// Set bottom padding
    pub fn with_padding_bottom(mut self, padding: SpacingToken) -> Self {
        self.directive.padding_bottom = Some(padding);
        self
    }

    /// Set children
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Compute styles for the current tier
    pub fn computed_styles(&self, ctx: &LayoutContext) -> SectionStyles {
        self.directive.resolve(ctx)
    }
}

/// Resolved section styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStyles {
    /// Element to render
    pub element: ElementType,
    /// Variant the surface came from
    pub variant: SectionVariant,
    /// Padding per edge in pixels
    pub padding: Edges,
    /// Background colour reference
    pub background: String,
    /// Top border, for stroked sections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top: Option<String>,
}

impl SectionStyles {
    /// CSS declarations
    pub fn declarations(&self) -> Declarations {
        let mut decls = Declarations::new();
        decls.push("display", "block");
        decls.push("padding", self.padding.to_css());
        decls.push("background", self.background.clone());
        decls.push_opt("border-top", self.border_top.clone());
        decls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_tokens::Tier;

    #[test]
    fn test_edge_padding_wins_over_uniform() {
        let section = Section::new()
            .with_padding(SpacingToken::S1200)
            .with_padding_top(SpacingToken::S600);

        let styles = section.computed_styles(&LayoutContext::for_tier(Tier::Desktop));
        assert_eq!(styles.padding.top, 24.0);
        assert_eq!(styles.padding.bottom, 48.0);
        assert_eq!(styles.padding.left, 48.0);
        assert_eq!(styles.padding.right, 48.0);
    }

    #[test]
    fn test_edge_only_padding() {
        let section = Section::new()
            .with_element(ElementType::Footer)
            .with_padding_top(SpacingToken::S1600)
            .with_padding_bottom(SpacingToken::S4000);

        let styles = section.computed_styles(&LayoutContext::for_tier(Tier::Mobile));
        assert_eq!(styles.element, ElementType::Footer);
        assert_eq!(styles.padding.top, 48.0);
        assert_eq!(styles.padding.bottom, 96.0);
        assert_eq!(styles.padding.left, 0.0);
    }

    #[test]
    fn test_padding_follows_tier() {
        let section = Section::new().with_padding(SpacingToken::S4000);
        let mobile = section.computed_styles(&LayoutContext::for_tier(Tier::Mobile));
        let tablet = section.computed_styles(&LayoutContext::for_tier(Tier::Tablet));
        let desktop = section.computed_styles(&LayoutContext::for_tier(Tier::Desktop));
        assert_eq!(mobile.padding, Edges::uniform(96.0));
        assert_eq!(tablet.padding, Edges::uniform(128.0));
        assert_eq!(desktop.padding, Edges::uniform(160.0));
    }

    #[test]
    fn test_variant_controls_surface_only() {
        let ctx = LayoutContext::for_tier(Tier::Desktop);
        let plain = Section::new().with_padding(SpacingToken::S800);
        let stroke = plain.clone().with_variant(SectionVariant::Stroke);

        let plain_styles = plain.computed_styles(&ctx);
        let stroke_styles = stroke.computed_styles(&ctx);
        assert_eq!(plain_styles.padding, stroke_styles.padding);
        assert!(plain_styles.border_top.is_none());
        assert!(stroke_styles.border_top.is_some());
    }

    #[test]
    fn test_section_declarations() {
        let styles = Section::new()
            .with_variant(SectionVariant::Neutral)
            .with_padding(SpacingToken::S600)
            .computed_styles(&LayoutContext::for_tier(Tier::Tablet));
        let css = styles.declarations().to_css();
        assert!(css.contains("padding: 24px;"));
        assert!(css.contains("background: var(--color-background-neutral);"));
        assert!(!css.contains("border-top"));
    }

    #[test]
    fn test_directive_deserialization() {
        let directive: SectionDirective =
            serde_json::from_str(r#"{"padding": "1200", "paddingTop": "600", "variant": "stroke"}"#)
                .unwrap();
        assert_eq!(directive.padding, Some(SpacingToken::S1200));
        assert_eq!(directive.padding_top, Some(SpacingToken::S600));
        assert_eq!(directive.element_type, ElementType::Section);

        let invalid = serde_json::from_str::<SectionDirective>(r#"{"padding": "9999"}"#);
        assert!(invalid.is_err());
    }
}
