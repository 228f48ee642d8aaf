//! Flex container and items
//!
//! A flex container sizes its *direct* children only. Each child gets a
//! basis from, in order of precedence:
//!
//! 1. its own [`ItemSize`] override, when the child is a [`FlexItem`]
//! 2. the container's fraction scheme, when the container wraps
//! 3. nothing, leaving the child sized by its content
//!
//! A nested flex container inside a child starts over with its own scheme,
//! so schemes never leak across levels.

use crate::context::LayoutContext;
use crate::node::Node;
use crate::style::{Declarations, CONTENT_MAX_WIDTH};
use layout_tokens::fraction::{self, Basis};
use layout_tokens::spacing::px;
use layout_tokens::{AlignPrimary, AlignSecondary, Direction, FractionScheme, ItemSize, SpacingToken};
use serde::{Deserialize, Serialize};

/// Layout directive of a flex container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexDirective {
    /// Constrain to the centred content width
    #[serde(default)]
    pub container: bool,
    /// Main axis
    #[serde(default)]
    pub direction: Direction,
    /// Wrap children onto new rows
    #[serde(default)]
    pub wrap: bool,
    /// Fraction scheme for children
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<FractionScheme>,
    /// Gap between children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<SpacingToken>,
    /// Main axis alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_primary: Option<AlignPrimary>,
    /// Cross axis alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_secondary: Option<AlignSecondary>,
}

impl FlexDirective {
    /// Resolve the container styles against a render context
    pub fn resolve(&self, ctx: &LayoutContext) -> FlexStyles {
        let resolver = ctx.resolver();
        let gap = self
            .gap
            .map(|token| resolver.resolve_spacing(token, ctx.tier))
            .unwrap_or(0.0);

        FlexStyles {
            direction: resolver.resolve_direction(self.direction, ctx.tier),
            wrap: self.wrap,
            gap,
            justify_content: self.align_primary.map(|align| align.css()),
            align_items: self.align_secondary.map(|align| align.css()),
            max_width: self.container.then_some(CONTENT_MAX_WIDTH),
        }
    }

    /// Basis of one direct child, if the container assigns one
    pub fn child_basis(&self, child: &Node, ctx: &LayoutContext) -> Option<Basis> {
        let scheme = self.scheme.unwrap_or(FractionScheme::Auto);

        if let Node::Item(FlexItem {
            size: Some(size), ..
        }) = child
        {
            return Some(ctx.resolver().resolve_item_size(*size, scheme, ctx.tier));
        }

        if self.wrap && scheme.is_fractional() {
            return Some(ctx.resolver().resolve_fraction(scheme, ctx.tier));
        }

        None
    }
}

/// Flex container component
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flex {
    /// Layout directive
    #[serde(flatten)]
    pub directive: FlexDirective,
    /// Children
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Flex {
    /// Create a row container
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row container
    pub fn row() -> Self {
        Self::new().with_direction(Direction::Row)
    }

    /// Create a column container
    pub fn column() -> Self {
        Self::new().with_direction(Direction::Column)
    }

    /// Constrain to the content width
    pub fn container(mut self) -> Self {
        self.directive.container = true;
        self
    }

    /// Set direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.directive.direction = direction;
        self
    }

    /// Enable wrapping
    pub fn wrap(mut self) -> Self {
        self.directive.wrap = true;
        self
    }

    /// Set the fraction scheme
    pub fn with_type(mut self, scheme: FractionScheme) -> Self {
        self.directive.scheme = Some(scheme);
        self
    }

    /// Set gap
    pub fn with_gap(mut self, gap: SpacingToken) -> Self {
        self.directive.gap = Some(gap);
        self
    }

    /// Set main axis alignment
    pub fn with_align_primary(mut self, align: AlignPrimary) -> Self {
        self.directive.align_primary = Some(align);
        self
    }

    /// Set cross axis alignment
    pub fn with_align_secondary(mut self, align: AlignSecondary) -> Self {
        self.directive.align_secondary = Some(align);
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

    /// Compute container styles for the current tier
    pub fn computed_styles(&self, ctx: &LayoutContext) -> FlexStyles {
        self.directive.resolve(ctx)
    }

    /// Compute the item styles of every direct child
    pub fn item_styles(&self, ctx: &LayoutContext) -> Vec<Option<ItemStyles>> {
        let gap = self.computed_styles(ctx).gap;
        self.children
            .iter()
            .map(|child| {
                self.directive
                    .child_basis(child, ctx)
                    .map(|basis| ItemStyles::new(basis, gap))
            })
            .collect()
    }
}

/// Flex child that overrides its share of the parent's scheme
///
/// The override applies to this item only; siblings keep the scheme basis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlexItem {
    /// Size override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ItemSize>,
    /// Item content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl FlexItem {
    /// Create an item without an override
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size override
    pub fn with_size(mut self, size: ItemSize) -> Self {
        self.size = Some(size);
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
}

/// Resolved flex container styles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlexStyles {
    /// Main axis
    pub direction: Direction,
    /// Whether children wrap
    pub wrap: bool,
    /// Gap in pixels
    pub gap: f32,
    /// CSS `justify-content`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<&'static str>,
    /// CSS `align-items`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<&'static str>,
    /// Max width for container boxes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
}

impl FlexStyles {
    /// CSS declarations
    pub fn declarations(&self) -> Declarations {
        let mut decls = Declarations::new();
        decls.push("display", "flex");
        decls.push("flex-direction", self.direction.as_str());
        if self.wrap {
            decls.push("flex-wrap", "wrap");
        }
        if self.gap > 0.0 {
            decls.push("gap", px(self.gap));
        }
        decls.push_opt("justify-content", self.justify_content);
        decls.push_opt("align-items", self.align_items);
        if let Some(max_width) = self.max_width {
            decls.push("width", "100%");
            decls.push("max-width", px(max_width));
            decls.push("margin-inline", "auto");
        }
        decls
    }
}

/// Resolved sizing of one flex child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStyles {
    /// Basis assigned by the parent
    pub basis: Basis,
    /// CSS `flex-basis`, gap-adjusted
    pub flex_basis: String,
    /// CSS `flex-grow`
    pub flex_grow: f32,
}

impl ItemStyles {
    /// Item styles for a basis inside a row with `gap` pixels between items
    pub fn new(basis: Basis, gap: f32) -> Self {
        Self {
            basis,
            flex_basis: basis.to_css(gap),
            flex_grow: basis.grow(),
        }
    }

    /// CSS declarations
    pub fn declarations(&self) -> Declarations {
        let mut decls = Declarations::new();
        decls.push("flex-basis", self.flex_basis.clone());
        decls.push("flex-grow", format!("{}", self.flex_grow));
        decls.push("flex-shrink", "0");
        decls.push("min-width", "0");
        decls
    }
}

/// Fraction a scheme assigns on a tier, for callers without a node tree
pub fn scheme_basis(scheme: FractionScheme, ctx: &LayoutContext) -> Basis {
    fraction::resolve(scheme, ctx.tier)
}
