//! Page tree and recursive resolution
//!
//! A page is described as a tree of [`Node`]s, either built in code or
//! loaded from JSON. [`Node::render`] walks the tree once with a single
//! [`LayoutContext`], so every node in one pass sees the same tier.

use crate::card::{Card, CardStyles};
use crate::context::LayoutContext;
use crate::flex::{Flex, FlexItem, FlexStyles, ItemStyles};
use crate::section::{Section, SectionStyles};
use crate::style::Declarations;
use layout_tokens::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of a page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "kebab-case")]
pub enum Node {
    /// Top-level region
    Section(Section),
    /// Flex container
    Flex(Flex),
    /// Flex child with a size override
    Item(FlexItem),
    /// Card leaf
    Card(Card),
    /// Host-rendered component
    Leaf(Leaf),
}

/// Component the host renders itself (text, icons, images, buttons)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Leaf {
    /// Component name
    pub name: String,
    /// Props passed through untouched
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Leaf {
    /// Create a leaf without attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl Node {
    /// Host component node
    pub fn leaf(name: impl Into<String>) -> Node {
        Node::Leaf(Leaf::new(name))
    }

    /// Parse a page tree from JSON
    ///
    /// Unknown tokens anywhere in the tree fail the whole parse.
    pub fn from_json(json: &str) -> Result<Node> {
        let node = serde_json::from_str(json)?;
        Ok(node)
    }

    /// Serialize the tree back to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Name of the node as it appears in resolved output
    pub fn name(&self) -> &str {
        match self {
            Node::Section(section) => section.directive.element_type.as_str(),
            Node::Flex(_) => "flex",
            Node::Item(_) => "flex-item",
            Node::Card(_) => "card",
            Node::Leaf(leaf) => &leaf.name,
        }
    }

    /// Direct children
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section(section) => &section.children,
            Node::Flex(flex) => &flex.children,
            Node::Item(item) => &item.children,
            Node::Card(card) => &card.children,
            Node::Leaf(_) => &[],
        }
    }

    /// Resolve the whole tree for one render pass
    pub fn render(&self, ctx: &LayoutContext) -> ResolvedNode {
        tracing::debug!(tier = %ctx.tier, root = self.name(), "rendering page tree");
        self.resolve(ctx, None)
    }

    fn resolve(&self, ctx: &LayoutContext, item: Option<ItemStyles>) -> ResolvedNode {
        let mut resolved = ResolvedNode {
            name: self.name().to_string(),
            style: ResolvedStyle::None,
            item,
            attributes: BTreeMap::new(),
            asset: None,
            children: Vec::new(),
        };

        match self {
            Node::Section(section) => {
                resolved.style = ResolvedStyle::Section(section.computed_styles(ctx));
                resolved.children = resolve_plain(&section.children, ctx);
            }
            Node::Flex(flex) => {
                resolved.style = ResolvedStyle::Flex(flex.computed_styles(ctx));
                resolved.children = flex
                    .children
                    .iter()
                    .zip(flex.item_styles(ctx))
                    .map(|(child, item)| child.resolve(ctx, item))
                    .collect();
            }
            Node::Item(flex_item) => {
                resolved.children = resolve_plain(&flex_item.children, ctx);
            }
            Node::Card(card) => {
                resolved.style = ResolvedStyle::Card(card.computed_styles(ctx));
                resolved.asset = card
                    .asset
                    .as_ref()
                    .map(|asset| Box::new(asset.resolve(ctx, None)));
                resolved.children = resolve_plain(&card.children, ctx);
            }
            Node::Leaf(leaf) => {
                resolved.attributes = leaf.attributes.clone();
            }
        }

        resolved
    }
}

fn resolve_plain(children: &[Node], ctx: &LayoutContext) -> Vec<ResolvedNode> {
    children.iter().map(|child| child.resolve(ctx, None)).collect()
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

impl From<Flex> for Node {
    fn from(flex: Flex) -> Self {
        Node::Flex(flex)
    }
}

impl From<FlexItem> for Node {
    fn from(item: FlexItem) -> Self {
        Node::Item(item)
    }
}

impl From<Card> for Node {
    fn from(card: Card) -> Self {
        Node::Card(card)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

/// Styles a node resolved to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "styles", rename_all = "lowercase")]
pub enum ResolvedStyle {
    /// Section box
    Section(SectionStyles),
    /// Flex container
    Flex(FlexStyles),
    /// Card box
    Card(CardStyles),
    /// No styles of its own
    None,
}

impl ResolvedStyle {
    /// CSS declarations
    pub fn declarations(&self) -> Declarations {
        match self {
            ResolvedStyle::Section(styles) => styles.declarations(),
            ResolvedStyle::Flex(styles) => styles.declarations(),
            ResolvedStyle::Card(styles) => styles.declarations(),
            ResolvedStyle::None => Declarations::new(),
        }
    }
}

/// Resolved page tree handed to the host renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedNode {
    /// Element or component name
    pub name: String,
    /// Own styles
    pub style: ResolvedStyle,
    /// Sizing assigned by the parent flex container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemStyles>,
    /// Leaf props
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Resolved card asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Box<ResolvedNode>>,
    /// Resolved children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    /// Own styles followed by the sizing from the parent
    pub fn declarations(&self) -> Declarations {
        let mut decls = self.style.declarations();
        if let Some(item) = &self.item {
            decls.extend(item.declarations());
        }
        decls
    }

    /// Inline style text
    pub fn to_css(&self) -> String {
        self.declarations().to_css()
    }

    /// First node with `name`, depth first, including this one
    pub fn find(&self, name: &str) -> Option<&ResolvedNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Every node in depth-first order
    pub fn walk(&self) -> Vec<&ResolvedNode> {
        let mut nodes = vec![self];
        for child in &self.children {
            nodes.extend(child.walk());
        }
        nodes
    }
}
