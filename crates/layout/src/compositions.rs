//! Page sections assembled from the layout primitives
//!
//! Compositions that depend on the tier take the [`BreakpointFlags`] of the
//! current render pass, so a page built and rendered from one
//! [`LayoutContext`](crate::LayoutContext) never mixes tiers.

use crate::flex::{Flex, FlexItem};
use crate::node::{Leaf, Node};
use crate::section::Section;
use layout_tokens::{
    AlignPrimary, AlignSecondary, BreakpointFlags, ElementType, FractionScheme, ItemSize,
    SectionVariant, SpacingToken,
};

/// Footer link columns
const FOOTER_LINK_LISTS: [&str; 3] = ["Use cases", "Explore", "Resources"];

/// Footer social icons
const FOOTER_ICONS: [&str; 4] = ["twitter", "instagram", "youtube", "linkedin"];

/// Hero banner: neutral section with a centred column of content
pub fn hero(children: Vec<Node>) -> Section {
    Section::new()
        .with_padding(SpacingToken::S4000)
        .with_variant(SectionVariant::Neutral)
        .child(
            Flex::column()
                .container()
                .with_align_primary(AlignPrimary::Center)
                .with_align_secondary(AlignSecondary::Center)
                .with_gap(SpacingToken::S1600)
                .with_children(children),
        )
}

/// Link list density for a tier
pub fn list_density(flags: &BreakpointFlags) -> &'static str {
    if flags.is_tablet_down {
        "tight"
    } else {
        "default"
    }
}

/// Site footer: brand column plus three link lists in a quarter grid
pub fn footer(flags: &BreakpointFlags) -> Section {
    let density = list_density(flags);

    let icons: Vec<Node> = FOOTER_ICONS
        .iter()
        .map(|icon| {
            Node::from(
                Leaf::new("icon")
                    .with_attribute("name", *icon)
                    .with_attribute("size", "24"),
            )
        })
        .collect();

    let brand = FlexItem::new().with_size(ItemSize::Minor).child(
        Flex::column()
            .with_gap(SpacingToken::S600)
            .with_align_secondary(AlignSecondary::Start)
            .child(FlexItem::new().child(Node::leaf("logo")))
            .child(
                Flex::row()
                    .with_gap(SpacingToken::S400)
                    .with_align_secondary(AlignSecondary::Start)
                    .with_children(icons),
            ),
    );

    let mut grid = Flex::new()
        .container()
        .wrap()
        .with_type(FractionScheme::Quarter)
        .with_gap(SpacingToken::S600)
        .child(brand);
    for title in FOOTER_LINK_LISTS {
        grid = grid.child(
            Leaf::new("text-link-list")
                .with_attribute("title", title)
                .with_attribute("density", density),
        );
    }

    Section::new()
        .with_element(ElementType::Footer)
        .with_variant(SectionVariant::Stroke)
        .with_padding_top(SpacingToken::S1600)
        .with_padding_bottom(SpacingToken::S4000)
        .child(grid)
}

/// Frequently asked questions: heading above a centred two-thirds accordion
pub fn faqs(flags: &BreakpointFlags) -> Section {
    let (padding, gap) = if flags.is_mobile {
        (SpacingToken::S600, SpacingToken::S600)
    } else {
        (SpacingToken::S1600, SpacingToken::S1200)
    };

    Section::new()
        .with_padding(padding)
        .with_variant(SectionVariant::Stroke)
        .child(
            Flex::column()
                .container()
                .with_align_secondary(AlignSecondary::Stretch)
                .with_gap(gap)
                .child(
                    Leaf::new("text-content-heading")
                        .with_attribute("align", "center")
                        .with_attribute("heading", "Heading")
                        .with_attribute("subheading", "Subheading"),
                )
                .child(
                    Flex::new()
                        .container()
                        .with_type(FractionScheme::Third)
                        .with_align_primary(AlignPrimary::Center)
                        .child(FlexItem::new().with_size(ItemSize::Major).child(Node::leaf("accordion"))),
                ),
        )
}
