//! Generic token resolution
//!
//! Typed callers use [`crate::spacing::resolve`] and
//! [`crate::fraction::resolve`] directly. The [`TokenResolver`] serves
//! callers holding raw strings (design-tool exports, JSON directives): it
//! validates the string against the closed vocabulary first and refuses to
//! produce a value for anything it does not recognise.

use crate::directive::{
    AlignPrimary, AlignSecondary, CardAlign, CardPadding, Direction, ElementType, Orientation,
    Platform, SectionVariant,
};
use crate::error::{Result, TokenKind};
use crate::fraction::{self, Basis, FractionScheme, ItemSize};
use crate::spacing::{self, SpacingToken};
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// Concrete value a raw token resolves to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ResolvedValue {
    /// Pixel length
    Length(f32),
    /// Flex basis
    Basis(Basis),
    /// Flex direction
    Direction(Direction),
    /// Keyword that passed validation and needs no tier-specific mapping
    Keyword(String),
}

/// Stateless resolver over the fixed token tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenResolver;

impl TokenResolver {
    /// Create a resolver
    pub fn new() -> Self {
        TokenResolver
    }

    /// Resolve a spacing token
    pub fn resolve_spacing(&self, token: SpacingToken, tier: Tier) -> f32 {
        spacing::resolve(token, tier)
    }

    /// Resolve a fraction scheme to the basis of a plain child
    pub fn resolve_fraction(&self, scheme: FractionScheme, tier: Tier) -> Basis {
        fraction::resolve(scheme, tier)
    }

    /// Resolve an item size override within a scheme
    pub fn resolve_item_size(&self, size: ItemSize, scheme: FractionScheme, tier: Tier) -> Basis {
        fraction::resolve_item(size, scheme, tier)
    }

    /// Resolve a requested flex direction; always the literal request
    pub fn resolve_direction(&self, direction: Direction, tier: Tier) -> Direction {
        direction.resolve(tier)
    }

    /// Resolve a raw token of the given kind
    ///
    /// Item sizes resolve against the `auto` scheme; use
    /// [`TokenResolver::resolve_item_size`] when the scheme is known.
    pub fn resolve(&self, kind: TokenKind, raw: &str, tier: Tier) -> Result<ResolvedValue> {
        let value = match kind {
            TokenKind::Spacing => ResolvedValue::Length(spacing::resolve_str(raw, tier)?),
            TokenKind::Fraction => {
                ResolvedValue::Basis(self.resolve_fraction(raw.parse()?, tier))
            }
            TokenKind::ItemSize => ResolvedValue::Basis(self.resolve_item_size(
                raw.parse()?,
                FractionScheme::Auto,
                tier,
            )),
            TokenKind::Direction => {
                ResolvedValue::Direction(self.resolve_direction(raw.parse()?, tier))
            }
            TokenKind::Orientation => keyword(raw.parse::<Orientation>()?.as_str()),
            TokenKind::AlignPrimary => keyword(raw.parse::<AlignPrimary>()?.css()),
            TokenKind::AlignSecondary => keyword(raw.parse::<AlignSecondary>()?.css()),
            TokenKind::Variant => keyword(raw.parse::<SectionVariant>()?.as_str()),
            TokenKind::CardAlign => keyword(raw.parse::<CardAlign>()?.as_str()),
            TokenKind::CardPadding => {
                let padding: CardPadding = raw.parse()?;
                ResolvedValue::Length(spacing::resolve(padding.token(), tier))
            }
            TokenKind::ElementType => keyword(raw.parse::<ElementType>()?.as_str()),
            TokenKind::Tier => keyword(raw.parse::<Tier>()?.as_str()),
            TokenKind::Platform => keyword(raw.parse::<Platform>()?.as_str()),
        };
        Ok(value)
    }
}

fn keyword(text: &str) -> ResolvedValue {
    ResolvedValue::Keyword(text.to_string())
}
