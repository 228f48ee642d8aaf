//! Fraction schemes and item bases
//!
//! A fraction scheme splits a flex row into equal columns. Items take one
//! column by default, and a size override lets a single item span more.
//! On the mobile tier every scheme collapses to a single full-width column.

use crate::error::TokenKind;
use crate::spacing::px;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// Named multi-column layout of a flex row
    pub enum FractionScheme (TokenKind::Fraction) {
        /// Items sized by their content
        Auto => "auto",
        /// Two columns
        Half => "half",
        /// Three columns
        Third => "third",
        /// Four columns
        Quarter => "quarter",
    }
}

vocabulary! {
    /// Per-item size override inside a fraction scheme
    pub enum ItemSize (TokenKind::ItemSize) {
        /// One column
        Minor => "minor",
        /// All columns but one
        Major => "major",
        /// The whole row
        Full => "full",
        /// Whatever space the siblings leave
        Fill => "fill",
    }
}

/// Column counts for schemes on tiers without an override
const BASE_COLUMNS: &[(FractionScheme, u8)] = &[
    (FractionScheme::Half, 2),
    (FractionScheme::Third, 3),
    (FractionScheme::Quarter, 4),
];

/// Tablet rows hold at most two quarter columns
const TABLET_COLUMNS: &[(FractionScheme, u8)] = &[(FractionScheme::Quarter, 2)];

impl FractionScheme {
    /// Number of columns the scheme uses on a tier
    ///
    /// `None` means content-sized items.
    pub fn columns(&self, tier: Tier) -> Option<u8> {
        match tier {
            Tier::Mobile => Some(1),
            Tier::Tablet => lookup(TABLET_COLUMNS, *self).or_else(|| lookup(BASE_COLUMNS, *self)),
            Tier::Desktop => lookup(BASE_COLUMNS, *self),
        }
    }

    /// Whether the scheme divides the row into columns on wide viewports
    pub fn is_fractional(&self) -> bool {
        !matches!(self, FractionScheme::Auto)
    }
}

fn lookup(table: &[(FractionScheme, u8)], scheme: FractionScheme) -> Option<u8> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == scheme)
        .map(|(_, columns)| *columns)
}

/// Resolved flex basis of one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Basis {
    /// Sized by content
    Content,
    /// Grows into remaining space
    Fill,
    /// Spans `span` of `of` equal columns
    Columns {
        /// Columns covered by the item
        span: u8,
        /// Columns in the row
        of: u8,
    },
}

impl Basis {
    /// A single column covering the whole row
    pub const FULL: Basis = Basis::Columns { span: 1, of: 1 };

    /// Percentage of the row, if the basis is a column span
    pub fn percent(&self) -> Option<f32> {
        match self {
            Basis::Columns { span, of } if *of > 0 => Some(*span as f32 * 100.0 / *of as f32),
            _ => None,
        }
    }

    /// Pixels to subtract from the percentage so `of` columns and their
    /// gaps fit exactly in one row
    ///
    /// A span of `k` out of `n` columns owns `k - 1` inner gaps and a
    /// `k / n` share of the `n - 1` row gaps, which leaves `gap * (1 - k/n)`.
    pub fn gap_offset(&self, gap: f32) -> f32 {
        match self {
            Basis::Columns { span, of } if *of > 0 => {
                gap * (1.0 - *span as f32 / *of as f32)
            }
            _ => 0.0,
        }
    }

    /// CSS `flex-basis` value
    pub fn to_css(&self, gap: f32) -> String {
        match self {
            Basis::Content | Basis::Fill => "auto".to_string(),
            Basis::Columns { .. } => {
                let percent = self.percent().unwrap_or(100.0);
                let offset = self.gap_offset(gap);
                if offset == 0.0 {
                    format!("{}%", format_percent(percent))
                } else {
                    format!("calc({}% - {})", format_percent(percent), px(offset))
                }
            }
        }
    }

    /// CSS `flex-grow` factor
    pub fn grow(&self) -> f32 {
        match self {
            Basis::Fill => 1.0,
            _ => 0.0,
        }
    }
}

fn format_percent(percent: f32) -> String {
    let rounded = (percent * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

/// Basis of a plain child in a row using `scheme`
///
/// On mobile this is always the full row, whatever the scheme.
pub fn resolve(scheme: FractionScheme, tier: Tier) -> Basis {
    if tier == Tier::Mobile {
        return Basis::FULL;
    }
    let basis = match scheme.columns(tier) {
        Some(of) => Basis::Columns { span: 1, of },
        None => Basis::Content,
    };
    tracing::trace!(%scheme, %tier, ?basis, "resolved fraction");
    basis
}

/// Basis of an item carrying an explicit size override
pub fn resolve_item(size: ItemSize, scheme: FractionScheme, tier: Tier) -> Basis {
    if tier == Tier::Mobile {
        return Basis::FULL;
    }
    match (size, scheme.columns(tier)) {
        (ItemSize::Full, _) => Basis::FULL,
        (ItemSize::Fill, _) => Basis::Fill,
        (ItemSize::Minor, Some(of)) => Basis::Columns { span: 1, of },
        (ItemSize::Major, Some(of)) => Basis::Columns {
            span: of.saturating_sub(1).max(1),
            of,
        },
        (ItemSize::Minor, None) => Basis::Content,
        (ItemSize::Major, None) => Basis::Fill,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_desktop_fractions() {
        assert_eq!(resolve(FractionScheme::Half, Tier::Desktop).percent(), Some(50.0));
        let third = resolve(FractionScheme::Third, Tier::Desktop).percent().unwrap();
        assert!(approx(third, 33.33));
        assert_eq!(resolve(FractionScheme::Quarter, Tier::Desktop).percent(), Some(25.0));
        assert_eq!(resolve(FractionScheme::Auto, Tier::Desktop), Basis::Content);
    }

    #[test]
    fn test_tablet_quarter_becomes_half() {
        assert_eq!(resolve(FractionScheme::Quarter, Tier::Tablet).percent(), Some(50.0));
        let third = resolve(FractionScheme::Third, Tier::Tablet).percent().unwrap();
        assert!(approx(third, 33.33));
    }

    #[test]
    fn test_mobile_collapse() {
        for scheme in FractionScheme::ALL {
            assert_eq!(resolve(*scheme, Tier::Mobile).percent(), Some(100.0));
            for size in ItemSize::ALL {
                assert_eq!(resolve_item(*size, *scheme, Tier::Mobile), Basis::FULL);
            }
        }
    }

    #[test]
    fn test_item_sizes() {
        assert_eq!(
            resolve_item(ItemSize::Major, FractionScheme::Third, Tier::Desktop),
            Basis::Columns { span: 2, of: 3 }
        );
        assert_eq!(
            resolve_item(ItemSize::Minor, FractionScheme::Quarter, Tier::Desktop),
            Basis::Columns { span: 1, of: 4 }
        );
        assert_eq!(
            resolve_item(ItemSize::Major, FractionScheme::Half, Tier::Desktop),
            Basis::Columns { span: 1, of: 2 }
        );
        assert_eq!(
            resolve_item(ItemSize::Full, FractionScheme::Third, Tier::Tablet),
            Basis::FULL
        );
        assert_eq!(
            resolve_item(ItemSize::Major, FractionScheme::Auto, Tier::Desktop),
            Basis::Fill
        );
    }

    #[test]
    fn test_gap_offset_fills_row() {
        let gap = 24.0;
        let third = Basis::Columns { span: 1, of: 3 };
        // Three columns plus two gaps add up to the full row
        assert!(approx(3.0 * third.gap_offset(gap), 2.0 * gap));
        let major = Basis::Columns { span: 2, of: 3 };
        assert!(approx(major.gap_offset(gap) + third.gap_offset(gap), gap));
        assert_eq!(Basis::FULL.gap_offset(gap), 0.0);
    }

    #[test]
    fn test_basis_css() {
        assert_eq!(Basis::FULL.to_css(24.0), "100%");
        assert_eq!(Basis::Columns { span: 1, of: 4 }.to_css(24.0), "calc(25% - 18px)");
        assert_eq!(Basis::Columns { span: 1, of: 3 }.to_css(0.0), "33.333%");
        assert_eq!(Basis::Content.to_css(24.0), "auto");
        assert_eq!(Basis::Fill.grow(), 1.0);
    }

    #[test]
    fn test_scheme_parse() {
        assert_eq!("third".parse::<FractionScheme>().unwrap(), FractionScheme::Third);
        assert!("fifth".parse::<FractionScheme>().is_err());
        assert!("huge".parse::<ItemSize>().is_err());
    }
}
