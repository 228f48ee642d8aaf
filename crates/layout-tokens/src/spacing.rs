//! Spacing scale
//!
//! Spacing tokens are relative magnitudes shared by gaps and paddings. The
//! mobile table is the base and defines every token; larger tiers only
//! carry overrides. A token without an override on a tier takes the value
//! of the nearest smaller tier that defines it.

use crate::error::{Result, TokenKind};
use crate::tier::Tier;

vocabulary! {
    /// Relative spacing magnitude, ordered from smallest to largest
    pub enum SpacingToken (TokenKind::Spacing) {
        /// No space
        Zero => "0",
        /// Hairline
        S050 => "050",
        /// Extra extra small
        S100 => "100",
        /// Extra small
        S150 => "150",
        /// Small
        S200 => "200",
        /// Small-medium
        S300 => "300",
        /// Medium
        S400 => "400",
        /// Large
        S600 => "600",
        /// Extra large
        S800 => "800",
        /// 2x large
        S1200 => "1200",
        /// 3x large
        S1600 => "1600",
        /// 4x large
        S2400 => "2400",
        /// Hero scale
        S4000 => "4000",
    }
}

/// Number of tokens in the scale
pub const TOKEN_COUNT: usize = 13;

/// Base pixel values, indexed by token position. Covers every token.
const MOBILE_SCALE: [f32; TOKEN_COUNT] = [
    0.0, 2.0, 4.0, 6.0, 8.0, 12.0, 16.0, 24.0, 32.0, 40.0, 48.0, 64.0, 96.0,
];

const TABLET_OVERRIDES: &[(SpacingToken, f32)] = &[
    (SpacingToken::S1600, 56.0),
    (SpacingToken::S2400, 80.0),
    (SpacingToken::S4000, 128.0),
];

const DESKTOP_OVERRIDES: &[(SpacingToken, f32)] = &[
    (SpacingToken::S1200, 48.0),
    (SpacingToken::S1600, 64.0),
    (SpacingToken::S2400, 96.0),
    (SpacingToken::S4000, 160.0),
];

/// Value a tier defines explicitly for a token, without fallback
pub fn defined(token: SpacingToken, tier: Tier) -> Option<f32> {
    match tier {
        Tier::Mobile => Some(MOBILE_SCALE[token as usize]),
        Tier::Tablet => lookup(TABLET_OVERRIDES, token),
        Tier::Desktop => lookup(DESKTOP_OVERRIDES, token),
    }
}

fn lookup(table: &[(SpacingToken, f32)], token: SpacingToken) -> Option<f32> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == token)
        .map(|(_, value)| *value)
}

/// Resolve a spacing token to pixels for a tier
pub fn resolve(token: SpacingToken, tier: Tier) -> f32 {
    let value = tier
        .and_below()
        .find_map(|candidate| defined(token, candidate))
        .unwrap_or(MOBILE_SCALE[token as usize]);
    tracing::trace!(%token, %tier, value, "resolved spacing");
    value
}

/// Resolve a raw spacing string, failing on anything outside the scale
pub fn resolve_str(raw: &str, tier: Tier) -> Result<f32> {
    let token: SpacingToken = raw.parse()?;
    Ok(resolve(token, tier))
}

/// Format a pixel value the way style sheets expect it
pub fn px(value: f32) -> String {
    let value = (value * 1000.0).round() / 1000.0;
    if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{}px", value)
    }
}
