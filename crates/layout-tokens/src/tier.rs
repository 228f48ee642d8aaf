//! Viewport tiers and breakpoint thresholds
//!
//! Tiers partition the width domain with ascending thresholds. A boundary
//! width belongs to the higher tier, and anything that cannot be measured
//! falls into the smallest tier.

use crate::error::{LayoutError, Result, TokenKind};
use serde::{Deserialize, Serialize};

vocabulary! {
    /// A named viewport-width bucket
    #[derive(Default)]
    pub enum Tier (TokenKind::Tier) {
        /// Phones (< 768px)
        #[default]
        Mobile => "mobile",
        /// Tablets and small laptops (768px - 1199px)
        Tablet => "tablet",
        /// Desktops (>= 1200px)
        Desktop => "desktop",
    }
}

impl Tier {
    /// The tier used when no width is available
    pub fn smallest() -> Self {
        Tier::Mobile
    }

    /// The next smaller tier, if any
    pub fn below(self) -> Option<Tier> {
        match self {
            Tier::Mobile => None,
            Tier::Tablet => Some(Tier::Mobile),
            Tier::Desktop => Some(Tier::Tablet),
        }
    }

    /// This tier followed by every smaller tier, nearest first
    pub fn and_below(self) -> impl Iterator<Item = Tier> {
        std::iter::successors(Some(self), |tier| tier.below())
    }

    /// Derived boolean flags for this tier
    pub fn flags(self) -> BreakpointFlags {
        BreakpointFlags::from(self)
    }
}

/// Boolean views of a tier
///
/// Always built from a single [`Tier`] value, so the flags can never
/// disagree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointFlags {
    /// Mobile tier
    pub is_mobile: bool,
    /// Tablet tier
    pub is_tablet: bool,
    /// Desktop tier
    pub is_desktop: bool,
    /// Mobile or tablet
    pub is_tablet_down: bool,
    /// Tablet or desktop
    pub is_tablet_up: bool,
}

impl From<Tier> for BreakpointFlags {
    fn from(tier: Tier) -> Self {
        Self {
            is_mobile: tier == Tier::Mobile,
            is_tablet: tier == Tier::Tablet,
            is_desktop: tier == Tier::Desktop,
            is_tablet_down: tier <= Tier::Tablet,
            is_tablet_up: tier >= Tier::Tablet,
        }
    }
}

/// Breakpoint widths
pub mod breakpoints {
    use super::Tier;

    /// First width of the tablet tier (768px)
    pub const TABLET: f32 = 768.0;
    /// First width of the desktop tier (1200px)
    pub const DESKTOP: f32 = 1200.0;

    /// Check if width is tablet or wider
    pub fn is_tablet_up(width: f32) -> bool {
        width >= TABLET
    }

    /// Check if width is desktop or wider
    pub fn is_desktop(width: f32) -> bool {
        width >= DESKTOP
    }

    /// Get the tier for a width using the standard thresholds
    pub fn current(width: f32) -> Tier {
        super::Breakpoints::STANDARD.tier_for(Some(width))
    }
}

/// Ascending thresholds splitting widths into tiers
///
/// Only constructible through [`Breakpoints::new`], so every value in
/// circulation is a valid partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoints {
    tablet_min: f32,
    desktop_min: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Breakpoints {
    /// The thresholds every composition is designed against
    pub const STANDARD: Breakpoints = Breakpoints {
        tablet_min: breakpoints::TABLET,
        desktop_min: breakpoints::DESKTOP,
    };

    /// Create thresholds, rejecting anything that is not a strict ascending
    /// sequence of positive finite widths
    pub fn new(tablet_min: f32, desktop_min: f32) -> Result<Self> {
        if !tablet_min.is_finite() || !desktop_min.is_finite() {
            return Err(LayoutError::InvalidBreakpoints(format!(
                "thresholds must be finite (tablet {}, desktop {})",
                tablet_min, desktop_min
            )));
        }
        if tablet_min <= 0.0 {
            return Err(LayoutError::InvalidBreakpoints(format!(
                "tablet threshold must be positive, got {}",
                tablet_min
            )));
        }
        if desktop_min <= tablet_min {
            return Err(LayoutError::InvalidBreakpoints(format!(
                "desktop threshold {} must be above tablet threshold {}",
                desktop_min, tablet_min
            )));
        }
        Ok(Self {
            tablet_min,
            desktop_min,
        })
    }

    /// First width of the tablet tier
    pub fn tablet_min(&self) -> f32 {
        self.tablet_min
    }

    /// First width of the desktop tier
    pub fn desktop_min(&self) -> f32 {
        self.desktop_min
    }

    /// The tier containing `width`
    ///
    /// `None`, NaN, zero and negative widths resolve to [`Tier::Mobile`].
    pub fn tier_for(&self, width: Option<f32>) -> Tier {
        match width {
            Some(w) if w >= self.desktop_min => Tier::Desktop,
            Some(w) if w >= self.tablet_min => Tier::Tablet,
            _ => Tier::Mobile,
        }
    }

    /// Half-open width range `[start, end)` covered by a tier
    pub fn range(&self, tier: Tier) -> (f32, Option<f32>) {
        match tier {
            Tier::Mobile => (f32::NEG_INFINITY, Some(self.tablet_min)),
            Tier::Tablet => (self.tablet_min, Some(self.desktop_min)),
            Tier::Desktop => (self.desktop_min, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Mobile < Tier::Tablet);
        assert!(Tier::Tablet < Tier::Desktop);
        assert_eq!(Tier::default(), Tier::Mobile);
        assert_eq!(Tier::smallest(), Tier::Mobile);
    }

    #[test]
    fn test_and_below() {
        let chain: Vec<Tier> = Tier::Desktop.and_below().collect();
        assert_eq!(chain, vec![Tier::Desktop, Tier::Tablet, Tier::Mobile]);
        let chain: Vec<Tier> = Tier::Mobile.and_below().collect();
        assert_eq!(chain, vec![Tier::Mobile]);
    }

    #[test]
    fn test_breakpoint_current() {
        assert_eq!(breakpoints::current(320.0), Tier::Mobile);
        assert_eq!(breakpoints::current(767.9), Tier::Mobile);
        assert_eq!(breakpoints::current(768.0), Tier::Tablet);
        assert_eq!(breakpoints::current(1199.0), Tier::Tablet);
        assert_eq!(breakpoints::current(1200.0), Tier::Desktop);
        assert_eq!(breakpoints::current(1440.0), Tier::Desktop);
    }

    #[test]
    fn test_breakpoint_checks() {
        assert!(!breakpoints::is_tablet_up(767.0));
        assert!(breakpoints::is_tablet_up(768.0));
        assert!(!breakpoints::is_desktop(1199.5));
        assert!(breakpoints::is_desktop(1200.0));
    }

    #[test]
    fn test_unmeasurable_width_is_mobile() {
        let bp = Breakpoints::STANDARD;
        assert_eq!(bp.tier_for(None), Tier::Mobile);
        assert_eq!(bp.tier_for(Some(0.0)), Tier::Mobile);
        assert_eq!(bp.tier_for(Some(-50.0)), Tier::Mobile);
        assert_eq!(bp.tier_for(Some(f32::NAN)), Tier::Mobile);
    }

    #[test]
    fn test_breakpoints_validation() {
        assert!(Breakpoints::new(600.0, 1024.0).is_ok());
        assert!(Breakpoints::new(1024.0, 600.0).is_err());
        assert!(Breakpoints::new(800.0, 800.0).is_err());
        assert!(Breakpoints::new(0.0, 800.0).is_err());
        assert!(Breakpoints::new(f32::NAN, 800.0).is_err());
        assert!(Breakpoints::new(600.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_ranges_are_contiguous() {
        let bp = Breakpoints::STANDARD;
        let (_, mobile_end) = bp.range(Tier::Mobile);
        let (tablet_start, tablet_end) = bp.range(Tier::Tablet);
        let (desktop_start, desktop_end) = bp.range(Tier::Desktop);
        assert_eq!(mobile_end, Some(tablet_start));
        assert_eq!(tablet_end, Some(desktop_start));
        assert_eq!(desktop_end, None);
    }

    #[test]
    fn test_flags_consistency() {
        let mobile = Tier::Mobile.flags();
        assert!(mobile.is_mobile && mobile.is_tablet_down && !mobile.is_tablet_up);

        let tablet = Tier::Tablet.flags();
        assert!(tablet.is_tablet && tablet.is_tablet_down && tablet.is_tablet_up);
        assert!(!tablet.is_mobile && !tablet.is_desktop);

        let desktop = Tier::Desktop.flags();
        assert!(desktop.is_desktop && desktop.is_tablet_up && !desktop.is_tablet_down);
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("tablet".parse::<Tier>().unwrap(), Tier::Tablet);
        assert!("phablet".parse::<Tier>().unwrap_err().is_invalid_token());
        assert_eq!(Tier::ALL, &[Tier::Mobile, Tier::Tablet, Tier::Desktop]);
        assert_eq!(Tier::Tablet.to_string(), "tablet");
    }

    #[test]
    fn test_tier_deserialization_is_strict() {
        assert_eq!(serde_json::from_str::<Tier>("\"desktop\"").unwrap(), Tier::Desktop);
        let err = serde_json::from_str::<Tier>("\"phablet\"").unwrap_err();
        assert!(err.to_string().contains("Invalid tier token: \"phablet\""));
    }

    proptest! {
        /// Every width lands in exactly the tier whose range contains it
        #[test]
        fn prop_tier_matches_range(width in -100.0f32..5000.0) {
            let bp = Breakpoints::STANDARD;
            let tier = bp.tier_for(Some(width));
            let (start, end) = bp.range(tier);
            prop_assert!(width >= start || tier == Tier::Mobile);
            prop_assert!(end.map_or(true, |end| width < end));
        }
    }

    #[test]
    fn test_breakpoint_serialization() {
        let json = serde_json::to_string(&Tier::Desktop).unwrap();
        assert_eq!(json, "\"desktop\"");
        let flags = serde_json::to_value(Tier::Mobile.flags()).unwrap();
        assert_eq!(flags["isTabletDown"], true);
    }
}
