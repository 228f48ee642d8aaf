//! Render context

use layout_tokens::{BreakpointFlags, Tier, TokenResolver};
use serde::{Deserialize, Serialize};
use viewport::{BreakpointDetector, ViewportSnapshot};

/// Everything a render pass resolves against
///
/// Captured once per pass. Components never query the detector on their
/// own, so a pass cannot observe two different tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutContext {
    /// Tier of the pass
    pub tier: Tier,
    /// Flags derived from the tier
    pub flags: BreakpointFlags,
    #[serde(skip)]
    resolver: TokenResolver,
}

impl LayoutContext {
    /// Context for a fixed tier
    pub fn for_tier(tier: Tier) -> Self {
        Self {
            tier,
            flags: tier.flags(),
            resolver: TokenResolver::new(),
        }
    }

    /// Context for a detector snapshot
    pub fn from_snapshot(snapshot: &ViewportSnapshot) -> Self {
        Self::for_tier(snapshot.tier)
    }

    /// Capture the detector's current tier
    pub fn capture(detector: &BreakpointDetector) -> Self {
        Self::from_snapshot(&detector.snapshot())
    }

    /// Resolver for the pass
    pub fn resolver(&self) -> &TokenResolver {
        &self.resolver
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::for_tier(Tier::smallest())
    }
}
