//! Host measurement abstraction

/// Supplies the current viewport width
///
/// Hosts without a measurement context (server rendering, tests) return
/// `None`, which the detector treats as the smallest tier.
#[cfg_attr(test, mockall::automock)]
pub trait ViewportSource {
    /// Current width in CSS pixels
    fn width(&self) -> Option<f32>;
}

/// A viewport that never changes size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedViewport(pub Option<f32>);

impl FixedViewport {
    /// A viewport of the given width
    pub fn new(width: f32) -> Self {
        FixedViewport(Some(width))
    }

    /// A host that cannot measure
    pub fn unmeasured() -> Self {
        FixedViewport(None)
    }
}

impl ViewportSource for FixedViewport {
    fn width(&self) -> Option<f32> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_viewport() {
        assert_eq!(FixedViewport::new(1024.0).width(), Some(1024.0));
        assert_eq!(FixedViewport::unmeasured().width(), None);
    }
}
