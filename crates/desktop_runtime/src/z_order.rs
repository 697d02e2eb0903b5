//! Stacking counter shared by every window.

/// Value returned by [`ZOrderCounter::current`] before any window has been stacked.
pub const BASE_Z_ORDER: u32 = 0;

/// Process-lifetime monotonic z-order source.
///
/// Every open, focus, bring-to-front and drag/resize start draws a fresh value, so the most
/// recently touched window always holds the strictly greatest z-order even when the values held
/// by the others are sparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZOrderCounter {
    current: u32,
}

impl Default for ZOrderCounter {
    fn default() -> Self {
        Self {
            current: BASE_Z_ORDER,
        }
    }
}

impl ZOrderCounter {
    /// Advances the counter and returns the new top value.
    pub fn next(&mut self) -> u32 {
        self.current = self.current.saturating_add(1);
        self.current
    }

    /// Highest value handed out so far.
    pub fn current(&self) -> u32 {
        self.current
    }
}
