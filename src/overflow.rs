//! Edge-triggered overflow detector with hysteresis
//!
//! Used where "natural content size" competes with "available space" and the
//! reaction to overflowing (compacting controls, showing a scroll cue) itself
//! changes the measurement. Collapsing and expanding use different trigger
//! points, separated by the extra width the expanded form needs, so the
//! detector settles instead of flipping every frame.

/// Tolerance for sub-pixel measurement noise
pub const OVERFLOW_EPSILON: f32 = 8.0;

/// Boolean overflow state with separate collapse and expand thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowHysteresis {
    collapsed: bool,
    epsilon: f32,
}

impl Default for OverflowHysteresis {
    fn default() -> Self {
        Self::new()
    }
}

impl OverflowHysteresis {
    pub fn new() -> Self {
        Self::with_epsilon(OVERFLOW_EPSILON)
    }

    pub fn with_epsilon(epsilon: f32) -> Self {
        Self {
            collapsed: false,
            epsilon,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Forget the current state (measured element was torn down)
    pub fn reset(&mut self) {
        self.collapsed = false;
    }

    /// Feed a new measurement and return the resulting collapsed state
    ///
    /// * `content` - natural size of the content as currently rendered
    /// * `available` - space the content has to fit in
    /// * `expanded_extra` - additional size the expanded form needs over the
    ///   collapsed one
    ///
    /// Expanded: collapses once `content - available > -epsilon`.
    /// Collapsed: stays collapsed while `content - available + expanded_extra
    /// > -epsilon`, i.e. expands only when the slack also fits the extra size.
    ///
    /// Non-finite measurements leave the state unchanged.
    pub fn evaluate(&mut self, content: f32, available: f32, expanded_extra: f32) -> bool {
        let overflow = content - available;
        if !overflow.is_finite() || !expanded_extra.is_finite() {
            return self.collapsed;
        }

        let next = if self.collapsed {
            overflow + expanded_extra > -self.epsilon
        } else {
            overflow > -self.epsilon
        };

        if next != self.collapsed {
            tracing::debug!(
                target: "overflow",
                overflow,
                expanded_extra,
                collapsed = next,
                "overflow state changed"
            );
        }
        self.collapsed = next;
        self.collapsed
    }
}
