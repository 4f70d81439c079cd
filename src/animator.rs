//! Size animation collaborators
//!
//! The sizing engine only ever hands out targets. Anything implementing
//! `SizeAnimator` can display them: an exponential follower for normal
//! motion, or an instant one for reduced-motion settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::panel::{TargetUpdate, Transition};

/// Distance below which an animation snaps onto its target
const SETTLE_THRESHOLD: f32 = 0.5;

/// Default time constant for `SmoothAnimator`
pub const DEFAULT_TIME_CONSTANT: Duration = Duration::from_millis(60);

/// Motion setting chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

/// Moves a displayed size toward a target over time
pub trait SizeAnimator: std::fmt::Debug {
    /// Start heading toward `target`, possibly mid-flight
    fn set_target(&mut self, target: f32);

    /// Display `value` right away and stop any running animation
    fn jump_to(&mut self, value: f32);

    /// Size currently displayed
    fn current(&self) -> f32;

    /// Size being approached
    fn target(&self) -> f32;

    /// Advance by `elapsed`; returns true while still moving
    fn tick(&mut self, elapsed: Duration) -> bool;

    fn is_settled(&self) -> bool {
        self.current() == self.target()
    }

    /// Apply an engine target using the requested transition
    fn apply(&mut self, update: TargetUpdate) {
        match update.transition {
            Transition::Immediate => self.jump_to(update.size),
            Transition::Animated => self.set_target(update.size),
        }
    }
}

/// Exponential approach: closes `1 - e^(-dt/tau)` of the gap per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothAnimator {
    current: f32,
    target: f32,
    time_constant: Duration,
}

impl SmoothAnimator {
    pub fn new(initial: f32) -> Self {
        Self::with_time_constant(initial, DEFAULT_TIME_CONSTANT)
    }

    pub fn with_time_constant(initial: f32, time_constant: Duration) -> Self {
        Self {
            current: initial,
            target: initial,
            time_constant,
        }
    }
}

impl SizeAnimator for SmoothAnimator {
    fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    fn jump_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    fn current(&self) -> f32 {
        self.current
    }

    fn target(&self) -> f32 {
        self.target
    }

    fn tick(&mut self, elapsed: Duration) -> bool {
        if self.is_settled() {
            return false;
        }

        let tau = self.time_constant.as_secs_f32();
        let blend = if tau > 0.0 {
            1.0 - (-elapsed.as_secs_f32() / tau).exp()
        } else {
            1.0
        };
        self.current += (self.target - self.current) * blend;

        if (self.target - self.current).abs() < SETTLE_THRESHOLD {
            self.current = self.target;
        }
        !self.is_settled()
    }
}

/// Applies every target immediately
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstantAnimator {
    value: f32,
}

impl InstantAnimator {
    pub fn new(initial: f32) -> Self {
        Self { value: initial }
    }
}

impl SizeAnimator for InstantAnimator {
    fn set_target(&mut self, target: f32) {
        self.value = target;
    }

    fn jump_to(&mut self, value: f32) {
        self.value = value;
    }

    fn current(&self) -> f32 {
        self.value
    }

    fn target(&self) -> f32 {
        self.value
    }

    fn tick(&mut self, _elapsed: Duration) -> bool {
        false
    }
}

/// Build the animator matching a motion preference
pub fn animator_for(preference: MotionPreference, initial: f32) -> Box<dyn SizeAnimator> {
    match preference {
        MotionPreference::Full => Box::new(SmoothAnimator::new(initial)),
        MotionPreference::Reduced => Box::new(InstantAnimator::new(initial)),
    }
}
