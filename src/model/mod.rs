//! Application model - the complete state of the panel host
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod ui;

pub use ui::UiState;

use crate::animator::{animator_for, MotionPreference, SizeAnimator};
use crate::config::{DockConfig, PersistedLayout};
use crate::panel::{PanelSizingEngine, PanelSnapshot, Viewport};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Panel sizing state machine
    pub engine: PanelSizingEngine,
    /// Displays the engine's target size
    pub animator: Box<dyn SizeAnimator>,
    /// UI state (pointer capture, overflow detectors)
    pub ui: UiState,
    /// Current window dimensions
    pub viewport: Viewport,
    /// Active motion preference
    pub motion: MotionPreference,
}

impl AppModel {
    /// Create a model from persisted configuration
    pub fn new(config: &DockConfig, viewport: Viewport) -> Self {
        let engine = PanelSizingEngine::new(config.panel_state());
        let animator = animator_for(config.motion, engine.target_size());
        Self {
            engine,
            animator,
            ui: UiState::new(),
            viewport,
            motion: config.motion,
        }
    }

    /// Render snapshot for the current frame
    pub fn snapshot(&self) -> PanelSnapshot {
        self.engine.snapshot(self.animator.current())
    }

    /// Layout to hand to the persisted size store
    pub fn persisted_layout(&self) -> PersistedLayout {
        PersistedLayout::from(self.engine.state())
    }

    /// Swap the animator for one matching `motion`, keeping the displayed size
    pub fn set_motion(&mut self, motion: MotionPreference) {
        if self.motion == motion {
            return;
        }
        let current = self.animator.current();
        let target = self.animator.target();
        let mut animator = animator_for(motion, current);
        animator.set_target(target);
        self.animator = animator;
        self.motion = motion;
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(&DockConfig::default(), Viewport::default())
    }
}
