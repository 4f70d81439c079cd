//! Dock configuration persistence
//!
//! Stores the panel layout in `~/.config/dockside/config.yaml`: docking edge,
//! visibility, collapsed flag, the three per-edge sizes, and the motion
//! preference.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animator::MotionPreference;
use crate::panel::{Edge, PanelSizes, PanelState};

/// Panel layout that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    #[serde(default = "default_position")]
    pub position: Edge,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub sizes: PanelSizes,
    #[serde(default)]
    pub motion: MotionPreference,
}

fn default_position() -> Edge {
    Edge::Bottom
}

fn default_true() -> bool {
    true
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            position: default_position(),
            visible: true,
            collapsed: false,
            sizes: PanelSizes::default(),
            motion: MotionPreference::default(),
        }
    }
}

/// Layout fields written back after the panel changes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersistedLayout {
    pub position: Edge,
    pub visible: bool,
    pub collapsed: bool,
    pub sizes: PanelSizes,
}

impl DockConfig {
    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<DockConfig>(&content) {
                Ok(mut config) => {
                    config.sizes = config.sizes.sanitized();
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Initial panel state described by this config
    pub fn panel_state(&self) -> PanelState {
        PanelState {
            position: self.position,
            visible: self.visible,
            collapsed: self.collapsed,
            sizes: self.sizes.sanitized(),
        }
    }

    /// Fold a persisted layout back into this config
    pub fn apply_layout(&mut self, layout: PersistedLayout) {
        self.position = layout.position;
        self.visible = layout.visible;
        self.collapsed = layout.collapsed;
        self.sizes = layout.sizes;
    }
}

impl From<&PanelState> for PersistedLayout {
    fn from(state: &PanelState) -> Self {
        Self {
            position: state.position,
            visible: state.visible,
            collapsed: state.collapsed,
            sizes: state.sizes,
        }
    }
}
