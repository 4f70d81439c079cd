//! dockside - sizing engine for a dockable DevTools panel
//!
//! Elm-style core for a panel that docks to the bottom, left, or right edge,
//! resizes by dragging, and snaps into a collapsed tray below a minimum size.

pub mod animator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod overflow;
pub mod panel;
pub mod replay;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use overflow::OverflowHysteresis;
pub use panel::{Edge, PanelSizingEngine};
