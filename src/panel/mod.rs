//! Dockable panel sizing
//!
//! The DevTools-style side panel can be docked at the bottom, left, or right
//! edge, dragged to resize, and snapped into a collapsed tray.
//!
//! ## Architecture
//!
//! - `Edge`: docking edge plus its `EdgeMetrics` lookup table
//! - `DragSession`: one pointer-down to pointer-up gesture on the resizer
//! - `PanelState`: position, visibility, collapsed flag, per-edge sizes
//! - `PanelSizingEngine`: Idle/Dragging state machine that owns `PanelState`
//!   and emits `TargetUpdate`s for the animator
//!
//! ## Integration
//!
//! - Pointer and click dispatch via `Msg::Pointer` / `Msg::Panel` in `update/panel.rs`
//! - Targets are applied to a `SizeAnimator` (see `animator.rs`)
//! - Sizes persist through `DockConfig` in `config.rs`

mod drag;
mod edge;
mod engine;
mod state;

pub use drag::DragSession;
pub use edge::{Axis, Edge, EdgeMetrics, Point, Viewport};
pub use engine::{DragOutcome, PanelSizingEngine, TargetUpdate, Transition};
pub use state::{PanelSizes, PanelSnapshot, PanelState};
