//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod overflow;
mod panel;
mod pointer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::panel::TargetUpdate;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use overflow::update_overflow;
pub use panel::update_panel;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Overflow(m) => overflow::update_overflow(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Hand an engine target to the animator
///
/// Returns a redraw, plus a frame request while the animator is still moving.
pub(crate) fn apply_target(model: &mut AppModel, target: TargetUpdate) -> Cmd {
    model.animator.apply(target);
    if model.animator.is_settled() {
        Cmd::Redraw
    } else {
        Cmd::Batch(vec![Cmd::Redraw, Cmd::ScheduleFrame])
    }
}

/// Release the resizer's pointer capture if the engine is no longer dragging
///
/// Dock moves and hiding cancel a drag from outside the pointer handlers.
pub(crate) fn release_stale_capture(model: &mut AppModel) -> Cmd {
    if model.engine.is_dragging() {
        return Cmd::None;
    }
    match model.ui.captured_pointer.take() {
        Some(pointer) => Cmd::ReleasePointer(pointer),
        None => Cmd::None,
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel snapshots, logs the diff, and checks state
/// invariants. Frame ticks are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{AppMsg, PointerMsg};

    let is_noisy = matches!(
        &msg,
        Msg::App(AppMsg::Frame { .. }) | Msg::Pointer(PointerMsg::Move { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = model.snapshot();

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&model.snapshot()) {
        debug!(target: "panel", %diff, "state changed");
    }

    model.engine.state().assert_invariants(&msg_name);

    result
}

/// Display name for a message, including variant and arguments
///
/// Example outputs:
/// - `Pointer::Down { pointer: PointerId(0), pos: Point { x: 0.0, y: 500.0 } }`
/// - `Panel::DoubleClickResizer`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Overflow(m) => format!("Overflow::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
