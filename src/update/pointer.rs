//! Resizer pointer handling
//!
//! Translates pointer-down/move/up/cancel into engine drag operations and
//! manages pointer capture so moves keep arriving after the pointer leaves
//! the resizer's hit area. A release outside the window cancels the drag.

use tracing::{debug, warn};

use super::apply_target;
use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::AppModel;

pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Down { pointer, pos } => {
            let coordinate = model.engine.position().axis_coordinate(pos);
            if !coordinate.is_finite() {
                return None;
            }
            let previous = model.ui.captured_pointer;

            let restart = model.engine.begin_drag(coordinate);
            if !model.engine.is_dragging() {
                return None;
            }

            let mut cmds = Vec::new();
            if let Some(previous) = previous.filter(|p| *p != pointer) {
                warn!(target: "panel", ?previous, ?pointer, "second pointer took over resizer");
                cmds.push(Cmd::ReleasePointer(previous));
            }
            if previous != Some(pointer) {
                cmds.push(Cmd::CapturePointer(pointer));
            }
            model.ui.captured_pointer = Some(pointer);

            if let Some(target) = restart {
                cmds.push(apply_target(model, target));
            }
            Some(Cmd::batch(cmds))
        }

        PointerMsg::Move { pointer, pos } => {
            if !model.ui.owns_pointer(pointer) {
                return None;
            }
            let coordinate = model.engine.position().axis_coordinate(pos);
            let target = model.engine.update_drag(coordinate, model.viewport)?;
            Some(apply_target(model, target))
        }

        PointerMsg::Up { pointer, pos } => {
            if !model.ui.owns_pointer(pointer) {
                return None;
            }
            model.ui.captured_pointer = None;

            let mut cmds = vec![Cmd::ReleasePointer(pointer)];
            if !model.viewport.contains(pos) {
                debug!(target: "panel", ?pointer, x = pos.x, y = pos.y, "released outside window");
                if let Some(target) = model.engine.cancel_drag() {
                    cmds.push(apply_target(model, target));
                }
                return Some(Cmd::batch(cmds));
            }

            let coordinate = model.engine.position().axis_coordinate(pos);
            if let Some(outcome) = model.engine.end_drag(coordinate, model.viewport) {
                cmds.push(apply_target(model, outcome.target));
                if outcome.changed {
                    cmds.push(Cmd::PersistLayout(model.persisted_layout()));
                }
            }
            Some(Cmd::batch(cmds))
        }

        PointerMsg::Cancel { pointer } | PointerMsg::LostCapture { pointer } => {
            if !model.ui.owns_pointer(pointer) {
                return None;
            }
            model.ui.captured_pointer = None;
            debug!(target: "panel", ?pointer, "pointer gesture cancelled");

            let mut cmds = Vec::new();
            // Capture is already gone when the platform took it away
            if matches!(msg, PointerMsg::Cancel { .. }) {
                cmds.push(Cmd::ReleasePointer(pointer));
            }
            if let Some(target) = model.engine.cancel_drag() {
                cmds.push(apply_target(model, target));
            }
            Some(Cmd::batch(cmds))
        }
    }
}
