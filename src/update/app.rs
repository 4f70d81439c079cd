//! Window and frame clock handlers

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(viewport) => {
            // Only the drag clamp reads the viewport; stored sizes stay as they are
            model.viewport = viewport;
            tracing::debug!(width = viewport.width, height = viewport.height, "viewport resized");
            Some(Cmd::Redraw)
        }

        AppMsg::Frame { elapsed_ms } => {
            if model.animator.is_settled() {
                return None;
            }
            if model.animator.tick(Duration::from_millis(elapsed_ms)) {
                Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::ScheduleFrame]))
            } else {
                Some(Cmd::Redraw)
            }
        }

        AppMsg::SetMotion(motion) => {
            model.set_motion(motion);
            Some(Cmd::Redraw)
        }
    }
}
