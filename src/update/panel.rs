//! Panel control handlers
//!
//! Clicks on the tray and resizer, the minimize control, dock moves, and
//! visibility.

use super::{apply_target, release_stale_capture};
use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;
use crate::panel::{TargetUpdate, Transition};

pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    let target = match msg {
        PanelMsg::ClickTray => model.engine.click_tray(),
        PanelMsg::ClickResizer => model.engine.click_resizer(),
        PanelMsg::DoubleClickResizer => model.engine.double_click_resizer(),
        PanelMsg::Minimize => model.engine.toggle_collapsed(),
        PanelMsg::Expand => model.engine.set_collapsed(false),
        PanelMsg::SetPosition(edge) => model.engine.set_position(edge),
        PanelMsg::CyclePosition => {
            let next = model.engine.position().cycle_next();
            model.engine.set_position(next)
        }
        PanelMsg::SetVisible(visible) => return set_visible(model, visible),
        PanelMsg::ToggleVisible => {
            let visible = !model.engine.is_visible();
            return set_visible(model, visible);
        }
    }?;

    let cmds = vec![
        release_stale_capture(model),
        apply_target(model, target),
        Cmd::PersistLayout(model.persisted_layout()),
    ];
    Some(Cmd::batch(cmds))
}

fn set_visible(model: &mut AppModel, visible: bool) -> Option<Cmd> {
    if !model.engine.set_visible(visible) {
        return None;
    }

    let mut cmds = vec![release_stale_capture(model)];
    if visible {
        // Reappear at the resting size rather than animating from stale values
        let target = TargetUpdate {
            size: model.engine.target_size(),
            transition: Transition::Immediate,
        };
        cmds.push(apply_target(model, target));
    } else {
        cmds.push(Cmd::Redraw);
    }
    cmds.push(Cmd::PersistLayout(model.persisted_layout()));
    Some(Cmd::batch(cmds))
}
