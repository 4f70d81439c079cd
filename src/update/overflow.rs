//! Overflow measurement handlers

use crate::commands::Cmd;
use crate::messages::{Measurement, OverflowMsg};
use crate::model::AppModel;
use crate::overflow::OverflowHysteresis;

pub fn update_overflow(model: &mut AppModel, msg: OverflowMsg) -> Option<Cmd> {
    match msg {
        OverflowMsg::HeaderMeasured(m) => evaluate(&mut model.ui.header_scroll_cue, m),
        OverflowMsg::ControlsMeasured(m) => evaluate(&mut model.ui.compact_controls, m),
    }
}

/// Redraw only when the detector flips
fn evaluate(detector: &mut OverflowHysteresis, m: Measurement) -> Option<Cmd> {
    let before = detector.is_collapsed();
    let after = detector.evaluate(m.content, m.available, m.expanded_extra);
    (before != after).then_some(Cmd::Redraw)
}
