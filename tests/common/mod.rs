//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockside::animator::MotionPreference;
use dockside::commands::Cmd;
use dockside::config::DockConfig;
use dockside::messages::Msg;
use dockside::model::AppModel;
use dockside::panel::{Edge, PanelSizes, Point, Viewport};
use dockside::update::update;

/// Viewport used by most tests (max bottom 800, max side 960)
pub const VIEWPORT: Viewport = Viewport {
    width: 1600.0,
    height: 1000.0,
};

/// Create a model docked at `edge` with `size` stored for that edge
pub fn test_model(edge: Edge, size: f32) -> AppModel {
    model_with(edge, size, MotionPreference::Full)
}

/// Same as `test_model`, with instant size changes
pub fn test_model_reduced(edge: Edge, size: f32) -> AppModel {
    model_with(edge, size, MotionPreference::Reduced)
}

fn model_with(edge: Edge, size: f32, motion: MotionPreference) -> AppModel {
    let mut sizes = PanelSizes::default();
    match edge {
        Edge::Bottom => sizes.bottom = size,
        Edge::Left => sizes.left = size,
        Edge::Right => sizes.right = size,
    }
    let config = DockConfig {
        position: edge,
        sizes,
        motion,
        ..DockConfig::default()
    };
    AppModel::new(&config, VIEWPORT)
}

/// Pointer position whose drag-axis coordinate is `coord`
pub fn at(edge: Edge, coord: f32) -> Point {
    match edge {
        Edge::Bottom => Point::new(640.0, coord),
        Edge::Left | Edge::Right => Point::new(coord, 400.0),
    }
}

pub fn down(model: &mut AppModel, coord: f32) -> Option<Cmd> {
    let p = at(model.engine.position(), coord);
    update(model, Msg::pointer_down(p.x, p.y))
}

pub fn move_to(model: &mut AppModel, coord: f32) -> Option<Cmd> {
    let p = at(model.engine.position(), coord);
    update(model, Msg::pointer_move(p.x, p.y))
}

pub fn up(model: &mut AppModel, coord: f32) -> Option<Cmd> {
    let p = at(model.engine.position(), coord);
    update(model, Msg::pointer_up(p.x, p.y))
}

/// Full press-move-release gesture along the drag axis
pub fn drag(model: &mut AppModel, from: f32, to: f32) -> Option<Cmd> {
    down(model, from);
    move_to(model, to);
    up(model, to)
}

/// Tick frames until the animator stops asking for them
pub fn settle(model: &mut AppModel) {
    for _ in 0..1_000 {
        match update(model, Msg::frame(16)) {
            Some(cmd) if cmd.contains(&|c| matches!(c, Cmd::ScheduleFrame)) => continue,
            _ => return,
        }
    }
    panic!("animation did not settle");
}
