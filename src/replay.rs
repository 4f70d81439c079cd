//! Headless replay of recorded panel input
//!
//! A replay script is a YAML list of pointer, click, and window events. The
//! replay feeds them through `update`, performs the resulting commands the
//! way a host window would (pointer capture, frame scheduling, persistence),
//! and records panel snapshots.
//!
//! ```yaml
//! viewport: { width: 1280, height: 800 }
//! events:
//!   - down: { x: 0, y: 480 }
//!   - move: { x: 0, y: 700 }
//!   - up: { x: 0, y: 700 }
//!   - settle
//!   - snapshot
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::config::PersistedLayout;
use crate::messages::{AppMsg, Measurement, Msg, OverflowMsg, PanelMsg, PointerId, PointerMsg};
use crate::model::AppModel;
use crate::panel::{Edge, PanelSnapshot, Point, Viewport};
use crate::update::update;

/// Frame interval used by `settle`
const FRAME_MS: u64 = 16;

/// Upper bound on frames `settle` will run
const MAX_SETTLE_FRAMES: usize = 1_000;

/// Pointer position with an optional pointer id
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub pointer: u64,
}

impl PointerEvent {
    fn id(&self) -> PointerId {
        PointerId(self.pointer)
    }

    fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One scripted event
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayEvent {
    Down(PointerEvent),
    Move(PointerEvent),
    Up(PointerEvent),
    /// Platform pointer-cancel for the given pointer id
    Cancel(u64),
    /// Capture taken away from the given pointer id
    LostCapture(u64),
    ClickTray,
    ClickResizer,
    DoubleClick,
    Minimize,
    Expand,
    Dock(Edge),
    CycleDock,
    Show,
    Hide,
    Resize(Viewport),
    Header(Measurement),
    Controls(Measurement),
    /// Advance the frame clock by this many milliseconds
    Frame(u64),
    /// Run frames until the animator settles
    Settle,
    /// Record a snapshot
    Snapshot,
}

impl ReplayEvent {
    /// Message for this event, if it maps to one
    fn to_msg(self) -> Option<Msg> {
        let msg = match self {
            ReplayEvent::Down(e) => Msg::Pointer(PointerMsg::Down {
                pointer: e.id(),
                pos: e.pos(),
            }),
            ReplayEvent::Move(e) => Msg::Pointer(PointerMsg::Move {
                pointer: e.id(),
                pos: e.pos(),
            }),
            ReplayEvent::Up(e) => Msg::Pointer(PointerMsg::Up {
                pointer: e.id(),
                pos: e.pos(),
            }),
            ReplayEvent::Cancel(id) => Msg::Pointer(PointerMsg::Cancel {
                pointer: PointerId(id),
            }),
            ReplayEvent::LostCapture(id) => Msg::Pointer(PointerMsg::LostCapture {
                pointer: PointerId(id),
            }),
            ReplayEvent::ClickTray => Msg::Panel(PanelMsg::ClickTray),
            ReplayEvent::ClickResizer => Msg::Panel(PanelMsg::ClickResizer),
            ReplayEvent::DoubleClick => Msg::Panel(PanelMsg::DoubleClickResizer),
            ReplayEvent::Minimize => Msg::Panel(PanelMsg::Minimize),
            ReplayEvent::Expand => Msg::Panel(PanelMsg::Expand),
            ReplayEvent::Dock(edge) => Msg::Panel(PanelMsg::SetPosition(edge)),
            ReplayEvent::CycleDock => Msg::Panel(PanelMsg::CyclePosition),
            ReplayEvent::Show => Msg::Panel(PanelMsg::SetVisible(true)),
            ReplayEvent::Hide => Msg::Panel(PanelMsg::SetVisible(false)),
            ReplayEvent::Resize(viewport) => Msg::App(AppMsg::Resize(viewport)),
            ReplayEvent::Header(m) => Msg::Overflow(OverflowMsg::HeaderMeasured(m)),
            ReplayEvent::Controls(m) => Msg::Overflow(OverflowMsg::ControlsMeasured(m)),
            ReplayEvent::Frame(ms) => Msg::frame(ms),
            ReplayEvent::Settle | ReplayEvent::Snapshot => return None,
        };
        Some(msg)
    }

    fn label(&self) -> &'static str {
        match self {
            ReplayEvent::Down(_) => "down",
            ReplayEvent::Move(_) => "move",
            ReplayEvent::Up(_) => "up",
            ReplayEvent::Cancel(_) => "cancel",
            ReplayEvent::LostCapture(_) => "lost_capture",
            ReplayEvent::ClickTray => "click_tray",
            ReplayEvent::ClickResizer => "click_resizer",
            ReplayEvent::DoubleClick => "double_click",
            ReplayEvent::Minimize => "minimize",
            ReplayEvent::Expand => "expand",
            ReplayEvent::Dock(_) => "dock",
            ReplayEvent::CycleDock => "cycle_dock",
            ReplayEvent::Show => "show",
            ReplayEvent::Hide => "hide",
            ReplayEvent::Resize(_) => "resize",
            ReplayEvent::Header(_) => "header",
            ReplayEvent::Controls(_) => "controls",
            ReplayEvent::Frame(_) => "frame",
            ReplayEvent::Settle => "settle",
            ReplayEvent::Snapshot => "snapshot",
        }
    }
}

/// A parsed replay script
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub viewport: Option<Viewport>,
    pub events: Vec<ReplayEvent>,
}

impl ReplayScript {
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse replay script")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;
        Self::from_yaml(&content)
    }
}

/// Panel state recorded at one point of a replay
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplayFrame {
    /// Index of the event after which this was recorded
    pub step: usize,
    pub event: &'static str,
    pub panel: PanelSnapshot,
    pub scroll_cue: bool,
    pub compact_controls: bool,
}

/// Everything a replay produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub frames: Vec<ReplayFrame>,
    #[serde(rename = "final")]
    pub final_frame: ReplayFrame,
    /// Last layout the model asked to persist
    pub persisted: Option<PersistedLayout>,
}

/// Drives a model through scripted events, acting as the host window
#[derive(Debug)]
pub struct Replay {
    model: AppModel,
    frame_pending: bool,
    captured: Option<PointerId>,
    persisted: Option<PersistedLayout>,
    frames: Vec<ReplayFrame>,
    step: usize,
    last_event: &'static str,
}

impl Replay {
    pub fn new(model: AppModel) -> Self {
        Self {
            model,
            frame_pending: false,
            captured: None,
            persisted: None,
            frames: Vec::new(),
            step: 0,
            last_event: "start",
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Pointer the host currently routes to the resizer
    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.captured
    }

    pub fn run(&mut self, events: &[ReplayEvent]) {
        for (index, event) in events.iter().enumerate() {
            self.step = index;
            self.last_event = event.label();
            match event {
                ReplayEvent::Settle => self.settle(),
                ReplayEvent::Snapshot => {
                    let frame = self.frame();
                    self.frames.push(frame);
                }
                other => {
                    if let Some(msg) = other.to_msg() {
                        self.dispatch(msg);
                    }
                }
            }
        }
    }

    /// Send one message and perform the resulting commands
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            for cmd in cmd.flatten() {
                self.execute(cmd);
            }
        }
    }

    fn execute(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::CapturePointer(pointer) => self.captured = Some(pointer),
            Cmd::ReleasePointer(pointer) => {
                if self.captured == Some(pointer) {
                    self.captured = None;
                }
            }
            Cmd::ScheduleFrame => self.frame_pending = true,
            Cmd::PersistLayout(layout) => self.persisted = Some(layout),
            // Batches arrive flattened from `dispatch`
            Cmd::Redraw | Cmd::None | Cmd::Batch(_) => {}
        }
    }

    /// Run frames until no further frame is requested
    pub fn settle(&mut self) {
        let mut frames = 0;
        while self.frame_pending && frames < MAX_SETTLE_FRAMES {
            self.frame_pending = false;
            self.dispatch(Msg::frame(FRAME_MS));
            frames += 1;
        }
        if self.frame_pending {
            tracing::warn!(frames, "animation did not settle");
        }
    }

    fn frame(&self) -> ReplayFrame {
        ReplayFrame {
            step: self.step,
            event: self.last_event,
            panel: self.model.snapshot(),
            scroll_cue: self.model.ui.show_scroll_cue(),
            compact_controls: self.model.ui.show_compact_controls(),
        }
    }

    pub fn finish(self) -> ReplayReport {
        let final_frame = self.frame();
        ReplayReport {
            frames: self.frames,
            final_frame,
            persisted: self.persisted,
        }
    }
}

impl ReplayFrame {
    /// One-line human readable summary
    pub fn summary(&self) -> String {
        let p = &self.panel;
        let form = match (p.visible, p.collapsed) {
            (false, _) => "hidden",
            (true, true) => "collapsed",
            (true, false) => "expanded",
        };
        format!(
            "#{:<3} {:<13} {:<6} {:<9} size={:.1} target={:.1}{}{}{}",
            self.step,
            self.event,
            p.position,
            form,
            p.size,
            p.target_size,
            if p.dragging { " dragging" } else { "" },
            if self.scroll_cue { " scroll-cue" } else { "" },
            if self.compact_controls { " compact" } else { "" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = ReplayScript::from_yaml(
            r#"
viewport: { width: 1000, height: 800 }
events:
  - down: { x: 0, y: 500 }
  - move: { x: 0, y: 400, pointer: 0 }
  - up: { x: 0, y: 400 }
  - cancel: 3
  - dock: left
  - header: { content: 520, available: 500 }
  - frame: 16
  - settle
  - snapshot
"#,
        )
        .unwrap();

        assert_eq!(script.viewport, Some(Viewport::new(1000.0, 800.0)));
        assert_eq!(script.events.len(), 9);
        assert_eq!(
            script.events[0],
            ReplayEvent::Down(PointerEvent {
                x: 0.0,
                y: 500.0,
                pointer: 0
            })
        );
        assert_eq!(script.events[3], ReplayEvent::Cancel(3));
        assert_eq!(script.events[4], ReplayEvent::Dock(Edge::Left));
        assert_eq!(script.events[7], ReplayEvent::Settle);
    }

    #[test]
    fn test_parse_rejects_unknown_event() {
        let err = ReplayScript::from_yaml("events:\n  - explode\n").unwrap_err();
        assert!(err.to_string().contains("replay script"));
    }

    #[test]
    fn test_replay_tracks_capture() {
        let mut replay = Replay::new(AppModel::default());
        replay.run(&[ReplayEvent::Down(PointerEvent {
            x: 0.0,
            y: 500.0,
            pointer: 7,
        })]);
        assert_eq!(replay.captured_pointer(), Some(PointerId(7)));

        replay.run(&[ReplayEvent::Cancel(7)]);
        assert_eq!(replay.captured_pointer(), None);
        assert!(!replay.model().engine.is_dragging());
    }

    #[test]
    fn test_batched_commands_are_all_executed() {
        let mut replay = Replay::new(AppModel::default());
        let at = |y| PointerEvent {
            x: 0.0,
            y,
            pointer: 0,
        };
        // Release yields one batch: release capture, retarget, frame, persist
        replay.run(&[
            ReplayEvent::Down(at(500.0)),
            ReplayEvent::Move(at(400.0)),
            ReplayEvent::Up(at(400.0)),
        ]);
        assert_eq!(replay.captured_pointer(), None);

        let report = replay.finish();
        assert_eq!(report.persisted.map(|layout| layout.sizes.bottom), Some(420.0));
    }
}
