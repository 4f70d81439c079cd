//! Tests for headless replay of scripted input

use dockside::config::DockConfig;
use dockside::model::AppModel;
use dockside::panel::{Edge, Viewport};
use dockside::replay::{Replay, ReplayScript};

fn run(script: &str) -> dockside::replay::ReplayReport {
    let script = ReplayScript::from_yaml(script).unwrap();
    let viewport = script.viewport.unwrap_or_default();
    let mut replay = Replay::new(AppModel::new(&DockConfig::default(), viewport));
    replay.run(&script.events);
    replay.finish()
}

#[test]
fn test_replay_collapse_and_expand() {
    let report = run(r#"
viewport: { width: 1600, height: 1000 }
events:
  - down: { x: 0, y: 700 }
  - move: { x: 0, y: 950 }
  - up: { x: 0, y: 950 }
  - settle
  - snapshot
  - click_resizer
  - click_tray
  - settle
  - snapshot
"#);

    assert_eq!(report.frames.len(), 2);

    let collapsed = &report.frames[0].panel;
    assert!(collapsed.collapsed);
    assert_eq!(collapsed.size, Edge::Bottom.collapsed_size());

    let expanded = &report.frames[1].panel;
    assert!(!expanded.collapsed);
    assert_eq!(expanded.size, 320.0);

    let persisted = report.persisted.unwrap();
    assert!(!persisted.collapsed);
    assert_eq!(persisted.sizes.bottom, 320.0);
}

#[test]
fn test_replay_resize_and_dock() {
    let report = run(r#"
events:
  - down: { x: 0, y: 480 }
  - move: { x: 0, y: 400 }
  - up: { x: 0, y: 400 }
  - dock: right
  - down: { x: 900, y: 0 }
  - move: { x: 850, y: 0 }
  - up: { x: 850, y: 0 }
  - settle
"#);

    let persisted = report.persisted.unwrap();
    assert_eq!(persisted.position, Edge::Right);
    assert_eq!(persisted.sizes.bottom, 400.0);
    assert_eq!(persisted.sizes.right, 450.0);
    assert_eq!(report.final_frame.panel.size, 450.0);
    assert!(!report.final_frame.panel.dragging);
}

#[test]
fn test_replay_overflow_measurements() {
    let report = run(r#"
events:
  - header: { content: 700, available: 500, expanded_extra: 30 }
  - controls: { content: 100, available: 500, expanded_extra: 30 }
"#);
    assert!(report.final_frame.scroll_cue);
    assert!(!report.final_frame.compact_controls);
}

#[test]
fn test_report_serializes_to_json() {
    let report = run("events:\n  - minimize\n  - snapshot\n");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["frames"][0]["panel"]["collapsed"], true);
    assert_eq!(json["final"]["panel"]["position"], "bottom");
    assert_eq!(json["persisted"]["collapsed"], true);
}

#[test]
fn test_viewport_defaults_when_missing() {
    let script = ReplayScript::from_yaml("events: []\n").unwrap();
    assert_eq!(script.viewport, None);
    assert_eq!(script.viewport.unwrap_or_default(), Viewport::default());
}
