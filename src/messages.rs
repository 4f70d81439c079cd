//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::Deserialize;

use crate::animator::MotionPreference;
use crate::panel::{Edge, Point, Viewport};

/// Identifies one pointer (mouse, pen, or touch contact)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct PointerId(pub u64);

/// Raw pointer events on the resizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    /// Pointer pressed on the resizer (starts a drag and captures the pointer)
    Down { pointer: PointerId, pos: Point },
    /// Pointer moved while captured
    Move { pointer: PointerId, pos: Point },
    /// Pointer released
    Up { pointer: PointerId, pos: Point },
    /// Platform cancelled the gesture
    Cancel { pointer: PointerId },
    /// Capture was taken away (window lost focus, element removed)
    LostCapture { pointer: PointerId },
}

/// Clicks and explicit panel controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMsg {
    /// Click on the collapsed tray
    ClickTray,
    /// Single click on the resizer
    ClickResizer,
    /// Double click on the resizer
    DoubleClickResizer,
    /// Minimize button in the panel header (toggles)
    Minimize,
    /// Explicit expand (e.g. "open DevTools" while collapsed)
    Expand,
    /// Dock to a specific edge
    SetPosition(Edge),
    /// Dock to the next edge in the cycle
    CyclePosition,
    /// Show or hide the whole panel
    SetVisible(bool),
    ToggleVisible,
}

/// One overflow measurement from the renderer
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Measurement {
    /// Natural size of the content as currently rendered
    pub content: f32,
    /// Space available to it
    pub available: f32,
    /// Extra size the expanded form needs over the compact one
    #[serde(default)]
    pub expanded_extra: f32,
}

/// Overflow measurements for the two hysteresis detectors
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverflowMsg {
    /// Header tab strip vs. header width (scroll cue)
    HeaderMeasured(Measurement),
    /// Auxiliary controls vs. toolbar width (compact controls)
    ControlsMeasured(Measurement),
}

/// Window and frame-clock messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMsg {
    /// Window resized
    Resize(Viewport),
    /// Frame clock tick
    Frame { elapsed_ms: u64 },
    /// Motion preference changed
    SetMotion(MotionPreference),
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Resizer pointer events
    Pointer(PointerMsg),
    /// Clicks and panel controls
    Panel(PanelMsg),
    /// Overflow measurements
    Overflow(OverflowMsg),
    /// Window and frame messages
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn pointer_down(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Down {
            pointer: PointerId::default(),
            pos: Point::new(x, y),
        })
    }

    pub fn pointer_move(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Move {
            pointer: PointerId::default(),
            pos: Point::new(x, y),
        })
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Up {
            pointer: PointerId::default(),
            pos: Point::new(x, y),
        })
    }

    pub fn resize(width: f32, height: f32) -> Self {
        Msg::App(AppMsg::Resize(Viewport::new(width, height)))
    }

    pub fn frame(elapsed_ms: u64) -> Self {
        Msg::App(AppMsg::Frame { elapsed_ms })
    }
}
