//! Panel sizing engine
//!
//! Two-state machine (Idle / Dragging) over continuous pointer input. The
//! engine owns `PanelState` and never touches the animator directly: every
//! operation that changes what should be on screen returns a `TargetUpdate`
//! describing the new target size and how to reach it.
//!
//! Invalid transitions are absorbed as no-ops. Pointer event order across
//! input devices is not guaranteed, so a stray `update_drag` or `end_drag`
//! while idle must never fail.

use tracing::{debug, trace, warn};

use super::drag::DragSession;
use super::edge::{Edge, Viewport};
use super::state::{PanelSizes, PanelSnapshot, PanelState};

/// How the animator should reach a new target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Jump straight to the target (pointer tracking, dock moves)
    Immediate,
    /// Interpolate toward the target
    Animated,
}

/// New target size for the animator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetUpdate {
    pub size: f32,
    pub transition: Transition,
}

impl TargetUpdate {
    fn immediate(size: f32) -> Self {
        Self {
            size,
            transition: Transition::Immediate,
        }
    }

    fn animated(size: f32) -> Self {
        Self {
            size,
            transition: Transition::Animated,
        }
    }
}

/// Result of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    pub target: TargetUpdate,
    /// Whether the release collapsed the panel
    pub collapsed: bool,
    /// Whether persisted state (sizes or collapsed flag) changed
    pub changed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging(DragSession),
}

/// Owns panel state and the resizer drag lifecycle
#[derive(Debug, Clone)]
pub struct PanelSizingEngine {
    state: PanelState,
    phase: Phase,
    /// Set when a drag that actually moved ends; swallows the click the
    /// platform delivers after that pointer-up
    suppress_next_click: bool,
}

impl Default for PanelSizingEngine {
    fn default() -> Self {
        Self::new(PanelState::default())
    }
}

impl PanelSizingEngine {
    /// Create an engine from restored state, repairing out-of-range sizes
    pub fn new(mut state: PanelState) -> Self {
        state.sizes = state.sizes.sanitized();
        Self {
            state,
            phase: Phase::Idle,
            suppress_next_click: false,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn sizes(&self) -> PanelSizes {
        self.state.sizes
    }

    pub fn position(&self) -> Edge {
        self.state.position
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.collapsed
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Dragging(session) => Some(session),
            Phase::Idle => None,
        }
    }

    /// Size the panel should be displayed at right now
    ///
    /// During a drag the live size is authoritative over anything the
    /// animator is still interpolating.
    pub fn target_size(&self) -> f32 {
        match &self.phase {
            Phase::Dragging(session) => session.live_size,
            Phase::Idle => self.state.resting_target(),
        }
    }

    /// Render snapshot, given the size the animator currently displays
    pub fn snapshot(&self, displayed_size: f32) -> PanelSnapshot {
        PanelSnapshot {
            position: self.state.position,
            visible: self.state.visible,
            collapsed: self.state.collapsed,
            dragging: self.is_dragging(),
            size: displayed_size,
            target_size: self.target_size(),
        }
    }

    // ========================================================================
    // Drag lifecycle
    // ========================================================================

    /// Idle → Dragging
    ///
    /// A second pointer-down without an intervening release cancels the
    /// previous session and starts over from committed state.
    pub fn begin_drag(&mut self, coordinate: f32) -> Option<TargetUpdate> {
        if !self.state.visible || !coordinate.is_finite() {
            return None;
        }

        let replaced = self.is_dragging();
        if replaced {
            warn!(target: "panel", "pointer-down during active drag, restarting session");
        }

        let edge = self.state.position;
        let start_size = if self.state.collapsed {
            edge.collapsed_size()
        } else {
            self.state.expanded_size()
        };
        self.phase = Phase::Dragging(DragSession::begin(coordinate, start_size));
        self.suppress_next_click = false;
        debug!(target: "panel", %edge, start_size, coordinate, "drag started");

        // The abandoned session may have been displaying a different size
        replaced.then(|| TargetUpdate::immediate(start_size))
    }

    /// Dragging → Dragging; no-op while idle
    ///
    /// The candidate size may dip below the expand threshold but never below
    /// the tray size.
    pub fn update_drag(&mut self, coordinate: f32, viewport: Viewport) -> Option<TargetUpdate> {
        let edge = self.state.position;
        let Phase::Dragging(session) = &mut self.phase else {
            trace!(target: "panel", "drag update while idle ignored");
            return None;
        };

        let ceiling = edge.maximum_size(viewport).max(session.start_size);
        let live = session.track(edge, coordinate, edge.collapsed_size(), ceiling);
        trace!(target: "panel", coordinate, live, "drag update");
        Some(TargetUpdate::immediate(live))
    }

    /// Dragging → Idle, committing either a collapse or a new size
    ///
    /// The collapsed flag is settled before the returned target is computed,
    /// so the animator is never pointed at the wrong size for a frame.
    pub fn end_drag(&mut self, coordinate: f32, viewport: Viewport) -> Option<DragOutcome> {
        self.update_drag(coordinate, viewport)?;
        let Phase::Dragging(session) = std::mem::replace(&mut self.phase, Phase::Idle) else {
            return None;
        };

        let edge = self.state.position;
        let before = (self.state.collapsed, self.state.sizes);
        let collapse = session.live_size < edge.min_expanded_size();

        if collapse {
            // Keep the stored size so the next expansion returns to it
            self.state.collapsed = true;
        } else {
            let ceiling = edge.maximum_size(viewport).max(session.start_size);
            let size = session.live_size.clamp(edge.min_expanded_size(), ceiling);
            self.state.collapsed = false;
            self.state.sizes.set(edge, size);
        }

        self.suppress_next_click = session.moved;
        let changed = before != (self.state.collapsed, self.state.sizes);
        let target = TargetUpdate::animated(self.state.resting_target());
        debug!(
            target: "panel",
            %edge,
            live = session.live_size,
            collapsed = self.state.collapsed,
            changed,
            "drag ended"
        );

        Some(DragOutcome {
            target,
            collapsed: collapse,
            changed,
        })
    }

    /// Dragging → Idle without committing anything
    ///
    /// Used for pointer-cancel and lost capture.
    pub fn cancel_drag(&mut self) -> Option<TargetUpdate> {
        if !self.is_dragging() {
            return None;
        }
        self.phase = Phase::Idle;
        debug!(target: "panel", "drag cancelled");
        Some(TargetUpdate::animated(self.state.resting_target()))
    }

    // ========================================================================
    // Discrete controls
    // ========================================================================

    /// Flip between tray and expanded form (double-click, minimize control)
    pub fn toggle_collapsed(&mut self) -> Option<TargetUpdate> {
        let collapsed = !self.state.collapsed;
        self.set_collapsed(collapsed)
    }

    /// Set the collapsed flag; repeated calls with the same value do nothing
    pub fn set_collapsed(&mut self, collapsed: bool) -> Option<TargetUpdate> {
        if self.is_dragging() {
            trace!(target: "panel", collapsed, "collapse change during drag ignored");
            return None;
        }
        if self.state.collapsed == collapsed {
            return None;
        }
        self.state.collapsed = collapsed;
        debug!(target: "panel", collapsed, "collapsed flag changed");
        Some(TargetUpdate::animated(self.state.resting_target()))
    }

    /// Click on the collapsed tray
    pub fn click_tray(&mut self) -> Option<TargetUpdate> {
        self.set_collapsed(false)
    }

    /// Single click on the resizer: expands a collapsed panel
    ///
    /// The click that follows a real drag is swallowed.
    pub fn click_resizer(&mut self) -> Option<TargetUpdate> {
        if std::mem::take(&mut self.suppress_next_click) {
            trace!(target: "panel", "resizer click after drag suppressed");
            return None;
        }
        if self.state.collapsed {
            self.set_collapsed(false)
        } else {
            None
        }
    }

    /// Double click on the resizer
    pub fn double_click_resizer(&mut self) -> Option<TargetUpdate> {
        self.suppress_next_click = false;
        self.toggle_collapsed()
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Move the panel to another edge
    ///
    /// Sizes and the collapsed flag are untouched; the panel appears at the
    /// new edge's stored size (or tray) immediately. An active drag is
    /// cancelled because its axis no longer applies.
    pub fn set_position(&mut self, edge: Edge) -> Option<TargetUpdate> {
        if self.state.position == edge {
            return None;
        }
        if self.is_dragging() {
            self.phase = Phase::Idle;
            debug!(target: "panel", "drag cancelled by dock move");
        }
        debug!(target: "panel", from = %self.state.position, to = %edge, "dock moved");
        self.state.position = edge;
        Some(TargetUpdate::immediate(self.state.resting_target()))
    }

    /// Show or hide the panel entirely; returns whether anything changed
    ///
    /// Hiding cancels an active drag. Collapse state is independent of
    /// visibility and survives a hide/show cycle.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.state.visible == visible {
            return false;
        }
        if !visible {
            self.cancel_drag();
        }
        self.state.visible = visible;
        debug!(target: "panel", visible, "visibility changed");
        true
    }

    pub fn toggle_visible(&mut self) -> bool {
        let visible = !self.state.visible;
        self.set_visible(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1600.0,
        height: 1000.0,
    };

    fn engine_at(edge: Edge, size: f32) -> PanelSizingEngine {
        let mut state = PanelState {
            position: edge,
            ..PanelState::default()
        };
        state.sizes.set(edge, size);
        PanelSizingEngine::new(state)
    }

    #[test]
    fn test_begin_drag_has_no_visible_effect() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        assert_eq!(engine.begin_drag(500.0), None);
        assert!(engine.is_dragging());
        assert_eq!(engine.target_size(), 300.0);
    }

    #[test]
    fn test_begin_drag_from_collapsed_starts_at_tray_size() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.set_collapsed(true);
        engine.begin_drag(700.0);
        let session = engine.drag_session().unwrap();
        assert_eq!(session.start_size, Edge::Bottom.collapsed_size());
        assert_eq!(session.live_size, Edge::Bottom.collapsed_size());
    }

    #[test]
    fn test_update_drag_is_immediate() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.begin_drag(500.0);
        let update = engine.update_drag(450.0, VIEWPORT).unwrap();
        assert_eq!(update.size, 350.0);
        assert_eq!(update.transition, Transition::Immediate);
        assert_eq!(engine.target_size(), 350.0);
    }

    #[test]
    fn test_update_and_end_while_idle_are_noops() {
        let mut engine = engine_at(Edge::Left, 300.0);
        let before = engine.state().clone();
        assert_eq!(engine.update_drag(10.0, VIEWPORT), None);
        assert_eq!(engine.end_drag(10.0, VIEWPORT), None);
        assert_eq!(engine.cancel_drag(), None);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_end_drag_below_minimum_collapses_and_keeps_size() {
        let mut engine = engine_at(Edge::Bottom, 400.0);
        engine.begin_drag(500.0);
        let outcome = engine.end_drag(800.0, VIEWPORT).unwrap();
        assert!(outcome.collapsed);
        assert!(outcome.changed);
        assert_eq!(outcome.target.size, Edge::Bottom.collapsed_size());
        assert_eq!(outcome.target.transition, Transition::Animated);
        assert!(engine.is_collapsed());
        assert_eq!(engine.sizes().bottom, 400.0);
    }

    #[test]
    fn test_end_drag_clamps_to_viewport_maximum() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.begin_drag(900.0);
        let outcome = engine.end_drag(-2000.0, VIEWPORT).unwrap();
        assert_eq!(outcome.target.size, 800.0);
        assert_eq!(engine.sizes().bottom, 800.0);
    }

    #[test]
    fn test_zero_delta_drag_keeps_oversized_panel() {
        // Stored under a larger window; the current maximum is smaller
        let mut engine = engine_at(Edge::Left, 1200.0);
        let small = Viewport::new(800.0, 600.0);
        engine.begin_drag(50.0);
        engine.update_drag(50.0, small);
        let outcome = engine.end_drag(50.0, small).unwrap();
        assert!(!outcome.changed);
        assert_eq!(engine.sizes().left, 1200.0);
    }

    #[test]
    fn test_restarting_drag_uses_committed_state() {
        let mut engine = engine_at(Edge::Right, 400.0);
        engine.begin_drag(1000.0);
        engine.update_drag(900.0, VIEWPORT);
        assert_eq!(engine.target_size(), 500.0);

        let update = engine.begin_drag(700.0).unwrap();
        assert_eq!(update.size, 400.0);
        assert_eq!(engine.drag_session().unwrap().start_coordinate, 700.0);
    }

    #[test]
    fn test_cancel_reverts_target() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.begin_drag(500.0);
        engine.update_drag(300.0, VIEWPORT);
        let update = engine.cancel_drag().unwrap();
        assert_eq!(update.size, 300.0);
        assert!(!engine.is_dragging());
        assert_eq!(engine.sizes().bottom, 300.0);
    }

    #[test]
    fn test_collapse_controls_ignored_while_dragging() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.begin_drag(500.0);
        assert_eq!(engine.toggle_collapsed(), None);
        assert_eq!(engine.set_collapsed(true), None);
        assert!(!engine.is_collapsed());
    }

    #[test]
    fn test_set_collapsed_is_idempotent() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        assert_eq!(engine.set_collapsed(false), None);
        assert!(engine.set_collapsed(true).is_some());
        assert_eq!(engine.set_collapsed(true), None);
    }

    #[test]
    fn test_click_after_moving_drag_is_suppressed() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.begin_drag(500.0);
        engine.end_drag(900.0, VIEWPORT);
        assert!(engine.is_collapsed());

        // Click delivered right after the release
        assert_eq!(engine.click_resizer(), None);
        assert!(engine.is_collapsed());

        // A later genuine click expands
        let update = engine.click_resizer().unwrap();
        assert_eq!(update.size, 300.0);
        assert!(!engine.is_collapsed());
    }

    #[test]
    fn test_click_after_stationary_press_expands() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.set_collapsed(true);
        engine.begin_drag(968.0);
        engine.end_drag(968.0, VIEWPORT);
        assert!(engine.is_collapsed());
        assert!(engine.click_resizer().is_some());
        assert!(!engine.is_collapsed());
    }

    #[test]
    fn test_set_position_cancels_drag_and_jumps() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.begin_drag(500.0);
        let update = engine.set_position(Edge::Left).unwrap();
        assert!(!engine.is_dragging());
        assert_eq!(update.transition, Transition::Immediate);
        assert_eq!(update.size, engine.sizes().left);
        assert_eq!(engine.set_position(Edge::Left), None);
    }

    #[test]
    fn test_hidden_panel_does_not_start_drags() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.begin_drag(500.0);
        assert!(engine.set_visible(false));
        assert!(!engine.is_dragging());
        assert_eq!(engine.begin_drag(500.0), None);
        assert!(!engine.is_dragging());
        assert!(!engine.set_visible(false));
    }

    #[test]
    fn test_visibility_preserves_collapse() {
        let mut engine = engine_at(Edge::Bottom, 300.0);
        engine.set_collapsed(true);
        engine.toggle_visible();
        engine.toggle_visible();
        assert!(engine.is_visible());
        assert!(engine.is_collapsed());
    }
}
