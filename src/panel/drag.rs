//! Drag session value object
//!
//! One session covers a single pointer-down to pointer-up gesture on the
//! resizer. It is replaced wholesale on every new drag start.

use super::edge::Edge;

/// Start conditions and live candidate size of one resizer drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Axis coordinate of the pointer when the drag started
    pub start_coordinate: f32,
    /// Size in effect at drag start (the tray size if collapsed)
    pub start_size: f32,
    /// Candidate size following the pointer
    pub live_size: f32,
    /// Whether any update has moved the pointer off its start coordinate
    pub moved: bool,
}

impl DragSession {
    pub fn begin(start_coordinate: f32, start_size: f32) -> Self {
        Self {
            start_coordinate,
            start_size,
            live_size: start_size,
            moved: false,
        }
    }

    /// Follow the pointer to `coordinate`, clamped to `[floor, ceiling]`
    ///
    /// A zero growth leaves `live_size` at exactly `start_size`.
    pub fn track(&mut self, edge: Edge, coordinate: f32, floor: f32, ceiling: f32) -> f32 {
        let growth = edge.growth(self.start_coordinate, coordinate);
        if !growth.is_finite() {
            return self.live_size;
        }
        if growth == 0.0 {
            self.live_size = self.start_size;
            return self.live_size;
        }
        self.moved = true;
        self.live_size = (self.start_size + growth).clamp(floor, ceiling.max(floor));
        self.live_size
    }
}
