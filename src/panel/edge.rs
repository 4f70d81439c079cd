//! Docking edges and their sizing metrics
//!
//! Every per-edge constant (thresholds, tray size, viewport fraction, drag
//! sign) lives in this module so the engine never branches on the edge itself.

use serde::{Deserialize, Serialize};

/// Viewport side the panel is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Bottom,
    Left,
    Right,
}

/// Axis a resizer is dragged along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Pointer x drives the size (left/right docks)
    Horizontal,
    /// Pointer y drives the size (bottom dock)
    Vertical,
}

/// A pointer position in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Current window dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `point` lies inside the window, edges included
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Sizing constants for one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMetrics {
    /// Releasing a drag below this collapses the panel
    pub min_expanded: f32,
    /// Size of the tray form (0 for side docks)
    pub collapsed: f32,
    /// Largest size as a fraction of the relevant viewport dimension
    pub max_fraction: f32,
    /// Expanded size used on first launch
    pub default_size: f32,
}

const BOTTOM_METRICS: EdgeMetrics = EdgeMetrics {
    min_expanded: 180.0,
    collapsed: 32.0,
    max_fraction: 0.8,
    default_size: 320.0,
};

const SIDE_METRICS: EdgeMetrics = EdgeMetrics {
    min_expanded: 240.0,
    collapsed: 0.0,
    max_fraction: 0.6,
    default_size: 400.0,
};

impl Edge {
    /// All edges for iteration
    pub const ALL: [Edge; 3] = [Edge::Bottom, Edge::Left, Edge::Right];

    /// Sizing constants for this edge
    pub fn metrics(self) -> EdgeMetrics {
        match self {
            Edge::Bottom => BOTTOM_METRICS,
            Edge::Left | Edge::Right => SIDE_METRICS,
        }
    }

    /// Returns the axis the resizer is dragged along
    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::Horizontal,
            Edge::Bottom => Axis::Vertical,
        }
    }

    /// Cycle to the next docking edge (used by the "move dock" control)
    pub fn cycle_next(self) -> Edge {
        match self {
            Edge::Bottom => Edge::Left,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Bottom,
        }
    }

    /// Project a pointer position onto this edge's drag axis
    pub fn axis_coordinate(self, point: Point) -> f32 {
        match self.axis() {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// How much the panel grows when the pointer moves from `start` to `current`
    ///
    /// Bottom grows when dragged up, Left when dragged right, Right when
    /// dragged left.
    pub fn growth(self, start: f32, current: f32) -> f32 {
        match self {
            Edge::Bottom | Edge::Right => start - current,
            Edge::Left => current - start,
        }
    }

    pub fn min_expanded_size(self) -> f32 {
        self.metrics().min_expanded
    }

    pub fn collapsed_size(self) -> f32 {
        self.metrics().collapsed
    }

    /// Largest size allowed for the given viewport
    ///
    /// Never less than the minimum expanded size, so a degenerate viewport
    /// (zero, negative, NaN) cannot invert the clamp range.
    pub fn maximum_size(self, viewport: Viewport) -> f32 {
        let metrics = self.metrics();
        let dimension = match self.axis() {
            Axis::Horizontal => viewport.width,
            Axis::Vertical => viewport.height,
        };
        if !dimension.is_finite() || dimension <= 0.0 {
            return metrics.min_expanded;
        }
        (dimension * metrics.max_fraction).max(metrics.min_expanded)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
