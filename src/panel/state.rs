//! Persistent panel state and render snapshots

use serde::{Deserialize, Serialize};

use super::edge::Edge;

/// Last known expanded size for each edge, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSizes {
    #[serde(default = "default_bottom")]
    pub bottom: f32,
    #[serde(default = "default_side")]
    pub left: f32,
    #[serde(default = "default_side")]
    pub right: f32,
}

fn default_bottom() -> f32 {
    Edge::Bottom.metrics().default_size
}

fn default_side() -> f32 {
    Edge::Left.metrics().default_size
}

impl Default for PanelSizes {
    fn default() -> Self {
        Self {
            bottom: default_bottom(),
            left: default_side(),
            right: default_side(),
        }
    }
}

impl PanelSizes {
    pub fn get(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    fn slot_mut(&mut self, edge: Edge) -> &mut f32 {
        match edge {
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        }
    }

    /// Store a size for `edge`, lifted to at least the edge minimum
    pub(crate) fn set(&mut self, edge: Edge, size: f32) {
        *self.slot_mut(edge) = size.max(edge.min_expanded_size());
    }

    /// Repair values read from an external store
    ///
    /// Non-finite values fall back to the edge default; values below the
    /// minimum are raised to it.
    pub fn sanitized(mut self) -> Self {
        for edge in Edge::ALL {
            let value = self.get(edge);
            let repaired = if value.is_finite() {
                value.max(edge.min_expanded_size())
            } else {
                edge.metrics().default_size
            };
            *self.slot_mut(edge) = repaired;
        }
        self
    }
}

/// Observable panel state
///
/// Mutated only through `PanelSizingEngine`.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub position: Edge,
    pub visible: bool,
    pub collapsed: bool,
    pub sizes: PanelSizes,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            position: Edge::Bottom,
            visible: true,
            collapsed: false,
            sizes: PanelSizes::default(),
        }
    }
}

impl PanelState {
    /// Stored expanded size at the current edge
    pub fn expanded_size(&self) -> f32 {
        self.sizes.get(self.position)
    }

    /// Target size when no drag is in progress
    pub fn resting_target(&self) -> f32 {
        if self.collapsed {
            self.position.collapsed_size()
        } else {
            self.expanded_size()
        }
    }

    /// Panic with context if any stored size is below its edge minimum
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        for edge in Edge::ALL {
            let size = self.sizes.get(edge);
            assert!(
                size >= edge.min_expanded_size(),
                "[{}] stored {} size {} is below minimum {}",
                context,
                edge,
                size,
                edge.min_expanded_size()
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self, _context: &str) {}
}

/// Everything a renderer needs to draw the panel for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelSnapshot {
    pub position: Edge,
    pub visible: bool,
    pub collapsed: bool,
    pub dragging: bool,
    /// Size currently displayed by the animator
    pub size: f32,
    /// Size the animator is heading toward
    pub target_size: f32,
}

impl PanelSnapshot {
    /// Describe what changed between two snapshots, if anything
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.position != other.position {
            changes.push(format!("position: {} → {}", self.position, other.position));
        }
        if self.visible != other.visible {
            changes.push(format!("visible: {} → {}", self.visible, other.visible));
        }
        if self.collapsed != other.collapsed {
            changes.push(format!("collapsed: {} → {}", self.collapsed, other.collapsed));
        }
        if self.dragging != other.dragging {
            changes.push(format!("dragging: {} → {}", self.dragging, other.dragging));
        }
        if self.target_size != other.target_size {
            changes.push(format!(
                "target: {:.1} → {:.1}",
                self.target_size, other.target_size
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes_meet_minimums() {
        let state = PanelState::default();
        state.assert_invariants("default");
        assert!(!state.collapsed);
        assert!(state.visible);
    }

    #[test]
    fn test_set_lifts_to_minimum() {
        let mut sizes = PanelSizes::default();
        sizes.set(Edge::Bottom, 10.0);
        assert_eq!(sizes.get(Edge::Bottom), Edge::Bottom.min_expanded_size());
    }

    #[test]
    fn test_sanitized_repairs_bad_values() {
        let sizes = PanelSizes {
            bottom: f32::NAN,
            left: 12.0,
            right: 700.0,
        }
        .sanitized();
        assert_eq!(sizes.bottom, Edge::Bottom.metrics().default_size);
        assert_eq!(sizes.left, Edge::Left.min_expanded_size());
        assert_eq!(sizes.right, 700.0);
    }

    #[test]
    fn test_resting_target_follows_collapsed_flag() {
        let mut state = PanelState::default();
        assert_eq!(state.resting_target(), state.sizes.bottom);
        state.collapsed = true;
        assert_eq!(state.resting_target(), Edge::Bottom.collapsed_size());
        state.position = Edge::Right;
        assert_eq!(state.resting_target(), 0.0);
    }

    #[test]
    fn test_snapshot_diff() {
        let before = PanelSnapshot {
            position: Edge::Bottom,
            visible: true,
            collapsed: false,
            dragging: false,
            size: 300.0,
            target_size: 300.0,
        };
        assert_eq!(before.diff(&before), None);

        let after = PanelSnapshot {
            collapsed: true,
            target_size: 32.0,
            ..before
        };
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("collapsed: false → true"));
        assert!(diff.contains("target: 300.0 → 32.0"));
    }
}
