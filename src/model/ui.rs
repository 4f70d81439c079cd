//! UI state - pointer capture and the overflow detectors

use crate::messages::PointerId;
use crate::overflow::OverflowHysteresis;

/// UI state around the panel chrome
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Pointer currently captured by the resizer, if any
    pub captured_pointer: Option<PointerId>,
    /// Header tab strip overflow (shows the scroll cue)
    pub header_scroll_cue: OverflowHysteresis,
    /// Auxiliary toolbar overflow (switches to compact controls)
    pub compact_controls: OverflowHysteresis,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether events from `pointer` belong to the active resizer drag
    pub fn owns_pointer(&self, pointer: PointerId) -> bool {
        self.captured_pointer == Some(pointer)
    }

    pub fn show_scroll_cue(&self) -> bool {
        self.header_scroll_cue.is_collapsed()
    }

    pub fn show_compact_controls(&self) -> bool {
        self.compact_controls.is_collapsed()
    }
}
