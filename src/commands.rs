//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use crate::config::PersistedLayout;
use crate::messages::PointerId;

/// Side effects requested by an update
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw
    Redraw,
    /// Route all further events of this pointer to the resizer
    CapturePointer(PointerId),
    /// Release a previously captured pointer
    ReleasePointer(PointerId),
    /// Ask the frame clock for another `AppMsg::Frame`
    ScheduleFrame,
    /// Write the layout to the persisted size store
    PersistLayout(PersistedLayout),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, dropping `None`s and flattening single entries
    pub fn batch(cmds: impl IntoIterator<Item = Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|cmd| !matches!(cmd, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Whether this command (or any batched one) satisfies `predicate`
    pub fn contains(&self, predicate: &dyn Fn(&Cmd) -> bool) -> bool {
        match self {
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.contains(predicate)),
            other => predicate(other),
        }
    }

    /// Iterate leaf commands, flattening batches
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            Cmd::None => Vec::new(),
            other => vec![other],
        }
    }
}
