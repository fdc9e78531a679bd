use std::collections::HashMap;

use crate::domain::ControlId;

/// Single-use proof that a control was put into the busy state. A token is
/// live until the first `settle` with it succeeds or a newer `begin` on the
/// same control supersedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyToken {
    pub control: ControlId,
    pub generation: u64,
}

#[derive(Debug)]
struct ActiveEntry {
    generation: u64,
    original_label: String,
}

/// Pure bookkeeping for busy controls: which token is live per control and
/// which label restoration should bring back. Timers and surface mutation
/// live in the runtime layer.
#[derive(Debug, Default)]
pub struct BusyLedger {
    next_generation: u64,
    active: HashMap<ControlId, ActiveEntry>,
}

impl BusyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a control busy and returns the token that may later settle it.
    /// A re-begin on an already-busy control invalidates the old token
    /// (last-writer-wins) but keeps the first captured label, so restoration
    /// never lands on a busy label.
    pub fn begin(&mut self, control: &ControlId, current_label: &str) -> BusyToken {
        self.next_generation += 1;
        let generation = self.next_generation;
        let original_label = match self.active.remove(control) {
            Some(prev) => prev.original_label,
            None => current_label.to_string(),
        };
        self.active.insert(
            control.clone(),
            ActiveEntry {
                generation,
                original_label,
            },
        );
        BusyToken {
            control: control.clone(),
            generation,
        }
    }

    /// Returns the label to restore if `token` is still the live token for
    /// its control, clearing the busy state. Stale or unknown tokens return
    /// `None` and change nothing, which makes the explicit-completion and
    /// fallback-expiry paths mutually exclusive.
    pub fn settle(&mut self, token: &BusyToken) -> Option<String> {
        match self.active.get(&token.control) {
            Some(entry) if entry.generation == token.generation => self
                .active
                .remove(&token.control)
                .map(|entry| entry.original_label),
            _ => None,
        }
    }

    pub fn is_busy(&self, control: &ControlId) -> bool {
        self.active.contains_key(control)
    }
}
