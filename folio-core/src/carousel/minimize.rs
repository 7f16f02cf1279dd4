//! Minimize/restore mode.

/// Whether the carousel shows its slides or a static placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinimizeState {
    #[default]
    Expanded,
    /// Holds the index that was active when the carousel was minimized.
    Minimized { saved_index: usize },
}

impl MinimizeState {
    pub fn is_minimized(&self) -> bool {
        matches!(self, MinimizeState::Minimized { .. })
    }

    pub fn saved_index(&self) -> Option<usize> {
        match self {
            MinimizeState::Minimized { saved_index } => Some(*saved_index),
            MinimizeState::Expanded => None,
        }
    }

    /// Enter minimized mode remembering `current`. No-op when already
    /// minimized so the first saved index wins.
    pub fn minimize(&mut self, current: usize) -> bool {
        match self {
            MinimizeState::Expanded => {
                *self = MinimizeState::Minimized {
                    saved_index: current,
                };
                true
            }
            MinimizeState::Minimized { .. } => false,
        }
    }

    /// Leave minimized mode, returning the index to restore.
    pub fn expand(&mut self) -> Option<usize> {
        let saved = self.saved_index();
        *self = MinimizeState::Expanded;
        saved
    }

    /// Replace the remembered index while minimized.
    pub fn resave(&mut self, index: usize) {
        if let MinimizeState::Minimized { saved_index } = self {
            *saved_index = index;
        }
    }
}
