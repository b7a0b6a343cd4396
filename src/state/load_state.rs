//! LoadState - User List Load Lifecycle
//!
//! `Idle → Loading → {Rendered | Failed}`; both outcomes are terminal.

use std::sync::Arc;

/// Load state of the user list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Not started
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// List rendered with this many entries
    Rendered(usize),
    /// Failed; holds the diagnostic detail
    Failed(Arc<str>),
}

impl LoadState {
    /// Check if the list was rendered
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }

    /// Check if the load failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        self.is_rendered() || self.is_failed()
    }

    /// Get the failure detail if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
