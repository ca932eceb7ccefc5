//! Application state types and enums.

use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use lectern_core::{CourseTree, ScanError};
use lectern_scan::ScanProgress;

/// Application mode representing the current UI state.
/// Scanning is NOT a mode - a scan runs in the background while the user
/// keeps interacting in Normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    Quit,
}

/// Active view during normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, FromRepr)]
pub enum View {
    #[default]
    Explorer,
    Warnings,
}

impl View {
    /// Move to next view (cyclic).
    pub fn next(self) -> Self {
        let current = self as usize;
        let next = (current + 1) % Self::iter().count();
        Self::from_repr(next).unwrap_or_default()
    }

    /// Move to previous view (cyclic).
    pub fn prev(self) -> Self {
        let current = self as usize;
        let count = Self::iter().count();
        let prev = (current + count - 1) % count;
        Self::from_repr(prev).unwrap_or_default()
    }
}

/// Result from a background scan operation.
pub enum ScanOutcome {
    /// Progress update while the walk runs.
    Progress(ScanProgress),
    /// The scan finished (or failed on the root).
    Complete(Result<CourseTree, ScanError>),
}
