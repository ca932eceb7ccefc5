//! Completion tracking and aggregation for lectern.
//!
//! This crate owns the state derived *from* a course tree rather than the
//! tree itself:
//!
//! - [`CompletionSet`] - the persisted set of paths the user has marked
//!   watched, independent of any particular tree instance
//! - [`count_videos`] / [`ProgressSummary`] - recursive aggregation over a
//!   tree, measured against the completion set
//! - [`find_first_video`] - depth-first selection of the first playable
//!   file after a tree is (re)built
//!
//! # Example
//!
//! ```rust,ignore
//! use lectern_scan::{CourseScanner, ScanConfig};
//! use lectern_track::{CompletionSet, ProgressSummary, find_first_video};
//!
//! let tree = CourseScanner::new().scan(&ScanConfig::new("/courses/rust-101")).unwrap();
//! let mut completions = CompletionSet::load();
//!
//! if let Some(first) = find_first_video(&tree.items) {
//!     completions.toggle(&first.path);
//! }
//!
//! let summary = ProgressSummary::compute(&tree.items, &completions);
//! println!("{} / {} videos ({:.0}%)", summary.completed, summary.total_videos, summary.percent);
//! ```

mod aggregate;
mod completion;

pub use aggregate::{ProgressSummary, count_videos, find_first_video};
pub use completion::{CompletionSet, STORE_FILE};

// Re-export core types for convenience
pub use lectern_core::{CourseTree, FileNode, Node};
