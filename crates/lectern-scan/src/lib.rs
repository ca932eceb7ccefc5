//! Tree builders for lectern.
//!
//! Two acquisition paths produce the same canonical course tree:
//!
//! - [`CourseScanner`] walks a directory root recursively, tolerating
//!   unreadable entries (each one becomes a warning and its branch is
//!   dropped).
//! - [`build_tree`]/[`build_course`] reconstruct the tree from a flat list
//!   of `relative/path` records when no directory can be walked.
//!
//! Both results carry identical structure for the same logical layout:
//! same names, paths, classifications and sibling order.
//!
//! # Example
//!
//! ```rust,no_run
//! use lectern_scan::{CourseScanner, ScanConfig};
//!
//! let config = ScanConfig::new("/courses/rust-101");
//! let tree = CourseScanner::new().scan(&config).unwrap();
//!
//! println!("{} files, {} videos", tree.stats.total_files, tree.stats.total_videos);
//! ```
//!
//! # Progress Monitoring
//!
//! Subscribe to progress updates while a scan runs on another task:
//!
//! ```rust,no_run
//! use lectern_scan::CourseScanner;
//!
//! let scanner = CourseScanner::new();
//! let mut progress_rx = scanner.subscribe();
//!
//! tokio::spawn(async move {
//!     while let Ok(progress) = progress_rx.recv().await {
//!         println!("{} files so far", progress.files_scanned);
//!     }
//! });
//! ```

mod ingest;
mod progress;
mod scanner;

pub use ingest::{FileEntry, build_course, build_tree};
pub use progress::ScanProgress;
pub use scanner::CourseScanner;

// Re-export core types for convenience
pub use lectern_core::{
    CourseStats, CourseTree, IngestError, Node, ScanConfig, ScanError, ScanWarning, TreeOrigin,
    WarningKind,
};
