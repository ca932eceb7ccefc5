//! Core types for lectern.
//!
//! This crate provides the canonical course tree that both acquisition
//! paths (directory scan and flat file list) converge to: folder/file
//! nodes, media classification, the sibling sort order, and the tree
//! container with its summary statistics.

mod config;
mod error;
mod media;
mod node;
mod sort;
mod tree;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::{IngestError, ScanError, ScanWarning, WarningKind};
pub use media::{IMAGE_EXTENSIONS, MediaKind, VIDEO_EXTENSIONS};
pub use node::{ContentRef, FileNode, FolderNode, Node};
pub use sort::{compare_nodes, sort_children, sort_tree};
pub use tree::{CourseStats, CourseTree, TreeOrigin};
