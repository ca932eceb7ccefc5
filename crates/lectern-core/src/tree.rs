//! Course tree container and summary statistics.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::error::ScanWarning;
use crate::node::Node;

/// Where a tree came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum TreeOrigin {
    /// Recursive scan of a directory root.
    DirectoryScan { root: PathBuf },
    /// Reconstructed from a flat list of relative paths.
    FileList,
}

/// Summary statistics for a built tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStats {
    /// Total number of files.
    pub total_files: u64,
    /// Total number of folders.
    pub total_folders: u64,
    /// Files classified as video.
    pub total_videos: u64,
    /// Files classified as image.
    pub total_images: u64,
    /// Sum of file sizes in bytes.
    pub total_size: u64,
    /// Deepest nesting level (top-level entries are depth 1).
    pub max_depth: u32,
}

impl CourseStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect stats over a built tree.
    pub fn collect(items: &[Node]) -> Self {
        let mut stats = Self::default();
        stats.walk(items, 1);
        stats
    }

    fn walk(&mut self, items: &[Node], depth: u32) {
        for node in items {
            match node {
                Node::Folder(folder) => {
                    self.total_folders += 1;
                    self.max_depth = self.max_depth.max(depth);
                    self.walk(&folder.children, depth + 1);
                }
                Node::File(file) => {
                    self.total_files += 1;
                    self.total_size += file.size;
                    self.max_depth = self.max_depth.max(depth);
                    if file.media.is_video() {
                        self.total_videos += 1;
                    }
                    if file.media.is_image() {
                        self.total_images += 1;
                    }
                }
            }
        }
    }
}

/// A fully built, immutable course tree.
///
/// Rebuilding (a new folder selection or rescan) replaces the tree
/// wholesale; nothing patches an existing tree in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseTree {
    /// Where the tree came from.
    pub origin: TreeOrigin,

    /// Top-level entries (the unnamed root's children).
    pub items: Vec<Node>,

    /// When this tree was built.
    pub built_at: SystemTime,

    /// How long the build took.
    pub build_duration: Duration,

    /// Summary statistics.
    pub stats: CourseStats,

    /// Non-fatal problems recorded while building.
    pub warnings: Vec<ScanWarning>,
}

impl CourseTree {
    /// Create a new course tree, collecting stats over the items.
    pub fn new(
        origin: TreeOrigin,
        items: Vec<Node>,
        build_duration: Duration,
        warnings: Vec<ScanWarning>,
    ) -> Self {
        let stats = CourseStats::collect(&items);
        Self {
            origin,
            items,
            built_at: SystemTime::now(),
            build_duration,
            stats,
            warnings,
        }
    }

    /// Check if the tree has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total size of all files in bytes.
    pub fn total_size(&self) -> u64 {
        self.stats.total_size
    }

    /// Check if there were any warnings while building.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Display name of the course.
    pub fn title(&self) -> String {
        match &self.origin {
            TreeOrigin::DirectoryScan { root } => root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| root.to_string_lossy().into_owned()),
            TreeOrigin::FileList => "Course".to_string(),
        }
    }

    /// Look up a node by its tree path.
    ///
    /// Paths identify exactly one node, so the first match is the only one.
    pub fn find(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('/');
        let first = segments.next()?;
        let mut node = self.items.iter().find(|n| n.name() == first)?;
        for segment in segments {
            node = node.children().iter().find(|n| n.name() == segment)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ContentRef, FileNode, FolderNode};

    fn file(name: &str, path: &str, size: u64) -> Node {
        Node::File(FileNode::new(
            name,
            path,
            size,
            SystemTime::UNIX_EPOCH,
            ContentRef::new("/src"),
        ))
    }

    fn sample_items() -> Vec<Node> {
        vec![
            Node::Folder(FolderNode::new(
                "mod1",
                "mod1",
                vec![
                    file("a.mp4", "mod1/a.mp4", 100),
                    file("b.png", "mod1/b.png", 200),
                ],
            )),
            file("intro.mp4", "intro.mp4", 50),
        ]
    }

    #[test]
    fn test_stats_collect() {
        let stats = CourseStats::collect(&sample_items());
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.total_folders, 1);
        assert_eq!(stats.total_videos, 2);
        assert_eq!(stats.total_images, 1);
        assert_eq!(stats.total_size, 350);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn test_stats_empty() {
        let stats = CourseStats::collect(&[]);
        assert_eq!(stats, CourseStats::default());
    }

    #[test]
    fn test_tree_find() {
        let tree = CourseTree::new(
            TreeOrigin::FileList,
            sample_items(),
            Duration::ZERO,
            Vec::new(),
        );
        assert_eq!(tree.find("mod1/b.png").map(Node::name), Some("b.png"));
        assert!(tree.find("mod1").is_some_and(Node::is_folder));
        assert!(tree.find("mod1/missing.mp4").is_none());
        assert!(tree.find("intro.mp4/x").is_none());
    }

    #[test]
    fn test_tree_title() {
        let tree = CourseTree::new(
            TreeOrigin::DirectoryScan {
                root: PathBuf::from("/courses/rust-101"),
            },
            Vec::new(),
            Duration::ZERO,
            Vec::new(),
        );
        assert_eq!(tree.title(), "rust-101");
    }
}
