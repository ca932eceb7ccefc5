//! Aggregation over the course tree.

use lectern_core::{FileNode, Node};

use crate::completion::CompletionSet;

/// Recursively count video files across a subtree sequence.
///
/// Folders contribute only through their descendants.
pub fn count_videos(items: &[Node]) -> u64 {
    items
        .iter()
        .map(|node| match node {
            Node::Folder(folder) => count_videos(&folder.children),
            Node::File(file) => file.is_video() as u64,
        })
        .sum()
}

/// First video file in depth-first canonical order, if any.
///
/// Folders are descended in order; non-video files are skipped. Drives
/// auto-selection right after a tree is (re)built.
pub fn find_first_video(items: &[Node]) -> Option<&FileNode> {
    for node in items {
        match node {
            Node::File(file) if file.is_video() => return Some(file),
            Node::Folder(folder) => {
                if let Some(found) = find_first_video(&folder.children) {
                    return Some(found);
                }
            }
            Node::File(_) => {}
        }
    }
    None
}

/// Completion figures for one tree measured against the persistent set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    /// Videos in the current tree.
    pub total_videos: u64,
    /// Every entry ever marked completed, including paths the current tree
    /// no longer contains. Counted as-is on purpose, so the percentage can
    /// exceed 100 after a course shrinks.
    pub completed: u64,
    /// `completed / total_videos * 100`, or 0.0 for a tree with no videos.
    pub percent: f64,
}

impl ProgressSummary {
    /// Compute the summary for a tree and completion set.
    pub fn compute(items: &[Node], completions: &CompletionSet) -> Self {
        let total_videos = count_videos(items);
        let completed = completions.len() as u64;
        let percent = if total_videos > 0 {
            completed as f64 / total_videos as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_videos,
            completed,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use lectern_core::{ContentRef, FolderNode};

    use super::*;

    fn file(name: &str, path: &str) -> Node {
        Node::File(FileNode::new(
            name,
            path,
            0,
            SystemTime::UNIX_EPOCH,
            ContentRef::new("/src"),
        ))
    }

    fn folder(name: &str, children: Vec<Node>) -> Node {
        Node::Folder(FolderNode::new(name, name, children))
    }

    #[test]
    fn test_count_videos_recursive() {
        let items = vec![
            folder(
                "mod1",
                vec![file("a.mp4", "mod1/a.mp4"), file("b.png", "mod1/b.png")],
            ),
            file("intro.mp4", "intro.mp4"),
            file("readme.txt", "readme.txt"),
        ];
        assert_eq!(count_videos(&items), 2);
    }

    #[test]
    fn test_count_videos_empty() {
        assert_eq!(count_videos(&[]), 0);
    }

    #[test]
    fn test_find_first_video_depth_first() {
        let items = vec![
            folder(
                "mod1",
                vec![file("z-last.mp4", "mod1/z-last.mp4")],
            ),
            file("intro.mp4", "intro.mp4"),
        ];
        // mod1 sorts first, so its video wins over the top-level one.
        assert_eq!(find_first_video(&items).unwrap().path, "mod1/z-last.mp4");
    }

    #[test]
    fn test_find_first_video_none_for_images_only() {
        let items = vec![folder(
            "gallery",
            vec![file("a.png", "gallery/a.png"), file("b.jpg", "gallery/b.jpg")],
        )];
        assert!(find_first_video(&items).is_none());
    }

    #[test]
    fn test_progress_zero_for_empty_tree() {
        let completions = CompletionSet::in_memory();
        let summary = ProgressSummary::compute(&[], &completions);
        assert_eq!(summary.total_videos, 0);
        assert_eq!(summary.percent, 0.0);
        assert!(summary.percent.is_finite());
    }

    #[test]
    fn test_progress_counts_stale_entries() {
        let mut completions = CompletionSet::in_memory();
        completions.toggle("gone/old.mp4");
        completions.toggle("intro.mp4");

        let items = vec![file("intro.mp4", "intro.mp4")];
        let summary = ProgressSummary::compute(&items, &completions);
        assert_eq!(summary.total_videos, 1);
        assert_eq!(summary.completed, 2);
        assert!(summary.percent > 100.0);
    }
}
