//! Flat-list tree builder.
//!
//! Reconstructs the canonical course tree from a flat list of
//! `relative/path` records, the acquisition fallback when no directory can
//! be walked. The result is structurally identical to what
//! [`CourseScanner`](crate::CourseScanner) produces for the same layout.

use std::collections::HashMap;
use std::time::{Instant, SystemTime};

use lectern_core::{
    ContentRef, CourseTree, FileNode, FolderNode, IngestError, Node, TreeOrigin, sort_children,
};

/// One file record from the flat acquisition source.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// `/`-delimited path relative to the course root.
    pub relative_path: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
    /// Handle to the file's bytes.
    pub source: ContentRef,
}

/// Intermediate per-level maps keyed by path segment.
///
/// Folders and files live in separate maps so a same-named pair cannot
/// clobber each other; well-formed input never produces one.
#[derive(Default)]
struct PendingFolder {
    folders: HashMap<String, PendingFolder>,
    files: HashMap<String, FileNode>,
}

/// Build sorted top-level nodes from a flat entry list.
///
/// Folder records are created lazily the first time a segment is seen; the
/// file record lands exactly once at the leaf, last write winning on a
/// duplicate path. The whole batch fails on the first malformed path. An
/// empty list yields an empty sequence.
pub fn build_tree(entries: Vec<FileEntry>) -> Result<Vec<Node>, IngestError> {
    let mut root = PendingFolder::default();

    for entry in entries {
        let segments = split_path(&entry.relative_path)?;
        insert_entry(&mut root, &segments, entry);
    }

    Ok(into_nodes(root, ""))
}

/// Build a complete course tree from a flat entry list.
pub fn build_course(entries: Vec<FileEntry>) -> Result<CourseTree, IngestError> {
    let start = Instant::now();
    let items = build_tree(entries)?;
    Ok(CourseTree::new(
        TreeOrigin::FileList,
        items,
        start.elapsed(),
        Vec::new(),
    ))
}

fn split_path(path: &str) -> Result<Vec<String>, IngestError> {
    if path.is_empty() {
        return Err(IngestError::EmptyPath);
    }
    if path.starts_with('/') {
        return Err(IngestError::AbsolutePath {
            path: path.to_string(),
        });
    }
    let segments: Vec<String> = path.split('/').map(String::from).collect();
    if segments.iter().any(String::is_empty) {
        return Err(IngestError::EmptySegment {
            path: path.to_string(),
        });
    }
    Ok(segments)
}

fn insert_entry(root: &mut PendingFolder, segments: &[String], entry: FileEntry) {
    let (leaf, parents) = segments.split_last().expect("segments are never empty");

    let mut level = root;
    for segment in parents {
        level = level.folders.entry(segment.clone()).or_default();
    }

    level.files.insert(
        leaf.clone(),
        FileNode::new(
            leaf.as_str(),
            entry.relative_path,
            entry.size,
            entry.modified,
            entry.source,
        ),
    );
}

fn into_nodes(pending: PendingFolder, prefix: &str) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(pending.folders.len() + pending.files.len());

    for (name, child) in pending.folders {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };
        let children = into_nodes(child, &path);
        nodes.push(Node::Folder(FolderNode::new(name, path, children)));
    }
    nodes.extend(pending.files.into_values().map(Node::File));

    sort_children(&mut nodes);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, size: u64) -> FileEntry {
        FileEntry {
            relative_path: path.to_string(),
            size,
            modified: SystemTime::UNIX_EPOCH,
            source: ContentRef::new(format!("/course/{path}")),
        }
    }

    #[test]
    fn test_empty_list_yields_empty_tree() {
        assert_eq!(build_tree(Vec::new()).unwrap(), Vec::new());
    }

    #[test]
    fn test_course_scenario() {
        let items = build_tree(vec![
            entry("mod1/a.mp4", 100),
            entry("mod1/b.png", 200),
            entry("intro.mp4", 50),
        ])
        .unwrap();

        assert_eq!(items.len(), 2);

        let mod1 = items[0].as_folder().unwrap();
        assert_eq!(mod1.path, "mod1");
        let child_names: Vec<&str> = mod1.children.iter().map(Node::name).collect();
        assert_eq!(child_names, ["a.mp4", "b.png"]);
        assert_eq!(mod1.children[0].as_file().unwrap().size, 100);

        let intro = items[1].as_file().unwrap();
        assert_eq!(intro.path, "intro.mp4");
        assert_eq!(intro.size, 50);
        assert!(intro.is_video());
    }

    #[test]
    fn test_deep_nesting_builds_folder_chain() {
        let items = build_tree(vec![entry("a/b/c/deep.mp4", 1)]).unwrap();

        let a = items[0].as_folder().unwrap();
        let b = a.children[0].as_folder().unwrap();
        let c = b.children[0].as_folder().unwrap();
        assert_eq!(a.path, "a");
        assert_eq!(b.path, "a/b");
        assert_eq!(c.path, "a/b/c");
        assert_eq!(c.children[0].path(), "a/b/c/deep.mp4");
    }

    #[test]
    fn test_duplicate_path_last_write_wins() {
        let items = build_tree(vec![entry("mod1/a.mp4", 100), entry("mod1/a.mp4", 999)]).unwrap();

        let mod1 = items[0].as_folder().unwrap();
        assert_eq!(mod1.children.len(), 1);
        assert_eq!(mod1.children[0].as_file().unwrap().size, 999);
    }

    #[test]
    fn test_malformed_paths_fail_the_batch() {
        assert_eq!(build_tree(vec![entry("", 1)]).unwrap_err(), IngestError::EmptyPath);
        assert_eq!(
            build_tree(vec![entry("/abs/path.mp4", 1)]).unwrap_err(),
            IngestError::AbsolutePath {
                path: "/abs/path.mp4".to_string()
            }
        );
        assert_eq!(
            build_tree(vec![entry("a//b.mp4", 1)]).unwrap_err(),
            IngestError::EmptySegment {
                path: "a//b.mp4".to_string()
            }
        );
        assert_eq!(
            build_tree(vec![entry("a/", 1)]).unwrap_err(),
            IngestError::EmptySegment {
                path: "a/".to_string()
            }
        );

        // One bad entry poisons the whole batch, even alongside good ones.
        let err = build_tree(vec![entry("good.mp4", 1), entry("", 1)]);
        assert!(err.is_err());
    }

    #[test]
    fn test_build_course_collects_stats() {
        let tree = build_course(vec![
            entry("mod1/a.mp4", 100),
            entry("mod1/b.png", 200),
            entry("intro.mp4", 50),
        ])
        .unwrap();

        assert_eq!(tree.origin, TreeOrigin::FileList);
        assert_eq!(tree.stats.total_videos, 2);
        assert_eq!(tree.stats.total_images, 1);
        assert_eq!(tree.stats.total_size, 350);
        assert!(!tree.has_warnings());
    }
}
