//! Folder and file node types.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::media::MediaKind;

/// Opaque handle to a file's bytes on disk.
///
/// The tree never reads content eagerly; the handle is passed along when
/// the file is handed to a player or viewer. Handles are owned by the tree
/// that produced them and dropped with it when the tree is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef(PathBuf);

impl ContentRef {
    /// Create a handle from an absolute source path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The path of the underlying bytes.
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// A folder in the course tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name (a single path segment).
    pub name: CompactString,

    /// `/`-joined path from the tree root; unique within the tree.
    pub path: String,

    /// Child nodes, folders first, each group in name order.
    pub children: Vec<Node>,
}

impl FolderNode {
    /// Create a folder node.
    pub fn new(
        name: impl Into<CompactString>,
        path: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            children,
        }
    }
}

/// A file in the course tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    /// File name (a single path segment).
    pub name: CompactString,

    /// `/`-joined path from the tree root; unique within the tree.
    pub path: String,

    /// Size in bytes.
    pub size: u64,

    /// Last modification time.
    pub modified: SystemTime,

    /// Classification derived from the file name.
    pub media: MediaKind,

    /// Handle to the file's bytes.
    pub source: ContentRef,
}

impl FileNode {
    /// Create a file node, classifying it from its name.
    pub fn new(
        name: impl Into<CompactString>,
        path: impl Into<String>,
        size: u64,
        modified: SystemTime,
        source: ContentRef,
    ) -> Self {
        let name = name.into();
        let media = MediaKind::classify(&name);
        Self {
            name,
            path: path.into(),
            size,
            modified,
            media,
            source,
        }
    }

    /// Check if this file is a video.
    pub fn is_video(&self) -> bool {
        self.media.is_video()
    }

    /// Check if this file is an image.
    pub fn is_image(&self) -> bool {
        self.media.is_image()
    }
}

/// A single entry in the course tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// A folder with child entries.
    Folder(FolderNode),
    /// A leaf file.
    File(FileNode),
}

impl Node {
    /// Node name (a single path segment).
    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    /// `/`-joined path from the tree root.
    pub fn path(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.path,
            Node::File(file) => &file.path,
        }
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// Get the folder variant, if any.
    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    /// Get the file variant, if any.
    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::Folder(_) => None,
            Node::File(file) => Some(file),
        }
    }

    /// Child nodes; empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Folder(folder) => &folder.children,
            Node::File(_) => &[],
        }
    }
}
