//! Directory scanner that builds the canonical course tree.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use compact_str::CompactString;
use jwalk::{Parallelism, WalkDir};
use tokio::sync::broadcast;

use lectern_core::{
    ContentRef, CourseTree, FileNode, FolderNode, Node, ScanConfig, ScanError, ScanWarning,
    TreeOrigin, sort_children,
};

use crate::progress::ScanProgress;

/// How many files between progress broadcasts.
const PROGRESS_EVERY: u64 = 100;

/// Course scanner built on jwalk.
///
/// The walk itself may fan out over threads; sibling order in the result is
/// fixed by the node comparator, so the outcome is identical to a
/// sequential depth-first scan.
pub struct CourseScanner {
    progress_tx: broadcast::Sender<ScanProgress>,
}

impl CourseScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        let (progress_tx, _) = broadcast::channel(100);
        Self { progress_tx }
    }

    /// Subscribe to scan progress updates.
    pub fn subscribe(&self) -> broadcast::Receiver<ScanProgress> {
        self.progress_tx.subscribe()
    }

    /// Scan the configured root into a course tree.
    ///
    /// Individual unreadable entries are recorded as warnings and their
    /// branches dropped; only a failure on the root itself fails the call.
    pub fn scan(&self, config: &ScanConfig) -> Result<CourseTree, ScanError> {
        let start = Instant::now();
        let root = config
            .root
            .canonicalize()
            .map_err(|e| ScanError::io(&config.root, e))?;
        if !root.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }
        // Fail fast on an unreadable root; deeper listing failures are
        // tolerated per entry.
        std::fs::read_dir(&root).map_err(|e| ScanError::io(&root, e))?;

        let mut warnings = Vec::new();
        let (mut entries_by_parent, failed_listings) =
            self.collect_entries(config, &root, start, &mut warnings);

        let items = self.build_children(&root, "", &mut entries_by_parent, &failed_listings);

        Ok(CourseTree::new(
            TreeOrigin::DirectoryScan { root },
            items,
            start.elapsed(),
            warnings,
        ))
    }

    /// Walk the root, grouping entries by parent directory.
    ///
    /// Returns the grouped entries plus the set of directories whose
    /// listing failed; those are dropped entirely during assembly.
    fn collect_entries(
        &self,
        config: &ScanConfig,
        root: &Path,
        start: Instant,
        warnings: &mut Vec<ScanWarning>,
    ) -> (HashMap<PathBuf, Vec<EntryInfo>>, HashSet<PathBuf>) {
        let parallelism = match config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: std::time::Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let walker = WalkDir::new(root)
            .parallelism(parallelism)
            .skip_hidden(!config.include_hidden)
            .follow_links(config.follow_symlinks)
            .min_depth(1)
            .max_depth(config.max_depth.map(|d| d as usize).unwrap_or(usize::MAX));

        let mut entries_by_parent: HashMap<PathBuf, Vec<EntryInfo>> = HashMap::new();
        let mut failed_listings: HashSet<PathBuf> = HashSet::new();
        let mut files_seen: u64 = 0;
        let mut dirs_seen: u64 = 0;
        let mut bytes_seen: u64 = 0;

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    warnings.push(ScanWarning::read_error(&path, &err));
                    failed_listings.insert(path);
                    continue;
                }
            };

            let path = entry.path();
            let name = CompactString::new(entry.file_name().to_string_lossy());
            let file_type = entry.file_type();

            let Some(parent) = path.parent().map(Path::to_path_buf) else {
                continue;
            };

            if file_type.is_dir() {
                dirs_seen += 1;
                entries_by_parent.entry(parent).or_default().push(EntryInfo {
                    name,
                    path,
                    size: 0,
                    modified: SystemTime::UNIX_EPOCH,
                    is_dir: true,
                });
            } else if file_type.is_file() {
                let metadata = match entry.metadata() {
                    Ok(m) => m,
                    Err(err) => {
                        warnings.push(ScanWarning::metadata_error(&path, &err));
                        continue;
                    }
                };

                let size = metadata.len();
                let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                files_seen += 1;
                bytes_seen += size;

                entries_by_parent.entry(parent).or_default().push(EntryInfo {
                    name,
                    path: path.clone(),
                    size,
                    modified,
                    is_dir: false,
                });

                if files_seen % PROGRESS_EVERY == 0 {
                    let _ = self.progress_tx.send(ScanProgress {
                        files_scanned: files_seen,
                        dirs_scanned: dirs_seen,
                        bytes_scanned: bytes_seen,
                        current_path: path,
                        errors_count: warnings.len() as u64,
                        elapsed: start.elapsed(),
                    });
                }
            }
            // The tree knows only folders and files; unfollowed symlinks
            // and special files are skipped.
        }

        (entries_by_parent, failed_listings)
    }

    /// Recursively assemble the sorted children of one directory.
    fn build_children(
        &self,
        dir_path: &Path,
        rel_prefix: &str,
        entries_by_parent: &mut HashMap<PathBuf, Vec<EntryInfo>>,
        failed_listings: &HashSet<PathBuf>,
    ) -> Vec<Node> {
        let entries = entries_by_parent.remove(dir_path).unwrap_or_default();
        let mut nodes = Vec::with_capacity(entries.len());

        for entry in entries {
            let rel_path = if rel_prefix.is_empty() {
                entry.name.to_string()
            } else {
                format!("{rel_prefix}/{}", entry.name)
            };

            if entry.is_dir {
                // A directory whose listing failed is dropped whole; the
                // warning was recorded during collection.
                if failed_listings.contains(&entry.path) {
                    continue;
                }
                let children =
                    self.build_children(&entry.path, &rel_path, entries_by_parent, failed_listings);
                nodes.push(Node::Folder(FolderNode::new(entry.name, rel_path, children)));
            } else {
                nodes.push(Node::File(FileNode::new(
                    entry.name,
                    rel_path,
                    entry.size,
                    entry.modified,
                    ContentRef::new(entry.path),
                )));
            }
        }

        sort_children(&mut nodes);
        nodes
    }
}

impl Default for CourseScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Temporary record for one walked entry.
struct EntryInfo {
    name: CompactString,
    path: PathBuf,
    size: u64,
    modified: SystemTime,
    is_dir: bool,
}
