//! Selection movement and tree expansion.

use lectern_core::FileNode;

use crate::ui::{self, VisibleItem, VisibleKind};

use super::App;
use super::state::View;

impl App {
    /// Rebuild the flattened rows after the tree or expansion changed.
    pub(crate) fn refresh_rows(&mut self) {
        self.rows = match &self.tree {
            Some(tree) => ui::flatten(&tree.items, &self.tree_state),
            None => Vec::new(),
        };
        if !self.rows.is_empty() && self.tree_state.selected >= self.rows.len() {
            self.tree_state.selected = self.rows.len() - 1;
        }
    }

    /// The row under the cursor.
    pub(crate) fn current_row(&self) -> Option<&VisibleItem> {
        self.rows.get(self.tree_state.selected)
    }

    /// The file node under the cursor, if the cursor is on a file.
    pub(crate) fn current_file(&self) -> Option<&FileNode> {
        let row = self.current_row()?;
        self.tree.as_ref()?.find(&row.path)?.as_file()
    }

    /// Move the cursor onto a path, if it is currently visible.
    pub(crate) fn select_path(&mut self, path: &str) {
        if let Some(idx) = self.rows.iter().position(|row| row.path == path) {
            self.tree_state.selected = idx;
        }
    }

    /// Move the selection up in the active view.
    pub(crate) fn move_selection_up(&mut self, count: usize) {
        match self.view {
            View::Explorer => self.tree_state.move_up(count),
            View::Warnings => {
                self.warnings_offset = self.warnings_offset.saturating_sub(count);
            }
        }
    }

    /// Move the selection down in the active view.
    pub(crate) fn move_selection_down(&mut self, count: usize) {
        match self.view {
            View::Explorer => self.tree_state.move_down(count, self.rows.len()),
            View::Warnings => {
                let max = self.warning_count().saturating_sub(1);
                self.warnings_offset = (self.warnings_offset + count).min(max);
            }
        }
    }

    /// Jump to the first row of the active view.
    pub(crate) fn jump_to_top(&mut self) {
        match self.view {
            View::Explorer => self.tree_state.jump_to_top(),
            View::Warnings => self.warnings_offset = 0,
        }
    }

    /// Jump to the last row of the active view.
    pub(crate) fn jump_to_bottom(&mut self) {
        match self.view {
            View::Explorer => self.tree_state.jump_to_bottom(self.rows.len()),
            View::Warnings => {
                self.warnings_offset = self.warning_count().saturating_sub(1);
            }
        }
    }

    /// Collapse the current folder, or jump to the parent of anything else.
    pub(crate) fn collapse_current(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        let kind = row.kind;
        let path = row.path.clone();

        match kind {
            VisibleKind::Folder { expanded: true } => {
                self.tree_state.collapse(&path);
                self.refresh_rows();
            }
            _ => {
                if let Some((parent, _)) = path.rsplit_once('/') {
                    let parent = parent.to_string();
                    self.select_path(&parent);
                }
            }
        }
    }

    /// Expand the current folder, or step into it when already expanded.
    pub(crate) fn expand_current(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        let kind = row.kind;
        let path = row.path.clone();

        match kind {
            VisibleKind::Folder { expanded: false } => {
                self.tree_state.expand(&path);
                self.refresh_rows();
            }
            VisibleKind::Folder { expanded: true } => {
                self.tree_state.move_down(1, self.rows.len());
            }
            VisibleKind::File { .. } => {}
        }
    }

    pub(crate) fn warning_count(&self) -> usize {
        self.tree.as_ref().map(|tree| tree.warnings.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    use lectern_core::{ContentRef, CourseTree, FolderNode, Node, TreeOrigin};
    use lectern_track::CompletionSet;

    use crate::player::PlayerConfig;

    use super::*;

    fn app_with_tree() -> App {
        let items = vec![
            Node::Folder(FolderNode::new(
                "mod1",
                "mod1",
                vec![Node::File(FileNode::new(
                    "a.mp4",
                    "mod1/a.mp4",
                    10,
                    SystemTime::UNIX_EPOCH,
                    ContentRef::new("/c/mod1/a.mp4"),
                ))],
            )),
            Node::File(FileNode::new(
                "intro.mp4",
                "intro.mp4",
                20,
                SystemTime::UNIX_EPOCH,
                ContentRef::new("/c/intro.mp4"),
            )),
        ];
        let tree = CourseTree::new(TreeOrigin::FileList, items, Duration::ZERO, Vec::new());

        let mut app = App::new(PathBuf::from("/c"), PlayerConfig::default());
        app.completions = CompletionSet::in_memory();
        app.tree = Some(tree);
        app.tree_state.expand("mod1");
        app.refresh_rows();
        app
    }

    #[test]
    fn test_refresh_rows_follows_expansion() {
        let mut app = app_with_tree();
        assert_eq!(app.rows.len(), 3);

        app.tree_state.collapse("mod1");
        app.refresh_rows();
        assert_eq!(app.rows.len(), 2);
    }

    #[test]
    fn test_collapse_on_file_jumps_to_parent() {
        let mut app = app_with_tree();
        app.select_path("mod1/a.mp4");
        app.collapse_current();
        assert_eq!(app.current_row().unwrap().path, "mod1");
    }

    #[test]
    fn test_current_file_resolves_through_tree() {
        let mut app = app_with_tree();
        app.select_path("mod1/a.mp4");
        let file = app.current_file().unwrap();
        assert_eq!(file.path, "mod1/a.mp4");
        assert!(file.is_video());
    }
}
