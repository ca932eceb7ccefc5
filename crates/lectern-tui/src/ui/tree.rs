//! Course tree widget.

use std::collections::HashSet;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, StatefulWidget, Widget};

use lectern_core::{MediaKind, Node};
use lectern_track::CompletionSet;

use crate::theme::Theme;
use crate::ui::format_size;

/// State for the tree view.
#[derive(Debug, Default, Clone)]
pub struct TreeState {
    /// Currently selected index in the flattened view.
    pub selected: usize,
    /// Scroll offset.
    pub offset: usize,
    /// Set of expanded folder paths.
    pub expanded: HashSet<String>,
}

impl TreeState {
    /// Toggle expansion of a folder path.
    pub fn toggle_expand(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    /// Expand a folder path.
    pub fn expand(&mut self, path: &str) {
        self.expanded.insert(path.to_string());
    }

    /// Collapse a folder path.
    pub fn collapse(&mut self, path: &str) {
        self.expanded.remove(path);
    }

    /// Check if a folder path is expanded.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Move selection up.
    pub fn move_up(&mut self, count: usize) {
        self.selected = self.selected.saturating_sub(count);
    }

    /// Move selection down.
    pub fn move_down(&mut self, count: usize, max: usize) {
        self.selected = (self.selected + count).min(max.saturating_sub(1));
    }

    /// Jump to top.
    pub fn jump_to_top(&mut self) {
        self.selected = 0;
    }

    /// Jump to bottom.
    pub fn jump_to_bottom(&mut self, max: usize) {
        self.selected = max.saturating_sub(1);
    }

    /// Ensure the selected item is visible, adjusting the offset if needed.
    pub fn ensure_visible(&mut self, viewport_height: usize) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if viewport_height > 0 && self.selected >= self.offset + viewport_height {
            self.offset = self.selected - viewport_height + 1;
        }
    }
}

/// A flattened visible row in the tree.
#[derive(Debug, Clone)]
pub struct VisibleItem {
    pub path: String,
    pub name: String,
    pub depth: usize,
    pub kind: VisibleKind,
    pub is_last_sibling: bool,
    pub parent_last_siblings: Vec<bool>,
}

/// Lightweight node info for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleKind {
    Folder { expanded: bool },
    File { size: u64, media: MediaKind },
}

/// Flatten a tree to its visible rows given the expansion state.
pub fn flatten(items: &[Node], state: &TreeState) -> Vec<VisibleItem> {
    let mut rows = Vec::new();
    flatten_level(items, 0, &[], state, &mut rows);
    rows
}

fn flatten_level(
    items: &[Node],
    depth: usize,
    parent_last_siblings: &[bool],
    state: &TreeState,
    rows: &mut Vec<VisibleItem>,
) {
    let count = items.len();
    for (i, node) in items.iter().enumerate() {
        let is_last = i + 1 == count;
        match node {
            Node::Folder(folder) => {
                let expanded = state.is_expanded(&folder.path);
                rows.push(VisibleItem {
                    path: folder.path.clone(),
                    name: folder.name.to_string(),
                    depth,
                    kind: VisibleKind::Folder { expanded },
                    is_last_sibling: is_last,
                    parent_last_siblings: parent_last_siblings.to_vec(),
                });
                if expanded {
                    let mut child_lasts = parent_last_siblings.to_vec();
                    child_lasts.push(is_last);
                    flatten_level(&folder.children, depth + 1, &child_lasts, state, rows);
                }
            }
            Node::File(file) => {
                rows.push(VisibleItem {
                    path: file.path.clone(),
                    name: file.name.to_string(),
                    depth,
                    kind: VisibleKind::File {
                        size: file.size,
                        media: file.media,
                    },
                    is_last_sibling: is_last,
                    parent_last_siblings: parent_last_siblings.to_vec(),
                });
            }
        }
    }
}

/// Course tree view widget.
pub struct CourseTreeView<'a> {
    rows: &'a [VisibleItem],
    theme: &'a Theme,
    completions: &'a CompletionSet,
    now_playing: Option<&'a str>,
    block: Option<Block<'a>>,
}

impl<'a> CourseTreeView<'a> {
    /// Create a new tree view over pre-flattened rows.
    pub fn new(
        rows: &'a [VisibleItem],
        theme: &'a Theme,
        completions: &'a CompletionSet,
        now_playing: Option<&'a str>,
    ) -> Self {
        Self {
            rows,
            theme,
            completions,
            now_playing,
            block: None,
        }
    }

    /// Set the block (border) for the widget.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl StatefulWidget for CourseTreeView<'_> {
    type State = TreeState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner_area = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner_area.height == 0 || inner_area.width == 0 {
            return;
        }

        let viewport_height = inner_area.height as usize;
        state.ensure_visible(viewport_height);

        let start = state.offset;
        let end = (start + viewport_height).min(self.rows.len());
        let size_text_width: u16 = 10;

        for (row_idx, item_idx) in (start..end).enumerate() {
            let item = &self.rows[item_idx];
            let y = inner_area.y + row_idx as u16;
            let is_selected = item_idx == state.selected;
            let is_completed = self.completions.contains(&item.path);
            let is_playing = self.now_playing == Some(item.path.as_str());

            // Tree-drawing prefix
            let mut prefix = String::new();
            for &parent_is_last in &item.parent_last_siblings {
                prefix.push_str(if parent_is_last { "  " } else { "│ " });
            }
            if item.depth > 0 {
                prefix.push_str(if item.is_last_sibling { "└─" } else { "├─" });
            }

            let (marker, base_style) = match item.kind {
                VisibleKind::Folder { expanded } => {
                    (if expanded { "▼ " } else { "▶ " }, self.theme.folder)
                }
                VisibleKind::File { media, .. } => match media {
                    MediaKind::Video => ("▸ ", self.theme.video),
                    MediaKind::Image => ("◆ ", self.theme.image),
                    MediaKind::Other => ("  ", self.theme.file),
                },
            };

            let name_style = if is_playing {
                self.theme.playing
            } else if is_completed {
                self.theme.completed
            } else {
                base_style
            };

            // Completed check mark, matching the explorer it mirrors
            let check = if is_completed { " ✓" } else { "" };

            let prefix_width = prefix.chars().count() + marker.chars().count() + check.chars().count();
            let available_for_name = inner_area
                .width
                .saturating_sub(prefix_width as u16)
                .saturating_sub(size_text_width + 1) as usize;

            let name: String = if item.name.chars().count() > available_for_name {
                let truncated: String = item
                    .name
                    .chars()
                    .take(available_for_name.saturating_sub(1))
                    .collect();
                format!("{truncated}…")
            } else {
                item.name.clone()
            };

            let size_text = match item.kind {
                VisibleKind::File { size, .. } => format!("{:>10}", format_size(size)),
                VisibleKind::Folder { .. } => format!("{:>10}", ""),
            };

            let name_width = name.chars().count();
            let padding = " ".repeat(available_for_name.saturating_sub(name_width));

            let line = Line::from(vec![
                Span::styled(prefix, self.theme.tree_lines),
                Span::styled(marker, Style::default().fg(self.theme.muted)),
                Span::styled(name, name_style),
                Span::styled(check, Style::default().fg(self.theme.success)),
                Span::raw(padding),
                Span::raw(" "),
                Span::styled(size_text, Style::default().fg(self.theme.muted)),
            ]);

            let line = if is_selected {
                line.style(self.theme.selected)
            } else {
                line
            };

            let line_area = Rect::new(inner_area.x, y, inner_area.width, 1);
            Widget::render(line, line_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use lectern_core::{ContentRef, FileNode, FolderNode};

    use super::*;

    fn course() -> Vec<Node> {
        vec![
            Node::Folder(FolderNode::new(
                "mod1",
                "mod1",
                vec![
                    Node::File(FileNode::new(
                        "a.mp4",
                        "mod1/a.mp4",
                        10,
                        SystemTime::UNIX_EPOCH,
                        ContentRef::new("/c/mod1/a.mp4"),
                    )),
                ],
            )),
            Node::File(FileNode::new(
                "intro.mp4",
                "intro.mp4",
                20,
                SystemTime::UNIX_EPOCH,
                ContentRef::new("/c/intro.mp4"),
            )),
        ]
    }

    #[test]
    fn test_flatten_collapsed_hides_children() {
        let state = TreeState::default();
        let rows = flatten(&course(), &state);
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["mod1", "intro.mp4"]);
    }

    #[test]
    fn test_flatten_expanded_shows_children_in_order() {
        let mut state = TreeState::default();
        state.expand("mod1");
        let rows = flatten(&course(), &state);
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["mod1", "mod1/a.mp4", "intro.mp4"]);
        assert_eq!(rows[1].depth, 1);
        assert!(!rows[0].is_last_sibling);
        assert!(rows[2].is_last_sibling);
    }

    #[test]
    fn test_toggle_expand_round_trip() {
        let mut state = TreeState::default();
        state.toggle_expand("mod1");
        assert!(state.is_expanded("mod1"));
        state.toggle_expand("mod1");
        assert!(!state.is_expanded("mod1"));
    }

    #[test]
    fn test_ensure_visible_scrolls() {
        let mut state = TreeState::default();
        state.selected = 12;
        state.ensure_visible(10);
        assert_eq!(state.offset, 3);
        state.selected = 1;
        state.ensure_visible(10);
        assert_eq!(state.offset, 1);
    }
}
