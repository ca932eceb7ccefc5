//! Input handling and key dispatch.

use crossterm::event::{Event, KeyEventKind};

use lectern_core::MediaKind;

use crate::event::KeyAction;
use crate::player::{self, PlayResult};
use crate::ui::VisibleKind;

use super::App;
use super::state::{AppMode, View};

const PAGE_SIZE: usize = 10;

impl App {
    /// Handle a terminal event. Returns true when a rescan was requested.
    pub(crate) fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_action(KeyAction::from_key_event(key))
            }
            _ => false,
        }
    }

    fn handle_key_action(&mut self, action: KeyAction) -> bool {
        if self.mode == AppMode::Help {
            if matches!(
                action,
                KeyAction::ToggleHelp | KeyAction::Cancel | KeyAction::Quit
            ) {
                self.mode = AppMode::Normal;
            }
            return false;
        }

        match action {
            KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => self.theme = self.theme.toggle(),
            KeyAction::NextView => self.view = self.view.next(),
            KeyAction::PrevView => self.view = self.view.prev(),
            KeyAction::Cancel => self.status = None,
            KeyAction::Refresh => return true,

            KeyAction::MoveUp => self.move_selection_up(1),
            KeyAction::MoveDown => self.move_selection_down(1),
            KeyAction::PageUp => self.move_selection_up(PAGE_SIZE),
            KeyAction::PageDown => self.move_selection_down(PAGE_SIZE),
            KeyAction::JumpToTop => self.jump_to_top(),
            KeyAction::JumpToBottom => self.jump_to_bottom(),

            KeyAction::Collapse if self.view == View::Explorer => self.collapse_current(),
            KeyAction::Expand if self.view == View::Explorer => self.expand_current(),
            KeyAction::Activate if self.view == View::Explorer => self.activate_current(),
            KeyAction::ToggleComplete if self.view == View::Explorer => {
                self.toggle_current_complete()
            }

            KeyAction::Collapse
            | KeyAction::Expand
            | KeyAction::Activate
            | KeyAction::ToggleComplete
            | KeyAction::None => {}
        }
        false
    }

    /// Enter: open a folder or hand a file to the player.
    fn activate_current(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        let kind = row.kind;
        let path = row.path.clone();

        match kind {
            VisibleKind::Folder { .. } => {
                self.tree_state.toggle_expand(&path);
                self.refresh_rows();
            }
            VisibleKind::File { media, .. } if !media.is_playable() => {
                self.status = Some(format!("{path} is not playable"));
            }
            VisibleKind::File { .. } => {
                let Some(file) = self.current_file() else {
                    return;
                };
                let name = file.name.to_string();
                match player::open_media(file, &self.player) {
                    PlayResult::Launched => {
                        self.now_playing = Some(path);
                        self.status = Some(format!("Playing {name}"));
                    }
                    PlayResult::NotPlayable => {
                        self.status = Some(format!("{name} is not playable"));
                    }
                    PlayResult::Error(message) => self.status = Some(message),
                }
            }
        }
    }

    /// Space: toggle completion on the current video.
    fn toggle_current_complete(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        let is_video = matches!(
            row.kind,
            VisibleKind::File {
                media: MediaKind::Video,
                ..
            }
        );
        let path = row.path.clone();

        if !is_video {
            self.status = Some("Only videos can be marked completed".to_string());
            return;
        }

        let completed = self.completions.toggle(&path);
        self.status = Some(if completed {
            format!("Completed {path}")
        } else {
            format!("Unmarked {path}")
        });
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    use lectern_core::{ContentRef, CourseTree, FileNode, Node, TreeOrigin};
    use lectern_track::CompletionSet;

    use crate::player::PlayerConfig;

    use super::*;

    fn app_with_video() -> App {
        let items = vec![Node::File(FileNode::new(
            "intro.mp4",
            "intro.mp4",
            20,
            SystemTime::UNIX_EPOCH,
            ContentRef::new("/c/intro.mp4"),
        ))];
        let tree = CourseTree::new(TreeOrigin::FileList, items, Duration::ZERO, Vec::new());

        let mut app = App::new(PathBuf::from("/c"), PlayerConfig::default());
        app.completions = CompletionSet::in_memory();
        app.tree = Some(tree);
        app.refresh_rows();
        app
    }

    #[test]
    fn test_space_toggles_completion() {
        let mut app = app_with_video();
        app.select_path("intro.mp4");

        app.handle_key_action(KeyAction::ToggleComplete);
        assert!(app.completions.contains("intro.mp4"));

        app.handle_key_action(KeyAction::ToggleComplete);
        assert!(!app.completions.contains("intro.mp4"));
    }

    #[test]
    fn test_refresh_is_requested_not_handled_inline() {
        let mut app = app_with_video();
        assert!(app.handle_key_action(KeyAction::Refresh));
    }

    #[test]
    fn test_quit_sets_mode() {
        let mut app = app_with_video();
        app.handle_key_action(KeyAction::Quit);
        assert_eq!(app.mode, AppMode::Quit);
    }

    #[test]
    fn test_help_swallows_other_keys() {
        let mut app = app_with_video();
        app.handle_key_action(KeyAction::ToggleHelp);
        assert_eq!(app.mode, AppMode::Help);

        app.handle_key_action(KeyAction::MoveDown);
        assert_eq!(app.mode, AppMode::Help);

        app.handle_key_action(KeyAction::Cancel);
        assert_eq!(app.mode, AppMode::Normal);
    }
}
