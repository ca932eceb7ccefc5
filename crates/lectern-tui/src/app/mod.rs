//! Application state and main loop.

mod input;
mod navigation;
mod render;
mod scanning;
pub mod state;

use std::path::PathBuf;

use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::DefaultTerminal;

use lectern_core::{CourseTree, ScanConfig};
use lectern_scan::ScanProgress;
use lectern_track::{CompletionSet, ProgressSummary, find_first_video};

use crate::player::PlayerConfig;
use crate::theme::Theme;
use crate::ui::{TreeState, VisibleItem};
use state::{AppMode, ScanOutcome, View};

/// Convenience result type for the TUI.
pub type AppResult<T> = color_eyre::Result<T>;

/// The main application.
pub struct App {
    pub(crate) config: ScanConfig,
    pub(crate) player: PlayerConfig,
    pub(crate) mode: AppMode,
    pub(crate) view: View,
    pub(crate) theme: Theme,

    /// The current course tree; replaced wholesale on every (re)scan.
    pub(crate) tree: Option<CourseTree>,
    /// Flattened visible rows for the explorer.
    pub(crate) rows: Vec<VisibleItem>,
    pub(crate) tree_state: TreeState,

    /// Session-scoped completion state, shared with the aggregator.
    pub(crate) completions: CompletionSet,
    /// Tree path of the file currently handed to the player.
    pub(crate) now_playing: Option<String>,

    pub(crate) scanning: bool,
    pub(crate) scan_progress: ScanProgress,
    pub(crate) scan_error: Option<String>,

    pub(crate) status: Option<String>,
    pub(crate) warnings_offset: usize,
}

impl App {
    /// Create a new application for a course root.
    pub fn new(root: PathBuf, player: PlayerConfig) -> Self {
        Self {
            config: ScanConfig::new(root),
            player,
            mode: AppMode::default(),
            view: View::default(),
            theme: Theme::default(),
            tree: None,
            rows: Vec::new(),
            tree_state: TreeState::default(),
            completions: CompletionSet::load(),
            now_playing: None,
            scanning: false,
            scan_progress: ScanProgress::new(),
            scan_error: None,
            status: None,
            warnings_offset: 0,
        }
    }

    /// Run the application until quit.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let mut events = EventStream::new();
        let mut scan_rx = scanning::start_scan(self.config.clone());
        self.scanning = true;

        while self.mode != AppMode::Quit {
            terminal.draw(|frame| self.render(frame))?;

            let mut rescan_requested = false;
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        rescan_requested = self.handle_event(event);
                    }
                }
                outcome = scan_rx.recv(), if self.scanning => {
                    match outcome {
                        Some(outcome) => self.on_scan_outcome(outcome),
                        None => self.scanning = false,
                    }
                }
            }

            // No two scans in flight: a rescan only starts once the
            // previous one has delivered its result.
            if rescan_requested && !self.scanning {
                scan_rx = scanning::start_scan(self.config.clone());
                self.scanning = true;
                self.scan_progress = ScanProgress::new();
                self.status = Some("Rescanning…".to_string());
            }
        }

        Ok(())
    }

    fn on_scan_outcome(&mut self, outcome: ScanOutcome) {
        match outcome {
            ScanOutcome::Progress(progress) => self.scan_progress = progress,
            ScanOutcome::Complete(Ok(tree)) => self.install_tree(tree),
            ScanOutcome::Complete(Err(e)) => {
                self.scanning = false;
                self.scan_error = Some(e.to_string());
            }
        }
    }

    /// Install a freshly built tree, replacing the previous one wholesale.
    fn install_tree(&mut self, tree: CourseTree) {
        self.scanning = false;
        self.scan_error = None;
        self.status = None;
        self.tree_state = TreeState::default();
        self.warnings_offset = 0;

        // Top-level folders start expanded, matching the first screen of a
        // freshly opened course.
        for node in &tree.items {
            if node.is_folder() {
                self.tree_state.expanded.insert(node.path().to_string());
            }
        }

        self.now_playing = find_first_video(&tree.items).map(|f| f.path.clone());
        self.tree = Some(tree);
        self.refresh_rows();

        // Park the cursor on the auto-selected video.
        if let Some(path) = self.now_playing.clone() {
            self.select_path(&path);
        }
    }

    /// Completion figures for the current tree.
    pub(crate) fn progress(&self) -> ProgressSummary {
        let items = self
            .tree
            .as_ref()
            .map(|tree| tree.items.as_slice())
            .unwrap_or_default();
        ProgressSummary::compute(items, &self.completions)
    }
}
