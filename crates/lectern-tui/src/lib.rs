//! Terminal user interface for lectern.
//!
//! An interactive course browser built with ratatui:
//!
//! - **Explorer view** - Navigate the course tree, expand and collapse
//!   folders, mark videos completed
//! - **Warnings view** - Review entries the scan could not read
//! - **Progress header** - Completed/total videos with a gauge
//! - **Player handoff** - Enter opens the selected file in an external
//!   player; transport stays with the player
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use lectern_tui::PlayerConfig;
//!
//! lectern_tui::run(PathBuf::from("/courses/rust-101"), PlayerConfig::default()).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `j`/`k` - Move down/up
//! - `h`/`l` - Collapse/expand folders
//! - `Enter` - Open folder / play file
//! - `Space` - Toggle completed on a video
//! - `R` - Rescan the course folder
//! - `Tab` - Switch view
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod player;
mod theme;
mod ui;

pub use app::{App, AppResult};
pub use player::PlayerConfig;
pub use theme::Theme;

/// Run the TUI application.
pub fn run(path: std::path::PathBuf, player: PlayerConfig) -> AppResult<()> {
    // Create tokio runtime for the background scan tasks
    let rt = tokio::runtime::Runtime::new()?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::new(path, player).run(terminal));
    ratatui::restore();

    // Shutdown runtime immediately to cancel background tasks
    rt.shutdown_timeout(std::time::Duration::from_millis(100));

    result
}
