//! External player handoff.
//!
//! The TUI hands a file's content handle to whatever plays it and keeps no
//! transport state of its own. Playable means video or image; everything
//! else stays inert in the explorer.

use std::process::{Command, Stdio};

use lectern_core::FileNode;

/// How to open media files.
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Player command to launch, or None for the system opener.
    pub command: Option<String>,
}

impl PlayerConfig {
    /// Use a specific player command (e.g. `mpv`).
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
        }
    }
}

/// Result of handing a file to the player.
#[derive(Debug)]
pub enum PlayResult {
    /// Player was launched.
    Launched,
    /// File is not a video or image.
    NotPlayable,
    /// Player could not be launched.
    Error(String),
}

/// Hand a file's content handle to the configured player.
pub fn open_media(file: &FileNode, config: &PlayerConfig) -> PlayResult {
    if !file.media.is_playable() {
        return PlayResult::NotPlayable;
    }

    match &config.command {
        Some(command) => {
            // Detach stdio so a chatty player cannot scribble over the TUI.
            let spawned = Command::new(command)
                .arg(file.source.as_path())
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                Ok(_) => PlayResult::Launched,
                Err(e) => PlayResult::Error(format!("Failed to launch {command}: {e}")),
            }
        }
        None => match open::that_detached(file.source.as_path()) {
            Ok(()) => PlayResult::Launched,
            Err(e) => PlayResult::Error(format!("Failed to open with system player: {e}")),
        },
    }
}
