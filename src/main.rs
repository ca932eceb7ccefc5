//! lectern - a terminal course player with completion tracking.
//!
//! Usage:
//!   lectern [PATH]              Launch the interactive TUI
//!   lectern scan [PATH]         Print the course tree
//!   lectern progress [PATH]     Show completion progress
//!   lectern mark <ENTRY>        Toggle a completion entry
//!   lectern import <MANIFEST>   Build a tree from a flat file list
//!   lectern export [PATH]       Export the course tree as JSON
//!   lectern --help              Show help

use std::path::PathBuf;
use std::time::{Duration, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use serde::Deserialize;

use lectern_core::{ContentRef, CourseTree, MediaKind, Node, ScanConfig};
use lectern_scan::{CourseScanner, FileEntry, build_course};
use lectern_track::{CompletionSet, ProgressSummary, find_first_video};
use lectern_tui::PlayerConfig;

#[derive(Parser)]
#[command(
    name = "lectern",
    version,
    about = "A terminal course player",
    long_about = "lectern plays a folder of course material and tracks which\n\
                  videos you have completed.\n\n\
                  Launch the interactive TUI by running `lectern [PATH]`, or\n\
                  use subcommands for quick operations."
)]
struct Cli {
    /// Course folder (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Player command for opening media (default: system opener)
    #[arg(short, long)]
    player: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a course folder and print the tree
    Scan {
        /// Course folder
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Maximum depth to display
        #[arg(short, long, default_value = "3")]
        depth: u32,

        /// Show all levels (no depth limit on display)
        #[arg(short, long)]
        all: bool,
    },

    /// Show completion progress for a course folder
    Progress {
        /// Course folder
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Toggle a completion entry by course path
    Mark {
        /// Course-relative path, e.g. "mod1/intro.mp4"
        entry: String,
    },

    /// Build and print a tree from a flat file-list manifest
    Import {
        /// Manifest file: a JSON array of {path, size, modified} records
        manifest: PathBuf,

        /// Directory the manifest paths are relative to
        #[arg(short, long)]
        base: Option<PathBuf>,
    },

    /// Export a scanned course tree as JSON
    Export {
        /// Course folder
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One record in an import manifest.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    path: String,
    #[serde(default)]
    size: u64,
    /// Seconds since the Unix epoch.
    #[serde(default)]
    modified: u64,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            init_logging();
            match command {
                Command::Scan { path, depth, all } => {
                    run_scan(&path, if all { u32::MAX } else { depth })?;
                }
                Command::Progress { path } => run_progress(&path)?,
                Command::Mark { entry } => run_mark(&entry)?,
                Command::Import { manifest, base } => run_import(&manifest, base)?,
                Command::Export { path, output } => run_export(&path, output)?,
            }
        }
        None => {
            // Launch TUI; no log subscriber here, stderr would scribble
            // over the alternate screen.
            let path = cli.path.canonicalize().context("Invalid course path")?;
            let player = match cli.player {
                Some(command) => PlayerConfig::with_command(command),
                None => PlayerConfig::default(),
            };
            lectern_tui::run(path, player)?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by RUST_LOG (default: warn).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Scan a course folder, reporting progress on stderr.
fn scan_course(path: &PathBuf) -> Result<CourseTree> {
    let path = path.canonicalize().context("Invalid course path")?;
    eprintln!("Scanning {}...", path.display());

    let config = ScanConfig::new(&path);
    CourseScanner::new().scan(&config).context("Scan failed")
}

/// Run a scan and print the course tree.
fn run_scan(path: &PathBuf, max_depth: u32) -> Result<()> {
    let tree = scan_course(path)?;

    print_summary(&tree);
    print_items(&tree.items, 0, max_depth);

    if !tree.warnings.is_empty() {
        println!();
        println!("{} warning(s) during scan", tree.warnings.len());
    }

    Ok(())
}

/// Show completion progress for a course folder.
fn run_progress(path: &PathBuf) -> Result<()> {
    let tree = scan_course(path)?;
    let completions = CompletionSet::load();
    let summary = ProgressSummary::compute(&tree.items, &completions);

    println!();
    println!(" {}", tree.title());
    println!(
        " {} / {} videos completed ({}%)",
        summary.completed,
        summary.total_videos,
        summary.percent.round() as u64
    );
    println!(" {}", make_bar((summary.percent / 100.0).min(1.0), 40));

    if let Some(first) = find_first_video(&tree.items) {
        println!(" Next up: {}", first.path);
    }
    println!();

    Ok(())
}

/// Toggle a completion entry from the shell.
fn run_mark(entry: &str) -> Result<()> {
    let mut completions = CompletionSet::load();
    let completed = completions.toggle(entry);
    // The toggle saves and absorbs failures; the CLI surfaces them.
    completions.save().context("Could not save completion store")?;

    if completed {
        println!("Marked {entry} completed");
    } else {
        println!("Unmarked {entry}");
    }

    Ok(())
}

/// Build a tree from a flat file-list manifest and print it.
fn run_import(manifest: &PathBuf, base: Option<PathBuf>) -> Result<()> {
    let content = std::fs::read_to_string(manifest)
        .with_context(|| format!("Could not read manifest {}", manifest.display()))?;
    let records: Vec<ManifestEntry> =
        serde_json::from_str(&content).context("Malformed manifest")?;
    let base = base.unwrap_or_else(|| PathBuf::from("."));

    let entries = records
        .into_iter()
        .map(|record| FileEntry {
            source: ContentRef::new(base.join(&record.path)),
            modified: UNIX_EPOCH + Duration::from_secs(record.modified),
            size: record.size,
            relative_path: record.path,
        })
        .collect();

    let tree = build_course(entries).context("Malformed file list")?;
    print_summary(&tree);
    print_items(&tree.items, 0, u32::MAX);

    Ok(())
}

/// Export a scanned course tree as JSON.
fn run_export(path: &PathBuf, output: Option<PathBuf>) -> Result<()> {
    let tree = scan_course(path)?;
    let json = serde_json::to_string_pretty(&tree)?;

    match output {
        Some(output_path) => {
            std::fs::write(&output_path, json)?;
            eprintln!("Exported to {}", output_path.display());
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}

/// Print the tree header block.
fn print_summary(tree: &CourseTree) {
    println!();
    println!("{}", "─".repeat(60));
    println!(" {} - {}", tree.title(), format_size(tree.stats.total_size));
    println!(
        " {} videos, {} images, {} files in {} folders",
        tree.stats.total_videos,
        tree.stats.total_images,
        tree.stats.total_files,
        tree.stats.total_folders
    );
    println!(" Built in {:.2}s", tree.build_duration.as_secs_f64());
    println!("{}", "─".repeat(60));
    println!();
}

/// Print tree items up to a display depth.
fn print_items(items: &[Node], depth: u32, max_depth: u32) {
    let indent = "  ".repeat(depth as usize);
    for node in items {
        match node {
            Node::Folder(folder) => {
                println!("{indent}▼ {}/", folder.name);
                if depth + 1 < max_depth {
                    print_items(&folder.children, depth + 1, max_depth);
                } else if !folder.children.is_empty() {
                    println!("{indent}    … {} entries", folder.children.len());
                }
            }
            Node::File(file) => {
                let marker = match file.media {
                    MediaKind::Video => "▸",
                    MediaKind::Image => "◆",
                    MediaKind::Other => "·",
                };
                println!(
                    "{indent}{marker} {:<40} {:>10}",
                    truncate(&file.name, 40),
                    format_size(file.size)
                );
            }
        }
    }
}

/// Create a simple ASCII bar.
fn make_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Truncate a string to max length.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 1).collect();
        format!("{cut}…")
    }
}
