//! Background scanning.

use tokio::sync::mpsc;

use lectern_core::{ScanConfig, ScanError};
use lectern_scan::CourseScanner;

use super::state::ScanOutcome;

const SCAN_CHANNEL_SIZE: usize = 64;

/// Start a background course scan.
///
/// Returns a receiver that will see progress updates and the final result.
pub fn start_scan(config: ScanConfig) -> mpsc::Receiver<ScanOutcome> {
    let (tx, rx) = mpsc::channel(SCAN_CHANNEL_SIZE);

    tokio::spawn(async move {
        let scanner = CourseScanner::new();
        let mut progress_rx = scanner.subscribe();

        // Forward progress updates while the scan runs
        let tx_progress = tx.clone();
        let progress_task = tokio::spawn(async move {
            while let Ok(progress) = progress_rx.recv().await {
                if tx_progress.send(ScanOutcome::Progress(progress)).await.is_err() {
                    break;
                }
            }
        });

        // Run the scan on the blocking pool (jwalk fans out over rayon)
        let result = tokio::task::spawn_blocking(move || scanner.scan(&config))
            .await
            .unwrap_or_else(|e| {
                Err(ScanError::Other {
                    message: e.to_string(),
                })
            });

        progress_task.abort();
        let _ = tx.send(ScanOutcome::Complete(result)).await;
    });

    rx
}
