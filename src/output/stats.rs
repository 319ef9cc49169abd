//! Statistics reporting.

use console::style;

use crate::download::{DownloadState, GlobalState};

/// Print statistics for a single destination.
pub fn print_destination_stats(state: &DownloadState) {
    let label = state.label.as_deref().unwrap_or("links");

    println!();
    println!("{}", style(format!("Statistics for {}:", label)).bold());
    println!("  Folder:     {}", state.out_dir.display());
    println!("  Saved:      {}", state.downloaded_count);
    println!("  Missing:    {}", state.missing_count);
    println!("  Not images: {}", state.not_image_count);
    println!("  Failed:     {}", state.failed_count);
    println!("  Skipped:    {} total", state.total_skipped());
    if state.index_failed_count > 0 {
        println!(
            "  Index pages failed: {}",
            style(state.index_failed_count).red()
        );
    }
}

/// Print statistics across all destinations.
pub fn print_global_stats(state: &GlobalState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Destinations processed: {}", state.destinations_processed);
    if state.malformed_lines > 0 {
        println!(
            "  Manifest lines skipped: {}",
            style(state.malformed_lines).yellow()
        );
    }
    if state.index_failed_count > 0 {
        println!(
            "  Index pages failed:     {}",
            style(state.index_failed_count).red()
        );
    }
    println!(
        "  Saved:   {} ({} bytes)",
        style(state.downloaded_count).green(),
        state.bytes_written
    );
    println!("  Skipped: {}", style(state.total_skipped()).yellow());
    println!("{}", style("═".repeat(50)).dim());
}
