//! Manifest-driven collection.

use std::path::Path;

use crate::config::Config;
use crate::download::fetcher::fetch;
use crate::download::manifest::{read_manifest, ManifestLine};
use crate::download::state::{DownloadState, GlobalState};
use crate::error::Result;
use crate::fs::get_label_folder;
use crate::http::Transport;

/// Download every manifest entry into `<base_out_dir>/<label>`.
///
/// Each line is fetched once, on its own. Only a manifest that cannot be
/// read is an error; blank lines are skipped and malformed lines are
/// skipped with a warning.
pub async fn collect<T: Transport + ?Sized>(
    transport: &T,
    config: &Config,
    manifest_path: &Path,
    base_out_dir: &Path,
    global: &mut GlobalState,
) -> Result<Vec<DownloadState>> {
    let lines = read_manifest(manifest_path).await?;
    tracing::info!(
        "Read {} lines from manifest {}",
        lines.len(),
        manifest_path.display()
    );

    let mut states = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;

        let entry = match line {
            ManifestLine::Entry(entry) => entry,
            ManifestLine::Blank => continue,
            ManifestLine::Malformed(content) => {
                tracing::warn!(
                    "Skipping manifest line {}: expected '<label> <url>', got '{}'",
                    line_number,
                    content
                );
                global.mark_malformed_line();
                continue;
            }
        };

        let out_dir = match get_label_folder(base_out_dir, &entry.label) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!("Skipping manifest line {}: {}", line_number, e);
                global.mark_malformed_line();
                continue;
            }
        };

        tracing::info!("Collecting '{}' from {}", entry.label, entry.source_url);

        let mut state = DownloadState::new(Some(entry.label), out_dir.clone());
        fetch(
            transport,
            config,
            std::slice::from_ref(&entry.source_url),
            &out_dir,
            &mut state,
        )
        .await;

        global.add_state(&state);
        states.push(state);
    }

    Ok(states)
}
