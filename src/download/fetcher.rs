//! Index page fetching and image downloading.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::download::state::DownloadState;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, get_output_path};
use crate::http::Transport;
use crate::media::{detect_image_format, extract_candidate_links, ImageFormat};

/// HEAD statuses treated as "the resource exists".
const EXISTS_STATUSES: [u16; 4] = [200, 301, 302, 304];

/// Result of handling one candidate link.
#[derive(Debug)]
enum LinkOutcome {
    Saved {
        path: PathBuf,
        format: ImageFormat,
        size: u64,
    },
    Missing,
    NotImage,
}

/// Where a candidate failed.
#[derive(Debug)]
enum LinkError {
    Download(Error),
    Save(Error),
}

/// Fetch every index page and save the images it lists into `out_dir`.
///
/// Failures are logged per index page and per candidate link; nothing
/// propagates to the caller.
pub async fn fetch<T: Transport + ?Sized>(
    transport: &T,
    config: &Config,
    index_urls: &[String],
    out_dir: &Path,
    state: &mut DownloadState,
) {
    for index_url in index_urls {
        tracing::debug!("Retrieving index page {}", index_url);

        let body = match transport.get(index_url, config.http.index_timeout()).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Error retrieving index page {}: {}", index_url, e);
                state.increment_index_failed();
                continue;
            }
        };

        let links = extract_candidate_links(&body);
        tracing::debug!("Found {} candidate links in {}", links.len(), index_url);

        for link in &links {
            match process_link(transport, config, link, out_dir).await {
                Ok(LinkOutcome::Saved { path, format, size }) => {
                    state.record_download(size);
                    tracing::debug!("Saved {} image to {}", format, path.display());
                }
                Ok(LinkOutcome::Missing) => {
                    state.increment_missing();
                    log_skipped(config, &format!("The resource {} does not exist", link));
                }
                Ok(LinkOutcome::NotImage) => {
                    state.increment_not_image();
                    log_skipped(config, &format!("The resource {} is not an image", link));
                }
                Err(LinkError::Download(e)) => {
                    state.increment_failed();
                    tracing::warn!("Error downloading {}: {}", link, e);
                }
                Err(LinkError::Save(e)) => {
                    state.increment_failed();
                    tracing::warn!("Error saving {}: {}", link, e);
                }
            }
        }
    }
}

/// Probe, download, verify and save one candidate link.
async fn process_link<T: Transport + ?Sized>(
    transport: &T,
    config: &Config,
    link: &str,
    out_dir: &Path,
) -> std::result::Result<LinkOutcome, LinkError> {
    if !resource_exists(transport, config, link).await {
        return Ok(LinkOutcome::Missing);
    }

    tracing::info!("Downloading {}", link);

    let bytes = transport
        .get(link, config.http.download_timeout())
        .await
        .map_err(LinkError::Download)?;

    let Some(format) = detect_image_format(&bytes) else {
        return Ok(LinkOutcome::NotImage);
    };

    let path = save_image(out_dir, link, &bytes)
        .await
        .map_err(LinkError::Save)?;

    Ok(LinkOutcome::Saved {
        path,
        format,
        size: bytes.len() as u64,
    })
}

/// Existence probe. Transport failures count as "does not exist".
pub async fn resource_exists<T: Transport + ?Sized>(
    transport: &T,
    config: &Config,
    link: &str,
) -> bool {
    match transport.head(link, config.http.probe_timeout()).await {
        Ok(status) => {
            tracing::debug!("HEAD {} -> {}", link, status);
            EXISTS_STATUSES.contains(&status)
        }
        Err(e) => {
            tracing::debug!("HEAD {} failed: {}", link, e);
            false
        }
    }
}

/// Write image bytes to `out_dir`, overwriting any file of the same name.
async fn save_image(out_dir: &Path, link: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = get_output_path(out_dir, link)?;
    ensure_dir(out_dir).await?;
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

fn log_skipped(config: &Config, message: &str) {
    if config.options.show_skipped {
        tracing::info!("{}", message);
    } else {
        tracing::debug!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::http::transport::mock::MockTransport;

    const JFIF: [u8; 12] = [
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01,
    ];
    const PNG: [u8; 10] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_every_segment_is_probed() {
        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/x.jpg\r\nnot a url\r\nhttp://h/y.png");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let mut state = DownloadState::default();

        fetch(&transport, &Config::default(), &urls(&["http://h/index"]), &out, &mut state).await;

        assert_eq!(
            transport.head_calls(),
            vec!["http://h/x.jpg", "not a url", "http://h/y.png"]
        );
        assert_eq!(transport.get_calls(), vec!["http://h/index"]);
        assert_eq!(state.missing_count, 3);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_saves_image_and_skips_missing() {
        let mut payload = JFIF.to_vec();
        payload.extend_from_slice(b"rest of the jpeg");

        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/img/pic.jpg\r\nhttp://h/gone.jpg")
            .with_page("http://h/img/pic.jpg", payload.clone());
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cats");
        let mut state = DownloadState::default();

        fetch(&transport, &Config::default(), &urls(&["http://h/index"]), &out, &mut state).await;

        assert_eq!(std::fs::read(out.join("pic.jpg")).unwrap(), payload);
        assert!(!out.join("gone.jpg").exists());
        assert_eq!(
            transport.get_calls(),
            vec!["http://h/index", "http://h/img/pic.jpg"]
        );
        assert_eq!(state.downloaded_count, 1);
        assert_eq!(state.bytes_written, payload.len() as u64);
        assert_eq!(state.missing_count, 1);
    }

    #[tokio::test]
    async fn test_non_image_is_not_written() {
        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/page.jpg")
            .with_page("http://h/page.jpg", "<html>not really a jpeg</html>");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let mut state = DownloadState::default();

        fetch(&transport, &Config::default(), &urls(&["http://h/index"]), &out, &mut state).await;

        assert!(!out.exists());
        assert_eq!(state.not_image_count, 1);
        assert_eq!(state.downloaded_count, 0);
    }

    #[tokio::test]
    async fn test_probe_statuses() {
        let transport = MockTransport::new()
            .with_status("http://h/ok", 200)
            .with_status("http://h/moved", 301)
            .with_status("http://h/found", 302)
            .with_status("http://h/cached", 304)
            .with_status("http://h/missing", 404)
            .with_status("http://h/teapot", 418)
            .with_status("http://h/error", 500);
        let config = Config::default();

        for url in ["http://h/ok", "http://h/moved", "http://h/found", "http://h/cached"] {
            assert!(resource_exists(&transport, &config, url).await, "{}", url);
        }
        for url in ["http://h/missing", "http://h/teapot", "http://h/error", "http://h/unknown"] {
            assert!(!resource_exists(&transport, &config, url).await, "{}", url);
        }
    }

    #[tokio::test]
    async fn test_failed_probe_issues_no_get() {
        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/a.png")
            .with_page("http://h/a.png", PNG.to_vec())
            .with_status("http://h/a.png", 404);
        let dir = tempfile::tempdir().unwrap();
        let mut state = DownloadState::default();

        fetch(&transport, &Config::default(), &urls(&["http://h/index"]), dir.path(), &mut state)
            .await;

        assert_eq!(transport.get_calls(), vec!["http://h/index"]);
        assert!(!dir.path().join("a.png").exists());
        assert_eq!(state.missing_count, 1);
    }

    #[tokio::test]
    async fn test_index_failure_moves_to_next_index() {
        let transport = MockTransport::new()
            .with_page("http://h/second", "http://h/b.png")
            .with_page("http://h/b.png", PNG.to_vec());
        let dir = tempfile::tempdir().unwrap();
        let mut state = DownloadState::default();

        fetch(
            &transport,
            &Config::default(),
            &urls(&["http://h/first", "http://h/second"]),
            dir.path(),
            &mut state,
        )
        .await;

        assert_eq!(state.index_failed_count, 1);
        assert_eq!(state.downloaded_count, 1);
        assert!(dir.path().join("b.png").exists());
    }

    #[tokio::test]
    async fn test_download_failure_continues_with_next_link() {
        // HEAD succeeds but GET fails for the first link
        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/broken.png\r\nhttp://h/fine.png")
            .with_status("http://h/broken.png", 200)
            .with_page("http://h/fine.png", PNG.to_vec());
        let dir = tempfile::tempdir().unwrap();
        let mut state = DownloadState::default();

        fetch(&transport, &Config::default(), &urls(&["http://h/index"]), dir.path(), &mut state)
            .await;

        assert_eq!(state.failed_count, 1);
        assert_eq!(state.downloaded_count, 1);
        assert!(!dir.path().join("broken.png").exists());
        assert!(dir.path().join("fine.png").exists());
    }

    #[tokio::test]
    async fn test_write_failure_is_contained() {
        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/a.png")
            .with_page("http://h/a.png", PNG.to_vec());
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = dir.path().join("out");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let mut state = DownloadState::default();

        fetch(&transport, &Config::default(), &urls(&["http://h/index"]), &blocker, &mut state)
            .await;

        assert_eq!(state.failed_count, 1);
        assert_eq!(state.downloaded_count, 0);
    }

    #[tokio::test]
    async fn test_existing_file_is_overwritten() {
        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/a.png")
            .with_page("http://h/a.png", PNG.to_vec());
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"old contents that are longer").unwrap();
        let mut state = DownloadState::default();

        fetch(&transport, &Config::default(), &urls(&["http://h/index"]), dir.path(), &mut state)
            .await;

        assert_eq!(std::fs::read(dir.path().join("a.png")).unwrap(), PNG.to_vec());
    }

    #[tokio::test]
    async fn test_link_without_file_name_is_a_save_error() {
        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/")
            .with_page("http://h/", PNG.to_vec());
        let dir = tempfile::tempdir().unwrap();
        let mut state = DownloadState::default();

        fetch(&transport, &Config::default(), &urls(&["http://h/index"]), dir.path(), &mut state)
            .await;

        assert_eq!(state.failed_count, 1);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_double_dot_inside_file_name_is_saved() {
        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/img..1.png")
            .with_page("http://h/img..1.png", PNG.to_vec());
        let dir = tempfile::tempdir().unwrap();
        let mut state = DownloadState::default();

        fetch(&transport, &Config::default(), &urls(&["http://h/index"]), dir.path(), &mut state)
            .await;

        assert_eq!(state.downloaded_count, 1);
        assert_eq!(state.failed_count, 0);
        assert_eq!(std::fs::read(dir.path().join("img..1.png")).unwrap(), PNG.to_vec());
    }

    #[tokio::test]
    async fn test_each_request_uses_its_own_timeout() {
        let transport = MockTransport::new()
            .with_page("http://h/index", "http://h/a.png")
            .with_page("http://h/a.png", PNG.to_vec());
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.http.index_timeout_seconds = 11;
        config.http.probe_timeout_seconds = 22;
        config.http.download_timeout_seconds = 33;
        let mut state = DownloadState::default();

        fetch(&transport, &config, &urls(&["http://h/index"]), dir.path(), &mut state).await;

        assert_eq!(
            transport.request_log(),
            vec![
                ("GET", "http://h/index".to_string(), Duration::from_secs(11)),
                ("HEAD", "http://h/a.png".to_string(), Duration::from_secs(22)),
                ("GET", "http://h/a.png".to_string(), Duration::from_secs(33)),
            ]
        );
    }
}
