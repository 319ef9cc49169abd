//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Image dataset downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "dataset-downloader",
    version,
    about = "Download image datasets listed on remote index pages",
    long_about = "Fetches index pages whose lines are image URLs, keeps the resources that \
                  exist and carry a JPEG, PNG or GIF signature, and saves them to disk.\n\n\
                  With --file, each manifest line '<label> <url>' is saved under OUT/<label>. \
                  With --links, index pages are saved directly under OUT."
)]
pub struct Args {
    /// Dataset output directory.
    pub out: PathBuf,

    /// Manifest file with one '<label> <url>' pair per line.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Index page URLs to download directly into the output directory.
    #[arg(short, long, num_args = 0..)]
    pub links: Option<Vec<String>>,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Timeout in seconds for every request.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User agent sent with every request.
    #[arg(long = "user-agent", env = "DATASET_DOWNLOADER_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Hide progress bars and statistics.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(seconds) = self.timeout {
            config.http.set_all_timeouts(seconds);
        }

        if let Some(ref user_agent) = self.user_agent {
            config.http.user_agent = user_agent.clone();
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }

    /// Direct index links, empty when `--links` was not given.
    pub fn direct_links(&self) -> &[String] {
        self.links.as_deref().unwrap_or_default()
    }
}
