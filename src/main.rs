//! Dataset Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dataset_downloader::{
    cli::Args,
    config::{validate_config, Config},
    download::{collect, fetch, DownloadState, GlobalState},
    error::{exit_codes, Error, Result},
    http::HttpClient,
    output::{
        print_banner, print_config_summary, print_destination_stats, print_error,
        print_global_stats, print_info, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Manifest { .. } => ExitCode::from(exit_codes::MANIFEST_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    if !args.quiet {
        print_banner();
    }

    // Load configuration
    let mut config = Config::resolve(args.config.as_deref())?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    if args.file.is_none() && args.links.is_none() {
        print_warning("Nothing to do: pass --file and/or --links");
        return Ok(());
    }

    if !args.quiet {
        print_config_summary(
            args.file.as_deref().and_then(|p| p.to_str()),
            args.direct_links().len(),
            &args.out.display().to_string(),
            config.http.download_timeout_seconds,
        );
    }

    let client = HttpClient::new(&config.http, config.options.show_progress)?;
    let mut global_state = GlobalState::default();

    // Manifest pass first, then direct links
    if let Some(ref manifest) = args.file {
        print_info(&format!("Reading manifest {}", manifest.display()));
        let states = collect(&client, &config, manifest, &args.out, &mut global_state).await?;

        if !args.quiet {
            for state in &states {
                print_destination_stats(state);
            }
        }
    }

    if args.links.is_some() {
        let mut state = DownloadState::new(None, args.out.clone());
        fetch(&client, &config, args.direct_links(), &args.out, &mut state).await;

        if !args.quiet {
            print_destination_stats(&state);
        }
        global_state.add_state(&state);
    }

    if !args.quiet {
        print_global_stats(&global_state);
    }

    Ok(())
}
