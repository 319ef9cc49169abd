//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Dataset Downloader                                ║
║     Image datasets from remote index pages            ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    manifest: Option<&str>,
    link_count: usize,
    output_dir: &str,
    download_timeout: u64,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Manifest: {}", manifest.unwrap_or("-"));
    println!("  Links:    {}", link_count);
    println!("  Output:   {}", output_dir);
    println!("  Timeout:  {}s", download_timeout);
    println!();
}
