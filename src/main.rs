//! sitemap-gen main entry point
//!
//! This is the command-line interface for the sitemap-gen site mapper.

use anyhow::Context;
use clap::Parser;
use sitemap_gen::config::{load_config, validate, Config, SeedConfig};
use sitemap_gen::crawler::Crawler;
use sitemap_gen::output::{log_statistics, Exporter, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sitemap-gen: a same-origin site mapper
///
/// Crawls every page reachable from URL on the same host, up to a page limit,
/// and writes the visited pages as a CSV list or an XML sitemap. Without an
/// output file or format the pages are printed, one per line.
#[derive(Parser, Debug)]
#[command(name = "sitemap-gen")]
#[command(version)]
#[command(about = "A same-origin site mapper", long_about = None)]
struct Cli {
    /// Seed URL; `http://` is assumed when no scheme is given
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum number of pages to visit [default: 10]
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output format (defaults to the output file's extension)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file name
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of concurrent fetch workers [default: 4]
    #[arg(short, long)]
    workers: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    let seed = SeedConfig::new(&cli.url, config.crawler.limit)
        .with_context(|| format!("Cannot crawl {:?}", cli.url))?;

    let crawler = Crawler::with_http_client(seed, config.crawler.clone())?;

    // Ctrl-C stops the crawl; pages visited so far are still exported
    let token = crawler.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, stopping crawl");
            token.cancel();
        }
    });

    let report = crawler.run().await;
    log_statistics(&report.stats);

    let output_path = config.output.path.as_deref().map(PathBuf::from);
    match Exporter::from_options(output_path.as_deref(), config.output.format) {
        Some(exporter) => {
            exporter
                .export(&report.visited)
                .with_context(|| format!("Failed to export to {}", exporter.path().display()))?;
        }
        None => {
            for url in &report.visited {
                println!("{}", url);
            }
        }
    }

    Ok(())
}

/// Loads the optional config file and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(limit) = cli.limit {
        config.crawler.limit = limit;
    }
    if let Some(workers) = cli.workers {
        config.crawler.workers = workers;
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.to_string_lossy().into_owned());
    }
    if let Some(format) = cli.format {
        config.output.format = Some(format);
    }

    validate(&config).context("Invalid command-line options")?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_gen=info,warn"),
            1 => EnvFilter::new("sitemap_gen=debug,info"),
            2 => EnvFilter::new("sitemap_gen=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
