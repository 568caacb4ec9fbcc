//! NameSweep CLI: search for a username across web platforms.

mod progress;
mod render;

use anyhow::Context;
use clap::Parser;
use namesweep_catalog::{CatalogLoader, CatalogSource};
use namesweep_core::{AppConfig, Username};
use namesweep_export::{write_export, ExportFormat};
use namesweep_scanner::{ResultView, ScanOrchestrator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "namesweep",
    version,
    about = "Check whether a username exists across a catalog of web platforms"
)]
struct Cli {
    /// Username to search for
    username: String,

    /// Catalog document URL (overrides config)
    #[arg(long, value_name = "URL")]
    catalog_url: Option<String>,

    /// Load the catalog from a local JSON file instead of over HTTP
    #[arg(long, value_name = "PATH", conflicts_with = "catalog_url")]
    catalog_file: Option<PathBuf>,

    /// Relay endpoint for cross-origin probes (overrides config)
    #[arg(long, value_name = "URL")]
    relay_url: Option<String>,

    /// Delay between probes in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Show every result instead of the first six
    #[arg(long)]
    show_all: bool,

    /// Write results as a JSON document
    #[arg(long, value_name = "PATH")]
    export_json: Option<PathBuf>,

    /// Write results as a CSV document
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,

    /// Write results as a plain-text document
    #[arg(long, value_name = "PATH")]
    export_txt: Option<PathBuf>,

    /// Suppress the banner and progress bar
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_with_env().context("load configuration")?;
    if let Some(url) = cli.catalog_url {
        config.catalog.url = url;
    }
    if let Some(url) = cli.relay_url {
        config.scanning.relay_url = url;
    }
    if let Some(delay) = cli.delay_ms {
        config.scanning.probe_delay_ms = delay;
    }

    // Rejected before anything else happens: a scan never starts with an
    // empty username.
    let username = Username::new(cli.username)?;

    if !cli.quiet {
        render::print_banner();
    }

    let source = match cli.catalog_file {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Remote(config.catalog.url.clone()),
    };
    let loader = CatalogLoader::with_source(&config, source).context("create catalog loader")?;
    let catalog = loader.fetch_or_empty().await;

    let orchestrator = ScanOrchestrator::from_config(&config)
        .context("create scan orchestrator")?
        .with_reveal_all(cli.show_all);

    let mut progress = progress::CliProgress::new(&username, catalog.len(), cli.quiet);
    let session = orchestrator
        .run_scan(username, &catalog, &mut progress)
        .await;
    progress.finish();

    let view = if cli.show_all {
        ResultView::revealed()
    } else {
        ResultView::new()
    };
    render::print_results(&session, view);

    let exports = [
        (cli.export_json, ExportFormat::Json),
        (cli.export_csv, ExportFormat::Csv),
        (cli.export_txt, ExportFormat::Text),
    ];
    for (path, format) in exports {
        if let Some(path) = path {
            write_export(&path, format, &session.results)
                .with_context(|| format!("write {} export", format.extension()))?;
            if !cli.quiet {
                println!("Saved {} results to {}", session.results.len(), path.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_arguments_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_basic_invocation() {
        let cli = Cli::parse_from(["namesweep", "alice", "--show-all", "--delay-ms", "10"]);
        assert_eq!(cli.username, "alice");
        assert!(cli.show_all);
        assert_eq!(cli.delay_ms, Some(10));
        assert!(cli.export_json.is_none());
    }
}
