use clap::Parser;
use newssum::cli::{Cli, Command};
use newssum::outputs::json::{render_entries, render_many, render_sources, write_output};
use newssum::{HttpFetcher, NewsSum, Registry, load_config};
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // stdout carries the JSON, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("newssum starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.command, "Parsed CLI arguments");

    let config = load_config(args.config.as_deref())?;
    let registry = Registry::global()?;

    match args.command {
        Command::Check => {
            info!(sources = registry.len(), "Registry OK");
            println!("{} sources registered", registry.len());
        }
        Command::List { pretty } => {
            let json = render_sources(&registry.list(), pretty)?;
            write_output(&json, None).await?;
        }
        Command::Fetch {
            ids,
            output,
            pretty,
        } => {
            let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
            let service = NewsSum::new(registry, fetcher, config);
            let json = match ids.as_slice() {
                [id] => render_entries(&service.get_articles(id).await?, pretty)?,
                _ => render_many(&service.get_many(&ids).await, pretty)?,
            };
            write_output(&json, output.as_deref()).await?;
        }
    }

    info!(elapsed = ?start_time.elapsed(), "Done");
    Ok(())
}
