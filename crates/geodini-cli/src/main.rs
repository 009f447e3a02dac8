//! geodini — command-line client for the Geodini geocoding API
//!
//! Sends a free-text query to the search endpoint, merges the AI ranking
//! hint into the raw results and prints them in display order. The map
//! column shows the original index of every result that has a geometry;
//! pass it to `show` to see that geometry's title and bounds.
//!
//! Usage examples
//! --------------
//!
//! - Ranked results
//!   $ geodini search London in Canada
//!
//! - Backend order, as JSON
//!   $ geodini search --raw --json Springfield
//!
//! - Geometry of the result with original index 1
//!   $ geodini show 1 the other London
//!
//! - Against a local API
//!   $ geodini --base-url http://localhost:9000 search Delhi
mod args;
mod logging;
mod render;

use crate::args::{CliArgs, Commands};
use crate::render::{TerminalSurface, TextDrawer, TextMap};
use anyhow::{anyhow, Context};
use clap::Parser;
use geodini_core::{merge_response, ClientConfig, MapViewController, ResultView, SearchClient};
use std::io::Write;

fn load_config(args: &CliArgs) -> anyhow::Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ClientConfig::from_json(&json)?
        }
        None => ClientConfig::default(),
    };
    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(secs) = args.timeout {
        config.request_timeout_secs = secs;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(args.verbose)?;

    let config = load_config(&args)?;
    let client = SearchClient::new(&config)?;
    tracing::info!(endpoint = client.endpoint(), "client ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Search { query, raw, json } => {
            let query = query.join(" ");
            let mut response = client.search(&query)?;
            if raw {
                response = response.without_ranking();
            }
            let rows = merge_response(&response);

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                let mut view =
                    ResultView::new(TerminalSurface::default(), config.hierarchy_separator.clone());
                view.show_response(&response, &rows);
                view.surface().write_to(&mut out)?;
            }
        }

        Commands::Show { index, query } => {
            let query = query.join(" ");
            let response = client.search(&query)?;
            let mut map = MapViewController::new(
                TextMap::default(),
                TextDrawer::default(),
                config.drawer_transition_ms,
            );
            map.show_geometry(response.results(), index)
                .map_err(|e| anyhow!(e.notice()))?;
            map.drawer().write_to(map.widget(), &mut out)?;
        }
    }

    Ok(())
}
