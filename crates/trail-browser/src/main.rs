//! Trail Browser - browse village hiking routes stored as GPX tracks
//!
//! Scans a directory of GPX files, computes summary metrics for each route
//! (distance, ascent, elevation profile, difficulty) and renders them on the
//! terminal or as JSON. The original document can be exported back out
//! unchanged.

mod browser;
mod cache;
mod catalog;
mod report;
mod settings;

use anyhow::{Context, Result};
use browser::RouteBrowser;
use clap::Parser;
use settings::{Cli, Command};
use std::fs::File;
use std::io::BufWriter;
use tracing_subscriber::EnvFilter;
use trail_metrics_lib::TrackError;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut browser = RouteBrowser::new(cli.routes_dir.clone(), cli.cache_size);

    match cli.command {
        Command::List { json } => {
            let entries = browser.load_all()?;
            for (file, data) in &entries {
                if let Err(err) = data {
                    tracing::warn!("Skipping {}: {:#}", file.path.display(), err);
                }
            }
            if json {
                println!("{}", report::render_list_json(&entries)?);
            } else {
                print!("{}", report::render_list(&cli.routes_dir, &entries));
            }
        }
        Command::Show {
            route,
            json,
            full_profile,
        } => {
            let file = browser.find(&route)?;
            match browser.load(&file) {
                Ok(data) => {
                    if json {
                        println!("{}", report::render_detail_json(&file, &Ok(data))?);
                    } else {
                        print!("{}", report::render_detail(&file, &data, full_profile));
                    }
                }
                Err(err)
                    if matches!(
                        err.downcast_ref::<TrackError>(),
                        Some(TrackError::EmptyTrack)
                    ) =>
                {
                    println!("{}: no data", file.name);
                }
                Err(err) => return Err(err),
            }
        }
        Command::Export { route, output } => {
            let file = browser.find(&route)?;
            let data = browser.load(&file)?;
            let writer = File::create(&output)
                .with_context(|| format!("failed to create {}", output.display()))?;
            data.track.write(BufWriter::new(writer))?;
            println!("Exported {} to {}", file.name, output.display());
        }
    }

    Ok(())
}
