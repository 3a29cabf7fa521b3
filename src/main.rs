mod cli;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use apod_gallery::config::{parse_feed_url, GalleryConfig};
use apod_gallery::controller::Controller;
use apod_gallery::source::RecordSource;
use cli::{Cli, Commands, Line, HELP};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let mut config = GalleryConfig::load(cli.config.as_deref())?;
    if let Some(url) = &cli.feed_url {
        config.feed_url = parse_feed_url(url)?;
    }
    if let Some(ms) = cli.min_loading_ms {
        config.min_loading = Duration::from_millis(ms);
    }

    let mut gallery = apod_gallery::http_gallery(&config)
        .with_context(|| format!("failed to set up feed client for {}", config.feed_url))?;

    match cli.command {
        Commands::Show { start, end } => {
            gallery.fetch_filtered(start, end).await.context("invalid --start/--end")?;
            print!("{}", gallery.page());
        }
        Commands::Interactive => interactive(&mut gallery).await?,
    }
    Ok(())
}

async fn interactive<S: RecordSource>(gallery: &mut Controller<S>) -> Result<()> {
    println!("{HELP}");
    print!("{}", gallery.page());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match cli::parse_line(&line) {
            Ok(Line::Event(event)) => {
                gallery.dispatch(event).await;
                print!("{}", gallery.page());
            }
            Ok(Line::Help) => println!("{HELP}"),
            Ok(Line::Quit) => break,
            Ok(Line::Blank) => {}
            Err(e) => warn!("{e}"),
        }
    }
    Ok(())
}
