use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};

use apod_gallery::controller::{Event, Key};

/// Terminal front end for the APOD gallery
#[derive(Parser)]
#[command(name = "apod-gallery")]
#[command(about = "Fetch, filter and inspect astronomy pictures of the day", long_about = None)]
pub struct Cli {
    /// Feed URL (overrides config file and APOD_GALLERY_FEED_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub feed_url: Option<String>,

    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum time the loading state stays visible
    #[arg(long, global = true, value_name = "MS")]
    pub min_loading_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch once and print the gallery
    Show {
        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
    /// Read commands from stdin and print the page after each one
    Interactive,
}

/// One line typed in interactive mode.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Event(Event),
    Help,
    Quit,
    Blank,
}

pub const HELP: &str = "commands: fetch | filter [START] [END] | open N | close | backdrop | key NAME | help | quit";

pub fn parse_line(line: &str) -> Result<Line> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else { return Ok(Line::Blank) };
    let rest: Vec<&str> = words.collect();
    let line = match (cmd.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("fetch", []) => Line::Event(Event::FetchClicked),
        ("filter", args) if args.len() <= 2 => Line::Event(Event::FilterClicked {
            start: args.first().map(|s| s.to_string()).filter(|s| s != "-"),
            end: args.get(1).map(|s| s.to_string()).filter(|s| s != "-"),
        }),
        ("open", [n]) => {
            let index = n.parse().map_err(|_| anyhow!("card number expected, got `{n}`"))?;
            Line::Event(Event::CardClicked(index))
        }
        ("close", []) => Line::Event(Event::CloseClicked),
        ("backdrop", []) => Line::Event(Event::BackdropClicked),
        ("key", [name]) => Line::Event(Event::KeyPressed(Key::from_name(name))),
        ("help" | "?", _) => Line::Help,
        ("quit" | "exit", []) => Line::Quit,
        _ => bail!("unrecognized command `{}` ({HELP})", line.trim()),
    };
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_events() {
        assert_eq!(parse_line("fetch").unwrap(), Line::Event(Event::FetchClicked));
        assert_eq!(parse_line("  open 3 ").unwrap(), Line::Event(Event::CardClicked(3)));
        assert_eq!(parse_line("key Escape").unwrap(), Line::Event(Event::KeyPressed(Key::Escape)));
        assert_eq!(
            parse_line("filter - 2024-01-10").unwrap(),
            Line::Event(Event::FilterClicked { start: None, end: Some("2024-01-10".into()) })
        );
        assert_eq!(
            parse_line("filter").unwrap(),
            Line::Event(Event::FilterClicked { start: None, end: None })
        );
        assert_eq!(parse_line("").unwrap(), Line::Blank);
        assert_eq!(parse_line("quit").unwrap(), Line::Quit);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("open x").is_err());
        assert!(parse_line("fetch now").is_err());
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["apod-gallery", "show", "--start", "2024-01-01", "--min-loading-ms", "0"]).unwrap();
        assert_eq!(cli.min_loading_ms, Some(0));
        assert!(matches!(cli.command, Commands::Show { start: Some(_), end: None }));
    }
}
