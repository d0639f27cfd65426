// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Video Player.
//!
//! A command-line video player simulation over a fixed catalog of videos,
//! with named playlists and search.
//!
//! ## Architecture
//!
//! The application is a single-threaded read-eval-print loop:
//!
//! * The **Commander** parses each input line into an application command.
//! * The **Dispatcher** runs the command against the [`VideoPlayer`], which
//!   owns the playback state and playlists, and renders the outcome as lines.
//! * The **Main Loop** writes those lines out and, after a search, reads the
//!   optional follow-up selection.
//!
//! Command output goes to stdout; diagnostics are logged to stderr.

mod actions;
mod commander;
mod config;
mod error;
mod model;
mod player;
mod util;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use crate::{
    actions::commands::{self, CommandOutcome},
    commander::parse_command,
    config::AppConfig,
    model::catalog::Catalog,
    player::VideoPlayer,
};

#[derive(Parser, Debug)]
#[command(name = "vidplay")]
#[command(about = "Play videos and manage playlists from the command line", long_about = None)]
struct Args {
    /// Catalog file to load instead of the configured one
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Store the effective configuration before starting
    #[arg(long)]
    save_config: bool,
}

/// Application state.
struct App {
    pub config: AppConfig,
    pub player: VideoPlayer,
}

impl App {
    /// Create a new instance of application state, loading the catalog.
    pub fn new(config: AppConfig) -> Result<Self> {
        let catalog = match &config.catalog_file {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
            None => Catalog::builtin().context("Failed to load built-in catalog")?,
        };

        info!("Loaded {} videos", catalog.len());

        Ok(Self {
            config,
            player: VideoPlayer::new(catalog),
        })
    }
}

/// The entry point of the application.
fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = config::load_config();
    if let Some(catalog) = args.catalog {
        config.catalog_file = Some(catalog);
    }

    if args.save_config {
        config::save_config(&config).context("Failed to save configuration")?;
    }

    let mut app = App::new(config).context("Failed to initalise application")?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    run(&mut app, stdin.lock(), stdout.lock()).context("Application error occurred")
}

/// Reads commands until `EXIT` or the end of input.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails; command
/// failures are reported in the output.
fn run<R: BufRead, W: Write>(app: &mut App, mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "Hello and welcome to the video player, what would you like to do?")?;
    writeln!(output, "Enter HELP for list of available commands or EXIT to terminate.")?;

    loop {
        write!(output, "{}", app.config.prompt)?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            debug!("End of input");
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                debug!("Rejected input {line:?}: {e:?}");
                writeln!(output, "{e}")?;
                continue;
            }
        };

        let CommandOutcome {
            lines,
            selection,
            exit,
        } = commands::handle_command(&mut app.player, command);

        write_lines(&mut output, &lines)?;

        if let Some(results) = selection {
            output.flush()?;
            let answer = read_line(&mut input)?.unwrap_or_default();
            let lines = commands::handle_selection(&mut app.player, &results, &answer);
            write_lines(&mut output, &lines)?;
        }

        if exit {
            break;
        }
    }

    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    Ok((read > 0).then_some(line))
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(commands: &str) -> Vec<String> {
        let config = AppConfig {
            prompt: String::new(),
            ..AppConfig::default()
        };
        let mut app = App::new(config).unwrap();
        let mut output = Vec::new();

        run(&mut app, Cursor::new(commands), &mut output).unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .skip(2)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_session() {
        let lines = session("PLAY funny_dogs_video_id\nPAUSE\nSHOW_PLAYING\nSTOP\nSTOP\n");
        assert_eq!(
            lines,
            vec![
                "Playing video: Funny Dogs",
                "Pausing video: Funny Dogs",
                "Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal] - PAUSED",
                "Stopping video: Funny Dogs",
                "Cannot stop video: No video is currently playing",
            ]
        );
    }

    #[test]
    fn test_search_selection_plays_result() {
        let lines = session("SEARCH_VIDEOS cat\n2\nSHOW_PLAYING\n");
        assert_eq!(lines[0], "Here are the results for cat:");
        assert_eq!(lines[1], "  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]");
        assert_eq!(lines[2], "  2) Another Cat Video (another_cat_video_id) [#cat #animal]");
        assert_eq!(lines[5], "Playing video: Another Cat Video");
        assert_eq!(
            lines[6],
            "Currently playing: Another Cat Video (another_cat_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_search_selection_ignores_invalid_answer() {
        let lines = session("SEARCH_VIDEOS_WITH_TAG #dog\nyes\nSHOW_PLAYING\n");
        assert_eq!(
            lines,
            vec![
                "Here are the results for #dog:",
                "  1) Funny Dogs (funny_dogs_video_id) [#dog #animal]",
                "Would you like to play any of the above? If yes, specify the number of the video.",
                "If your answer is not a valid number, we will assume it's a no.",
                "No video is currently playing",
            ]
        );
    }

    #[test]
    fn test_search_at_end_of_input() {
        let lines = session("SEARCH_VIDEOS cat");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_exit_stops_reading() {
        let lines = session("\nbogus\nEXIT\nNUMBER_OF_VIDEOS\n");
        assert_eq!(
            lines,
            vec![
                "Please enter a valid command, type HELP for a list of available commands.",
                "Exiting video player",
            ]
        );
    }
}
