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

//! Application command dispatching.
//!
//! This module translates [`AppCommand`] requests into [`VideoPlayer`]
//! operations and renders the outcome as the lines reported to the user.
//! Failures never escape a command: each one becomes a single line made of
//! the command's failure context and the reason.

use log::debug;

use crate::{
    actions::events::PlayerEvent,
    error::{PlayerError, Result},
    model::search::SearchResults,
    player::VideoPlayer,
    util::format,
};

const PLAY_FAILURE: &str = "Cannot play video";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppCommand {
    NumberOfVideos,
    ShowAllVideos,

    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,

    CreatePlaylist(String),
    AddToPlaylist(String, String),
    RemoveFromPlaylist(String, String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,

    SearchVideos(String),
    SearchVideosWithTag(String),

    Help,
    Exit,
}

impl AppCommand {
    /// The leading context of the line reported when this command fails.
    fn failure_context(&self) -> String {
        match self {
            AppCommand::Play(_) | AppCommand::PlayRandom => PLAY_FAILURE.to_string(),
            AppCommand::Stop => "Cannot stop video".to_string(),
            AppCommand::Pause => "Cannot pause video".to_string(),
            AppCommand::Continue => "Cannot continue video".to_string(),
            AppCommand::CreatePlaylist(_) => "Cannot create playlist".to_string(),
            AppCommand::AddToPlaylist(name, _) => format!("Cannot add video to {name}"),
            AppCommand::RemoveFromPlaylist(name, _) => format!("Cannot remove video from {name}"),
            AppCommand::ClearPlaylist(name) => format!("Cannot clear playlist {name}"),
            AppCommand::DeletePlaylist(name) => format!("Cannot delete playlist {name}"),
            AppCommand::ShowPlaylist(name) => format!("Cannot show playlist {name}"),
            _ => "Cannot run command".to_string(),
        }
    }
}

/// What a command left for the caller to do.
#[derive(Debug, Default)]
pub(crate) struct CommandOutcome {
    /// Lines to report, in order.
    pub(crate) lines: Vec<String>,
    /// Results the user may now pick one of to play, see
    /// [`handle_selection`].
    pub(crate) selection: Option<SearchResults>,
    pub(crate) exit: bool,
}

impl CommandOutcome {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    fn events(events: Vec<PlayerEvent>) -> Self {
        Self::lines(events.iter().map(PlayerEvent::to_string).collect())
    }
}

/// Orchestrates the execution of a single command.
///
/// This never fails; a failed operation is reported as a line of the
/// outcome and leaves the player as it was.
pub(crate) fn handle_command(player: &mut VideoPlayer, command: AppCommand) -> CommandOutcome {
    match run_command(player, &command) {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!("{command:?} failed: {e:?}");
            CommandOutcome::lines(vec![failure_line(&command, &e)])
        }
    }
}

/// Plays the search result picked by the user's answer, if any.
///
/// An answer that is not the number of one of the results is taken as no
/// selection and produces no output.
pub(crate) fn handle_selection(
    player: &mut VideoPlayer,
    results: &SearchResults,
    answer: &str,
) -> Vec<String> {
    match player.play_selection(results, answer) {
        None => vec![],
        Some(Ok(events)) => events.iter().map(PlayerEvent::to_string).collect(),
        Some(Err(e)) => vec![format!("{PLAY_FAILURE}: {e}")],
    }
}

fn failure_line(command: &AppCommand, error: &PlayerError) -> String {
    if error.is_standalone() {
        error.to_string()
    } else {
        format!("{}: {}", command.failure_context(), error)
    }
}

fn run_command(player: &mut VideoPlayer, command: &AppCommand) -> Result<CommandOutcome> {
    let outcome = match command {
        AppCommand::NumberOfVideos => {
            CommandOutcome::lines(vec![format::video_count(player.number_of_videos())])
        }
        AppCommand::ShowAllVideos => {
            CommandOutcome::lines(format::video_listing(&player.all_videos()))
        }

        AppCommand::Play(id) => CommandOutcome::events(player.play(id)?),
        AppCommand::PlayRandom => CommandOutcome::events(player.play_random()?),
        AppCommand::Stop => CommandOutcome::events(vec![player.stop()?]),
        AppCommand::Pause => CommandOutcome::events(vec![player.pause()?]),
        AppCommand::Continue => CommandOutcome::events(vec![player.resume()?]),
        AppCommand::ShowPlaying => CommandOutcome::events(vec![player.show_playing()]),

        AppCommand::CreatePlaylist(name) => {
            CommandOutcome::events(vec![player.create_playlist(name)?])
        }
        AppCommand::AddToPlaylist(name, id) => {
            CommandOutcome::events(vec![player.add_to_playlist(name, id)?])
        }
        AppCommand::RemoveFromPlaylist(name, id) => {
            CommandOutcome::events(vec![player.remove_from_playlist(name, id)?])
        }
        AppCommand::ClearPlaylist(name) => {
            CommandOutcome::events(vec![player.clear_playlist(name)?])
        }
        AppCommand::DeletePlaylist(name) => {
            CommandOutcome::events(vec![player.delete_playlist(name)?])
        }
        AppCommand::ShowPlaylist(name) => {
            let videos = player.playlist_videos(name)?;
            CommandOutcome::lines(format::playlist_contents(name, &videos))
        }
        AppCommand::ShowAllPlaylists => {
            CommandOutcome::lines(format::playlist_listing(player.playlists()))
        }

        AppCommand::SearchVideos(term) => search_outcome(player.search_videos(term)?),
        AppCommand::SearchVideosWithTag(tag) => search_outcome(player.search_videos_tag(tag)?),

        AppCommand::Help => CommandOutcome::lines(help_lines()),
        AppCommand::Exit => CommandOutcome {
            lines: vec!["Exiting video player".to_string()],
            exit: true,
            ..CommandOutcome::default()
        },
    };

    Ok(outcome)
}

fn search_outcome(results: SearchResults) -> CommandOutcome {
    CommandOutcome {
        lines: format::search_results(&results),
        selection: Some(results),
        exit: false,
    }
}

fn help_lines() -> Vec<String> {
    [
        "Available commands:",
        "  NUMBER_OF_VIDEOS - Shows how many videos are in the library.",
        "  SHOW_ALL_VIDEOS - Lists all videos from the library.",
        "  PLAY <video_id> - Plays specified video.",
        "  PLAY_RANDOM - Plays a random video from the library.",
        "  STOP - Stop the current video.",
        "  PAUSE - Pause the current video.",
        "  CONTINUE - Resume the current paused video.",
        "  SHOW_PLAYING - Displays the title, video_id and tags of the video currently playing.",
        "  CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.",
        "  ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.",
        "  REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.",
        "  CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.",
        "  DELETE_PLAYLIST <playlist_name> - Deletes the playlist.",
        "  SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.",
        "  SHOW_ALL_PLAYLISTS - Display all the available playlists.",
        "  SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.",
        "  SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.",
        "  HELP - Displays help.",
        "  EXIT - Terminates the program execution.",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
