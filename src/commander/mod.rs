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

//! Command-line input parsing.
//!
//! This module turns a line typed by the user into the corresponding
//! [`AppCommand`]. The command word is case-insensitive; arguments are kept
//! as typed.

use crate::actions::commands::AppCommand;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum CommandError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Missing arguments, usage: {0}")]
    Usage(&'static str),
}

/// Parses one line of input.
///
/// Returns `Ok(None)` for a blank line.
///
/// Playlist names may contain spaces, so for commands taking a playlist name
/// and a video id, the id is the last word and the name is everything before
/// it.
pub(crate) fn parse_command(line: &str) -> Result<Option<AppCommand>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some((cmd, args)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match (cmd.to_uppercase().as_str(), args) {
        ("NUMBER_OF_VIDEOS", []) => AppCommand::NumberOfVideos,
        ("SHOW_ALL_VIDEOS", []) => AppCommand::ShowAllVideos,

        ("PLAY", [id]) => AppCommand::Play(id.to_string()),
        ("PLAY", _) => return Err(CommandError::Usage("PLAY <video_id>")),
        ("PLAY_RANDOM", []) => AppCommand::PlayRandom,
        ("STOP", []) => AppCommand::Stop,
        ("PAUSE", []) => AppCommand::Pause,
        ("CONTINUE", []) => AppCommand::Continue,
        ("SHOW_PLAYING", []) => AppCommand::ShowPlaying,

        ("CREATE_PLAYLIST", [_, ..]) => AppCommand::CreatePlaylist(args.join(" ")),
        ("CREATE_PLAYLIST", []) => {
            return Err(CommandError::Usage("CREATE_PLAYLIST <playlist_name>"));
        }
        ("ADD_TO_PLAYLIST", [name_parts @ .., id]) if !name_parts.is_empty() => {
            AppCommand::AddToPlaylist(name_parts.join(" "), id.to_string())
        }
        ("ADD_TO_PLAYLIST", _) => {
            return Err(CommandError::Usage("ADD_TO_PLAYLIST <playlist_name> <video_id>"));
        }
        ("REMOVE_FROM_PLAYLIST", [name_parts @ .., id]) if !name_parts.is_empty() => {
            AppCommand::RemoveFromPlaylist(name_parts.join(" "), id.to_string())
        }
        ("REMOVE_FROM_PLAYLIST", _) => {
            return Err(CommandError::Usage(
                "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>",
            ));
        }
        ("CLEAR_PLAYLIST", [_, ..]) => AppCommand::ClearPlaylist(args.join(" ")),
        ("CLEAR_PLAYLIST", []) => {
            return Err(CommandError::Usage("CLEAR_PLAYLIST <playlist_name>"));
        }
        ("DELETE_PLAYLIST", [_, ..]) => AppCommand::DeletePlaylist(args.join(" ")),
        ("DELETE_PLAYLIST", []) => {
            return Err(CommandError::Usage("DELETE_PLAYLIST <playlist_name>"));
        }
        ("SHOW_PLAYLIST", [_, ..]) => AppCommand::ShowPlaylist(args.join(" ")),
        ("SHOW_PLAYLIST", []) => {
            return Err(CommandError::Usage("SHOW_PLAYLIST <playlist_name>"));
        }
        ("SHOW_ALL_PLAYLISTS", []) => AppCommand::ShowAllPlaylists,

        ("SEARCH_VIDEOS", [_, ..]) => AppCommand::SearchVideos(args.join(" ")),
        ("SEARCH_VIDEOS", []) => {
            return Err(CommandError::Usage("SEARCH_VIDEOS <search_term>"));
        }
        ("SEARCH_VIDEOS_WITH_TAG", [tag]) => AppCommand::SearchVideosWithTag(tag.to_string()),
        ("SEARCH_VIDEOS_WITH_TAG", _) => {
            return Err(CommandError::Usage("SEARCH_VIDEOS_WITH_TAG <tag_name>"));
        }

        ("HELP", _) => AppCommand::Help,
        ("EXIT", _) => AppCommand::Exit,

        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> AppCommand {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_command_word_ignores_case() {
        assert_eq!(parse("play v1"), AppCommand::Play("v1".to_string()));
        assert_eq!(parse("Show_Playing"), AppCommand::ShowPlaying);
        assert_eq!(parse("EXIT"), AppCommand::Exit);
    }

    #[test]
    fn test_playlist_names_with_spaces() {
        assert_eq!(
            parse("CREATE_PLAYLIST My  List"),
            AppCommand::CreatePlaylist("My List".to_string())
        );
        assert_eq!(
            parse("ADD_TO_PLAYLIST my list v1"),
            AppCommand::AddToPlaylist("my list".to_string(), "v1".to_string())
        );
        assert_eq!(
            parse("REMOVE_FROM_PLAYLIST mine v1"),
            AppCommand::RemoveFromPlaylist("mine".to_string(), "v1".to_string())
        );
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            parse_command("PLAY"),
            Err(CommandError::Usage("PLAY <video_id>"))
        );
        assert!(matches!(
            parse_command("ADD_TO_PLAYLIST v1"),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            parse_command("SHOW_PLAYLIST"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_unknown_commands() {
        assert!(matches!(
            parse_command("FLAG_VIDEO v1"),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(parse_command("STOP now"), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn test_search_commands() {
        assert_eq!(
            parse("SEARCH_VIDEOS cat video"),
            AppCommand::SearchVideos("cat video".to_string())
        );
        assert_eq!(
            parse("search_videos_with_tag #cat"),
            AppCommand::SearchVideosWithTag("#cat".to_string())
        );
    }
}
