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

//! Player notifications.
//!
//! Each successful state change produces one or more [`PlayerEvent`]s, whose
//! `Display` form is the line reported to the user.

use std::fmt;

use crate::{model::Video, util::format::video_details};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlayerEvent {
    Started(Video),
    Stopped(Video),
    Paused(Video),
    Resumed(Video),

    NowPlaying { video: Video, paused: bool },
    NothingPlaying,

    PlaylistCreated(String),
    AddedToPlaylist { playlist: String, video: Video },
    RemovedFromPlaylist { playlist: String, video: Video },
    PlaylistCleared(String),
    PlaylistDeleted(String),
}

impl fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerEvent::Started(video) => write!(f, "Playing video: {}", video.title),
            PlayerEvent::Stopped(video) => write!(f, "Stopping video: {}", video.title),
            PlayerEvent::Paused(video) => write!(f, "Pausing video: {}", video.title),
            PlayerEvent::Resumed(video) => write!(f, "Continuing video: {}", video.title),

            PlayerEvent::NowPlaying { video, paused } => {
                write!(f, "Currently playing: {}", video_details(video))?;
                if *paused {
                    write!(f, " - PAUSED")?;
                }
                Ok(())
            }
            PlayerEvent::NothingPlaying => write!(f, "No video is currently playing"),

            PlayerEvent::PlaylistCreated(name) => {
                write!(f, "Successfully created new playlist: {name}")
            }
            PlayerEvent::AddedToPlaylist { playlist, video } => {
                write!(f, "Added video to {playlist}: {}", video.title)
            }
            PlayerEvent::RemovedFromPlaylist { playlist, video } => {
                write!(f, "Removed video from {playlist}: {}", video.title)
            }
            PlayerEvent::PlaylistCleared(name) => {
                write!(f, "Successfully removed all videos from {name}")
            }
            PlayerEvent::PlaylistDeleted(name) => write!(f, "Deleted playlist: {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_playing_wording() {
        let video = Video::new("v1", "Amy", &["#fun", "#new"]);

        let event = PlayerEvent::NowPlaying {
            video: video.clone(),
            paused: false,
        };
        assert_eq!(event.to_string(), "Currently playing: Amy (v1) [#fun #new]");

        let event = PlayerEvent::NowPlaying { video, paused: true };
        assert_eq!(
            event.to_string(),
            "Currently playing: Amy (v1) [#fun #new] - PAUSED"
        );
    }

    #[test]
    fn test_playlist_wording() {
        let video = Video::new("v1", "Amy", &[]);
        let event = PlayerEvent::AddedToPlaylist {
            playlist: "My List".to_string(),
            video,
        };
        assert_eq!(event.to_string(), "Added video to My List: Amy");
    }
}
