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

//! Player and playlist failures.
//!
//! Every failure leaves the player state unchanged. The message of each kind
//! is the reason part of the line shown to the user; the command that failed
//! supplies the leading context, see [`PlayerError::is_standalone`].

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum PlayerError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    DuplicatePlaylist,

    #[error("Video already added")]
    DuplicateInPlaylist,

    #[error("Video is not in playlist")]
    VideoNotInPlaylist,

    #[error("No video is currently playing")]
    NoVideoPlaying,

    #[error("Video already paused: {0}")]
    AlreadyPaused(String),

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("No search results for {0}")]
    EmptySearchResult(String),
}

impl PlayerError {
    /// Whether the message reads as a complete sentence on its own, without
    /// the failing command's context in front of it.
    pub(crate) fn is_standalone(&self) -> bool {
        matches!(
            self,
            PlayerError::AlreadyPaused(_) | PlayerError::EmptySearchResult(_)
        )
    }
}

pub(crate) type Result<T> = std::result::Result<T, PlayerError>;
