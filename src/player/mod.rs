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

//! Video playback control and playlist management.
//!
//! This module provides the [`VideoPlayer`], the single owned context that
//! holds the playback state and the user's playlists over a read-only
//! [`Catalog`]. Every operation either succeeds, reporting what happened as
//! [`PlayerEvent`]s, or fails with a [`PlayerError`] leaving the state
//! untouched.

pub(crate) mod state;

use log::debug;
use rand::seq::IndexedRandom;

use crate::{
    actions::events::PlayerEvent,
    error::{PlayerError, Result},
    model::{
        Video,
        catalog::Catalog,
        playlist::{Playlist, PlaylistStore},
        search::{self, SearchQuery, SearchResults},
    },
    player::state::PlaybackState,
};

pub(crate) struct VideoPlayer {
    catalog: Catalog,
    state: PlaybackState,
    playlists: PlaylistStore,
}

impl VideoPlayer {
    pub(crate) fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: PlaybackState::Stopped,
            playlists: PlaylistStore::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub(crate) fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// All videos of the catalog, sorted by title.
    pub(crate) fn all_videos(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.catalog.all().iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        videos
    }

    fn video(&self, id: &str) -> Result<&Video> {
        self.catalog.get(id).ok_or(PlayerError::VideoNotFound)
    }

    fn current_video(&self) -> Result<&Video> {
        let id = self.state.current_id().ok_or(PlayerError::NoVideoPlaying)?;
        self.video(id)
    }

    /// Plays a video, first stopping whatever video is loaded, even if it is
    /// the same one.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::VideoNotFound`] if the id is not in the catalog.
    pub(crate) fn play(&mut self, id: &str) -> Result<Vec<PlayerEvent>> {
        let video = self.video(id)?.clone();
        let previous = match self.state.current_id() {
            Some(current) => Some(self.video(current)?.clone()),
            None => None,
        };

        let mut events = Vec::with_capacity(2);

        self.state.start(video.id.clone());

        if let Some(previous) = previous {
            debug!("Stopped {} to play {}", previous.id, video.id);
            events.push(PlayerEvent::Stopped(previous));
        }

        debug!("Playing {}", video.id);
        events.push(PlayerEvent::Started(video));

        Ok(events)
    }

    /// Plays a video chosen at random from the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoVideosAvailable`] if the catalog is empty.
    pub(crate) fn play_random(&mut self) -> Result<Vec<PlayerEvent>> {
        let id = self
            .catalog
            .all()
            .choose(&mut rand::rng())
            .map(|video| video.id.clone())
            .ok_or(PlayerError::NoVideosAvailable)?;

        self.play(&id)
    }

    pub(crate) fn stop(&mut self) -> Result<PlayerEvent> {
        let video = self.current_video()?.clone();
        self.state.stop();

        debug!("Stopped {}", video.id);
        Ok(PlayerEvent::Stopped(video))
    }

    pub(crate) fn pause(&mut self) -> Result<PlayerEvent> {
        let video = self.current_video()?.clone();

        if !self.state.pause() {
            return Err(PlayerError::AlreadyPaused(video.title));
        }

        debug!("Paused {}", video.id);
        Ok(PlayerEvent::Paused(video))
    }

    pub(crate) fn resume(&mut self) -> Result<PlayerEvent> {
        let video = self.current_video()?.clone();

        if !self.state.resume() {
            return Err(PlayerError::NotPaused);
        }

        debug!("Resumed {}", video.id);
        Ok(PlayerEvent::Resumed(video))
    }

    pub(crate) fn show_playing(&self) -> PlayerEvent {
        match self.current_video() {
            Ok(video) => PlayerEvent::NowPlaying {
                video: video.clone(),
                paused: self.state.is_paused(),
            },
            Err(_) => PlayerEvent::NothingPlaying,
        }
    }

    pub(crate) fn create_playlist(&mut self, name: &str) -> Result<PlayerEvent> {
        self.playlists.create(name)?;
        debug!("Created playlist {name}");
        Ok(PlayerEvent::PlaylistCreated(name.to_string()))
    }

    pub(crate) fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<PlayerEvent> {
        let playlist = self.playlists.get_mut(name)?;
        let video = self.catalog.get(video_id).ok_or(PlayerError::VideoNotFound)?;

        playlist.add_video(&video.id)?;

        Ok(PlayerEvent::AddedToPlaylist {
            playlist: name.to_string(),
            video: video.clone(),
        })
    }

    pub(crate) fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<PlayerEvent> {
        let playlist = self.playlists.get_mut(name)?;
        let video = self.catalog.get(video_id).ok_or(PlayerError::VideoNotFound)?;

        playlist.remove_video(&video.id)?;

        Ok(PlayerEvent::RemovedFromPlaylist {
            playlist: name.to_string(),
            video: video.clone(),
        })
    }

    pub(crate) fn clear_playlist(&mut self, name: &str) -> Result<PlayerEvent> {
        self.playlists.get_mut(name)?.clear();
        Ok(PlayerEvent::PlaylistCleared(name.to_string()))
    }

    pub(crate) fn delete_playlist(&mut self, name: &str) -> Result<PlayerEvent> {
        let playlist = self.playlists.delete(name)?;
        debug!("Deleted playlist {}", playlist.id);
        Ok(PlayerEvent::PlaylistDeleted(name.to_string()))
    }

    /// All playlists, sorted by their case-insensitive id.
    pub(crate) fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.iter()
    }

    /// The videos of a playlist, in playlist order.
    pub(crate) fn playlist_videos(&self, name: &str) -> Result<Vec<&Video>> {
        self.playlists
            .get(name)?
            .videos()
            .iter()
            .map(|id| self.video(id))
            .collect()
    }

    pub(crate) fn search_videos(&self, term: &str) -> Result<SearchResults> {
        search::search(&self.catalog, SearchQuery::Title(term.to_string()))
    }

    pub(crate) fn search_videos_tag(&self, tag: &str) -> Result<SearchResults> {
        search::search(&self.catalog, SearchQuery::Tag(tag.to_string()))
    }

    /// Plays the search result the user picked, if the answer picks one.
    pub(crate) fn play_selection(
        &mut self,
        results: &SearchResults,
        answer: &str,
    ) -> Option<Result<Vec<PlayerEvent>>> {
        let video = results.select(answer)?;
        Some(self.play(&video.id))
    }
}
