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

//! Named playlist management.
//!
//! This module provides state for the user's playlists, each an ordered list
//! of video ids without duplicates. Playlists are looked up by a key derived
//! from the name with [`playlist_id`], so names are case-insensitive, while
//! the name as first given is kept for display.

use std::collections::BTreeMap;

use crate::error::{PlayerError, Result};

/// Normalises a playlist name into its lookup key.
pub(crate) fn playlist_id(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Playlist {
    pub(crate) name: String,
    pub(crate) id: String,
    videos: Vec<String>,
}

impl Playlist {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: playlist_id(name),
            videos: Vec::new(),
        }
    }

    pub(crate) fn videos(&self) -> &[String] {
        &self.videos
    }

    pub(crate) fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|v| v == video_id)
    }

    pub(crate) fn add_video(&mut self, video_id: &str) -> Result<()> {
        if self.contains(video_id) {
            return Err(PlayerError::DuplicateInPlaylist);
        }

        self.videos.push(video_id.to_string());
        Ok(())
    }

    pub(crate) fn remove_video(&mut self, video_id: &str) -> Result<()> {
        let idx = self
            .videos
            .iter()
            .position(|v| v == video_id)
            .ok_or(PlayerError::VideoNotInPlaylist)?;

        self.videos.remove(idx);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.videos.clear();
    }
}

/// All playlists, keyed by [`playlist_id`].
///
/// Iteration is ordered by key, which is the listing order shown to the user.
#[derive(Debug, Default)]
pub(crate) struct PlaylistStore {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn create(&mut self, name: &str) -> Result<&Playlist> {
        let id = playlist_id(name);

        if self.playlists.contains_key(&id) {
            return Err(PlayerError::DuplicatePlaylist);
        }

        Ok(self.playlists.entry(id).or_insert_with(|| Playlist::new(name)))
    }

    pub(crate) fn get(&self, name: &str) -> Result<&Playlist> {
        self.playlists
            .get(&playlist_id(name))
            .ok_or(PlayerError::PlaylistNotFound)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(&playlist_id(name))
            .ok_or(PlayerError::PlaylistNotFound)
    }

    pub(crate) fn delete(&mut self, name: &str) -> Result<Playlist> {
        self.playlists
            .remove(&playlist_id(name))
            .ok_or(PlayerError::PlaylistNotFound)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_keeps_display_name() {
        let mut store = PlaylistStore::new();
        let playlist = store.create("My List").unwrap();
        assert_eq!(playlist.name, "My List");
        assert_eq!(playlist.id, "my list");
        assert!(playlist.videos().is_empty());
    }

    #[test]
    fn test_create_is_case_insensitive() {
        let mut store = PlaylistStore::new();
        store.create("Foo").unwrap();
        assert_eq!(store.create("foo"), Err(PlayerError::DuplicatePlaylist));
        assert_eq!(store.create("FOO"), Err(PlayerError::DuplicatePlaylist));
        assert_eq!(store.iter().count(), 1);
    }

    #[test]
    fn test_lookup_by_any_case() {
        let mut store = PlaylistStore::new();
        store.create("My List").unwrap();
        assert!(store.get("MY LIST").is_ok());
        assert!(store.get_mut("my list").is_ok());
        assert_eq!(store.get("other").err(), Some(PlayerError::PlaylistNotFound));
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut playlist = Playlist::new("p");
        playlist.add_video("v1").unwrap();
        playlist.add_video("v2").unwrap();
        assert_eq!(playlist.add_video("v1"), Err(PlayerError::DuplicateInPlaylist));
        assert_eq!(playlist.videos(), ["v1".to_string(), "v2".to_string()]);
    }

    #[test]
    fn test_add_then_remove_restores_sequence() {
        let mut playlist = Playlist::new("p");
        playlist.add_video("v1").unwrap();
        playlist.add_video("v2").unwrap();
        let before = playlist.videos().to_vec();

        playlist.add_video("v3").unwrap();
        playlist.remove_video("v3").unwrap();

        assert_eq!(playlist.videos(), before.as_slice());
        assert_eq!(playlist.remove_video("v3"), Err(PlayerError::VideoNotInPlaylist));
    }

    #[test]
    fn test_clear_and_delete() {
        let mut store = PlaylistStore::new();
        store.create("p").unwrap();
        store.get_mut("p").unwrap().add_video("v1").unwrap();

        store.get_mut("P").unwrap().clear();
        assert!(store.get("p").unwrap().videos().is_empty());

        let deleted = store.delete("P").unwrap();
        assert_eq!(deleted.name, "p");
        assert_eq!(store.iter().count(), 0);
        assert_eq!(store.delete("p").err(), Some(PlayerError::PlaylistNotFound));
    }

    #[test]
    fn test_iteration_sorted_by_id() {
        let mut store = PlaylistStore::new();
        store.create("zebra").unwrap();
        store.create("Apple").unwrap();
        store.create("mango").unwrap();

        let names: Vec<&str> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "mango", "zebra"]);
    }
}
