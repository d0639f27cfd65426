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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the videos
//! of the catalog and the playlists built from them, along with the search
//! over the catalog.

pub(crate) mod catalog;
pub(crate) mod playlist;
pub(crate) mod search;

/// A single entry of the video catalog.
///
/// Videos are created once when the catalog is loaded and are never changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Video {
    pub(crate) id: String,
    pub(crate) title: String,
    /// Lowercase tags, in the order they were declared.
    pub(crate) tags: Vec<String>,
}

impl Video {
    pub(crate) fn new(id: &str, title: &str, tags: &[&str]) -> Self {
        let mut video = Self {
            id: id.to_string(),
            title: title.to_string(),
            tags: Vec::with_capacity(tags.len()),
        };

        for tag in tags {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !video.tags.contains(&tag) {
                video.tags.push(tag);
            }
        }

        video
    }

    pub(crate) fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| *t == tag)
    }
}
