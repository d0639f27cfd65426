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

//! Video catalog.
//!
//! This module provides the read-only catalog of videos, and the loader that
//! builds it from a text source where each line describes one video:
//!
//! ```text
//! Funny Dogs | funny_dogs_video_id | #dog , #animal
//! ```
//!
//! The tag field is optional.

use std::{collections::HashMap, fs, path::Path};

use crate::model::Video;

const BUILTIN_CATALOG: &str = include_str!("../../data/videos.txt");

const FIELD_SEPARATOR: char = '|';
const TAG_SEPARATOR: char = ',';

#[derive(Debug, thiserror::Error)]
pub(crate) enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog entry on line {line}: {reason}")]
    Malformed { line: usize, reason: &'static str },

    #[error("Duplicate video id on line {line}: {id}")]
    DuplicateId { line: usize, id: String },
}

pub(crate) struct Catalog {
    videos: Vec<Video>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a catalog from an ordered collection of videos.
    ///
    /// If the same id appears more than once, the first entry wins.
    pub(crate) fn new(videos: Vec<Video>) -> Self {
        let mut catalog = Self {
            videos: Vec::with_capacity(videos.len()),
            index: HashMap::with_capacity(videos.len()),
        };

        for video in videos {
            if !catalog.index.contains_key(&video.id) {
                catalog.index.insert(video.id.clone(), catalog.videos.len());
                catalog.videos.push(video);
            }
        }

        catalog
    }

    /// The catalog compiled into the application, used when no catalog file
    /// is configured.
    pub(crate) fn builtin() -> Result<Self, CatalogError> {
        Self::parse(BUILTIN_CATALOG)
    }

    /// Loads a catalog file from disk.
    pub(crate) fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parses catalog entries, one per line.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if:
    /// * A line does not contain both a title and an id.
    /// * An id is used by more than one line.
    pub(crate) fn parse(contents: &str) -> Result<Self, CatalogError> {
        let mut videos: Vec<Video> = Vec::new();

        for (idx, raw) in contents.lines().enumerate() {
            let line = idx + 1;

            if raw.trim().is_empty() {
                continue;
            }

            let video = parse_entry(raw, line)?;

            if videos.iter().any(|v| v.id == video.id) {
                return Err(CatalogError::DuplicateId { line, id: video.id });
            }

            videos.push(video);
        }

        Ok(Self::new(videos))
    }

    /// All videos, in catalog order.
    pub(crate) fn all(&self) -> &[Video] {
        &self.videos
    }

    /// Looks up a video by its exact id.
    pub(crate) fn get(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&idx| &self.videos[idx])
    }

    pub(crate) fn len(&self) -> usize {
        self.videos.len()
    }
}

fn parse_entry(raw: &str, line: usize) -> Result<Video, CatalogError> {
    let fields: Vec<&str> = raw.split(FIELD_SEPARATOR).map(str::trim).collect();

    let (title, id, tags) = match fields.as_slice() {
        [title, id] => (*title, *id, ""),
        [title, id, tags] => (*title, *id, *tags),
        [_] => {
            return Err(CatalogError::Malformed {
                line,
                reason: "expected 'title | id | tags'",
            });
        }
        _ => {
            return Err(CatalogError::Malformed {
                line,
                reason: "too many fields",
            });
        }
    };

    if title.is_empty() {
        return Err(CatalogError::Malformed {
            line,
            reason: "missing title",
        });
    }

    if id.is_empty() {
        return Err(CatalogError::Malformed {
            line,
            reason: "missing id",
        });
    }

    let tags: Vec<&str> = tags.split(TAG_SEPARATOR).collect();

    Ok(Video::new(id, title, &tags))
}
