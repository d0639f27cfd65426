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

use crate::model::{Video, playlist::Playlist, search::SearchResults};

const INDENT: &str = "  ";

/// Formats a video as `title (id) [tags]`.
///
/// This is the form used wherever a video is listed in full, in listings,
/// playlists, search results and the now-playing report.
///
/// # Examples
///
/// ```ignore
/// let video = Video::new("v1", "Amy", &["#fun", "#new"]);
/// assert_eq!(video_details(&video), "Amy (v1) [#fun #new]");
/// ```
pub(crate) fn video_details(video: &Video) -> String {
    format!("{} ({}) [{}]", video.title, video.id, video.tags.join(" "))
}

pub(crate) fn video_count(count: usize) -> String {
    format!("{count} videos in the library")
}

/// Formats the whole catalog, given already sorted for display.
pub(crate) fn video_listing(videos: &[&Video]) -> Vec<String> {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(videos.iter().map(|v| format!("{INDENT}{}", video_details(v))));
    lines
}

pub(crate) fn playlist_listing<'a>(playlists: impl IntoIterator<Item = &'a Playlist>) -> Vec<String> {
    let names: Vec<String> = playlists
        .into_iter()
        .map(|p| format!("{INDENT}{}", p.name))
        .collect();

    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }

    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(names);
    lines
}

/// Formats the contents of a playlist.
///
/// # Arguments
///
/// * `name` - The playlist name as the user gave it.
/// * `videos` - The playlist's videos, in playlist order.
pub(crate) fn playlist_contents(name: &str, videos: &[&Video]) -> Vec<String> {
    let mut lines = vec![format!("Showing playlist: {name}")];

    if videos.is_empty() {
        lines.push(format!("{INDENT}No videos here yet"));
    } else {
        lines.extend(videos.iter().map(|v| format!("{INDENT}{}", video_details(v))));
    }

    lines
}

/// Formats search results as a numbered list followed by the selection
/// prompt.
pub(crate) fn search_results(results: &SearchResults) -> Vec<String> {
    let mut lines = vec![format!("Here are the results for {}:", results.query.term())];

    lines.extend(
        results
            .videos()
            .iter()
            .enumerate()
            .map(|(idx, v)| format!("{INDENT}{}) {}", idx + 1, video_details(v))),
    );

    lines.push(
        "Would you like to play any of the above? If yes, specify the number of the video."
            .to_string(),
    );
    lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_details() {
        let video = Video::new("v1", "Amy", &["#fun", "#new"]);
        assert_eq!(video_details(&video), "Amy (v1) [#fun #new]");

        let video = Video::new("v2", "Zed", &[]);
        assert_eq!(video_details(&video), "Zed (v2) []");
    }

    #[test]
    fn test_playlist_listing() {
        assert_eq!(playlist_listing(Vec::new()), vec!["No playlists exist yet"]);

        let playlists = vec![Playlist::new("Apple"), Playlist::new("zebra")];
        assert_eq!(
            playlist_listing(&playlists),
            vec!["Showing all playlists:", "  Apple", "  zebra"]
        );
    }

    #[test]
    fn test_empty_playlist_contents() {
        assert_eq!(
            playlist_contents("My List", &[]),
            vec!["Showing playlist: My List", "  No videos here yet"]
        );
    }
}
