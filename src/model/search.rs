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

//! Video search.
//!
//! This module provides searches over the catalog by title or by tag, and the
//! result list a follow-up selection is made from.

use crate::{
    error::{PlayerError, Result},
    model::{Video, catalog::Catalog},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchQuery {
    Title(String),
    Tag(String),
}

impl SearchQuery {
    pub(crate) fn term(&self) -> &str {
        match self {
            SearchQuery::Title(term) | SearchQuery::Tag(term) => term.as_str(),
        }
    }

    fn matches(&self, video: &Video) -> bool {
        match self {
            SearchQuery::Title(term) => video.title.to_lowercase().contains(&term.to_lowercase()),
            SearchQuery::Tag(tag) => video.has_tag(tag),
        }
    }
}

/// The videos matching a search, sorted by title.
#[derive(Debug, Clone)]
pub(crate) struct SearchResults {
    pub(crate) query: SearchQuery,
    videos: Vec<Video>,
}

impl SearchResults {
    pub(crate) fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Resolves the user's answer to the "play any of the above?" prompt.
    ///
    /// The answer is a 1-based position in the results; anything that is not
    /// a number in range means no selection.
    pub(crate) fn select(&self, answer: &str) -> Option<&Video> {
        let answer = answer.trim();
        if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let position: usize = answer.parse().ok()?;
        position.checked_sub(1).and_then(|idx| self.videos.get(idx))
    }
}

/// Runs a search over the full catalog.
///
/// # Errors
///
/// Returns [`PlayerError::EmptySearchResult`] if nothing matches.
pub(crate) fn search(catalog: &Catalog, query: SearchQuery) -> Result<SearchResults> {
    let mut videos: Vec<Video> = catalog
        .all()
        .iter()
        .filter(|video| query.matches(video))
        .cloned()
        .collect();

    if videos.is_empty() {
        return Err(PlayerError::EmptySearchResult(query.term().to_string()));
    }

    videos.sort_by(|a, b| a.title.cmp(&b.title));

    Ok(SearchResults { query, videos })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            Video::new("v2", "Zed", &["fun", "new"]),
            Video::new("v1", "Amy", &["fun"]),
            Video::new("v3", "Amazing Zebras", &[]),
        ])
    }

    fn titles(results: &SearchResults) -> Vec<&str> {
        results.videos().iter().map(|v| v.title.as_str()).collect()
    }

    #[test]
    fn test_search_by_tag() {
        let catalog = test_catalog();

        let results = search(&catalog, SearchQuery::Tag("fun".to_string())).unwrap();
        assert_eq!(titles(&results), vec!["Amy", "Zed"]);

        let results = search(&catalog, SearchQuery::Tag("NEW".to_string())).unwrap();
        assert_eq!(titles(&results), vec!["Zed"]);
    }

    #[test]
    fn test_search_by_tag_is_exact() {
        let catalog = test_catalog();
        let result = search(&catalog, SearchQuery::Tag("fu".to_string()));
        assert_eq!(
            result.err(),
            Some(PlayerError::EmptySearchResult("fu".to_string()))
        );
    }

    #[test]
    fn test_search_by_title_substring() {
        let catalog = test_catalog();

        let results = search(&catalog, SearchQuery::Title("am".to_string())).unwrap();
        assert_eq!(titles(&results), vec!["Amazing Zebras", "Amy"]);

        let results = search(&catalog, SearchQuery::Title("ZE".to_string())).unwrap();
        assert_eq!(titles(&results), vec!["Amazing Zebras", "Zed"]);
    }

    #[test]
    fn test_search_without_results() {
        let catalog = test_catalog();
        let result = search(&catalog, SearchQuery::Title("Bob".to_string()));
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("No search results for Bob".to_string())
        );
    }

    #[test]
    fn test_select() {
        let catalog = test_catalog();
        let results = search(&catalog, SearchQuery::Tag("fun".to_string())).unwrap();

        assert_eq!(results.select("1").map(|v| v.id.as_str()), Some("v1"));
        assert_eq!(results.select(" 2 \n").map(|v| v.id.as_str()), Some("v2"));
        assert!(results.select("0").is_none());
        assert!(results.select("3").is_none());
        assert!(results.select("-1").is_none());
        assert!(results.select("+1").is_none());
        assert!(results.select("1.0").is_none());
        assert!(results.select("no").is_none());
        assert!(results.select("").is_none());
    }
}
