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

//! Playback state machine.

/// Represents the current playback status, including the id of the loaded
/// video when there is one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum PlaybackState {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

impl PlaybackState {
    pub(crate) fn current_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub(crate) fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }

    /// Loads and plays a video, replacing whatever video was loaded.
    pub(crate) fn start(&mut self, id: String) {
        *self = PlaybackState::Playing(id);
    }

    /// Unloads the current video.
    pub(crate) fn stop(&mut self) {
        *self = PlaybackState::Stopped;
    }

    /// Returns `true` if the state changed from playing to paused.
    pub(crate) fn pause(&mut self) -> bool {
        match self {
            PlaybackState::Playing(id) => {
                *self = PlaybackState::Paused(std::mem::take(id));
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if the state changed from paused to playing.
    pub(crate) fn resume(&mut self) -> bool {
        match self {
            PlaybackState::Paused(id) => {
                *self = PlaybackState::Playing(std::mem::take(id));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_from_any_state() {
        let mut state = PlaybackState::Stopped;
        state.start("a".to_string());
        assert_eq!(state, PlaybackState::Playing("a".to_string()));

        state.start("a".to_string());
        assert_eq!(state, PlaybackState::Playing("a".to_string()));

        state.pause();
        state.start("b".to_string());
        assert_eq!(state, PlaybackState::Playing("b".to_string()));
        assert_eq!(state.current_id(), Some("b"));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut state = PlaybackState::Playing("a".to_string());

        assert!(state.pause());
        assert_eq!(state, PlaybackState::Paused("a".to_string()));
        assert!(!state.pause());
        assert!(state.is_paused());

        assert!(state.resume());
        assert_eq!(state, PlaybackState::Playing("a".to_string()));
        assert!(!state.resume());
    }

    #[test]
    fn test_stopped_ignores_transitions() {
        let mut state = PlaybackState::Stopped;
        assert!(!state.pause());
        assert!(!state.resume());
        state.stop();
        assert_eq!(state.current_id(), None);
    }

    #[test]
    fn test_stop_clears_current() {
        let mut state = PlaybackState::Paused("a".to_string());
        state.stop();
        assert_eq!(state, PlaybackState::Stopped);
        assert!(!state.is_paused());
    }
}
