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

//! Application logic and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how user commands are translated into player
//! state changes and reported back.
//!
//! # Organization
//!
//! * [`events`]: The notifications produced by player state changes.
//! * [`commands`]: The application commands and their dispatcher.

pub(crate) mod commands;
pub(crate) mod events;
