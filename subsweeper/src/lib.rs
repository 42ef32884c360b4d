// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Simulation of a submarine clearing a mine field.
//!
//! A ship starts at the center of a rectangular [`Field`] of mines. Each mine is written
//! as a letter whose position in `a..=z, A..=Z` is the number of turns left before the
//! ship passes it. Every turn the ship may fire a torpedo pattern and then move; after
//! that every mine still in play comes one turn closer. Passing a mine fails the run,
//! and so does running out of commands with mines left.
//!
//! ```
//! use subsweeper::{Field, Mission, Verdict};
//!
//! let field: Field = "a".parse().unwrap();
//! let verdict = Mission::new(field, vec!["gamma"]).run();
//! assert_eq!(verdict, Verdict::pass(5));
//! ```
//!
//! [`Ship::apply_turn`] and [`Ship::evaluate`] expose the same loop one turn at a time
//! for drivers that want to render frames themselves.

pub mod command;
pub mod field;
pub mod mission;
pub mod score;
pub mod ship;
pub mod viewport;

pub use crate::{
    command::{Command, Movement, Torpedo},
    field::{Coordinate, Direction, Field, FieldError},
    mission::{Mission, Step},
    score::{Outcome, Verdict},
    ship::Ship,
    viewport::{Frame, Viewport},
};
