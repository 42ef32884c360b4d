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
//! Interpretation of a single turn's command line.
//!
//! A line holds up to two whitespace-separated tokens: an optional torpedo pattern name
//! followed by an optional movement word. Unknown tokens are dropped rather than
//! rejected, so every line parses into some (possibly empty) [`Command`]. Words are
//! matched exactly; `North` is not a movement.

use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;

use crate::field::Direction;

/// Movement part of a command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Movement {
    /// Stay on the same cell and only sink deeper.
    Descend,
    /// Move one cell in the given direction.
    Steer(Direction),
}

impl Movement {
    /// The movement named by `word`, if any. Descend has no word of its own.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "north" => Some(Movement::Steer(Direction::North)),
            "south" => Some(Movement::Steer(Direction::South)),
            "east" => Some(Movement::Steer(Direction::East)),
            "west" => Some(Movement::Steer(Direction::West)),
            _ => None,
        }
    }

    /// The word naming this movement in a script.
    pub fn word(self) -> &'static str {
        match self {
            Movement::Descend => "",
            Movement::Steer(Direction::North) => "north",
            Movement::Steer(Direction::South) => "south",
            Movement::Steer(Direction::East) => "east",
            Movement::Steer(Direction::West) => "west",
        }
    }
}

/// Named torpedo firing patterns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Torpedo {
    /// The four diagonal neighbors.
    Alpha,
    /// The four orthogonal neighbors.
    Beta,
    /// The ship's own cell and its east and west neighbors.
    Gamma,
    /// The ship's own cell and its north and south neighbors.
    Delta,
}

impl Torpedo {
    /// Every torpedo pattern.
    pub const ALL: &'static [Torpedo] = &[
        Torpedo::Alpha,
        Torpedo::Beta,
        Torpedo::Gamma,
        Torpedo::Delta,
    ];

    /// The pattern named by `word`, if any.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "alpha" => Some(Torpedo::Alpha),
            "beta" => Some(Torpedo::Beta),
            "gamma" => Some(Torpedo::Gamma),
            "delta" => Some(Torpedo::Delta),
            _ => None,
        }
    }

    /// The word naming this pattern in a script.
    pub fn word(self) -> &'static str {
        match self {
            Torpedo::Alpha => "alpha",
            Torpedo::Beta => "beta",
            Torpedo::Gamma => "gamma",
            Torpedo::Delta => "delta",
        }
    }

    /// Offsets `(dx, dy)` from the ship's cell hit by this pattern.
    pub fn pattern(self) -> &'static [(isize, isize)] {
        match self {
            Torpedo::Alpha => &[(-1, -1), (-1, 1), (1, -1), (1, 1)],
            Torpedo::Beta => &[(-1, 0), (0, -1), (0, 1), (1, 0)],
            Torpedo::Gamma => &[(-1, 0), (0, 0), (1, 0)],
            Torpedo::Delta => &[(0, -1), (0, 0), (0, 1)],
        }
    }

    /// Hop chains from the ship's cell to each target of this pattern.
    pub fn hop_chains(self) -> impl Iterator<Item = &'static [Direction]> {
        self.pattern()
            .iter()
            .map(|offset| HOPS.get(offset).map_or(&[][..], Vec::as_slice))
    }
}

/// Neighbor hops reaching each offset within one cell of the ship. The vertical hop comes
/// first, and the zero offset needs no hops at all.
static HOPS: Lazy<HashMap<(isize, isize), Vec<Direction>>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for dy in -1..=1 {
        for dx in -1..=1 {
            let mut hops = Vec::with_capacity(2);
            match dy {
                -1 => hops.push(Direction::North),
                1 => hops.push(Direction::South),
                _ => {}
            }
            match dx {
                -1 => hops.push(Direction::West),
                1 => hops.push(Direction::East),
                _ => {}
            }
            map.insert((dx, dy), hops);
        }
    }
    map
});

/// One turn's parsed command. Either part may be absent.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Command {
    /// Torpedo pattern to fire, if any.
    pub torpedo: Option<Torpedo>,
    /// Movement to make after firing, if any.
    pub movement: Option<Movement>,
}

impl Command {
    /// Parse a raw command line.
    ///
    /// With two tokens the first must name a torpedo and the second a movement; a token
    /// that does not match its slot is dropped. A single token is a movement if it names
    /// one and a torpedo otherwise. Any other token count yields an empty command.
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [torpedo, movement] => Self {
                torpedo: Torpedo::from_word(torpedo),
                movement: Movement::from_word(movement),
            },
            [token] => match Movement::from_word(token) {
                Some(movement) => Self {
                    torpedo: None,
                    movement: Some(movement),
                },
                None => Self {
                    torpedo: Torpedo::from_word(token),
                    movement: None,
                },
            },
            _ => Self::default(),
        }
    }

    /// True if neither a torpedo nor a movement was given.
    pub fn is_empty(&self) -> bool {
        self.torpedo.is_none() && self.movement.is_none()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let words: Vec<&str> = self
            .torpedo
            .map(Torpedo::word)
            .into_iter()
            .chain(self.movement.map(Movement::word))
            .filter(|word| !word.is_empty())
            .collect();
        f.pad(&words.join(" "))
    }
}
