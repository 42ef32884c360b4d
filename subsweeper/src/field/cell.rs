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
//! A single location in the field.

use tracing::trace;

use crate::field::{
    rank::{Rank, EMPTY_SYMBOL, PASSED_SYMBOL},
    Coordinate,
};

/// What currently occupies a [`Cell`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Contents {
    /// Open water.
    Empty,
    /// A live mine with the given number of turns left before it is passed.
    Mine(Rank),
    /// A mine whose rank ran out before it was destroyed. Permanent.
    Passed,
}

/// A single cell in the field.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cell {
    /// Where this cell sits in the field.
    coord: Coordinate,

    /// Current contents.
    contents: Contents,
}

impl Cell {
    /// Build the cell at `coord` from its field symbol. Returns `None` if the symbol is
    /// neither empty water nor a mine letter.
    pub(super) fn from_symbol(coord: Coordinate, symbol: char) -> Option<Self> {
        let contents = match symbol {
            EMPTY_SYMBOL => Contents::Empty,
            other => Contents::Mine(Rank::from_symbol(other)?),
        };
        Some(Self { coord, contents })
    }

    /// Coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Current contents of this cell.
    pub fn contents(&self) -> Contents {
        self.contents
    }

    /// True if this cell holds a mine, live or passed.
    pub fn is_mine(&self) -> bool {
        self.contents != Contents::Empty
    }

    /// True if this cell holds a mine that was passed.
    pub fn passed(&self) -> bool {
        self.contents == Contents::Passed
    }

    /// Rank of the mine in this cell, if it holds a live one.
    pub fn rank(&self) -> Option<Rank> {
        match self.contents {
            Contents::Mine(rank) => Some(rank),
            _ => None,
        }
    }

    /// Display symbol of this cell.
    pub fn symbol(&self) -> char {
        match self.contents {
            Contents::Empty => EMPTY_SYMBOL,
            Contents::Mine(rank) => rank.symbol(),
            Contents::Passed => PASSED_SYMBOL,
        }
    }

    /// Destroy the mine in this cell. Returns true only if a live mine was here; empty
    /// and passed cells are left untouched.
    pub fn destroy(&mut self) -> bool {
        match self.contents {
            Contents::Mine(_) => {
                self.contents = Contents::Empty;
                true
            }
            Contents::Empty | Contents::Passed => false,
        }
    }

    /// Bring the mine in this cell one turn closer to the surface. A mine whose rank runs
    /// out becomes passed and stays that way.
    pub fn decay(&mut self) {
        if let Contents::Mine(rank) = self.contents {
            self.contents = match rank.shallower() {
                Some(next) => Contents::Mine(next),
                None => Contents::Passed,
            };
            trace!(x = self.coord.x, y = self.coord.y, symbol = %self.symbol(), "mine decayed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(symbol: char) -> Cell {
        Cell::from_symbol(Coordinate::new(0, 0), symbol).unwrap()
    }

    #[test]
    fn symbols_parse_into_contents() {
        assert_eq!(cell('.').contents(), Contents::Empty);
        assert_eq!(cell('c').rank().map(Rank::get), Some(3));
        assert!(Cell::from_symbol(Coordinate::new(0, 0), '*').is_none());
        assert!(Cell::from_symbol(Coordinate::new(0, 0), '?').is_none());
    }

    #[test]
    fn destroy_is_idempotent() {
        let mut mine = cell('b');
        assert!(mine.destroy());
        assert_eq!(mine.symbol(), EMPTY_SYMBOL);
        assert!(!mine.destroy());
        assert_eq!(mine.symbol(), EMPTY_SYMBOL);
        assert!(!mine.is_mine());
    }

    #[test]
    fn decay_walks_down_the_alphabet() {
        let mut mine = cell('B');
        mine.decay();
        assert_eq!(mine.symbol(), 'A');
        mine.decay();
        assert_eq!(mine.symbol(), 'z');
    }

    #[test]
    fn last_decay_passes_the_mine_for_good() {
        let mut mine = cell('a');
        mine.decay();
        assert!(mine.passed());
        assert_eq!(mine.symbol(), PASSED_SYMBOL);
        mine.decay();
        assert!(mine.passed());
        assert!(!mine.destroy());
        assert_eq!(mine.symbol(), PASSED_SYMBOL);
    }

    #[test]
    fn empty_cells_do_not_decay() {
        let mut water = cell('.');
        water.decay();
        assert_eq!(water.contents(), Contents::Empty);
    }
}
