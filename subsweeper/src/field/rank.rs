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
//! Depth encoding of mines.
//!
//! A mine's symbol is a letter from the ordered alphabet `a..=z` followed by `A..=Z`. Its
//! 1-based position in that alphabet is its rank: the number of turns left before the
//! mine is passed.

/// Symbol of a cell that holds nothing.
pub const EMPTY_SYMBOL: char = '.';

/// Symbol left behind by a mine that was passed before it could be destroyed.
pub const PASSED_SYMBOL: char = '*';

/// Symbol overlaid on the ship's cell when the debug marker is shown.
pub const SHIP_SYMBOL: char = '#';

/// Mine symbols ordered from shallowest to deepest.
const MINE_SYMBOLS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Turns remaining before a mine is passed. Always in `1..=52`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(u8);

impl Rank {
    /// The shallowest rank, one turn away from being passed.
    pub const MIN: Rank = Rank(1);

    /// The deepest rank.
    pub const MAX: Rank = Rank(MINE_SYMBOLS.len() as u8);

    /// Get the rank encoded by a mine symbol, or `None` if `symbol` is not a mine letter.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        if !symbol.is_ascii_alphabetic() {
            return None;
        }
        MINE_SYMBOLS
            .iter()
            .position(|&s| s as char == symbol)
            .map(|idx| Rank(idx as u8 + 1))
    }

    /// Construct a rank from its numeric value, or `None` if out of `1..=52`.
    pub fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Rank(value))
        } else {
            None
        }
    }

    /// Numeric value of this rank.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The letter encoding this rank.
    pub fn symbol(self) -> char {
        MINE_SYMBOLS[self.0 as usize - 1] as char
    }

    /// The rank one turn closer to the surface, or `None` if the mine is passed by
    /// this step.
    pub fn shallower(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }
}
