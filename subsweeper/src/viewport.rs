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
//! Rendering of a window onto the field around the ship.
//!
//! The window is the smallest rectangle covering the ship and every registered mine. It
//! is copied into a blank canvas sized so that the farthest mine on each axis would still
//! fit if mirrored to the other side of the ship. Which corner the window is pinned to
//! depends on the side of the ship the farthest mines lie on, so the spare margin lands
//! where nothing is happening.

use std::fmt;

use enumflags2::BitFlags;

use crate::field::{Bounds, Coordinate, Field, EMPTY_SYMBOL, SHIP_SYMBOL};

/// Canvas edges a window can be pinned to. An empty set pins to the top-left corner.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Anchor {
    /// Pin the window to the right edge.
    Right = 0b01,
    /// Pin the window to the bottom edge.
    Bottom = 0b10,
}

/// Side of the ship a mine lies on along one axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    fn of(delta: isize) -> Self {
        if delta < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    fn symbol(self) -> char {
        match self {
            Sign::Negative => '-',
            Sign::Positive => '+',
        }
    }
}

/// Sign of the farthest mine offset on each axis. An axis with no offset has no sign.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Shift {
    pub x: Option<Sign>,
    pub y: Option<Sign>,
}

impl Shift {
    /// Edges the window is pinned to for this shift.
    ///
    /// A positive axis pins toward its far edge. When only one axis has a sign and it is
    /// positive, the window is pinned to the bottom-right corner.
    pub fn anchor(&self) -> BitFlags<Anchor> {
        let mut anchor = BitFlags::empty();
        match (self.x, self.y) {
            (Some(Sign::Positive), None) | (None, Some(Sign::Positive)) => {
                anchor.insert(Anchor::Right);
                anchor.insert(Anchor::Bottom);
            }
            (x, y) => {
                if x == Some(Sign::Positive) {
                    anchor.insert(Anchor::Right);
                }
                if y == Some(Sign::Positive) {
                    anchor.insert(Anchor::Bottom);
                }
            }
        }
        anchor
    }
}

impl fmt::Display for Shift {
    /// Formats as the shift code, e.g. `+-`, `-`, or nothing at all.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code: String = self.x.iter().chain(self.y.iter()).map(|s| s.symbol()).collect();
        f.pad(&code)
    }
}

/// Farthest mine distance from the ship on each axis, with its direction.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Reach {
    /// Largest `|dx|` between the ship and any mine.
    pub x: usize,
    /// Largest `|dy|` between the ship and any mine.
    pub y: usize,
    /// Sides those farthest mines lie on. Ties keep the first mine found.
    pub shift: Shift,
}

impl Reach {
    /// Canvas size `(width, height)` that fits this reach on both sides of the ship.
    pub fn canvas_size(&self) -> (usize, usize) {
        (self.x * 2 + 1, self.y * 2 + 1)
    }
}

/// A rendered grid of symbols.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Frame {
    rows: Vec<Vec<char>>,
}

impl Frame {
    /// Rows of this frame, top to bottom.
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Each row joined into one line.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.iter().collect())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// View of a field from the ship's position.
#[derive(Debug, Copy, Clone)]
pub struct Viewport<'a> {
    field: &'a Field,
    ship: Coordinate,
}

impl<'a> Viewport<'a> {
    /// View `field` from a ship at `ship`.
    pub fn new(field: &'a Field, ship: Coordinate) -> Self {
        Self { field, ship }
    }

    /// The region of the field shown.
    pub fn bounds(&self) -> Bounds {
        self.field.bounding_box(self.ship)
    }

    /// Farthest mine offsets from the ship.
    pub fn reach(&self) -> Reach {
        let mut reach = Reach::default();
        for mine in self.field.active_mines() {
            let (dx, dy) = mine.coord().offset_from(&self.ship);
            if dx.unsigned_abs() > reach.x {
                reach.x = dx.unsigned_abs();
                reach.shift.x = Some(Sign::of(dx));
            }
            if dy.unsigned_abs() > reach.y {
                reach.y = dy.unsigned_abs();
                reach.shift.y = Some(Sign::of(dy));
            }
        }
        reach
    }

    /// Render the window into its canvas. With `marker` set, the ship's cell shows
    /// [`SHIP_SYMBOL`] instead of its contents.
    pub fn render(&self, marker: bool) -> Frame {
        let bounds = self.bounds();
        let reach = self.reach();
        let (width, height) = reach.canvas_size();
        let anchor = reach.shift.anchor();

        let x_start = if anchor.contains(Anchor::Right) {
            width - bounds.width()
        } else {
            0
        };
        let y_start = if anchor.contains(Anchor::Bottom) {
            height - bounds.height()
        } else {
            0
        };

        let mut rows = vec![vec![EMPTY_SYMBOL; width]; height];
        let window = self
            .field
            .rows()
            .skip(bounds.min.y)
            .take(bounds.height())
            .map(|row| &row[bounds.min.x..=bounds.max.x]);
        for (canvas_row, window_row) in rows[y_start..].iter_mut().zip(window) {
            for (slot, cell) in canvas_row[x_start..].iter_mut().zip(window_row) {
                *slot = cell.symbol();
            }
        }
        if marker {
            rows[y_start + self.ship.y - bounds.min.y][x_start + self.ship.x - bounds.min.x] =
                SHIP_SYMBOL;
        }
        Frame { rows }
    }
}
