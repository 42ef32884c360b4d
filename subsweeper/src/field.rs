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
//! Types that make up the mine field.
//!
//! The [`Field`] owns every [`Cell`] in a flat arena indexed by [`Coordinate`]. Cells do
//! not point at each other: neighbors are found by stepping a coordinate in a
//! [`Direction`] through the field's [`Dimensions`], which yields `None` off the edges.
//! The field also keeps the registry of mines that have not been destroyed, so per-turn
//! work only touches those cells.

use std::{borrow::Borrow, ops::Index, str::FromStr};

use tracing::debug;

pub use self::{
    cell::{Cell, Contents},
    coordinate::{Bounds, Coordinate},
    dimensions::{Dimensions, Direction},
    errors::FieldError,
    rank::{Rank, EMPTY_SYMBOL, PASSED_SYMBOL, SHIP_SYMBOL},
};

mod cell;
mod coordinate;
mod dimensions;
mod errors;
mod rank;

/// The mine field: a fixed rectangle of cells plus the registry of active mines.
#[derive(Debug, Clone)]
pub struct Field {
    /// Dimensions of this field.
    dim: Dimensions,

    /// Cells in row-major order.
    cells: Box<[Cell]>,

    /// Coordinates of every mine that has not been destroyed, in field order. Passed
    /// mines stay here.
    mines: Vec<Coordinate>,
}

impl Field {
    /// Build a field from its rows. Every row must hold the same number of symbols, each
    /// either [`EMPTY_SYMBOL`] or a mine letter.
    pub fn new<I, S>(rows: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut mines = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            let expected = *width.get_or_insert(found);
            if expected == 0 {
                return Err(FieldError::Empty);
            }
            if found != expected {
                return Err(FieldError::Ragged { row: y, expected, found });
            }
            for (x, symbol) in row.chars().enumerate() {
                let coord = Coordinate::new(x, y);
                let cell = Cell::from_symbol(coord, symbol)
                    .ok_or(FieldError::InvalidSymbol { x, y, symbol })?;
                if cell.is_mine() {
                    mines.push(coord);
                }
                cells.push(cell);
            }
            height += 1;
        }
        let width = width.ok_or(FieldError::Empty)?;
        let dim =
            Dimensions::try_new(width, height).ok_or(FieldError::TooLarge { width, height })?;
        debug!(width, height, mines = mines.len(), "field built");
        Ok(Self {
            dim,
            cells: cells.into_boxed_slice(),
            mines,
        })
    }

    /// Get the [`Dimensions`] of this [`Field`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Get a reference to the cell at the given [`Coordinate`], or `None` if it is out of
    /// bounds.
    pub fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Coordinate of the neighbor of `coord` in direction `dir`, if there is one.
    pub fn neighbor(&self, coord: Coordinate, dir: Direction) -> Option<Coordinate> {
        self.dim.step(coord, dir)
    }

    /// Follow a chain of neighbor hops from `start`. An empty chain stays on `start`; a
    /// chain that walks off the field yields `None`.
    pub fn follow(&self, start: Coordinate, hops: &[Direction]) -> Option<Coordinate> {
        hops.iter().try_fold(start, |coord, &dir| self.neighbor(coord, dir))
    }

    /// Iterate the rows of the field, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dim.width())
    }

    /// Iterate every registered mine, in field order.
    pub fn active_mines(&self) -> impl Iterator<Item = &Cell> {
        self.mines.iter().map(move |coord| &self[coord])
    }

    /// Number of registered mines.
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// True if any registered mine was passed.
    pub fn any_passed(&self) -> bool {
        self.active_mines().any(Cell::passed)
    }

    /// Drop the mine at `coord` from the registry. Does nothing if no mine is registered
    /// there.
    pub fn remove_mine(&mut self, coord: Coordinate) {
        if let Some(idx) = self.mines.iter().position(|&m| m == coord) {
            self.mines.remove(idx);
        }
    }

    /// Destroy the mine at `coord`, removing it from the registry on success. Returns true
    /// if a live mine was destroyed.
    pub fn destroy(&mut self, coord: Coordinate) -> bool {
        let destroyed = self.get_mut(coord).map_or(false, Cell::destroy);
        if destroyed {
            self.remove_mine(coord);
            debug!(x = coord.x, y = coord.y, "mine destroyed");
        }
        destroyed
    }

    /// Advance every registered mine one turn toward the surface.
    pub fn decay_mines(&mut self) {
        let Self { dim, cells, mines } = self;
        for coord in mines.iter() {
            // Registered coordinates always come from this field's own cells.
            if let Some(cell) = dim.try_linearize(coord).and_then(|i| cells.get_mut(i)) {
                cell.decay();
            }
        }
    }

    /// Smallest rectangle covering `ship` and every registered mine.
    pub fn bounding_box(&self, ship: Coordinate) -> Bounds {
        Bounds::covering(ship, self.mines.iter().copied())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    /// Parse a field from text. Lines are trimmed and blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.lines().map(str::trim).filter(|line| !line.is_empty()))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Field {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Field {
        text.parse().unwrap()
    }

    #[test]
    fn builds_registry_in_field_order() {
        let field = parse("a.b\n...\nc.d");
        assert_eq!(field.dimensions().width(), 3);
        assert_eq!(field.dimensions().height(), 3);
        let symbols: String = field.active_mines().map(Cell::symbol).collect();
        assert_eq!(symbols, "abcd");
        assert_eq!(field.mine_count(), 4);
    }

    #[test]
    fn rejects_bad_definitions() {
        assert_eq!(Field::new(Vec::<&str>::new()).unwrap_err(), FieldError::Empty);
        assert_eq!("\n  \n".parse::<Field>().unwrap_err(), FieldError::Empty);
        assert_eq!(Field::new(vec![""]).unwrap_err(), FieldError::Empty);
        assert_eq!(
            Field::new(vec!["...", ".."]).unwrap_err(),
            FieldError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            Field::new(vec!["..", ".*"]).unwrap_err(),
            FieldError::InvalidSymbol {
                x: 1,
                y: 1,
                symbol: '*'
            }
        );
    }

    #[test]
    fn interior_cells_have_four_neighbors_and_edges_fewer() {
        let field = parse("...\n...\n...");
        let count = |x, y| {
            Direction::ALL
                .iter()
                .filter_map(|&dir| field.neighbor(Coordinate::new(x, y), dir))
                .count()
        };
        assert_eq!(count(1, 1), 4);
        assert_eq!(count(1, 0), 3);
        assert_eq!(count(0, 0), 2);
        assert_eq!(count(2, 2), 2);
    }

    #[test]
    fn neighbor_links_are_symmetric() {
        let field = parse("....\n....\n....");
        for row in field.rows() {
            for cell in row {
                for &dir in Direction::ALL {
                    if let Some(next) = field.neighbor(cell.coord(), dir) {
                        assert_eq!(field.neighbor(next, dir.opposite()), Some(cell.coord()));
                    }
                }
            }
        }
    }

    #[test]
    fn follow_degrades_off_the_edge() {
        let field = parse("...\n...");
        let origin = Coordinate::new(0, 0);
        assert_eq!(field.follow(origin, &[]), Some(origin));
        assert_eq!(
            field.follow(origin, &[Direction::South, Direction::East]),
            Some(Coordinate::new(1, 1))
        );
        assert_eq!(field.follow(origin, &[Direction::North, Direction::East]), None);
        assert_eq!(field.follow(origin, &[Direction::South, Direction::South]), None);
    }

    #[test]
    fn destroy_updates_registry_once() {
        let mut field = parse("a.b");
        assert!(field.destroy(Coordinate::new(0, 0)));
        assert!(!field.destroy(Coordinate::new(0, 0)));
        assert!(!field.destroy(Coordinate::new(1, 0)));
        assert!(!field.destroy(Coordinate::new(7, 0)));
        assert_eq!(field.mine_count(), 1);
        assert_eq!(field[Coordinate::new(0, 0)].symbol(), EMPTY_SYMBOL);
    }

    #[test]
    fn remove_missing_mine_is_a_no_op() {
        let mut field = parse("a.");
        field.remove_mine(Coordinate::new(1, 0));
        assert_eq!(field.mine_count(), 1);
    }

    #[test]
    fn decay_touches_only_registered_mines() {
        let mut field = parse("ca\n.b");
        field.destroy(Coordinate::new(1, 1));
        field.decay_mines();
        assert_eq!(field[Coordinate::new(0, 0)].symbol(), 'b');
        assert!(field[Coordinate::new(1, 0)].passed());
        assert_eq!(field[Coordinate::new(1, 1)].symbol(), EMPTY_SYMBOL);
        assert!(field.any_passed());
        // Passed mines stay registered.
        assert_eq!(field.mine_count(), 2);
    }

    #[test]
    fn bounding_box_covers_ship_and_mines() {
        let field = parse("....c\n.....\na....\n.....\n..b..");
        let bounds = field.bounding_box(Coordinate::new(3, 1));
        assert_eq!(bounds.min, Coordinate::new(0, 0));
        assert_eq!(bounds.max, Coordinate::new(4, 4));

        let bare = parse("...\n...");
        let ship = Coordinate::new(1, 1);
        assert_eq!(bare.bounding_box(ship), Bounds::point(ship));
    }
}
