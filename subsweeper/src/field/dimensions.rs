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
//! Rectangular dimensions of the field and the four directions linking its cells.

use crate::field::Coordinate;

/// One of the four directions connecting a cell to its neighbors.
///
/// North points toward smaller `y` (the row above in the field text), south toward
/// larger `y`, east toward larger `x` and west toward smaller `x`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order neighbors are linked.
    pub const ALL: &'static [Direction] = &[
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit vector `(dx, dy)` of this direction.
    pub fn unit(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Width and height of a field. Never resized after construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Width of the field. This corresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the field. This corresponds to the `y` [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()` or if `width` or
    /// `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width.checked_mul(height).map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// The center cell, `(width / 2, height / 2)` rounded down.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.width / 2, self.height / 2)
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.y * self.width + coord.x)
    }

    /// Get the neighbor of `coord` one step in `dir`, or `None` if that step leaves the
    /// field.
    pub fn step(&self, coord: Coordinate, dir: Direction) -> Option<Coordinate> {
        self.check_bounds(&coord)?;
        let next = coord.checked_offset(dir.unit())?;
        self.check_bounds(&next)?;
        Some(next)
    }

    /// Check if the given [`Coordinate`] is in bounds. If so, return it, otherwise
    /// return `None`.
    #[inline]
    fn check_bounds<'a>(&self, coord: &'a Coordinate) -> Option<&'a Coordinate> {
        if coord.x < self.width && coord.y < self.height {
            Some(coord)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_is_rejected() {
        assert_eq!(Dimensions::try_new(0, 3), None);
        assert_eq!(Dimensions::try_new(3, 0), None);
        assert_eq!(Dimensions::try_new(usize::max_value(), 2), None);
    }

    #[test]
    fn linearize_is_row_major() {
        let dim = Dimensions::try_new(4, 3).unwrap();
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 0)), Some(0));
        assert_eq!(dim.try_linearize(&Coordinate::new(3, 0)), Some(3));
        assert_eq!(dim.try_linearize(&Coordinate::new(1, 2)), Some(9));
        assert_eq!(dim.try_linearize(&Coordinate::new(4, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 3)), None);
    }

    #[test]
    fn steps_stop_at_edges() {
        let dim = Dimensions::try_new(3, 3).unwrap();
        let corner = Coordinate::new(0, 0);
        assert_eq!(dim.step(corner, Direction::North), None);
        assert_eq!(dim.step(corner, Direction::West), None);
        assert_eq!(dim.step(corner, Direction::South), Some(Coordinate::new(0, 1)));
        assert_eq!(dim.step(corner, Direction::East), Some(Coordinate::new(1, 0)));

        let far = Coordinate::new(2, 2);
        assert_eq!(dim.step(far, Direction::South), None);
        assert_eq!(dim.step(far, Direction::East), None);

        let outside = Coordinate::new(3, 1);
        assert_eq!(dim.step(outside, Direction::West), None);
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(Dimensions::try_new(5, 4).unwrap().center(), Coordinate::new(2, 2));
        assert_eq!(Dimensions::try_new(1, 1).unwrap().center(), Coordinate::new(0, 0));
    }

    #[test]
    fn unit_vectors_agree_with_steps() {
        let dim = Dimensions::try_new(3, 3).unwrap();
        let center = dim.center();
        for &dir in Direction::ALL {
            let (dx, dy) = dir.unit();
            let expected = Coordinate::new(
                (center.x as isize + dx) as usize,
                (center.y as isize + dy) as usize,
            );
            assert_eq!(dim.step(center, dir), Some(expected));
            assert_eq!(dim.step(expected, dir.opposite()), Some(center));
        }
    }
}
