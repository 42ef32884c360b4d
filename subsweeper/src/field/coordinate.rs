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
/// The coordinates of a [`Cell`][crate::field::Cell] in the field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell, the column of the field row.
    pub x: usize,
    /// Vertical position of the cell, the index of the field row.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Signed offset `(dx, dy)` from `origin` to this coordinate.
    pub fn offset_from(&self, origin: &Coordinate) -> (isize, isize) {
        (
            self.x as isize - origin.x as isize,
            self.y as isize - origin.y as isize,
        )
    }

    /// This coordinate moved by `(dx, dy)`, or `None` if either axis would go negative.
    pub fn checked_offset(&self, (dx, dy): (isize, isize)) -> Option<Self> {
        Some(Self::new(shift(self.x, dx)?, shift(self.y, dy)?))
    }
}

fn shift(value: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta as usize)
    }
}

/// Minimal axis-aligned rectangle covering a set of coordinates. Both corners are
/// inclusive.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Bounds {
    /// Corner with the smallest `x` and `y`.
    pub min: Coordinate,
    /// Corner with the largest `x` and `y`.
    pub max: Coordinate,
}

impl Bounds {
    /// Bounds covering exactly one coordinate.
    pub fn point(coord: Coordinate) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// Grow these bounds so they also cover `coord`.
    pub fn include(&mut self, coord: Coordinate) {
        self.min.x = self.min.x.min(coord.x);
        self.min.y = self.min.y.min(coord.y);
        self.max.x = self.max.x.max(coord.x);
        self.max.y = self.max.y.max(coord.y);
    }

    /// Bounds covering `origin` and every coordinate in `coords`.
    pub fn covering<I>(origin: Coordinate, coords: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut bounds = Self::point(origin);
        coords.into_iter().for_each(|coord| bounds.include(coord));
        bounds
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        self.max.x - self.min.x + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        self.max.y - self.min.y + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_only_the_origin_is_a_point() {
        let origin = Coordinate::new(2, 3);
        assert_eq!(Bounds::covering(origin, None), Bounds::point(origin));
    }

    #[test]
    fn covering_spans_extremes() {
        let bounds = Bounds::covering(
            Coordinate::new(3, 1),
            vec![
                Coordinate::new(0, 2),
                Coordinate::new(2, 4),
                Coordinate::new(4, 0),
            ],
        );
        assert_eq!(bounds.min, Coordinate::new(0, 0));
        assert_eq!(bounds.max, Coordinate::new(4, 4));
        assert_eq!(bounds.width(), 5);
        assert_eq!(bounds.height(), 5);
    }

    #[test]
    fn offsets_are_signed() {
        let ship = Coordinate::new(3, 1);
        assert_eq!(Coordinate::new(0, 2).offset_from(&ship), (-3, 1));
        assert_eq!(Coordinate::new(4, 0).offset_from(&ship), (1, -1));
    }

    #[test]
    fn checked_offset_stops_below_zero() {
        let origin = Coordinate::new(1, 0);
        assert_eq!(origin.checked_offset((-1, 2)), Some(Coordinate::new(0, 2)));
        assert_eq!(origin.checked_offset((0, -1)), None);
        assert_eq!(origin.checked_offset((-2, 0)), None);
    }
}
