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
//! Square board dimensions and conversion between [`Coordinate`]s and linear cell
//! indexes.
use crate::{board::Coordinate, config::MAX_BOARD_SIZE};

/// Dimensions of a square, non-wrapping board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Length of each side of the board.
    size: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the given side length.
    /// Returns `None` if `size` is 0 or larger than [`MAX_BOARD_SIZE`].
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            None
        } else {
            Some(Self { size })
        }
    }

    /// Length of each side of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the total number of cells.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the given linear cell index lies on the board.
    #[inline]
    pub fn contains(&self, cell: usize) -> bool {
        cell < self.total_size()
    }

    /// Convert a coordinate to a linear cell index.
    /// Returns `None` if the coordinate is off the board.
    pub fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if coord.row < self.size && coord.col < self.size {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Get back a coordinate from a linear cell index. Returns `None` if the index is off
    /// the board.
    pub fn un_linearize(&self, cell: usize) -> Option<Coordinate> {
        if self.contains(cell) {
            Some(Coordinate::new(cell / self.size, cell % self.size))
        } else {
            None
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the linear
    /// cell indexes of that row.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = usize>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| row * size + col))
    }
}

impl Default for Dimensions {
    /// The standard 15x15 board.
    fn default() -> Self {
        Self {
            size: crate::config::BOARD_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unusable_sizes() {
        assert_eq!(Dimensions::try_new(0), None);
        assert_eq!(Dimensions::try_new(MAX_BOARD_SIZE + 1), None);
        assert_eq!(Dimensions::try_new(46_340), None);
        assert!(Dimensions::try_new(MAX_BOARD_SIZE).is_some());
    }

    #[test]
    fn linear_index_is_row_major() {
        let dim = Dimensions::try_new(15).unwrap();
        assert_eq!(dim.try_linearize(Coordinate::new(0, 10)), Some(10));
        assert_eq!(dim.try_linearize(Coordinate::new(2, 3)), Some(33));
        assert_eq!(dim.try_linearize(Coordinate::new(15, 0)), None);
        assert_eq!(dim.try_linearize(Coordinate::new(0, 15)), None);
        assert_eq!(dim.un_linearize(224), Some(Coordinate::new(14, 14)));
        assert_eq!(dim.un_linearize(225), None);
    }
}
