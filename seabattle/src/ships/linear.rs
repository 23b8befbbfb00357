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
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Coordinate, Dimensions};

/// Axis a ship is laid out along.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// The ship extends to the right of its anchor, along a row.
    Horizontal,
    /// The ship extends down from its anchor, along a column.
    Vertical,
}

impl Orientation {
    /// Both orientations, in the order the deterministic placement scan tries them.
    pub const ALL: &'static [Orientation] = &[Orientation::Horizontal, Orientation::Vertical];

    /// Step `offset` cells from `anchor` along this axis. Returns `None` if the result
    /// would leave the board.
    fn step(self, anchor: Coordinate, offset: usize, dim: &Dimensions) -> Option<usize> {
        let coord = match self {
            Orientation::Horizontal => Coordinate::new(anchor.row, anchor.col.checked_add(offset)?),
            Orientation::Vertical => Coordinate::new(anchor.row.checked_add(offset)?, anchor.col),
        };
        dim.try_linearize(coord)
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Project the line onto the board starting at `anchor` and running along
    /// `orientation`. Returns the linear cell indexes covered, in order, or `None` if any
    /// of them falls off the board. Does not account for whether cells are occupied.
    ///
    /// Both axes are bounded the same way: an anchor within `len - 1` cells of the far
    /// edge is rejected.
    pub fn project(
        &self,
        anchor: Coordinate,
        orientation: Orientation,
        dim: &Dimensions,
    ) -> Option<Vec<usize>> {
        (0..self.len())
            .map(|offset| orientation.step(anchor, offset, dim))
            .collect()
    }

    /// Return true if the given cells form a valid placement of this line: the right
    /// number of cells, all on the board, consecutive along a single row or column.
    pub fn is_valid_placement(&self, cells: &[usize], dim: &Dimensions) -> bool {
        let start = match cells.first().and_then(|&cell| dim.un_linearize(cell)) {
            Some(start) if cells.len() == self.len() => start,
            _ => return false,
        };
        Orientation::ALL.iter().any(|&orientation| {
            self.project(start, orientation, dim)
                .map_or(false, |proj| proj == cells)
        })
    }
}
