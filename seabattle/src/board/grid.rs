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
//! Defines the flat cell storage behind the [`Board`][crate::board::Board].

use std::ops::Index;

use crate::board::Dimensions;

/// Flat storage of the board's cells, indexed by linear cell index.
#[derive(Debug, Clone)]
pub(super) struct Grid<I> {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// The ID of the ship occupying each cell, if any.
    pub(super) cells: Box<[Option<I>]>,
}

impl<I> Grid<I> {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| None).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given linear index.
    pub(super) fn get(&self, cell: usize) -> Option<&Option<I>> {
        self.cells.get(cell)
    }

    /// Get a mutable reference to the cell at the given linear index.
    pub(super) fn get_mut(&mut self, cell: usize) -> Option<&mut Option<I>> {
        self.cells.get_mut(cell)
    }
}

impl<I> Index<usize> for Grid<I> {
    type Output = Option<I>;

    fn index(&self, cell: usize) -> &Self::Output {
        self.get(cell).expect("cell out of bounds")
    }
}
