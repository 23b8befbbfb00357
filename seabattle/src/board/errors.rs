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
//! Errors used by the [`Board`][crate::board::Board] and the
//! [`FleetPlacer`][crate::board::FleetPlacer].

use thiserror::Error;

use crate::ships::Ship;

/// Error returned by the [`Board`][crate::board::Board] primitives.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BoardError {
    /// The requested board size was zero or too large.
    #[error("invalid board size {0}")]
    InvalidSize(usize),
    /// The cell index was not on the board.
    #[error("cell {cell} is out of bounds for a board of {total} cells")]
    OutOfBounds { cell: usize, total: usize },
    /// The cell already holds a segment of another ship.
    #[error("cell {cell} is already occupied by the {occupant}")]
    Occupied { cell: usize, occupant: Ship },
}

/// Reason why the fleet could not be laid out on a board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlaceError {
    /// The same ship was requested twice.
    #[error("the {0} appears more than once in the fleet")]
    DuplicateShip(Ship),
    /// No straight, empty run long enough for the ship remains on the board.
    #[error("no room left on the board for the {0}")]
    NoRoom(Ship),
    /// A fixed layout's cells do not form a consecutive run along one row or column.
    #[error("the cells given for the {0} are not a straight run")]
    NotStraight(Ship),
    /// A fixed layout listed a number of cells that does not match the ship's length.
    #[error("the {ship} needs {expected} cells but {actual} were given")]
    WrongLength {
        ship: Ship,
        expected: usize,
        actual: usize,
    },
    /// A board primitive rejected one of the ship's cells.
    #[error(transparent)]
    Board(#[from] BoardError),
}
