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
//! Types that make up the game board.

use std::fmt;

use crate::{render, ships::Ship};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{BoardError, PlaceError},
    setup::{FleetPlacer, MAX_PLACEMENT_ATTEMPTS},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// The hidden side of the ocean: which cells are occupied by which ship.
///
/// Hits and misses are not recorded here. Once the fleet has been placed the board is
/// only ever read; shot tracking lives on the [`Fleet`][crate::game::Fleet].
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid<Ship>,
}

impl Board {
    /// Create an empty board of `size` by `size` cells.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let dim = Dimensions::try_new(size).ok_or(BoardError::InvalidSize(size))?;
        Ok(Self {
            grid: Grid::new(dim),
        })
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Length of each side of the board.
    pub fn size(&self) -> usize {
        self.grid.dim.size()
    }

    /// Total number of cells on the board.
    pub fn total_cells(&self) -> usize {
        self.grid.dim.total_size()
    }

    /// Mark `cell` as holding a segment of `ship`.
    pub fn place_segment(&mut self, cell: usize, ship: Ship) -> Result<(), BoardError> {
        let total = self.total_cells();
        match self.grid.get_mut(cell) {
            None => Err(BoardError::OutOfBounds { cell, total }),
            Some(Some(occupant)) => Err(BoardError::Occupied {
                cell,
                occupant: *occupant,
            }),
            Some(slot) => {
                *slot = Some(ship);
                Ok(())
            }
        }
    }

    /// Get the ship occupying `cell`, or `None` if the cell is open water.
    pub fn occupant_at(&self, cell: usize) -> Result<Option<Ship>, BoardError> {
        self.grid
            .get(cell)
            .copied()
            .ok_or(BoardError::OutOfBounds {
                cell,
                total: self.total_cells(),
            })
    }

    /// Returns true if `cell` is on the board and holds no ship.
    pub fn is_open(&self, cell: usize) -> bool {
        matches!(self.grid.get(cell), Some(None))
    }

    /// Returns true if no cell on the board is occupied.
    pub fn is_empty(&self) -> bool {
        self.grid.cells.iter().all(Option::is_none)
    }

    /// Get an iterator over the cells occupied by the given ship.
    pub fn cells_of(&self, ship: Ship) -> impl '_ + Iterator<Item = usize> {
        self.grid
            .cells
            .iter()
            .enumerate()
            .filter_map(move |(cell, occupant)| match occupant {
                Some(s) if *s == ship => Some(cell),
                _ => None,
            })
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the
    /// occupant of each cell in that row.
    pub fn iter_rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Option<Ship>>> {
        let grid = &self.grid;
        grid.dim
            .iter_rows()
            .map(move |row| row.map(move |cell| grid[cell]))
    }
}

impl fmt::Display for Board {
    /// Render the fully-revealed board, one ship abbreviation per occupied cell.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        enum RevealedCell {
            Empty,
            Ship(Ship),
        }
        impl fmt::Display for RevealedCell {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self {
                    RevealedCell::Empty => f.pad("~~"),
                    RevealedCell::Ship(ship) => f.pad(ship.abbrev()),
                }
            }
        }
        render::write_grid(
            f,
            self.size(),
            self.iter_rows().map(|row| {
                row.map(|cell| match cell {
                    Some(ship) => RevealedCell::Ship(ship),
                    None => RevealedCell::Empty,
                })
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(15).unwrap();
        assert_eq!(board.size(), 15);
        assert_eq!(board.total_cells(), 225);
        assert!(board.is_empty());
        assert!((0..225).all(|cell| board.occupant_at(cell) == Ok(None)));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Board::new(0).unwrap_err(), BoardError::InvalidSize(0));
    }

    #[test]
    fn place_and_look_up_segments() {
        let mut board = Board::new(15).unwrap();
        board.place_segment(10, Ship::Destroyer).unwrap();
        board.place_segment(11, Ship::Destroyer).unwrap();
        assert_eq!(board.occupant_at(10), Ok(Some(Ship::Destroyer)));
        assert_eq!(board.occupant_at(12), Ok(None));
        assert!(!board.is_open(10));
        assert!(board.is_open(12));
        assert_eq!(board.cells_of(Ship::Destroyer).collect::<Vec<_>>(), vec![10, 11]);
    }

    #[test]
    fn occupied_cells_cannot_be_reused() {
        let mut board = Board::new(15).unwrap();
        board.place_segment(7, Ship::Cruiser).unwrap();
        assert_eq!(
            board.place_segment(7, Ship::Carrier),
            Err(BoardError::Occupied {
                cell: 7,
                occupant: Ship::Cruiser
            })
        );
        assert_eq!(board.occupant_at(7), Ok(Some(Ship::Cruiser)));
    }

    #[test]
    fn out_of_bounds_cells() {
        let mut board = Board::new(15).unwrap();
        let err = BoardError::OutOfBounds {
            cell: 225,
            total: 225,
        };
        assert_eq!(board.place_segment(225, Ship::Carrier), Err(err));
        assert_eq!(board.occupant_at(225), Err(err));
        assert!(!board.is_open(225));
    }

    #[test]
    fn renders_with_headers() {
        let mut board = Board::new(2).unwrap();
        board.place_segment(1, Ship::Destroyer).unwrap();
        board.place_segment(3, Ship::Destroyer).unwrap();
        let rendered = board.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], " 0  ~~  dd ");
        assert_eq!(lines[2], " 1  ~~  dd ");
    }
}
