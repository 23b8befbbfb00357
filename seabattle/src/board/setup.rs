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
//! Implements the setup phase of the board: laying out a fleet, either at random or from
//! a fixed layout.
use std::{cmp::Reverse, collections::HashSet};

use log::debug;
use rand::Rng;

use crate::{
    board::{Board, Coordinate, PlaceError},
    game::{Fleet, ShipState},
    ships::{Line, Orientation, Ship},
};

/// Number of random anchors tried for a single ship before falling back to a
/// deterministic scan of the board.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Randomly places a fleet onto an empty [`Board`].
///
/// Each attempt draws a uniformly random anchor cell and a uniformly random orientation,
/// and keeps the placement only if every cell of the ship lands on open water inside the
/// board. Ships are placed largest first. After [`MAX_PLACEMENT_ATTEMPTS`] failed
/// attempts for one ship the board is scanned in row-major order and the first valid
/// placement is taken, so placement always terminates.
#[derive(Debug)]
pub struct FleetPlacer<R> {
    /// Source of randomness for anchors and orientations.
    rng: R,
    /// Random attempts allowed per ship.
    max_attempts: usize,
}

impl<R: Rng> FleetPlacer<R> {
    /// Construct a placer drawing from the given random number generator.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Override the number of random attempts per ship. Zero skips straight to the
    /// deterministic scan.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Place every ship in `ships` onto `board` and return the resulting [`Fleet`],
    /// hunted under a budget of `budget` guesses.
    ///
    /// The board is expected to be empty. On error the board may hold the ships placed
    /// before the failure and should be discarded.
    pub fn place(
        &mut self,
        board: &mut Board,
        ships: &[Ship],
        budget: u32,
    ) -> Result<Fleet, PlaceError> {
        check_unique(ships.iter().copied())?;
        let mut order = ships.to_vec();
        order.sort_by_key(|ship| Reverse(ship.len()));

        let mut placed = Vec::with_capacity(order.len());
        for ship in order {
            let cells = self.place_ship(board, ship)?;
            debug!("placed {} on cells {:?}", ship, cells);
            placed.push(ShipState::new(ship, cells));
        }
        Ok(Fleet::new(placed, budget))
    }

    /// Place a single ship, first by random generate-and-test, then by scanning.
    fn place_ship(&mut self, board: &mut Board, ship: Ship) -> Result<Vec<usize>, PlaceError> {
        let line = ship.shape();
        let size = board.size();
        for _ in 0..self.max_attempts {
            let anchor = Coordinate::new(self.rng.gen_range(0, size), self.rng.gen_range(0, size));
            let orientation = self.rng.gen();
            if let Some(cells) = fits(board, line, anchor, orientation) {
                commit(board, ship, &cells)?;
                return Ok(cells);
            }
        }

        debug!(
            "no random placement for {} after {} attempts, scanning",
            ship, self.max_attempts
        );
        let dim = *board.dimensions();
        for cell in 0..dim.total_size() {
            let anchor = match dim.un_linearize(cell) {
                Some(anchor) => anchor,
                None => break,
            };
            for &orientation in Orientation::ALL {
                if let Some(cells) = fits(board, line, anchor, orientation) {
                    commit(board, ship, &cells)?;
                    return Ok(cells);
                }
            }
        }
        Err(PlaceError::NoRoom(ship))
    }
}

/// Place ships on exactly the given cells. Each entry must list a straight run of the
/// ship's length. Used for scripted games and tests.
pub fn place_fixed(
    board: &mut Board,
    layout: &[(Ship, Vec<usize>)],
    budget: u32,
) -> Result<Fleet, PlaceError> {
    check_unique(layout.iter().map(|(ship, _)| *ship))?;
    let mut placed = Vec::with_capacity(layout.len());
    for (ship, cells) in layout {
        let ship = *ship;
        let line = ship.shape();
        if cells.len() != line.len() {
            return Err(PlaceError::WrongLength {
                ship,
                expected: line.len(),
                actual: cells.len(),
            });
        }
        if !line.is_valid_placement(cells, board.dimensions()) {
            return Err(PlaceError::NotStraight(ship));
        }
        commit(board, ship, cells)?;
        placed.push(ShipState::new(ship, cells.iter().copied()));
    }
    Ok(Fleet::new(placed, budget))
}

/// Project the line and keep the projection only if every cell is open water.
fn fits(
    board: &Board,
    line: Line,
    anchor: Coordinate,
    orientation: Orientation,
) -> Option<Vec<usize>> {
    line.project(anchor, orientation, board.dimensions())
        .filter(|cells| cells.iter().all(|&cell| board.is_open(cell)))
}

/// Mark every cell as belonging to `ship`.
fn commit(board: &mut Board, ship: Ship, cells: &[usize]) -> Result<(), PlaceError> {
    for &cell in cells {
        board.place_segment(cell, ship)?;
    }
    Ok(())
}

fn check_unique(ships: impl Iterator<Item = Ship>) -> Result<(), PlaceError> {
    let mut seen = HashSet::new();
    for ship in ships {
        if !seen.insert(ship) {
            return Err(PlaceError::DuplicateShip(ship));
        }
    }
    Ok(())
}
