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
//! Per-session hit and guess bookkeeping.
use std::collections::BTreeSet;

use crate::ships::Ship;

/// Aggregate state of the hunt for a fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The fleet is still afloat and guesses remain.
    InProgress,
    /// Every ship in the fleet was sunk.
    Won,
    /// The guess budget ran out before the fleet was sunk.
    Lost,
}

/// A single ship's placement and the damage it has taken.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShipState {
    /// ID of the ship.
    ship: Ship,
    /// Cells the ship occupies. Fixed once placed.
    locations: BTreeSet<usize>,
    /// Cells of the ship that have been hit. Only ever grows.
    hits: BTreeSet<usize>,
}

impl ShipState {
    /// Construct the state for a freshly placed ship occupying `locations`.
    pub fn new(ship: Ship, locations: impl IntoIterator<Item = usize>) -> Self {
        Self {
            ship,
            locations: locations.into_iter().collect(),
            hits: BTreeSet::new(),
        }
    }

    /// Get the ID of the ship.
    pub fn ship(&self) -> Ship {
        self.ship
    }

    /// Get the cells this ship occupies.
    pub fn locations(&self) -> &BTreeSet<usize> {
        &self.locations
    }

    /// Get the cells of this ship that have been hit.
    pub fn hits(&self) -> &BTreeSet<usize> {
        &self.hits
    }

    /// Returns true if this ship occupies `cell`.
    pub fn occupies(&self, cell: usize) -> bool {
        self.locations.contains(&cell)
    }

    /// Returns true if `cell` has already been hit on this ship.
    pub fn is_hit(&self, cell: usize) -> bool {
        self.hits.contains(&cell)
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.hits.len() == self.locations.len()
    }

    /// Record a hit on `cell`. Returns false, leaving the ship untouched, if the cell is
    /// not part of the ship or was already hit.
    pub(crate) fn record_hit(&mut self, cell: usize) -> bool {
        self.occupies(cell) && self.hits.insert(cell)
    }
}

/// The ships belonging to one session, plus the guess budget they are hunted under.
#[derive(Debug, Clone)]
pub struct Fleet {
    /// The ships, in placement order.
    ships: Vec<ShipState>,
    /// Number of guesses charged against the budget so far.
    guesses: u32,
    /// Number of guesses allowed before the game is lost.
    budget: u32,
    /// Terminal once it leaves `InProgress`.
    outcome: Outcome,
}

impl Fleet {
    /// Construct a fleet from already-placed ships.
    pub fn new(ships: Vec<ShipState>, budget: u32) -> Self {
        Self {
            ships,
            guesses: 0,
            budget,
            outcome: Outcome::InProgress,
        }
    }

    /// Get an iterator over the ships in this fleet.
    pub fn iter(&self) -> impl Iterator<Item = &ShipState> {
        self.ships.iter()
    }

    /// Get the ship with the specified ID if it is part of this fleet.
    pub fn get(&self, ship: Ship) -> Option<&ShipState> {
        self.ships.iter().find(|state| state.ship == ship)
    }

    pub(crate) fn get_mut(&mut self, ship: Ship) -> Option<&mut ShipState> {
        self.ships.iter_mut().find(|state| state.ship == ship)
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if the fleet has no ships.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Returns true if every ship in the fleet has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(ShipState::sunk)
    }

    /// Number of guesses charged against the budget so far.
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Number of guesses allowed in total.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Number of guesses left before the budget is exhausted.
    pub fn remaining_guesses(&self) -> u32 {
        self.budget.saturating_sub(self.guesses)
    }

    /// Returns true once the guess counter has reached the budget.
    pub fn budget_exhausted(&self) -> bool {
        self.guesses >= self.budget
    }

    /// Current aggregate outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Charge one guess against the budget.
    pub(crate) fn charge_guess(&mut self) {
        self.guesses = self.guesses.saturating_add(1);
    }

    /// Settle the outcome. Has no effect once the outcome is no longer `InProgress`.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        if self.outcome == Outcome::InProgress {
            self.outcome = outcome;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_sinks_when_every_location_is_hit() {
        let mut ship = ShipState::new(Ship::Destroyer, vec![10, 11]);
        assert!(!ship.sunk());
        assert!(ship.record_hit(10));
        assert!(!ship.sunk());
        assert!(!ship.record_hit(10));
        assert!(!ship.record_hit(12));
        assert!(ship.record_hit(11));
        assert!(ship.sunk());
        assert_eq!(ship.hits().iter().copied().collect::<Vec<_>>(), vec![10, 11]);
    }

    #[test]
    fn outcome_is_terminal() {
        let mut fleet = Fleet::new(vec![ShipState::new(Ship::Destroyer, vec![0, 1])], 40);
        assert_eq!(fleet.outcome(), Outcome::InProgress);
        fleet.finish(Outcome::Lost);
        fleet.finish(Outcome::Won);
        assert_eq!(fleet.outcome(), Outcome::Lost);
    }

    #[test]
    fn budget_accounting() {
        let mut fleet = Fleet::new(Vec::new(), 2);
        assert!(fleet.is_empty());
        assert_eq!(fleet.remaining_guesses(), 2);
        fleet.charge_guess();
        assert!(!fleet.budget_exhausted());
        fleet.charge_guess();
        assert!(fleet.budget_exhausted());
        assert_eq!(fleet.remaining_guesses(), 0);
        assert_eq!(fleet.guesses(), 2);
    }
}
