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
use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use seabattle::{
    board::{Board, FleetPlacer, PlaceError},
    game::{Fleet, Game, GameStatus, MoveStatus},
    GameConfig, Ship,
};

/// Check every placement invariant of a freshly laid out fleet.
fn check_layout(board: &Board, fleet: &Fleet) -> Result<(), TestCaseError> {
    let size = board.size();
    let mut taken = BTreeSet::new();
    for ship in fleet.iter() {
        let cells: Vec<usize> = ship.locations().iter().copied().collect();
        prop_assert_eq!(cells.len(), ship.ship().len());
        for &cell in &cells {
            prop_assert!(cell < size * size, "cell {} off the board", cell);
            prop_assert!(taken.insert(cell), "cell {} used twice", cell);
            prop_assert_eq!(board.occupant_at(cell), Ok(Some(ship.ship())));
        }
        let rows: BTreeSet<_> = cells.iter().map(|cell| cell / size).collect();
        let cols: BTreeSet<_> = cells.iter().map(|cell| cell % size).collect();
        if rows.len() == 1 {
            prop_assert!(cells.windows(2).all(|w| w[1] == w[0] + 1));
        } else {
            prop_assert_eq!(cols.len(), 1);
            prop_assert!(cells.windows(2).all(|w| w[1] == w[0] + size));
        }
    }
    let occupied = (0..board.total_cells())
        .filter(|&cell| !board.is_open(cell))
        .count();
    prop_assert_eq!(occupied, taken.len());
    Ok(())
}

fn guess_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![-5i32..-1, 0i32..240]
}

proptest! {
    /// Property: the standard fleet is always laid out legally.
    #[test]
    fn placement_is_always_legal(seed in any::<u64>()) {
        let mut board = Board::new(15).unwrap();
        let fleet = FleetPlacer::new(StdRng::seed_from_u64(seed))
            .place(&mut board, Ship::ALL, 40)
            .unwrap();
        prop_assert_eq!(fleet.len(), 4);
        check_layout(&board, &fleet)?;
    }

    /// Property: cramped boards either get a legal layout or a clean failure.
    #[test]
    fn cramped_boards_never_produce_bad_layouts(
        seed in any::<u64>(),
        size in 5usize..8,
        attempts in 0usize..20,
    ) {
        let mut board = Board::new(size).unwrap();
        let result = FleetPlacer::new(StdRng::seed_from_u64(seed))
            .with_max_attempts(attempts)
            .place(&mut board, Ship::ALL, 40);
        match result {
            Ok(fleet) => check_layout(&board, &fleet)?,
            Err(PlaceError::NoRoom(_)) => {}
            Err(err) => prop_assert!(false, "unexpected error {}", err),
        }
    }

    /// Property: hits only grow, sunk ships stay sunk, the guess counter never goes
    /// down, and the game is lost exactly when the budget runs out first.
    #[test]
    fn resolution_is_monotonic(
        seed in any::<u64>(),
        guesses in prop::collection::vec(guess_strategy(), 1..150),
    ) {
        let mut game = Game::setup(&GameConfig::default(), StdRng::seed_from_u64(seed)).unwrap();
        let mut hits: Vec<BTreeSet<usize>> = game.fleet().iter().map(|s| s.hits().clone()).collect();
        let mut sunk: Vec<bool> = game.fleet().iter().map(|s| s.sunk()).collect();
        let mut counted = 0;

        for guess in guesses {
            if game.is_over() {
                prop_assert!(game.resolve(guess).is_err());
                break;
            }
            let response = game.resolve(guess).unwrap();
            let fleet = game.fleet();

            prop_assert!(fleet.guesses() >= counted);
            prop_assert!(fleet.guesses() <= fleet.budget());
            counted = fleet.guesses();

            for (i, ship) in fleet.iter().enumerate() {
                prop_assert!(hits[i].is_subset(ship.hits()));
                prop_assert!(ship.hits().is_subset(ship.locations()));
                prop_assert_eq!(ship.sunk(), ship.hits().len() == ship.locations().len());
                prop_assert!(!sunk[i] || ship.sunk());
                for &cell in ship.hits() {
                    prop_assert_eq!(game.board().occupant_at(cell), Ok(Some(ship.ship())));
                }
                hits[i] = ship.hits().clone();
                sunk[i] = ship.sunk();
            }

            match response.game_status {
                GameStatus::Lost => prop_assert!(fleet.budget_exhausted() && !fleet.all_sunk()),
                GameStatus::Won => prop_assert!(fleet.all_sunk()),
                GameStatus::Continue => prop_assert!(!fleet.budget_exhausted()),
                GameStatus::IllegalMove => {
                    prop_assert_eq!(response.move_status, MoveStatus::IllegalMove)
                }
            }
        }
    }
}
