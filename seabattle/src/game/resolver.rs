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
//! Resolution of a single guess against a hidden fleet.
use std::convert::TryFrom;

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{self, Board, BoardError, FleetPlacer, PlaceError},
    config::GameConfig,
    game::{Fleet, Outcome},
    ships::Ship,
};

/// What a single guess did.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveStatus {
    /// The guess landed in open water.
    Miss,
    /// The guess hit a ship that is still afloat.
    Hit,
    /// The guess hit the last intact cell of a ship.
    Sink,
    /// The guess was off the board or repeated a hit.
    IllegalMove,
}

impl MoveStatus {
    /// The status code sent on the wire.
    pub fn code(self) -> i32 {
        match self {
            MoveStatus::Miss => 10,
            MoveStatus::Hit => 20,
            MoveStatus::Sink => 30,
            MoveStatus::IllegalMove => 40,
        }
    }

    /// Parse a status code from the wire.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(MoveStatus::Miss),
            20 => Some(MoveStatus::Hit),
            30 => Some(MoveStatus::Sink),
            40 => Some(MoveStatus::IllegalMove),
            _ => None,
        }
    }
}

/// Where the game stands after a guess.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameStatus {
    /// Keep guessing.
    Continue,
    /// The client sank the whole fleet.
    Won,
    /// The client ran out of guesses.
    Lost,
    /// The client made an illegal move and the game is forfeit.
    IllegalMove,
}

impl GameStatus {
    /// The status code sent on the wire.
    pub fn code(self) -> i32 {
        match self {
            GameStatus::Continue => 10,
            GameStatus::Won => 20,
            GameStatus::Lost => 30,
            GameStatus::IllegalMove => 40,
        }
    }

    /// Parse a status code from the wire.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(GameStatus::Continue),
            20 => Some(GameStatus::Won),
            30 => Some(GameStatus::Lost),
            40 => Some(GameStatus::IllegalMove),
            _ => None,
        }
    }

    /// Returns true if no further guesses are accepted.
    pub fn is_over(self) -> bool {
        self != GameStatus::Continue
    }
}

/// The pair of statuses reported back for each guess.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Response {
    /// What the guess did.
    pub move_status: MoveStatus,
    /// Where the game stands afterwards.
    pub game_status: GameStatus,
}

impl Response {
    /// Response to any illegal move.
    pub const ILLEGAL: Response = Response {
        move_status: MoveStatus::IllegalMove,
        game_status: GameStatus::IllegalMove,
    };

    /// Pair a move status with a game status.
    pub fn new(move_status: MoveStatus, game_status: GameStatus) -> Self {
        Self {
            move_status,
            game_status,
        }
    }
}

/// Reason a guess could not be resolved at all.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ResolveError {
    /// The game had already ended.
    #[error("the game is already over ({0:?})")]
    AlreadyOver(GameStatus),
    /// The board places a ship on a cell the fleet does not know about.
    #[error("board and fleet disagree about the {ship} at cell {cell}")]
    Inconsistent { cell: usize, ship: Ship },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A hidden board and the fleet hunted on it.
#[derive(Debug, Clone)]
pub struct Game {
    /// Where the ships are. Never modified during play.
    board: Board,
    /// Damage and guess accounting.
    fleet: Fleet,
    /// Set once the client makes an illegal move.
    forfeited: bool,
}

impl Game {
    /// Start a game over an already-placed board and fleet. The two must agree on where
    /// every ship is.
    pub fn new(board: Board, fleet: Fleet) -> Self {
        Self {
            board,
            fleet,
            forfeited: false,
        }
    }

    /// Build a fresh board and randomly place the configured fleet on it.
    pub fn setup(config: &GameConfig, rng: impl Rng) -> Result<Self, PlaceError> {
        let mut board = Board::new(config.board_size)?;
        let fleet = FleetPlacer::new(rng).place(&mut board, &config.fleet, config.guess_budget)?;
        Ok(Self::new(board, fleet))
    }

    /// Build a game with ships on exactly the given cells.
    pub fn from_layout(
        size: usize,
        layout: &[(Ship, Vec<usize>)],
        budget: u32,
    ) -> Result<Self, PlaceError> {
        let mut board = Board::new(size)?;
        let fleet = board::setup::place_fixed(&mut board, layout, budget)?;
        Ok(Self::new(board, fleet))
    }

    /// Get the hidden board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the fleet and its damage.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Current status of the game, as it would be reported to the client.
    pub fn status(&self) -> GameStatus {
        if self.forfeited {
            return GameStatus::IllegalMove;
        }
        match self.fleet.outcome() {
            Outcome::InProgress => GameStatus::Continue,
            Outcome::Won => GameStatus::Won,
            Outcome::Lost => GameStatus::Lost,
        }
    }

    /// Returns true if no further guesses are accepted.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Resolve a guess at the linear cell index `guess`.
    ///
    /// Guesses off the board and repeated guesses at a cell already hit are illegal and
    /// forfeit the game. Only guesses that land in open water are charged against the
    /// budget. Sinking the last ship wins even if the budget is exhausted at the same
    /// time.
    pub fn resolve(&mut self, guess: i32) -> Result<Response, ResolveError> {
        if self.is_over() {
            return Err(ResolveError::AlreadyOver(self.status()));
        }

        let cell = match usize::try_from(guess) {
            Ok(cell) if self.board.dimensions().contains(cell) => cell,
            _ => {
                debug!("guess {} is off the board", guess);
                self.forfeited = true;
                return Ok(Response::ILLEGAL);
            }
        };

        let ship = match self.board.occupant_at(cell)? {
            Some(ship) => ship,
            None => {
                self.fleet.charge_guess();
                return Ok(if self.fleet.budget_exhausted() {
                    self.fleet.finish(Outcome::Lost);
                    Response::new(MoveStatus::Miss, GameStatus::Lost)
                } else {
                    Response::new(MoveStatus::Miss, GameStatus::Continue)
                });
            }
        };

        let state = self
            .fleet
            .get_mut(ship)
            .ok_or(ResolveError::Inconsistent { cell, ship })?;
        if state.is_hit(cell) {
            debug!("cell {} of the {} was already hit", cell, ship);
            self.forfeited = true;
            return Ok(Response::ILLEGAL);
        }
        if !state.record_hit(cell) {
            return Err(ResolveError::Inconsistent { cell, ship });
        }
        if !state.sunk() {
            return Ok(Response::new(MoveStatus::Hit, GameStatus::Continue));
        }

        Ok(if self.fleet.all_sunk() {
            self.fleet.finish(Outcome::Won);
            Response::new(MoveStatus::Sink, GameStatus::Won)
        } else if self.fleet.budget_exhausted() {
            self.fleet.finish(Outcome::Lost);
            Response::new(MoveStatus::Sink, GameStatus::Lost)
        } else {
            Response::new(MoveStatus::Sink, GameStatus::Continue)
        })
    }
}
