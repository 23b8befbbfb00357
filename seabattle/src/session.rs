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
//! One client's game, from fleet placement to the end of the connection.
use std::{
    fmt,
    io::{Read, Write},
};

use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::{
    board::PlaceError,
    config::GameConfig,
    game::{Game, GameStatus, ResolveError},
    protocol::{self, Guess, ProtocolError},
};

/// How a session ended without error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionEnd {
    /// The client sank the fleet.
    Won,
    /// The client ran out of guesses.
    Lost,
    /// The client made an illegal move.
    IllegalMove,
    /// The client sent the quit sentinel.
    Quit,
    /// The client closed the connection between guesses.
    Disconnected,
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            SessionEnd::Won => "client won",
            SessionEnd::Lost => "client lost",
            SessionEnd::IllegalMove => "illegal move",
            SessionEnd::Quit => "client quit",
            SessionEnd::Disconnected => "client disconnected",
        })
    }
}

/// Error that ends a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not set up the board: {0}")]
    Setup(#[from] PlaceError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// A single client's connection and the game it is playing.
///
/// The session owns the stream. Running it consumes the session, so the stream is
/// dropped, and with it the connection closed, however the session ends.
#[derive(Debug)]
pub struct Session<S> {
    /// Identifier used in log messages.
    id: u64,
    /// Connection to the client.
    stream: S,
    /// Hidden board and fleet for this client only.
    game: Game,
}

impl<S: Read + Write> Session<S> {
    /// Wrap a connection around an already set-up game.
    pub fn new(id: u64, stream: S, game: Game) -> Self {
        Self { id, stream, game }
    }

    /// Place a fresh fleet according to `config` and wrap the connection around it.
    pub fn start(
        id: u64,
        stream: S,
        config: &GameConfig,
        rng: impl Rng,
    ) -> Result<Self, SessionError> {
        let game = Game::setup(config, rng)?;
        debug!("session {}: fleet placed\n{}", id, game.board());
        Ok(Self::new(id, stream, game))
    }

    /// Identifier used in log messages.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play the game to the end: read a guess, resolve it, answer it, until the game is
    /// over or the client leaves.
    pub fn run(mut self) -> Result<SessionEnd, SessionError> {
        loop {
            let cell = match protocol::read_guess(&mut self.stream)? {
                None => return Ok(SessionEnd::Disconnected),
                Some(Guess::Quit) => return Ok(SessionEnd::Quit),
                Some(Guess::Cell(cell)) => cell,
            };
            let response = self.game.resolve(cell)?;
            debug!(
                "session {}: guess {} -> {:?}/{:?} ({} guesses left)",
                self.id,
                cell,
                response.move_status,
                response.game_status,
                self.game.fleet().remaining_guesses()
            );
            protocol::write_response(&mut self.stream, response)?;
            match response.game_status {
                GameStatus::Continue => {}
                GameStatus::Won => return Ok(SessionEnd::Won),
                GameStatus::Lost => return Ok(SessionEnd::Lost),
                GameStatus::IllegalMove => {
                    info!("session {}: illegal guess {}", self.id, cell);
                    return Ok(SessionEnd::IllegalMove);
                }
            }
        }
    }
}
