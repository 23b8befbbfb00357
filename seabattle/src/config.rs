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
//! Game and server settings.
use std::{
    collections::HashSet,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use thiserror::Error;

use crate::{board::Dimensions, ships::Ship};

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 15;

/// Largest side length a board may have.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Guesses allowed before the client loses.
pub const MAX_GUESSES: u32 = 40;

/// Port the server listens on by default.
pub const DEFAULT_PORT: u16 = 32100;

/// Reason a configuration cannot be used.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("invalid board size {0}")]
    InvalidSize(usize),
    #[error("the fleet is empty")]
    EmptyFleet,
    #[error("the {0} appears more than once in the fleet")]
    DuplicateShip(Ship),
    #[error("the {ship} does not fit on a {size}x{size} board")]
    ShipTooLong { ship: Ship, size: usize },
    #[error("the guess budget must allow at least one guess")]
    ZeroBudget,
    #[error("the idle timeout must be longer than zero")]
    ZeroTimeout,
}

/// Settings for a single game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,
    /// Guesses allowed before the client loses.
    pub guess_budget: u32,
    /// Ships to hide.
    pub fleet: Vec<Ship>,
}

impl GameConfig {
    /// Check that a board can be built and the fleet placed on it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Dimensions::try_new(self.board_size).is_none() {
            return Err(ConfigError::InvalidSize(self.board_size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        let mut seen = HashSet::new();
        for &ship in &self.fleet {
            if !seen.insert(ship) {
                return Err(ConfigError::DuplicateShip(ship));
            }
            if ship.len() > self.board_size {
                return Err(ConfigError::ShipTooLong {
                    ship,
                    size: self.board_size,
                });
            }
        }
        if self.guess_budget == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// The standard game: a 15x15 board, one of each ship and 40 guesses.
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            guess_budget: MAX_GUESSES,
            fleet: Ship::ALL.to_vec(),
        }
    }
}

/// Settings for the listening server.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: IpAddr,
    /// Port to listen on. Zero picks a free port.
    pub port: u16,
    /// Drop a client that sends nothing for this long. `None` waits forever.
    pub idle_timeout: Option<Duration>,
    /// Seed for fleet placement. Session `n` is seeded with `seed + n`. `None` seeds each
    /// session from system entropy.
    pub seed: Option<u64>,
    /// Settings for every game played on this server.
    pub game: GameConfig,
}

impl ServerConfig {
    /// The socket address to listen on.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Check the settings before starting the server.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.idle_timeout == Some(Duration::from_secs(0)) {
            return Err(ConfigError::ZeroTimeout);
        }
        self.game.validate()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            idle_timeout: None,
            seed: None,
            game: GameConfig::default(),
        }
    }
}
