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
//! Networked Battleship.
//!
//! A server hides a fleet on a square grid for every client that connects, and the
//! client fires at it one cell at a time over a persistent TCP connection. Each guess is
//! answered with a [`MoveStatus`][game::MoveStatus] (miss, hit, sink or illegal) and a
//! [`GameStatus`][game::GameStatus] (continue, won, lost or illegal) until the fleet is
//! sunk, the guess budget runs out, or the client quits.
//!
//! - [`board`] holds the hidden grid and the random [`FleetPlacer`][board::FleetPlacer].
//! - [`game`] resolves guesses against the board and tracks damage and the budget.
//! - [`protocol`] is the fixed-width wire format.
//! - [`session`] runs one client's game over any `Read + Write` stream.
//! - [`server`] accepts TCP connections, one thread per client.
//! - [`client`] is the guessing side.

pub mod board;
pub mod client;
pub mod config;
pub mod game;
pub mod protocol;
mod render;
pub mod server;
pub mod session;
pub mod ships;

pub use crate::{
    board::{Board, Coordinate},
    client::Client,
    config::{GameConfig, ServerConfig},
    game::{Game, GameStatus, MoveStatus, Response},
    server::Server,
    session::{Session, SessionEnd},
    ships::Ship,
};
