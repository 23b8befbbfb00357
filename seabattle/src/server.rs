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
//! Accepts connections and runs each client's session on its own thread.
use std::{
    io,
    net::{SocketAddr, TcpListener, TcpStream},
    thread::{self, JoinHandle},
};

use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

use crate::{
    config::{ConfigError, GameConfig, ServerConfig},
    session::Session,
};

/// Error starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not listen: {0}")]
    Io(#[from] io::Error),
}

/// Listening socket plus the settings every session is started with.
///
/// Sessions share nothing: each gets its own thread, its own random number generator and
/// its own board.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    config: ServerConfig,
}

impl Server {
    /// Validate the configuration and start listening.
    pub fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        config.validate()?;
        let listener = TcpListener::bind(config.addr())?;
        info!(
            "battleship server standing by on {}",
            listener.local_addr()?
        );
        Ok(Self { listener, config })
    }

    /// The address the server is actually listening on.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections forever. A failed accept is logged and the loop carries on.
    pub fn serve(self) {
        let mut next_id = 0;
        loop {
            match self.accept(next_id) {
                Ok(_) => next_id += 1,
                Err(err) => warn!("error accepting connection: {}", err),
            }
        }
    }

    /// Wait for one connection and start its session on a new thread. The session is
    /// seeded from `id` when the server has a fixed seed.
    pub fn accept(&self, id: u64) -> io::Result<JoinHandle<()>> {
        let (stream, peer) = self.listener.accept()?;
        info!("session {}: connection from {}", id, peer);
        stream.set_read_timeout(self.config.idle_timeout)?;
        stream.set_nodelay(true)?;
        let game = self.config.game.clone();
        let rng = session_rng(self.config.seed, id);
        thread::Builder::new()
            .name(format!("session-{}", id))
            .spawn(move || run_session(id, stream, &game, rng))
    }
}

/// Run one session to completion and log how it ended.
fn run_session(id: u64, stream: TcpStream, config: &GameConfig, rng: StdRng) {
    match Session::start(id, stream, config, rng).and_then(Session::run) {
        Ok(end) => info!("session {}: ended, {}", id, end),
        Err(err) => warn!("session {}: aborted: {}", id, err),
    }
}

fn session_rng(seed: Option<u64>, id: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(id)),
        None => StdRng::from_entropy(),
    }
}
