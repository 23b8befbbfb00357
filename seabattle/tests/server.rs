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
use std::{
    net::{Ipv4Addr, SocketAddr, TcpStream},
    thread,
    time::{Duration, Instant},
};

use rand::{rngs::StdRng, SeedableRng};
use seabattle::{
    board::Coordinate,
    game::{Game, GameStatus, MoveStatus, Response},
    protocol::{self, Guess},
    Client, GameConfig, Server, ServerConfig,
};

const SEED: u64 = 0x5eab_a771e;

/// Start a seeded server on a free loopback port.
fn start_server() -> SocketAddr {
    start_server_with(None)
}

fn start_server_with(idle_timeout: Option<Duration>) -> SocketAddr {
    let config = ServerConfig {
        bind: Ipv4Addr::LOCALHOST.into(),
        port: 0,
        idle_timeout,
        seed: Some(SEED),
        ..ServerConfig::default()
    };
    let server = Server::bind(config).unwrap();
    let addr = server.local_addr().unwrap();
    thread::spawn(move || server.serve());
    addr
}

fn connect(addr: SocketAddr) -> TcpStream {
    let stream = TcpStream::connect(addr).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_secs(10)))
        .unwrap();
    stream
}

#[test]
fn quit_closes_without_a_reply() {
    let mut stream = connect(start_server());
    protocol::write_guess(&mut stream, Guess::Quit).unwrap();
    assert_eq!(protocol::read_int(&mut stream).unwrap(), None);
}

#[test]
fn off_board_guess_is_illegal_and_closes() {
    let mut stream = connect(start_server());
    protocol::write_guess(&mut stream, Guess::Cell(226)).unwrap();
    assert_eq!(
        protocol::read_response(&mut stream).unwrap(),
        Response::ILLEGAL
    );
    assert_eq!(protocol::read_int(&mut stream).unwrap(), None);
}

#[test]
fn seeded_sessions_can_be_won_outright() {
    // The first session on a seeded server uses the seed itself.
    let expected = Game::setup(&GameConfig::default(), StdRng::seed_from_u64(SEED)).unwrap();
    let targets: Vec<usize> = expected
        .fleet()
        .iter()
        .flat_map(|ship| ship.locations().iter().copied().collect::<Vec<_>>())
        .collect();

    let mut client = Client::connect(start_server(), 15).unwrap();
    let mut last = None;
    for &cell in &targets {
        let coord = Coordinate::new(cell / 15, cell % 15);
        last = Some(client.guess(coord).unwrap());
    }
    assert_eq!(
        last,
        Some(Response::new(MoveStatus::Sink, GameStatus::Won))
    );
    assert_eq!(client.status(), GameStatus::Won);
}

#[test]
fn sweeping_the_board_ends_the_game() {
    let mut client = Client::connect(start_server(), 15).unwrap();
    let mut misses = 0;
    let mut hits = 0;
    for cell in 0..225 {
        let response = client.guess(Coordinate::new(cell / 15, cell % 15)).unwrap();
        match response.move_status {
            MoveStatus::Miss => misses += 1,
            MoveStatus::Hit | MoveStatus::Sink => hits += 1,
            MoveStatus::IllegalMove => panic!("sweep never repeats a cell"),
        }
        if response.game_status.is_over() {
            break;
        }
    }
    match client.status() {
        GameStatus::Won => assert_eq!(hits, 14),
        GameStatus::Lost => assert_eq!(misses, 40),
        other => panic!("unexpected status {:?}", other),
    }
}

#[test]
fn sessions_are_independent() {
    let addr = start_server();
    let mut first = Client::connect(addr, 15).unwrap();
    let mut second = Client::connect(addr, 15).unwrap();

    assert_eq!(first.guess_raw(-7).unwrap(), Response::ILLEGAL);
    second.guess(Coordinate::new(7, 7)).unwrap();
    assert_eq!(second.status(), GameStatus::Continue);
    second.quit().unwrap();
}

#[test]
fn idle_clients_are_dropped() {
    let mut stream = connect(start_server_with(Some(Duration::from_millis(200))));
    let started = Instant::now();
    assert_eq!(protocol::read_int(&mut stream).unwrap(), None);
    assert!(started.elapsed() >= Duration::from_millis(150));
}
