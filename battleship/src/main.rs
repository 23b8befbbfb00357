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
    error::Error,
    fmt,
    io::{self, BufRead, Write},
    net::IpAddr,
    str::FromStr,
    time::Duration,
};

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use seabattle::{
    config::{BOARD_SIZE, DEFAULT_PORT},
    Client, Coordinate, GameStatus, MoveStatus, Server, ServerConfig,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Networked battleship: host a hidden fleet or hunt one.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("serve")
                .about("Hide a fresh fleet for every client that connects.")
                .arg(
                    Arg::with_name("bind")
                        .long("bind")
                        .value_name("ADDR")
                        .help("address to listen on [default: 0.0.0.0]")
                        .takes_value(true),
                )
                .arg(port_arg())
                .arg(size_arg())
                .arg(
                    Arg::with_name("guesses")
                        .short("g")
                        .long("guesses")
                        .value_name("GUESSES")
                        .help("misses allowed before the client loses [default: 40]")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("idle_timeout")
                        .long("idle-timeout")
                        .value_name("SECS")
                        .help("drop clients that send nothing for this many seconds")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .value_name("SEED")
                        .help("seed fleet placement for reproducible games")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("play")
                .about("Connect to a server and hunt its fleet.")
                .arg(
                    Arg::with_name("host")
                        .long("host")
                        .value_name("HOST")
                        .help("server to connect to, asked for if not given")
                        .takes_value(true),
                )
                .arg(port_arg())
                .arg(size_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        ("serve", Some(args)) => serve(args),
        ("play", Some(args)) => play(args),
        _ => unreachable!(),
    }
}

fn port_arg() -> Arg<'static, 'static> {
    Arg::with_name("port")
        .short("p")
        .long("port")
        .value_name("PORT")
        .help("port to listen on or connect to [default: 32100]")
        .takes_value(true)
}

fn size_arg() -> Arg<'static, 'static> {
    Arg::with_name("size")
        .short("s")
        .long("size")
        .value_name("SIZE")
        .help("side length of the board [default: 15]")
        .takes_value(true)
}

/// Parse an optional argument, failing if it is present but malformed.
fn optional<T: FromStr>(args: &ArgMatches, name: &str) -> Result<Option<T>, clap::Error> {
    match args.value_of(name) {
        None => Ok(None),
        Some(_) => value_t!(args, name, T).map(Some),
    }
}

/// Run the server until killed.
fn serve(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut config = ServerConfig::default();
    if let Some(bind) = optional::<IpAddr>(args, "bind")? {
        config.bind = bind;
    }
    if let Some(port) = optional(args, "port")? {
        config.port = port;
    }
    if let Some(size) = optional(args, "size")? {
        config.game.board_size = size;
    }
    if let Some(guesses) = optional(args, "guesses")? {
        config.game.guess_budget = guesses;
    }
    if let Some(secs) = optional(args, "idle_timeout")? {
        config.idle_timeout = Some(Duration::from_secs(secs));
    }
    config.seed = optional(args, "seed")?;

    Server::bind(config)?.serve();
    Ok(())
}

/// Play one game against a server from the console.
fn play(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    let host = match args.value_of("host") {
        Some(host) => host.to_owned(),
        None => match input.read_input("Please enter the server's address:", |host| {
            if host.is_empty() {
                None
            } else {
                Some(host.to_owned())
            }
        })? {
            Some(host) => host,
            None => return Ok(()),
        },
    };
    let port = optional(args, "port")?.unwrap_or(DEFAULT_PORT);
    let size = optional(args, "size")?.unwrap_or(BOARD_SIZE);

    debug!("connecting to {}:{} for a {}x{} game", host, port, size, size);
    let mut client = Client::connect((host.as_str(), port), size)?;
    println!();
    println!("{}", client.board());
    println!("'x' marks a miss, 'H' marks a hit. Enter a negative number to quit.");

    loop {
        let target = input.read_input("Target (row col) >", |line| parse_target(line, size))?;
        let coord = match target {
            Some(Target::Cell(coord)) => coord,
            Some(Target::Quit) | None => {
                client.quit()?;
                println!("Thank you for playing, come again!");
                return Ok(());
            }
        };

        let response = client.guess(coord)?;
        println!();
        println!("{}", client.board());
        println!("{}", MoveMessage(response.move_status));
        match response.game_status {
            GameStatus::Continue => {}
            GameStatus::Won => {
                println!("You have won the game!");
                break;
            }
            GameStatus::Lost => {
                println!("You are out of guesses. You have lost the game!");
                break;
            }
            GameStatus::IllegalMove => break,
        }
    }
    Ok(())
}

/// A line of console input during play.
enum Target {
    Cell(Coordinate),
    Quit,
}

/// Parse `row col` or `row,col`. A negative number in either position quits.
fn parse_target(line: &str, size: usize) -> Option<Target> {
    /// Matcher for a pair of possibly negative numbers.
    static TARGET: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<row>-?[0-9]+)(?:\s*,\s*|\s+)(?P<col>-?[0-9]+)$").unwrap()
    });

    let captures = match TARGET.captures(line) {
        Some(captures) => captures,
        None => {
            println!("Invalid target \"{}\", enter a row and a column.", line);
            return None;
        }
    };
    let row = &captures["row"];
    let col = &captures["col"];
    if row.starts_with('-') || col.starts_with('-') {
        return Some(Target::Quit);
    }
    match (row.parse::<usize>(), col.parse::<usize>()) {
        (Ok(row), Ok(col)) if row < size && col < size => {
            Some(Target::Cell((row, col).into()))
        }
        _ => {
            println!("row and column must be in range [0,{}]", size - 1);
            None
        }
    }
}

/// Display helper for the outcome of a single move.
struct MoveMessage(MoveStatus);

impl fmt::Display for MoveMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            MoveStatus::Miss => "Miss!",
            MoveStatus::Hit => "Hit!",
            MoveStatus::Sink => "Sink!",
            MoveStatus::IllegalMove => "Illegal move, exiting!",
        })
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Returns
    /// `None` if input ends first.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns false
    /// at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}
