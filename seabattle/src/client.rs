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
//! The guessing side of the game.
use std::{
    fmt,
    io::{Read, Write},
    net::{TcpStream, ToSocketAddrs},
};

use thiserror::Error;

use crate::{
    board::{BoardError, Coordinate, Dimensions},
    game::{GameStatus, MoveStatus, Response},
    protocol::{self, Guess, ProtocolError},
    render,
};

/// What the client knows about a cell of the enemy board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mark {
    /// Not fired at yet.
    Unknown,
    /// Fired at and nothing was there.
    Miss,
    /// Fired at and a ship was hit or sunk.
    Hit,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Mark::Unknown => "~~",
            Mark::Miss => "x",
            Mark::Hit => "H",
        })
    }
}

/// The client's record of its own shots.
#[derive(Debug, Clone)]
pub struct TargetBoard {
    dim: Dimensions,
    marks: Vec<Mark>,
}

impl TargetBoard {
    /// Create a blank tracking board of `size` by `size` cells.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let dim = Dimensions::try_new(size).ok_or(BoardError::InvalidSize(size))?;
        Ok(Self {
            dim,
            marks: vec![Mark::Unknown; dim.total_size()],
        })
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Get the mark at the given coordinate. Returns `None` if the coordinate is off the
    /// board.
    pub fn get(&self, coord: Coordinate) -> Option<Mark> {
        self.dim.try_linearize(coord).map(|cell| self.marks[cell])
    }

    fn set(&mut self, cell: usize, mark: Mark) {
        if let Some(slot) = self.marks.get_mut(cell) {
            *slot = mark;
        }
    }
}

impl fmt::Display for TargetBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marks = &self.marks;
        render::write_grid(
            f,
            self.dim.size(),
            self.dim
                .iter_rows()
                .map(move |row| row.map(move |cell| marks[cell])),
        )
    }
}

/// Error talking to the server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The coordinate is not on the board, so it was not sent.
    #[error("{0} is not on the board")]
    OffBoard(Coordinate),
    /// The quit value was passed as a guess. Use [`Client::quit`] to leave.
    #[error("the quit value cannot be sent as a guess")]
    QuitAsGuess,
    /// The game already ended, so no more guesses can be sent.
    #[error("the game is already over ({0:?})")]
    GameOver(GameStatus),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Protocol(err.into())
    }
}

/// Connection to a server plus the client's view of the game.
#[derive(Debug)]
pub struct Client<S> {
    stream: S,
    board: TargetBoard,
    status: GameStatus,
}

impl Client<TcpStream> {
    /// Connect to a server playing on a `size` by `size` board.
    pub fn connect(addr: impl ToSocketAddrs, size: usize) -> Result<Self, ClientError> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        Self::new(stream, size)
    }
}

impl<S: Read + Write> Client<S> {
    /// Wrap an open connection to a server playing on a `size` by `size` board.
    pub fn new(stream: S, size: usize) -> Result<Self, ClientError> {
        Ok(Self {
            stream,
            board: TargetBoard::new(size)?,
            status: GameStatus::Continue,
        })
    }

    /// The client's record of its shots.
    pub fn board(&self) -> &TargetBoard {
        &self.board
    }

    /// The most recent game status reported by the server.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Fire at `coord` and wait for the server's answer.
    pub fn guess(&mut self, coord: Coordinate) -> Result<Response, ClientError> {
        let cell = self
            .board
            .dimensions()
            .try_linearize(coord)
            .ok_or(ClientError::OffBoard(coord))?;
        // The board size is capped so every cell index fits in an i32.
        self.guess_raw(cell as i32)
    }

    /// Send a raw cell index, without checking it against the board, and wait for the
    /// server's answer. The quit value is refused.
    pub fn guess_raw(&mut self, cell: i32) -> Result<Response, ClientError> {
        if cell == protocol::QUIT {
            return Err(ClientError::QuitAsGuess);
        }
        if self.status.is_over() {
            return Err(ClientError::GameOver(self.status));
        }
        protocol::write_guess(&mut self.stream, Guess::Cell(cell))?;
        let response = protocol::read_response(&mut self.stream)?;
        let mark = match response.move_status {
            MoveStatus::Miss => Some(Mark::Miss),
            MoveStatus::Hit | MoveStatus::Sink => Some(Mark::Hit),
            MoveStatus::IllegalMove => None,
        };
        if let Some(mark) = mark {
            self.board.set(cell as usize, mark);
        }
        self.status = response.game_status;
        Ok(response)
    }

    /// Tell the server the client is leaving and close the connection.
    pub fn quit(mut self) -> Result<(), ClientError> {
        protocol::write_guess(&mut self.stream, Guess::Quit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;

    struct Scripted {
        replies: Cursor<Vec<u8>>,
        sent: Vec<u8>,
    }

    impl Scripted {
        fn new(replies: &[Response]) -> Self {
            let mut buf = Vec::new();
            for &reply in replies {
                protocol::write_response(&mut buf, reply).unwrap();
            }
            Self {
                replies: Cursor::new(buf),
                sent: Vec::new(),
            }
        }
    }

    impl Read for Scripted {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.replies.read(buf)
        }
    }

    impl Write for Scripted {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.sent.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn guesses_are_encoded_row_major_and_marked() {
        let mut conn = Scripted::new(&[
            Response::new(MoveStatus::Miss, GameStatus::Continue),
            Response::new(MoveStatus::Sink, GameStatus::Won),
        ]);
        let mut client = Client::new(&mut conn, 15).unwrap();
        client.guess(Coordinate::new(0, 3)).unwrap();
        client.guess(Coordinate::new(2, 1)).unwrap();
        assert_eq!(client.status(), GameStatus::Won);
        assert_eq!(client.board().get(Coordinate::new(0, 3)), Some(Mark::Miss));
        assert_eq!(client.board().get(Coordinate::new(2, 1)), Some(Mark::Hit));
        assert_eq!(client.board().get(Coordinate::new(5, 5)), Some(Mark::Unknown));
        match client.guess(Coordinate::new(5, 5)) {
            Err(ClientError::GameOver(GameStatus::Won)) => {}
            other => panic!("unexpected {:?}", other),
        }
        drop(client);
        assert_eq!(conn.sent, [0, 0, 0, 3, 0, 0, 0, 31]);
    }

    #[test]
    fn off_board_coordinates_are_not_sent() {
        let mut conn = Scripted::new(&[]);
        let mut client = Client::new(&mut conn, 15).unwrap();
        match client.guess(Coordinate::new(0, 15)) {
            Err(ClientError::OffBoard(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        drop(client);
        assert!(conn.sent.is_empty());
    }

    #[test]
    fn raw_quit_value_is_not_sent_as_a_guess() {
        let mut conn = Scripted::new(&[]);
        let mut client = Client::new(&mut conn, 15).unwrap();
        match client.guess_raw(protocol::QUIT) {
            Err(ClientError::QuitAsGuess) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(client.status(), GameStatus::Continue);
        drop(client);
        assert!(conn.sent.is_empty());
    }

    #[test]
    fn oversized_tracking_boards_are_rejected() {
        assert_eq!(
            TargetBoard::new(46_340).unwrap_err(),
            BoardError::InvalidSize(46_340)
        );
    }

    #[test]
    fn quit_sends_the_sentinel() {
        let mut conn = Scripted::new(&[]);
        Client::new(&mut conn, 15).unwrap().quit().unwrap();
        assert_eq!(conn.sent, [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn tracking_board_renders_marks() {
        let mut board = TargetBoard::new(2).unwrap();
        board.set(0, Mark::Hit);
        board.set(3, Mark::Miss);
        let rendered = board.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[1], " 0  H   ~~ ");
        assert_eq!(lines[2], " 1  ~~  x  ");
    }
}
