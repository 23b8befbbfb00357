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
//! The fixed-width wire format shared by the server and client.
//!
//! Every value is a 4 byte big-endian signed integer. The client sends one integer per
//! guess: a linear cell index, or [`QUIT`]. The server answers each guess, except a
//! quit, with two integers: the [`MoveStatus`] code followed by the [`GameStatus`]
//! code. There is no other framing.
use std::io::{self, ErrorKind, Read, Write};

use thiserror::Error;

use crate::game::{GameStatus, MoveStatus, Response};

/// Guess value a client sends to withdraw from the game.
pub const QUIT: i32 = -1;

/// Size in bytes of every integer on the wire.
pub const INT_SIZE: usize = 4;

/// One message from the client.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Guess {
    /// The client is leaving. No reply is sent.
    Quit,
    /// A guess at a linear cell index. Not yet checked against the board.
    Cell(i32),
}

impl Guess {
    /// Interpret a raw integer from the wire.
    pub fn decode(raw: i32) -> Self {
        if raw == QUIT {
            Guess::Quit
        } else {
            Guess::Cell(raw)
        }
    }

    /// The raw integer sent on the wire.
    pub fn encode(self) -> i32 {
        match self {
            Guess::Quit => QUIT,
            Guess::Cell(cell) => cell,
        }
    }
}

/// Error reading or writing the wire format.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The peer closed the connection where a message was required.
    #[error("connection closed by peer")]
    Closed,
    /// The peer closed the connection partway through an integer.
    #[error("connection closed after {0} of 4 bytes")]
    Truncated(usize),
    #[error("unknown move status code {0}")]
    UnknownMoveStatus(i32),
    #[error("unknown game status code {0}")]
    UnknownGameStatus(i32),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Read a single integer. Returns `None` if the stream ended cleanly before the first
/// byte.
pub fn read_int<R: Read + ?Sized>(read: &mut R) -> Result<Option<i32>, ProtocolError> {
    let mut buf = [0u8; INT_SIZE];
    let mut filled = 0;
    while filled < buf.len() {
        match read.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(ProtocolError::Truncated(filled)),
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(Some(i32::from_be_bytes(buf)))
}

/// Read the next guess. Returns `None` if the client closed the connection between
/// guesses.
pub fn read_guess<R: Read + ?Sized>(read: &mut R) -> Result<Option<Guess>, ProtocolError> {
    Ok(read_int(read)?.map(Guess::decode))
}

/// Send a guess and flush it.
pub fn write_guess<W: Write + ?Sized>(write: &mut W, guess: Guess) -> Result<(), ProtocolError> {
    write.write_all(&guess.encode().to_be_bytes())?;
    write.flush()?;
    Ok(())
}

/// Send the pair of status codes for a guess and flush them.
pub fn write_response<W: Write + ?Sized>(
    write: &mut W,
    response: Response,
) -> Result<(), ProtocolError> {
    let mut buf = [0u8; 2 * INT_SIZE];
    buf[..INT_SIZE].copy_from_slice(&response.move_status.code().to_be_bytes());
    buf[INT_SIZE..].copy_from_slice(&response.game_status.code().to_be_bytes());
    write.write_all(&buf)?;
    write.flush()?;
    Ok(())
}

/// Read the pair of status codes answering a guess.
pub fn read_response<R: Read + ?Sized>(read: &mut R) -> Result<Response, ProtocolError> {
    let move_code = read_int(read)?.ok_or(ProtocolError::Closed)?;
    let game_code = read_int(read)?.ok_or(ProtocolError::Truncated(0))?;
    let move_status =
        MoveStatus::from_code(move_code).ok_or(ProtocolError::UnknownMoveStatus(move_code))?;
    let game_status =
        GameStatus::from_code(game_code).ok_or(ProtocolError::UnknownGameStatus(game_code))?;
    Ok(Response::new(move_status, game_status))
}
