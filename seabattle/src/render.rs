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
//! Shared text layout for the server's revealed board and the client's tracking board.

use std::fmt;

/// Write the board by laying out a grid with row and column headers. Takes an iterator
/// over the rows of iterators over the cells.
pub(crate) fn write_grid(
    f: &mut fmt::Formatter,
    size: usize,
    rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>,
) -> fmt::Result {
    write!(f, "   ")?;
    for i in 0..size {
        write!(f, "{:^4}", i)?;
    }
    writeln!(f)?;
    for (i, row) in rows.enumerate() {
        write!(f, "{:>2} ", i)?;
        for cell in row {
            write!(f, "{:^4}", cell)?;
        }
        writeln!(f)?;
    }
    Ok(())
}
