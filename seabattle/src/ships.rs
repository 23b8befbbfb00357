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
//! Types used for defining ships and their shapes.
use std::fmt;

pub use self::linear::{Line, Orientation};

mod linear;

/// Ship ID. A fleet holds at most one ship of each class.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Ship {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Destroyer: length 2.
    Destroyer,
}

impl Ship {
    /// Every ship class, largest first.
    pub const ALL: &'static [Ship] = &[
        Ship::Carrier,
        Ship::Battleship,
        Ship::Cruiser,
        Ship::Destroyer,
    ];

    /// Get the shape cooresponding to this ship ID.
    pub fn shape(self) -> Line {
        Line::new(self.len())
    }

    /// Get the length of this ship type.
    pub fn len(self) -> usize {
        match self {
            Ship::Carrier => 5,
            Ship::Battleship => 4,
            Ship::Cruiser => 3,
            Ship::Destroyer => 2,
        }
    }

    /// The ship's full name.
    pub fn name(self) -> &'static str {
        match self {
            Ship::Carrier => "carrier",
            Ship::Battleship => "battleship",
            Ship::Cruiser => "cruiser",
            Ship::Destroyer => "destroyer",
        }
    }

    /// Two letter hull abbreviation, used when rendering the board.
    pub fn abbrev(self) -> &'static str {
        match self {
            Ship::Carrier => "cv",
            Ship::Battleship => "bb",
            Ship::Cruiser => "cl",
            Ship::Destroyer => "dd",
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
