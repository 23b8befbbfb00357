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
//! The hunt for one hidden fleet.
//!
//! [`fleet`] keeps the per-ship damage and the guess budget for a session.
//!
//! [`resolver`] holds the [`Game`] state machine, which turns each guess into a
//! [`Response`] for the client and settles the [`Outcome`] once the fleet is sunk or the
//! budget runs out.

pub use self::{
    fleet::{Fleet, Outcome, ShipState},
    resolver::{Game, GameStatus, MoveStatus, ResolveError, Response},
};

pub mod fleet;
pub mod resolver;
