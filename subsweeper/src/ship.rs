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
//! The ship and the execution of a single turn.

use std::convert::TryFrom;

use tracing::{debug, warn};

use crate::{
    command::{Command, Movement, Torpedo},
    field::{Coordinate, Direction, Field},
    score::{self, Tally, Verdict},
    viewport::{Frame, Viewport},
};

/// The ship descending through a [`Field`]. Owns the field for the whole run.
#[derive(Debug, Clone)]
pub struct Ship {
    /// The mine field being cleared.
    field: Field,

    /// Cell currently occupied by the ship.
    position: Coordinate,

    /// Depth counter. Only ever decremented, once per resolved movement.
    depth: i64,

    /// Scoring counters.
    tally: Tally,

    /// Whether rendered frames mark the ship's cell.
    show_marker: bool,
}

impl Ship {
    /// Launch a ship at the center of `field`, at depth 0, with `commands` commands to
    /// run. The initial mine count is taken from the field now.
    pub fn new(field: Field, commands: usize) -> Self {
        let position = field.dimensions().center();
        let tally = Tally {
            moves_made: 0,
            volleys_fired: 0,
            initial_mines: saturate(field.mine_count()),
            commands_left: saturate(commands),
        };
        debug!(x = position.x, y = position.y, ?tally, "ship launched");
        Self {
            field,
            position,
            depth: 0,
            tally,
            show_marker: false,
        }
    }

    /// Set whether rendered frames overlay the ship marker on the ship's cell.
    pub fn set_show_marker(&mut self, show: bool) {
        self.show_marker = show;
    }

    /// The field the ship is in.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Coordinate of the cell the ship occupies.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Current depth counter.
    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// Current scoring counters.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Parse a command line. A resolved movement other than descend lowers the depth
    /// counter here; descend is accounted for when it is executed.
    pub fn interpret(&mut self, line: &str) -> Command {
        let command = Command::parse(line);
        if let Some(Movement::Steer(_)) = command.movement {
            self.depth -= 1;
        }
        command
    }

    /// Run one parsed command: fire first, then move, then decay every active mine once.
    pub fn execute(&mut self, command: Command) {
        if let Some(torpedo) = command.torpedo {
            self.fire(torpedo);
        }
        if let Some(movement) = command.movement {
            self.maneuver(movement);
        }
        self.field.decay_mines();
    }

    /// Consume one command from the script and run it, returning the frame rendered
    /// after the turn.
    pub fn apply_turn(&mut self, line: &str) -> Frame {
        self.tally.commands_left = self.tally.commands_left.saturating_sub(1);
        let command = self.interpret(line);
        debug!(%command, raw = line, "executing command");
        self.execute(command);
        self.render()
    }

    /// Check whether the run is over.
    pub fn evaluate(&self) -> Option<Verdict> {
        score::evaluate(&self.field, &self.tally)
    }

    /// Render the current viewport.
    pub fn render(&self) -> Frame {
        Viewport::new(&self.field, self.position).render(self.show_marker)
    }

    /// Fire a torpedo volley. Returns the number of mines destroyed.
    fn fire(&mut self, torpedo: Torpedo) -> usize {
        self.tally.volleys_fired += 1;
        let origin = self.position;
        let targets: Vec<Coordinate> = torpedo
            .hop_chains()
            .filter_map(|hops| self.field.follow(origin, hops))
            .collect();
        let hits = targets
            .into_iter()
            .filter(|&target| self.field.destroy(target))
            .count();
        debug!(torpedo = torpedo.word(), hits, "volley fired");
        hits
    }

    /// Apply a movement. Moves that would leave the field are blocked: the ship stays
    /// put and the move is not counted.
    fn maneuver(&mut self, movement: Movement) {
        match movement {
            Movement::Descend => self.depth -= 1,
            Movement::Steer(dir) => self.steer(dir),
        }
    }

    fn steer(&mut self, dir: Direction) {
        match self.field.neighbor(self.position, dir) {
            Some(next) => {
                self.position = next;
                self.tally.moves_made += 1;
                debug!(?dir, x = next.x, y = next.y, "ship moved");
            }
            None => {
                warn!(?dir, x = self.position.x, y = self.position.y, "move blocked by field edge");
            }
        }
    }
}

/// Clamp a count into the `u32` range used by the tally.
fn saturate(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::max_value())
}
