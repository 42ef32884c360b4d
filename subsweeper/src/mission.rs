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
//! Drives a ship through a whole script, one turn at a time.

use std::vec;

use tracing::info;

use crate::{field::Field, score::Verdict, ship::Ship, viewport::Frame};

/// Record of a single executed turn.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Step {
    /// 1-based turn number.
    pub number: usize,
    /// The raw command line as given in the script.
    pub command: String,
    /// Viewport before the command ran.
    pub before: Frame,
    /// Viewport after the command ran.
    pub after: Frame,
    /// Verdict reached on this turn, if the run ended here.
    pub verdict: Option<Verdict>,
}

/// A run of a script against a field. Iterating yields one [`Step`] per executed
/// command and stops after the first verdict.
#[derive(Debug)]
pub struct Mission {
    ship: Ship,
    script: vec::IntoIter<String>,
    turn: usize,
    verdict: Option<Verdict>,
}

impl Mission {
    /// Launch a ship into `field` to run `script`, one command per entry.
    pub fn new<I, S>(field: Field, script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script: Vec<String> = script.into_iter().map(Into::into).collect();
        Self {
            ship: Ship::new(field, script.len()),
            script: script.into_iter(),
            turn: 0,
            verdict: None,
        }
    }

    /// Set whether rendered frames mark the ship's cell.
    pub fn show_marker(mut self, show: bool) -> Self {
        self.ship.set_show_marker(show);
        self
    }

    /// The ship being driven.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Execute the next command. Returns `None` once a verdict was reached or the script
    /// is exhausted.
    pub fn step(&mut self) -> Option<Step> {
        if self.verdict.is_some() {
            return None;
        }
        let command = self.script.next()?;
        self.turn += 1;
        let before = self.ship.render();
        let after = self.ship.apply_turn(&command);
        self.verdict = self.ship.evaluate();
        if let Some(verdict) = self.verdict {
            info!(turn = self.turn, %verdict, "mission over");
        }
        Some(Step {
            number: self.turn,
            command,
            before,
            after,
            verdict: self.verdict,
        })
    }

    /// Run every remaining command and return the verdict. An empty script is judged on
    /// the initial state.
    pub fn run(mut self) -> Verdict {
        while self.step().is_some() {}
        self.final_verdict()
    }

    /// The verdict if one was reached, otherwise the judgement of the current state. A
    /// run that ends without a verdict has commands left and no mines cleared yet, which
    /// counts as a failure.
    pub fn final_verdict(&self) -> Verdict {
        self.verdict
            .or_else(|| self.ship.evaluate())
            .unwrap_or_else(Verdict::fail)
    }
}

impl Iterator for Mission {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.step()
    }
}
