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
//! Termination and scoring rules.

use std::fmt;

use crate::field::Field;

/// Points granted per initial mine.
const POINTS_PER_MINE: u32 = 10;
/// Penalty per volley fired.
const VOLLEY_PENALTY: u32 = 5;
/// Cap on the volley penalty, per initial mine.
const VOLLEY_PENALTY_CAP: u32 = 5;
/// Penalty per move made.
const MOVE_PENALTY: u32 = 2;
/// Cap on the move penalty, per initial mine.
const MOVE_PENALTY_CAP: u32 = 3;
/// Flat score for clearing the field before the script ran out.
const EARLY_CLEAR_SCORE: u32 = 1;

/// Running counters of a ship used for scoring.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Tally {
    /// Moves made in any of the four directions.
    pub moves_made: u32,
    /// Torpedo volleys fired.
    pub volleys_fired: u32,
    /// Number of mines in the field when the ship was launched.
    pub initial_mines: u32,
    /// Commands not yet executed.
    pub commands_left: u32,
}

/// Whether a run succeeded.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Outcome::Pass => "pass",
            Outcome::Fail => "fail",
        })
    }
}

/// Final result of a run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Verdict {
    /// Pass or fail.
    pub outcome: Outcome,
    /// Score earned. Always 0 on failure.
    pub score: u32,
}

impl Verdict {
    /// A failing verdict.
    pub fn fail() -> Self {
        Self {
            outcome: Outcome::Fail,
            score: 0,
        }
    }

    /// A passing verdict with the given score.
    pub fn pass(score: u32) -> Self {
        Self {
            outcome: Outcome::Pass,
            score,
        }
    }
}

impl fmt::Display for Verdict {
    /// Formats as the verdict keyword followed by the score, e.g. `pass 5`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.outcome, self.score)
    }
}

/// Decide whether the run is over. Returns `None` while it should keep going.
///
/// Rules apply in order: a passed mine fails the run outright; running out of commands
/// with mines left fails; clearing the field with commands to spare passes with a flat
/// score; clearing it exactly as the commands run out passes with the full score.
pub fn evaluate(field: &Field, tally: &Tally) -> Option<Verdict> {
    let mines_left = field.mine_count();
    let out_of_commands = tally.commands_left == 0;
    if field.any_passed() {
        Some(Verdict::fail())
    } else if out_of_commands && mines_left > 0 {
        Some(Verdict::fail())
    } else if !out_of_commands && mines_left == 0 {
        Some(Verdict::pass(EARLY_CLEAR_SCORE))
    } else if out_of_commands && mines_left == 0 {
        Some(Verdict::pass(full_score(tally)))
    } else {
        None
    }
}

/// Score for clearing every mine with the last command. Never below
/// `2 * initial_mines`, since both penalties are capped. Saturates at `u32::MAX`.
pub fn full_score(tally: &Tally) -> u32 {
    let mines = tally.initial_mines;
    let volley_penalty = tally
        .volleys_fired
        .saturating_mul(VOLLEY_PENALTY)
        .min(mines.saturating_mul(VOLLEY_PENALTY_CAP));
    let move_penalty = tally
        .moves_made
        .saturating_mul(MOVE_PENALTY)
        .min(mines.saturating_mul(MOVE_PENALTY_CAP));
    mines
        .saturating_mul(POINTS_PER_MINE)
        .saturating_sub(volley_penalty)
        .saturating_sub(move_penalty)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::field::Coordinate;

    fn tally(moves: u32, volleys: u32, initial_mines: u32, commands_left: u32) -> Tally {
        Tally {
            moves_made: moves,
            volleys_fired: volleys,
            initial_mines,
            commands_left,
        }
    }

    #[test]
    fn passed_mine_overrides_a_clear_field() {
        let mut field: Field = "ab".parse().unwrap();
        field.destroy(Coordinate::new(1, 0));
        field.decay_mines();
        assert!(field.any_passed());
        assert_eq!(evaluate(&field, &tally(0, 1, 2, 0)), Some(Verdict::fail()));
        assert_eq!(evaluate(&field, &tally(0, 1, 2, 3)), Some(Verdict::fail()));
    }

    #[test]
    fn leftover_mines_fail_when_commands_run_out() {
        let field: Field = "..c".parse().unwrap();
        assert_eq!(evaluate(&field, &tally(0, 0, 1, 0)), Some(Verdict::fail()));
        assert_eq!(evaluate(&field, &tally(0, 0, 1, 2)), None);
    }

    #[test]
    fn early_clear_scores_one() {
        let field: Field = "...".parse().unwrap();
        assert_eq!(evaluate(&field, &tally(40, 40, 3, 1)), Some(Verdict::pass(1)));
    }

    #[test]
    fn exhaustive_clear_uses_formula() {
        let field: Field = "...".parse().unwrap();
        let verdict = evaluate(&field, &tally(1, 2, 3, 0));
        assert_eq!(verdict, Some(Verdict::pass(30 - 10 - 2)));
        // Both penalties capped.
        assert_eq!(evaluate(&field, &tally(100, 100, 3, 0)), Some(Verdict::pass(6)));
    }

    #[test]
    fn verdicts_display_keyword_and_score() {
        assert_eq!(Verdict::pass(5).to_string(), "pass 5");
        assert_eq!(Verdict::fail().to_string(), "fail 0");
    }

    #[test]
    fn huge_mine_counts_saturate() {
        let max = u32::max_value();
        assert_eq!(full_score(&tally(0, 0, max, 0)), max);
        let mines = max / 10;
        assert_eq!(full_score(&tally(1, 1, mines, 0)), mines * 10 - 5 - 2);
        assert_eq!(full_score(&tally(max, max, mines, 0)), mines * 2);
    }

    proptest! {
        #[test]
        fn full_score_never_below_floor(
            moves in 0..10_000u32,
            volleys in 0..10_000u32,
            mines in 0..1000u32,
        ) {
            let score = full_score(&tally(moves, volleys, mines, 0));
            prop_assert!(score >= 2 * mines);
            prop_assert!(score <= 10 * mines);
        }
    }
}
