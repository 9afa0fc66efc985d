//! Random self-play.
//!
//! A playout drives a [`Game`] through the turn protocol, picking uniformly
//! among the active color's legal moves until the game ends. It exercises the
//! whole rules engine and is used by the `selfplay` command and by tests.

use anyhow::{Context, bail};
use tracing::{debug, info, warn};

use crate::board::{Board, Color};
use crate::constants::MAX_TURNS;
use crate::moves::legal_moves;
use crate::score::{Outcome, Tally};
use crate::turn::{Game, Rules, Turn};

/// Summary of one finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayoutReport {
    pub outcome: Outcome,
    pub tally: Tally,
    /// Discs placed.
    pub moves: u32,
    /// Forced passes taken.
    pub passes: u32,
    pub board: Board,
}

/// Play one game of uniformly random legal moves.
///
/// Fails if the game is still running after `max_turns` protocol steps, which
/// only happens for a mutual stall under `EndRule::FullOrWipeout`.
pub fn play_random_game(
    rng: &mut fastrand::Rng,
    rules: Rules,
    max_turns: usize,
) -> anyhow::Result<PlayoutReport> {
    let mut game = Game::new(rules);
    let mut passes = 0;

    for _ in 0..max_turns {
        match game.advance() {
            Turn::Finished => {
                let outcome = game
                    .outcome()
                    .context("finished game has no outcome")?;
                return Ok(PlayoutReport {
                    outcome,
                    tally: game.tally(),
                    moves: game.move_count(),
                    passes,
                    board: *game.board(),
                });
            }
            Turn::Passed(_) => passes += 1,
            Turn::ToMove(color) => {
                let moves = legal_moves(game.board(), color);
                if moves.is_empty() {
                    bail!("{color:?} was asked to move but has no legal move");
                }
                let mv = moves[rng.usize(..moves.len())];
                game.play(mv)
                    .with_context(|| format!("playing {mv:?} for {color:?}"))?;
            }
        }
    }

    bail!(
        "game did not finish within {max_turns} turns ({} discs placed, {} passes in a row)",
        game.move_count(),
        game.consecutive_passes()
    )
}

/// Aggregate results of a self-play run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelfPlaySummary {
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    /// Games cut off by the turn limit.
    pub unfinished: usize,
    pub total_moves: u64,
}

impl SelfPlaySummary {
    pub fn games(&self) -> usize {
        self.black_wins + self.white_wins + self.draws + self.unfinished
    }

    fn record(&mut self, report: &PlayoutReport) {
        match report.outcome {
            Outcome::Win(Color::Black) => self.black_wins += 1,
            Outcome::Win(Color::White) => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.total_moves += u64::from(report.moves);
    }
}

/// Play `games` random games from one seed.
pub fn run_selfplay(games: usize, seed: u64, rules: Rules, max_turns: usize) -> SelfPlaySummary {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut summary = SelfPlaySummary::default();

    for i in 0..games {
        match play_random_game(&mut rng, rules, max_turns) {
            Ok(report) => {
                debug!(
                    game = i,
                    outcome = ?report.outcome,
                    black = report.tally.black,
                    white = report.tally.white,
                    moves = report.moves,
                    passes = report.passes,
                    "game finished"
                );
                summary.record(&report);
            }
            Err(err) => {
                warn!(game = i, "{err:#}");
                summary.unfinished += 1;
            }
        }
    }

    info!(?summary, "self-play complete");
    summary
}

/// [`play_random_game`] with the default turn limit.
pub fn random_playout(rng: &mut fastrand::Rng, rules: Rules) -> anyhow::Result<PlayoutReport> {
    play_random_game(rng, rules, MAX_TURNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::TieBreak;
    use crate::turn::{EndRule, is_game_over};

    #[test]
    fn test_random_game_finishes() {
        let mut rng = fastrand::Rng::with_seed(7);
        let report = random_playout(&mut rng, Rules::default()).unwrap();
        assert_eq!(report.board.disc_count(), 4 + report.moves as usize);
        assert_eq!(
            report.tally.black + report.tally.white,
            report.board.disc_count() as u32
        );
    }

    #[test]
    fn test_selfplay_is_reproducible() {
        let rules = Rules {
            end_rule: EndRule::DoublePass,
            tie_break: TieBreak::Draw,
        };
        let a = run_selfplay(5, 42, rules, MAX_TURNS);
        let b = run_selfplay(5, 42, rules, MAX_TURNS);
        assert_eq!(a, b);
        assert_eq!(a.games(), 5);
        assert_eq!(a.unfinished, 0);
    }

    #[test]
    fn test_full_or_wipeout_reaches_terminal_board_or_stalls() {
        let mut rng = fastrand::Rng::with_seed(3);
        let rules = Rules {
            end_rule: EndRule::FullOrWipeout,
            ..Rules::default()
        };
        for _ in 0..10 {
            if let Ok(report) = play_random_game(&mut rng, rules, MAX_TURNS) {
                assert!(is_game_over(&report.board));
            }
        }
    }
}
