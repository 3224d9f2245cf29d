use gostop_bot::{Policy, PolicyContext};
use gostop_core::game::error::GameError;
use gostop_core::game::match_state::GameState;
use gostop_core::game::round::TurnPhase;
use gostop_core::model::seat::PlayerSeat;
use gostop_core::rules::config::RuleConfig;
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

/// Commands per game before the runner declares a stall. Far above any
/// legal game; a hit means an engine or policy defect.
const MAX_COMMANDS: usize = 10_000;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("game with seed {seed} did not finish within {limit} commands")]
    Stalled { seed: u64, limit: usize },
}

#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    pub seed: u64,
    pub winner: Option<PlayerSeat>,
    pub scores: [u32; 2],
    pub rounds: usize,
    pub commands: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub games: usize,
    pub base_seed: u64,
    pub wins: [usize; 2],
    pub draws: usize,
    pub reports: Vec<GameReport>,
}

/// Plays seeded bot-vs-bot games and aggregates the results. Game `i`
/// uses `base_seed + i`, so a whole run reproduces from one number.
pub struct GameRunner {
    rules: RuleConfig,
    base_seed: u64,
    games: usize,
}

impl GameRunner {
    pub fn new(rules: RuleConfig, base_seed: u64, games: usize) -> Result<Self, RunnerError> {
        rules.validate()?;
        Ok(Self {
            rules,
            base_seed,
            games,
        })
    }

    pub fn run(&self, policies: &mut [Box<dyn Policy>; 2]) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary {
            games: self.games,
            base_seed: self.base_seed,
            wins: [0; 2],
            draws: 0,
            reports: Vec::with_capacity(self.games),
        };

        for index in 0..self.games {
            let seed = self.base_seed.wrapping_add(index as u64);
            let report = self.play_one(seed, policies)?;

            match report.winner {
                Some(seat) => summary.wins[seat.index()] += 1,
                None => summary.draws += 1,
            }
            event!(
                target: "gostop_cli::game",
                Level::INFO,
                seed = report.seed,
                winner = ?report.winner,
                first_score = report.scores[0],
                second_score = report.scores[1],
                rounds = report.rounds,
                commands = report.commands,
            );
            summary.reports.push(report);
        }

        Ok(summary)
    }

    fn play_one(
        &self,
        seed: u64,
        policies: &mut [Box<dyn Policy>; 2],
    ) -> Result<GameReport, RunnerError> {
        let mut game = GameState::with_seed(self.rules.clone(), seed)?;
        let mut commands = 0;

        while !game.is_ended() {
            commands += 1;
            if commands > MAX_COMMANDS {
                return Err(RunnerError::Stalled {
                    seed,
                    limit: MAX_COMMANDS,
                });
            }

            let phase = game.round().phase().clone();
            match phase {
                TurnPhase::Turn(seat) => {
                    let card = {
                        let ctx = PolicyContext::new(seat, game.round());
                        policies[seat.index()].choose_play(&ctx)
                    };
                    game.play_card(seat, card.id)?;
                }
                TurnPhase::AwaitingSelection(pending) => {
                    let seat = pending.seat;
                    let choice = {
                        let ctx = PolicyContext::new(seat, game.round());
                        policies[seat.index()].choose_selection(&ctx, &pending.candidates)
                    };
                    game.resolve_selection(seat, choice.id)?;
                }
                TurnPhase::GoStopDecision(seat) => {
                    let choice = {
                        let ctx = PolicyContext::new(seat, game.round());
                        policies[seat.index()].choose_go_stop(&ctx)
                    };
                    game.decide_go_stop(seat, choice)?;
                }
                TurnPhase::Finished(_) => {
                    unreachable!("finished rounds are settled inside GameState")
                }
            }
        }

        Ok(GameReport {
            seed,
            winner: game.winner(),
            scores: *game.scores().standings(),
            rounds: game.history().len(),
            commands,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{GameRunner, RunnerError};
    use gostop_bot::{HeuristicPolicy, Policy};
    use gostop_core::rules::config::RuleConfig;

    fn policies() -> [Box<dyn Policy>; 2] {
        [
            Box::new(HeuristicPolicy::normal()),
            Box::new(HeuristicPolicy::normal()),
        ]
    }

    #[test]
    fn runner_completes_a_seeded_batch() {
        let runner = GameRunner::new(RuleConfig::default(), 4242, 3).unwrap();
        let summary = runner.run(&mut policies()).unwrap();

        assert_eq!(summary.games, 3);
        assert_eq!(summary.reports.len(), 3);
        assert_eq!(
            summary.wins[0] + summary.wins[1] + summary.draws,
            3,
            "every game ends with a winner or a draw"
        );
        assert_eq!(summary.reports[0].seed, 4242);
        assert_eq!(summary.reports[2].seed, 4244);
    }

    #[test]
    fn same_base_seed_reproduces_the_batch() {
        let runner = GameRunner::new(RuleConfig::default(), 99, 2).unwrap();
        let first = runner.run(&mut policies()).unwrap();
        let second = runner.run(&mut policies()).unwrap();

        for (a, b) in first.reports.iter().zip(second.reports.iter()) {
            assert_eq!(a.winner, b.winner);
            assert_eq!(a.scores, b.scores);
            assert_eq!(a.commands, b.commands);
        }
    }

    #[test]
    fn invalid_rules_fail_at_construction() {
        let rules = RuleConfig {
            hand_size: 30,
            ..RuleConfig::default()
        };
        assert!(matches!(
            GameRunner::new(rules, 1, 1),
            Err(RunnerError::Game(_))
        ));
    }

    #[test]
    fn mixed_difficulties_play_out() {
        let runner = GameRunner::new(RuleConfig::default(), 7, 2).unwrap();
        let mut policies: [Box<dyn Policy>; 2] = [
            Box::new(HeuristicPolicy::easy()),
            Box::new(HeuristicPolicy::normal()),
        ];
        let summary = runner.run(&mut policies).unwrap();
        assert_eq!(summary.reports.len(), 2);
    }
}
