use crate::game::error::GameError;
use crate::game::round::{GoStop, RoundOutcome, RoundState, TurnPhase};
use crate::game::snapshot::GameSnapshot;
use crate::model::card::{Card, CardId};
use crate::model::deck::Deck;
use crate::model::seat::PlayerSeat;
use crate::rules::config::RuleConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Cumulative points across rounds; only a round's winner banks points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    totals: [u32; 2],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 2] }
    }

    pub fn add(&mut self, seat: PlayerSeat, points: u32) {
        self.totals[seat.index()] += points;
    }

    pub fn score(&self, seat: PlayerSeat) -> u32 {
        self.totals[seat.index()]
    }

    pub fn standings(&self) -> &[u32; 2] {
        &self.totals
    }

    pub fn leader(&self) -> Option<PlayerSeat> {
        match self.totals[0].cmp(&self.totals[1]) {
            core::cmp::Ordering::Greater => Some(PlayerSeat::First),
            core::cmp::Ordering::Less => Some(PlayerSeat::Second),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// The authoritative game: one round at a time, dealt from a single
/// seeded RNG stream so a seed reproduces the whole match.
#[derive(Debug, Clone)]
pub struct GameState {
    rules: RuleConfig,
    scores: ScoreBoard,
    round_number: u32,
    current_round: RoundState,
    history: Vec<RoundOutcome>,
    leader: PlayerSeat,
    ended: bool,
    rng: StdRng,
    seed: u64,
}

impl GameState {
    pub fn new(rules: RuleConfig) -> Result<Self, GameError> {
        Self::with_seed(rules, rand::random())
    }

    pub fn with_seed(rules: RuleConfig, seed: u64) -> Result<Self, GameError> {
        rules.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let leader = PlayerSeat::First;
        let current_round =
            RoundState::deal(Deck::shuffled(&mut rng), leader, rules.clone())?;
        Ok(Self {
            rules,
            scores: ScoreBoard::new(),
            round_number: 1,
            current_round,
            history: Vec::new(),
            leader,
            ended: false,
            rng,
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    pub fn round(&self) -> &RoundState {
        &self.current_round
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn history(&self) -> &[RoundOutcome] {
        &self.history
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Overall winner once the game has ended; `None` while it runs or
    /// on a drawn game.
    pub fn winner(&self) -> Option<PlayerSeat> {
        if self.ended { self.scores.leader() } else { None }
    }

    pub fn legal_plays(&self, seat: PlayerSeat) -> Vec<Card> {
        if self.ended {
            return Vec::new();
        }
        self.current_round.legal_plays(seat)
    }

    /// Read-only projection of the whole game for hosts.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    pub fn play_card(&mut self, seat: PlayerSeat, id: CardId) -> Result<(), GameError> {
        self.guard_running()?;
        self.current_round.play_card(seat, id)?;
        self.settle_round();
        Ok(())
    }

    pub fn resolve_selection(&mut self, seat: PlayerSeat, id: CardId) -> Result<(), GameError> {
        self.guard_running()?;
        self.current_round.resolve_selection(seat, id)?;
        self.settle_round();
        Ok(())
    }

    pub fn decide_go_stop(&mut self, seat: PlayerSeat, choice: GoStop) -> Result<(), GameError> {
        self.guard_running()?;
        self.current_round.decide_go_stop(seat, choice)?;
        self.settle_round();
        Ok(())
    }

    fn guard_running(&self) -> Result<(), GameError> {
        if self.ended {
            return Err(GameError::GameAlreadyEnded);
        }
        Ok(())
    }

    /// Fold a finished round into the match: bank the winner's points,
    /// then deal the next round or end the game.
    fn settle_round(&mut self) {
        let outcome = match self.current_round.phase() {
            TurnPhase::Finished(outcome) => *outcome,
            _ => return,
        };

        if let Some(winner) = outcome.winner {
            self.scores.add(winner, outcome.scores[winner.index()]);
        }
        self.history.push(outcome);

        if self.round_number >= self.rules.rounds_per_game {
            self.ended = true;
            return;
        }

        self.round_number += 1;
        // The round winner leads the next deal; a drawn round passes
        // the lead across the table.
        self.leader = outcome.winner.unwrap_or(self.leader.opponent());
        self.current_round = RoundState::deal(
            Deck::shuffled(&mut self.rng),
            self.leader,
            self.rules.clone(),
        )
        .expect("validated rules always fit a full deck");
    }
}
