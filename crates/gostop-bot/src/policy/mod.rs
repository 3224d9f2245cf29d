mod heuristic;

pub use heuristic::{BotDifficulty, HeuristicPolicy};

use gostop_core::game::round::{GoStop, RoundState};
use gostop_core::model::card::Card;
use gostop_core::model::seat::PlayerSeat;
use gostop_core::rules::config::RuleConfig;

/// Context provided to policies for decision-making.
pub struct PolicyContext<'a> {
    pub seat: PlayerSeat,
    pub round: &'a RoundState,
    pub rules: &'a RuleConfig,
}

impl<'a> PolicyContext<'a> {
    pub fn new(seat: PlayerSeat, round: &'a RoundState) -> Self {
        Self {
            seat,
            round,
            rules: round.rules(),
        }
    }
}

/// Decision points the turn controller needs filled in for a
/// computer-driven seat. Implementations are swappable; the state
/// machine never branches on which one is plugged in.
pub trait Policy: Send {
    /// Choose one card to play from the hand.
    fn choose_play(&mut self, ctx: &PolicyContext) -> Card;

    /// Choose between two ambiguous capture candidates.
    fn choose_selection(&mut self, ctx: &PolicyContext, candidates: &[Card; 2]) -> Card;

    /// Bank the round or keep playing for a bigger multiplier.
    fn choose_go_stop(&mut self, ctx: &PolicyContext) -> GoStop;
}
