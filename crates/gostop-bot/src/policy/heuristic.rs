use super::{Policy, PolicyContext};
use gostop_core::game::round::GoStop;
use gostop_core::model::card::{Card, CardKind, JunkKind};
use gostop_core::rules::matching::{self, MatchOutcome};
use tracing::{Level, event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotDifficulty {
    /// Plays the first legal card; useful as a floor in comparisons.
    Easy,
    /// Capture-ranking heuristic.
    Normal,
}

/// Default computer opponent.
pub struct HeuristicPolicy {
    difficulty: BotDifficulty,
}

impl HeuristicPolicy {
    pub fn new(difficulty: BotDifficulty) -> Self {
        Self { difficulty }
    }

    pub fn easy() -> Self {
        Self::new(BotDifficulty::Easy)
    }

    pub fn normal() -> Self {
        Self::new(BotDifficulty::Normal)
    }
}

impl Policy for HeuristicPolicy {
    fn choose_play(&mut self, ctx: &PolicyContext) -> Card {
        let legal = ctx.round.legal_plays(ctx.seat);
        assert!(!legal.is_empty(), "policy asked to play from an empty hand");

        if matches!(self.difficulty, BotDifficulty::Easy) {
            let chosen = legal[0];
            log_play(ctx, self.difficulty, &legal, chosen, "easy_first_legal");
            return chosen;
        }

        let chosen = legal
            .iter()
            .copied()
            .max_by_key(|card| play_weight(*card, ctx))
            .expect("at least one legal play");
        log_play(ctx, self.difficulty, &legal, chosen, "capture_ranking");
        chosen
    }

    fn choose_selection(&mut self, ctx: &PolicyContext, candidates: &[Card; 2]) -> Card {
        // Both candidates share the played card's month; taking the
        // more valuable one denies it to the opponent.
        let chosen = if capture_value(candidates[1]) > capture_value(candidates[0]) {
            candidates[1]
        } else {
            candidates[0]
        };
        if tracing::enabled!(Level::INFO) {
            event!(
                target: "gostop_bot::select",
                Level::INFO,
                seat = %ctx.seat,
                first = %candidates[0],
                second = %candidates[1],
                chosen = %chosen,
            );
        }
        chosen
    }

    fn choose_go_stop(&mut self, ctx: &PolicyContext) -> GoStop {
        let seat = ctx.seat;
        let opponent = seat.opponent();
        let own = ctx.round.running_score(seat);
        let theirs = ctx.round.running_score(opponent);
        let deck_left = ctx.round.deck_len();
        let hand_left = ctx.round.hand(seat).len();

        // Keep playing only while there is game left to profit from
        // and the opponent is not about to cross the threshold.
        let opponent_close = theirs + 2 >= ctx.rules.stop_threshold;
        let choice = if hand_left >= 2 && deck_left >= 8 && !opponent_close {
            GoStop::Go
        } else {
            GoStop::Stop
        };

        if tracing::enabled!(Level::INFO) {
            event!(
                target: "gostop_bot::gostop",
                Level::INFO,
                seat = %seat,
                own_score = own,
                opponent_score = theirs,
                deck_left,
                hand_left,
                choice = ?choice,
            );
        }
        choice
    }
}

/// Worth of a card once captured, in rough scoring order.
fn capture_value(card: Card) -> u32 {
    match card.kind {
        CardKind::Bright { .. } => 5,
        CardKind::Animal(_) => 3,
        CardKind::Ribbon(_) => 2,
        CardKind::Junk(JunkKind::Double) => 2,
        CardKind::Junk(JunkKind::Plain) => 1,
    }
}

/// Rank a candidate play: sweeps beat captures beat discards, and
/// richer captures beat poorer ones. Discards shed the least useful
/// card first.
fn play_weight(card: Card, ctx: &PolicyContext) -> u32 {
    match matching::resolve(card, ctx.round.floor()) {
        MatchOutcome::Sweep { matched } => {
            100 + matched.iter().map(|m| capture_value(*m)).sum::<u32>() + capture_value(card)
        }
        MatchOutcome::Capture { matched } => 50 + capture_value(matched) + capture_value(card),
        MatchOutcome::Choice { candidates } => {
            50 + candidates.iter().map(|c| capture_value(*c)).max().unwrap_or(0)
                + capture_value(card)
        }
        // Highest weight among discards goes to the cheapest card.
        MatchOutcome::ToFloor => 10 - capture_value(card),
    }
}

fn log_play(
    ctx: &PolicyContext,
    difficulty: BotDifficulty,
    legal: &[Card],
    chosen: Card,
    reason: &str,
) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    let legal_preview = if legal.len() <= 6 {
        legal
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(",")
    } else {
        format!("{} cards", legal.len())
    };

    event!(
        target: "gostop_bot::play",
        Level::INFO,
        seat = %ctx.seat,
        difficulty = ?difficulty,
        hand_size = ctx.round.hand(ctx.seat).len(),
        floor_size = ctx.round.floor().len(),
        legal = %legal_preview,
        chosen = %chosen,
        reason,
    );
}
