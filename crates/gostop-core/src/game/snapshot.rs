use crate::game::match_state::GameState;
use crate::game::round::TurnPhase;
use crate::model::card::CardId;
use crate::model::seat::PlayerSeat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseKind {
    Turn,
    AwaitingSelection,
    GoStopDecision,
    GameEnded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub seat: PlayerSeat,
    pub played: CardId,
    pub candidates: [CardId; 2],
}

/// Full read-only projection of a game for presentation and automation
/// layers. Everything is by card id; the catalog resolves the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub seed: u64,
    pub round_number: u32,
    pub phase: PhaseKind,
    pub turn: Option<PlayerSeat>,
    pub pending_selection: Option<SelectionSnapshot>,
    pub deck_size: usize,
    pub hands: [Vec<CardId>; 2],
    pub floor: Vec<CardId>,
    pub captured: [Vec<CardId>; 2],
    pub running_scores: [u32; 2],
    pub go_counts: [u32; 2],
    pub totals: [u32; 2],
    pub winner: Option<PlayerSeat>,
}

impl GameSnapshot {
    pub fn capture(game: &GameState) -> Self {
        let round = game.round();
        let (phase, turn) = if game.is_ended() {
            (PhaseKind::GameEnded, None)
        } else {
            match round.phase() {
                TurnPhase::Turn(seat) => (PhaseKind::Turn, Some(*seat)),
                TurnPhase::AwaitingSelection(pending) => {
                    (PhaseKind::AwaitingSelection, Some(pending.seat))
                }
                TurnPhase::GoStopDecision(seat) => (PhaseKind::GoStopDecision, Some(*seat)),
                TurnPhase::Finished(_) => (PhaseKind::GameEnded, None),
            }
        };

        let pending_selection = round.pending_selection().map(|pending| SelectionSnapshot {
            seat: pending.seat,
            played: pending.played.id,
            candidates: [pending.candidates[0].id, pending.candidates[1].id],
        });

        let zone_ids = |seat: PlayerSeat| -> Vec<CardId> {
            round.hand(seat).iter().map(|card| card.id).collect()
        };
        let captured_ids = |seat: PlayerSeat| -> Vec<CardId> {
            round.captured(seat).iter().map(|card| card.id).collect()
        };

        Self {
            seed: game.seed(),
            round_number: game.round_number(),
            phase,
            turn,
            pending_selection,
            deck_size: round.deck_len(),
            hands: [zone_ids(PlayerSeat::First), zone_ids(PlayerSeat::Second)],
            floor: round.floor().iter().map(|card| card.id).collect(),
            captured: [
                captured_ids(PlayerSeat::First),
                captured_ids(PlayerSeat::Second),
            ],
            running_scores: [
                round.running_score(PlayerSeat::First),
                round.running_score(PlayerSeat::Second),
            ],
            go_counts: [
                round.go_count(PlayerSeat::First),
                round.go_count(PlayerSeat::Second),
            ],
            totals: *game.scores().standings(),
            winner: game.winner(),
        }
    }

    pub fn to_json(game: &GameState) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(game))
    }
}
