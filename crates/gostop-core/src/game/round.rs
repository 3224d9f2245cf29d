use crate::game::error::GameError;
use crate::model::captured::CapturedPile;
use crate::model::card::{Card, CardId};
use crate::model::deck::Deck;
use crate::model::floor::Floor;
use crate::model::hand::Hand;
use crate::model::seat::PlayerSeat;
use crate::rules::config::RuleConfig;
use crate::rules::matching::{self, MatchOutcome};
use crate::rules::scoring;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoStop {
    Go,
    Stop,
}

/// An ambiguous capture waiting for an explicit choice. The played card
/// sits here, outside every zone, until the selection resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSelection {
    pub seat: PlayerSeat,
    pub played: Card,
    pub candidates: [Card; 2],
    /// The hand step suspended; the deck draw still follows.
    pub draw_follows: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndReason {
    Stopped(PlayerSeat),
    Exhausted,
    Bomb(PlayerSeat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Option<PlayerSeat>,
    pub scores: [u32; 2],
    pub reason: RoundEndReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    Turn(PlayerSeat),
    AwaitingSelection(PendingSelection),
    GoStopDecision(PlayerSeat),
    Finished(RoundOutcome),
}

enum StepResult {
    Continue,
    Suspended,
    Ended,
}

/// One round of Go-Stop: the zones plus the turn state machine.
///
/// Commands validate their input before touching any zone, so a failed
/// command leaves the state exactly as it was.
#[derive(Debug, Clone)]
pub struct RoundState {
    deck: Deck,
    hands: [Hand; 2],
    floor: Floor,
    captured: [CapturedPile; 2],
    phase: TurnPhase,
    go_counts: [u32; 2],
    sweep_counts: [u32; 2],
    declared_scores: [u32; 2],
    rules: RuleConfig,
    census: usize,
}

impl RoundState {
    pub fn deal(
        mut deck: Deck,
        starting_seat: PlayerSeat,
        rules: RuleConfig,
    ) -> Result<Self, GameError> {
        rules.validate()?;

        let requested = 2 * rules.hand_size + rules.floor_size;
        if requested > deck.len() {
            return Err(GameError::InvalidDeal {
                requested,
                available: deck.len(),
            });
        }

        let mut hands = [Hand::new(), Hand::new()];
        for _ in 0..rules.hand_size {
            for seat in PlayerSeat::BOTH {
                let card = deck.draw().expect("deal size checked against deck");
                hands[seat.index()].add(card);
            }
        }

        let mut floor = Floor::new();
        for _ in 0..rules.floor_size {
            floor.add(deck.draw().expect("deal size checked against deck"));
        }

        let census = deck.len() + requested;
        let state = Self {
            deck,
            hands,
            floor,
            captured: [CapturedPile::new(), CapturedPile::new()],
            phase: TurnPhase::Turn(starting_seat),
            go_counts: [0; 2],
            sweep_counts: [0; 2],
            declared_scores: [0; 2],
            rules,
            census,
        };
        state.debug_assert_conservation();
        Ok(state)
    }

    /// Assemble a round from explicit zones. Panics if the same card
    /// appears twice; intended for tests and host-driven setups.
    pub fn from_parts(
        hands: [Hand; 2],
        floor: Floor,
        deck: Deck,
        starting_seat: PlayerSeat,
        rules: RuleConfig,
    ) -> Self {
        let state = Self {
            census: deck.len() + hands[0].len() + hands[1].len() + floor.len(),
            deck,
            hands,
            floor,
            captured: [CapturedPile::new(), CapturedPile::new()],
            phase: TurnPhase::Turn(starting_seat),
            go_counts: [0; 2],
            sweep_counts: [0; 2],
            declared_scores: [0; 2],
            rules,
        };
        let mut ids = state.card_census();
        let total = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate card across zones");
        state
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    pub fn hand(&self, seat: PlayerSeat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    pub fn captured(&self, seat: PlayerSeat) -> &CapturedPile {
        &self.captured[seat.index()]
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn go_count(&self, seat: PlayerSeat) -> u32 {
        self.go_counts[seat.index()]
    }

    pub fn sweep_count(&self, seat: PlayerSeat) -> u32 {
        self.sweep_counts[seat.index()]
    }

    pub fn pending_selection(&self) -> Option<&PendingSelection> {
        match &self.phase {
            TurnPhase::AwaitingSelection(pending) => Some(pending),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&RoundOutcome> {
        match &self.phase {
            TurnPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Base points of the seat's captured pile, the number the go/stop
    /// threshold is compared against.
    pub fn running_score(&self, seat: PlayerSeat) -> u32 {
        scoring::base_score(&self.captured[seat.index()], &self.rules.scoring).total
    }

    /// Round score with sweep bonuses and the go multiplier applied.
    pub fn final_score(&self, seat: PlayerSeat) -> u32 {
        scoring::round_score(
            &self.captured[seat.index()],
            &self.rules,
            self.go_counts[seat.index()],
            self.sweep_counts[seat.index()],
        )
    }

    pub fn legal_plays(&self, seat: PlayerSeat) -> Vec<Card> {
        match &self.phase {
            TurnPhase::Turn(turn_seat) if *turn_seat == seat => {
                self.hands[seat.index()].cards().to_vec()
            }
            TurnPhase::AwaitingSelection(pending) if pending.seat == seat => {
                pending.candidates.to_vec()
            }
            _ => Vec::new(),
        }
    }

    /// Play one card from the acting seat's hand, then draw and resolve
    /// the top of the deck. Either step may suspend into a selection.
    pub fn play_card(&mut self, seat: PlayerSeat, id: CardId) -> Result<(), GameError> {
        match &self.phase {
            TurnPhase::Turn(turn_seat) if *turn_seat == seat => {}
            TurnPhase::Turn(turn_seat) => {
                return Err(GameError::NotYourTurn {
                    expected: *turn_seat,
                    actual: seat,
                });
            }
            TurnPhase::AwaitingSelection(_) => return Err(GameError::SelectionPending),
            TurnPhase::GoStopDecision(_) => return Err(GameError::GoStopPending),
            TurnPhase::Finished(_) => return Err(GameError::GameAlreadyEnded),
        }

        if !self.hands[seat.index()].contains(id) {
            return Err(GameError::CardNotInHand(id));
        }
        let card = self
            .hands[seat.index()]
            .remove(id)
            .unwrap_or_else(|| panic!("card {id} vanished from the hand"));

        match self.resolve_step(seat, card, true) {
            StepResult::Continue => self.draw_step(seat),
            StepResult::Suspended | StepResult::Ended => {}
        }
        self.debug_assert_conservation();
        Ok(())
    }

    /// Resolve a pending ambiguous capture with one of its candidates.
    pub fn resolve_selection(&mut self, seat: PlayerSeat, id: CardId) -> Result<(), GameError> {
        let pending = match &self.phase {
            TurnPhase::AwaitingSelection(pending) => pending.clone(),
            TurnPhase::Finished(_) => return Err(GameError::GameAlreadyEnded),
            _ => return Err(GameError::NotAwaitingSelection),
        };
        if pending.seat != seat {
            return Err(GameError::NotYourTurn {
                expected: pending.seat,
                actual: seat,
            });
        }
        // The floor may have moved on since the candidates were offered;
        // revalidate rather than trusting the proposal.
        if !pending.candidates.iter().any(|card| card.id == id)
            || !self.floor.contains(id)
        {
            return Err(GameError::CardNotOnFloor(id));
        }

        let chosen = self.floor.take(id);
        self.captured[seat.index()].add(chosen);
        self.captured[seat.index()].add(pending.played);

        self.phase = TurnPhase::Turn(seat);
        if pending.draw_follows {
            self.draw_step(seat);
        } else {
            self.finish_turn(seat);
        }
        self.debug_assert_conservation();
        Ok(())
    }

    /// Bank the round (`Stop`) or raise the stakes and pass the turn (`Go`).
    pub fn decide_go_stop(&mut self, seat: PlayerSeat, choice: GoStop) -> Result<(), GameError> {
        match &self.phase {
            TurnPhase::GoStopDecision(deciding) if *deciding == seat => {}
            TurnPhase::GoStopDecision(deciding) => {
                return Err(GameError::NotYourTurn {
                    expected: *deciding,
                    actual: seat,
                });
            }
            TurnPhase::AwaitingSelection(_) => return Err(GameError::SelectionPending),
            TurnPhase::Turn(_) => return Err(GameError::NotAwaitingGoStop),
            TurnPhase::Finished(_) => return Err(GameError::GameAlreadyEnded),
        }

        match choice {
            GoStop::Stop => self.finish_round(RoundEndReason::Stopped(seat), Some(seat)),
            GoStop::Go => {
                self.go_counts[seat.index()] += 1;
                self.declared_scores[seat.index()] = self.running_score(seat);
                self.advance_turn(seat);
            }
        }
        self.debug_assert_conservation();
        Ok(())
    }

    /// Every card id currently tracked, sorted: deck, hands, floor,
    /// captured piles, and the card held by a pending selection.
    pub fn card_census(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self.deck.cards().iter().map(|card| card.id).collect();
        for hand in &self.hands {
            ids.extend(hand.iter().map(|card| card.id));
        }
        ids.extend(self.floor.iter().map(|card| card.id));
        for pile in &self.captured {
            ids.extend(pile.iter().map(|card| card.id));
        }
        if let TurnPhase::AwaitingSelection(pending) = &self.phase {
            ids.push(pending.played.id);
        }
        ids.sort();
        ids
    }

    fn resolve_step(&mut self, seat: PlayerSeat, card: Card, draw_follows: bool) -> StepResult {
        match matching::resolve(card, &self.floor) {
            MatchOutcome::ToFloor => {
                self.floor.add(card);
                StepResult::Continue
            }
            MatchOutcome::Capture { matched } => {
                let taken = self.floor.take(matched.id);
                self.captured[seat.index()].add(taken);
                self.captured[seat.index()].add(card);
                StepResult::Continue
            }
            MatchOutcome::Choice { candidates } => {
                self.phase = TurnPhase::AwaitingSelection(PendingSelection {
                    seat,
                    played: card,
                    candidates,
                    draw_follows,
                });
                StepResult::Suspended
            }
            MatchOutcome::Sweep { matched } => {
                for floor_card in matched {
                    let taken = self.floor.take(floor_card.id);
                    self.captured[seat.index()].add(taken);
                }
                self.captured[seat.index()].add(card);
                self.sweep_counts[seat.index()] += 1;
                if self.rules.bomb_ends_round_immediately {
                    self.finish_round(RoundEndReason::Bomb(seat), Some(seat));
                    StepResult::Ended
                } else {
                    StepResult::Continue
                }
            }
        }
    }

    fn draw_step(&mut self, seat: PlayerSeat) {
        match self.deck.draw() {
            Some(card) => match self.resolve_step(seat, card, false) {
                StepResult::Continue => self.finish_turn(seat),
                StepResult::Suspended | StepResult::Ended => {}
            },
            None => self.finish_turn(seat),
        }
    }

    fn finish_turn(&mut self, seat: PlayerSeat) {
        let score = self.running_score(seat);
        if score >= self.rules.stop_threshold && score > self.declared_scores[seat.index()] {
            self.phase = TurnPhase::GoStopDecision(seat);
            return;
        }
        self.advance_turn(seat);
    }

    fn advance_turn(&mut self, seat: PlayerSeat) {
        let next = seat.opponent();
        if self.hands[next.index()].is_empty() {
            let scores = [
                self.final_score(PlayerSeat::First),
                self.final_score(PlayerSeat::Second),
            ];
            let winner = if scores[0] > scores[1] {
                Some(PlayerSeat::First)
            } else if scores[1] > scores[0] {
                Some(PlayerSeat::Second)
            } else {
                None
            };
            self.phase = TurnPhase::Finished(RoundOutcome {
                winner,
                scores,
                reason: RoundEndReason::Exhausted,
            });
            return;
        }
        self.phase = TurnPhase::Turn(next);
    }

    fn finish_round(&mut self, reason: RoundEndReason, winner: Option<PlayerSeat>) {
        let scores = [
            self.final_score(PlayerSeat::First),
            self.final_score(PlayerSeat::Second),
        ];
        self.phase = TurnPhase::Finished(RoundOutcome {
            winner,
            scores,
            reason,
        });
    }

    fn debug_assert_conservation(&self) {
        debug_assert!(
            {
                let ids = self.card_census();
                let total = ids.len();
                let mut unique = ids.clone();
                unique.dedup();
                unique.len() == total && total == self.census
            },
            "zone census diverged from the dealt cards"
        );
    }
}
