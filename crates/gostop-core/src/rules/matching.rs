use crate::model::card::Card;
use crate::model::floor::Floor;

/// What playing (or drawing) a card against the current floor does.
/// Exactly one outcome exists for every card/floor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No same-month card on the floor; the card joins it.
    ToFloor,
    /// One same-month card; both go to the acting player's pile.
    Capture { matched: Card },
    /// Two same-month cards; the caller must raise a selection.
    Choice { candidates: [Card; 2] },
    /// Three same-month cards; all four are captured together.
    Sweep { matched: [Card; 3] },
}

pub fn resolve(card: Card, floor: &Floor) -> MatchOutcome {
    let same_month = floor.cards_of_month(card.month);
    match same_month.as_slice() {
        [] => MatchOutcome::ToFloor,
        [matched] => MatchOutcome::Capture { matched: *matched },
        [first, second] => MatchOutcome::Choice {
            candidates: [*first, *second],
        },
        [first, second, third] => MatchOutcome::Sweep {
            matched: [*first, *second, *third],
        },
        more => panic!(
            "floor holds {} cards of month {}, the catalog has only 4",
            more.len(),
            card.month
        ),
    }
}
