use crate::model::card::CardId;
use crate::model::seat::PlayerSeat;
use thiserror::Error;

/// Recoverable command failures. The state is untouched whenever one of
/// these is returned; internal invariant violations panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("card {0} is not in the acting player's hand")]
    CardNotInHand(CardId),

    #[error("card {0} is not on the floor")]
    CardNotOnFloor(CardId),

    #[error("deal of {requested} cards exceeds the {available} available")]
    InvalidDeal { requested: usize, available: usize },

    #[error("a capture selection is outstanding")]
    SelectionPending,

    #[error("no capture selection is outstanding")]
    NotAwaitingSelection,

    #[error("a go/stop decision is outstanding")]
    GoStopPending,

    #[error("no go/stop decision is outstanding")]
    NotAwaitingGoStop,

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn {
        expected: PlayerSeat,
        actual: PlayerSeat,
    },

    #[error("the game has already ended")]
    GameAlreadyEnded,

    #[error("invalid rule configuration: {0}")]
    InvalidRuleConfig(String),
}

#[cfg(test)]
mod tests {
    use super::GameError;
    use crate::model::card::CardId;
    use crate::model::seat::PlayerSeat;

    #[test]
    fn errors_render_with_context() {
        let err = GameError::NotYourTurn {
            expected: PlayerSeat::First,
            actual: PlayerSeat::Second,
        };
        assert_eq!(err.to_string(), "it is player 1's turn, not player 2's");

        let err = GameError::CardNotOnFloor(CardId(7));
        assert_eq!(err.to_string(), "card #7 is not on the floor");
    }
}
