use gostop_core::game::error::GameError;
use gostop_core::game::match_state::GameState;
use gostop_core::game::round::{GoStop, TurnPhase};
use gostop_core::game::snapshot::GameSnapshot;
use gostop_core::model::seat::PlayerSeat;
use gostop_core::rules::config::RuleConfig;

/// Drive a game to its end with a fixed naive strategy: first legal
/// card, first candidate, and the given go/stop answer.
fn drive(game: &mut GameState, answer: GoStop) {
    let mut steps = 0;
    while !game.is_ended() {
        steps += 1;
        assert!(steps < 2000, "game did not terminate");

        let phase = game.round().phase().clone();
        match phase {
            TurnPhase::Turn(seat) => {
                let card = game.legal_plays(seat)[0];
                game.play_card(seat, card.id).unwrap();
            }
            TurnPhase::AwaitingSelection(pending) => {
                game.resolve_selection(pending.seat, pending.candidates[0].id)
                    .unwrap();
            }
            TurnPhase::GoStopDecision(seat) => {
                game.decide_go_stop(seat, answer).unwrap();
            }
            TurnPhase::Finished(_) => unreachable!("GameState settles finished rounds"),
        }

        assert_conservation(game);
    }
}

fn assert_conservation(game: &GameState) {
    let ids = game.round().card_census();
    assert_eq!(ids.len(), 48, "cards lost or duplicated");
    for (index, id) in ids.iter().enumerate() {
        assert_eq!(id.index(), index, "card id {id} out of place");
    }
}

#[test]
fn every_seed_conserves_all_48_cards() {
    for seed in 0..25 {
        let mut game = GameState::with_seed(RuleConfig::default(), seed).unwrap();
        assert_conservation(&game);
        drive(&mut game, GoStop::Stop);
        assert_conservation(&game);
    }
}

#[test]
fn replaying_a_seed_reproduces_the_game() {
    let mut game_a = GameState::with_seed(RuleConfig::default(), 777).unwrap();
    let mut game_b = GameState::with_seed(RuleConfig::default(), 777).unwrap();

    drive(&mut game_a, GoStop::Stop);
    drive(&mut game_b, GoStop::Stop);

    assert_eq!(game_a.snapshot(), GameSnapshot::capture(&game_b));
    assert_eq!(game_a.history(), game_b.history());
    assert_eq!(game_a.winner(), game_b.winner());
}

#[test]
fn answering_go_forever_still_terminates() {
    for seed in 0..10 {
        let mut game = GameState::with_seed(RuleConfig::default(), seed).unwrap();
        drive(&mut game, GoStop::Go);
        assert!(game.is_ended());
    }
}

#[test]
fn multi_round_games_accumulate_history() {
    let rules = RuleConfig {
        rounds_per_game: 3,
        ..RuleConfig::default()
    };
    let mut game = GameState::with_seed(rules, 11).unwrap();
    drive(&mut game, GoStop::Stop);

    assert!(game.is_ended());
    assert_eq!(game.history().len(), 3);
    let banked: u32 = PlayerSeat::BOTH
        .iter()
        .map(|seat| game.scores().score(*seat))
        .sum();
    let won: u32 = game
        .history()
        .iter()
        .filter_map(|outcome| outcome.winner.map(|w| outcome.scores[w.index()]))
        .sum();
    assert_eq!(banked, won, "only round winners bank points");
}

#[test]
fn commands_after_the_end_are_rejected() {
    let mut game = GameState::with_seed(RuleConfig::default(), 3).unwrap();
    drive(&mut game, GoStop::Stop);

    let any_card = gostop_core::model::catalog::catalog()[0];
    for seat in PlayerSeat::BOTH {
        assert_eq!(
            game.play_card(seat, any_card.id),
            Err(GameError::GameAlreadyEnded)
        );
        assert_eq!(
            game.resolve_selection(seat, any_card.id),
            Err(GameError::GameAlreadyEnded)
        );
        assert_eq!(
            game.decide_go_stop(seat, GoStop::Stop),
            Err(GameError::GameAlreadyEnded)
        );
    }
    assert!(game.legal_plays(PlayerSeat::First).is_empty());
}
