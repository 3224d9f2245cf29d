use crate::model::card::{AnimalKind, Card, CardId, CardKind, JunkKind, RibbonKind};
use crate::model::month::Month;

const fn card(id: u8, month: Month, kind: CardKind) -> Card {
    Card::new(CardId(id), month, kind)
}

const BRIGHT: CardKind = CardKind::Bright { rain: false };
const RAIN_BRIGHT: CardKind = CardKind::Bright { rain: true };
const BIRD: CardKind = CardKind::Animal(AnimalKind::Bird);
const SAKE_CUP: CardKind = CardKind::Animal(AnimalKind::SakeCup);
const ANIMAL: CardKind = CardKind::Animal(AnimalKind::Plain);
const POEM_RIBBON: CardKind = CardKind::Ribbon(RibbonKind::RedPoem);
const BLUE_RIBBON: CardKind = CardKind::Ribbon(RibbonKind::Blue);
const RIBBON: CardKind = CardKind::Ribbon(RibbonKind::Plain);
const JUNK: CardKind = CardKind::Junk(JunkKind::Plain);
const DOUBLE_JUNK: CardKind = CardKind::Junk(JunkKind::Double);

/// The full hwatu deck, four cards per month. This table is the only
/// place cards are created; every other component queries it.
const CATALOG: [Card; 48] = [
    card(0, Month::January, BRIGHT),
    card(1, Month::January, POEM_RIBBON),
    card(2, Month::January, JUNK),
    card(3, Month::January, JUNK),
    card(4, Month::February, BIRD),
    card(5, Month::February, POEM_RIBBON),
    card(6, Month::February, JUNK),
    card(7, Month::February, JUNK),
    card(8, Month::March, BRIGHT),
    card(9, Month::March, POEM_RIBBON),
    card(10, Month::March, JUNK),
    card(11, Month::March, JUNK),
    card(12, Month::April, BIRD),
    card(13, Month::April, RIBBON),
    card(14, Month::April, JUNK),
    card(15, Month::April, JUNK),
    card(16, Month::May, ANIMAL),
    card(17, Month::May, RIBBON),
    card(18, Month::May, JUNK),
    card(19, Month::May, JUNK),
    card(20, Month::June, ANIMAL),
    card(21, Month::June, BLUE_RIBBON),
    card(22, Month::June, JUNK),
    card(23, Month::June, JUNK),
    card(24, Month::July, ANIMAL),
    card(25, Month::July, RIBBON),
    card(26, Month::July, JUNK),
    card(27, Month::July, JUNK),
    card(28, Month::August, BRIGHT),
    card(29, Month::August, BIRD),
    card(30, Month::August, JUNK),
    card(31, Month::August, JUNK),
    card(32, Month::September, SAKE_CUP),
    card(33, Month::September, BLUE_RIBBON),
    card(34, Month::September, JUNK),
    card(35, Month::September, JUNK),
    card(36, Month::October, ANIMAL),
    card(37, Month::October, BLUE_RIBBON),
    card(38, Month::October, JUNK),
    card(39, Month::October, JUNK),
    card(40, Month::November, BRIGHT),
    card(41, Month::November, DOUBLE_JUNK),
    card(42, Month::November, JUNK),
    card(43, Month::November, JUNK),
    card(44, Month::December, RAIN_BRIGHT),
    card(45, Month::December, ANIMAL),
    card(46, Month::December, RIBBON),
    card(47, Month::December, DOUBLE_JUNK),
];

pub const fn catalog() -> &'static [Card; 48] {
    &CATALOG
}

/// Look a card up by its stable id.
pub fn lookup(id: CardId) -> Option<Card> {
    CATALOG.get(id.index()).copied()
}

pub fn cards_of_month(month: Month) -> impl Iterator<Item = Card> {
    CATALOG.iter().copied().filter(move |card| card.month == month)
}

#[cfg(test)]
mod tests {
    use super::{catalog, cards_of_month, lookup};
    use crate::model::card::CardId;
    use crate::model::month::Month;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_48_unique_ids_in_order() {
        let deck = catalog();
        assert_eq!(deck.len(), 48);
        let ids: HashSet<_> = deck.iter().map(|card| card.id).collect();
        assert_eq!(ids.len(), 48);
        for (index, card) in deck.iter().enumerate() {
            assert_eq!(card.id.index(), index);
        }
    }

    #[test]
    fn every_month_has_four_cards() {
        for month in Month::ALL {
            assert_eq!(cards_of_month(month).count(), 4, "month {month}");
        }
    }

    #[test]
    fn category_counts_match_the_deck() {
        let deck = catalog();
        assert_eq!(deck.iter().filter(|c| c.is_bright()).count(), 5);
        assert_eq!(deck.iter().filter(|c| c.is_animal()).count(), 9);
        assert_eq!(deck.iter().filter(|c| c.is_ribbon()).count(), 10);
        assert_eq!(deck.iter().filter(|c| c.is_junk()).count(), 24);
    }

    #[test]
    fn special_flags_sit_on_the_expected_months() {
        let deck = catalog();
        let rain: Vec<_> = deck.iter().filter(|c| c.is_rain_bright()).collect();
        assert_eq!(rain.len(), 1);
        assert_eq!(rain[0].month, Month::December);

        let birds: Vec<_> = deck.iter().filter(|c| c.is_godori_bird()).collect();
        let bird_months: Vec<_> = birds.iter().map(|c| c.month).collect();
        assert_eq!(
            bird_months,
            vec![Month::February, Month::April, Month::August]
        );

        let doubles: Vec<_> = deck.iter().filter(|c| c.junk_value() == 2).collect();
        let double_months: Vec<_> = doubles.iter().map(|c| c.month).collect();
        assert_eq!(double_months, vec![Month::November, Month::December]);

        assert!(deck.iter().any(|c| c.is_sake_cup() && c.month == Month::September));
    }

    #[test]
    fn lookup_resolves_ids_and_rejects_out_of_range() {
        let card = lookup(CardId(44)).unwrap();
        assert!(card.is_rain_bright());
        assert!(lookup(CardId(48)).is_none());
    }
}
