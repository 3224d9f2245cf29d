use crate::model::month::Month;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Stable identity of a card within the 48-card catalog.
///
/// The two junk cards of a month are distinct cards; equality on
/// `Card` therefore goes through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    /// One of the three godori birds (February, April, August).
    Bird,
    /// The September sake cup, divertible to junk under some tables.
    SakeCup,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RibbonKind {
    /// Red ribbon with a poem (January, February, March).
    RedPoem,
    /// Blue ribbon (June, September, October).
    Blue,
    /// Plain red ribbon (April, May, July, December).
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JunkKind {
    Plain,
    /// Counts as two junk when scoring (November, December).
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Bright { rain: bool },
    Animal(AnimalKind),
    Ribbon(RibbonKind),
    Junk(JunkKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub month: Month,
    pub kind: CardKind,
}

impl Card {
    pub const fn new(id: CardId, month: Month, kind: CardKind) -> Self {
        Self { id, month, kind }
    }

    pub const fn is_bright(self) -> bool {
        matches!(self.kind, CardKind::Bright { .. })
    }

    pub const fn is_rain_bright(self) -> bool {
        matches!(self.kind, CardKind::Bright { rain: true })
    }

    pub const fn is_animal(self) -> bool {
        matches!(self.kind, CardKind::Animal(_))
    }

    pub const fn is_godori_bird(self) -> bool {
        matches!(self.kind, CardKind::Animal(AnimalKind::Bird))
    }

    pub const fn is_sake_cup(self) -> bool {
        matches!(self.kind, CardKind::Animal(AnimalKind::SakeCup))
    }

    pub const fn is_ribbon(self) -> bool {
        matches!(self.kind, CardKind::Ribbon(_))
    }

    pub const fn is_junk(self) -> bool {
        matches!(self.kind, CardKind::Junk(_))
    }

    /// Junk value when counting the junk pile: doubles count two.
    pub const fn junk_value(self) -> u32 {
        match self.kind {
            CardKind::Junk(JunkKind::Plain) => 1,
            CardKind::Junk(JunkKind::Double) => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            CardKind::Bright { rain: true } => "rain bright",
            CardKind::Bright { rain: false } => "bright",
            CardKind::Animal(AnimalKind::Bird) => "bird",
            CardKind::Animal(AnimalKind::SakeCup) => "sake cup",
            CardKind::Animal(AnimalKind::Plain) => "animal",
            CardKind::Ribbon(RibbonKind::RedPoem) => "poem ribbon",
            CardKind::Ribbon(RibbonKind::Blue) => "blue ribbon",
            CardKind::Ribbon(RibbonKind::Plain) => "ribbon",
            CardKind::Junk(JunkKind::Plain) => "junk",
            CardKind::Junk(JunkKind::Double) => "double junk",
        };
        write!(f, "{} {}", self.month.flower(), kind)
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimalKind, Card, CardId, CardKind, JunkKind};
    use crate::model::month::Month;

    #[test]
    fn rain_bright_is_flagged() {
        let card = Card::new(CardId(44), Month::December, CardKind::Bright { rain: true });
        assert!(card.is_bright());
        assert!(card.is_rain_bright());
    }

    #[test]
    fn double_junk_counts_two() {
        let double = Card::new(CardId(41), Month::November, CardKind::Junk(JunkKind::Double));
        let plain = Card::new(CardId(42), Month::November, CardKind::Junk(JunkKind::Plain));
        assert_eq!(double.junk_value(), 2);
        assert_eq!(plain.junk_value(), 1);
    }

    #[test]
    fn bird_animal_is_godori_material() {
        let bird = Card::new(CardId(4), Month::February, CardKind::Animal(AnimalKind::Bird));
        assert!(bird.is_animal());
        assert!(bird.is_godori_bird());
        assert!(!bird.is_sake_cup());
    }

    #[test]
    fn display_names_flower_and_kind() {
        let card = Card::new(CardId(0), Month::January, CardKind::Bright { rain: false });
        assert_eq!(card.to_string(), "pine bright");
    }
}
