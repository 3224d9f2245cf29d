use crate::model::card::{Card, CardKind};

/// Cards a player has captured, grouped by category the way they are
/// laid out on the table and consumed by the scoring engine.
#[derive(Debug, Clone, Default)]
pub struct CapturedPile {
    brights: Vec<Card>,
    animals: Vec<Card>,
    ribbons: Vec<Card>,
    junk: Vec<Card>,
}

impl CapturedPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        match card.kind {
            CardKind::Bright { .. } => self.brights.push(card),
            CardKind::Animal(_) => self.animals.push(card),
            CardKind::Ribbon(_) => self.ribbons.push(card),
            CardKind::Junk(_) => self.junk.push(card),
        }
    }

    pub fn brights(&self) -> &[Card] {
        &self.brights
    }

    pub fn animals(&self) -> &[Card] {
        &self.animals
    }

    pub fn ribbons(&self) -> &[Card] {
        &self.ribbons
    }

    pub fn junk(&self) -> &[Card] {
        &self.junk
    }

    pub fn len(&self) -> usize {
        self.brights.len() + self.animals.len() + self.ribbons.len() + self.junk.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.brights
            .iter()
            .chain(self.animals.iter())
            .chain(self.ribbons.iter())
            .chain(self.junk.iter())
    }
}
