use crate::model::card::{Card, CardId};
use crate::model::month::Month;

/// The shared face-up cards in the middle of the table.
#[derive(Debug, Clone, Default)]
pub struct Floor {
    cards: Vec<Card>,
}

impl Floor {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove a card that is known to be on the floor. Panics otherwise:
    /// callers validate user input first, so a miss is a resolver defect.
    pub fn take(&mut self, id: CardId) -> Card {
        let index = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .unwrap_or_else(|| panic!("card {id} is not on the floor"));
        self.cards.remove(index)
    }

    pub fn get(&self, id: CardId) -> Option<Card> {
        self.cards.iter().copied().find(|card| card.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id == id)
    }

    pub fn cards_of_month(&self, month: Month) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|card| card.month == month)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
