use crate::model::card::{Card, CardId};

/// A player's private cards, kept sorted by month for stable display.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(index))
    }

    pub fn get(&self, id: CardId) -> Option<Card> {
        self.cards.iter().copied().find(|card| card.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id == id)
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

    fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| a.month.cmp(&b.month).then(a.id.cmp(&b.id)));
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::catalog;
    use crate::model::card::CardId;

    #[test]
    fn add_and_remove_cards() {
        let mut hand = Hand::new();
        let card = catalog::lookup(CardId(10)).unwrap();
        hand.add(card);
        assert!(hand.contains(card.id));
        assert_eq!(hand.remove(card.id), Some(card));
        assert!(!hand.contains(card.id));
        assert_eq!(hand.remove(card.id), None);
    }

    #[test]
    fn cards_are_sorted_by_month() {
        let mut hand = Hand::new();
        hand.add(catalog::lookup(CardId(44)).unwrap());
        hand.add(catalog::lookup(CardId(0)).unwrap());
        hand.add(catalog::lookup(CardId(20)).unwrap());
        let months: Vec<_> = hand.iter().map(|card| card.month.number()).collect();
        assert_eq!(months, vec![1, 6, 12]);
    }
}
