//! Stacks are views over the card arena: membership is whatever cards name
//! the stack as their owner, nothing is stored per stack.

use crate::actor::ActorId;
use crate::deck::{CardId, TableCard};
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StackId {
    Deck,
    Discard,
    Hand(ActorId),
}

impl Display for StackId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deck => write!(f, "deck"),
            Self::Discard => write!(f, "discard pile"),
            Self::Hand(actor) => write!(f, "hand of actor {actor}"),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Stack<'a> {
    id: StackId,
    arena: &'a [TableCard],
}

impl<'a> Stack<'a> {
    pub fn new(id: StackId, arena: &'a [TableCard]) -> Self {
        Self { id, arena }
    }

    /// Member cards in arena order.
    pub fn cards(&self) -> impl Iterator<Item = &'a TableCard> + 'a {
        let (id, arena) = (self.id, self.arena);
        arena.iter().filter(move |card| card.owner == id)
    }

    pub fn len(&self) -> usize {
        self.cards().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().next().is_none()
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.cards().any(|c| c.id == card)
    }

    pub fn cards_top_to_bottom(&self) -> Vec<&'a TableCard> {
        let mut cards: Vec<_> = self.cards().collect();
        cards.sort_by(|a, b| b.height.cmp(&a.height));
        cards
    }

    pub fn cards_bottom_to_top(&self) -> Vec<&'a TableCard> {
        let mut cards: Vec<_> = self.cards().collect();
        cards.sort_by_key(|card| card.height);
        cards
    }

    pub fn cards_best_to_worst(&self) -> Vec<&'a TableCard> {
        let mut cards: Vec<_> = self.cards().collect();
        cards.sort_by(|a, b| b.initiative().cmp(&a.initiative()));
        cards
    }

    /// Highest card by height, or None when empty.
    pub fn top_card(&self) -> Option<&'a TableCard> {
        self.cards().max_by_key(|card| card.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn table_card(id: usize, rank: Rank, owner: StackId, height: u32) -> TableCard {
        TableCard {
            id: CardId(id),
            card: Card {
                suit: Suit::Hearts,
                rank,
            },
            owner,
            height,
            face_up: false,
        }
    }

    fn arena() -> Vec<TableCard> {
        vec![
            table_card(0, Rank::R5, StackId::Deck, 3),
            table_card(1, Rank::King, StackId::Discard, 1),
            table_card(2, Rank::R2, StackId::Deck, 7),
            table_card(3, Rank::Ace, StackId::Deck, 1),
        ]
    }

    #[test]
    fn test_membership_is_filtered_by_owner() {
        let arena = arena();
        let deck = Stack::new(StackId::Deck, &arena);
        assert_eq!(deck.len(), 3);
        assert!(deck.contains(CardId(2)));
        assert!(!deck.contains(CardId(1)));

        let hand = Stack::new(StackId::Hand(ActorId(9)), &arena);
        assert!(hand.is_empty());
        assert!(hand.top_card().is_none());
    }

    #[test]
    fn test_height_orderings() {
        let arena = arena();
        let deck = Stack::new(StackId::Deck, &arena);

        let top_down: Vec<_> = deck.cards_top_to_bottom().iter().map(|c| c.id).collect();
        assert_eq!(top_down, vec![CardId(2), CardId(0), CardId(3)]);

        let bottom_up: Vec<_> = deck.cards_bottom_to_top().iter().map(|c| c.id).collect();
        assert_eq!(bottom_up, vec![CardId(3), CardId(0), CardId(2)]);

        assert_eq!(deck.top_card().map(|c| c.id), Some(CardId(2)));
    }

    #[test]
    fn test_best_to_worst() {
        let arena = arena();
        let deck = Stack::new(StackId::Deck, &arena);
        let ranks: Vec<_> = deck
            .cards_best_to_worst()
            .iter()
            .map(|c| c.card.rank)
            .collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::R5, Rank::R2]);
    }
}
