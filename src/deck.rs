//! The fixed arena of 54 cards and every placement change made to them.

use crate::cards::Card;
use crate::error::{Error, Result};
use crate::stack::{Stack, StackId};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::{Display, Formatter};

/// Index into the card arena; stable for the life of the session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub usize);

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "card #{}", self.0)
    }
}

/// Total order over all 54 cards. The two jokers share a value and are
/// separated by creation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Initiative {
    pub value: u8,
    pub order: CardId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCard {
    pub id: CardId,
    pub card: Card,
    pub owner: StackId,
    /// Only meaningful relative to other cards in the same stack.
    pub height: u32,
    pub face_up: bool,
}

impl TableCard {
    pub fn initiative(&self) -> Initiative {
        Initiative {
            value: self.card.initiative_value(),
            order: self.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<TableCard>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Height given to the first card placed on an empty discard pile.
    pub const DISCARD_BASE_HEIGHT: u32 = 1;

    /// All cards in the deck stack, face-down, stacked in creation order.
    pub fn new() -> Self {
        let cards = Card::ordered_deck()
            .into_iter()
            .enumerate()
            .map(|(index, card)| TableCard {
                id: CardId(index),
                card,
                owner: StackId::Deck,
                height: index as u32 + 1,
                face_up: false,
            })
            .collect();
        Self { cards }
    }

    pub fn stack(&self, id: StackId) -> Stack<'_> {
        Stack::new(id, &self.cards)
    }

    pub fn card(&self, id: CardId) -> Result<&TableCard> {
        self.cards.get(id.0).ok_or(Error::NoSuchCard(id))
    }

    fn card_mut(&mut self, id: CardId) -> Result<&mut TableCard> {
        self.cards.get_mut(id.0).ok_or(Error::NoSuchCard(id))
    }

    /// Reclaims every card into the deck stack, face-down, with heights set
    /// to a uniform random permutation of `1..=54` in creation order.
    pub fn collect_and_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut heights: Vec<u32> = (1..=self.cards.len() as u32).collect();
        heights.shuffle(rng);
        for (card, height) in self.cards.iter_mut().zip(heights) {
            card.owner = StackId::Deck;
            card.height = height;
            card.face_up = false;
        }
        debug!("collected and shuffled {} cards", self.cards.len());
    }

    /// Moves `id` out of `from` into `to`, keeping its height.
    pub fn move_card(&mut self, id: CardId, from: StackId, to: StackId) -> Result<()> {
        let card = self.card_mut(id)?;
        if card.owner != from {
            return Err(Error::InvalidOwnership {
                card: id,
                expected: from,
                actual: card.owner,
            });
        }
        card.owner = to;
        debug!("moved {} ({}) from {from} to {to}", id, card.card);
        Ok(())
    }

    /// Moves the deck stack's top card to `to`, face-down, and returns it.
    pub fn draw_top(&mut self, to: StackId) -> Result<CardId> {
        let top = self
            .stack(StackId::Deck)
            .top_card()
            .map(|card| card.id)
            .ok_or(Error::EmptyStack(StackId::Deck))?;
        self.move_card(top, StackId::Deck, to)?;
        self.card_mut(top)?.face_up = false;
        Ok(top)
    }

    /// Places `id` face-up on top of the discard pile. Returns the new height.
    pub fn discard(&mut self, id: CardId, from: StackId) -> Result<u32> {
        let height = self
            .stack(StackId::Discard)
            .top_card()
            .map_or(Self::DISCARD_BASE_HEIGHT, |top| top.height + 1);
        self.move_card(id, from, StackId::Discard)?;
        let card = self.card_mut(id)?;
        card.height = height;
        card.face_up = true;
        Ok(height)
    }

    /// Returns whether the card was face-down before the call.
    pub fn flip_face_up(&mut self, id: CardId) -> Result<bool> {
        let card = self.card_mut(id)?;
        let flipped = !card.face_up;
        card.face_up = true;
        Ok(flipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn shuffled(seed: u64) -> Deck {
        let mut deck = Deck::new();
        deck.collect_and_shuffle(&mut StdRng::seed_from_u64(seed));
        deck
    }

    fn identity_counts(cards: &[TableCard]) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.card).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_shuffle_reclaims_canonical_deck() {
        let canonical = identity_counts(&Deck::new().cards);
        for seed in 0..20 {
            let mut deck = shuffled(seed);
            let hand = StackId::Hand(ActorId(0));
            deck.draw_top(hand).unwrap();
            let top = deck.draw_top(hand).unwrap();
            deck.discard(top, hand).unwrap();

            deck.collect_and_shuffle(&mut StdRng::seed_from_u64(seed + 100));
            let stack = deck.stack(StackId::Deck);
            assert_eq!(stack.len(), Card::DECK_SIZE);
            assert!(stack.cards().all(|card| !card.face_up));
            assert_eq!(identity_counts(&deck.cards), canonical);
        }
    }

    #[test]
    fn test_shuffle_heights_are_a_permutation() {
        let deck = shuffled(7);
        let heights: HashSet<_> = deck.cards.iter().map(|c| c.height).collect();
        let expected: HashSet<_> = (1..=Card::DECK_SIZE as u32).collect();
        assert_eq!(heights, expected);
    }

    #[test]
    fn test_shuffle_changes_draw_order() {
        let a = shuffled(1);
        let b = shuffled(2);
        let order = |deck: &Deck| -> Vec<CardId> {
            deck.stack(StackId::Deck)
                .cards_top_to_bottom()
                .iter()
                .map(|c| c.id)
                .collect()
        };
        assert_ne!(order(&a), order(&b));
    }

    #[test]
    fn test_initiative_is_a_strict_total_order() {
        let deck = Deck::new();
        let values: HashSet<_> = deck.cards.iter().map(TableCard::initiative).collect();
        assert_eq!(values.len(), Card::DECK_SIZE);

        let best = deck.stack(StackId::Deck).cards_best_to_worst();
        assert!(best[0].card.is_joker());
        assert!(best[1].card.is_joker());
        assert!(best[0].initiative() > best[1].initiative());
    }

    #[test]
    fn test_discard_onto_empty_pile_has_base_height() {
        let mut deck = shuffled(3);
        let top = deck.stack(StackId::Deck).top_card().unwrap().id;
        assert_eq!(deck.discard(top, StackId::Deck), Ok(1));

        let card = deck.card(top).unwrap();
        assert_eq!(card.owner, StackId::Discard);
        assert!(card.face_up);
        assert_eq!(card.height, 1);
    }

    #[test]
    fn test_discard_stacks_on_top() {
        let mut deck = shuffled(4);
        let mut last = 0;
        for _ in 0..5 {
            let top = deck.stack(StackId::Deck).top_card().unwrap().id;
            let height = deck.discard(top, StackId::Deck).unwrap();
            assert!(height > last);
            last = height;
            assert_eq!(
                deck.stack(StackId::Discard).top_card().map(|c| c.id),
                Some(top)
            );
        }
    }

    #[test]
    fn test_move_rejects_wrong_source() {
        let mut deck = shuffled(5);
        let hand = StackId::Hand(ActorId(3));
        let id = deck.stack(StackId::Deck).top_card().unwrap().id;
        let before = deck.clone();

        assert_eq!(
            deck.discard(id, hand),
            Err(Error::InvalidOwnership {
                card: id,
                expected: hand,
                actual: StackId::Deck,
            })
        );
        assert_eq!(deck, before);
    }

    #[test]
    fn test_draw_from_empty_deck_fails() {
        let mut deck = shuffled(6);
        for _ in 0..Card::DECK_SIZE {
            deck.draw_top(StackId::Discard).unwrap();
        }
        assert_eq!(
            deck.draw_top(StackId::Discard),
            Err(Error::EmptyStack(StackId::Deck))
        );
    }

    #[test]
    fn test_drawn_card_arrives_face_down() {
        let mut deck = shuffled(8);
        let hand = StackId::Hand(ActorId(0));
        let top = deck.stack(StackId::Deck).top_card().unwrap().id;
        assert_eq!(deck.flip_face_up(top), Ok(true));

        assert_eq!(deck.draw_top(hand), Ok(top));
        let card = deck.card(top).unwrap();
        assert_eq!(card.owner, hand);
        assert!(!card.face_up);
    }

    #[test]
    fn test_unknown_card() {
        let mut deck = Deck::new();
        assert_eq!(
            deck.flip_face_up(CardId(54)),
            Err(Error::NoSuchCard(CardId(54)))
        );
    }
}
