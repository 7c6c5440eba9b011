//! The session owns every piece of mutable state and is the only way to
//! change it. Commands either complete or return an [`Error`] with the state
//! left untouched.

use crate::actor::{Actor, ActorId};
use crate::deck::{CardId, Deck, TableCard};
use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::stack::{Stack, StackId};
use crate::turn_order::{self, TurnEntry};
use log::{debug, info};
use rand::rngs::StdRng;

/// What a single interaction with a held card did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// The card was face-down and is now face-up; selection unchanged.
    Revealed,
    /// The card was already face-up and now stands for its actor.
    Selected,
}

#[derive(Debug, Clone)]
pub struct Session {
    deck: Deck,
    roster: Roster,
    rng: StdRng,
}

impl Session {
    /// A session with an empty row and all 54 cards shuffled into the deck.
    pub fn new(rng: StdRng) -> Self {
        let mut session = Self {
            deck: Deck::new(),
            roster: Roster::new(),
            rng,
        };
        session.collect_and_shuffle();
        session
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn stack(&self, id: StackId) -> Stack<'_> {
        self.deck.stack(id)
    }

    pub fn card(&self, id: CardId) -> Result<&TableCard> {
        self.deck.card(id)
    }

    pub fn deck_count(&self) -> usize {
        self.stack(StackId::Deck).len()
    }

    pub fn discard_count(&self) -> usize {
        self.stack(StackId::Discard).len()
    }

    pub fn actor_count(&self) -> usize {
        self.roster.actor_count()
    }

    pub fn actor(&self, id: ActorId) -> Result<&Actor> {
        self.roster.actor(id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.roster.actors()
    }

    pub fn hand(&self, id: ActorId) -> Result<Stack<'_>> {
        Ok(self.actor(id)?.hand(&self.deck))
    }

    pub fn selected_card(&self, id: ActorId) -> Result<Option<CardId>> {
        Ok(self.actor(id)?.selected_card(&self.deck))
    }

    pub fn turn_order(&self) -> Vec<TurnEntry> {
        turn_order::resolve(&self.roster, &self.deck)
    }

    pub fn can_deal_to_all(&self) -> bool {
        self.actor_count() <= self.deck_count()
    }

    pub fn can_draw(&self) -> bool {
        !self.stack(StackId::Deck).is_empty()
    }

    pub fn can_reveal_all(&self) -> bool {
        self.actors()
            .any(|actor| !actor.hand(&self.deck).is_empty())
    }

    pub fn collect_and_shuffle(&mut self) {
        self.deck.collect_and_shuffle(&mut self.rng);
        for actor in self.roster.actors_mut() {
            actor.selection_hint = None;
        }
        info!("collected and shuffled the deck");
    }

    /// Clears every hand to the discard pile, then deals one face-down card
    /// to each actor in roster order.
    pub fn deal_to_all(&mut self) -> Result<()> {
        let (needed, available) = (self.actor_count(), self.deck_count());
        if needed > available {
            return Err(Error::InsufficientCards { needed, available });
        }

        let ids: Vec<_> = self.actors().map(|actor| actor.id).collect();
        for id in &ids {
            self.discard_hand(*id)?;
        }
        for id in &ids {
            self.deck.draw_top(StackId::Hand(*id))?;
        }
        info!("dealt {needed} cards, {} left in the deck", self.deck_count());
        Ok(())
    }

    /// Moves the deck's top card into one actor's hand, face-up.
    pub fn draw_one(&mut self, id: ActorId) -> Result<CardId> {
        if !self.can_draw() {
            return Err(Error::EmptyStack(StackId::Deck));
        }
        self.pin_selection(id)?;
        let card = self.deck.draw_top(StackId::Hand(id))?;
        self.deck.flip_face_up(card)?;
        debug!("actor {id} drew {card}");
        Ok(card)
    }

    /// Flips every held card face-up. Returns how many were face-down.
    pub fn reveal_all(&mut self) -> Result<usize> {
        let held: Vec<_> = self
            .actors()
            .flat_map(|actor| actor.hand(&self.deck).cards().map(|card| card.id))
            .collect();
        let mut flipped = 0;
        for card in held {
            if self.deck.flip_face_up(card)? {
                flipped += 1;
            }
        }
        debug!("revealed {flipped} cards");
        Ok(flipped)
    }

    /// Puts a card face-up on top of the discard pile, wherever it is now.
    /// Returns its new height.
    pub fn discard(&mut self, card: CardId) -> Result<u32> {
        let owner = self.deck.card(card)?.owner;
        let height = self.deck.discard(card, owner)?;
        if let StackId::Hand(id) = owner {
            self.forget_selection(id, card);
        }
        Ok(height)
    }

    /// The reveal-then-select gesture: a face-down card is flipped, a
    /// face-up card becomes the actor's selection.
    pub fn select_card(&mut self, id: ActorId, card: CardId) -> Result<Interaction> {
        let owner = self.deck.card(card)?.owner;
        let hand = self.actor(id)?.stack_id();
        if owner != hand {
            return Err(Error::InvalidOwnership {
                card,
                expected: hand,
                actual: owner,
            });
        }

        if self.deck.flip_face_up(card)? {
            debug!("actor {id} revealed {card}");
            return Ok(Interaction::Revealed);
        }
        self.roster.actor_mut(id)?.selection_hint = Some(card);
        debug!("actor {id} selected {card}");
        Ok(Interaction::Selected)
    }

    pub fn flip_face_up(&mut self, card: CardId) -> Result<bool> {
        self.deck.flip_face_up(card)
    }

    pub fn add_actor(&mut self, row: usize, name: impl Into<String>) -> Result<ActorId> {
        let id = self.roster.add_actor(row, name)?;
        debug!("added actor {id} to row {row}");
        Ok(id)
    }

    /// Discards the actor's hand, then drops the actor from the roster.
    pub fn remove_actor(&mut self, id: ActorId) -> Result<Actor> {
        self.discard_hand(id)?;
        let actor = self.roster.remove_actor(id)?;
        debug!("removed actor {id} ({})", actor.name);
        Ok(actor)
    }

    pub fn add_row(&mut self) -> usize {
        let row = self.roster.add_row();
        debug!("added row {row}");
        row
    }

    /// Discards the hands of everyone in the row, then drops the row.
    pub fn remove_row(&mut self, row: usize) -> Result<()> {
        let ids: Vec<_> = self
            .roster
            .row(row)
            .ok_or_else(|| Error::InvalidRosterState(format!("row {row} does not exist")))?
            .actors
            .iter()
            .map(|actor| actor.id)
            .collect();
        for id in ids {
            self.discard_hand(id)?;
        }
        self.roster.remove_row(row)?;
        debug!("removed row {row}");
        Ok(())
    }

    pub fn rename_actor(&mut self, id: ActorId, name: impl Into<String>) -> Result<()> {
        self.roster.actor_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn cycle_actor_color(&mut self, id: ActorId) -> Result<()> {
        let actor = self.roster.actor_mut(id)?;
        actor.color = actor.color.next();
        Ok(())
    }

    fn discard_hand(&mut self, id: ActorId) -> Result<()> {
        let hand = self.actor(id)?.stack_id();
        let cards: Vec<_> = self
            .stack(hand)
            .cards_bottom_to_top()
            .iter()
            .map(|card| card.id)
            .collect();
        for card in cards {
            self.deck.discard(card, hand)?;
        }
        self.roster.actor_mut(id)?.selection_hint = None;
        Ok(())
    }

    /// Fixes the current derived selection as the hint, so a card arriving
    /// in hand does not silently take over as the top card.
    fn pin_selection(&mut self, id: ActorId) -> Result<()> {
        let selected = self.actor(id)?.selected_card(&self.deck);
        self.roster.actor_mut(id)?.selection_hint = selected;
        Ok(())
    }

    fn forget_selection(&mut self, id: ActorId, card: CardId) {
        if let Ok(actor) = self.roster.actor_mut(id) {
            if actor.selection_hint == Some(card) {
                actor.selection_hint = None;
            }
        }
    }
}
