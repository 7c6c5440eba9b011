//! Derives the displayed turn order from the roster and current card state.
//! Pure: nothing here mutates, and nothing is remembered between calls.

use crate::actor::{Actor, ActorId};
use crate::deck::{CardId, Deck, Initiative};
use crate::roster::Roster;

/// Tiers are listed in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Empty hand; out of the current round.
    OutOfRound,
    /// Selected card still face-down; rank unknown.
    Hidden,
    /// Selected card face-up; ordered by initiative, best first.
    Revealed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TurnEntry {
    pub actor: ActorId,
    pub tier: Tier,
    pub card: Option<CardId>,
    /// Present only for [`Tier::Revealed`].
    pub initiative: Option<Initiative>,
}

impl TurnEntry {
    fn of(actor: &Actor, deck: &Deck) -> Self {
        let selected = actor
            .selected_card(deck)
            .and_then(|id| deck.card(id).ok());
        match selected {
            None => Self {
                actor: actor.id,
                tier: Tier::OutOfRound,
                card: None,
                initiative: None,
            },
            Some(card) if !card.face_up => Self {
                actor: actor.id,
                tier: Tier::Hidden,
                card: Some(card.id),
                initiative: None,
            },
            Some(card) => Self {
                actor: actor.id,
                tier: Tier::Revealed,
                card: Some(card.id),
                initiative: Some(card.initiative()),
            },
        }
    }
}

/// Out-of-round actors, then hidden, then revealed by descending initiative.
/// Within a tier, ties keep roster order.
pub fn resolve(roster: &Roster, deck: &Deck) -> Vec<TurnEntry> {
    let mut entries: Vec<_> = roster
        .actors()
        .map(|actor| TurnEntry::of(actor, deck))
        .collect();
    // stable: equal keys keep roster order
    entries.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| b.initiative.cmp(&a.initiative))
    });
    entries
}
