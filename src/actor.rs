use crate::deck::{CardId, Deck};
use crate::stack::{Stack, StackId};
use std::fmt::{Display, Formatter};
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub u32);

impl Display for ActorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display attribute only; never consulted for ordering.
#[derive(EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ActorColor {
    #[default]
    White,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl ActorColor {
    /// The next color in the palette, wrapping around.
    pub fn next(self) -> Self {
        Self::iter()
            .skip_while(|color| *color != self)
            .nth(1)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub color: ActorColor,
    /// Last card chosen to stand for this actor. May be stale; see
    /// [`Actor::selected_card`].
    pub selection_hint: Option<CardId>,
}

impl Actor {
    pub fn new(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: ActorColor::default(),
            selection_hint: None,
        }
    }

    pub fn stack_id(&self) -> StackId {
        StackId::Hand(self.id)
    }

    pub fn hand<'a>(&self, deck: &'a Deck) -> Stack<'a> {
        deck.stack(self.stack_id())
    }

    /// The hinted card while it is still in hand, otherwise the hand's top
    /// card, otherwise None. Recomputed on every call.
    pub fn selected_card(&self, deck: &Deck) -> Option<CardId> {
        let hand = self.hand(deck);
        self.selection_hint
            .filter(|hint| hand.contains(*hint))
            .or_else(|| hand.top_card().map(|card| card.id))
    }
}
