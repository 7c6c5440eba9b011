use crate::actor::ActorId;
use crate::deck::CardId;
use crate::stack::StackId;
use thiserror::Error;

/// Rejected commands. None of these are fatal; the front end reports them
/// and carries on with the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the {0} is empty")]
    EmptyStack(StackId),
    #[error("{card} is in the {actual}, not the {expected}")]
    InvalidOwnership {
        card: CardId,
        expected: StackId,
        actual: StackId,
    },
    #[error("cannot deal {needed} cards with only {available} left in the deck")]
    InsufficientCards { needed: usize, available: usize },
    #[error("invalid roster change: {0}")]
    InvalidRosterState(String),
    #[error("no actor with id {0}")]
    NoSuchActor(ActorId),
    #[error("no card with id {0}")]
    NoSuchCard(CardId),
}

pub type Result<T> = std::result::Result<T, Error>;
