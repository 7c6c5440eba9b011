use std::fmt::{Display, Formatter};
use strum::{EnumIter, IntoEnumIterator};

/// Ordinals double as initiative weight: 2 is lowest, Joker highest.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    R2 = 0,
    R3 = 1,
    R4 = 2,
    R5 = 3,
    R6 = 4,
    R7 = 5,
    R8 = 6,
    R9 = 7,
    R10 = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
    Joker = 13,
}

impl Rank {
    /// The thirteen ranks that pair with a real suit.
    pub fn standard() -> impl Iterator<Item = Rank> {
        Self::iter().filter(|rank| *rank != Rank::Joker)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let v = match self {
            Rank::R2 => "2",
            Rank::R3 => "3",
            Rank::R4 => "4",
            Rank::R5 => "5",
            Rank::R6 => "6",
            Rank::R7 => "7",
            Rank::R8 => "8",
            Rank::R9 => "9",
            Rank::R10 => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Joker => "JK",
        };
        write!(f, "{v}")
    }
}

/// Ordinals are the initiative tie-break between equal ranks.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
    Joker = 4,
}

impl Suit {
    pub fn is_red(self) -> bool {
        match self {
            Self::Hearts | Self::Diamonds => true,
            Self::Spades | Self::Clubs | Self::Joker => false,
        }
    }

    /// The four suits that pair with a standard rank.
    pub fn standard() -> impl Iterator<Item = Suit> {
        Self::iter().filter(|suit| *suit != Suit::Joker)
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let v = match self {
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
            Self::Joker => "★",
        };
        write!(f, "{v}")
    }
}

/// A card's identity. Placement (owner, height, face) lives in [`crate::deck::TableCard`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl Card {
    pub const DECK_SIZE: usize = 54;
    pub const JOKER_COUNT: usize = 2;

    pub const JOKER: Card = Card {
        suit: Suit::Joker,
        rank: Rank::Joker,
    };

    pub fn is_joker(self) -> bool {
        self.rank == Rank::Joker
    }

    /// `rank * 5 + suit`. Unique for every card except the two jokers,
    /// which [`crate::deck::TableCard::initiative`] separates by creation order.
    pub fn initiative_value(self) -> u8 {
        self.rank as u8 * 5 + self.suit as u8
    }

    /// The canonical 54 cards in creation order: suits Clubs to Spades,
    /// ranks 2 to Ace within each suit, then the two jokers.
    pub fn ordered_deck() -> Vec<Self> {
        let mut cards = Vec::with_capacity(Self::DECK_SIZE);
        for suit in Suit::standard() {
            for rank in Rank::standard() {
                cards.push(Card { suit, rank });
            }
        }
        for _ in 0..Self::JOKER_COUNT {
            cards.push(Self::JOKER);
        }
        cards
    }
}
