// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand history cards definitions.
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt;

/// A card as it appears in a hand history.
///
/// The rank is kept as the token found in the transcript with the `T` rank
/// normalized to `10`, so a card renders to the same code used to name the
/// card images:
///
/// ```
/// # use handviewer_cards::{Card, Suit};
/// let card = Card::parse("Td").unwrap();
/// assert_eq!(card.suit(), Suit::Diamonds);
/// assert_eq!(card.code(), "10D");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: String,
}

impl Card {
    /// Creates a card given a suit and rank.
    pub fn new(suit: Suit, rank: impl Into<String>) -> Self {
        Self {
            suit,
            rank: rank.into(),
        }
    }

    /// Parses a card token like `Ah`, `Td` or `10c`.
    ///
    /// The last character is the suit and the remainder is the rank, tokens
    /// shorter than two characters are not cards.
    pub fn parse(token: &str) -> Option<Card> {
        if token.chars().count() < 2 {
            return None;
        }

        let mut chars = token.chars();
        let suit = chars.next_back().map(Suit::from_letter)?;
        let rank = chars.as_str().replace('T', "10");

        Some(Card { suit, rank })
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// The card display code, rank followed by the suit letter.
    pub fn code(&self) -> String {
        format!("{}{}", self.rank, self.suit.letter())
    }

    /// The name of the image used to render this card.
    pub fn image_name(&self) -> String {
        format!("{}.png", self.code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.letter())
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Card", 3)?;
        s.serialize_field("suit", &self.suit)?;
        s.serialize_field("rank", &self.rank)?;
        s.serialize_field("code", &self.code())?;
        s.end()
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// A suit letter that was not recognized.
    Unknown,
}

impl Suit {
    /// Maps a hand history suit letter to a suit.
    pub fn from_letter(letter: char) -> Suit {
        match letter {
            'h' => Suit::Hearts,
            'd' => Suit::Diamonds,
            'c' => Suit::Clubs,
            's' => Suit::Spades,
            _ => Suit::Unknown,
        }
    }

    /// The suit letter used in card codes, unknown suits render as spades.
    pub fn letter(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Unknown => 'S',
        }
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Unknown => '?',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
