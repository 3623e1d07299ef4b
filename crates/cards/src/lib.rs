// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handviewer cards types.
//!
//! This crate defines the cards found in a hand history transcript:
//!
//! ```
//! # use handviewer_cards::{Card, Suit};
//! let ah = Card::new(Suit::Hearts, "A");
//! assert_eq!(ah.code(), "AH");
//! ```
//!
//! Cards are usually parsed from the tokens inside a bracket group like
//! `[Ah Td]`, a token that is too short is not a card:
//!
//! ```
//! # use handviewer_cards::Card;
//! let cards = "Ah Td 9"
//!     .split_whitespace()
//!     .filter_map(Card::parse)
//!     .collect::<Vec<_>>();
//! assert_eq!(cards.len(), 2);
//! assert_eq!(cards[1].code(), "10D");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Suit};
