// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handviewer hand history parser.
//!
//! Parses the transcript of a no-limit hold'em cash game hand into players,
//! positions, cards, pots and per street action logs:
//!
//! ```
//! # use handviewer_core::{ParseOptions, parse};
//! let text = "\
//! PokerStars Hand #1: Hold'em No Limit ($0.01/$0.02 USD)
//! Table 'Gienah' 2-max Seat #1 is the button
//! Seat 1: Villain ($2.00 in chips)
//! Seat 2: Hero ($2.00 in chips)
//! Villain: posts small blind $0.01
//! Hero: posts big blind $0.02
//! *** HOLE CARDS ***
//! Dealt to Hero [Td 9d]
//! Villain: raises $0.04 to $0.06
//! Hero: calls $0.04
//! *** FLOP *** [2h 7d Kc]";
//!
//! let hand = parse(text, ParseOptions::default());
//! assert_eq!(hand.pot_flop, "$0.12");
//! assert_eq!(hand.board.len(), 3);
//! assert_eq!(hand.players[0].position.unwrap().to_string(), "BTN(SB)");
//! ```
//!
//! The parser is best effort, lines it doesn't understand are skipped and
//! the result holds whatever could be extracted.
//!
//! [ParseOptions] enable two transforms, applied in this order: amounts in
//! big blinds ([bb::convert]) and player names replaced by their positions
//! ([anonymize::anonymize]):
//!
//! ```
//! # use handviewer_core::{ParseOptions, parse};
//! let text = "\
//! Hold'em No Limit ($0.01/$0.02 USD)
//! Table 'Gienah' 2-max Seat #1 is the button
//! Seat 1: Villain ($2.00 in chips)
//! Seat 2: Hero ($2.00 in chips)
//! Villain: raises $0.04 to $0.06";
//!
//! let options = ParseOptions { anonymize: true, bb_mode: true };
//! let hand = parse(text, options);
//! assert_eq!(hand.preflop_actions[0], "BTN(SB): raises 2.0 BB to 3.0 BB");
//! assert_eq!(hand.players[1].stack_display, "100.0 BB");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod anonymize;
pub mod bb;
pub mod extract;
pub mod parser;
pub mod poker;
pub mod position;

pub use parser::{HandParser, MAX_INPUT_LEN, parse};
pub use poker::{Card, HandResult, ParseOptions, Player, Street, Suit};
pub use position::Position;
