// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types produced by parsing a hand history.
use serde::Serialize;
use std::fmt;

pub use handviewer_cards::{Card, Suit};

use crate::position::Position;

/// A betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    /// Betting before the flop.
    Preflop,
    /// Betting after the first three board cards.
    Flop,
    /// Betting after the fourth board card.
    Turn,
    /// Betting after the last board card.
    River,
}

impl Street {
    /// All streets in dealing order.
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        write!(f, "{street}")
    }
}

/// Options applied to a parsed hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Replace player names with their table position.
    pub anonymize: bool,
    /// Express amounts in big blinds.
    pub bb_mode: bool,
}

/// A player seated at the table.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// The player name, replaced by the position label when anonymized.
    pub name: String,
    /// The 1-based seat number.
    pub seat: u32,
    /// The player has the button.
    pub is_button: bool,
    /// The player is the one the cards were dealt to.
    pub is_hero: bool,
    /// The player collected from the pot.
    pub is_winner: bool,
    /// The table position.
    pub position: Option<Position>,
    /// This player known cards.
    pub cards: Vec<Card>,
    /// The starting stack in dollars.
    pub stack: f64,
    /// The stack formatted for display.
    pub stack_display: String,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, seat: u32, stack: f64) -> Self {
        Self {
            name: name.into(),
            seat,
            is_button: false,
            is_hero: false,
            is_winner: false,
            position: None,
            cards: Vec::default(),
            stack,
            stack_display: format_dollars(stack),
        }
    }
}

/// The result of parsing a hand history.
#[derive(Debug, Clone, Serialize)]
pub struct HandResult {
    /// The players in seat order.
    pub players: Vec<Player>,
    /// The board cards.
    pub board: Vec<Card>,
    /// Preflop action log.
    pub preflop_actions: Vec<String>,
    /// Flop action log.
    pub flop_actions: Vec<String>,
    /// Turn action log.
    pub turn_actions: Vec<String>,
    /// River action log.
    pub river_actions: Vec<String>,
    /// The pot when the hole cards were dealt.
    pub pot_preflop: String,
    /// The pot at the start of the flop.
    pub pot_flop: String,
    /// The pot at the start of the turn.
    pub pot_turn: String,
    /// The pot at the start of the river.
    pub pot_river: String,
    /// The last cards shown by an opponent.
    pub opponent_cards: Vec<Card>,
    /// The hero hole cards.
    pub hero_cards: Vec<Card>,
    /// The hero name.
    pub hero_name: Option<String>,
    /// The big blind size used for conversions.
    pub big_blind: f64,
}

impl Default for HandResult {
    fn default() -> Self {
        Self {
            players: Vec::default(),
            board: Vec::default(),
            preflop_actions: Vec::default(),
            flop_actions: Vec::default(),
            turn_actions: Vec::default(),
            river_actions: Vec::default(),
            pot_preflop: format_dollars(0.0),
            pot_flop: format_dollars(0.0),
            pot_turn: format_dollars(0.0),
            pot_river: format_dollars(0.0),
            opponent_cards: Vec::default(),
            hero_cards: Vec::default(),
            hero_name: None,
            big_blind: 1.0,
        }
    }
}

impl HandResult {
    /// The action log for a street.
    pub fn actions(&self, street: Street) -> &[String] {
        match street {
            Street::Preflop => &self.preflop_actions,
            Street::Flop => &self.flop_actions,
            Street::Turn => &self.turn_actions,
            Street::River => &self.river_actions,
        }
    }

    /// Mutable action log for a street.
    pub fn actions_mut(&mut self, street: Street) -> &mut Vec<String> {
        match street {
            Street::Preflop => &mut self.preflop_actions,
            Street::Flop => &mut self.flop_actions,
            Street::Turn => &mut self.turn_actions,
            Street::River => &mut self.river_actions,
        }
    }

    /// The pot at the start of a street.
    pub fn pot(&self, street: Street) -> &str {
        match street {
            Street::Preflop => &self.pot_preflop,
            Street::Flop => &self.pot_flop,
            Street::Turn => &self.pot_turn,
            Street::River => &self.pot_river,
        }
    }

    /// Mutable pot at the start of a street.
    pub fn pot_mut(&mut self, street: Street) -> &mut String {
        match street {
            Street::Preflop => &mut self.pot_preflop,
            Street::Flop => &mut self.pot_flop,
            Street::Turn => &mut self.pot_turn,
            Street::River => &mut self.pot_river,
        }
    }

    /// The hero player if one was dealt cards.
    pub fn hero(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_hero)
    }

    /// The players that collected from the pot.
    pub fn winners(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_winner)
    }
}

/// Formats a dollar amount with two decimals.
pub fn format_dollars(amount: f64) -> String {
    // Avoid rendering rounding noise as -0.00.
    let amount = if amount.abs() < 0.005 { 0.0 } else { amount };
    format!("${amount:.2}")
}
