// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table positions relative to the button.
use serde::{Serialize, Serializer};
use std::fmt;

use crate::poker::Player;

/// A player table position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Small blind.
    SmallBlind,
    /// Big blind.
    BigBlind,
    /// The button.
    Button,
    /// The heads-up button that also posts the small blind.
    ButtonSmallBlind,
    /// Cutoff, the seat before the button.
    Cutoff,
    /// Under the gun, first to act preflop.
    UnderTheGun,
    /// Middle position.
    Middle,
    /// Any other seat, numbered from the small blind starting at 1.
    Generic(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::SmallBlind => write!(f, "SB"),
            Position::BigBlind => write!(f, "BB"),
            Position::Button => write!(f, "BTN"),
            Position::ButtonSmallBlind => write!(f, "BTN(SB)"),
            Position::Cutoff => write!(f, "CO"),
            Position::UnderTheGun => write!(f, "UTG"),
            Position::Middle => write!(f, "MP"),
            Position::Generic(k) => write!(f, "Pos{k}"),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sorts players by seat and assigns each one a position.
///
/// The first player with the button flag anchors the rotation, if no player
/// has it the first seat is used.
pub fn assign(players: &mut [Player]) {
    if players.is_empty() {
        return;
    }

    players.sort_by_key(|p| p.seat);

    let num_players = players.len();
    let button = players.iter().position(|p| p.is_button).unwrap_or(0);

    for (idx, player) in players.iter_mut().enumerate() {
        let offset = (idx + num_players - (button + 1) % num_players) % num_players;
        player.position = Some(label(num_players, offset));
    }
}

/// The position for a player at `offset` seats after the button.
///
/// Offset 0 is the seat to the left of the button. UTG needs at least 5 players
/// and MP exactly 6, other middle seats get a generic label.
pub fn label(num_players: usize, offset: usize) -> Position {
    if num_players == 2 {
        return if offset == 0 {
            Position::BigBlind
        } else {
            Position::ButtonSmallBlind
        };
    }

    match offset {
        0 => Position::SmallBlind,
        1 => Position::BigBlind,
        o if o + 1 == num_players => Position::Button,
        o if o + 2 == num_players => Position::Cutoff,
        2 if num_players >= 5 => Position::UnderTheGun,
        3 if num_players == 6 => Position::Middle,
        o => Position::Generic(o + 1),
    }
}
