// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Helpers that extract amounts, cards and seats from transcript lines.
//!
//! None of these functions fail: a line that doesn't match gives a default or
//! `None` and the caller decides whether to skip it.
use regex::Regex;
use std::sync::LazyLock;

use crate::poker::Card;

/// A dollar amount like `$0.25` or `$3`.
pub(crate) static DOLLARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+(?:\.\d+)?)").unwrap());

/// A bracket group like `[Ah Kd]`.
static BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// The big blind in a `($0.01/$0.02)` stakes group.
static BIG_BLIND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\$(\d+(?:\.\d+)?)").unwrap());

/// A `Seat N: name ($X in chips)` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatLine {
    /// The seat number.
    pub number: u32,
    /// The player name.
    pub name: String,
    /// The player stack.
    pub stack: f64,
}

/// Returns the last dollar amount in a line or 0.0 if there is none.
///
/// Lines often carry more than one amount (`raises $0.04 to $0.06`) and the
/// trailing one is the amount that matters.
pub fn money(line: &str) -> f64 {
    DOLLARS
        .captures_iter(line)
        .last()
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0.0)
}

/// Returns the cards in all the bracket groups of a line, left to right.
pub fn cards(line: &str) -> Vec<Card> {
    BRACKETS
        .captures_iter(line)
        .flat_map(|caps| {
            caps[1]
                .split_whitespace()
                .filter_map(Card::parse)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Returns the big blind from a line with the hand stakes.
pub fn big_blind(line: &str) -> Option<f64> {
    BIG_BLIND
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
        .filter(|bb: &f64| *bb > 0.0)
}

/// Returns the button seat from a `Seat #N is the button` line.
pub fn button_seat(line: &str) -> Option<u32> {
    let start = line.find('#')? + 1;
    let end = line.find(" is")?;
    line.get(start..end)?.parse().ok()
}

/// Parses a `Seat N: name ($X in chips)` line.
pub fn seat(line: &str) -> Option<SeatLine> {
    if !line.starts_with("Seat ") {
        return None;
    }

    let colon = line.find(':')?;
    let number = line.get(5..colon)?.parse().ok()?;

    let open = line.find('(')?;
    let name = line.get(colon + 1..open)?.trim().to_string();
    let stack = money(&line[open..]);

    Some(SeatLine {
        number,
        name,
        stack,
    })
}
