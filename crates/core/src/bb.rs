// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Conversion of dollar amounts to big blinds.
use regex::Captures;

use crate::{
    extract::DOLLARS,
    poker::{HandResult, Street},
};

/// Rewrites pots, action logs and stacks of a hand in big blinds.
pub fn convert(result: &mut HandResult, bb_size: f64) {
    debug_assert!(bb_size > 0.0, "invalid big blind {bb_size}");

    for street in Street::ALL {
        let pot = result.pot_mut(street);
        *pot = convert_text(pot, bb_size);

        for line in result.actions_mut(street).iter_mut() {
            *line = convert_text(line, bb_size);
        }
    }

    for player in &mut result.players {
        player.stack_display = format_bb(player.stack / bb_size);
    }
}

/// Replaces every `$X` amount in a text with `X/bb_size BB`.
///
/// ```
/// # use handviewer_core::bb::convert_text;
/// let line = convert_text("alice: raises $0.04 to $0.06", 0.02);
/// assert_eq!(line, "alice: raises 2.0 BB to 3.0 BB");
/// ```
pub fn convert_text(text: &str, bb_size: f64) -> String {
    DOLLARS
        .replace_all(text, |caps: &Captures<'_>| match caps[1].parse::<f64>() {
            Ok(amount) => format_bb(amount / bb_size),
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}

/// Formats big blinds with one decimal, ties round up.
fn format_bb(amount: f64) -> String {
    format!("{:.1} BB", (amount * 10.0).round() / 10.0)
}
