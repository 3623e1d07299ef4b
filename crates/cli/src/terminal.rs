// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io;

use handviewer_core::{Card, HandResult, Player, Street};

/// Prints a parsed hand.
pub fn print_hand(w: &mut impl io::Write, hand: &HandResult) -> Result<()> {
    if let Some(hero) = &hand.hero_name {
        let text = format!("Hero: {hero} {}\n", cards_text(&hand.hero_cards));
        queue!(w, style::PrintStyledContent(text.as_str().bold()))?;
    }

    queue!(w, style::Print("\n"))?;
    for player in &hand.players {
        print_player(w, player)?;
    }

    if !hand.board.is_empty() {
        queue!(w, style::Print(format!("\nBoard: {}\n", cards_text(&hand.board))))?;
    }

    if !hand.opponent_cards.is_empty() {
        let text = format!("Opponent: {}\n", cards_text(&hand.opponent_cards));
        queue!(w, style::Print(text))?;
    }

    for street in Street::ALL {
        let actions = hand.actions(street);
        if actions.is_empty() {
            continue;
        }

        let header = format!("\n{street} (pot {})\n", hand.pot(street));
        queue!(w, style::PrintStyledContent(header.as_str().dark_cyan()))?;

        for action in actions {
            queue!(w, style::Print(format!("  {action}\n")))?;
        }
    }

    w.flush()?;

    Ok(())
}

fn print_player(w: &mut impl io::Write, p: &Player) -> Result<()> {
    let position = p.position.map(|p| p.to_string()).unwrap_or_default();
    let result = if p.is_winner { "WINNER" } else { "" };

    let text = format!(
        "{:>4} {:<8}|{:<16.16}|{:>10}|{:<12}|{:<6}\n",
        p.seat,
        position,
        p.name,
        p.stack_display,
        cards_text(&p.cards),
        result
    );

    if p.is_winner {
        queue!(w, style::PrintStyledContent(text.as_str().dark_green()))?;
    } else if p.is_hero {
        queue!(w, style::PrintStyledContent(text.as_str().bold()))?;
    } else {
        queue!(w, style::Print(text))?;
    }

    Ok(())
}

fn cards_text(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::code)
        .collect::<Vec<_>>()
        .join(" ")
}
