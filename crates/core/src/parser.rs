// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand history parser.
//!
//! The transcript is walked twice: a setup pass that finds the stakes, the
//! button and the seated players, and a body pass that tracks the street and
//! the pot while it collects cards and actions. Lines that cannot be
//! understood are skipped, parsing never fails.
use ahash::AHashMap;
use log::{debug, warn};

use crate::{
    anonymize, bb, extract,
    poker::{HandResult, ParseOptions, Player, Street, format_dollars},
    position,
};

/// The largest transcript accepted, longer input is truncated.
pub const MAX_INPUT_LEN: usize = 1 << 20;

/// Keywords of lines that go in the action log.
const ACTION_KEYWORDS: [&str; 6] = ["folds", "checks", "calls", "bets", "raises", "posts"];

/// Parses hand histories with a given set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandParser {
    options: ParseOptions,
}

impl HandParser {
    /// Creates a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parses a hand history transcript.
    pub fn parse(&self, text: &str) -> HandResult {
        let text = bounded(text);
        let lines = text.split('\n').map(str::trim).collect::<Vec<_>>();

        let mut setup = Setup::default();
        for line in &lines {
            setup.step(line);
        }

        let mut result = setup.finish();

        let mut body = Body::default();
        for line in &lines {
            body.step(line, &mut result);
        }

        debug!(
            "Parsed {} players, {} board cards, last street {}",
            result.players.len(),
            result.board.len(),
            body.street
        );

        if self.options.bb_mode {
            let big_blind = result.big_blind;
            bb::convert(&mut result, big_blind);
        }

        if self.options.anonymize {
            anonymize::anonymize(&mut result);
        }

        result
    }
}

/// Parses a hand history transcript with the given options.
pub fn parse(text: &str, options: ParseOptions) -> HandResult {
    HandParser::new(options).parse(text)
}

/// State of the setup pass.
#[derive(Debug, Default)]
struct Setup {
    big_blind: Option<f64>,
    button_seat: Option<u32>,
    players: Vec<Player>,
}

impl Setup {
    fn step(&mut self, line: &str) {
        if self.big_blind.is_none() && line.contains("($") && line.contains('/') {
            self.big_blind = extract::big_blind(line);
        }

        if line.contains("is the button") {
            match extract::button_seat(line) {
                Some(seat) => self.button_seat = Some(seat),
                None => debug!("Skipping button line: {line}"),
            }
        }

        if line.starts_with("Seat ") && line.contains("in chips") {
            match extract::seat(line) {
                Some(seat) => {
                    let mut player = Player::new(seat.name, seat.number, seat.stack);
                    // The button line comes before the seats.
                    player.is_button = self.button_seat == Some(seat.number);
                    self.players.push(player);
                }
                None => debug!("Skipping seat line: {line}"),
            }
        }
    }

    fn finish(self) -> HandResult {
        let mut players = self.players;
        position::assign(&mut players);

        HandResult {
            players,
            big_blind: self.big_blind.unwrap_or(1.0),
            ..HandResult::default()
        }
    }
}

/// State of the body pass.
#[derive(Debug)]
struct Body {
    street: Street,
    pot: f64,
    commitments: AHashMap<String, f64>,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            street: Street::Preflop,
            pot: 0.0,
            commitments: AHashMap::default(),
        }
    }
}

impl Body {
    fn step(&mut self, line: &str, result: &mut HandResult) {
        if line.is_empty() {
            return;
        }

        self.street_marker(line, result);

        if let Some(rest) = line.strip_prefix("Dealt to") {
            dealt_to(rest, line, result);
        } else if line.contains("shows [") || line.contains("showed [") {
            shows(line, result);
        }

        self.move_money(line);

        let collected = line
            .find(" collected")
            .filter(|_| line.contains(" collected ") && line.contains(" from pot"));
        if let Some(idx) = collected {
            let winner = line[..idx].trim();
            for p in result.players.iter_mut().filter(|p| p.name == winner) {
                p.is_winner = true;
            }
        }

        if line.contains(':') && is_action(line) {
            result.actions_mut(self.street).push(line.to_string());
        }
    }

    fn street_marker(&mut self, line: &str, result: &mut HandResult) {
        let street = if line.contains("*** HOLE CARDS ***") {
            Street::Preflop
        } else if line.contains("*** FLOP ***") {
            Street::Flop
        } else if line.contains("*** TURN ***") {
            Street::Turn
        } else if line.contains("*** RIVER ***") {
            Street::River
        } else {
            return;
        };

        *result.pot_mut(street) = format_dollars(self.pot);

        if street == Street::Preflop {
            return;
        }

        if street <= self.street {
            debug!("Repeated {street} marker: {line}");
        }

        self.street = street;
        self.commitments.clear();

        let cards = extract::cards(line);
        if street == Street::Flop {
            result.board.extend(cards);
        } else if let Some(card) = cards.into_iter().last() {
            result.board.push(card);
        }
    }

    fn move_money(&mut self, line: &str) {
        let name = line.find(':').map(|idx| &line[..idx]).unwrap_or_default();

        if (line.contains("posts") || line.contains("bets") || line.contains("calls"))
            && line.contains('$')
        {
            let amount = extract::money(line);
            self.pot += amount;
            *self.commitments.entry(name.to_string()).or_default() += amount;
        } else if line.contains("raises") && line.contains("to $") {
            // Raises are to a total for the street.
            let target = extract::money(line);
            let committed = self.commitments.get(name).copied().unwrap_or_default();
            let delta = target - committed;
            if delta > 0.0 {
                self.pot += delta;
            }

            self.commitments.insert(name.to_string(), target);
        } else if line.contains("Uncalled bet") && line.contains("returned to") {
            self.pot -= extract::money(line);
        }
    }
}

/// Handles a `Dealt to name [cards]` line.
fn dealt_to(rest: &str, line: &str, result: &mut HandResult) {
    let Some(open) = rest.rfind('[') else {
        debug!("Skipping dealt line without cards: {line}");
        return;
    };

    let name = rest[..open].trim();
    let cards = extract::cards(line);

    for p in result.players.iter_mut().filter(|p| p.name == name) {
        p.is_hero = true;
        p.cards = cards.clone();
    }

    result.hero_name = Some(name.to_string());
    result.hero_cards = cards;
}

/// Handles a `name: shows [cards]` or `Seat N: name showed [cards]` line.
fn shows(line: &str, result: &mut HandResult) {
    let Some(colon) = line.find(':') else {
        debug!("Skipping shows line without player: {line}");
        return;
    };

    let owner = line[..colon].trim();
    let cards = extract::cards(line);

    // Summary lines name the player by seat.
    let seat = owner
        .strip_prefix("Seat ")
        .and_then(|n| n.trim().parse::<u32>().ok());

    let mut is_hero = false;
    for p in result.players.iter_mut() {
        let matches = match seat {
            Some(seat) => p.seat == seat,
            None => p.name == owner,
        };

        if matches {
            p.cards = cards.clone();
            is_hero |= p.is_hero;
        }
    }

    if !is_hero {
        result.opponent_cards = cards;
    }
}

fn is_action(line: &str) -> bool {
    ACTION_KEYWORDS.iter().any(|k| line.contains(k))
}

/// Truncates a transcript to [MAX_INPUT_LEN] at a line boundary.
fn bounded(text: &str) -> &str {
    if text.len() <= MAX_INPUT_LEN {
        return text;
    }

    let mut end = MAX_INPUT_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    let end = text[..end].rfind('\n').unwrap_or(end);
    warn!("Transcript truncated from {} to {} bytes", text.len(), end);
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker::Card;

    const HEADS_UP: &str = "\
PokerStars Hand #243000000001:  Hold'em No Limit ($0.01/$0.02 USD) - 2024/03/01 20:15:00 ET
Table 'Gienah' 2-max Seat #1 is the button
Seat 1: Villain ($2.00 in chips)
Seat 2: Hero ($2.00 in chips)
Villain: posts small blind $0.01
Hero: posts big blind $0.02
*** HOLE CARDS ***
Dealt to Hero [Td 9d]
Villain: raises $0.04 to $0.06
Hero: calls $0.04
*** FLOP *** [2h 7d Kc]
";

    const SIX_MAX: &str = "\
PokerStars Hand #243000000002:  Hold'em No Limit ($0.05/$0.10 USD) - 2024/03/01 20:20:00 ET
Table 'Aludra II' 6-max Seat #3 is the button
Seat 1: alice ($10.00 in chips)
Seat 2: bob ($12.50 in chips)
Seat 3: carol ($8.00 in chips)
Seat 4: dave ($10.00 in chips)
Seat 5: Hero ($10.00 in chips)
Seat 6: frank ($15.00 in chips)
dave: posts small blind $0.05
Hero: posts big blind $0.10
*** HOLE CARDS ***
Dealt to Hero [Ah Kh]
frank: folds
alice: raises $0.20 to $0.30
bob: folds
carol: calls $0.30
dave: folds
Hero: raises $0.90 to $1.00
alice: calls $0.70
carol: folds
*** FLOP *** [Kd 7c 2s]
Hero: bets $1.20
alice: calls $1.20
*** TURN *** [Kd 7c 2s] [Th]
Hero: bets $2.50
alice: raises $3.00 to $5.50
Hero: calls $3.00
*** RIVER *** [Kd 7c 2s Th] [3d]
Hero: checks
alice: bets $2.30 and is all-in
Hero: calls $2.30
*** SHOW DOWN ***
alice: shows [Kc 7h] (two pair, Kings and Sevens)
Hero: shows [Ah Kh] (a pair of Kings)
alice collected $19.40 from pot
*** SUMMARY ***
Total pot $20.35 | Rake $0.95
Board [Kd 7c 2s Th 3d]
Seat 1: alice showed [Kc 7h] and won ($19.40) with two pair, Kings and Sevens
Seat 5: Hero (big blind) showed [Ah Kh] and lost with a pair of Kings
";

    fn codes(cards: &[Card]) -> Vec<String> {
        cards.iter().map(Card::code).collect()
    }

    fn positions(res: &HandResult) -> Vec<String> {
        res.players
            .iter()
            .map(|p| p.position.map(|p| p.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn heads_up_hand() {
        let res = parse(HEADS_UP, ParseOptions::default());

        assert_eq!(res.players.len(), 2);
        assert_eq!(res.players[0].name, "Villain");
        assert!(res.players[0].is_button);
        assert!(!res.players[1].is_button);
        assert_eq!(positions(&res), ["BTN(SB)", "BB"]);

        assert_eq!(res.pot_preflop, "$0.03");
        assert_eq!(res.pot_flop, "$0.12");
        assert_eq!(res.pot_turn, "$0.00");
        assert_eq!(codes(&res.board), ["2H", "7D", "KC"]);

        assert_eq!(res.hero_name.as_deref(), Some("Hero"));
        assert_eq!(codes(&res.hero_cards), ["10D", "9D"]);
        assert!(res.players[1].is_hero);
        assert_eq!(codes(&res.players[1].cards), ["10D", "9D"]);

        assert_eq!(res.preflop_actions.len(), 4);
        assert_eq!(res.preflop_actions[2], "Villain: raises $0.04 to $0.06");
        assert!(res.flop_actions.is_empty());
        assert_eq!(res.big_blind, 0.02);
    }

    #[test]
    fn six_max_hand() {
        let res = parse(SIX_MAX, ParseOptions::default());

        assert_eq!(res.players.len(), 6);
        assert_eq!(positions(&res), ["MP", "CO", "BTN", "SB", "BB", "UTG"]);
        assert_eq!(res.players.iter().filter(|p| p.is_button).count(), 1);
        assert_eq!(res.players[2].name, "carol");
        assert!(res.players[2].is_button);

        assert_eq!(res.pot_preflop, "$0.15");
        assert_eq!(res.pot_flop, "$2.35");
        assert_eq!(res.pot_turn, "$4.75");
        assert_eq!(res.pot_river, "$15.75");

        assert_eq!(codes(&res.board), ["KD", "7C", "2S", "10H", "3D"]);

        assert_eq!(res.preflop_actions.len(), 10);
        assert_eq!(res.flop_actions.len(), 2);
        assert_eq!(res.turn_actions.len(), 3);
        assert_eq!(res.river_actions.len(), 3);
        assert_eq!(res.river_actions[0], "Hero: checks");

        let winners = res.winners().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(winners, ["alice"]);

        assert_eq!(res.hero().map(|p| p.seat), Some(5));
        assert_eq!(codes(&res.opponent_cards), ["KC", "7H"]);
        assert_eq!(codes(&res.players[0].cards), ["KC", "7H"]);
        assert!(res.players[1].cards.is_empty());
    }

    #[test]
    fn player_count_matches_seats() {
        let res = parse(SIX_MAX, ParseOptions::default());
        let seats = SIX_MAX
            .lines()
            .filter(|l| l.starts_with("Seat ") && l.contains("in chips"))
            .count();
        assert_eq!(res.players.len(), seats);
    }

    #[test]
    fn uncalled_bet_is_refunded() {
        let text = format!(
            "{}\
Hero: bets $1.00
Uncalled bet ($1.00) returned to Hero
Hero collected $0.12 from pot
*** TURN *** [2h 7d Kc] [5s]
",
            HEADS_UP
        );

        let res = parse(&text, ParseOptions::default());
        assert_eq!(res.pot_flop, "$0.12");
        assert_eq!(res.pot_turn, "$0.12");
        assert_eq!(res.flop_actions, ["Hero: bets $1.00"]);
        assert!(res.players[1].is_winner);
        assert!(!res.players[0].is_winner);
        assert_eq!(res.board.len(), 4);
    }

    #[test]
    fn raise_over_own_bet() {
        let text = "\
*** FLOP *** [2h 7d Kc]
alice: bets $1.00
bob: raises $2.00 to $3.00
alice: raises $6.00 to $9.00
bob: calls $6.00
*** TURN *** [2h 7d Kc] [5s]
";

        // 1 + 3 + (9 - 1) + 6
        let res = parse(text, ParseOptions::default());
        assert_eq!(res.pot_turn, "$18.00");
    }

    #[test]
    fn raise_below_commitment() {
        let text = "\
*** FLOP *** [2h 7d Kc]
bob: bets $2.00
bob: raises $0 to $1.00
*** TURN *** [2h 7d Kc] [5s]
";

        // The pot keeps the bet, the commitment drops to 1.
        let res = parse(text, ParseOptions::default());
        assert_eq!(res.pot_turn, "$2.00");

        let text = "\
*** FLOP *** [2h 7d Kc]
bob: bets $2.00
bob: raises $0 to $1.00
bob: raises $2.00 to $3.00
*** TURN *** [2h 7d Kc] [5s]
";

        let res = parse(text, ParseOptions::default());
        assert_eq!(res.pot_turn, "$4.00");
    }

    #[test]
    fn commitments_reset_each_street() {
        let text = "\
alice: posts big blind $0.02
*** HOLE CARDS ***
*** FLOP *** [2h 7d Kc]
alice: raises $0.10 to $0.20
*** TURN *** [2h 7d Kc] [5s]
";

        let res = parse(text, ParseOptions::default());
        assert_eq!(res.pot_preflop, "$0.02");
        assert_eq!(res.pot_flop, "$0.02");
        assert_eq!(res.pot_turn, "$0.22");
    }

    #[test]
    fn bb_mode() {
        let options = ParseOptions {
            bb_mode: true,
            ..Default::default()
        };

        let res = parse(SIX_MAX, options);
        assert_eq!(res.pot_preflop, "1.5 BB");
        assert_eq!(res.pot_turn, "47.5 BB");
        assert_eq!(res.preflop_actions[0], "dave: posts small blind 0.5 BB");
        assert_eq!(res.preflop_actions[3], "alice: raises 2.0 BB to 3.0 BB");
        assert_eq!(res.players[1].stack_display, "125.0 BB");
        assert_eq!(res.players[4].stack_display, "100.0 BB");

        for street in Street::ALL {
            for line in res.actions(street) {
                assert!(!line.contains('$'), "{line}");
            }
        }
    }

    #[test]
    fn bb_mode_without_stakes() {
        let text = "\
Table 'Gienah' 2-max Seat #2 is the button
Seat 1: alice ($2.00 in chips)
Seat 2: bob ($3.50 in chips)
alice: posts big blind $1
";

        let options = ParseOptions {
            bb_mode: true,
            ..Default::default()
        };

        let res = parse(text, options);
        assert_eq!(res.big_blind, 1.0);
        assert_eq!(res.players[0].stack_display, "2.0 BB");
        assert_eq!(res.players[1].stack_display, "3.5 BB");
        assert_eq!(res.preflop_actions[0], "alice: posts big blind 1.0 BB");
    }

    #[test]
    fn anonymized_hand() {
        let options = ParseOptions {
            anonymize: true,
            ..Default::default()
        };

        let res = parse(SIX_MAX, options);
        let names = res.players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["MP", "CO", "BTN", "SB", "BB", "UTG"]);
        assert_eq!(res.hero_name.as_deref(), Some("BB"));
        assert_eq!(res.preflop_actions[7], "BB: raises $0.90 to $1.00");

        for street in Street::ALL {
            for line in res.actions(street) {
                for name in ["alice", "bob", "carol", "dave", "Hero", "frank"] {
                    assert!(!line.contains(name), "{name} found in {line}");
                }
            }
        }
    }

    #[test]
    fn bb_then_anonymize() {
        let options = ParseOptions {
            anonymize: true,
            bb_mode: true,
        };

        let res = parse(HEADS_UP, options);
        assert_eq!(res.preflop_actions[2], "BTN(SB): raises 2.0 BB to 3.0 BB");
        assert_eq!(res.pot_flop, "6.0 BB");
        assert_eq!(res.hero_name.as_deref(), Some("BB"));
    }

    #[test]
    fn missing_button() {
        let text = HEADS_UP.replace("Seat #1 is the button", "Seat #? is the button");
        let res = parse(&text, ParseOptions::default());
        assert!(res.players.iter().all(|p| !p.is_button));
        assert_eq!(positions(&res), ["BTN(SB)", "BB"]);
    }

    #[test]
    fn button_after_seats_is_missed() {
        let text = "\
Seat 1: alice ($2.00 in chips)
Seat 2: bob ($2.00 in chips)
Seat 3: carol ($2.00 in chips)
Table 'Gienah' 3-max Seat #2 is the button
";

        let res = parse(text, ParseOptions::default());
        assert!(res.players.iter().all(|p| !p.is_button));
        assert_eq!(positions(&res), ["BTN", "SB", "BB"]);
    }

    #[test]
    fn malformed_input() {
        let text = "\
garbage line
Seat x: alice ($2.00 in chips)
Seat 2 bob ($2.00 in chips)
Table 'Gienah' Seat #abc is the button
Dealt to nobody
bob shows [Ah Kh]
*** FLOP ***
*** TURN *** []
";

        let res = parse(text, ParseOptions::default());
        assert!(res.players.is_empty());
        assert!(res.board.is_empty());
        assert!(res.hero_name.is_none());
        assert!(res.opponent_cards.is_empty());
        assert_eq!(res.pot_flop, "$0.00");
        assert_eq!(res.big_blind, 1.0);
    }

    #[test]
    fn empty_input() {
        let options = ParseOptions {
            anonymize: true,
            bb_mode: true,
        };

        let res = parse("", options);
        assert!(res.players.is_empty());
        assert_eq!(res.pot_preflop, "0.0 BB");
    }

    #[test]
    fn crlf_lines() {
        let text = HEADS_UP.replace('\n', "\r\n");
        let res = parse(&text, ParseOptions::default());
        assert_eq!(res.players[1].name, "Hero");
        assert_eq!(res.pot_flop, "$0.12");
        assert_eq!(res.board.len(), 3);
    }

    #[test]
    fn last_opponent_show_wins() {
        let text = "\
Seat 1: alice ($2.00 in chips)
Seat 2: bob ($2.00 in chips)
Seat 3: Hero ($2.00 in chips)
Dealt to Hero [2c 2d]
alice: shows [Ah Ad]
bob: shows [Kh Kd]
Hero: shows [2c 2d]
";

        let res = parse(text, ParseOptions::default());
        assert_eq!(codes(&res.opponent_cards), ["KH", "KD"]);
        assert_eq!(codes(&res.players[0].cards), ["AH", "AD"]);
        assert_eq!(codes(&res.players[2].cards), ["2C", "2D"]);
    }

    #[test]
    fn split_pot_winners() {
        let text = "\
Seat 1: alice ($2.00 in chips)
Seat 2: bob ($2.00 in chips)
alice collected $0.50 from pot
bob collected $0.50 from pot
";

        let res = parse(text, ParseOptions::default());
        assert_eq!(res.winners().count(), 2);
    }

    #[test]
    fn oversized_input_is_truncated() {
        let mut text = HEADS_UP.to_string();
        while text.len() <= MAX_INPUT_LEN {
            text.push_str("Hero: checks\n");
        }
        text.push_str("Seat 9: late ($1.00 in chips)\n");

        let res = parse(&text, ParseOptions::default());
        assert_eq!(res.players.len(), 2);
        assert_eq!(res.pot_flop, "$0.12");
    }

    #[test]
    fn bounded_input() {
        assert_eq!(bounded("abc"), "abc");

        let text = "é".repeat(MAX_INPUT_LEN);
        let cut = bounded(&text);
        assert!(cut.len() <= MAX_INPUT_LEN);
        assert!(text.starts_with(cut));
    }

    #[test]
    fn serialize_result() {
        let res = parse(HEADS_UP, ParseOptions::default());
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["pot_flop"], "$0.12");
        assert_eq!(json["players"][0]["position"], "BTN(SB)");
        assert_eq!(json["board"][2]["code"], "KC");
        assert_eq!(json["board"][2]["suit"], "♣");
    }
}
