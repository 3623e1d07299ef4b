// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Replaces player names with their table positions.
use ahash::AHashMap;
use log::warn;
use regex::{Captures, Regex};

use crate::poker::{HandResult, Street};

/// Renames players to their position label and rewrites the action logs.
///
/// Names are matched in a single pass over each line with longer names tried
/// first, so a name that is part of another name never splits it and a label
/// that was just written is never matched again.
pub fn anonymize(result: &mut HandResult) {
    let mut labels = AHashMap::with_capacity(result.players.len());
    for player in &mut result.players {
        if let Some(position) = player.position {
            let label = position.to_string();
            labels.insert(std::mem::replace(&mut player.name, label.clone()), label);
        }
    }

    if let Some(names) = names_matcher(&labels) {
        for street in Street::ALL {
            for line in result.actions_mut(street).iter_mut() {
                *line = names
                    .replace_all(line, |caps: &Captures<'_>| {
                        labels
                            .get(&caps[0])
                            .cloned()
                            .unwrap_or_else(|| caps[0].to_string())
                    })
                    .into_owned();
            }
        }
    }

    if let Some(name) = result.hero().map(|p| p.name.clone()) {
        result.hero_name = Some(name);
    }
}

/// Builds a regex that matches any of the names, longest first.
fn names_matcher(labels: &AHashMap<String, String>) -> Option<Regex> {
    let mut names = labels
        .keys()
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>();
    if names.is_empty() {
        return None;
    }

    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let pattern = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");

    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Cannot match player names: {e}");
            None
        }
    }
}
