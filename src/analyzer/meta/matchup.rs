use super::catalog::{specific_interactions, MetaDeck};
use crate::analyzer::archetype::{speed_rank, Archetype};
use crate::catalog::Deck;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub opponent: String,
    pub opponent_archetype: Archetype,
    /// 20-80: the model never calls a matchup fully free or fully lost.
    pub win_rate: f64,
    pub notes: Vec<String>,
}

/// Elemental-type edge against a whole archetype, independent of the
/// specific opponent list.
const TYPE_ADVANTAGE: &[(&str, Archetype, f64)] = &[
    ("Water", Archetype::Aggro, 8.0),
    ("Lightning", Archetype::Control, 6.0),
    ("Fire", Archetype::Turbo, 6.0),
    ("Fire", Archetype::Combo, 5.0),
    ("Fighting", Archetype::Mill, 8.0),
    ("Fighting", Archetype::Spread, 5.0),
    ("Psychic", Archetype::Stall, 8.0),
    ("Grass", Archetype::Midrange, 5.0),
];

/// Asymmetric archetype-vs-archetype adjustments. Pairs not listed
/// default to 0.
const MATCHUP_MATRIX: &[(Archetype, Archetype, f64)] = &[
    (Archetype::Aggro, Archetype::Combo, 8.0),
    (Archetype::Aggro, Archetype::Control, -8.0),
    (Archetype::Aggro, Archetype::Stall, -5.0),
    (Archetype::Control, Archetype::Aggro, 8.0),
    (Archetype::Control, Archetype::Combo, -8.0),
    (Archetype::Control, Archetype::Midrange, 5.0),
    (Archetype::Combo, Archetype::Control, 8.0),
    (Archetype::Combo, Archetype::Aggro, -8.0),
    (Archetype::Mill, Archetype::Stall, 10.0),
    (Archetype::Mill, Archetype::Aggro, -10.0),
    (Archetype::Stall, Archetype::Aggro, 5.0),
    (Archetype::Stall, Archetype::Mill, -10.0),
    (Archetype::Turbo, Archetype::Stall, -8.0),
    (Archetype::Spread, Archetype::Stall, 6.0),
    (Archetype::Midrange, Archetype::Aggro, 3.0),
];

fn type_advantage(deck_types: &HashSet<&str>, opponent: Archetype) -> f64 {
    TYPE_ADVANTAGE
        .iter()
        .filter(|(ty, arch, _)| *arch == opponent && deck_types.contains(ty))
        .map(|(_, _, delta)| delta)
        .sum()
}

fn matrix_adjustment(ours: Archetype, theirs: Archetype) -> f64 {
    MATCHUP_MATRIX
        .iter()
        .find(|(a, b, _)| *a == ours && *b == theirs)
        .map(|(_, _, delta)| *delta)
        .unwrap_or(0.0)
}

/// Estimate one matchup. Base 50, adjusted by type advantage, speed
/// difference, weakness exploitation, the archetype matrix and named
/// interactions; clamped to [20, 80].
pub fn estimate_matchup(deck: &Deck, ours: Archetype, opponent: &MetaDeck) -> Matchup {
    let mut win_rate = 50.0;
    let mut notes = Vec::new();

    let deck_types: HashSet<&str> = deck
        .entries
        .iter()
        .filter(|e| e.card.is_creature())
        .flat_map(|e| e.card.types.iter().map(String::as_str))
        .collect();

    let type_delta = type_advantage(&deck_types, opponent.archetype);
    if type_delta != 0.0 {
        win_rate += type_delta;
        notes.push(format!("Type advantage vs {}", opponent.archetype));
    }

    let speed_delta = f64::from(speed_rank(ours) - speed_rank(opponent.archetype)) * 5.0;
    win_rate += speed_delta;
    if speed_delta > 0.0 {
        notes.push("Sets up faster than the opponent".to_string());
    } else if speed_delta < 0.0 {
        notes.push("Outpaced during setup".to_string());
    }

    // +10 per distinct owned card of a type the opponent is weak to.
    let exploiters = deck
        .unique_cards()
        .into_iter()
        .filter(|c| {
            c.is_creature()
                && c.types
                    .iter()
                    .any(|t| opponent.weaknesses.contains(&t.as_str()))
        })
        .count();
    if exploiters > 0 {
        win_rate += exploiters as f64 * 10.0;
        notes.push(format!("{} card(s) hit their weakness", exploiters));
    }

    win_rate += matrix_adjustment(ours, opponent.archetype);

    for rule in specific_interactions() {
        if rule.opponent == opponent.name && deck.contains(rule.card) {
            win_rate += rule.delta;
            notes.push(format!("{} swings this matchup", rule.card));
        }
    }

    Matchup {
        opponent: opponent.name.to_string(),
        opponent_archetype: opponent.archetype,
        win_rate: win_rate.clamp(20.0, 80.0),
        notes,
    }
}
