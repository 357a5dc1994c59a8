use crate::catalog::Card;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named card-role predicate, one per pattern slot.
type SlotPredicate = fn(&Card) -> bool;

pub struct ComboPattern {
    pub name: &'static str,
    pub description: &'static str,
    pub slots: &'static [SlotPredicate],
    /// 1-10, from the pattern definition, never recomputed.
    pub impact: u32,
    /// 0-1, from the pattern definition, never recomputed.
    pub reliability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboChain {
    pub pattern_name: String,
    pub card_ids: Vec<String>,
    pub reliability: f64,
    pub impact: u32,
    pub description: String,
}

fn draws(card: &Card) -> bool {
    card.combined_text().contains("draw")
}

fn accelerates(card: &Card) -> bool {
    let t = card.combined_text();
    t.contains("attach") && t.contains("energy")
}

fn heavy_attacker(card: &Card) -> bool {
    card.attacks
        .iter()
        .any(|a| a.cost.len() >= 3 || a.damage >= 120)
}

fn basic_with_evolution(card: &Card) -> bool {
    card.is_basic_creature() && card.evolves_to.is_some()
}

fn evolved(card: &Card) -> bool {
    card.evolves_from.is_some()
}

fn disrupts(card: &Card) -> bool {
    let t = card.combined_text();
    (t.contains("discard") || t.contains("shuffle")) && t.contains("opponent")
}

fn heals(card: &Card) -> bool {
    card.combined_text().contains("heal")
}

fn spreads(card: &Card) -> bool {
    card.attacks
        .iter()
        .any(|a| a.damage > 0 && a.text.to_lowercase().contains("bench"))
}

fn ball_search(card: &Card) -> bool {
    card.name.contains("Ball")
}

fn is_creature(card: &Card) -> bool {
    card.is_creature()
}

pub fn combo_patterns() -> &'static [ComboPattern] {
    &[
        ComboPattern {
            name: "Draw Engine",
            description: "Two independent draw sources keep the hand full every turn",
            slots: &[draws, draws],
            impact: 6,
            reliability: 0.8,
        },
        ComboPattern {
            name: "Energy Acceleration Line",
            description: "Acceleration powers an expensive attacker ahead of curve",
            slots: &[accelerates, heavy_attacker],
            impact: 8,
            reliability: 0.7,
        },
        ComboPattern {
            name: "Evolution Line",
            description: "A basic and its evolution stage form a growth line",
            slots: &[basic_with_evolution, evolved],
            impact: 7,
            reliability: 0.75,
        },
        ComboPattern {
            name: "Lock and Heal",
            description: "Disruption plus healing grinds the opponent to a halt",
            slots: &[disrupts, heals],
            impact: 7,
            reliability: 0.6,
        },
        ComboPattern {
            name: "Spread Sweep",
            description: "Twin spread attackers line up multi-knockout turns",
            slots: &[spreads, spreads],
            impact: 8,
            reliability: 0.65,
        },
        ComboPattern {
            name: "Ball Search Package",
            description: "Ball search makes the creature lineup reliable",
            slots: &[ball_search, is_creature],
            impact: 5,
            reliability: 0.9,
        },
    ]
}

/// Match every pattern against the deck's distinct cards. Slots are
/// filled in order, no card is reused within one combination, and
/// mirror assignments of the same card set are collapsed.
pub fn find_combo_chains(cards: &[&Card]) -> Vec<ComboChain> {
    let mut chains = Vec::new();
    for pattern in combo_patterns() {
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        let mut used = vec![false; cards.len()];
        let mut picked = Vec::with_capacity(pattern.slots.len());
        fill_slots(pattern, cards, 0, &mut used, &mut picked, &mut seen, &mut chains);
    }
    chains
}

fn fill_slots(
    pattern: &ComboPattern,
    cards: &[&Card],
    slot: usize,
    used: &mut [bool],
    picked: &mut Vec<usize>,
    seen: &mut HashSet<Vec<String>>,
    out: &mut Vec<ComboChain>,
) {
    if slot == pattern.slots.len() {
        let ids: Vec<String> = picked.iter().map(|&i| cards[i].id.clone()).collect();
        let mut key = ids.clone();
        key.sort();
        if seen.insert(key) {
            out.push(ComboChain {
                pattern_name: pattern.name.to_string(),
                card_ids: ids,
                reliability: pattern.reliability,
                impact: pattern.impact,
                description: pattern.description.to_string(),
            });
        }
        return;
    }
    let predicate = pattern.slots[slot];
    for i in 0..cards.len() {
        if used[i] || !predicate(cards[i]) {
            continue;
        }
        used[i] = true;
        picked.push(i);
        fill_slots(pattern, cards, slot + 1, used, picked, seen, out);
        picked.pop();
        used[i] = false;
    }
}
