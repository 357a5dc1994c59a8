pub mod combos;
pub mod detectors;

pub use combos::ComboChain;

use crate::catalog::{Card, CardCategory, Deck};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergyEdge {
    pub target_id: String,
    /// -100..100, the clamped pair score scaled by 100.
    pub strength: i32,
    pub polarity: Polarity,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergyNode {
    pub card_id: String,
    pub card_name: String,
    pub edges: Vec<SynergyEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntiSynergy {
    pub card_a: String,
    pub card_b: String,
    /// 3-10: |pair score| × 10, only recorded at score ≤ -0.3.
    pub severity: f64,
    pub can_coexist: bool,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergyGraph {
    pub nodes: Vec<SynergyNode>,
    pub anti_synergies: Vec<AntiSynergy>,
    pub combos: Vec<ComboChain>,
    /// 0-1: rescaled mean pair score. No pairs means the neutral 0.5.
    pub overall_coherence: f64,
}

/// Result of scoring one unordered pair through all detectors.
struct PairVerdict {
    score: f64,
    descriptions: Vec<String>,
}

fn score_pair(a: &Card, b: &Card) -> PairVerdict {
    let detections = [
        detectors::ability_synergy(a, b),
        detectors::type_synergy(a, b),
        detectors::energy_synergy(a, b),
        detectors::strategy_synergy(a, b),
        detectors::search_setup_synergy(a, b),
    ];

    let mut score = 0.0;
    let mut descriptions = Vec::new();
    for d in detections {
        if d.score != 0.0 {
            score += d.score;
            if let Some(text) = d.description {
                descriptions.push(text);
            }
        }
    }

    let combo = detectors::combo_potential(a, b);
    if combo.score != 0.0 {
        score += combo.score * 0.2;
        if let Some(text) = combo.description {
            descriptions.push(text);
        }
    }

    PairVerdict {
        score: score.clamp(-1.0, 1.0),
        descriptions,
    }
}

/// Builds the per-analysis graph: one node per distinct card id, pair
/// edges from the detectors, deterministic structural edges, combo
/// chains and the coherence score. Nothing here is shared between
/// analyses.
pub fn build_graph(deck: &Deck) -> SynergyGraph {
    let cards = deck.unique_cards();
    let index: HashMap<&str, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.as_str(), i))
        .collect();

    let mut nodes: Vec<SynergyNode> = cards
        .iter()
        .map(|c| SynergyNode {
            card_id: c.id.clone(),
            card_name: c.name.clone(),
            edges: Vec::new(),
        })
        .collect();
    let mut edge_guard: HashSet<(usize, usize)> = HashSet::new();
    let mut anti_synergies = Vec::new();

    let mut pair_sum = 0.0;
    let mut pair_count = 0u32;

    for (&a, &b) in cards.iter().tuple_combinations() {
        let verdict = score_pair(a, b);
        pair_sum += verdict.score;
        pair_count += 1;

        if verdict.score != 0.0 {
            let description = verdict.descriptions.join("; ");
            let polarity = if verdict.score > 0.0 {
                Polarity::Positive
            } else {
                Polarity::Negative
            };
            let strength = (verdict.score * 100.0).round() as i32;
            let (ia, ib) = (index[a.id.as_str()], index[b.id.as_str()]);
            add_edge(&mut nodes, &mut edge_guard, ia, ib, strength, polarity, &description);
            add_edge(&mut nodes, &mut edge_guard, ib, ia, strength, polarity, &description);
        }

        if verdict.score <= -0.3 {
            anti_synergies.push(AntiSynergy {
                card_a: a.name.clone(),
                card_b: b.name.clone(),
                severity: verdict.score.abs() * 10.0,
                can_coexist: verdict.score > -0.7,
                reason: verdict.descriptions.join("; "),
            });
        }
    }

    add_structural_edges(&cards, &index, &mut nodes, &mut edge_guard);

    let combos = combos::find_combo_chains(&cards);

    let overall_coherence = if pair_count == 0 {
        0.5
    } else {
        ((pair_sum / f64::from(pair_count) + 1.0) / 2.0).clamp(0.0, 1.0)
    };

    debug!(
        nodes = nodes.len(),
        combos = combos.len(),
        anti = anti_synergies.len(),
        coherence = overall_coherence,
        "synergy graph built"
    );

    SynergyGraph {
        nodes,
        anti_synergies,
        combos,
        overall_coherence,
    }
}

/// Deterministic non-detector edges: energy-name/type matches, evolution
/// lines (90) and weakness coverage between creatures (60).
fn add_structural_edges(
    cards: &[&Card],
    index: &HashMap<&str, usize>,
    nodes: &mut [SynergyNode],
    guard: &mut HashSet<(usize, usize)>,
) {
    for (&a, &b) in cards.iter().tuple_combinations() {
        let (ia, ib) = (index[a.id.as_str()], index[b.id.as_str()]);

        let energy_match = |e: &Card, c: &Card| {
            e.category == CardCategory::Energy
                && c.is_creature()
                && c.types.iter().any(|t| e.name.contains(t.as_str()))
        };
        if energy_match(a, b) || energy_match(b, a) {
            let desc = format!("{} fuels {}", a.name, b.name);
            add_edge(nodes, guard, ia, ib, 50, Polarity::Positive, &desc);
            add_edge(nodes, guard, ib, ia, 50, Polarity::Positive, &desc);
        }

        let evolves = |pre: &Card, evo: &Card| {
            evo.evolves_from.as_deref() == Some(pre.name.as_str())
        };
        if evolves(a, b) {
            let desc = format!("{} evolves into {}", a.name, b.name);
            add_edge(nodes, guard, ia, ib, 90, Polarity::Positive, &desc);
        } else if evolves(b, a) {
            let desc = format!("{} evolves into {}", b.name, a.name);
            add_edge(nodes, guard, ib, ia, 90, Polarity::Positive, &desc);
        }

        let covers = |shield: &Card, exposed: &Card| {
            shield.is_creature()
                && exposed.is_creature()
                && exposed.weaknesses.iter().any(|w| {
                    shield
                        .resistances
                        .iter()
                        .any(|r| r.type_name == w.type_name)
                })
        };
        if covers(a, b) || covers(b, a) {
            let desc = format!("{} and {} cover each other's weakness", a.name, b.name);
            add_edge(nodes, guard, ia, ib, 60, Polarity::Positive, &desc);
            add_edge(nodes, guard, ib, ia, 60, Polarity::Positive, &desc);
        }
    }
}

/// At most one edge per (source, target); later rules never overwrite.
fn add_edge(
    nodes: &mut [SynergyNode],
    guard: &mut HashSet<(usize, usize)>,
    from: usize,
    to: usize,
    strength: i32,
    polarity: Polarity,
    description: &str,
) {
    if !guard.insert((from, to)) {
        return;
    }
    let target_id = nodes[to].card_id.clone();
    nodes[from].edges.push(SynergyEdge {
        target_id,
        strength: strength.clamp(-100, 100),
        polarity,
        description: description.to_string(),
    });
}
