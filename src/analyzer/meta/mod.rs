pub mod catalog;
pub mod matchup;

pub use catalog::MetaDeck;
pub use matchup::Matchup;

use crate::analyzer::archetype::Archetype;
use crate::catalog::{CardCategory, Deck};
use crate::config::{AnalysisConfig, Format, ROTATION_CUTOFF_YEAR};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
    Rogue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterStrategy {
    pub card: String,
    pub counters: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaWeakness {
    pub name: String,
    /// 1-10.
    pub severity: f64,
    pub exploited_by: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatEvaluation {
    pub format: Format,
    /// 0-100; zero when any card is illegal in the format.
    pub viability: f64,
    pub illegal_cards: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotatingCard {
    pub name: String,
    pub copies: u32,
    pub replacements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationImpact {
    /// 0-100.
    pub impact_score: f64,
    pub rotating_cards: Vec<RotatingCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechRecommendation {
    pub card: String,
    pub improves: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaAnalysis {
    /// Best catalog match, or "Rogue Deck".
    pub archetype_match: String,
    pub tier: Tier,
    pub matchups: Vec<Matchup>,
    pub counter_strategies: Vec<CounterStrategy>,
    pub weaknesses: Vec<MetaWeakness>,
    pub format: FormatEvaluation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationImpact>,
    pub tech_recommendations: Vec<TechRecommendation>,
}

/// Full meta evaluation against the static reference catalog.
pub fn evaluate(deck: &Deck, primary: Archetype, config: &AnalysisConfig) -> MetaAnalysis {
    let archetype_match = best_archetype_match(deck, primary);
    let tier = meta_position(deck);

    let matchups: Vec<Matchup> = catalog::meta_decks()
        .iter()
        .map(|opponent| matchup::estimate_matchup(deck, primary, opponent))
        .collect();

    let counter_strategies = find_counter_strategies(deck);
    let weaknesses = detect_weaknesses(deck);
    let format = evaluate_format(deck, config.format);
    let rotation = config.include_rotation.then(|| rotation_impact(deck));
    let tech_recommendations = recommend_tech(deck, &matchups, &weaknesses);

    debug!(
        %archetype_match,
        ?tier,
        matchups = matchups.len(),
        "meta evaluation complete"
    );

    MetaAnalysis {
        archetype_match,
        tier,
        matchups,
        counter_strategies,
        weaknesses,
        format,
        rotation,
        tech_recommendations,
    }
}

/// +30 for a matching archetype, +20 per key card present; a best match
/// must clear 50 or the deck is rogue.
fn best_archetype_match(deck: &Deck, primary: Archetype) -> String {
    let mut best: Option<(&MetaDeck, u32)> = None;
    for meta in catalog::meta_decks() {
        let mut score = 0;
        if meta.archetype == primary {
            score += 30;
        }
        for key in meta.key_cards {
            if deck.contains(key) {
                score += 20;
            }
        }
        if best.map(|(_, s)| score > s).unwrap_or(score > 0) {
            best = Some((meta, score));
        }
    }
    match best {
        Some((meta, score)) if score > 50 => meta.name.to_string(),
        _ => "Rogue Deck".to_string(),
    }
}

fn staple_count(deck: &Deck) -> usize {
    catalog::META_STAPLES
        .iter()
        .filter(|&&s| deck.contains(s))
        .count()
}

/// Tier from full key-card containment of a catalog entry, otherwise
/// from staple density.
fn meta_position(deck: &Deck) -> Tier {
    for meta in catalog::meta_decks() {
        if meta.key_cards.iter().all(|key| deck.contains(key)) {
            return if meta.popularity >= 15.0 {
                Tier::Tier1
            } else if meta.popularity >= 10.0 {
                Tier::Tier2
            } else {
                Tier::Tier3
            };
        }
    }
    match staple_count(deck) {
        n if n >= 10 => Tier::Tier2,
        n if n >= 5 => Tier::Tier3,
        _ => Tier::Rogue,
    }
}

fn find_counter_strategies(deck: &Deck) -> Vec<CounterStrategy> {
    catalog::counter_rules()
        .iter()
        .filter(|rule| deck.contains(rule.card))
        .map(|rule| CounterStrategy {
            card: rule.card.to_string(),
            counters: rule.counters.to_string(),
            description: rule.description.to_string(),
        })
        .collect()
}

/// Structural weaknesses from fixed thresholds over the raw deck list
/// (not the feature vector).
fn detect_weaknesses(deck: &Deck) -> Vec<MetaWeakness> {
    let mut out = Vec::new();

    let ability_copies: u32 = deck
        .entries
        .iter()
        .filter(|e| e.card.is_creature() && !e.card.abilities.is_empty())
        .map(|e| e.quantity)
        .sum();
    if ability_copies >= 8 {
        out.push(MetaWeakness {
            name: "Ability Dependence".to_string(),
            severity: 7.0,
            exploited_by: vec!["Ability lock".to_string()],
            description: "Most of the engine shuts off under ability lock".to_string(),
        });
    }

    let special_energy: u32 = deck
        .entries
        .iter()
        .filter(|e| {
            e.card.category == CardCategory::Energy
                && !crate::catalog::is_unlimited_energy(&e.card.name)
        })
        .map(|e| e.quantity)
        .sum();
    if special_energy >= 6 {
        out.push(MetaWeakness {
            name: "Special Energy Dependence".to_string(),
            severity: 6.0,
            exploited_by: vec!["Energy removal".to_string()],
            description: "Special energy removal strands the attackers".to_string(),
        });
    }

    let bench_sitters: u32 = deck
        .entries
        .iter()
        .filter(|e| {
            e.card.is_creature() && !e.card.abilities.is_empty() && e.card.attacks.is_empty()
        })
        .map(|e| e.quantity)
        .sum();
    if bench_sitters >= 4 {
        out.push(MetaWeakness {
            name: "Bench Dependence".to_string(),
            severity: 5.0,
            exploited_by: vec![
                "Bench damage".to_string(),
                "Bench size limits".to_string(),
            ],
            description: "Support creatures clog the bench and give up prizes".to_string(),
        });
    }

    let stage_two: u32 = deck
        .entries
        .iter()
        .filter(|e| e.card.is_stage_two())
        .map(|e| e.quantity)
        .sum();
    if stage_two >= 6 {
        out.push(MetaWeakness {
            name: "Slow Setup".to_string(),
            severity: 6.0,
            exploited_by: vec!["Early aggression".to_string()],
            description: "Heavy evolution lines concede the early game".to_string(),
        });
    }

    let frail: u32 = deck
        .entries
        .iter()
        .filter(|e| e.card.is_creature() && e.card.hp > 0 && e.card.hp <= 70)
        .map(|e| e.quantity)
        .sum();
    if frail >= 8 {
        out.push(MetaWeakness {
            name: "Fragile Attackers".to_string(),
            severity: 5.0,
            exploited_by: vec!["OHKO sweepers".to_string()],
            description: "Low-HP creatures hand out easy knockouts".to_string(),
        });
    }

    out
}

fn evaluate_format(deck: &Deck, format: Format) -> FormatEvaluation {
    let illegal_cards: Vec<String> = deck
        .entries
        .iter()
        .filter(|e| match format {
            Format::Standard => !e.card.legal.standard,
            Format::Expanded => !e.card.legal.expanded,
        })
        .map(|e| e.card.name.clone())
        .collect();

    let mut notes = Vec::new();
    let viability = if illegal_cards.is_empty() {
        let mut v: f64 = 70.0;
        let staples = staple_count(deck);
        if staples >= 6 {
            v += 10.0;
            notes.push("Full staple trainer suite".to_string());
        } else if staples >= 3 {
            v += 5.0;
            notes.push("Partial staple trainer suite".to_string());
        }
        v.min(100.0)
    } else {
        notes.push("Deck is not legal in this format".to_string());
        0.0
    };

    FormatEvaluation {
        format,
        viability,
        illegal_cards,
        notes,
    }
}

/// Naive date rule: anything released before the cutoff year rotates.
/// Hard-to-replace (≤2 copy) cards weigh double.
fn rotation_impact(deck: &Deck) -> RotationImpact {
    let mut impact = 0.0;
    let mut rotating_cards = Vec::new();
    for entry in &deck.entries {
        if entry.card.release_year >= ROTATION_CUTOFF_YEAR {
            continue;
        }
        let per_copy = if entry.quantity <= 2 { 10.0 } else { 5.0 };
        impact += per_copy * f64::from(entry.quantity);

        let replacements = catalog::replacement_hints()
            .iter()
            .find(|h| h.card == entry.card.name)
            .map(|h| h.replacements.iter().map(|s| s.to_string()).collect())
            .unwrap_or_else(|| vec!["Look for a reprint or newer equivalent".to_string()]);
        rotating_cards.push(RotatingCard {
            name: entry.card.name.clone(),
            copies: entry.quantity,
            replacements,
        });
    }
    RotationImpact {
        impact_score: impact.min(100.0),
        rotating_cards,
    }
}

/// Tech cards for sub-40% matchups and detected weaknesses: fixed
/// tables, skip owned cards, widest coverage first, top 5. A card
/// appearing in several table entries accumulates all of them into one
/// recommendation, so the breadth sort has something to rank.
fn recommend_tech(
    deck: &Deck,
    matchups: &[Matchup],
    weaknesses: &[MetaWeakness],
) -> Vec<TechRecommendation> {
    let mut picked: Vec<TechRecommendation> = Vec::new();

    fn add(
        picked: &mut Vec<TechRecommendation>,
        deck: &Deck,
        card: &str,
        improves: String,
        reason: String,
    ) {
        if deck.contains(card) {
            return;
        }
        if let Some(existing) = picked.iter_mut().find(|t| t.card == card) {
            if !existing.improves.contains(&improves) {
                existing.improves.push(improves);
            }
        } else {
            picked.push(TechRecommendation {
                card: card.to_string(),
                improves: vec![improves],
                reason,
            });
        }
    }

    let bad_matchups: HashSet<&str> = matchups
        .iter()
        .filter(|m| m.win_rate < 40.0)
        .map(|m| m.opponent.as_str())
        .collect();

    for tech in catalog::matchup_tech_table() {
        if !bad_matchups.contains(tech.opponent) {
            continue;
        }
        for &card in tech.cards {
            add(
                &mut picked,
                deck,
                card,
                tech.opponent.to_string(),
                format!("Shores up the {} matchup", tech.opponent),
            );
        }
    }

    for weakness in weaknesses {
        if let Some(tech) = catalog::weakness_tech_table()
            .iter()
            .find(|t| t.weakness == weakness.name)
        {
            for &card in tech.cards {
                add(
                    &mut picked,
                    deck,
                    card,
                    weakness.name.clone(),
                    format!("Mitigates {}", weakness.name),
                );
            }
        }
    }

    picked.sort_by(|a, b| b.improves.len().cmp(&a.improves.len()));
    picked.truncate(5);
    picked
}
