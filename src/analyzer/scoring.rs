use super::archetype::{Archetype, ArchetypeClassification};
use super::meta::{MetaAnalysis, Tier};
use super::synergy::SynergyGraph;
use crate::collab::{ConsistencyReport, SpeedRating, SpeedReport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub core_strategy: String,
    pub win_conditions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckScores {
    pub consistency: f64,
    pub power: f64,
    pub speed: f64,
    pub versatility: f64,
    pub meta_relevance: f64,
    pub innovation: f64,
    pub difficulty: f64,
    pub overall: f64,
    pub breakdown: ScoreBreakdown,
}

/// consistency / power / speed / versatility / meta-relevance weights.
/// Innovation and difficulty never enter the weighted sum.
fn archetype_weights(archetype: Archetype) -> [f64; 5] {
    match archetype {
        Archetype::Aggro => [0.20, 0.35, 0.25, 0.10, 0.10],
        Archetype::Control => [0.25, 0.15, 0.10, 0.25, 0.25],
        Archetype::Combo => [0.35, 0.25, 0.10, 0.15, 0.15],
        Archetype::Midrange => [0.25, 0.20, 0.15, 0.25, 0.15],
        Archetype::Mill => [0.30, 0.10, 0.15, 0.25, 0.20],
        Archetype::Stall => [0.30, 0.10, 0.10, 0.30, 0.20],
        Archetype::Toolbox => [0.25, 0.15, 0.10, 0.35, 0.15],
        Archetype::Turbo => [0.25, 0.25, 0.35, 0.05, 0.10],
        Archetype::Spread => [0.25, 0.25, 0.15, 0.20, 0.15],
    }
}

fn power_score(speed: &SpeedReport) -> f64 {
    let race = &speed.prize_race_speed;
    let mut score: f64 = if race.damage_output >= 220.0 {
        90.0
    } else if race.damage_output >= 180.0 {
        80.0
    } else if race.damage_output >= 140.0 {
        70.0
    } else if race.damage_output >= 100.0 {
        55.0
    } else if race.damage_output >= 60.0 {
        45.0
    } else {
        30.0
    };
    if race.ohko_capability {
        score += 10.0;
    }
    score.min(100.0)
}

fn speed_score(speed: &SpeedReport) -> f64 {
    let mut score: f64 = match speed.overall_speed {
        SpeedRating::Turbo => 85.0,
        SpeedRating::Fast => 70.0,
        SpeedRating::Medium => 55.0,
        SpeedRating::Slow => 35.0,
    };
    if speed.first_turn_advantage >= 70.0 {
        score += 10.0;
    } else if speed.first_turn_advantage >= 50.0 {
        score += 5.0;
    }
    score.min(100.0)
}

fn versatility_score(
    classification: &ArchetypeClassification,
    synergy: &SynergyGraph,
    meta: &MetaAnalysis,
) -> f64 {
    let mut score: f64 = 40.0;
    if classification.secondary.is_some() {
        score += 15.0;
    }
    match meta.counter_strategies.len() {
        0 => {}
        1 => score += 5.0,
        _ => score += 10.0,
    }
    match synergy.combos.len() {
        0 => {}
        1 | 2 => score += 5.0,
        _ => score += 10.0,
    }
    let winning = meta.matchups.iter().filter(|m| m.win_rate >= 50.0).count();
    if winning * 2 >= meta.matchups.len() && !meta.matchups.is_empty() {
        score += 10.0;
    }
    score.min(100.0)
}

fn meta_relevance_score(meta: &MetaAnalysis) -> f64 {
    let mut score: f64 = match meta.tier {
        Tier::Tier1 => 90.0,
        Tier::Tier2 => 75.0,
        Tier::Tier3 => 55.0,
        Tier::Rogue => 40.0,
    };
    if meta.archetype_match != "Rogue Deck" {
        score += 10.0;
    }
    score.min(100.0)
}

fn innovation_score(synergy: &SynergyGraph, meta: &MetaAnalysis) -> f64 {
    let mut score: f64 = if meta.archetype_match == "Rogue Deck" {
        70.0
    } else {
        45.0
    };
    score += (synergy.combos.len().min(4) as f64) * 5.0;
    if synergy.overall_coherence >= 0.7 {
        score += 10.0;
    }
    score.min(100.0)
}

fn difficulty_score(classification: &ArchetypeClassification, synergy: &SynergyGraph) -> f64 {
    let mut score: f64 = match classification.primary {
        Archetype::Combo => 80.0,
        Archetype::Control | Archetype::Mill => 70.0,
        Archetype::Toolbox => 65.0,
        Archetype::Stall => 60.0,
        Archetype::Spread => 55.0,
        Archetype::Turbo => 50.0,
        Archetype::Midrange => 45.0,
        Archetype::Aggro => 35.0,
    };
    if synergy.combos.len() >= 3 {
        score += 10.0;
    }
    score.min(100.0)
}

/// Aggregate the seven component scores into the final DeckScores.
/// Consistency passes through from the external report; overall is the
/// archetype-weighted mean plus the innovation bonus.
pub fn compute_scores(
    classification: &ArchetypeClassification,
    synergy: &SynergyGraph,
    meta: &MetaAnalysis,
    consistency: &ConsistencyReport,
    speed: &SpeedReport,
) -> DeckScores {
    let consistency_score = consistency.overall_consistency.clamp(0.0, 100.0);
    let power = power_score(speed);
    let speed_component = speed_score(speed);
    let versatility = versatility_score(classification, synergy, meta);
    let meta_relevance = meta_relevance_score(meta);
    let innovation = innovation_score(synergy, meta);
    let difficulty = difficulty_score(classification, synergy);

    let w = archetype_weights(classification.primary);
    let weighted = consistency_score * w[0]
        + power * w[1]
        + speed_component * w[2]
        + versatility * w[3]
        + meta_relevance * w[4];
    let overall = (weighted + (innovation - 50.0) * 0.1).clamp(0.0, 100.0);

    let breakdown = build_breakdown(
        classification,
        synergy,
        meta,
        speed,
        &[
            ("Consistency", consistency_score),
            ("Power", power),
            ("Speed", speed_component),
            ("Versatility", versatility),
            ("Meta relevance", meta_relevance),
            ("Innovation", innovation),
        ],
    );

    DeckScores {
        consistency: consistency_score,
        power,
        speed: speed_component,
        versatility,
        meta_relevance,
        innovation,
        difficulty,
        overall,
        breakdown,
    }
}

fn build_breakdown(
    classification: &ArchetypeClassification,
    synergy: &SynergyGraph,
    meta: &MetaAnalysis,
    speed: &SpeedReport,
    components: &[(&str, f64)],
) -> ScoreBreakdown {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for (name, value) in components {
        if *value >= 75.0 {
            strengths.push(format!("{} ({:.0}/100)", name, value));
        } else if *value <= 45.0 {
            weaknesses.push(format!("{} ({:.0}/100)", name, value));
        }
    }

    let mut core_strategy = classification.playstyle.clone();
    if let Some(top_combo) = synergy
        .combos
        .iter()
        .max_by(|a, b| a.impact.cmp(&b.impact).then(b.pattern_name.cmp(&a.pattern_name)))
    {
        core_strategy.push(' ');
        core_strategy.push_str(&top_combo.description);
        core_strategy.push('.');
    }
    core_strategy.push(' ');
    core_strategy.push_str(match speed.overall_speed {
        SpeedRating::Turbo => "The list is built to execute this plan from the very first turn.",
        SpeedRating::Fast => "The list comes online quickly enough to dictate the pace.",
        SpeedRating::Medium => "The list needs a couple of turns before the plan comes online.",
        SpeedRating::Slow => "The list concedes the early game to set this plan up.",
    });

    let mut win_conditions = win_condition_lines(classification.primary);
    if speed.prize_race_speed.ohko_capability {
        win_conditions.push("Can one-shot any threat the opponent benches".to_string());
    }
    if speed.prize_race_speed.comeback_potential >= 60.0 {
        win_conditions.push("Recovers from a lost board and wins the late prize race".to_string());
    }
    if !meta.counter_strategies.is_empty() {
        win_conditions.push("Sideboard-style counter cards steal bad matchups".to_string());
    }

    ScoreBreakdown {
        strengths,
        weaknesses,
        core_strategy,
        win_conditions,
    }
}

fn win_condition_lines(archetype: Archetype) -> Vec<String> {
    let lines: &[&str] = match archetype {
        Archetype::Aggro => &[
            "Take six prizes before the opponent finishes setting up",
            "Force unfavorable early trades",
        ],
        Archetype::Control => &[
            "Exhaust the opponent's resources, then close at leisure",
            "Lock the board until the win is academic",
        ],
        Archetype::Combo => &[
            "Assemble the combo and convert it into a multi-prize turn",
            "Win on the turn the engine comes online",
        ],
        Archetype::Midrange => &[
            "Win an even prize trade through efficiency",
            "Outlast aggro, outpace control",
        ],
        Archetype::Mill => &["Deck the opponent out", "Stall the prize race to zero tempo"],
        Archetype::Stall => &[
            "Survive until the opponent has no attackers left",
            "Win by running the opponent out of options",
        ],
        Archetype::Toolbox => &[
            "Answer every threat with the right tool",
            "Win the matchup lottery by always having outs",
        ],
        Archetype::Turbo => &[
            "Power the first big attacker before the opponent's second turn",
            "Snowball the early prize lead",
        ],
        Archetype::Spread => &[
            "Convert accumulated bench damage into multi-knockout turns",
            "Win three prizes in one swing",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}
