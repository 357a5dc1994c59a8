use super::features::FeatureVector;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// The nine strategic archetypes. Enumeration order is a contract: the
/// classifier's single selection pass uses strict `>`, so exact score ties
/// resolve to the earlier variant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Archetype {
    Aggro,
    Control,
    Combo,
    Midrange,
    Mill,
    Stall,
    Toolbox,
    Turbo,
    Spread,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeClassification {
    pub primary: Archetype,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Archetype>,
    pub confidence: u32,
    pub characteristics: Vec<String>,
    pub playstyle: String,
}

/// Tiered bonus sum for one archetype. Every band here is a product
/// contract pinned by the test suite; do not retune casually.
pub fn score_archetype(archetype: Archetype, fv: &FeatureVector) -> u32 {
    match archetype {
        Archetype::Aggro => {
            let mut score = 0;
            score += band(fv.avg_damage, &[(120.0, 30), (90.0, 20), (60.0, 10)]);
            score += band(fv.setup_speed, &[(80.0, 20), (60.0, 10)]);
            score += band_u32(fv.attacker_count, &[(8, 20), (4, 15), (2, 5)]);
            if fv.draw_power >= 4 {
                score += 10;
            }
            if fv.attacker_count > 0 && fv.avg_retreat_cost <= 1.0 {
                score += 10;
            }
            score
        }
        Archetype::Control => {
            let mut score = 0;
            score += band_u32(fv.disruption_count, &[(8, 30), (4, 20), (2, 10)]);
            score += band_u32(fv.special_condition_count, &[(4, 20), (2, 10)]);
            score += band_u32(fv.draw_power, &[(6, 15), (3, 10)]);
            if fv.healing_count >= 2 {
                score += 10;
            }
            if fv.disruption_count >= 2 && fv.avg_damage < 90.0 {
                score += 10;
            }
            score
        }
        Archetype::Combo => {
            let mut score = 0;
            score += band_u32(fv.combo_component_count, &[(6, 35), (3, 25), (1, 10)]);
            score += band_u32(fv.draw_power, &[(6, 25), (4, 15)]);
            score += band_u32(fv.energy_accel_count, &[(3, 15), (1, 5)]);
            if fv.bench_sitter_count >= 2 {
                score += 10;
            }
            score
        }
        Archetype::Midrange => {
            // Deliberate default bias: the all-round plan starts at 40.
            let mut score = 40;
            if (60.0..120.0).contains(&fv.avg_damage) {
                score += 15;
            }
            if (50.0..80.0).contains(&fv.setup_speed) {
                score += 10;
            }
            if fv.disruption_count >= 1 && fv.healing_count >= 1 {
                score += 10;
            }
            if fv.single_prize_ratio >= 0.5 {
                score += 10;
            }
            score
        }
        Archetype::Mill => {
            let mut score = 0;
            score += band_u32(fv.mill_count, &[(6, 40), (3, 25), (1, 10)]);
            score += band_u32(fv.disruption_count, &[(4, 20), (2, 10)]);
            if fv.healing_count >= 2 {
                score += 10;
            }
            if fv.draw_power >= 4 {
                score += 10;
            }
            score
        }
        Archetype::Stall => {
            let mut score = 0;
            score += band_u32(fv.healing_count, &[(4, 30), (2, 15)]);
            if fv.avg_damage > 0.0 && fv.avg_damage < 40.0 {
                score += 20;
            }
            if fv.special_condition_count >= 2 {
                score += 10;
            }
            if fv.disruption_count >= 2 {
                score += 10;
            }
            if fv.bench_sitter_count >= 2 {
                score += 10;
            }
            if fv.single_prize_ratio >= 0.8 {
                score += 10;
            }
            score
        }
        Archetype::Toolbox => {
            let axes = [
                fv.disruption_count >= 1,
                fv.healing_count >= 1,
                fv.draw_power >= 1,
                fv.energy_accel_count >= 1,
                fv.special_condition_count >= 1,
                fv.spread_damage_count >= 1,
            ]
            .iter()
            .filter(|&&b| b)
            .count() as u32;
            let mut score = 0;
            score += band_u32(axes, &[(5, 40), (4, 25), (3, 15)]);
            if fv.attacker_count >= 3 {
                score += 10;
            }
            if fv.single_prize_ratio >= 0.5 {
                score += 10;
            }
            score
        }
        Archetype::Turbo => {
            let mut score = 0;
            score += band_u32(fv.energy_accel_count, &[(6, 35), (3, 20), (1, 10)]);
            score += band(fv.setup_speed, &[(90.0, 25), (75.0, 15)]);
            if fv.avg_damage >= 120.0 {
                score += 15;
            }
            if fv.draw_power >= 4 {
                score += 10;
            }
            score
        }
        Archetype::Spread => {
            let mut score = 0;
            score += band_u32(fv.spread_damage_count, &[(6, 40), (3, 25), (1, 10)]);
            if fv.special_condition_count >= 2 {
                score += 10;
            }
            if fv.attacker_count >= 2 {
                score += 10;
            }
            if (30.0..90.0).contains(&fv.avg_damage) {
                score += 10;
            }
            score
        }
    }
}

/// First matching threshold wins; thresholds must be listed descending.
fn band(value: f64, tiers: &[(f64, u32)]) -> u32 {
    tiers
        .iter()
        .find(|(t, _)| value >= *t)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

fn band_u32(value: u32, tiers: &[(u32, u32)]) -> u32 {
    tiers
        .iter()
        .find(|(t, _)| value >= *t)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Score all nine archetypes and pick primary/secondary in one pass.
/// Total over any vector; an all-zero vector lands on Midrange via its
/// base score.
pub fn classify_features(fv: &FeatureVector) -> ArchetypeClassification {
    let mut primary = Archetype::Aggro;
    let mut primary_score = 0u32;
    let mut secondary = None;
    let mut secondary_score = 0u32;

    for archetype in Archetype::iter() {
        let score = score_archetype(archetype, fv);
        debug!(archetype = %archetype, score, "archetype scored");
        if score > primary_score {
            secondary = Some(primary);
            secondary_score = primary_score;
            primary = archetype;
            primary_score = score;
        } else if score > secondary_score {
            secondary = Some(archetype);
            secondary_score = score;
        }
    }

    // A runner-up only counts as a real secondary identity above 40.
    let secondary = secondary.filter(|_| secondary_score > 40);

    let gap = primary_score.saturating_sub(secondary_score);
    let mut confidence = primary_score.min(100) as i64;
    if gap >= 30 {
        confidence += 20;
    } else if gap >= 20 {
        confidence += 10;
    } else if gap <= 10 {
        confidence -= 20;
    }
    let confidence = confidence.clamp(50, 100) as u32;

    ArchetypeClassification {
        primary,
        secondary,
        confidence,
        characteristics: characteristics(primary),
        playstyle: playstyle(primary).to_string(),
    }
}

/// Static descriptive text, not computed.
pub fn characteristics(archetype: Archetype) -> Vec<String> {
    let list: [&str; 5] = match archetype {
        Archetype::Aggro => [
            "High average attack damage",
            "Fast setup with minimal evolution",
            "Low retreat costs keep attackers mobile",
            "Trades card advantage for board pressure",
            "Wins the prize race early",
        ],
        Archetype::Control => [
            "Heavy hand and board disruption",
            "Special conditions slow the opponent",
            "Resource denial over raw damage",
            "Strong draw engine to sustain answers",
            "Wins long, grindy games",
        ],
        Archetype::Combo => [
            "Built around specific card packages",
            "Deep search and draw to assemble pieces",
            "Explosive turns once assembled",
            "Bench support fuels the engine",
            "Vulnerable while setting up",
        ],
        Archetype::Midrange => [
            "Balanced damage and resilience",
            "Flexible game plan against any field",
            "Efficient single-prize attackers",
            "Adapts between beatdown and defense",
            "Few outright bad matchups",
        ],
        Archetype::Mill => [
            "Empties the opponent's deck",
            "Avoids direct confrontation",
            "Disruption buys additional turns",
            "Healing and walls extend the game",
            "Wins by deck-out, not prizes",
        ],
        Archetype::Stall => [
            "Maximizes survivability",
            "Healing and protection every turn",
            "Starves the opponent of targets",
            "Single-prize walls frustrate attackers",
            "Wins on time and attrition",
        ],
        Archetype::Toolbox => [
            "One-of answers for every situation",
            "Broad type coverage",
            "Search cards find the right tool",
            "Flexible attacker lineup",
            "Adapts mid-game to the matchup",
        ],
        Archetype::Turbo => [
            "Energy acceleration above all",
            "Attacks a turn earlier than fair decks",
            "Big attackers powered ahead of curve",
            "Draw support keeps the engine fed",
            "Snowballs an early lead",
        ],
        Archetype::Spread => [
            "Damage across the whole bench",
            "Sets up multi-prize turns",
            "Damage counters enable cheap knockouts",
            "Special conditions stack with chip damage",
            "Wins several prizes at once",
        ],
    };
    list.iter().map(|s| s.to_string()).collect()
}

pub fn playstyle(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Aggro => {
            "Apply maximum pressure from turn one and take six prizes before the opponent stabilizes."
        }
        Archetype::Control => {
            "Deny resources and answers until the opponent cannot execute their game plan."
        }
        Archetype::Combo => {
            "Assemble a specific package of cards, then convert it into one or two devastating turns."
        }
        Archetype::Midrange => {
            "Trade efficiently at every stage and pivot between aggression and defense as the game demands."
        }
        Archetype::Mill => {
            "Discard the opponent's deck faster than they can win, then let them draw into nothing."
        }
        Archetype::Stall => {
            "Survive indefinitely behind healing and protection until the opponent runs out of gas."
        }
        Archetype::Toolbox => {
            "Search out the precise answer for each threat and keep every matchup winnable."
        }
        Archetype::Turbo => {
            "Accelerate energy ahead of curve and attack with a fully powered threat before the opponent is ready."
        }
        Archetype::Spread => {
            "Seed damage across the bench, then sweep multiple knockouts in a single turn."
        }
    }
}

/// Relative setup tempo, 0 (slowest) to 5 (fastest). Used by the
/// matchup model's speed-difference adjustment.
pub fn speed_rank(archetype: Archetype) -> i32 {
    match archetype {
        Archetype::Turbo => 5,
        Archetype::Aggro => 4,
        Archetype::Combo | Archetype::Midrange | Archetype::Spread => 3,
        Archetype::Toolbox | Archetype::Control => 2,
        Archetype::Mill => 1,
        Archetype::Stall => 0,
    }
}
