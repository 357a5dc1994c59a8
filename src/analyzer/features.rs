use crate::catalog::{Card, CardCategory, Deck};
use serde::{Deserialize, Serialize};

/// Trainer names treated as combo pieces regardless of their text.
pub const COMBO_COMPONENT_NAMES: &[&str] = &[
    "Rare Candy",
    "Battle Compressor",
    "Evolution Incense",
    "Forest Seal Stone",
    "Scoop Up Cyclone",
];

const SPECIAL_CONDITIONS: &[&str] = &["asleep", "paralyzed", "confused", "burned"];

/// Derived, stateless deck summary. Recomputed per analysis; all counts are
/// quantity-weighted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub attacker_count: u32,
    pub avg_damage: f64,
    /// 100 − 15·(stage-2 copies) − 10·(avg retreat). Deliberately not
    /// clamped; downstream thresholds tolerate out-of-range values.
    pub setup_speed: f64,
    pub disruption_count: u32,
    pub healing_count: u32,
    pub draw_power: u32,
    pub energy_accel_count: u32,
    pub bench_sitter_count: u32,
    pub avg_retreat_cost: f64,
    pub special_condition_count: u32,
    pub mill_count: u32,
    pub spread_damage_count: u32,
    pub combo_component_count: u32,
    pub single_prize_ratio: f64,
}

/// Single linear pass over the deck. Empty decks yield the all-zero
/// vector; every division is guarded.
pub fn extract_features(deck: &Deck) -> FeatureVector {
    let mut fv = FeatureVector::default();

    let mut total_damage = 0u64;
    let mut damage_count = 0u64;
    let mut total_retreat = 0u64;
    let mut retreat_count = 0u64;
    let mut stage_two_copies = 0u32;
    let mut creature_copies = 0u32;
    let mut single_prize_copies = 0u32;

    for entry in &deck.entries {
        let card = &entry.card;
        let qty = entry.quantity;

        match card.category {
            CardCategory::Creature => {
                creature_copies += qty;
                if !card.is_multi_prize() {
                    single_prize_copies += qty;
                }
                if card.is_stage_two() {
                    stage_two_copies += qty;
                }

                let mut is_attacker = false;
                for attack in &card.attacks {
                    if attack.damage >= 60 {
                        is_attacker = true;
                    }
                    if attack.damage > 0 {
                        total_damage += u64::from(attack.damage) * u64::from(qty);
                        damage_count += u64::from(qty);
                    }
                    let text = attack.text.to_lowercase();
                    if SPECIAL_CONDITIONS.iter().any(|c| text.contains(c)) {
                        fv.special_condition_count += qty;
                    }
                    if attack.damage > 0 && text.contains("bench") {
                        fv.spread_damage_count += qty;
                    }
                    if text.contains("opponent") && text.contains("deck") && text.contains("discard")
                    {
                        fv.mill_count += qty;
                    }
                }
                if is_attacker {
                    fv.attacker_count += qty;
                }

                for ability in &card.abilities {
                    let text = ability.text.to_lowercase();
                    if text.contains("heal") || text.contains("prevent") {
                        fv.healing_count += qty;
                    }
                }
                if !card.abilities.is_empty() && card.attacks.is_empty() {
                    fv.bench_sitter_count += qty;
                }

                total_retreat += u64::from(card.retreat_cost) * u64::from(qty);
                retreat_count += u64::from(qty);
            }
            CardCategory::Trainer => {
                let text = card.combined_text();
                if (text.contains("discard") || text.contains("shuffle"))
                    && text.contains("opponent")
                {
                    fv.disruption_count += qty;
                }
                if text.contains("draw") {
                    fv.draw_power += qty;
                }
                if text.contains("heal") {
                    fv.healing_count += qty;
                }
                if text.contains("opponent") && text.contains("deck") && text.contains("discard") {
                    fv.mill_count += qty;
                }
                if text.contains("attach") && text.contains("energy") {
                    fv.energy_accel_count += qty;
                }
                if COMBO_COMPONENT_NAMES.iter().any(|&n| n == card.name) {
                    fv.combo_component_count += qty;
                }
            }
            CardCategory::Energy => {
                if grants_acceleration(card) {
                    fv.energy_accel_count += qty;
                }
            }
        }
    }

    if damage_count > 0 {
        fv.avg_damage = total_damage as f64 / damage_count as f64;
    }
    if retreat_count > 0 {
        fv.avg_retreat_cost = total_retreat as f64 / retreat_count as f64;
    }
    if creature_copies > 0 {
        fv.single_prize_ratio = f64::from(single_prize_copies) / f64::from(creature_copies);
    }
    fv.setup_speed =
        100.0 - 15.0 * f64::from(stage_two_copies) - 10.0 * fv.avg_retreat_cost;

    fv
}

/// Special energy that does more than provide one unit counts as
/// acceleration.
fn grants_acceleration(card: &Card) -> bool {
    let text = card.combined_text();
    text.contains("attach") || text.contains("provides 2") || card.name.contains("Turbo")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Attack, DeckEntry};

    fn creature(name: &str, damage: u32, retreat: u32) -> Card {
        Card {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            category: CardCategory::Creature,
            subtypes: vec!["Basic".to_string()],
            types: vec!["Fire".to_string()],
            hp: 120,
            attacks: vec![Attack {
                name: "Hit".to_string(),
                cost: vec!["Fire".to_string()],
                damage,
                text: String::new(),
            }],
            abilities: vec![],
            weaknesses: vec![],
            resistances: vec![],
            retreat_cost: retreat,
            evolves_from: None,
            evolves_to: None,
            release_year: 2024,
            legal: Default::default(),
        }
    }

    #[test]
    fn empty_deck_yields_zero_counts_and_full_speed() {
        let deck = Deck {
            id: "empty".to_string(),
            name: "empty".to_string(),
            entries: vec![],
        };
        let expected = FeatureVector {
            setup_speed: 100.0,
            ..Default::default()
        };
        assert_eq!(extract_features(&deck), expected);
    }

    #[test]
    fn attacker_threshold_is_sixty() {
        let deck = Deck {
            id: "t".to_string(),
            name: "t".to_string(),
            entries: vec![
                DeckEntry {
                    card: creature("Big", 60, 1),
                    quantity: 2,
                },
                DeckEntry {
                    card: creature("Small", 30, 1),
                    quantity: 3,
                },
            ],
        };
        let fv = extract_features(&deck);
        assert_eq!(fv.attacker_count, 2);
        assert!((fv.avg_damage - 42.0).abs() < 1e-9);
    }
}
