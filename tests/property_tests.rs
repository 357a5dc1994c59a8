mod common;

use common::*;
use deckforge::analyzer::archetype::{classify_features, score_archetype, Archetype};
use deckforge::analyzer::features::FeatureVector;
use deckforge::analyzer::{validate_deck, DeckAnalyzer};
use deckforge::catalog::CardCategory;
use deckforge::config::{AnalysisConfig, Format};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn feature_vector() -> impl Strategy<Value = FeatureVector> {
    (
        0u32..=60,
        0.0f64..=300.0,
        -50.0f64..=100.0,
        0u32..=60,
        0u32..=60,
        0u32..=60,
        0u32..=60,
        0u32..=60,
        (0.0f64..=5.0, 0.0f64..=1.0),
        (0u32..=60, 0u32..=60, 0u32..=60, 0u32..=60),
    )
        .prop_map(
            |(
                attacker_count,
                avg_damage,
                setup_speed,
                disruption_count,
                healing_count,
                draw_power,
                energy_accel_count,
                bench_sitter_count,
                (avg_retreat_cost, single_prize_ratio),
                (special_condition_count, mill_count, spread_damage_count, combo_component_count),
            )| FeatureVector {
                attacker_count,
                avg_damage,
                setup_speed,
                disruption_count,
                healing_count,
                draw_power,
                energy_accel_count,
                bench_sitter_count,
                avg_retreat_cost,
                special_condition_count,
                mill_count,
                spread_damage_count,
                combo_component_count,
                single_prize_ratio,
            },
        )
}

fn small_deck() -> impl Strategy<Value = deckforge::catalog::Deck> {
    let card = (
        "[A-Z][a-z]{2,8}",
        prop_oneof![
            Just(CardCategory::Creature),
            Just(CardCategory::Trainer),
            Just(CardCategory::Energy),
        ],
        0u32..=250,
        0u32..=4,
        1u32..=6,
    )
        .prop_map(|(name, category, damage, retreat, qty)| {
            let c = match category {
                CardCategory::Creature => basic_creature(&name, "Fire", damage, retreat),
                CardCategory::Trainer => trainer(&name, "Draw 2 cards."),
                CardCategory::Energy => energy(&name),
            };
            entry(c, qty)
        });
    proptest::collection::vec(card, 0..12).prop_map(|entries| deck("generated", entries))
}

proptest! {
    #[test]
    fn primary_is_always_the_argmax(fv in feature_vector()) {
        let c = classify_features(&fv);
        let primary_score = score_archetype(c.primary, &fv);
        for archetype in Archetype::iter() {
            prop_assert!(score_archetype(archetype, &fv) <= primary_score);
        }
    }

    #[test]
    fn confidence_is_always_within_bounds(fv in feature_vector()) {
        let c = classify_features(&fv);
        prop_assert!((50..=100).contains(&c.confidence));
    }

    #[test]
    fn secondary_differs_and_clears_forty(fv in feature_vector()) {
        let c = classify_features(&fv);
        if let Some(secondary) = c.secondary {
            prop_assert_ne!(secondary, c.primary);
            prop_assert!(score_archetype(secondary, &fv) > 40);
        }
    }

    #[test]
    fn ties_resolve_to_the_earliest_variant(fv in feature_vector()) {
        let c = classify_features(&fv);
        let primary_score = score_archetype(c.primary, &fv);
        for archetype in Archetype::iter() {
            if archetype == c.primary {
                break;
            }
            prop_assert!(score_archetype(archetype, &fv) < primary_score);
        }
    }

    #[test]
    fn validation_never_panics(d in small_deck()) {
        for format in [Format::Standard, Format::Expanded] {
            let cfg = AnalysisConfig { format, include_rotation: false };
            let _ = validate_deck(&d, &cfg);
        }
    }

    #[test]
    fn full_pipeline_bounds_hold_for_generated_decks(d in small_deck()) {
        let cfg = AnalysisConfig { format: Format::Standard, include_rotation: true };
        let report = DeckAnalyzer::new().analyze(&d, &cfg);
        prop_assert!((0.0..=100.0).contains(&report.scores.overall));
        prop_assert!((0.0..=1.0).contains(&report.synergy.overall_coherence));
        prop_assert!(report.recommendations.len() <= 10);
        for m in &report.meta.matchups {
            prop_assert!((20.0..=80.0).contains(&m.win_rate));
        }
    }
}
