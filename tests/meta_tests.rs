mod common;

use common::*;
use deckforge::analyzer::archetype::Archetype;
use deckforge::analyzer::meta::{self, catalog::meta_decks, matchup::estimate_matchup, Tier};
use deckforge::config::{AnalysisConfig, Format};

fn config() -> AnalysisConfig {
    AnalysisConfig {
        format: Format::Standard,
        include_rotation: false,
    }
}

#[test]
fn key_cards_and_archetype_match_a_catalog_deck() {
    let d = deck(
        "ember",
        vec![
            entry(basic_creature("Emberfang V", "Fire", 130, 1), 4),
            entry(trainer("Blaze Charger", "Attach a fire energy from your discard pile."), 4),
        ],
    );
    let analysis = meta::evaluate(&d, Archetype::Aggro, &config());
    assert_eq!(analysis.archetype_match, "Inferno Rush");
}

#[test]
fn unmatched_deck_is_rogue() {
    let d = deck(
        "homebrew",
        vec![entry(basic_creature("Unknown Critter", "Colorless", 50, 1), 4)],
    );
    let analysis = meta::evaluate(&d, Archetype::Toolbox, &config());
    assert_eq!(analysis.archetype_match, "Rogue Deck");
    assert_eq!(analysis.tier, Tier::Rogue);
}

#[test]
fn full_key_card_set_sets_tier_from_popularity() {
    let d = deck(
        "netdeck",
        vec![
            entry(basic_creature("Emberfang V", "Fire", 130, 1), 4),
            entry(trainer("Blaze Charger", "Attach a fire energy from your discard pile."), 4),
        ],
    );
    // Inferno Rush sits at 18% popularity: tier 1.
    let analysis = meta::evaluate(&d, Archetype::Aggro, &config());
    assert_eq!(analysis.tier, Tier::Tier1);
}

#[test]
fn win_rates_are_clamped_to_twenty_eighty() {
    for d in [aggro_scenario_deck(), legal_sixty_deck(), deck("empty", vec![])] {
        let analysis = meta::evaluate(&d, Archetype::Aggro, &config());
        assert_eq!(analysis.matchups.len(), meta_decks().len());
        for m in &analysis.matchups {
            assert!((20.0..=80.0).contains(&m.win_rate), "{} at {}", m.opponent, m.win_rate);
        }
    }
}

#[test]
fn named_counter_card_swings_its_matchup() {
    let inferno = meta_decks()
        .iter()
        .find(|m| m.name == "Inferno Rush")
        .unwrap();

    let plain = deck(
        "plain",
        vec![entry(basic_creature("Wall", "Colorless", 40, 3), 4)],
    );
    let teched = deck(
        "teched",
        vec![
            entry(basic_creature("Wall", "Colorless", 40, 3), 4),
            entry(trainer("Chill Curtain", "Attacks cost 1 more energy."), 2),
        ],
    );

    let base = estimate_matchup(&plain, Archetype::Control, inferno);
    let swung = estimate_matchup(&teched, Archetype::Control, inferno);
    assert!(swung.win_rate > base.win_rate);
    assert!(swung.notes.iter().any(|n| n.contains("Chill Curtain")));
}

#[test]
fn weakness_exploiters_raise_the_win_rate() {
    let inferno = meta_decks()
        .iter()
        .find(|m| m.name == "Inferno Rush")
        .unwrap();
    // Inferno Rush declares a Water weakness.
    let soaker = deck(
        "soaker",
        vec![entry(basic_creature("Tidecaller", "Water", 90, 1), 4)],
    );
    let m = estimate_matchup(&soaker, Archetype::Midrange, inferno);
    assert!(m.notes.iter().any(|n| n.contains("weakness")));
}

#[test]
fn ability_reliance_is_flagged_over_threshold() {
    let mut engine = basic_creature("Engine", "Psychic", 0, 1);
    engine.attacks.clear();
    engine.abilities = vec![deckforge::catalog::Ability {
        name: "Cycle".to_string(),
        text: "Once during your turn, you may draw a card.".to_string(),
    }];
    let d = deck("engine", vec![entry(engine, 8)]);
    let analysis = meta::evaluate(&d, Archetype::Combo, &config());
    assert!(analysis
        .weaknesses
        .iter()
        .any(|w| w.name == "Ability Dependence" && (1.0..=10.0).contains(&w.severity)));
}

#[test]
fn illegal_card_zeroes_format_viability() {
    let mut relic = basic_creature("Relic Beast", "Fighting", 80, 2);
    relic.legal.standard = false;
    let d = deck("old", vec![entry(relic, 2)]);
    let analysis = meta::evaluate(&d, Archetype::Midrange, &config());
    assert_eq!(analysis.format.viability, 0.0);
    assert_eq!(analysis.format.illegal_cards, vec!["Relic Beast".to_string()]);
}

#[test]
fn rotation_weighs_low_copy_cards_double() {
    let mut old_single = trainer("Quick Ball", "Search your deck for a basic creature.");
    old_single.release_year = 2021;
    let mut old_playset = trainer("Old Switch", "Switch your active creature.");
    old_playset.release_year = 2021;

    let d = deck(
        "rotating",
        vec![entry(old_single, 2), entry(old_playset, 4)],
    );
    let mut cfg = config();
    cfg.include_rotation = true;
    let analysis = meta::evaluate(&d, Archetype::Midrange, &cfg);
    let rotation = analysis.rotation.expect("rotation requested");
    // 2 copies x10 + 4 copies x5.
    assert!((rotation.impact_score - 40.0).abs() < 1e-9);
    let quick_ball = rotation
        .rotating_cards
        .iter()
        .find(|c| c.name == "Quick Ball")
        .unwrap();
    assert_eq!(quick_ball.replacements, vec!["Nest Ball", "Ultra Ball"]);
}

#[test]
fn rotation_is_omitted_unless_requested() {
    let analysis = meta::evaluate(&legal_sixty_deck(), Archetype::Midrange, &config());
    assert!(analysis.rotation.is_none());
}

#[test]
fn catalog_entries_carry_complete_static_data() {
    for meta in meta_decks() {
        assert!(!meta.key_cards.is_empty(), "{} has no key cards", meta.name);
        assert!(meta.popularity > 0.0);
        assert!(!meta.weaknesses.is_empty());
        assert!(!meta.win_condition.is_empty());
    }
}

#[test]
fn tech_coverage_aggregates_across_matchup_and_weakness_tables() {
    // A bench-reliant stall list loses to Storm Spread AND is flagged
    // for Bench Dependence; Bench Barrier Fan sits in both tech tables,
    // so its one recommendation must cover both and rank first.
    let mut sitter = basic_creature("Cheer Captain", "Colorless", 0, 1);
    sitter.attacks.clear();
    sitter.abilities = vec![deckforge::catalog::Ability {
        name: "Rally".to_string(),
        text: "Once during your turn, you may heal 20 damage.".to_string(),
    }];
    let d = deck("cheer squad", vec![entry(sitter, 4)]);

    let analysis = meta::evaluate(&d, Archetype::Stall, &config());
    assert!(analysis
        .weaknesses
        .iter()
        .any(|w| w.name == "Bench Dependence"));

    let fan_entries: Vec<_> = analysis
        .tech_recommendations
        .iter()
        .filter(|t| t.card == "Bench Barrier Fan")
        .collect();
    assert_eq!(fan_entries.len(), 1, "one merged recommendation per card");
    let fan = fan_entries[0];
    assert!(fan.improves.contains(&"Storm Spread".to_string()));
    assert!(fan.improves.contains(&"Bench Dependence".to_string()));
    assert_eq!(analysis.tech_recommendations[0].card, "Bench Barrier Fan");
}

#[test]
fn tech_recommendations_cap_at_five_and_skip_owned_cards() {
    // A slow stall list loses several matchups; its tech table output
    // must stay bounded and never suggest a card already in the list.
    let mut wall = basic_creature("Bastion Colossus", "Metal", 20, 4);
    wall.subtypes.push("Stage2".to_string());
    wall.evolves_from = Some("Bastion Core".to_string());
    let d = deck(
        "walls",
        vec![
            entry(wall, 4),
            entry(trainer("Sanctuary Wall", "Heal 30 damage from each of your creatures."), 4),
        ],
    );
    let analysis = meta::evaluate(&d, Archetype::Stall, &config());
    assert!(analysis.tech_recommendations.len() <= 5);
    for tech in &analysis.tech_recommendations {
        assert!(!d.contains(&tech.card), "{} already owned", tech.card);
    }
    // Sorted by breadth: wider coverage never follows narrower.
    let widths: Vec<usize> = analysis
        .tech_recommendations
        .iter()
        .map(|t| t.improves.len())
        .collect();
    let mut sorted = widths.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(widths, sorted);
}
