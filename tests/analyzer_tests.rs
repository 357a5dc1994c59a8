mod common;

use common::*;
use deckforge::analyzer::{validate_deck, DeckAnalyzer, Severity};
use deckforge::catalog::Deck;
use deckforge::collab::MemoryCache;
use deckforge::config::{AnalysisConfig, Format};

fn config() -> AnalysisConfig {
    AnalysisConfig {
        format: Format::Standard,
        include_rotation: false,
    }
}

#[test]
fn legal_sixty_deck_raises_no_errors() {
    let warnings = validate_deck(&legal_sixty_deck(), &config());
    assert!(
        warnings.iter().all(|w| w.severity != Severity::Error),
        "unexpected errors: {:?}",
        warnings
    );
}

#[test]
fn undersized_deck_reports_size_error_with_suggestion() {
    let d = deck(
        "short",
        vec![entry(basic_creature("Scout", "Grass", 60, 1), 4)],
    );
    let warnings = validate_deck(&d, &config());
    let size = warnings
        .iter()
        .find(|w| w.category == "Deck Size")
        .expect("size error");
    assert_eq!(size.severity, Severity::Error);
    assert!(size.suggestion.as_deref().unwrap().contains("56"));
}

#[test]
fn copy_limit_spares_basic_energy() {
    let d = deck(
        "energy heavy",
        vec![
            entry(basic_creature("Scout", "Fire", 60, 1), 4),
            entry(energy("Fire Energy"), 20),
        ],
    );
    let warnings = validate_deck(&d, &config());
    assert!(!warnings.iter().any(|w| w.category == "Copy Limit"));
}

#[test]
fn copy_limit_flags_and_sorts_offenders() {
    let d = deck(
        "greedy",
        vec![
            entry(trainer("Zeta Draw", "Draw 2 cards."), 5),
            entry(trainer("Alpha Draw", "Draw 2 cards."), 6),
            entry(basic_creature("Scout", "Fire", 60, 1), 4),
        ],
    );
    let warnings = validate_deck(&d, &config());
    let limit = warnings
        .iter()
        .find(|w| w.category == "Copy Limit")
        .expect("copy limit error");
    assert_eq!(limit.affected_cards, vec!["Alpha Draw", "Zeta Draw"]);
}

#[test]
fn missing_draw_support_is_a_warning_not_an_error() {
    let d = deck(
        "no draw",
        vec![
            entry(basic_creature("Scout", "Fire", 60, 1), 4),
            entry(energy("Fire Energy"), 10),
        ],
    );
    let warnings = validate_deck(&d, &config());
    let draw = warnings
        .iter()
        .find(|w| w.category == "Draw Support")
        .expect("draw support warning");
    assert_eq!(draw.severity, Severity::Warning);
}

#[test]
fn analyze_produces_a_complete_report() {
    let analyzer = DeckAnalyzer::new();
    let report = analyzer.analyze(&legal_sixty_deck(), &config());

    assert_eq!(report.deck_name, "Legal Sixty");
    assert_eq!(report.format, Format::Standard);
    assert!((0.0..=100.0).contains(&report.scores.overall));
    assert!(report.recommendations.len() <= 10);
    assert!(!report.performance_summary.is_empty());
    assert!(report.performance_summary.contains(&report.deck_name));
}

#[test]
fn recommendations_are_priority_sorted() {
    // A broken list emits plenty of recommendations across priorities.
    let d = deck(
        "mess",
        vec![
            entry(trainer("Hoarder", "Put 3 cards from your deck into your hand."), 5),
            entry(trainer("Grabber", "Put a card from your deck into your hand."), 4),
            entry(energy("Fire Energy"), 10),
        ],
    );
    let report = DeckAnalyzer::new().analyze(&d, &config());
    assert!(!report.recommendations.is_empty());
    let priorities: Vec<_> = report
        .recommendations
        .iter()
        .map(|r| r.priority)
        .collect();
    let mut sorted = priorities.clone();
    sorted.sort();
    assert_eq!(priorities, sorted);
}

#[test]
fn memory_cache_serves_the_second_request() {
    let analyzer = DeckAnalyzer::new().with_cache(Box::new(MemoryCache::default()));
    let d = legal_sixty_deck();
    let first = analyzer.analyze(&d, &config());
    let second = analyzer.analyze(&d, &config());
    // Identical timestamp proves the pipeline did not rerun.
    assert_eq!(first.timestamp, second.timestamp);
    assert_eq!(first.performance_summary, second.performance_summary);
}

#[test]
fn cache_keys_on_deck_id_so_name_collisions_stay_separate() {
    // Two different lists published under the same display name must
    // never serve each other's cached report.
    let analyzer = DeckAnalyzer::new().with_cache(Box::new(MemoryCache::default()));

    let mut aggro = aggro_scenario_deck();
    aggro.id = "list-a".to_string();
    aggro.name = "Tournament List".to_string();
    let mut empty = deck("Tournament List", vec![]);
    empty.id = "list-b".to_string();

    let first = analyzer.analyze(&aggro, &config());
    let second = analyzer.analyze(&empty, &config());
    assert_ne!(
        first.archetype.primary, second.archetype.primary,
        "second deck was served the first deck's cached report"
    );
    assert_ne!(first.timestamp, second.timestamp);
}

#[test]
fn cache_key_separates_formats() {
    let analyzer = DeckAnalyzer::new().with_cache(Box::new(MemoryCache::default()));
    let d = legal_sixty_deck();
    let standard = analyzer.analyze(&d, &config());
    let expanded = analyzer.analyze(
        &d,
        &AnalysisConfig {
            format: Format::Expanded,
            include_rotation: false,
        },
    );
    assert_eq!(standard.format, Format::Standard);
    assert_eq!(expanded.format, Format::Expanded);
}

#[test]
fn report_round_trips_through_json() {
    let report = DeckAnalyzer::new().analyze(&aggro_scenario_deck(), &config());
    let json = serde_json::to_string(&report).unwrap();
    let back: deckforge::analyzer::AnalysisReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.deck_name, report.deck_name);
    assert_eq!(back.archetype.primary, report.archetype.primary);
    assert!((back.scores.overall - report.scores.overall).abs() < 1e-9);
    assert_eq!(back.recommendations.len(), report.recommendations.len());
    for (a, b) in back.recommendations.iter().zip(&report.recommendations) {
        assert_eq!(a.reason, b.reason);
        assert_eq!(a.priority, b.priority);
    }
}

#[test]
fn report_json_uses_camel_case_keys() {
    let report = DeckAnalyzer::new().analyze(&aggro_scenario_deck(), &config());
    let value: serde_json::Value = serde_json::to_value(&report).unwrap();
    let obj = value.as_object().unwrap();
    assert!(obj.contains_key("deckName"));
    assert!(obj.contains_key("performanceSummary"));
    assert!(!obj.contains_key("deck_name"));
}

#[test]
fn deck_quantity_helpers_sum_split_entries() {
    let d = Deck {
        id: "split".to_string(),
        name: "split".to_string(),
        entries: vec![
            entry(basic_creature("Scout", "Fire", 60, 1), 2),
            entry(basic_creature("Scout", "Fire", 60, 1), 1),
        ],
    };
    assert_eq!(d.quantity_of("Scout"), 3);
    assert_eq!(d.unique_cards().len(), 1);
}
