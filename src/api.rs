//! Library boundary. Callers that need custom collaborators build a
//! `DeckAnalyzer` directly; these helpers cover the common case.

use crate::analyzer::archetype::{self, ArchetypeClassification};
use crate::analyzer::synergy::{self, SynergyGraph};
use crate::analyzer::{features, AnalysisReport, DeckAnalyzer};
use crate::catalog::Deck;
use crate::config::AnalysisConfig;

/// Run the full pipeline with the default collaborators (no cache,
/// baseline probes).
pub fn analyze(deck: &Deck, config: &AnalysisConfig) -> AnalysisReport {
    DeckAnalyzer::new().analyze(deck, config)
}

/// Feature extraction + archetype classification only.
pub fn classify(deck: &Deck) -> ArchetypeClassification {
    let fv = features::extract_features(deck);
    archetype::classify_features(&fv)
}

/// Synergy graph only: nodes, edges, combos and coherence.
pub fn build_synergy_graph(deck: &Deck) -> SynergyGraph {
    synergy::build_graph(deck)
}
