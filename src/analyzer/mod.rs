pub mod archetype;
pub mod features;
pub mod meta;
pub mod recommend;
pub mod scoring;
pub mod synergy;

use crate::catalog::{is_unlimited_energy, CardCategory, Deck};
use crate::collab::{
    BaselineConsistencyProbe, BaselineSpeedProbe, ConsistencyProbe, ConsistencyReport, NoopCache,
    ResultCache, SpeedProbe, SpeedReport,
};
use crate::config::{AnalysisConfig, Format, CACHE_TTL_SECONDS};
use archetype::ArchetypeClassification;
use chrono::{DateTime, Utc};
use meta::MetaAnalysis;
use recommend::Recommendation;
use scoring::DeckScores;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use synergy::SynergyGraph;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Error,
    Warning,
}

/// Domain-rule violations surface as warnings, never as failures: a
/// half-edited deck is a normal input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisWarning {
    pub severity: Severity,
    pub category: String,
    pub message: String,
    #[serde(default)]
    pub affected_cards: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub deck_name: String,
    pub format: Format,
    pub consistency: ConsistencyReport,
    pub speed: SpeedReport,
    pub synergy: SynergyGraph,
    pub meta: MetaAnalysis,
    pub archetype: ArchetypeClassification,
    pub scores: DeckScores,
    pub recommendations: Vec<Recommendation>,
    pub warnings: Vec<AnalysisWarning>,
    pub performance_summary: String,
    pub timestamp: DateTime<Utc>,
}

/// Orchestrator. Holds only injected collaborators; all per-analysis
/// state is built and discarded inside `analyze`.
pub struct DeckAnalyzer {
    cache: Box<dyn ResultCache>,
    consistency_probe: Box<dyn ConsistencyProbe>,
    speed_probe: Box<dyn SpeedProbe>,
}

impl Default for DeckAnalyzer {
    fn default() -> Self {
        Self {
            cache: Box::new(NoopCache),
            consistency_probe: Box::new(BaselineConsistencyProbe),
            speed_probe: Box::new(BaselineSpeedProbe),
        }
    }
}

impl DeckAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(mut self, cache: Box<dyn ResultCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_consistency_probe(mut self, probe: Box<dyn ConsistencyProbe>) -> Self {
        self.consistency_probe = probe;
        self
    }

    pub fn with_speed_probe(mut self, probe: Box<dyn SpeedProbe>) -> Self {
        self.speed_probe = probe;
        self
    }

    /// Full pipeline: cache check, validation, the four independent
    /// analyses fanned out, scoring, recommendations, cache write-back.
    pub fn analyze(&self, deck: &Deck, config: &AnalysisConfig) -> AnalysisReport {
        let cache_key = format!("{}:{}", deck.cache_id(), config.format);
        if let Some(report) = self.cache.get(&cache_key) {
            debug!(key = %cache_key, "cache hit");
            return report;
        }

        let started = Instant::now();
        let warnings = validate_deck(deck, config);

        let fv = features::extract_features(deck);
        let classification = archetype::classify_features(&fv);
        info!(
            deck = %deck.name,
            primary = %classification.primary,
            confidence = classification.confidence,
            "deck classified"
        );

        // The four analyses only read the deck; join before scoring,
        // the single stage that needs every prior output.
        let ((synergy, meta_analysis), (consistency, speed)) = rayon::join(
            || {
                rayon::join(
                    || synergy::build_graph(deck),
                    || meta::evaluate(deck, classification.primary, config),
                )
            },
            || {
                rayon::join(
                    || self.consistency_probe.consistency(deck),
                    || self.speed_probe.speed(deck),
                )
            },
        );

        let scores = scoring::compute_scores(
            &classification,
            &synergy,
            &meta_analysis,
            &consistency,
            &speed,
        );
        let recommendations = recommend::generate(&warnings, &scores, &synergy, &meta_analysis);

        let elapsed = started.elapsed();
        let performance_summary = format!(
            "{} scores {:.0}/100 as {} ({}% confidence), tier {:?}; analyzed in {} ms",
            deck.name,
            scores.overall,
            classification.primary,
            classification.confidence,
            meta_analysis.tier,
            elapsed.as_millis()
        );

        let report = AnalysisReport {
            deck_name: deck.name.clone(),
            format: config.format,
            consistency,
            speed,
            synergy,
            meta: meta_analysis,
            archetype: classification,
            scores,
            recommendations,
            warnings,
            performance_summary,
            timestamp: Utc::now(),
        };

        // Fire-and-forget: a failed write must never fail the request.
        self.cache.set(&cache_key, &report, CACHE_TTL_SECONDS);
        report
    }
}

/// Structured validation. Everything here is advisory; analysis always
/// proceeds.
pub fn validate_deck(deck: &Deck, config: &AnalysisConfig) -> Vec<AnalysisWarning> {
    let mut warnings = Vec::new();

    let total = deck.total_cards();
    if total != 60 {
        warnings.push(AnalysisWarning {
            severity: Severity::Error,
            category: "Deck Size".to_string(),
            message: format!("Deck has {} cards; exactly 60 required", total),
            affected_cards: vec![],
            suggestion: Some(if total < 60 {
                format!("Add {} more card(s)", 60 - total)
            } else {
                format!("Remove {} card(s)", total - 60)
            }),
        });
    }

    if !deck.entries.iter().any(|e| e.card.is_basic_creature()) {
        warnings.push(AnalysisWarning {
            severity: Severity::Error,
            category: "Basic Creatures".to_string(),
            message: "Deck has no basic creature and cannot open a game".to_string(),
            affected_cards: vec![],
            suggestion: Some("Add at least one basic creature".to_string()),
        });
    }

    let mut totals: HashMap<&str, u32> = HashMap::new();
    for entry in &deck.entries {
        *totals.entry(entry.card.name.as_str()).or_insert(0) += entry.quantity;
    }
    let over_limit: Vec<String> = totals
        .iter()
        .filter(|(name, &qty)| qty > 4 && !is_unlimited_energy(name))
        .map(|(name, _)| name.to_string())
        .collect();
    if !over_limit.is_empty() {
        let mut affected = over_limit;
        affected.sort();
        warnings.push(AnalysisWarning {
            severity: Severity::Error,
            category: "Copy Limit".to_string(),
            message: "More than four copies of a non-basic-energy card".to_string(),
            affected_cards: affected,
            suggestion: Some("Reduce to four copies".to_string()),
        });
    }

    let illegal: Vec<String> = deck
        .entries
        .iter()
        .filter(|e| match config.format {
            Format::Standard => !e.card.legal.standard,
            Format::Expanded => !e.card.legal.expanded,
        })
        .map(|e| e.card.name.clone())
        .collect();
    if !illegal.is_empty() {
        warnings.push(AnalysisWarning {
            severity: Severity::Error,
            category: "Format Legality".to_string(),
            message: format!("{} card(s) are not legal in {}", illegal.len(), config.format),
            affected_cards: illegal,
            suggestion: Some("Replace with format-legal versions".to_string()),
        });
    }

    let has_draw_trainer = deck.entries.iter().any(|e| {
        e.card.category == CardCategory::Trainer && e.card.combined_text().contains("draw")
    });
    if !has_draw_trainer {
        warnings.push(AnalysisWarning {
            severity: Severity::Warning,
            category: "Draw Support".to_string(),
            message: "Deck has no draw-support trainers".to_string(),
            affected_cards: vec![],
            suggestion: Some("Add draw supporters to avoid dead hands".to_string()),
        });
    }

    warnings
}
