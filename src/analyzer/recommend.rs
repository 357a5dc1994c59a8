use super::meta::MetaAnalysis;
use super::scoring::DeckScores;
use super::synergy::SynergyGraph;
use super::{AnalysisWarning, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationKind {
    Add,
    Remove,
    Adjust,
}

/// Declaration order doubles as sort order: High first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    pub reason: String,
    pub impact: String,
    pub alternatives: Vec<String>,
}

pub const MAX_RECOMMENDATIONS: usize = 10;

/// Turns every analysis output into a single ranked list: warning fixes
/// first, then score gaps, anti-synergies, tech and rotation swaps.
/// Stable within a priority tier, capped at 10.
pub fn generate(
    warnings: &[AnalysisWarning],
    scores: &DeckScores,
    synergy: &SynergyGraph,
    meta: &MetaAnalysis,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    for warning in warnings {
        let (kind, priority) = match (warning.severity, warning.category.as_str()) {
            (Severity::Error, "Format Legality") => (RecommendationKind::Remove, Priority::High),
            (Severity::Error, "Basic Creatures") => (RecommendationKind::Add, Priority::High),
            (Severity::Error, _) => (RecommendationKind::Adjust, Priority::High),
            (Severity::Warning, "Draw Support") => (RecommendationKind::Add, Priority::Medium),
            (Severity::Warning, _) => (RecommendationKind::Adjust, Priority::Medium),
        };
        out.push(Recommendation {
            kind,
            priority,
            card_name: warning.affected_cards.first().cloned(),
            quantity: None,
            reason: warning.message.clone(),
            impact: warning
                .suggestion
                .clone()
                .unwrap_or_else(|| "Resolves a deck-construction problem".to_string()),
            alternatives: warning.affected_cards.iter().skip(1).cloned().collect(),
        });
    }

    if scores.consistency < 60.0 {
        out.push(Recommendation {
            kind: RecommendationKind::Add,
            priority: Priority::High,
            card_name: Some("Professor's Research".to_string()),
            quantity: Some(4),
            reason: format!(
                "Consistency is {:.0}/100; the deck needs more draw support",
                scores.consistency
            ),
            impact: "Fewer dead hands, faster setup".to_string(),
            alternatives: vec!["Iono".to_string(), "Quick Ball".to_string()],
        });
    }
    if scores.power <= 45.0 {
        out.push(Recommendation {
            kind: RecommendationKind::Add,
            priority: Priority::Medium,
            card_name: None,
            quantity: None,
            reason: format!(
                "Power is {:.0}/100; top-end damage cannot keep up in a prize race",
                scores.power
            ),
            impact: "Adds a primary attacker that threatens knockouts".to_string(),
            alternatives: vec![],
        });
    }
    if scores.speed <= 45.0 {
        out.push(Recommendation {
            kind: RecommendationKind::Add,
            priority: Priority::Medium,
            card_name: None,
            quantity: None,
            reason: format!("Speed is {:.0}/100; the deck sets up too slowly", scores.speed),
            impact: "Energy acceleration or search shortens the setup".to_string(),
            alternatives: vec!["Rare Candy".to_string()],
        });
    }

    for anti in &synergy.anti_synergies {
        out.push(Recommendation {
            kind: RecommendationKind::Remove,
            priority: if anti.can_coexist {
                Priority::Medium
            } else {
                Priority::High
            },
            card_name: Some(anti.card_b.clone()),
            quantity: None,
            reason: format!("{} conflicts with {}: {}", anti.card_b, anti.card_a, anti.reason),
            impact: "Removes an internal conflict".to_string(),
            alternatives: vec![],
        });
    }

    for tech in &meta.tech_recommendations {
        out.push(Recommendation {
            kind: RecommendationKind::Add,
            priority: if tech.improves.len() >= 2 {
                Priority::Medium
            } else {
                Priority::Low
            },
            card_name: Some(tech.card.clone()),
            quantity: Some(1),
            reason: tech.reason.clone(),
            impact: format!("Improves: {}", tech.improves.join(", ")),
            alternatives: vec![],
        });
    }

    if let Some(rotation) = &meta.rotation {
        for card in &rotation.rotating_cards {
            out.push(Recommendation {
                kind: RecommendationKind::Adjust,
                priority: Priority::Low,
                card_name: Some(card.name.clone()),
                quantity: Some(card.copies),
                reason: format!("{} rotates out of the format soon", card.name),
                impact: "Future-proofs the list".to_string(),
                alternatives: card.replacements.clone(),
            });
        }
    }

    // Stable: within a tier, generation order is preserved.
    out.sort_by_key(|r| r.priority);
    out.truncate(MAX_RECOMMENDATIONS);
    out
}
