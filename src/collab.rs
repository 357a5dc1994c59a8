//! Collaborator seams. The consistency and speed sub-reports are produced
//! by external services in the full product; the engine only consumes their
//! shapes. The baseline probes below exist so the CLI and tests run without
//! those services, and are deliberately rough.

use crate::analyzer::AnalysisReport;
use crate::catalog::{CardCategory, Deck};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use strum_macros::Display;

// --- CONSISTENCY REPORT (shaped input) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    pub overall_consistency: f64,
    pub mulligan_probability: f64,
    pub energy_ratio: EnergyRatio,
    pub trainer_distribution: TrainerDistribution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyRatio {
    pub energy_percentage: f64,
    pub recommended_range: RecommendedRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerDistribution {
    pub draw_power: u32,
    pub search: u32,
    pub recovery: u32,
}

// --- SPEED REPORT (shaped input) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum SpeedRating {
    Turbo,
    Fast,
    Medium,
    Slow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedReport {
    pub overall_speed: SpeedRating,
    pub average_setup_turn: f64,
    pub first_turn_advantage: f64,
    pub energy_attachment_efficiency: f64,
    pub late_game_sustainability: f64,
    pub prize_race_speed: PrizeRaceSpeed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeRaceSpeed {
    pub damage_output: f64,
    pub ohko_capability: bool,
    pub average_prizes_per_turn: f64,
    pub comeback_potential: f64,
}

// --- TRAITS ---

pub trait ConsistencyProbe: Send + Sync {
    fn consistency(&self, deck: &Deck) -> ConsistencyReport;
}

pub trait SpeedProbe: Send + Sync {
    fn speed(&self, deck: &Deck) -> SpeedReport;
}

/// Result cache around the orchestrator. Misses and write failures are
/// invisible to callers; the pipeline always falls back to recomputation.
pub trait ResultCache: Send + Sync {
    fn get(&self, key: &str) -> Option<AnalysisReport>;
    fn set(&self, key: &str, report: &AnalysisReport, ttl_seconds: u64);
}

// --- IMPLEMENTATIONS ---

pub struct NoopCache;

impl ResultCache for NoopCache {
    fn get(&self, _key: &str) -> Option<AnalysisReport> {
        None
    }

    fn set(&self, _key: &str, _report: &AnalysisReport, _ttl_seconds: u64) {}
}

/// In-process cache, mainly for tests and the CLI's repeat runs.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (AnalysisReport, Instant)>>,
}

impl ResultCache for MemoryCache {
    fn get(&self, key: &str) -> Option<AnalysisReport> {
        let guard = match self.entries.lock() {
            Ok(g) => g,
            Err(_) => return None,
        };
        guard
            .get(key)
            .filter(|(_, expires)| Instant::now() < *expires)
            .map(|(report, _)| report.clone())
    }

    fn set(&self, key: &str, report: &AnalysisReport, ttl_seconds: u64) {
        if let Ok(mut guard) = self.entries.lock() {
            let expires = Instant::now() + Duration::from_secs(ttl_seconds);
            guard.insert(key.to_string(), (report.clone(), expires));
        }
    }
}

/// Rough consistency estimate: basic-creature density drives the mulligan
/// odds, draw trainers drive the overall number.
pub struct BaselineConsistencyProbe;

impl ConsistencyProbe for BaselineConsistencyProbe {
    fn consistency(&self, deck: &Deck) -> ConsistencyReport {
        let total = deck.total_cards().max(1) as f64;
        let basics: u32 = deck
            .entries
            .iter()
            .filter(|e| e.card.is_basic_creature())
            .map(|e| e.quantity)
            .sum();
        let energy: u32 = deck
            .entries
            .iter()
            .filter(|e| e.card.category == CardCategory::Energy)
            .map(|e| e.quantity)
            .sum();

        let mut draw_power = 0u32;
        let mut search = 0u32;
        let mut recovery = 0u32;
        for e in &deck.entries {
            if e.card.category != CardCategory::Trainer {
                continue;
            }
            let text = e.card.combined_text();
            if text.contains("draw") {
                draw_power += e.quantity;
            }
            if text.contains("search your deck") {
                search += e.quantity;
            }
            if text.contains("discard pile") && text.contains("shuffle") {
                recovery += e.quantity;
            }
        }

        // Seven-card opening hand with no basic creature.
        let mulligan = ((total - basics as f64) / total).powi(7);

        let overall = (35.0 + f64::from(draw_power) * 4.0 + f64::from(basics) * 1.5
            - mulligan * 40.0)
            .clamp(0.0, 100.0);

        ConsistencyReport {
            overall_consistency: overall,
            mulligan_probability: mulligan,
            energy_ratio: EnergyRatio {
                energy_percentage: f64::from(energy) / total * 100.0,
                recommended_range: RecommendedRange {
                    min: 18.0,
                    max: 33.0,
                },
            },
            trainer_distribution: TrainerDistribution {
                draw_power,
                search,
                recovery,
            },
        }
    }
}

/// Rough speed estimate from evolution depth, acceleration and top-end
/// damage.
pub struct BaselineSpeedProbe;

impl SpeedProbe for BaselineSpeedProbe {
    fn speed(&self, deck: &Deck) -> SpeedReport {
        let mut stage_two = 0u32;
        let mut accel = 0u32;
        let mut max_damage = 0u32;
        for e in &deck.entries {
            if e.card.is_stage_two() {
                stage_two += e.quantity;
            }
            let text = e.card.combined_text();
            if text.contains("attach") && text.contains("energy") {
                accel += e.quantity;
            }
            for a in &e.card.attacks {
                max_damage = max_damage.max(a.damage);
            }
        }

        let setup_turn = (1.5 + f64::from(stage_two) * 0.25 - f64::from(accel) * 0.1).max(1.0);
        let rating = if setup_turn <= 1.5 {
            SpeedRating::Turbo
        } else if setup_turn <= 2.0 {
            SpeedRating::Fast
        } else if setup_turn <= 3.0 {
            SpeedRating::Medium
        } else {
            SpeedRating::Slow
        };

        let damage_output = f64::from(max_damage);
        SpeedReport {
            overall_speed: rating,
            average_setup_turn: setup_turn,
            first_turn_advantage: (80.0 - f64::from(stage_two) * 8.0).clamp(0.0, 100.0),
            energy_attachment_efficiency: (50.0 + f64::from(accel) * 8.0).clamp(0.0, 100.0),
            late_game_sustainability: (40.0 + f64::from(accel) * 5.0).clamp(0.0, 100.0),
            prize_race_speed: PrizeRaceSpeed {
                damage_output,
                ohko_capability: max_damage >= 220,
                average_prizes_per_turn: if max_damage >= 220 {
                    1.5
                } else if max_damage >= 120 {
                    1.0
                } else {
                    0.5
                },
                comeback_potential: (30.0 + f64::from(accel) * 6.0).clamp(0.0, 100.0),
            },
        }
    }
}
