use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Display, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum Format {
    #[default]
    Standard,
    Expanded,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Format the deck is validated and scored against.
    #[arg(long, value_enum, default_value_t = Format::Standard)]
    pub format: Format,

    /// Include the rotation-impact section in the report.
    #[arg(long, default_value_t = false)]
    pub include_rotation: bool,
}

/// Cached reports expire after an hour.
pub const CACHE_TTL_SECONDS: u64 = 3600;

/// Sets released before this year rotate out of Standard.
pub const ROTATION_CUTOFF_YEAR: u32 = 2023;
