use crate::error::{DeckForgeError, DfResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardCategory {
    Creature,
    Trainer,
    Energy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    #[serde(default)]
    pub cost: Vec<String>,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// Weakness (`value` is a damage multiplier, e.g. 2) or resistance
/// (`value` is a flat reduction, e.g. 30). Which one depends on the
/// list the modifier sits in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeModifier {
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legalities {
    pub standard: bool,
    pub expanded: bool,
}

impl Default for Legalities {
    fn default() -> Self {
        Self {
            standard: true,
            expanded: true,
        }
    }
}

/// Immutable catalog record. The engine never mutates cards; decks hold
/// owned copies so one analysis never borrows into another's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub category: CardCategory,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub attacks: Vec<Attack>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub weaknesses: Vec<TypeModifier>,
    #[serde(default)]
    pub resistances: Vec<TypeModifier>,
    #[serde(default)]
    pub retreat_cost: u32,
    #[serde(default)]
    pub evolves_from: Option<String>,
    #[serde(default)]
    pub evolves_to: Option<String>,
    #[serde(default)]
    pub release_year: u32,
    #[serde(default)]
    pub legal: Legalities,
}

impl Card {
    pub fn is_creature(&self) -> bool {
        self.category == CardCategory::Creature
    }

    pub fn has_subtype(&self, tag: &str) -> bool {
        self.subtypes.iter().any(|s| s.eq_ignore_ascii_case(tag))
    }

    /// Basic creature: playable without evolving from anything.
    pub fn is_basic_creature(&self) -> bool {
        self.is_creature() && self.evolves_from.is_none()
    }

    /// Stage 2: the top of a two-evolution line.
    pub fn is_stage_two(&self) -> bool {
        self.has_subtype("Stage2")
    }

    /// Multi-prize creatures are tagged V / ex / GX in the catalog.
    pub fn is_multi_prize(&self) -> bool {
        self.has_subtype("V") || self.has_subtype("ex") || self.has_subtype("GX")
    }

    /// Concatenated lowercase attack + ability text, used by the
    /// text-pattern detectors.
    pub fn combined_text(&self) -> String {
        let mut out = String::new();
        for a in &self.attacks {
            out.push_str(&a.text.to_lowercase());
            out.push(' ');
        }
        for a in &self.abilities {
            out.push_str(&a.text.to_lowercase());
            out.push(' ');
        }
        out
    }
}

/// Basic resource cards exempt from the 4-copy rule.
pub const UNLIMITED_ENERGY: &[&str] = &[
    "Grass Energy",
    "Fire Energy",
    "Water Energy",
    "Lightning Energy",
    "Psychic Energy",
    "Fighting Energy",
    "Darkness Energy",
    "Metal Energy",
];

pub fn is_unlimited_energy(name: &str) -> bool {
    UNLIMITED_ENERGY.iter().any(|&e| e == name)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckEntry {
    pub card: Card,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// Stable document id. Older deck files omit it.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub entries: Vec<DeckEntry>,
}

impl Deck {
    /// Cache identity: the document id when present, the display name
    /// for id-less documents.
    pub fn cache_id(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }

    pub fn total_cards(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn contains(&self, card_name: &str) -> bool {
        self.entries.iter().any(|e| e.card.name == card_name)
    }

    pub fn quantity_of(&self, card_name: &str) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.card.name == card_name)
            .map(|e| e.quantity)
            .sum()
    }

    /// Distinct cards, one reference per unique id.
    pub fn unique_cards(&self) -> Vec<&Card> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|e| seen.insert(e.card.id.as_str()))
            .map(|e| &e.card)
            .collect()
    }

    pub fn creatures(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter().filter(|e| e.card.is_creature())
    }

    /// Load a self-contained deck document from any reader (tests feed
    /// a `Cursor`, the CLI a file).
    pub fn load_from_reader<R: Read>(reader: R) -> DfResult<Self> {
        let deck: Deck = serde_json::from_reader(reader)?;
        if deck.entries.is_empty() {
            return Err(DeckForgeError::Catalog(format!(
                "Deck '{}' has no entries",
                deck.name
            )));
        }
        Ok(deck)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let file = File::open(path)?;
        Self::load_from_reader(BufReader::new(file))
    }
}
