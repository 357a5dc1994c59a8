use crate::analyzer::archetype::Archetype;

/// Reference catalog entry for a known competitive deck. Read-only
/// static input to the evaluator; reports embed its data as owned
/// strings, so it never crosses a serialization boundary itself.
#[derive(Debug, Clone)]
pub struct MetaDeck {
    pub name: &'static str,
    pub archetype: Archetype,
    /// Share of the current field, in percent.
    pub popularity: f64,
    pub key_cards: &'static [&'static str],
    pub win_condition: &'static str,
    /// Elemental types this deck is weak to.
    pub weaknesses: &'static [&'static str],
}

pub fn meta_decks() -> &'static [MetaDeck] {
    &[
        MetaDeck {
            name: "Inferno Rush",
            archetype: Archetype::Aggro,
            popularity: 18.0,
            key_cards: &["Emberfang V", "Blaze Charger"],
            win_condition: "Take six prizes before turn five with cheap fire attackers",
            weaknesses: &["Water"],
        },
        MetaDeck {
            name: "Tidal Control",
            archetype: Archetype::Control,
            popularity: 14.0,
            key_cards: &["Abyss Warden", "Chill Curtain"],
            win_condition: "Lock the active position and grind out resources",
            weaknesses: &["Lightning"],
        },
        MetaDeck {
            name: "Gear Turbo",
            archetype: Archetype::Turbo,
            popularity: 12.0,
            key_cards: &["Steamwork Titan", "Piston Press"],
            win_condition: "Power a 300-damage attacker by turn two",
            weaknesses: &["Fire"],
        },
        MetaDeck {
            name: "Twilight Midrange",
            archetype: Archetype::Midrange,
            popularity: 11.0,
            key_cards: &["Duskfang", "Night Patrol"],
            win_condition: "Trade single-prize attackers until the prize map favors you",
            weaknesses: &["Grass"],
        },
        MetaDeck {
            name: "Verdant Combo",
            archetype: Archetype::Combo,
            popularity: 9.0,
            key_cards: &["Bloomweaver", "Rare Candy"],
            win_condition: "Assemble the full evolution board and sweep",
            weaknesses: &["Fire"],
        },
        MetaDeck {
            name: "Storm Spread",
            archetype: Archetype::Spread,
            popularity: 8.0,
            key_cards: &["Static Cloud", "Voltage Scatter"],
            win_condition: "Spread damage, then convert three knockouts in one turn",
            weaknesses: &["Fighting"],
        },
        MetaDeck {
            name: "Shadow Mill",
            archetype: Archetype::Mill,
            popularity: 7.0,
            key_cards: &["Gravekeeper", "Memory Drain"],
            win_condition: "Deck the opponent out before they take six prizes",
            weaknesses: &["Fighting"],
        },
        MetaDeck {
            name: "Stonewall Stall",
            archetype: Archetype::Stall,
            popularity: 6.0,
            key_cards: &["Bastion Colossus", "Sanctuary Wall"],
            win_condition: "Heal through everything until the opponent runs dry",
            weaknesses: &["Psychic"],
        },
    ]
}

/// Format staples whose presence marks a tuned competitive list.
pub const META_STAPLES: &[&str] = &[
    "Professor's Research",
    "Quick Ball",
    "Ultra Ball",
    "Boss's Orders",
    "Switch",
    "Rare Candy",
    "Nest Ball",
    "Iono",
    "Judge",
    "Super Rod",
];

/// Owned card → the archetype or deck it counters.
pub struct CounterRule {
    pub card: &'static str,
    pub counters: &'static str,
    pub description: &'static str,
}

pub fn counter_rules() -> &'static [CounterRule] {
    &[
        CounterRule {
            card: "Stadium Demolisher",
            counters: "Stonewall Stall",
            description: "Removes the stadiums stall decks hide behind",
        },
        CounterRule {
            card: "Chill Curtain",
            counters: "Inferno Rush",
            description: "Blunts cheap fire attackers with an attack tax",
        },
        CounterRule {
            card: "Ability Mute",
            counters: "Verdant Combo",
            description: "Shuts off the ability engine combo decks rely on",
        },
        CounterRule {
            card: "Memory Drain",
            counters: "Tidal Control",
            description: "Out-grinds control by attacking their resources",
        },
        CounterRule {
            card: "Super Rod",
            counters: "Shadow Mill",
            description: "Recycles milled resources back into the deck",
        },
    ]
}

/// Named counter card vs. named opponent deck win-rate adjustments.
pub struct SpecificInteraction {
    pub card: &'static str,
    pub opponent: &'static str,
    pub delta: f64,
}

pub fn specific_interactions() -> &'static [SpecificInteraction] {
    &[
        SpecificInteraction {
            card: "Chill Curtain",
            opponent: "Inferno Rush",
            delta: 10.0,
        },
        SpecificInteraction {
            card: "Stadium Demolisher",
            opponent: "Stonewall Stall",
            delta: 8.0,
        },
        SpecificInteraction {
            card: "Ability Mute",
            opponent: "Verdant Combo",
            delta: 8.0,
        },
        SpecificInteraction {
            card: "Super Rod",
            opponent: "Shadow Mill",
            delta: 6.0,
        },
    ]
}

/// Tech card suggested against a specific opponent deck.
pub struct MatchupTech {
    pub opponent: &'static str,
    pub cards: &'static [&'static str],
}

pub fn matchup_tech_table() -> &'static [MatchupTech] {
    &[
        MatchupTech {
            opponent: "Inferno Rush",
            cards: &["Tidal Guardian", "Chill Curtain"],
        },
        MatchupTech {
            opponent: "Tidal Control",
            cards: &["Volt Lancer", "Memory Drain"],
        },
        MatchupTech {
            opponent: "Gear Turbo",
            cards: &["Emberfang V"],
        },
        MatchupTech {
            opponent: "Verdant Combo",
            cards: &["Ability Mute"],
        },
        MatchupTech {
            opponent: "Storm Spread",
            cards: &["Bench Barrier Fan"],
        },
        MatchupTech {
            opponent: "Shadow Mill",
            cards: &["Super Rod"],
        },
        MatchupTech {
            opponent: "Stonewall Stall",
            cards: &["Stadium Demolisher"],
        },
        MatchupTech {
            opponent: "Twilight Midrange",
            cards: &["Boss's Orders"],
        },
    ]
}

/// Tech card suggested against a detected structural weakness.
pub struct WeaknessTech {
    pub weakness: &'static str,
    pub cards: &'static [&'static str],
}

pub fn weakness_tech_table() -> &'static [WeaknessTech] {
    &[
        WeaknessTech {
            weakness: "Ability Dependence",
            cards: &["Backup Attacker"],
        },
        WeaknessTech {
            weakness: "Special Energy Dependence",
            cards: &["Basic Energy Package"],
        },
        WeaknessTech {
            weakness: "Bench Dependence",
            cards: &["Bench Barrier Fan"],
        },
        WeaknessTech {
            weakness: "Slow Setup",
            cards: &["Rare Candy", "Quick Ball"],
        },
        WeaknessTech {
            weakness: "Fragile Attackers",
            cards: &["Sanctuary Wall"],
        },
    ]
}

/// Replacement hints for staples that rotate often.
pub struct ReplacementHint {
    pub card: &'static str,
    pub replacements: &'static [&'static str],
}

pub fn replacement_hints() -> &'static [ReplacementHint] {
    &[
        ReplacementHint {
            card: "Quick Ball",
            replacements: &["Nest Ball", "Ultra Ball"],
        },
        ReplacementHint {
            card: "Professor's Research",
            replacements: &["Iono"],
        },
        ReplacementHint {
            card: "Switch",
            replacements: &["Escape Rope"],
        },
    ]
}
