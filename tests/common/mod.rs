#![allow(dead_code)]

use deckforge::catalog::{
    Ability, Attack, Card, CardCategory, Deck, DeckEntry, Legalities, TypeModifier,
};

pub fn attack(name: &str, cost: &[&str], damage: u32, text: &str) -> Attack {
    Attack {
        name: name.to_string(),
        cost: cost.iter().map(|s| s.to_string()).collect(),
        damage,
        text: text.to_string(),
    }
}

pub fn blank_card(name: &str, category: CardCategory) -> Card {
    Card {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        category,
        subtypes: vec![],
        types: vec![],
        hp: 0,
        attacks: vec![],
        abilities: vec![],
        weaknesses: vec![],
        resistances: vec![],
        retreat_cost: 0,
        evolves_from: None,
        evolves_to: None,
        release_year: 2024,
        legal: Legalities::default(),
    }
}

pub fn basic_creature(name: &str, typ: &str, damage: u32, retreat: u32) -> Card {
    let mut card = blank_card(name, CardCategory::Creature);
    card.subtypes = vec!["Basic".to_string()];
    card.types = vec![typ.to_string()];
    card.hp = 120;
    card.retreat_cost = retreat;
    card.attacks = vec![attack("Strike", &[typ, typ], damage, "")];
    card
}

pub fn trainer(name: &str, text: &str) -> Card {
    let mut card = blank_card(name, CardCategory::Trainer);
    card.abilities = vec![Ability {
        name: name.to_string(),
        text: text.to_string(),
    }];
    card
}

pub fn energy(name: &str) -> Card {
    blank_card(name, CardCategory::Energy)
}

pub fn with_weakness(mut card: Card, typ: &str) -> Card {
    card.weaknesses.push(TypeModifier {
        type_name: typ.to_string(),
        value: 2,
    });
    card
}

pub fn with_resistance(mut card: Card, typ: &str) -> Card {
    card.resistances.push(TypeModifier {
        type_name: typ.to_string(),
        value: 30,
    });
    card
}

pub fn entry(card: Card, quantity: u32) -> DeckEntry {
    DeckEntry { card, quantity }
}

pub fn deck(name: &str, entries: Vec<DeckEntry>) -> Deck {
    Deck {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        entries,
    }
}

/// The published classifier scenario: four copies of a V-type attacker
/// averaging 120 damage with setup speed 80, twelve basic energy and
/// four draw supporters.
pub fn aggro_scenario_deck() -> Deck {
    let mut striker = basic_creature("Voltfang V", "Lightning", 120, 2);
    striker.subtypes.push("V".to_string());
    deck(
        "Scenario Aggro",
        vec![
            entry(striker, 4),
            entry(energy("Lightning Energy"), 12),
            entry(trainer("Researcher", "Draw 3 cards."), 4),
        ],
    )
}

/// A legal 60-card list: correct size, basic creatures, draw support,
/// nothing over the copy limit.
pub fn legal_sixty_deck() -> Deck {
    deck(
        "Legal Sixty",
        vec![
            entry(basic_creature("Duskfang", "Darkness", 90, 1), 4),
            entry(basic_creature("Emberfang", "Fire", 120, 2), 4),
            entry(trainer("Professor's Research", "Discard your hand and draw 7 cards."), 4),
            entry(trainer("Night Patrol", "Draw 2 cards."), 4),
            entry(
                trainer("Quick Ball", "Search your deck for a basic creature."),
                4,
            ),
            entry(trainer("Switch", "Switch your active creature with a benched one."), 4),
            entry(energy("Fire Energy"), 24),
            entry(energy("Darkness Energy"), 12),
        ],
    )
}
