use crate::catalog::{Card, CardCategory};

/// One detector's verdict for an unordered card pair. Zero score means
/// the detector found nothing; its description is then ignored.
#[derive(Debug, Default)]
pub struct Detection {
    pub score: f64,
    pub description: Option<String>,
}

impl Detection {
    fn hit(score: f64, description: String) -> Self {
        Self {
            score,
            description: Some(description),
        }
    }
}

fn ability_text(card: &Card) -> String {
    card.abilities
        .iter()
        .map(|a| a.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_ability_mentioning(card: &Card, needle: &str) -> bool {
    ability_text(card).contains(needle)
}

fn is_trainer(card: &Card) -> bool {
    card.category == CardCategory::Trainer
}

fn heavy_attack(card: &Card) -> bool {
    card.attacks.iter().any(|a| a.cost.len() >= 3)
}

/// Ability-on-ability and ability-with-trainer text rules.
pub fn ability_synergy(a: &Card, b: &Card) -> Detection {
    if has_ability_mentioning(a, "draw") && has_ability_mentioning(b, "draw") {
        return Detection::hit(
            0.3,
            format!("{} and {} both generate draw power", a.name, b.name),
        );
    }
    if has_ability_mentioning(a, "energy") && has_ability_mentioning(b, "energy") {
        return Detection::hit(
            0.3,
            format!("{} and {} both manipulate energy", a.name, b.name),
        );
    }
    let boost_pair = |x: &Card, y: &Card| {
        has_ability_mentioning(x, "damage") && y.attacks.iter().any(|atk| atk.damage > 0)
    };
    if boost_pair(a, b) || boost_pair(b, a) {
        return Detection::hit(0.4, format!("{}'s ability boosts {}'s attacks", a.name, b.name));
    }
    let defensive = |c: &Card| {
        has_ability_mentioning(c, "prevent") || has_ability_mentioning(c, "reduce")
    };
    if defensive(a) && defensive(b) {
        return Detection::hit(0.25, format!("{} and {} form a defensive core", a.name, b.name));
    }
    let cross = |t: &Card, c: &Card| {
        is_trainer(t) && t.combined_text().contains("ability") && !c.abilities.is_empty()
    };
    if cross(a, b) || cross(b, a) {
        return Detection::hit(0.2, format!("{} supports {}'s ability", a.name, b.name));
    }
    Detection::default()
}

/// Shared elemental types, energy/trainer type references and
/// weakness/resistance coverage.
pub fn type_synergy(a: &Card, b: &Card) -> Detection {
    // One card's resistance covers the other's weakness.
    let covers = |shield: &Card, exposed: &Card| {
        exposed.weaknesses.iter().any(|w| {
            shield
                .resistances
                .iter()
                .any(|r| r.type_name == w.type_name)
        })
    };
    if covers(a, b) {
        return Detection::hit(
            0.35,
            format!("{} resists {}'s weakness to cover it", a.name, b.name),
        );
    }
    if covers(b, a) {
        return Detection::hit(
            0.35,
            format!("{} resists {}'s weakness to cover it", b.name, a.name),
        );
    }

    let shared = a.types.iter().any(|t| b.types.contains(t));
    if a.is_creature() && b.is_creature() && shared {
        return Detection::hit(0.25, format!("{} and {} share a type", a.name, b.name));
    }

    let energy_match = |e: &Card, c: &Card| {
        e.category == CardCategory::Energy
            && c.is_creature()
            && c.types.iter().any(|t| e.name.contains(t.as_str()))
    };
    if energy_match(a, b) || energy_match(b, a) {
        return Detection::hit(0.3, format!("{} powers {}'s type", a.name, b.name));
    }

    let trainer_match = |t: &Card, c: &Card| {
        is_trainer(t)
            && c.is_creature()
            && c.types
                .iter()
                .any(|ty| t.combined_text().contains(&ty.to_lowercase()))
    };
    if trainer_match(a, b) || trainer_match(b, a) {
        return Detection::hit(0.2, format!("{} targets {}'s type", a.name, b.name));
    }
    Detection::default()
}

/// Acceleration feeding expensive attacks, special-energy cross
/// references, recovery and cost reduction.
pub fn energy_synergy(a: &Card, b: &Card) -> Detection {
    let accelerates = |c: &Card| {
        let t = c.combined_text();
        t.contains("attach") && t.contains("energy")
    };
    let feeds = |acc: &Card, atk: &Card| accelerates(acc) && heavy_attack(atk);
    if feeds(a, b) || feeds(b, a) {
        return Detection::hit(
            0.4,
            format!("{} accelerates energy for {}'s expensive attack", a.name, b.name),
        );
    }

    let names_special = |c: &Card| c.combined_text().contains("special energy");
    let special_energy = |c: &Card| {
        c.category == CardCategory::Energy && !crate::catalog::is_unlimited_energy(&c.name)
    };
    if (names_special(a) && special_energy(b)) || (names_special(b) && special_energy(a)) {
        return Detection::hit(
            0.2,
            format!("{} interacts with {} as special energy", a.name, b.name),
        );
    }

    let recovers = |c: &Card| {
        let t = c.combined_text();
        t.contains("energy") && t.contains("discard pile")
    };
    let recovery_pair = |rec: &Card, atk: &Card| recovers(rec) && heavy_attack(atk);
    if recovery_pair(a, b) || recovery_pair(b, a) {
        return Detection::hit(
            0.3,
            format!("{} recycles energy for {}", a.name, b.name),
        );
    }

    let reduces = |c: &Card| {
        let t = ability_text(c);
        t.contains("less energy") || (t.contains("cost") && t.contains("energy"))
    };
    let reduction_pair = |red: &Card, atk: &Card| reduces(red) && !atk.attacks.is_empty();
    if reduction_pair(a, b) || reduction_pair(b, a) {
        return Detection::hit(
            0.25,
            format!("{} discounts attack costs for {}", a.name, b.name),
        );
    }
    Detection::default()
}

/// Shared game-plan signals: mill, spread + counters, retreat control,
/// status conditions.
pub fn strategy_synergy(a: &Card, b: &Card) -> Detection {
    let mills = |c: &Card| {
        let t = c.combined_text();
        t.contains("opponent") && t.contains("deck") && t.contains("discard")
    };
    if mills(a) && mills(b) {
        return Detection::hit(0.4, format!("{} and {} both mill the opponent", a.name, b.name));
    }

    let spreads = |c: &Card| {
        c.attacks
            .iter()
            .any(|atk| atk.damage > 0 && atk.text.to_lowercase().contains("bench"))
    };
    let counters = |c: &Card| c.combined_text().contains("damage counter");
    if (spreads(a) && counters(b)) || (spreads(b) && counters(a)) {
        return Detection::hit(
            0.35,
            format!("{} spreads damage that {} converts", a.name, b.name),
        );
    }

    let moves = |c: &Card| {
        let t = c.combined_text();
        t.contains("switch") || t.contains("retreat")
    };
    if moves(a) && moves(b) {
        return Detection::hit(
            0.25,
            format!("{} and {} control the active position", a.name, b.name),
        );
    }

    let conditions = |c: &Card| -> Vec<&'static str> {
        let t = c.combined_text();
        ["asleep", "paralyzed", "confused", "burned", "poisoned"]
            .into_iter()
            .filter(|cond| t.contains(cond))
            .collect()
    };
    let ca = conditions(a);
    let cb = conditions(b);
    if !ca.is_empty() && !cb.is_empty() {
        return Detection::hit(
            0.3,
            format!("{} and {} stack status conditions", a.name, b.name),
        );
    }
    Detection::default()
}

/// Search and setup links, plus the shared-deck-resource anti-synergy.
pub fn search_setup_synergy(a: &Card, b: &Card) -> Detection {
    let searches_creatures = |t: &Card| {
        is_trainer(t) && t.combined_text().contains("search your deck")
    };
    let searches_evolutions = |t: &Card| {
        is_trainer(t) && t.combined_text().contains("evolution")
    };
    let evolving = |c: &Card| c.evolves_from.is_some() || c.evolves_to.is_some();

    let evo_link = |t: &Card, c: &Card| searches_evolutions(t) && evolving(c);
    if evo_link(a, b) || evo_link(b, a) {
        return Detection::hit(
            0.3,
            format!("{} finds {}'s evolution line", a.name, b.name),
        );
    }

    let search_link = |t: &Card, c: &Card| searches_creatures(t) && c.is_creature();
    if search_link(a, b) || search_link(b, a) {
        return Detection::hit(0.3, format!("{} searches out {}", a.name, b.name));
    }

    if a.name.contains("Ball") && b.name.contains("Ball") {
        return Detection::hit(
            0.2,
            format!("{} and {} widen the search package", a.name, b.name),
        );
    }

    // Two cards mining the same deck resource compete with each other.
    let mines_deck = |c: &Card| is_trainer(c) && c.combined_text().contains("from your deck");
    if mines_deck(a) && mines_deck(b) {
        return Detection::hit(
            -0.35,
            format!("{} and {} compete for the same deck resources", a.name, b.name),
        );
    }
    Detection::default()
}

/// Dangerous loops and targeted support. Contributes at 20% weight into
/// the pair total.
pub fn combo_potential(a: &Card, b: &Card) -> Detection {
    let names_other = |t: &Card, c: &Card| is_trainer(t) && t.combined_text().contains(&c.name.to_lowercase());
    if names_other(a, b) || names_other(b, a) {
        return Detection::hit(0.8, format!("{} directly names {}", a.name, b.name));
    }

    let repeatable = |c: &Card| {
        let t = ability_text(c);
        !t.is_empty() && t.contains("may") && !t.contains("once during your turn")
    };
    if repeatable(a) && repeatable(b) {
        return Detection::hit(
            0.6,
            format!("{} and {} form a repeatable ability loop", a.name, b.name),
        );
    }

    let once_per_turn = |c: &Card| ability_text(c).contains("once during your turn");
    if once_per_turn(a) && once_per_turn(b) {
        return Detection::hit(
            0.3,
            format!("{} and {} stack once-per-turn effects", a.name, b.name),
        );
    }

    let feeds_damage = |sup: &Card, atk: &Card| {
        has_ability_mentioning(sup, "damage") && atk.attacks.iter().any(|x| x.damage >= 100)
    };
    if feeds_damage(a, b) || feeds_damage(b, a) {
        return Detection::hit(
            0.5,
            format!("{}'s ability feeds {}'s attack damage", a.name, b.name),
        );
    }
    Detection::default()
}
