use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use deckforge::analyzer::archetype::ArchetypeClassification;
use deckforge::analyzer::meta::MetaAnalysis;
use deckforge::analyzer::recommend::{Priority, Recommendation};
use deckforge::analyzer::scoring::DeckScores;
use deckforge::analyzer::synergy::{Polarity, SynergyGraph};
use deckforge::analyzer::{AnalysisWarning, Severity};

pub fn print_warnings(warnings: &[AnalysisWarning]) {
    if warnings.is_empty() {
        println!("\n✅ No deck-construction warnings.");
        return;
    }
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Severity", "Category", "Message", "Suggestion"]);
    for w in warnings {
        let (label, color) = match w.severity {
            Severity::Error => ("ERROR", Color::Red),
            Severity::Warning => ("WARN", Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(label).fg(color).add_attribute(Attribute::Bold),
            Cell::new(&w.category),
            Cell::new(&w.message),
            Cell::new(w.suggestion.as_deref().unwrap_or("-")),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_archetype(c: &ArchetypeClassification) {
    println!(
        "\n🏷️  Archetype: {}{} ({}% confidence)",
        c.primary,
        c.secondary
            .map(|s| format!(" / {}", s))
            .unwrap_or_default(),
        c.confidence
    );
    println!("   {}", c.playstyle);
    for line in &c.characteristics {
        println!("   • {}", line);
    }
}

pub fn print_scores(scores: &DeckScores) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Axis", "Score"]);

    let rows = [
        ("Consistency", scores.consistency),
        ("Power", scores.power),
        ("Speed", scores.speed),
        ("Versatility", scores.versatility),
        ("Meta Relevance", scores.meta_relevance),
        ("Innovation", scores.innovation),
        ("Difficulty", scores.difficulty),
        ("OVERALL", scores.overall),
    ];
    for (name, value) in rows {
        let cell = Cell::new(format!("{:.0}", value)).set_alignment(CellAlignment::Right);
        let cell = if name == "OVERALL" {
            cell.add_attribute(Attribute::Bold)
        } else {
            cell
        };
        table.add_row(vec![Cell::new(name), cell]);
    }
    println!("\n{}", table);

    if !scores.breakdown.strengths.is_empty() {
        println!("💪 Strengths: {}", scores.breakdown.strengths.join(", "));
    }
    if !scores.breakdown.weaknesses.is_empty() {
        println!("🩹 Weaknesses: {}", scores.breakdown.weaknesses.join(", "));
    }
    println!("🎯 {}", scores.breakdown.core_strategy);
    for wc in &scores.breakdown.win_conditions {
        println!("   ★ {}", wc);
    }
}

pub fn print_matchups(meta: &MetaAnalysis) {
    println!(
        "\n🌍 Meta position: {:?} — closest match: {}",
        meta.tier, meta.archetype_match
    );
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Opponent", "Archetype", "Win %", "Notes"]);
    for m in &meta.matchups {
        let color = if m.win_rate >= 55.0 {
            Color::Green
        } else if m.win_rate <= 45.0 {
            Color::Red
        } else {
            Color::White
        };
        table.add_row(vec![
            Cell::new(&m.opponent),
            Cell::new(m.opponent_archetype.to_string()),
            Cell::new(format!("{:.0}", m.win_rate))
                .fg(color)
                .set_alignment(CellAlignment::Right),
            Cell::new(m.notes.join("; ")),
        ]);
    }
    println!("{}", table);

    if let Some(rotation) = &meta.rotation {
        println!(
            "♻️  Rotation impact: {:.0}/100 ({} card(s) rotating)",
            rotation.impact_score,
            rotation.rotating_cards.len()
        );
    }
}

pub fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("\n✅ No recommendations — the list looks tight.");
        return;
    }
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Priority", "Action", "Card", "Reason", "Impact"]);
    for r in recommendations {
        let (label, color) = match r.priority {
            Priority::High => ("HIGH", Color::Red),
            Priority::Medium => ("MED", Color::Yellow),
            Priority::Low => ("LOW", Color::Grey),
        };
        table.add_row(vec![
            Cell::new(label).fg(color).add_attribute(Attribute::Bold),
            Cell::new(format!("{:?}", r.kind)),
            Cell::new(r.card_name.as_deref().unwrap_or("-")),
            Cell::new(&r.reason),
            Cell::new(&r.impact),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_synergy(graph: &SynergyGraph) {
    println!(
        "\n🕸️  Synergy graph: {} cards, coherence {:.2}",
        graph.nodes.len(),
        graph.overall_coherence
    );

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Card", "Target", "Strength", "Why"]);
    for node in &graph.nodes {
        for edge in &node.edges {
            let color = match edge.polarity {
                Polarity::Positive => Color::Green,
                Polarity::Negative => Color::Red,
                Polarity::Neutral => Color::White,
            };
            table.add_row(vec![
                Cell::new(&node.card_name),
                Cell::new(&edge.target_id),
                Cell::new(edge.strength.to_string())
                    .fg(color)
                    .set_alignment(CellAlignment::Right),
                Cell::new(&edge.description),
            ]);
        }
    }
    println!("{}", table);

    for combo in &graph.combos {
        println!(
            "⚡ {} (impact {}, reliability {:.0}%): {}",
            combo.pattern_name,
            combo.impact,
            combo.reliability * 100.0,
            combo.description
        );
    }
    for anti in &graph.anti_synergies {
        println!(
            "⚠️  {} ↔ {} (severity {:.1}{}): {}",
            anti.card_a,
            anti.card_b,
            anti.severity,
            if anti.can_coexist { "" } else { ", should not coexist" },
            anti.reason
        );
    }
}
