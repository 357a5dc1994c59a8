use crate::reports;
use clap::Args;
use deckforge::analyzer::DeckAnalyzer;
use deckforge::catalog::Deck;
use deckforge::collab::MemoryCache;
use deckforge::config::AnalysisConfig;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,

    /// Print the raw AnalysisReport as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs, deck: &Deck) {
    let analyzer = DeckAnalyzer::new().with_cache(Box::new(MemoryCache::default()));
    let report = analyzer.analyze(deck, &args.config);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("❌ Could not serialize report: {}", e),
        }
        return;
    }

    println!("\n🔎 === DECK AUDIT: {} === 🔎", report.deck_name);
    reports::print_warnings(&report.warnings);
    reports::print_archetype(&report.archetype);
    reports::print_scores(&report.scores);
    reports::print_matchups(&report.meta);
    reports::print_recommendations(&report.recommendations);
    println!("\n{}", report.performance_summary);
}
