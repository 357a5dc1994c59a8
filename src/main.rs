use clap::{Parser, Subcommand};
use deckforge::catalog::Deck;
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Self-contained deck JSON (name + entries with embedded cards).
    #[arg(global = true, short, long, default_value = "data/deck.json")]
    deck: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full analysis report: scores, matchups, recommendations.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Archetype classification only.
    Classify(cmd::classify::ClassifyArgs),
    /// Synergy graph: edges, combos, anti-synergies, coherence.
    Synergy(cmd::synergy::SynergyArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    println!("\n🃏 DeckForge Analysis Engine");
    println!("📂 Loading Deck: {}", cli.deck);

    let deck = Deck::load_from_file(&cli.deck).unwrap_or_else(|e| {
        eprintln!("\n❌ FATAL: could not load deck:");
        eprintln!("   {}", e);
        process::exit(1);
    });

    match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &deck),
        Commands::Classify(args) => cmd::classify::run(args, &deck),
        Commands::Synergy(args) => cmd::synergy::run(args, &deck),
    }
}
