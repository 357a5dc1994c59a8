use crate::reports;
use clap::Args;
use deckforge::api;
use deckforge::catalog::Deck;

#[derive(Args, Debug, Clone)]
pub struct SynergyArgs {
    /// Print the full graph as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SynergyArgs, deck: &Deck) {
    let graph = api::build_synergy_graph(deck);

    if args.json {
        match serde_json::to_string_pretty(&graph) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("❌ Could not serialize graph: {}", e),
        }
        return;
    }

    reports::print_synergy(&graph);
}
