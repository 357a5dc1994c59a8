use crate::reports;
use clap::Args;
use deckforge::api;
use deckforge::catalog::Deck;

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Print the classification as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ClassifyArgs, deck: &Deck) {
    let classification = api::classify(deck);

    if args.json {
        match serde_json::to_string_pretty(&classification) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("❌ Could not serialize classification: {}", e),
        }
        return;
    }

    reports::print_archetype(&classification);
}
