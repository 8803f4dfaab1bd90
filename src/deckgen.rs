use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use coverflow::VirtualDeckGenerator;

/// Category deck generator for the coverflow viewer.
#[derive(Parser, Debug)]
#[command(name = "coverflow-deckgen", version, about)]
struct Args {
    /// Number of cards in the deck
    #[arg(long, default_value_t = 12)]
    cards: usize,

    /// Random seed; the same seed always yields the same deck
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output file path (prints to stdout when omitted)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Index of the card to mark as current
    #[arg(long)]
    current: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(current) = args.current {
        if current >= args.cards {
            bail!("--current {} is out of range for a deck of {} cards", current, args.cards);
        }
    }

    let deck = VirtualDeckGenerator::with_config(args.cards, args.seed, args.current).generate();

    match &args.out {
        Some(path) => {
            deck.save(path)?;
            tracing::info!(
                cards = deck.len(),
                seed = args.seed,
                path = %path.display(),
                "deck written"
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&deck)?),
    }

    Ok(())
}
