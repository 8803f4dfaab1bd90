use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::deck::{Card, Deck};

const DEFAULT_CARDS: usize = 12;
const DEFAULT_SEED: u64 = 42;

// Category words, combined as "<prefix> <subject>"
const PREFIXES: &[&str] = &[
    "Used", "New", "Local", "Rental", "Vintage", "Student", "Family", "Weekend",
    "Handmade", "Seasonal", "Budget", "Premium",
];

const SUBJECTS: &[&str] = &[
    "Housing", "Cars", "Jobs", "Furniture", "Electronics", "Services", "Bikes",
    "Books", "Events", "Pets", "Tools", "Clothing", "Travel", "Music", "Sports",
];

/// Generates reproducible decks of made-up category cards.
pub struct VirtualDeckGenerator {
    num_cards: usize,
    seed: u64,
    current: Option<usize>,
}

impl Default for VirtualDeckGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualDeckGenerator {
    pub fn new() -> Self {
        Self {
            num_cards: DEFAULT_CARDS,
            seed: DEFAULT_SEED,
            current: None,
        }
    }

    pub fn with_config(num_cards: usize, seed: u64, current: Option<usize>) -> Self {
        Self {
            num_cards,
            seed,
            current,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds the deck. Names are unique while the word lists last, then
    /// get a numeric suffix.
    pub fn generate(&self) -> Deck {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut names: Vec<String> = PREFIXES
            .iter()
            .flat_map(|prefix| {
                SUBJECTS.iter().map(move |subject| format!("{} {}", prefix, subject))
            })
            .collect();
        names.shuffle(&mut rng);

        let pool = names.len();
        let cards = (0..self.num_cards)
            .map(|i| {
                let name = if i < pool {
                    names[i].clone()
                } else {
                    format!("{} {}", names[i % pool], i / pool + 1)
                };
                let slug = name.to_lowercase().replace(' ', "-");
                let mut card = Card::new(name).with_url(format!("/ads/category/{}/", slug));
                card.current = self.current == Some(i);
                card
            })
            .collect();

        Deck::new(cards)
    }
}
