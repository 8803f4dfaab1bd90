//! Card decks: the view-only data a carousel is attached to.
//!
//! A deck file is JSON:
//!
//! ```json
//! { "cards": [ { "name": "Housing", "url": "/ads/housing/", "current": true } ] }
//! ```
//!
//! Cards are never reordered or mutated by the carousel.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Marks the card for the page being viewed (aria-current="page")
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub current: bool,
}

impl Card {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            current: false,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// An ordered list of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Builds a deck from bare names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Card::new).collect())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Index of the first card flagged `current`, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.cards.iter().position(|card| card.current)
    }

    /// Reads a deck from a JSON file.
    ///
    /// # Examples
    /// ```no_run
    /// # fn main() -> anyhow::Result<()> {
    /// let deck = coverflow::Deck::load("categories.json")?;
    /// println!("{} cards", deck.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open deck file: {}", path.display()))?;
        let deck: Deck = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid deck JSON in {}", path.display()))?;
        Ok(deck)
    }

    /// Writes the deck as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create deck file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("Failed to serialize deck")?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
