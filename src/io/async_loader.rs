//! Asynchronous deck file loading.
//!
//! Deck files are parsed on a background thread so the window keeps
//! repainting while a large file is read.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

use coverflow::{Deck, VirtualDeckGenerator};
use eframe::egui;

/// Result of a completed deck loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        deck: Deck,
        /// Path to the file that was loaded
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of deck files.
pub struct AsyncLoader {
    /// Set while a background load runs
    in_progress: Arc<AtomicBool>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Deck, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            in_progress: Arc::new(AtomicBool::new(false)),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Starts loading a deck file in the background.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the deck JSON file
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        self.in_progress.store(true, Ordering::Release);
        self.pending_load_path = Some(path.clone());

        let in_progress = Arc::clone(&self.in_progress);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            // `{:#}` keeps the context chain on one line
            let result = Deck::load(&path).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);

            in_progress.store(false, Ordering::Release);
            ctx_handle.request_repaint();
        });
    }

    /// Generates a virtual deck in-memory (synchronously).
    pub fn load_virtual_deck(&self, num_cards: usize, seed: u64) -> Deck {
        VirtualDeckGenerator::with_config(num_cards, seed, None).generate()
    }

    /// Returns the background load result, if one has arrived.
    ///
    /// # Returns
    /// * `LoadResult::Success` - Loading completed successfully
    /// * `LoadResult::Error` - Loading failed with an error
    /// * `LoadResult::None` - Still loading, or nothing was started
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take();
        match (result, path) {
            (Ok(deck), Some(path)) => LoadResult::Success { deck, path },
            (Ok(_), None) => LoadResult::Error("Deck loaded without a source path".to_string()),
            (Err(error_msg), _) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_virtual_deck_loading() {
        let loader = AsyncLoader::new();
        let deck = loader.load_virtual_deck(9, 42);
        assert_eq!(deck.len(), 9);
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }
}
