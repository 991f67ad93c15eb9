use super::Lexicon;
use crate::tilesets::Language;
use crate::Error;
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Slot = Arc<OnceCell<Arc<Lexicon>>>;

/// Lexicons shared between games, at most one per language.
///
/// The first caller for a language builds the lexicon; concurrent callers for the
/// same language wait for that build and get the same instance. Builds for
/// different languages do not block each other.
#[derive(Debug, Default)]
pub struct LexiconCache {
    slots: Mutex<HashMap<Language, Slot>>,
}

impl LexiconCache {
    pub fn new() -> LexiconCache {
        LexiconCache::default()
    }

    fn slot(&self, language: Language) -> Slot {
        // a panic while holding the lock leaves the map itself intact
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.entry(language).or_default().clone()
    }

    /// Return the lexicon for `language`, calling `build` if it is not loaded yet.
    /// ## Errors
    /// If `build` fails. Nothing is cached then, so a later call tries again.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Language, Lexicon, LexiconCache};
    /// let cache = LexiconCache::new();
    /// let lexicon = cache.get_or_build(Language::English, || {
    ///     Ok(Lexicon::from_words(Language::English, &["RUST"]))
    /// })?;
    /// assert!(lexicon.is_word("RUST"));
    /// # Ok::<(), scrabble_solver::Error>(())
    /// ```
    pub fn get_or_build<F>(&self, language: Language, build: F) -> Result<Arc<Lexicon>, Error>
    where
        F: FnOnce() -> Result<Lexicon, Error>,
    {
        let slot = self.slot(language);
        let lexicon = slot.get_or_try_init(|| {
            debug!("building lexicon for {}", language);
            build().map(Arc::new)
        })?;
        Ok(Arc::clone(lexicon))
    }

    /// Return the lexicon for `language`, building it from `words` if needed.
    pub fn build<I, S>(&self, language: Language, words: I) -> Arc<Lexicon>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slot = self.slot(language);
        Arc::clone(slot.get_or_init(|| Arc::new(Lexicon::from_words(language, words))))
    }

    /// The lexicon for `language`, if it has been built.
    pub fn get(&self, language: Language) -> Option<Arc<Lexicon>> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.get(&language).and_then(|slot| slot.get().cloned())
    }
}
