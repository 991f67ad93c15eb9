use super::{Token, Tokenizer, Tokens, RACK_SIZE};
use crate::error::Error;
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;
use tinyvec::ArrayVec;

type Items = ArrayVec<[Token; RACK_SIZE]>;

/// The tiles a player holds: an ordered multiset of at most 7 tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Rack(Items);

impl Rack {
    pub fn new() -> Rack {
        Rack(Items::new())
    }

    /// Parse a rack from a string, splitting it into tiles with `tokenizer`.
    /// ## Errors
    /// If the string holds more than 7 tiles.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Language, Rack, Tokenizer};
    /// let tokenizer = Tokenizer::for_language(Language::Spanish);
    /// let rack = Rack::parse("chorro", &tokenizer)?;
    /// assert_eq!(rack.len(), 4);
    /// # Ok::<(), scrabble_solver::Error>(())
    /// ```
    pub fn parse(letters: &str, tokenizer: &Tokenizer) -> Result<Rack, Error> {
        Rack::try_from(tokenizer.tokenize(&letters.to_uppercase()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() == RACK_SIZE
    }

    /// Add a tile. Returns the tile back if the rack is full.
    pub fn push(&mut self, token: Token) -> Option<Token> {
        self.0.try_push(token)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// Remove one tile equal to `token`. Returns false if the rack does not hold it.
    pub fn remove(&mut self, token: &str) -> bool {
        match self.0.iter().position(|t| t == token) {
            Some(i) => {
                self.0.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove the tiles in `used`, one for each occurrence.
    /// Returns false, leaving the rack unchanged, if a tile is missing.
    pub fn remove_all(&mut self, used: &[Token]) -> bool {
        let mut rest = self.clone();
        if used.iter().all(|token| rest.remove(token)) {
            *self = rest;
            true
        } else {
            false
        }
    }

    /// Number of tiles for each distinct token.
    pub fn tally(&self) -> BTreeMap<Token, usize> {
        let mut tally = BTreeMap::new();
        for token in self.iter() {
            *tally.entry(token.clone()).or_insert(0) += 1;
        }
        tally
    }
}

impl TryFrom<Tokens> for Rack {
    type Error = Error;
    fn try_from(tokens: Tokens) -> Result<Self, Error> {
        if tokens.len() > RACK_SIZE {
            return Err(Error::RackTooLarge(tokens.len()));
        }
        Ok(Rack(tokens.into_iter().collect()))
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}
