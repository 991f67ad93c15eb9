use crate::tiles::{Rack, Token};
use crate::TileSet;
use multiset::HashMultiSet;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::ops::Deref;

/// Keeps track of the tiles not yet drawn.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Token>);

impl Deref for TileBag {
    type Target = HashMultiSet<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBag {
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// Number of tiles left
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Put a tile back in the bag
    pub fn put(&mut self, token: Token) {
        self.0.insert(token);
    }

    /// Take a random tile out of the bag, or None if the bag is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Token> {
        let token = self.0.iter().choose(rng)?.clone();
        self.0.remove(&token);
        Some(token)
    }

    /// Draw tiles until `rack` is full or the bag is empty.
    /// Returns the number of tiles drawn.
    pub fn fill_rack<R: Rng + ?Sized>(&mut self, rack: &mut Rack, rng: &mut R) -> usize {
        let mut drawn = 0;
        while !rack.is_full() {
            match self.draw(rng) {
                Some(token) => {
                    rack.push(token);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }
}

impl From<&TileSet> for TileBag {
    /// A full bag with `count` tiles of every tile in the tileset
    fn from(tileset: &TileSet) -> Self {
        let mut bag = HashMultiSet::new();
        for (token, count, _points) in tileset.tiles() {
            if count > 0 {
                bag.insert_times(String::from(token), count as usize);
            }
        }
        Self(bag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bag() {
        let tileset = TileSet::new(Language::Spanish);
        let bag = TileBag::from(&tileset);
        assert_eq!(bag.len(), 98);
        assert_eq!(bag.count_of(&String::from("CH")), 1);
        assert_eq!(bag.count_of(&String::from("A")), 12);
    }

    #[test]
    fn test_draw() {
        let tileset = TileSet::new(Language::Catalan);
        let mut bag = TileBag::from(&tileset);
        let mut rng = StdRng::seed_from_u64(7);
        let mut drawn = Vec::new();
        while let Some(token) = bag.draw(&mut rng) {
            assert!(tileset.count(&token) > 0);
            drawn.push(token);
        }
        assert_eq!(drawn.len(), 98);
        assert!(bag.is_empty());
        assert_eq!(bag.draw(&mut rng), None);
    }

    #[test]
    fn test_fill_rack() {
        let tileset = TileSet::new(Language::English);
        let mut bag = TileBag::from(&tileset);
        let mut rng = StdRng::seed_from_u64(42);
        let mut rack = Rack::new();
        assert_eq!(bag.fill_rack(&mut rack, &mut rng), 7);
        assert!(rack.is_full());
        assert_eq!(bag.len(), 91);
        assert_eq!(bag.fill_rack(&mut rack, &mut rng), 0);

        let mut bag = TileBag::new();
        bag.put(String::from("Q"));
        let mut rack = Rack::new();
        assert_eq!(bag.fill_rack(&mut rack, &mut rng), 1);
        assert_eq!(rack.to_string(), "[Q]");
    }
}
