//! A scrabble move engine for Rust.
//! <br>
//! This crate validates and scores moves in a game of scrabble, and finds the best
//! move for a rack of tiles. It supports english, spanish (castellano) and catalan,
//! including the multi-letter tiles of those languages ("CH", "LL", "RR", "L·L", "NY").
//! It can use the `rayon` crate to evaluate moves in parallel.
//!
//! # How to use `scrabble_solver`
//! Start by building a [`Lexicon`] for a language, from a word list with one word per line.
//! Lexicons are expensive to build and immutable afterwards; a [`LexiconCache`] shares
//! them between games. Then create a [`Board`], by default with the standard bonus squares,
//! and a [`TileSet`] with the points and distribution of the tiles.
//!
//! Moves by a player are placed tile by tile with [`Board::place`] and confirmed with
//! [`WordExtractor::commit`]; the [`MoveGenerator`] finds a move for a rack.
//!
//! # Basic usage
//!  ```
//! use scrabble_solver::{Board, Language, LexiconCache, MoveGenerator, Rack, TileBag, TileSet, WordExtractor};
//!
//! let cache = LexiconCache::new();
//! let lexicon = cache.build(Language::Spanish, &["casa", "casas", "as", "saca", "chico"]);
//! let tileset = TileSet::new(Language::Spanish);
//! let mut board = Board::new(Language::Spanish);
//!
//! let mut rack = Rack::parse("casasx", tileset.tokenizer())?;
//! let generator = MoveGenerator::new(&lexicon, &tileset);
//! let best = generator.best_move(&rack, &board).unwrap();
//! assert_eq!(best.score, 16);
//!
//! let extractor = WordExtractor::new(&lexicon, &tileset);
//! extractor.play_word(&mut board, &best.word, best.anchor, best.horizontal, "robot")?;
//! assert!(rack.remove_all(&best.tiles));
//! assert_eq!(board.longest_word("robot").as_deref(), Some("CASAS"));
//!
//! let mut bag = TileBag::from(&tileset);
//! bag.fill_rack(&mut rack, &mut rand::thread_rng());
//! assert!(rack.is_full());
//! println!("{}\n{}", board, rack);
//! # Ok::<(), anyhow::Error>(())
//! ```
mod board;
mod error;
mod extractor;
mod grid;
mod lexicon;
mod movegen;
mod scorer;
mod tilebag;
mod tiles;
mod tilesets;

pub use crate::board::{Board, Cell, Coord, Occupant, CENTER};
pub use crate::error::{Error, PlacementError};
pub use crate::extractor::WordExtractor;
pub use crate::grid::{Bonus, Grid};
pub use crate::lexicon::{Lexicon, LexiconCache, NodeId, Trie};
pub use crate::movegen::{Move, MoveGenerator};
pub use crate::scorer::Scorer;
pub use crate::tilebag::TileBag;
pub use crate::tiles::{join, Rack, Token, Tokenizer, Tokens, RACK_SIZE};
pub use crate::tilesets::{Language, TileSet};
