use crate::board::{Board, Coord};
use crate::tiles::{join, Rack, Token, Tokens};
use crate::{Lexicon, Scorer, TileSet, WordExtractor};
use log::{debug, trace, warn};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

/// A candidate move: a word laid from an anchor square.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// Rack tiles used, in the order they are laid
    pub tiles: Tokens,
    /// Square of the first tile
    pub anchor: Coord,
    pub horizontal: bool,
    /// The word laid, or once validated the full word along the line of the move,
    /// locked tiles included
    pub word: Tokens,
    /// Provisional score of the word alone, or the validated score of the move
    pub score: u32,
    /// Squares covered by the new tiles; only set once the move is validated
    pub coords: Option<Vec<Coord>>,
}

impl Move {
    pub fn is_validated(&self) -> bool {
        self.coords.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at {} {} for {}",
            join(&self.word),
            self.anchor,
            if self.horizontal {
                "horizontal"
            } else {
                "vertical"
            },
            self.score
        )
    }
}

/// Finds moves for a rack.
///
/// Candidate words are the lexicon words that can be spelled with the rack tiles.
/// Each candidate is laid from every anchor square of the board in both
/// directions, and checked with the [`WordExtractor`] on a copy of the board.
///
/// ## Examples
/// ```
/// use scrabble_solver::{Board, Coord, Language, Lexicon, MoveGenerator, Rack, TileSet};
/// let tileset = TileSet::new(Language::Spanish);
/// let lexicon = Lexicon::from_words(Language::Spanish, &["CASA", "CASAS", "AS"]);
/// let board = Board::new(Language::Spanish);
/// let rack = Rack::parse("SACASX", tileset.tokenizer())?;
/// let generator = MoveGenerator::new(&lexicon, &tileset);
/// let best = generator.best_move(&rack, &board).unwrap();
/// assert_eq!(best.to_string(), "CASAS at (8, 8) horizontal for 16");
/// # Ok::<(), scrabble_solver::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MoveGenerator<'a> {
    lexicon: &'a Lexicon,
    scorer: Scorer<'a>,
    extractor: WordExtractor<'a>,
    deadline: Option<Instant>,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(lexicon: &'a Lexicon, tileset: &'a TileSet) -> MoveGenerator<'a> {
        MoveGenerator {
            lexicon,
            scorer: Scorer::new(tileset),
            extractor: WordExtractor::new(lexicon, tileset),
            deadline: None,
        }
    }

    /// Stop searching for a better move once `deadline` has passed.
    /// The deadline is checked before each anchor square.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> MoveGenerator<'a> {
        self.deadline = Some(deadline);
        self
    }

    fn expired(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }

    /// All lexicon words that can be spelled with tiles from `rack`, in lexicon order.
    pub fn candidate_words(&self, rack: &Rack) -> Vec<Tokens> {
        let mut tally = rack.tally();
        let mut prefix = Tokens::new();
        let mut words = Vec::new();
        self.descend(self.lexicon.root(), &mut tally, &mut prefix, &mut words);
        words
    }

    fn descend(
        &self,
        node: usize,
        tally: &mut BTreeMap<Token, usize>,
        prefix: &mut Tokens,
        words: &mut Vec<Tokens>,
    ) {
        if self.lexicon.is_terminal(node) && !prefix.is_empty() {
            words.push(prefix.clone());
        }
        for (token, child) in self.lexicon.children(node) {
            if tally.get(token).map_or(true, |&n| n == 0) {
                continue;
            }
            if let Some(n) = tally.get_mut(token) {
                *n -= 1;
            }
            prefix.push(token.clone());
            self.descend(child, tally, prefix, words);
            prefix.pop();
            if let Some(n) = tally.get_mut(token) {
                *n += 1;
            }
        }
    }

    /// A move laying `word` from `anchor`, with its provisional score,
    /// or None if it does not fit.
    fn candidate(&self, board: &Board, word: &[Token], anchor: Coord, horizontal: bool) -> Option<Move> {
        if !board.can_place(word, anchor.row, anchor.col, horizontal) {
            return None;
        }
        let score = self.scorer.score_word(board, word, anchor, horizontal).ok()?;
        Some(Move {
            tiles: word.to_vec(),
            anchor,
            horizontal,
            word: word.to_vec(),
            score,
            coords: None,
        })
    }

    /// All candidate moves on `board`: every candidate word from every anchor,
    /// horizontal before vertical.
    fn candidates(&self, rack: &Rack, board: &Board) -> Vec<Move> {
        let words = self.candidate_words(rack);
        let mut moves = Vec::new();
        for anchor in board.anchors() {
            for word in &words {
                for &horizontal in &[true, false] {
                    moves.extend(self.candidate(board, word, anchor, horizontal));
                }
            }
        }
        moves
    }

    /// Try `candidate` on a copy of `board`. Returns the move with its validated
    /// score, main word and coordinates, or None if the move is rejected.
    pub fn validate(&self, board: &Board, candidate: &Move) -> Option<Move> {
        let mut copy = board.clone();
        let coords: Vec<Coord> = (0..candidate.tiles.len())
            .map(|i| candidate.anchor.forward(candidate.horizontal, i))
            .collect();
        for (token, &coord) in candidate.tiles.iter().zip(&coords) {
            if let Err(e) = copy.place(token, coord) {
                trace!("discarding {}: {}", candidate, e);
                return None;
            }
        }
        let word: Tokens = copy
            .occupied_run(candidate.anchor, candidate.horizontal)
            .into_iter()
            .filter_map(|coord| copy.token_at(coord).cloned())
            .collect();
        match self.extractor.commit(&mut copy, &coords, "", false) {
            Ok(score) => Some(Move {
                score,
                word,
                coords: Some(coords),
                ..candidate.clone()
            }),
            Err(e) => {
                trace!("discarding {}: {}", candidate, e);
                None
            }
        }
    }

    /// The best scoring valid move for `rack`, or None if no word can be played.
    ///
    /// A candidate is only validated when its provisional score, the value of the
    /// word alone, beats the best validated score so far. Cross words are not part
    /// of the provisional score, so a move that gains most of its points from cross
    /// words can be passed over.
    pub fn best_move(&self, rack: &Rack, board: &Board) -> Option<Move> {
        let words = self.candidate_words(rack);
        debug!("{} candidate words for rack {}", words.len(), rack);
        let mut best: Option<Move> = None;
        for anchor in board.anchors() {
            if self.expired() {
                warn!("deadline passed, search stopped before anchor {}", anchor);
                break;
            }
            for word in &words {
                for &horizontal in &[true, false] {
                    let candidate = match self.candidate(board, word, anchor, horizontal) {
                        Some(candidate) => candidate,
                        None => continue,
                    };
                    if best.as_ref().map_or(false, |b| candidate.score <= b.score) {
                        continue;
                    }
                    if let Some(validated) = self.validate(board, &candidate) {
                        if best.as_ref().map_or(true, |b| validated.score > b.score) {
                            best = Some(validated);
                        }
                    }
                }
            }
        }
        if let Some(best) = &best {
            debug!("best move {}", best);
        }
        best
    }

    /// All valid moves for `rack`, highest score first.
    #[cfg(not(feature = "rayon"))]
    pub fn all_moves(&self, rack: &Rack, board: &Board) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .candidates(rack, board)
            .iter()
            .filter_map(|candidate| self.validate(board, candidate))
            .collect();
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        moves
    }

    /// All valid moves for `rack`, highest score first.
    /// Candidates are validated in parallel, each on its own copy of the board.
    #[cfg(feature = "rayon")]
    pub fn all_moves(&self, rack: &Rack, board: &Board) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .candidates(rack, board)
            .par_iter()
            .filter_map(|candidate| self.validate(board, candidate))
            .collect();
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        moves
    }
}
