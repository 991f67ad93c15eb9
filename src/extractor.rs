use crate::board::{Board, Coord, CENTER};
use crate::tiles::{join, Token, Tokens};
use crate::{Lexicon, PlacementError, Scorer, TileSet};
use log::debug;

/// A word formed by a move: the squares it covers, first to last.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FormedWord {
    coords: Vec<Coord>,
    horizontal: bool,
}

impl FormedWord {
    fn start(&self) -> Coord {
        self.coords[0]
    }

    fn tokens(&self, board: &Board) -> Tokens {
        self.coords
            .iter()
            .filter_map(|&coord| board.token_at(coord).cloned())
            .collect()
    }

    fn touches_locked(&self, board: &Board) -> bool {
        self.coords.iter().any(|&coord| board.is_locked(coord))
    }
}

/// Validates the tiles placed in a move, and scores the words they form.
///
/// A move is a set of tentative tiles on the board. [`commit`](WordExtractor::commit)
/// checks the placement rules, collects the main word and every cross word, looks
/// them up in the lexicon and sums their scores.
#[derive(Debug, Clone, Copy)]
pub struct WordExtractor<'a> {
    lexicon: &'a Lexicon,
    scorer: Scorer<'a>,
}

impl<'a> WordExtractor<'a> {
    pub fn new(lexicon: &'a Lexicon, tileset: &'a TileSet) -> WordExtractor<'a> {
        WordExtractor {
            lexicon,
            scorer: Scorer::new(tileset),
        }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn scorer(&self) -> &Scorer<'a> {
        &self.scorer
    }

    /// Validate and score the tentative tiles at `placed`.
    ///
    /// With `apply_effects` the tiles are locked, the bonus of their squares is
    /// used up and every formed word is recorded for `player`. Without it the
    /// tentative tiles are removed again, leaving the board as it was before the
    /// tiles were placed; this is how candidate moves are tried.
    ///
    /// ## Errors
    /// If the placement breaks a rule, or forms a word that is not in the lexicon.
    /// The tentative tiles are removed in that case.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Coord, Language, Lexicon, TileSet, WordExtractor};
    /// let tileset = TileSet::new(Language::Spanish);
    /// let lexicon = Lexicon::from_words(Language::Spanish, &["CASA"]);
    /// let extractor = WordExtractor::new(&lexicon, &tileset);
    /// let mut board = Board::new(Language::Spanish);
    /// let mut placed = Vec::new();
    /// for (i, letter) in ["C", "A", "S", "A"].iter().enumerate() {
    ///     let coord = Coord::new(8, 8 + i);
    ///     board.place(letter, coord)?;
    ///     placed.push(coord);
    /// }
    /// assert_eq!(extractor.commit(&mut board, &placed, "ana", true)?, 12);
    /// assert_eq!(board.longest_word("ana"), Some(String::from("CASA")));
    /// # Ok::<(), scrabble_solver::PlacementError>(())
    /// ```
    pub fn commit(
        &self,
        board: &mut Board,
        placed: &[Coord],
        player: &str,
        apply_effects: bool,
    ) -> Result<u32, PlacementError> {
        let words = match self.extract(board, placed) {
            Ok(words) => words,
            Err(e) => {
                debug!("placement {:?} rejected: {}", placed, e);
                board.clear_tentative();
                return Err(e);
            }
        };
        let mut score = 0;
        for (word, tokens) in &words {
            let points = self
                .scorer
                .score_word(board, tokens, word.start(), word.horizontal);
            match points {
                Ok(points) => score += points,
                Err(e) => {
                    board.clear_tentative();
                    return Err(e);
                }
            }
        }
        if apply_effects {
            board.lock(placed);
            for &coord in placed {
                board.consume_bonus(coord);
            }
            board.add_player(player);
            for (_, tokens) in &words {
                board.record_word(player, tokens);
            }
            debug!(
                "{} plays {} for {} points",
                player,
                words
                    .iter()
                    .map(|(_, tokens)| join(tokens))
                    .collect::<Vec<_>>()
                    .join(", "),
                score
            );
        } else {
            board.clear_tentative();
        }
        Ok(score)
    }

    /// Lay `tokens` from `start` and commit them as a move by `player`.
    ///
    /// Squares along the way that already hold the same locked tile are used
    /// as they are; the other tiles are placed tentatively first.
    /// ## Errors
    /// If the word runs off the board, crosses a different locked tile, or the
    /// move is rejected by [`commit`](WordExtractor::commit).
    pub fn play_word(
        &self,
        board: &mut Board,
        tokens: &[Token],
        start: Coord,
        horizontal: bool,
        player: &str,
    ) -> Result<u32, PlacementError> {
        let mut placed = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let coord = start.forward(horizontal, i);
            let result = if board.is_locked(coord) {
                if board.token_at(coord) == Some(token) {
                    continue;
                }
                Err(PlacementError::CellAlreadyLocked {
                    row: coord.row,
                    col: coord.col,
                })
            } else {
                board.place(token, coord)
            };
            if let Err(e) = result {
                board.clear_tentative();
                return Err(e);
            }
            placed.push(coord);
        }
        self.commit(board, &placed, player, true)
    }

    /// Check the placement rules and look up all formed words.
    fn extract(
        &self,
        board: &Board,
        placed: &[Coord],
    ) -> Result<Vec<(FormedWord, Tokens)>, PlacementError> {
        if placed.is_empty() {
            return Err(PlacementError::NoTilesPlaced);
        }
        for &coord in placed {
            let cell = board.cell(coord).ok_or(PlacementError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })?;
            if cell.is_locked() {
                return Err(PlacementError::CellAlreadyLocked {
                    row: coord.row,
                    col: coord.col,
                });
            }
            if !cell.is_tentative() {
                return Err(PlacementError::NoTile {
                    row: coord.row,
                    col: coord.col,
                });
            }
        }
        if let Some(stray) = board.tentative().into_iter().find(|c| !placed.contains(c)) {
            return Err(PlacementError::UnlistedTile {
                row: stray.row,
                col: stray.col,
            });
        }
        let mut placed = placed.to_vec();
        placed.sort();
        placed.dedup();

        let first_move = board.is_empty();
        if first_move {
            if placed.len() == 1 {
                return Err(PlacementError::SingleTileOnEmptyBoard);
            }
            if !placed.contains(&CENTER) {
                return Err(PlacementError::CenterRequired);
            }
        }

        let first = placed[0];
        let last = placed[placed.len() - 1];
        let same_row = placed.iter().all(|c| c.row == first.row);
        let same_col = placed.iter().all(|c| c.col == first.col);
        if !same_row && !same_col {
            return Err(PlacementError::Misalignment);
        }
        let hole = |coord: Coord| !board.is_occupied(coord);
        if same_row && (first.col..=last.col).any(|col| hole(Coord::new(first.row, col))) {
            return Err(PlacementError::GapInRow);
        }
        if same_col && (first.row..=last.row).any(|row| hole(Coord::new(row, first.col))) {
            return Err(PlacementError::GapInColumn);
        }

        let words = assemble(board, &placed, same_row);
        if words.is_empty() || (!first_move && !words.iter().any(|w| w.touches_locked(board))) {
            return Err(PlacementError::NotAdjacent);
        }

        let mut result = Vec::with_capacity(words.len());
        for word in words {
            let tokens = word.tokens(board);
            if !self.lexicon.contains(&tokens) {
                return Err(PlacementError::InvalidWord(join(&tokens)));
            }
            result.push((word, tokens));
        }
        Ok(result)
    }
}

/// Collect the words formed by the tiles at `placed` (sorted, aligned and without gaps):
/// the word along the line of the move and a cross word through each placed tile.
/// Runs of a single square are not words.
fn assemble(board: &Board, placed: &[Coord], same_row: bool) -> Vec<FormedWord> {
    let run = |coord: Coord, horizontal: bool| FormedWord {
        coords: board.occupied_run(coord, horizontal),
        horizontal,
    };
    let mut words = Vec::new();
    if placed.len() == 1 {
        words.push(run(placed[0], true));
        words.push(run(placed[0], false));
    } else {
        let horizontal = same_row;
        words.push(run(placed[0], horizontal));
        words.extend(placed.iter().map(|&coord| run(coord, !horizontal)));
    }
    words.retain(|word| word.coords.len() > 1);
    words
}
