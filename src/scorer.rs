use crate::board::{Board, Coord};
use crate::tiles::Token;
use crate::{PlacementError, TileSet};

/// Computes the value of a word laid on the board.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    tileset: &'a TileSet,
}

impl<'a> Scorer<'a> {
    pub fn new(tileset: &'a TileSet) -> Scorer<'a> {
        Scorer { tileset }
    }

    pub fn tileset(&self) -> &'a TileSet {
        self.tileset
    }

    /// Points of a single tile, 0 for a tile not in the tileset.
    pub fn letter_value(&self, token: &str) -> u32 {
        self.tileset.points(token)
    }

    /// Score `tokens` laid from `start` along the row (`horizontal`) or column.
    ///
    /// Each tile counts its points times the letter bonus of its square, and the
    /// sum is multiplied by the word bonus of every square covered. Bonuses are
    /// read from the board as they are: squares whose bonus was used by an earlier
    /// move count as plain squares. The board is not modified.
    ///
    /// ## Errors
    /// If the word does not fit on the board.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Coord, Language, Scorer, TileSet};
    /// let tileset = TileSet::new(Language::Spanish);
    /// let board = Board::new(Language::Spanish);
    /// let scorer = Scorer::new(&tileset);
    /// let word = board.tokenizer().tokenize("CASA");
    /// // (3 + 1 + 1 + 1) x 2 for the center square
    /// assert_eq!(scorer.score_word(&board, &word, Coord::new(8, 8), true)?, 12);
    /// # Ok::<(), scrabble_solver::PlacementError>(())
    /// ```
    pub fn score_word(
        &self,
        board: &Board,
        tokens: &[Token],
        start: Coord,
        horizontal: bool,
    ) -> Result<u32, PlacementError> {
        let mut sum = 0;
        let mut word_multiplier = 1;
        for (i, token) in tokens.iter().enumerate() {
            let coord = start.forward(horizontal, i);
            if !coord.is_on_board() {
                return Err(PlacementError::OutOfBounds {
                    row: coord.row,
                    col: coord.col,
                });
            }
            let bonus = board.bonus(coord);
            sum += self.letter_value(token) * bonus.letter_multiplier();
            word_multiplier *= bonus.word_multiplier();
        }
        Ok(sum * word_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, Language};

    type Result<T> = std::result::Result<T, PlacementError>;

    fn tokens(board: &Board, word: &str) -> Vec<Token> {
        board.tokenizer().tokenize(word)
    }

    #[test]
    fn test_center_double_word() -> Result<()> {
        let tileset = TileSet::new(Language::Spanish);
        let scorer = Scorer::new(&tileset);
        let board = Board::new(Language::Spanish);
        let casa = tokens(&board, "CASA");
        assert_eq!(scorer.score_word(&board, &casa, Coord::new(8, 8), true)?, 12);
        // CH-I-C-O: (5 + 1 + 3 + 1) x 2
        let chico = tokens(&board, "CHICO");
        assert_eq!(scorer.score_word(&board, &chico, Coord::new(8, 8), true)?, 20);
        assert_eq!(scorer.score_word(&board, &chico, Coord::new(8, 8), false)?, 20);
        Ok(())
    }

    #[test]
    fn test_letter_and_word_bonus() -> Result<()> {
        let tileset = TileSet::new(Language::English);
        let scorer = Scorer::new(&tileset);
        let board = Board::default();
        let word = tokens(&board, "QUIZ");
        // Q on (1,1) TW, Z on (1,4) DL: (10 + 1 + 1 + 2 * 10) * 3
        assert_eq!(scorer.score_word(&board, &word, Coord::new(1, 1), true)?, 96);
        // two triple word squares
        let word = tokens(&board, "AAAAAAAA");
        assert_eq!(scorer.score_word(&board, &word, Coord::new(1, 1), true)?, (8 + 1) * 9);
        Ok(())
    }

    #[test]
    fn test_used_bonus_not_counted() -> Result<()> {
        let tileset = TileSet::new(Language::Spanish);
        let scorer = Scorer::new(&tileset);
        let mut board = Board::new(Language::Spanish);
        board.consume_bonus(Coord::new(8, 8));
        let casa = tokens(&board, "CASA");
        assert_eq!(scorer.score_word(&board, &casa, Coord::new(8, 8), true)?, 6);
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result<()> {
        let tileset = TileSet::new(Language::Spanish);
        let scorer = Scorer::new(&tileset);
        let board = Board::new(Language::Spanish);
        let casa = tokens(&board, "CASA");
        let first = scorer.score_word(&board, &casa, Coord::new(8, 5), true)?;
        let second = scorer.score_word(&board, &casa, Coord::new(8, 5), true)?;
        assert_eq!(first, second);
        assert_eq!(board.bonus(Coord::new(8, 8)), crate::Bonus::DoubleWord);
        Ok(())
    }

    #[test]
    fn test_unknown_token() -> Result<()> {
        let tileset = TileSet::new(Language::Spanish);
        let scorer = Scorer::new(&tileset);
        assert_eq!(scorer.letter_value("W"), 0);
        let mut board = Board::new(Language::Spanish);
        board.set_grid(&Grid::from_strings(&vec!["-- ".repeat(15); 15]).unwrap());
        let word = tokens(&board, "KWA");
        // neither K nor W is a spanish tile
        assert_eq!(scorer.score_word(&board, &word, Coord::new(3, 3), true)?, 1);
        Ok(())
    }

    #[test]
    fn test_out_of_bounds() {
        let tileset = TileSet::new(Language::English);
        let scorer = Scorer::new(&tileset);
        let board = Board::default();
        let word = tokens(&board, "RUST");
        assert_eq!(
            scorer.score_word(&board, &word, Coord::new(15, 13), true),
            Err(PlacementError::OutOfBounds { row: 15, col: 16 })
        );
        assert!(scorer.score_word(&board, &word, Coord::new(12, 15), false).is_ok());
    }
}
