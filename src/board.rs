use crate::grid::{Bonus, Grid, N};
use crate::tiles::{Token, Tokenizer, Tokens};
use crate::tilesets::Language;
use crate::{Error, PlacementError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// The center square. The first word of a game must cover it.
pub const CENTER: Coord = Coord { row: 8, col: 8 };

/// Position of a square on the board. `row` and `col` run from 1 to 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (1..=N).contains(&self.row) && (1..=N).contains(&self.col)
    }

    /// The square `n` steps further along the row (`horizontal`) or column.
    pub fn forward(self, horizontal: bool, n: usize) -> Coord {
        if horizontal {
            Coord::new(self.row, self.col + n)
        } else {
            Coord::new(self.row + n, self.col)
        }
    }

    /// The square one step back along the row or column, if any.
    pub fn back(self, horizontal: bool) -> Option<Coord> {
        match (horizontal, self.row, self.col) {
            (true, _, 0..=1) | (false, 0..=1, _) => None,
            (true, row, col) => Some(Coord::new(row, col - 1)),
            (false, row, col) => Some(Coord::new(row - 1, col)),
        }
    }

    fn index(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row - 1, self.col - 1))
        } else {
            None
        }
    }

    fn out_of_bounds(self) -> PlacementError {
        PlacementError::OutOfBounds {
            row: self.row,
            col: self.col,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a square holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    /// Placed during the current move, not yet validated
    Tentative(Token),
    /// Validated and scored; never overwritten
    Locked(Token),
}

impl Default for Occupant {
    fn default() -> Self {
        Occupant::Empty
    }
}

/// A square on the board: its bonus and its tile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    bonus: Bonus,
    occupant: Occupant,
}

impl Cell {
    /// The bonus still available on this square
    pub fn bonus(&self) -> Bonus {
        self.bonus
    }

    pub fn occupant(&self) -> &Occupant {
        &self.occupant
    }

    /// The tile on this square, tentative or locked
    pub fn token(&self) -> Option<&Token> {
        match &self.occupant {
            Occupant::Empty => None,
            Occupant::Tentative(token) | Occupant::Locked(token) => Some(token),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.occupant == Occupant::Empty
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.occupant, Occupant::Locked(_))
    }

    pub fn is_tentative(&self) -> bool {
        matches!(self.occupant, Occupant::Tentative(_))
    }
}

type Cells = [[Cell; N]; N];

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".", tentative tiles in lower case.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match &cell.occupant {
                        Occupant::Empty => String::from("."),
                        Occupant::Tentative(token) => token.to_lowercase(),
                        Occupant::Locked(token) => token.clone(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

/// Represents the state of a scrabble board.
/// * A grid of 15x15 squares with possible letter/word bonus,
/// * The tile on each square, tentative (placed this move) or locked,
/// * The language played, and the longest word each player has formed.
///
/// `Clone` gives an independent deep copy, used to try out moves.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Cells,
    language: Language,
    longest_words: HashMap<String, Tokens>,
}

impl Board {
    /// Create a new empty board, with 15x15 squares and the standard bonus layout.
    ///
    /// ## Examples
    ///```
    /// use scrabble_solver::{Board, Language};
    ///
    /// let board = Board::new(Language::Spanish);
    /// assert!(board.is_empty());
    ///```
    /// Additional builder functions can be used to set the grid and state of the board.
    /// See also:
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    #[must_use]
    pub fn new(language: Language) -> Board {
        let mut board = Board {
            cells: Cells::default(),
            language,
            longest_words: HashMap::new(),
        };
        board.set_grid(&Grid::default());
        board
    }

    /// Set the bonus of every square from `grid`.
    pub fn set_grid(&mut self, grid: &Grid) {
        for (cells, bonuses) in self.cells.iter_mut().zip(grid.iter()) {
            for (cell, &bonus) in cells.iter_mut().zip(bonuses.iter()) {
                cell.bonus = bonus;
            }
        }
    }

    /// Set board cells from string representation
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid board cells.
    pub fn set_grid_from_strings<S: AsRef<str>>(&mut self, grid: &[S]) -> Result<(), Error> {
        self.set_grid(&Grid::from_strings(grid)?);
        Ok(())
    }

    /// Set board cells from string representation
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid board cells.
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<Board, Error> {
        self.set_grid_from_strings(grid)?;
        Ok(self)
    }

    /// Set board state from a list of strings.
    /// The list must contain 15 rows of 15 tiles; "." or " " is an empty square.
    /// Rows are split into tiles with the tokenizer of the board language.
    /// All tiles are locked, and the bonus under them counts as used.
    /// ## Errors
    /// If the list of strings has wrong dimensions.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Coord, Language};
    /// let mut state = vec!["..............."; 15];
    /// state[7] = ".......CHICO...";
    /// let board = Board::new(Language::Spanish).with_state_from_strings(&state)?;
    /// assert_eq!(board.token_at(Coord::new(8, 8)).map(String::as_str), Some("CH"));
    /// assert_eq!(board.token_at(Coord::new(8, 9)).map(String::as_str), Some("I"));
    /// # Ok::<(), scrabble_solver::Error>(())
    /// ```
    pub fn set_state_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let tokenizer = self.tokenizer();
        let mut state = Vec::with_capacity(N);
        for row in rows {
            let row = row.as_ref();
            let tokens = tokenizer.tokenize(&row.to_uppercase());
            if tokens.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), tokens.len()));
            }
            state.push(tokens);
        }
        for (cells, tokens) in self.cells.iter_mut().zip(state) {
            for (cell, token) in cells.iter_mut().zip(tokens) {
                if token == "." || token == " " {
                    cell.occupant = Occupant::Empty;
                } else {
                    cell.occupant = Occupant::Locked(token);
                    cell.bonus = Bonus::NoBonus;
                }
            }
        }
        Ok(())
    }

    /// Set board state from list of strings, and return the modified board.
    /// See [`set_state_from_strings`](Board::set_state_from_strings).
    /// ## Errors
    /// If the list of strings has wrong dimensions.
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Tokenizer for the board language
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::for_language(self.language)
    }

    /// The square at `coord`, or None if outside the board.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        coord.index().map(|(i, j)| &self.cells[i][j])
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        match coord.index() {
            Some((i, j)) => Some(&mut self.cells[i][j]),
            None => None,
        }
    }

    /// Return the tile at `coord`, tentative or locked, or None if empty or outside the board.
    pub fn token_at(&self, coord: Coord) -> Option<&Token> {
        self.cell(coord).and_then(Cell::token)
    }

    /// Bonus still available at `coord`
    pub fn bonus(&self, coord: Coord) -> Bonus {
        self.cell(coord).map_or(Bonus::NoBonus, Cell::bonus)
    }

    /// Check if the square at `coord` holds a locked tile.
    pub fn is_locked(&self, coord: Coord) -> bool {
        self.cell(coord).map_or(false, Cell::is_locked)
    }

    /// Check if the square at `coord` holds a tile, tentative or locked.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.token_at(coord).is_some()
    }

    /// True if no tile has been locked anywhere on the board.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_locked())
    }

    /// Check if `tokens` fit on the board starting at `row`, `col`:
    /// every square is on the board and holds no locked tile.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_solver::Board;
    /// let board = Board::default();
    /// let word: Vec<String> = vec!["R".into(), "U".into(), "S".into(), "T".into()];
    /// assert!(board.can_place(&word, 8, 12, true));
    /// assert!(!board.can_place(&word, 8, 13, true));
    /// ```
    pub fn can_place(&self, tokens: &[Token], row: usize, col: usize, horizontal: bool) -> bool {
        let start = Coord::new(row, col);
        (0..tokens.len())
            .map(|i| start.forward(horizontal, i))
            .all(|coord| coord.is_on_board() && !self.is_locked(coord))
    }

    /// Squares where a new word can be anchored.
    ///
    /// On an empty board this is only the center square. Otherwise it is every empty
    /// square next to a locked tile, where a neighbour only counts if the square on
    /// the opposite side of that locked tile is empty or off the board.
    /// The result is in row-major order.
    pub fn anchors(&self) -> Vec<Coord> {
        if self.is_empty() {
            return vec![CENTER];
        }
        let mut anchors = BTreeSet::new();
        for row in 1..=N {
            for col in 1..=N {
                if !self.is_locked(Coord::new(row, col)) {
                    continue;
                }
                // signed offsets so the opposite side can fall off the board
                for &(dr, dc) in &[(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
                    let at = |k: isize| {
                        let r = row as isize + k * dr;
                        let c = col as isize + k * dc;
                        if r < 1 || c < 1 {
                            None
                        } else {
                            Some(Coord::new(r as usize, c as usize)).filter(|c| c.is_on_board())
                        }
                    };
                    let neighbour = match at(1) {
                        Some(coord) if !self.is_locked(coord) => coord,
                        _ => continue,
                    };
                    let opposite_free = at(-1).map_or(true, |coord| !self.is_locked(coord));
                    if opposite_free {
                        anchors.insert(neighbour);
                    }
                }
            }
        }
        anchors.into_iter().collect()
    }

    /// Place `token` tentatively at `coord`.
    /// A tentative tile already there is replaced.
    /// ## Errors
    /// If `coord` is outside the board, or holds a locked tile.
    pub fn place(&mut self, token: &str, coord: Coord) -> Result<(), PlacementError> {
        let cell = self.cell_mut(coord).ok_or_else(|| coord.out_of_bounds())?;
        if cell.is_locked() {
            return Err(PlacementError::CellAlreadyLocked {
                row: coord.row,
                col: coord.col,
            });
        }
        cell.occupant = Occupant::Tentative(String::from(token));
        Ok(())
    }

    /// Promote the tentative tiles at `coords` to locked.
    /// Squares that are not tentative are left alone.
    pub fn lock(&mut self, coords: &[Coord]) {
        for &coord in coords {
            if let Some(cell) = self.cell_mut(coord) {
                if let Occupant::Tentative(token) = &cell.occupant {
                    cell.occupant = Occupant::Locked(token.clone());
                }
            }
        }
    }

    /// Remove all tentative tiles.
    pub fn clear_tentative(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.is_tentative() {
                cell.occupant = Occupant::Empty;
            }
        }
    }

    /// Coordinates of all tentative tiles, in row-major order.
    pub fn tentative(&self) -> Vec<Coord> {
        let mut coords = Vec::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.is_tentative() {
                    coords.push(Coord::new(i + 1, j + 1));
                }
            }
        }
        coords
    }

    /// Mark the bonus at `coord` as used.
    pub fn consume_bonus(&mut self, coord: Coord) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.bonus = Bonus::NoBonus;
        }
    }

    /// The run of occupied squares along the row (`horizontal`) or column
    /// through `coord`, from first to last.
    pub fn occupied_run(&self, coord: Coord, horizontal: bool) -> Vec<Coord> {
        if !self.is_occupied(coord) {
            return Vec::new();
        }
        let mut start = coord;
        while let Some(prev) = start.back(horizontal) {
            if !self.is_occupied(prev) {
                break;
            }
            start = prev;
        }
        (0..)
            .map(|i| start.forward(horizontal, i))
            .take_while(|&c| self.is_occupied(c))
            .collect()
    }

    /// Register a player with no words yet.
    pub fn add_player(&mut self, player: &str) {
        self.longest_words
            .entry(String::from(player))
            .or_insert_with(Tokens::new);
    }

    /// Record a word formed by `player`; it becomes the player's longest word
    /// if it covers more squares than the current one.
    pub fn record_word(&mut self, player: &str, word: &[Token]) {
        let longest = self
            .longest_words
            .entry(String::from(player))
            .or_insert_with(Tokens::new);
        if word.len() > longest.len() {
            *longest = word.to_vec();
        }
    }

    /// The longest word formed by `player`, if the player is known.
    pub fn longest_word(&self, player: &str) -> Option<String> {
        self.longest_words.get(player).map(|tokens| tokens.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    const TEST_STATE: &[&str] = &[
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        ".......CASA....",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
    ];

    fn board_es() -> Board {
        Board::new(Language::Spanish)
    }

    fn tokens(word: &str) -> Tokens {
        Tokenizer::for_language(Language::Spanish).tokenize(word)
    }

    #[test]
    fn test_state() -> Result<()> {
        let board = board_es().with_state_from_strings(TEST_STATE)?;
        assert!(board.is_locked(Coord::new(8, 8)));
        assert!(board.is_locked(Coord::new(8, 11)));
        assert!(!board.is_occupied(Coord::new(8, 12)));
        assert!(!board.is_empty());
        // bonus under loaded tiles is used
        assert_eq!(board.bonus(Coord::new(8, 8)), Bonus::NoBonus);
        assert_eq!(board.bonus(Coord::new(8, 12)), Bonus::DoubleLetter);
        assert_eq!(board.to_string().lines().nth(7), Some(".......CASA...."));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidRowLength")]
    fn test_state_row_length() {
        let mut state = TEST_STATE.to_vec();
        state[7] = ".......CASA.....";
        board_es().with_state_from_strings(&state).unwrap();
    }

    #[test]
    fn test_state_multi_letter_tiles() -> Result<()> {
        let mut state = TEST_STATE.to_vec();
        // 16 characters, 15 tiles
        state[3] = "..LLAVE.........";
        let board = board_es().with_state_from_strings(&state)?;
        assert_eq!(board.token_at(Coord::new(4, 3)).map(String::as_str), Some("LL"));
        assert_eq!(board.token_at(Coord::new(4, 4)).map(String::as_str), Some("A"));
        Ok(())
    }

    #[test]
    fn test_anchors_empty_board() {
        let board = board_es();
        assert_eq!(board.anchors(), vec![CENTER]);
    }

    #[test]
    fn test_anchors_single_tile() {
        let mut board = board_es();
        board.place("A", CENTER).unwrap();
        // tentative tiles do not count
        assert_eq!(board.anchors(), vec![CENTER]);
        board.lock(&[CENTER]);
        assert_eq!(
            board.anchors(),
            vec![
                Coord::new(7, 8),
                Coord::new(8, 7),
                Coord::new(8, 9),
                Coord::new(9, 8)
            ]
        );
    }

    #[test]
    fn test_anchors_at_corner() {
        let mut board = board_es();
        board.place("A", Coord::new(1, 1)).unwrap();
        board.lock(&[Coord::new(1, 1)]);
        assert_eq!(board.anchors(), vec![Coord::new(1, 2), Coord::new(2, 1)]);

        let mut board = board_es();
        board.place("A", Coord::new(15, 15)).unwrap();
        board.lock(&[Coord::new(15, 15)]);
        assert_eq!(board.anchors(), vec![Coord::new(14, 15), Coord::new(15, 14)]);
    }

    #[test]
    fn test_anchors_opposite_side_rule() -> Result<()> {
        let board = board_es().with_state_from_strings(TEST_STATE)?;
        // the ends of a horizontal word are not anchors: the opposite side is occupied
        let expect: Vec<Coord> = [7, 9]
            .iter()
            .flat_map(|&row| (8..=11).map(move |col| Coord::new(row, col)))
            .collect();
        assert_eq!(board.anchors(), expect);
        Ok(())
    }

    #[test]
    fn test_can_place() -> Result<()> {
        let board = board_es().with_state_from_strings(TEST_STATE)?;
        let word = tokens("CHICO");
        assert_eq!(word.len(), 4);
        assert!(board.can_place(&word, 9, 8, true));
        assert!(board.can_place(&word, 12, 12, true));
        assert!(!board.can_place(&word, 12, 13, true));
        assert!(!board.can_place(&word, 5, 8, false));
        assert!(board.can_place(&word, 4, 8, false));
        assert!(!board.can_place(&word, 0, 8, true));
        Ok(())
    }

    #[test]
    fn test_place_lock_clear() {
        let mut board = board_es();
        board.place("C", Coord::new(8, 8)).unwrap();
        board.place("A", Coord::new(8, 9)).unwrap();
        assert!(board.is_empty());
        assert_eq!(board.tentative(), vec![Coord::new(8, 8), Coord::new(8, 9)]);
        board.lock(&[Coord::new(8, 8)]);
        assert!(!board.is_empty());
        board.clear_tentative();
        assert!(board.tentative().is_empty());
        assert!(board.is_locked(Coord::new(8, 8)));
        assert!(!board.is_occupied(Coord::new(8, 9)));
    }

    #[test]
    fn test_place_errors() {
        let mut board = board_es();
        board.place("C", CENTER).unwrap();
        board.lock(&[CENTER]);
        assert_eq!(
            board.place("A", CENTER),
            Err(PlacementError::CellAlreadyLocked { row: 8, col: 8 })
        );
        assert_eq!(
            board.place("A", Coord::new(16, 1)),
            Err(PlacementError::OutOfBounds { row: 16, col: 1 })
        );
        assert_eq!(
            board.place("A", Coord::new(3, 0)),
            Err(PlacementError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(board.token_at(CENTER).map(String::as_str), Some("C"));
    }

    #[test]
    fn test_clone_is_deep() -> Result<()> {
        let board = board_es().with_state_from_strings(TEST_STATE)?;
        let mut copy = board.clone();
        copy.place("S", Coord::new(8, 12)).unwrap();
        copy.lock(&[Coord::new(8, 12)]);
        copy.consume_bonus(Coord::new(8, 12));
        assert!(!board.is_occupied(Coord::new(8, 12)));
        assert_eq!(board.bonus(Coord::new(8, 12)), Bonus::DoubleLetter);
        Ok(())
    }

    #[test]
    fn test_occupied_run() -> Result<()> {
        let mut board = board_es().with_state_from_strings(TEST_STATE)?;
        board.place("S", Coord::new(8, 12)).unwrap();
        let run = board.occupied_run(Coord::new(8, 12), true);
        assert_eq!(run.first(), Some(&Coord::new(8, 8)));
        assert_eq!(run.len(), 5);
        assert_eq!(board.occupied_run(Coord::new(8, 12), false), vec![Coord::new(8, 12)]);
        assert!(board.occupied_run(Coord::new(1, 1), true).is_empty());
        Ok(())
    }

    #[test]
    fn test_longest_word() {
        let mut board = board_es();
        board.add_player("ana");
        assert_eq!(board.longest_word("ana"), Some(String::new()));
        assert_eq!(board.longest_word("bob"), None);
        board.record_word("ana", &tokens("CASA"));
        board.record_word("ana", &tokens("AS"));
        assert_eq!(board.longest_word("ana"), Some(String::from("CASA")));
        // "CHICO" covers four squares, as many as "CASA"
        board.record_word("ana", &tokens("CHICO"));
        assert_eq!(board.longest_word("ana"), Some(String::from("CASA")));
        board.record_word("ana", &tokens("CASAS"));
        assert_eq!(board.longest_word("ana"), Some(String::from("CASAS")));
    }

    #[test]
    fn test_display() {
        let mut board = board_es();
        board.place("LL", CENTER).unwrap();
        println!("{}", board);
        assert_eq!(board.to_string().lines().nth(7), Some(".......ll......."));
    }
}
