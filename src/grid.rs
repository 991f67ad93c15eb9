use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// The dimension of the board: N x N squares
pub const N: usize = 15;
const Q: usize = 1 + N / 2;

use Bonus::{DoubleLetter, DoubleWord, NoBonus, TripleLetter, TripleWord};

/// Upper left quarter of the standard board, center square at the bottom right.
const DEFAULT_QUARTER_BOARD: [[Bonus; Q]; Q] = [
    [TripleWord, NoBonus, NoBonus, DoubleLetter, NoBonus, NoBonus, NoBonus, TripleWord],
    [NoBonus, DoubleWord, NoBonus, NoBonus, NoBonus, TripleLetter, NoBonus, NoBonus],
    [NoBonus, NoBonus, DoubleWord, NoBonus, NoBonus, NoBonus, DoubleLetter, NoBonus],
    [DoubleLetter, NoBonus, NoBonus, DoubleWord, NoBonus, NoBonus, NoBonus, DoubleLetter],
    [NoBonus, NoBonus, NoBonus, NoBonus, DoubleWord, NoBonus, NoBonus, NoBonus],
    [NoBonus, TripleLetter, NoBonus, NoBonus, NoBonus, TripleLetter, NoBonus, NoBonus],
    [NoBonus, NoBonus, DoubleLetter, NoBonus, NoBonus, NoBonus, DoubleLetter, NoBonus],
    [TripleWord, NoBonus, NoBonus, DoubleLetter, NoBonus, NoBonus, NoBonus, DoubleWord],
];

/// Bonus of a square on the board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bonus {
    NoBonus,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Default for Bonus {
    fn default() -> Self {
        NoBonus
    }
}

impl Bonus {
    /// Multiplier for the letter on this square
    pub fn letter_multiplier(self) -> u32 {
        match self {
            DoubleLetter => 2,
            TripleLetter => 3,
            _ => 1,
        }
    }

    /// Multiplier for a word covering this square
    pub fn word_multiplier(self) -> u32 {
        match self {
            DoubleWord => 2,
            TripleWord => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            DoubleLetter => write!(f, "2l"),
            TripleLetter => write!(f, "3l"),
            DoubleWord => write!(f, "2w"),
            TripleWord => write!(f, "3w"),
        }
    }
}

impl FromStr for Bonus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "2l" => Ok(DoubleLetter),
            "3l" => Ok(TripleLetter),
            "2w" => Ok(DoubleWord),
            "3w" => Ok(TripleWord),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Bonus; N]; N];

/// Board grid, consisting of 15x15 (normal or bonus) squares.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// The center square (8,8) is a double word square, and must be used in the first turn.
/// The grid is indexed from 0; the board API uses 1-based rows and columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Grid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard board
    /// ## Example
    /// ```
    /// # use scrabble_solver::{Bonus, Grid};
    /// let grid = Grid::default();
    /// assert_eq!(grid[7][7], Bonus::DoubleWord);
    /// println!("{}", grid);
    /// ```
    fn default() -> Grid {
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD)
    }
}

impl Grid {
    /// Create a new empty grid 15x15 cells with no bonus.
    fn empty() -> Grid {
        Grid([[NoBonus; N]; N])
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[[Bonus; Q]; Q]) -> Grid {
        let mut board = Grid::empty();
        for (i, row) in qb.iter().enumerate() {
            for (j, &val) in row.iter().enumerate() {
                board[i][j] = val;
                board[N - i - 1][j] = val;
                board[i][N - j - 1] = val;
                board[N - i - 1][N - j - 1] = val;
            }
        }
        board
    }

    /// Get board cells as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Bonus::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings
    /// Parameter `grid` must have 15 rows, each row consisting of 15 elements joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a `Bonus`.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Grid, Error};
    /// let grid_strings = Grid::default().to_strings();
    /// let grid = Grid::from_strings(&grid_strings)?;
    /// assert_eq!(grid, Grid::default());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut board = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<&str> = row.as_ref().split_whitespace().collect();
            if cells.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    cells.len(),
                ));
            }
            for (j, &cell) in cells.iter().enumerate() {
                board[i][j] = cell.parse()?;
            }
        }
        Ok(board)
    }
}
