use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a wordfile or a tile table
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing a bincoded lexicon
    #[cfg(feature = "bincode")]
    #[error("Lexicon {0} could not be deserialized")]
    LexiconDeserializeError(String),

    /// Error serializing a lexicon with bincode
    #[cfg(feature = "bincode")]
    #[error("Lexicon could not be serialized to {0}")]
    LexiconSerializeError(String),

    /// A line in a points or frequency table is not `TOKEN N`
    #[error("Invalid line {line} in {table} table: \"{text}\"")]
    TableParseError {
        table: &'static str,
        line: usize,
        text: String,
    },

    /// A points or frequency table without entries
    #[error("The {0} table is empty")]
    EmptyTable(&'static str),

    /// Language name not recognized
    #[error("Unknown language \"{0}\"")]
    UnknownLanguage(String),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// More tiles than fit on a rack
    #[error("A rack holds at most 7 tiles, got {0}")]
    RackTooLarge(usize),

    /// A move was rejected
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Reasons a placement of tiles is rejected.
///
/// None of these are fatal: a human player can retry, the move generator
/// skips the candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The first move of the game must use at least two tiles
    #[error("A single tile can not be played on an empty board")]
    SingleTileOnEmptyBoard,

    /// The first move of the game must cover the center square
    #[error("The first word must cover the center square")]
    CenterRequired,

    /// Tiles are not in one row or one column
    #[error("Tiles are not in a single row or column")]
    Misalignment,

    /// Empty square between tiles placed in one row
    #[error("Empty square between the tiles in the row")]
    GapInRow,

    /// Empty square between tiles placed in one column
    #[error("Empty square between the tiles in the column")]
    GapInColumn,

    /// None of the formed words touches a tile already on the board
    #[error("The word does not connect to the tiles on the board")]
    NotAdjacent,

    /// A formed word is not in the lexicon
    #[error("\"{0}\" is not a valid word")]
    InvalidWord(String),

    /// Attempt to place (part of) a word outside the board
    #[error("Square at row={row}, col={col} is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace locked tile at row={row}, col={col}")]
    CellAlreadyLocked { row: usize, col: usize },

    /// Commit called without placed tiles
    #[error("No tiles placed")]
    NoTilesPlaced,

    /// A coordinate passed to commit holds no placed tile
    #[error("No tile placed at row={row}, col={col}")]
    NoTile { row: usize, col: usize },

    /// A tentative tile on the board is missing from the coordinates passed to commit
    #[error("Tile at row={row}, col={col} is not part of the move")]
    UnlistedTile { row: usize, col: usize },
}
