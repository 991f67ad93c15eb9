use crate::tiles::{Token, Tokenizer};
use crate::Error;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs::read_to_string;
use std::str::FromStr;

mod ca;
mod en;
mod es;

/// These languages are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    /// English
    English,
    /// Spanish (castellano)
    Spanish,
    /// Catalan
    Catalan,
}

impl Language {
    /// Tiles that hold more than one letter in this language.
    pub fn special_tokens(self) -> &'static [&'static str] {
        match self {
            Language::English => &[],
            Language::Spanish => &["CH", "LL", "RR"],
            Language::Catalan => &["L·L", "NY"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Language::English => "english",
            Language::Spanish => "castellano",
            Language::Catalan => "catalan",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "castellano" | "spanish" | "es" => Ok(Language::Spanish),
            "catalan" | "català" | "ca" => Ok(Language::Catalan),
            _ => Err(Error::UnknownLanguage(String::from(s))),
        }
    }
}

/// token, count, points
type TileInfo = (&'static str, u32, u32);

/// A tileset: the tile distribution and the points of each tile for a language,
/// plus the tokenizer to split words into tiles.
///
/// `TileSet::new` gives the standard distribution for a [`Language`]. Tables supplied
/// by the caller can be loaded with [`from_tables`](TileSet::from_tables) or
/// [`from_files`](TileSet::from_files).
#[derive(Debug, Clone)]
pub struct TileSet {
    language: Language,
    /// (token, count, points), in table order
    tiles: Vec<(Token, u32, u32)>,
    index: HashMap<Token, usize>,
    tokenizer: Tokenizer,
}

impl TileSet {
    /// Return the standard `TileSet` for language.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Language, TileSet};
    /// let tileset = TileSet::new(Language::Spanish);
    /// assert_eq!(tileset.points("CH"), 5);
    /// ```
    pub fn new(language: Language) -> TileSet {
        let tiles = match language {
            Language::English => en::TILESET,
            Language::Spanish => es::TILESET,
            Language::Catalan => ca::TILESET,
        };
        let tiles = tiles
            .iter()
            .map(|&(token, count, points)| (String::from(token), count, points))
            .collect();
        TileSet::from_tiles(language, tiles)
    }

    fn from_tiles(language: Language, tiles: Vec<(Token, u32, u32)>) -> TileSet {
        let index = tiles
            .iter()
            .enumerate()
            .map(|(i, (token, _, _))| (token.clone(), i))
            .collect();
        TileSet {
            language,
            tiles,
            index,
            tokenizer: Tokenizer::for_language(language),
        }
    }

    /// Build a tileset from a points table and a frequency table.
    /// Each non-empty line of a table is a token and a number separated by a space,
    /// like `"CH 5"`. Tokens missing from one of the tables get 0 points or count.
    /// ## Errors
    /// If a line can not be parsed, or a table has no entries.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Language, TileSet};
    /// let tileset = TileSet::from_tables(Language::Spanish, "A 1\nCH 5\n", "A 12\nCH 1\n")?;
    /// assert_eq!(tileset.points("CH"), 5);
    /// assert_eq!(tileset.count("A"), 12);
    /// # Ok::<(), scrabble_solver::Error>(())
    /// ```
    pub fn from_tables(language: Language, points: &str, counts: &str) -> Result<TileSet, Error> {
        let points = parse_table("points", points)?;
        let counts = parse_table("frequency", counts)?;
        let mut tiles: Vec<(Token, u32, u32)> = points
            .iter()
            .map(|(token, p)| (token.clone(), 0, *p))
            .collect();
        for (token, count) in counts {
            match tiles.iter_mut().find(|(t, _, _)| *t == token) {
                Some(tile) => tile.1 = count,
                None => tiles.push((token, count, 0)),
            }
        }
        debug!("{}: loaded {} tiles", language, tiles.len());
        Ok(TileSet::from_tiles(language, tiles))
    }

    /// Read the points and frequency tables from files.
    /// ## Errors
    /// If a file can not be read or parsed.
    pub fn from_files(
        language: Language,
        points_file: &str,
        counts_file: &str,
    ) -> Result<TileSet, Error> {
        let read = |path: &str| {
            read_to_string(path).map_err(|source| Error::ReadError {
                path: String::from(path),
                source,
            })
        };
        TileSet::from_tables(language, &read(points_file)?, &read(counts_file)?)
    }

    /// Return the points for tile, or 0 if not found
    pub fn points(&self, token: &str) -> u32 {
        self.index.get(token).map_or(0, |&i| self.tiles[i].2)
    }

    /// Return the number of tiles with this token in tileset, or 0 if not found
    pub fn count(&self, token: &str) -> u32 {
        self.index.get(token).map_or(0, |&i| self.tiles[i].1)
    }

    /// Iterate over (token, count, points) in table order
    pub fn tiles(&self) -> impl Iterator<Item = (&str, u32, u32)> {
        self.tiles
            .iter()
            .map(|(token, count, points)| (token.as_str(), *count, *points))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the tokenizer for this language
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

/// Parse `TOKEN N` lines. Blank lines are skipped.
fn parse_table(table: &'static str, text: &str) -> Result<Vec<(Token, u32)>, Error> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let value = match parts.as_slice() {
            [_, value] => value.parse::<u32>().ok(),
            _ => None,
        };
        match value {
            Some(value) => entries.push((parts[0].to_uppercase(), value)),
            None => {
                return Err(Error::TableParseError {
                    table,
                    line: i + 1,
                    text: String::from(line),
                })
            }
        }
    }
    if entries.is_empty() {
        return Err(Error::EmptyTable(table));
    }
    Ok(entries)
}
