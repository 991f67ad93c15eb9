use super::Tokens;
use crate::tilesets::Language;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Splits words into tiles.
///
/// Most tiles hold a single letter, but some languages have tiles for a
/// sequence of letters (spanish "CH", "LL", "RR", catalan "L·L", "NY").
/// Tokenizing is greedy: at each position the longest special token that
/// matches is taken, otherwise a single character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tokenizer {
    /// special tokens, longest first
    specials: Vec<String>,
}

impl Tokenizer {
    /// Return a new `Tokenizer` that recognizes `specials` as single tokens.
    /// ## Examples
    /// ```
    /// use scrabble_solver::Tokenizer;
    /// let tokenizer = Tokenizer::new(&["CH", "LL", "RR"]);
    /// assert_eq!(tokenizer.tokenize("LLAVE"), vec!["LL", "A", "V", "E"]);
    /// ```
    pub fn new<S: AsRef<str>>(specials: &[S]) -> Tokenizer {
        let mut specials: Vec<String> = specials
            .iter()
            .map(|s| s.as_ref().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        specials.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        specials.dedup();
        Tokenizer { specials }
    }

    /// Tokenizer with the special tokens of `language`.
    pub fn for_language(language: Language) -> Tokenizer {
        Tokenizer::new(language.special_tokens())
    }

    /// The special tokens, longest first.
    pub fn specials(&self) -> &[String] {
        &self.specials
    }

    /// Split `word` into tokens.
    pub fn tokenize(&self, word: &str) -> Tokens {
        let mut tokens = Tokens::new();
        let mut rest = word;
        while let Some(ch) = rest.chars().next() {
            let len = self
                .specials
                .iter()
                .find(|special| rest.starts_with(special.as_str()))
                .map_or(ch.len_utf8(), |special| special.len());
            tokens.push(String::from(&rest[..len]));
            rest = &rest[len..];
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize("SCRABBLE");
        assert_eq!(tokens, vec!["S", "C", "R", "A", "B", "B", "L", "E"]);
    }

    #[test]
    fn test_spanish() {
        let tokenizer = Tokenizer::for_language(Language::Spanish);
        assert_eq!(tokenizer.tokenize("LLAVE"), vec!["LL", "A", "V", "E"]);
        assert_eq!(tokenizer.tokenize("CHICO"), vec!["CH", "I", "C", "O"]);
        assert_eq!(tokenizer.tokenize("CARRO"), vec!["C", "A", "RR", "O"]);
        assert_eq!(tokenizer.tokenize("ÑANDÚ"), vec!["Ñ", "A", "N", "D", "Ú"]);
    }

    #[test]
    fn test_catalan() {
        let tokenizer = Tokenizer::for_language(Language::Catalan);
        assert_eq!(
            tokenizer.tokenize("COL·LEGI"),
            vec!["C", "O", "L·L", "E", "G", "I"]
        );
        assert_eq!(tokenizer.tokenize("NYAP"), vec!["NY", "A", "P"]);
        // a lone middle dot is just a character
        assert_eq!(tokenizer.tokenize("L·"), vec!["L", "·"]);
    }

    #[test]
    fn test_longest_match_first() {
        let tokenizer = Tokenizer::new(&["N", "NY"]);
        assert_eq!(tokenizer.specials(), &["NY", "N"]);
        assert_eq!(tokenizer.tokenize("NYA"), vec!["NY", "A"]);
    }

    #[test]
    fn test_deterministic() {
        let tokenizer = Tokenizer::for_language(Language::Spanish);
        let word = "CHURRO";
        assert_eq!(tokenizer.tokenize(word), tokenizer.tokenize(word));
        assert_eq!(tokenizer.tokenize(word).concat(), word);
    }

    #[test]
    fn test_empty() {
        let tokenizer = Tokenizer::for_language(Language::English);
        assert!(tokenizer.tokenize("").is_empty());
    }
}
