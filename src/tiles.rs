//! Basic types for working with tiles: tokens, the tokenizer and the rack.
mod rack;
mod tokenizer;

/// Maximum number of tiles on a rack
pub const RACK_SIZE: usize = 7;

/// String corresponding to one tile: a single letter or a multi-letter
/// sequence like "CH" or "L·L".
pub type Token = String;

/// A list of `Token`'s
pub type Tokens = Vec<Token>;

pub use rack::Rack;
pub use tokenizer::Tokenizer;

/// Join tokens back into a word.
pub fn join(tokens: &[Token]) -> String {
    tokens.concat()
}
