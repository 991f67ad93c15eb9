mod cache;
mod trie;

pub use self::cache::LexiconCache;
pub use self::trie::Trie;
use self::trie::TrieVec;
use crate::tiles::{Token, Tokenizer, Tokens};
use crate::tilesets::Language;
use crate::Error;
use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs::read_to_string;

/// Index of a node in the lexicon.
pub type NodeId = usize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    terminal: bool,
    children: BTreeMap<Token, NodeId>,
}

/// The set of valid words of a language, stored as a minimized word graph.
///
/// Words are split into tiles with the tokenizer of the language, and inserted
/// in a prefix tree. The tree is then minimized bottom-up: nodes with the same
/// terminal flag and the same children are merged, so common suffixes share
/// their nodes. The result answers the same membership queries as the tree.
///
/// A `Lexicon` is immutable once built, and can be shared between threads.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexicon {
    nodes: Vec<Node>,
    root: NodeId,
    word_count: usize,
    language: Language,
    tokenizer: Tokenizer,
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon {}: {} words, {} nodes>",
            self.language,
            self.word_count,
            self.node_count()
        )
    }
}

impl Lexicon {
    /// Build a lexicon from a list of words.
    /// Words are trimmed and converted to upper case; empty lines are skipped.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Language, Lexicon};
    /// let lexicon = Lexicon::from_words(Language::Spanish, &["casa", "chico"]);
    /// assert!(lexicon.is_word("CHICO"));
    /// assert!(!lexicon.is_word("CAS"));
    /// ```
    pub fn from_words<I, S>(language: Language, words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokenizer = Tokenizer::for_language(language);
        let mut builder = TrieVec::new();
        let mut word_count = 0;
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if builder.insert(tokenizer.tokenize(&word.to_uppercase())) {
                word_count += 1;
            }
        }
        let lexicon = Lexicon::minimize(&builder, language, tokenizer, word_count);
        debug!(
            "{}: trie with {} nodes minimized to {}",
            language,
            builder.node_count(),
            lexicon.node_count()
        );
        lexicon
    }

    /// Read the lexicon from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(language: Language, wordfile: &str) -> Result<Lexicon, Error> {
        let text = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let lexicon = Lexicon::from_words(language, text.lines());
        info!("{} from '{}'", lexicon, wordfile);
        Ok(lexicon)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the lexicon from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Lexicon, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        bincode::deserialize_from(reader)
            .map_err(|_| Error::LexiconDeserializeError(String::from(wordfile)))
    }

    #[cfg(feature = "bincode")]
    /// Write the lexicon to a bincoded file.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(wordfile)
            .map_err(|_| Error::LexiconSerializeError(String::from(wordfile)))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::LexiconSerializeError(String::from(wordfile)))
    }

    fn minimize(
        trie: &TrieVec<Token>,
        language: Language,
        tokenizer: Tokenizer,
        word_count: usize,
    ) -> Lexicon {
        let mut nodes = Vec::new();
        let mut registry = HashMap::new();
        let root = register(trie, &mut nodes, &mut registry);
        Lexicon {
            nodes,
            root,
            word_count,
            language,
            tokenizer,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The tokenizer used to split words into tiles
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Split `word` into tiles, after converting it to upper case.
    pub fn tokenize(&self, word: &str) -> Tokens {
        self.tokenizer.tokenize(&word.to_uppercase())
    }

    /// True if `word` is in the lexicon. The word is split into tiles first,
    /// so "LLAVE" and the tile sequence LL-A-V-E are the same word.
    pub fn is_word(&self, word: &str) -> bool {
        self.contains(&self.tokenize(word))
    }

    /// True if the tile sequence `tokens` is a word in the lexicon.
    pub fn contains<T: AsRef<str>>(&self, tokens: &[T]) -> bool {
        let mut node = self.root;
        for token in tokens {
            match self.child(node, token.as_ref()) {
                Some(next) => node = next,
                None => return false,
            }
        }
        !tokens.is_empty() && self.is_terminal(node)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node reached from `node` with `token`, if any.
    pub fn child(&self, node: NodeId, token: &str) -> Option<NodeId> {
        self.nodes[node].children.get(token).copied()
    }

    /// Outgoing edges of `node`, ordered by token.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (&Token, NodeId)> {
        self.nodes[node]
            .children
            .iter()
            .map(|(token, &child)| (token, child))
    }

    /// True if a word ends at `node`
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node].terminal
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All words, in tile order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut stack = vec![(self.root, String::new())];
        while let Some((node, prefix)) = stack.pop() {
            if self.is_terminal(node) && !prefix.is_empty() {
                words.push(prefix.clone());
            }
            let children: Vec<_> = self.children(node).collect();
            for (token, child) in children.into_iter().rev() {
                stack.push((child, format!("{}{}", prefix, token)));
            }
        }
        words
    }
}

impl Trie<Token> for Lexicon {
    fn has<K: AsRef<[Token]>>(&self, key: K) -> bool {
        self.contains(key.as_ref())
    }
}

/// Add the subtree at `node` to `nodes`, children first, reusing equivalent
/// nodes that are already registered.
fn register(
    node: &TrieVec<Token>,
    nodes: &mut Vec<Node>,
    registry: &mut HashMap<Node, NodeId>,
) -> NodeId {
    let children = node
        .children()
        .iter()
        .map(|(token, child)| (token.clone(), register(child, nodes, registry)))
        .collect();
    let node = Node {
        terminal: node.terminal(),
        children,
    };
    if let Some(&id) = registry.get(&node) {
        return id;
    }
    let id = nodes.len();
    nodes.push(node.clone());
    registry.insert(node, id);
    id
}
