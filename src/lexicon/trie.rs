/// A set of keys stored as a tree of tokens, answering membership queries.
pub trait Trie<T> {
    /// Returns `true` if the trie contains `key`.
    fn has<K: AsRef<[T]>>(&self, key: K) -> bool;
}

/// Plain prefix tree used to collect the words before they are minimized.
/// Children are kept sorted by token.
#[derive(Debug, Default)]
pub struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn children(&self) -> &[(T, Box<Self>)] {
        &self.children
    }

    /// True if a key ends at this node
    pub fn terminal(&self) -> bool {
        self.terminal
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }
}

impl<T: Ord + Clone> TrieVec<T> {
    /// Insert `key`. Returns false if it was already present.
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) -> bool {
        let mut node = self;
        for token in key.as_ref() {
            let pos = match node.children.binary_search_by(|(t, _)| t.cmp(token)) {
                Ok(pos) => pos,
                Err(pos) => {
                    node.children
                        .insert(pos, (token.clone(), Box::new(TrieVec::new())));
                    pos
                }
            };
            node = &mut { node }.children[pos].1;
        }
        !std::mem::replace(&mut node.terminal, true)
    }
}

impl<T: Ord> Trie<T> for TrieVec<T> {
    fn has<K: AsRef<[T]>>(&self, key: K) -> bool {
        let mut node = self;
        for token in key.as_ref() {
            match node.children.binary_search_by(|(t, _)| t.cmp(token)) {
                Ok(pos) => node = &node.children[pos].1,
                Err(_) => return false,
            }
        }
        node.terminal
    }
}
