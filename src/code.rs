use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tree::Tree;

/// Bidirectional symbol/code-word mapping produced by one compression run.
///
/// `encode` maps each symbol to its code word, `decode` maps each code word
/// back to its symbol. The table is built once from the tree and never
/// mutated afterwards; the tree itself can be dropped as soon as the table
/// exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeTable {
    pub encode: HashMap<char, String>,
    pub decode: HashMap<String, char>,
}

impl CodeTable {
    /// Assign a code word to every leaf of `tree`: "0" for a left branch,
    /// "1" for a right branch, walked depth-first from the root.
    pub fn from_tree(tree: &Tree) -> Self {
        let mut table = CodeTable::default();

        // Explicit stack instead of recursion: a heavily skewed alphabet
        // produces a tree as deep as it has symbols.
        let mut stack = vec![(tree.root, String::new())];

        while let Some((index, path)) = stack.pop() {
            let node = &tree.nodes[index];
            match node.symbol {
                Some(symbol) => {
                    // A singleton alphabet leaves the root as the only leaf;
                    // it still needs a non-empty code word.
                    let code = if path.is_empty() { "0".to_string() } else { path };
                    table.insert(symbol, code);
                }
                None => {
                    if let Some(right) = node.right {
                        stack.push((right, format!("{}1", path)));
                    }
                    if let Some(left) = node.left {
                        stack.push((left, format!("{}0", path)));
                    }
                }
            }
        }

        table
    }

    fn insert(&mut self, symbol: char, code: String) {
        self.encode.insert(symbol, code.clone());
        self.decode.insert(code, symbol);
    }

    /// Number of distinct symbols in the table.
    pub fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode.is_empty()
    }
}
