use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

/// A vertex of the prefix tree. Leaves hold a symbol; internal nodes hold
/// the combined frequency of their two children. Children and parent are
/// arena indices, not pointers.
#[derive(Debug, Clone)]
pub struct Node {
    pub freq: usize,
    pub symbol: Option<char>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub parent: Option<usize>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-backed Huffman tree. All nodes live in `nodes` and reference each
/// other by index; dropping the tree reclaims the whole arena at once.
#[derive(Debug, Clone)]
pub struct Tree {
    pub nodes: Vec<Node>,
    pub root: usize,
}

#[derive(Debug)]
struct HeapEntry {
    freq: usize,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.node == other.node
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap. Frequency ties go to the lower arena index:
        // leaves are numbered in first-occurrence order, internal nodes in
        // creation order.
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl Tree {
    /// Build the optimal prefix tree for the given symbol frequencies.
    ///
    /// Returns `None` when `frequencies` is empty. A single entry yields a
    /// one-node tree whose root is the leaf itself.
    pub fn build(frequencies: &[(char, usize)]) -> Option<Self> {
        if frequencies.is_empty() {
            return None;
        }

        let mut nodes = Vec::with_capacity(frequencies.len() * 2 - 1);
        let mut heap = BinaryHeap::with_capacity(frequencies.len());

        for &(symbol, freq) in frequencies {
            let node = nodes.len();
            nodes.push(Node {
                freq,
                symbol: Some(symbol),
                left: None,
                right: None,
                parent: None,
            });
            heap.push(HeapEntry { freq, node });
        }

        while heap.len() > 1 {
            let smallest = heap.pop().unwrap();
            let second = heap.pop().unwrap();

            // The first-extracted (minimum) node becomes the right child.
            let parent = nodes.len();
            nodes.push(Node {
                freq: smallest.freq + second.freq,
                symbol: None,
                left: Some(second.node),
                right: Some(smallest.node),
                parent: None,
            });
            nodes[smallest.node].parent = Some(parent);
            nodes[second.node].parent = Some(parent);

            heap.push(HeapEntry {
                freq: nodes[parent].freq,
                node: parent,
            });
        }

        let root = heap.pop().unwrap().node;
        trace!("built prefix tree with {} nodes", nodes.len());

        Some(Tree { nodes, root })
    }
}
