use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::frequency::FrequencyTable;


/// A node of a strict binary prefix tree.
/// Every node is owned by its parent, the root by the [`EncodingTree`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {

    Internal { count: usize, left: Box<Node<T>>, right: Box<Node<T>> },
    Leaf { count: usize, value: T },

}

impl<T> Node<T> {

    pub const fn count(&self) -> usize {
        match self {
            Node::Internal { count, .. } |
            Node::Leaf { count, .. }
                => *count
        }
    }
}


/// Queue entry. Ordered by ascending `(count, seq)` so that equal counts
/// are broken by creation order and the tree shape is reproducible.
struct Queued<T> {

    count: usize,
    seq: usize,
    node: Node<T>

}

impl<T> PartialEq for Queued<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.seq == other.seq
    }
}

impl<T> Eq for Queued<T> {}

impl<T> PartialOrd for Queued<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Queued<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        (other.count, other.seq).cmp(&(self.count, self.seq))
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct EncodingTree<T> {

    root: Node<T>

}

impl<T> EncodingTree<T>
where
    T: Eq + Hash + Clone
{

    /// Builds the Huffman tree of `frequencies`.
    ///
    /// The two lowest nodes are repeatedly merged, the first extracted
    /// becoming the left child. Leaves are numbered in table order and merged
    /// nodes after them, which decides between equal counts.
    pub fn from_frequencies(frequencies: &FrequencyTable<T>) -> Self {

        let mut queue: BinaryHeap<Queued<T>> = frequencies.iter()
            .enumerate()
            .map(|(seq, (value, count))| Queued {
                count,
                seq,
                node: Node::Leaf { count, value: value.clone() }
            })
            .collect();

        let mut next_seq = queue.len();

        loop {

            let (first, second) = match (queue.pop(), queue.pop()) {
                (Some(first), Some(second)) => (first, second),
                (Some(root), None) => return Self { root: root.node },
                // A frequency table is never empty
                (None, _) => unreachable!("empty frequency table"),
            };

            let count = first.count + second.count;

            queue.push(Queued {
                count,
                seq: next_seq,
                node: Node::Internal {
                    count,
                    left: Box::new(first.node),
                    right: Box::new(second.node)
                }
            });

            next_seq += 1;
        }
    }

}

impl<T> EncodingTree<T> {

    pub const fn root(&self) -> &Node<T> {
        &self.root
    }


    /// Total count of the tree, equal to the length of the input it was built for.
    pub const fn total(&self) -> usize {
        self.root.count()
    }

}
