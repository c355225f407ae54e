use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::tree::{EncodingTree, Node};


/// The path of a leaf in the tree, `0` for left and `1` for right.
///
/// Bits are right-aligned in `bits`, the first step being the most significant
/// meaningful bit. A tree whose total count fits in 64 bits is less than 93
/// levels deep, so 128 bits are always enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {

    bits: u128,
    /// How many bits have meaning
    len: u8

}

impl Code {

    pub const MAX_LEN: u8 = 128;


    pub const fn empty() -> Self {
        Self {
            bits: 0,
            len: 0
        }
    }


    /// The code one step further down the tree.
    pub const fn child(&self, bit: bool) -> Self {
        debug_assert!(self.len < Self::MAX_LEN);
        Self {
            bits: (self.bits << 1) | bit as u128,
            len: self.len + 1
        }
    }


    pub const fn len(&self) -> u8 {
        self.len
    }


    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }


    pub fn iter_bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len)
            .rev()
            .map(|i| (self.bits >> i) & 1 != 0)
    }


    /// Whether `self` is a proper or improper prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len
            && other.bits.checked_shr(u32::from(other.len - self.len)).unwrap_or(0) == self.bits
    }

}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter_bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}


/// Symbol to code mapping and its inverse, derived from the leaf paths of a tree.
#[derive(Debug, Clone)]
pub struct CodeTable<T> {

    codes: HashMap<T, Code>,
    symbols: HashMap<Code, T>,
    /// Count of the root of the tree the table was derived from
    total: usize,
    max_len: u8

}

impl<T> CodeTable<T>
where
    T: Eq + Hash + Clone
{

    pub fn from_tree(tree: &EncodingTree<T>) -> Self {

        let mut codes = HashMap::new();
        let mut symbols = HashMap::new();
        let mut max_len: u8 = 0;

        let mut stack = vec![(tree.root(), Code::empty())];

        while let Some((node, code)) = stack.pop() {

            match node {

                Node::Internal { left, right, .. } => {
                    // Right first, so the left subtree is visited first
                    stack.push((right.as_ref(), code.child(true)));
                    stack.push((left.as_ref(), code.child(false)));
                },

                Node::Leaf { value, .. } => {

                    // A lone root leaf has no path
                    let code = if code.is_empty() { code.child(false) } else { code };

                    max_len = max_len.max(code.len());
                    codes.insert(value.clone(), code);
                    symbols.insert(code, value.clone());
                },
            }
        }

        Self {
            codes,
            symbols,
            total: tree.total(),
            max_len
        }
    }


    pub fn from_frequencies(frequencies: &FrequencyTable<T>) -> Self {
        Self::from_tree(&EncodingTree::from_frequencies(frequencies))
    }


    /// Counts, builds the tree and derives the table for `data` in one go.
    pub fn build(data: impl IntoIterator<Item = T>) -> Result<Self> {
        Ok(Self::from_frequencies(&FrequencyTable::count(data)?))
    }


    pub fn code(&self, symbol: &T) -> Option<&Code> {
        self.codes.get(symbol)
    }

}

impl<T> CodeTable<T> {

    pub fn symbol(&self, code: &Code) -> Option<&T> {
        self.symbols.get(code)
    }


    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }


    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }


    /// Number of symbols the table's tree was built for.
    pub const fn total(&self) -> usize {
        self.total
    }


    pub const fn max_code_len(&self) -> u8 {
        self.max_len
    }


    pub fn iter(&self) -> impl Iterator<Item = (&T, &Code)> + '_ {
        self.codes.iter()
    }

}
