//! Huffman coding of arbitrary symbol sequences.
//!
//! The pipeline is `FrequencyTable` -> `EncodingTree` -> `CodeTable`, after
//! which [`encode`] packs the codes of the input into bytes prefixed by a
//! padding header and [`decode`] reverses it given the same table.
//!
//! [`compress`] and [`decompress`] wrap the codec in a self-describing
//! container that also stores the frequency table.
//!
//! ```
//! use huffman_tree_compression::{compress, decompress};
//!
//! let compressed = compress("abracadabra".chars())?;
//! let text: String = decompress::<char>(&compressed)?.iter().collect();
//!
//! assert_eq!(text, "abracadabra");
//! # Ok::<(), huffman_tree_compression::Error>(())
//! ```

mod bitvec;
mod code_table;
mod container;
mod decoder;
mod encoder;
mod error;
mod frequency;
mod tree;

pub use bitvec::BitVec;
pub use code_table::{Code, CodeTable};
pub use container::{compress, compress_with_summary, decompress, read_header, Summary, MAGIC, VERSION};
pub use decoder::{decode, decode_bits};
pub use encoder::{encode, encode_bits};
pub use error::{ContainerError, DecodingError, EncodingError, Error, Result};
pub use frequency::FrequencyTable;
pub use tree::{EncodingTree, Node};
