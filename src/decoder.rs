use std::hash::Hash;

use crate::bitvec::BitVec;
use crate::code_table::{Code, CodeTable};
use crate::error::{DecodingError, Result};


/// Reads symbols off `bits` by growing a candidate code one bit at a time
/// until it names a symbol of `table`.
pub fn decode_bits<T>(bits: &BitVec, table: &CodeTable<T>) -> Result<Vec<T>>
where
    T: Clone
{

    let mut decoded = Vec::with_capacity(table.total());
    let mut candidate = Code::empty();

    for (position, bit) in bits.iter_bits().enumerate() {

        candidate = candidate.child(bit);

        if let Some(symbol) = table.symbol(&candidate) {
            decoded.push(symbol.clone());
            candidate = Code::empty();
        } else if candidate.len() >= table.max_code_len() {
            return Err(DecodingError::UnknownCode { position }.into());
        }
    }

    if !candidate.is_empty() {
        return Err(DecodingError::IncompleteCode { trailing_bits: candidate.len() as usize }.into());
    }

    if decoded.len() != table.total() {
        return Err(DecodingError::SymbolCountMismatch {
            expected: table.total(),
            decoded: decoded.len()
        }.into());
    }

    Ok(decoded)
}


/// Inverse of [`crate::encode`].
pub fn decode<T>(bytes: &[u8], table: &CodeTable<T>) -> Result<Vec<T>>
where
    T: Eq + Hash + Clone
{
    decode_bits(&BitVec::deserialize(bytes)?, table)
}
