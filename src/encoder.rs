use std::borrow::Borrow;
use std::hash::Hash;

use crate::bitvec::BitVec;
use crate::code_table::CodeTable;
use crate::error::{EncodingError, Error, Result};


/// Concatenates the codes of every symbol of `data`.
/// `table` must have been built for `data`, or at least for an input of the same length.
pub fn encode_bits<T, I>(data: I, table: &CodeTable<T>) -> Result<BitVec>
where
    T: Eq + Hash + Clone,
    I: IntoIterator,
    I::Item: Borrow<T>
{

    let mut encoded = BitVec::new();
    let mut symbols = 0;

    for (position, symbol) in data.into_iter().enumerate() {

        let code = table.code(symbol.borrow())
            .ok_or(EncodingError::UnknownSymbol { position })?;

        encoded.extend_from_code(code);
        symbols += 1;
    }

    if symbols == 0 {
        return Err(Error::EmptyInput);
    }

    // The decoder checks the symbol count against the table
    if symbols != table.total() {
        return Err(EncodingError::LengthMismatch { expected: table.total(), actual: symbols }.into());
    }

    Ok(encoded)
}


/// Encodes `data` into bytes: one byte holding the padding amount,
/// followed by the codes packed most-significant bit first.
pub fn encode<T, I>(data: I, table: &CodeTable<T>) -> Result<Box<[u8]>>
where
    T: Eq + Hash + Clone,
    I: IntoIterator,
    I::Item: Borrow<T>
{
    Ok(encode_bits(data, table)?.serialize())
}


#[cfg(test)]
mod tests {

    use super::*;


    #[test]
    fn check_single_symbol() {

        let table = CodeTable::build("aaaa".chars()).unwrap();

        let encoded = encode("aaaa".chars(), &table).unwrap();

        assert_eq!(&*encoded, &[4, 0b0000_0000]);
    }


    #[test]
    fn check_two_symbols() {

        let table = CodeTable::build("aab".chars()).unwrap();

        let bits = encode_bits("aab".chars(), &table).unwrap();
        assert_eq!(*bits.to_bool_slice(), [true, true, false]);

        let encoded = encode("aab".chars(), &table).unwrap();
        assert_eq!(&*encoded, &[5, 0b1100_0000]);
    }


    #[test]
    fn check_byte_alignment() {

        for text in ["a", "ab", "abcdefgh", "hello world", "aaaaaaaabbbbbbbb"] {

            let table = CodeTable::build(text.chars()).unwrap();
            let bits = encode_bits(text.chars(), &table).unwrap();
            let encoded = bits.serialize();

            assert!(encoded[0] <= 7);
            assert_eq!((bits.len_bits() + encoded[0] as usize) % 8, 0);
            assert_eq!(encoded.len(), 1 + (bits.len_bits() + 7) / 8);
        }
    }


    #[test]
    fn check_borrowed_symbols() {

        let data = [3_u8, 1, 4, 1, 5, 9, 2, 6];
        let table = CodeTable::build(data).unwrap();

        assert_eq!(
            encode(data.iter(), &table).unwrap(),
            encode(data, &table).unwrap()
        );
    }


    #[test]
    fn check_unknown_symbol() {

        let table = CodeTable::build("abc".chars()).unwrap();

        assert!(matches!(
            encode("abcd".chars(), &table),
            Err(Error::Encoding(EncodingError::UnknownSymbol { position: 3 }))
        ));
    }


    #[test]
    fn check_length_mismatch() {

        let table = CodeTable::build("aab".chars()).unwrap();

        assert!(matches!(
            encode("ab".chars(), &table),
            Err(Error::Encoding(EncodingError::LengthMismatch { expected: 3, actual: 2 }))
        ));
        assert!(matches!(
            encode("aabb".chars(), &table),
            Err(Error::Encoding(EncodingError::LengthMismatch { expected: 3, actual: 4 }))
        ));

        // Same length, different content: still decodable with the same table
        let encoded = encode("bba".chars(), &table).unwrap();
        let decoded: String = crate::decoder::decode(&encoded, &table)
            .unwrap()
            .into_iter()
            .collect();

        assert_eq!(decoded, "bba");
    }


    #[test]
    fn check_empty_input() {

        let table = CodeTable::build("abc".chars()).unwrap();

        assert!(matches!(encode("".chars(), &table), Err(Error::EmptyInput)));
    }

}
