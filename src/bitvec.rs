use crate::code_table::Code;
use crate::error::{DecodingError, Error, Result};


/// Growable bit buffer. Bits are packed most-significant first.
#[derive(Debug, PartialEq, Default)]
pub struct BitVec {

    /// The actual raw bits
    raw_data: Vec<u8>,
    /// How many bits of padding the last byte contains.
    /// Padding bits have no meaning and are always zero
    last_byte_padding: u8

}

impl BitVec {

    pub fn new() -> Self {
        Self {
            raw_data: Vec::new(),
            last_byte_padding: 0
        }
    }


    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw_data: Vec::with_capacity(least_bytes_repr_for_bits(capacity)),
            last_byte_padding: 0
        }
    }


    pub fn len_bits(&self) -> usize {
        self.raw_data.len() * 8 - self.last_byte_padding as usize
    }


    pub fn least_len_bytes(&self) -> usize {
        self.raw_data.len()
    }


    pub fn is_empty(&self) -> bool {
        self.raw_data.is_empty()
    }


    /// Number of zero bits that fill the last byte.
    pub const fn padding(&self) -> u8 {
        self.last_byte_padding
    }


    pub fn append_bit(&mut self, bit: bool) {

        match self.raw_data.last_mut() {

            Some(last_byte) if self.last_byte_padding != 0 => {
                *last_byte |= (bit as u8) << (self.last_byte_padding - 1);
                self.last_byte_padding -= 1;
            },

            // Empty or byte-aligned: start a new byte
            _ => {
                self.raw_data.push((bit as u8) << 7);
                self.last_byte_padding = 7;
            },
        }
    }


    pub fn extend_from_code(&mut self, code: &Code) {
        for bit in code.iter_bits() {
            self.append_bit(bit);
        }
    }


    pub fn iter_bits(&self) -> BitIterator<'_> {
        BitIterator {
            bits: self,
            i: 0,
        }
    }


    pub fn from_bool_slice(bools: &[bool]) -> Self {

        let mut res = Self::with_capacity(bools.len());

        for &b in bools {
            res.append_bit(b)
        }

        res
    }


    pub fn to_bool_slice(&self) -> Box<[bool]> {
        self.iter_bits()
            .collect()
    }


    /// Packs the bits behind a one-byte header holding the padding amount.
    pub fn serialize(&self) -> Box<[u8]> {

        let mut buf = Vec::with_capacity(1 + self.least_len_bytes());

        buf.push(self.last_byte_padding);

        buf.extend_from_slice(&self.raw_data);

        buf.into_boxed_slice()
    }


    /// Inverse of [`BitVec::serialize`].
    /// The trailing padding bits are discarded whatever their value.
    pub fn deserialize(input: &[u8]) -> Result<Self> {

        let (&last_byte_padding, raw_data) = input.split_first()
            .ok_or(Error::EmptyInput)?;

        if last_byte_padding > 7 {
            return Err(DecodingError::InvalidPadding(last_byte_padding).into());
        }

        if raw_data.is_empty() && last_byte_padding != 0 {
            return Err(DecodingError::PaddingExceedsPayload {
                padding: last_byte_padding,
                payload_bits: 0
            }.into());
        }

        let mut raw_data = raw_data.to_vec();

        if let Some(last_byte) = raw_data.last_mut() {
            *last_byte &= 0xff_u8 << last_byte_padding;
        }

        Ok(Self {
            raw_data,
            last_byte_padding
        })
    }

}


pub const fn least_bytes_repr_for_bits(bit_count: usize) -> usize {
    bit_count / 8 + (bit_count % 8 != 0) as usize
}


pub struct BitIterator<'a> {

    bits: &'a BitVec,
    i: usize

}

impl<'a> Iterator for BitIterator<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {

        if self.i >= self.bits.len_bits() {
            return None;
        }

        let byte = self.bits.raw_data[self.i / 8];

        let bit_in_byte_i = (self.i % 8) as u8;

        self.i += 1;

        Some(
            (byte & (1_u8 << (7 - bit_in_byte_i))) != 0
        )
    }


    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.len_bits().saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}
