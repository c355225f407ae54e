use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::code_table::CodeTable;
use crate::decoder::decode;
use crate::encoder::encode_bits;
use crate::error::{ContainerError, Error, Result};
use crate::frequency::FrequencyTable;


pub const MAGIC: [u8; 4] = *b"HTC\0";
pub const VERSION: u8 = 1;


/// What a compression produced, for the caller to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {

    /// Number of input symbols
    pub symbols: usize,
    pub distinct_symbols: usize,
    /// Length of the packed codes, padding excluded
    pub payload_bits: usize,
    /// Size of the whole container
    pub output_bytes: usize

}

impl Summary {

    /// Output size relative to an input of `input_bytes` bytes.
    pub fn compression_ratio(&self, input_bytes: usize) -> f64 {
        self.output_bytes as f64 / input_bytes as f64
    }

}


/// Compresses `data` into a self-describing container.
///
/// Layout: [`MAGIC`], [`VERSION`], the bincode-encoded frequency table as
/// `(symbol, count)` pairs in first-occurrence order, then the padded payload.
pub fn compress<T, I>(data: I) -> Result<Box<[u8]>>
where
    T: Eq + Hash + Clone + Serialize,
    I: IntoIterator<Item = T>,
    I::IntoIter: Clone
{
    compress_with_summary(data)
        .map(|(compressed, _)| compressed)
}


pub fn compress_with_summary<T, I>(data: I) -> Result<(Box<[u8]>, Summary)>
where
    T: Eq + Hash + Clone + Serialize,
    I: IntoIterator<Item = T>,
    I::IntoIter: Clone
{

    let data = data.into_iter();

    let frequencies = FrequencyTable::count(data.clone())?;
    let table = CodeTable::from_frequencies(&frequencies);
    let payload = encode_bits(data, &table)?;

    let header: Vec<(&T, u64)> = frequencies.iter()
        .map(|(symbol, count)| (symbol, count as u64))
        .collect();

    let mut buf = Vec::with_capacity(MAGIC.len() + 1 + 1 + payload.least_len_bytes());

    buf.extend_from_slice(&MAGIC);
    buf.push(VERSION);

    bincode::serialize_into(&mut buf, &header)
        .map_err(ContainerError::Header)?;

    buf.extend_from_slice(&payload.serialize());

    let summary = Summary {
        symbols: frequencies.total(),
        distinct_symbols: frequencies.len(),
        payload_bits: payload.len_bits(),
        output_bytes: buf.len()
    };

    Ok((buf.into_boxed_slice(), summary))
}


/// Reads the frequency table of a container, returning it with the remaining payload.
pub fn read_header<T>(input: &[u8]) -> Result<(FrequencyTable<T>, &[u8])>
where
    T: Eq + Hash + Clone + DeserializeOwned
{

    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let rest = input.strip_prefix(MAGIC.as_slice())
        .ok_or(ContainerError::BadMagic)?;

    let (&version, mut rest) = rest.split_first()
        .ok_or(ContainerError::BadMagic)?;

    if version != VERSION {
        return Err(ContainerError::UnsupportedVersion(version).into());
    }

    let header: Vec<(T, u64)> = bincode::deserialize_from(&mut rest)
        .map_err(ContainerError::Header)?;

    Ok((FrequencyTable::from_entries(header)?, rest))
}


/// Inverse of [`compress`]. The code table is rebuilt from the stored frequencies.
pub fn decompress<T>(input: &[u8]) -> Result<Box<[T]>>
where
    T: Eq + Hash + Clone + DeserializeOwned
{

    let (frequencies, payload) = read_header::<T>(input)?;

    let table = CodeTable::from_frequencies(&frequencies);

    Ok(decode(payload, &table)?.into_boxed_slice())
}
