use thiserror::Error;


/// Errors raised by the compression pipeline.
#[derive(Debug, Error)]
pub enum Error {

    /// There are no symbols to compress, or no bytes to decompress.
    #[error("empty input")]
    EmptyInput,

    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("decoding failed: {0}")]
    Decoding(#[from] DecodingError),

    /// A persisted frequency table cannot describe any valid tree.
    #[error("invalid frequency table: {0}")]
    InvalidTable(String),

    #[error("malformed container: {0}")]
    Container(#[from] ContainerError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

}


#[derive(Debug, Error)]
pub enum EncodingError {

    /// The symbol at `position` in the input has no code in the table.
    #[error("symbol at position {position} has no code in the table")]
    UnknownSymbol { position: usize },

    /// The table was built for an input of a different length.
    #[error("code table was built for {expected} symbols, input has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

}


#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodingError {

    /// The padding header is outside 0..=7.
    #[error("padding field {0} is out of range 0..=7")]
    InvalidPadding(u8),

    #[error("padding of {padding} bits exceeds the {payload_bits}-bit payload")]
    PaddingExceedsPayload { padding: u8, payload_bits: usize },

    /// The bits read since the last symbol are longer than any code.
    #[error("no code matches the bits ending at bit {position}")]
    UnknownCode { position: usize },

    /// The bit stream ended in the middle of a code.
    #[error("bit stream ended with {trailing_bits} bits that match no code")]
    IncompleteCode { trailing_bits: usize },

    /// The stream holds a different number of symbols than the table was built for,
    /// either because it was cut short or because the table belongs to other data.
    #[error("expected {expected} symbols, decoded {decoded}")]
    SymbolCountMismatch { expected: usize, decoded: usize },

}


#[derive(Debug, Error)]
pub enum ContainerError {

    #[error("missing or wrong magic bytes")]
    BadMagic,

    #[error("unsupported container version {0}")]
    UnsupportedVersion(u8),

    #[error("frequency header: {0}")]
    Header(#[from] bincode::Error),

}


pub type Result<T> = std::result::Result<T, Error>;
