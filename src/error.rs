//! Error types for GRAPHICS.GOT parsing and decompression.

use thiserror::Error;

/// Malformed container structure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The file is too small to hold the chunk count.
    #[error("container too small: {actual} bytes, need at least {needed}")]
    TooShort { needed: usize, actual: usize },

    /// The descriptor table runs past the end of the file.
    #[error("descriptor table truncated: {count} chunks need {needed} bytes, file has {actual}")]
    TruncatedTable {
        count: usize,
        needed: usize,
        actual: usize,
    },

    /// A descriptor names a compression type the engine does not know.
    #[error("chunk {chunk}: unrecognised compression type {comp_type}")]
    UnknownCompType { chunk: usize, comp_type: u16 },
}

/// A request that points outside the container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundsError {
    /// Chunk index past the last descriptor.
    #[error("chunk index {index} out of range (container has {count} chunks)")]
    ChunkIndex { index: usize, count: usize },

    /// A descriptor's payload region extends past the end of the file.
    #[error("chunk {chunk}: payload at 0x{offset:08X}+{in_size} exceeds file length {file_len}")]
    PayloadRange {
        chunk: usize,
        offset: u32,
        in_size: u16,
        file_len: usize,
    },
}

/// A compressed stream that cannot be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// LZSS12 input ended while the decoder still expected more bytes.
    #[error("lzss12: truncated stream at input byte {pos} (expected {expected})")]
    TruncatedLzss { pos: usize, expected: &'static str },

    /// LZSS12 back-reference with distance zero or pointing before the
    /// start of the output buffer.
    #[error("lzss12: invalid back-reference distance {offset} with only {written} bytes written")]
    InvalidBackref { offset: usize, written: usize },

    /// RLE run control byte with no value byte after it.
    #[error("rle: truncated run value at input byte {pos}")]
    TruncatedRunValue { pos: usize },

    /// RLE literal run longer than the remaining input.
    #[error("rle: literal run of {count} bytes at input byte {pos} exceeds remaining input")]
    TruncatedLiteralRun { pos: usize, count: usize },
}

/// Any error a chunk extraction can fail with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GotError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
