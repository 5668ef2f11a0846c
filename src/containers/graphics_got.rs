//! GRAPHICS.GOT container: descriptor table parsing and chunk extraction.
//!
//! File layout (little-endian throughout):
//! ```text
//! offset 0x00: u16  chunk_count (n)
//! offset 0x02: n descriptors, 14 bytes each:
//!     +0x00 u16 comp_type      (0=raw, 1=lzss12, 2=rle)
//!     +0x02 u32 file_offset    (absolute byte offset in this file)
//!     +0x06 u16 out_size       (decompressed length)
//!     +0x08 u16 in_size        (compressed length)
//!     +0x0A u16 width          (pass-through metadata)
//!     +0x0C u16 height         (pass-through metadata)
//! payload bytes at each descriptor's file_offset, length in_size
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::binary_utils::{read_u16_le, read_u32_le};
use crate::containers::compression::{self, CompressionType};
use crate::error::{BoundsError, FormatError, GotError};

pub const DESCRIPTOR_SIZE: usize = 14;

/// One 14-byte descriptor table entry. `width` and `height` are carried
/// through untouched; only the renderer downstream gives them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkDescriptor {
    pub comp_type: u16,
    pub file_offset: u32,
    pub out_size: u16,
    pub in_size: u16,
    pub width: u16,
    pub height: u16,
}

/// Parse the chunk count and descriptor table from the head of the
/// container. Returns the descriptors in file order plus the byte offset
/// where the table ends.
pub fn parse_descriptor_table(blob: &[u8]) -> Result<(Vec<ChunkDescriptor>, usize), FormatError> {
    if blob.len() < 2 {
        return Err(FormatError::TooShort {
            needed: 2,
            actual: blob.len(),
        });
    }
    let count = read_u16_le(blob, 0) as usize;
    let table_end = 2 + count * DESCRIPTOR_SIZE;
    if blob.len() < table_end {
        return Err(FormatError::TruncatedTable {
            count,
            needed: table_end,
            actual: blob.len(),
        });
    }

    let mut descriptors = Vec::with_capacity(count);
    for i in 0..count {
        let base = 2 + i * DESCRIPTOR_SIZE;
        descriptors.push(ChunkDescriptor {
            comp_type: read_u16_le(blob, base),
            file_offset: read_u32_le(blob, base + 0x02),
            out_size: read_u16_le(blob, base + 0x06),
            in_size: read_u16_le(blob, base + 0x08),
            width: read_u16_le(blob, base + 0x0A),
            height: read_u16_le(blob, base + 0x0C),
        });
    }
    Ok((descriptors, table_end))
}

/// A loaded GRAPHICS.GOT file: the raw blob plus its parsed descriptor
/// table. The blob is never mutated; extraction slices payloads out of it
/// on demand.
pub struct GraphicsGot {
    blob: Vec<u8>,
    descriptors: Vec<ChunkDescriptor>,
    table_end: usize,
}

impl GraphicsGot {
    pub fn from_bytes(blob: Vec<u8>) -> Result<Self, FormatError> {
        let (descriptors, table_end) = parse_descriptor_table(&blob)?;
        Ok(GraphicsGot {
            blob,
            descriptors,
            table_end,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let blob = fs::read(path)?;
        Self::from_bytes(blob).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn chunk_count(&self) -> usize {
        self.descriptors.len()
    }

    pub fn descriptors(&self) -> &[ChunkDescriptor] {
        &self.descriptors
    }

    /// Byte offset just past the descriptor table, where payload data
    /// normally begins.
    pub fn table_end(&self) -> usize {
        self.table_end
    }

    /// Slice the compressed payload for chunk `index` out of the blob.
    /// Payload bounds are checked here, not at parse time, so a container
    /// with one bad descriptor still lists and extracts its other chunks.
    fn payload(&self, index: usize) -> Result<(&ChunkDescriptor, &[u8]), BoundsError> {
        let count = self.descriptors.len();
        let desc = self
            .descriptors
            .get(index)
            .ok_or(BoundsError::ChunkIndex { index, count })?;
        let start = desc.file_offset as usize;
        let end = start + desc.in_size as usize;
        if end > self.blob.len() {
            return Err(BoundsError::PayloadRange {
                chunk: index,
                offset: desc.file_offset,
                in_size: desc.in_size,
                file_len: self.blob.len(),
            });
        }
        Ok((desc, &self.blob[start..end]))
    }

    /// Decompress chunk `index` into a buffer of exactly `out_size` bytes.
    pub fn extract(&self, index: usize) -> Result<Vec<u8>, GotError> {
        let (desc, payload) = self.payload(index)?;
        let comp_type =
            CompressionType::from_raw(desc.comp_type).ok_or(FormatError::UnknownCompType {
                chunk: index,
                comp_type: desc.comp_type,
            })?;
        Ok(compression::decompress(
            comp_type,
            payload,
            desc.out_size as usize,
        )?)
    }

    /// Diagnostic path: the compressed payload bytes without decoding.
    /// Output length is `in_size`, not `out_size`.
    pub fn extract_raw(&self, index: usize) -> Result<&[u8], GotError> {
        let (_, payload) = self.payload(index)?;
        Ok(payload)
    }
}
