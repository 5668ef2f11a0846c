pub mod lzss12;
pub mod rle;

use crate::error::DecodeError;

/// Compression schemes used for GRAPHICS.GOT chunk payloads, as stored in
/// each descriptor's `comp_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    Raw,
    Lzss12,
    Rle,
}

impl CompressionType {
    /// Map a descriptor's numeric `comp_type` to a known scheme.
    /// Returns `None` for values the engine does not recognise.
    pub fn from_raw(value: u16) -> Option<Self> {
        match value {
            0 => Some(CompressionType::Raw),
            1 => Some(CompressionType::Lzss12),
            2 => Some(CompressionType::Rle),
            _ => None,
        }
    }
}

/// Decode `src` with the given scheme into a buffer of exactly `out_size`
/// bytes. Every codec pads or truncates so the length contract holds.
pub fn decompress(
    comp_type: CompressionType,
    src: &[u8],
    out_size: usize,
) -> Result<Vec<u8>, DecodeError> {
    match comp_type {
        CompressionType::Raw => Ok(decompress_raw(src, out_size)),
        CompressionType::Lzss12 => lzss12::decompress(src, out_size),
        CompressionType::Rle => rle::decompress(src, out_size),
    }
}

/// Type 0: identity copy of the first `out_size` bytes, zero-padded when
/// the payload is shorter than the declared output.
pub fn decompress_raw(src: &[u8], out_size: usize) -> Vec<u8> {
    let mut out = vec![0u8; out_size];
    let n = out_size.min(src.len());
    out[..n].copy_from_slice(&src[..n]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comp_type_mapping_is_closed() {
        assert_eq!(CompressionType::from_raw(0), Some(CompressionType::Raw));
        assert_eq!(CompressionType::from_raw(1), Some(CompressionType::Lzss12));
        assert_eq!(CompressionType::from_raw(2), Some(CompressionType::Rle));
        assert_eq!(CompressionType::from_raw(3), None);
        assert_eq!(CompressionType::from_raw(0xFFFF), None);
    }

    #[test]
    fn raw_copies_prefix() {
        let out = decompress_raw(b"abcdef", 4);
        assert_eq!(out, b"abcd");
    }

    #[test]
    fn raw_zero_pads_short_payload() {
        let out = decompress_raw(b"ab", 5);
        assert_eq!(out, b"ab\x00\x00\x00");
    }

    #[test]
    fn raw_empty_output() {
        assert!(decompress_raw(b"abc", 0).is_empty());
    }

    #[test]
    fn dispatch_honours_length_contract() {
        // One literal under LZSS12, declared output of 3.
        let out = decompress(CompressionType::Lzss12, &[0x01, b'X', 0x00, 0x00], 1).unwrap();
        assert_eq!(out, b"X");

        // RLE terminator right away, declared output of 3.
        let out = decompress(CompressionType::Rle, &[0x00], 3).unwrap();
        assert_eq!(out, b"\x00\x00\x00");
    }
}
