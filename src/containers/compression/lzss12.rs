//! LZSS12 decoder (descriptor comp_type 1).
//!
//! The stream is driven by flag bytes whose 8 bits are consumed
//! least-significant-bit first. Bit 1 copies the next input byte to the
//! output; bit 0 reads a little-endian word whose low 12 bits are a 1-based
//! back distance and whose high 4 bits plus 2 are the copy length (2-17).

use crate::error::DecodeError;

pub fn decompress(src: &[u8], out_size: usize) -> Result<Vec<u8>, DecodeError> {
    let mut dst = vec![0u8; out_size];
    let mut si = 0;
    let mut di = 0;
    let mut flags = 0u8;
    let mut bits_left = 0u8;

    while di < out_size {
        if bits_left == 0 {
            if si >= src.len() {
                return Err(DecodeError::TruncatedLzss {
                    pos: si,
                    expected: "flag byte",
                });
            }
            flags = src[si];
            si += 1;
            bits_left = 8;
        }

        if flags & 1 != 0 {
            if si >= src.len() {
                return Err(DecodeError::TruncatedLzss {
                    pos: si,
                    expected: "literal byte",
                });
            }
            dst[di] = src[si];
            si += 1;
            di += 1;
        } else {
            if si + 2 > src.len() {
                return Err(DecodeError::TruncatedLzss {
                    pos: si,
                    expected: "back-reference word",
                });
            }
            let word = u16::from_le_bytes([src[si], src[si + 1]]) as usize;
            si += 2;
            let count = (word >> 12) + 2;
            let offset = word & 0x0FFF;
            if offset == 0 || offset > di {
                return Err(DecodeError::InvalidBackref {
                    offset,
                    written: di,
                });
            }
            // Byte-at-a-time on purpose: when count > offset the copy reads
            // bytes it wrote earlier in this same instruction. Stops at
            // out_size even mid-copy.
            for _ in 0..count {
                if di >= out_size {
                    break;
                }
                dst[di] = dst[di - offset];
                di += 1;
            }
        }

        flags >>= 1;
        bits_left -= 1;
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test-only encoder: emits each byte as a literal.
    fn encode_literals(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        for block in data.chunks(8) {
            out.push(0xFF); // eight literal flags
            out.extend_from_slice(block);
        }
        out
    }

    fn backref_word(offset: u16, count: u16) -> [u8; 2] {
        ((count - 2) << 12 | offset).to_le_bytes()
    }

    #[test]
    fn literal_only_stream() {
        let src = encode_literals(b"hello world!");
        assert_eq!(decompress(&src, 12).unwrap(), b"hello world!");
    }

    #[test]
    fn backref_expands_repeating_pair() {
        // Two literals "AB", then offset=2 count=6 -> "ABABABAB".
        let mut src = vec![0x03, b'A', b'B'];
        src.extend_from_slice(&backref_word(2, 6));
        assert_eq!(decompress(&src, 8).unwrap(), b"ABABABAB");
    }

    #[test]
    fn backref_overlap_run_of_one() {
        // Literal "x", then offset=1 count=7: a run longer than its
        // distance, exercising the overlapping copy.
        let mut src = vec![0x01, b'x'];
        src.extend_from_slice(&backref_word(1, 7));
        assert_eq!(decompress(&src, 8).unwrap(), b"xxxxxxxx");
    }

    #[test]
    fn copy_stops_at_out_size_mid_instruction() {
        let mut src = vec![0x01, b'x'];
        src.extend_from_slice(&backref_word(1, 17));
        assert_eq!(decompress(&src, 4).unwrap(), b"xxxx");
    }

    #[test]
    fn zero_offset_is_rejected() {
        let mut src = vec![0x01, b'x'];
        src.extend_from_slice(&backref_word(0, 3));
        assert_eq!(
            decompress(&src, 8),
            Err(DecodeError::InvalidBackref {
                offset: 0,
                written: 1
            })
        );
    }

    #[test]
    fn offset_before_output_start_is_rejected() {
        let mut src = vec![0x01, b'x'];
        src.extend_from_slice(&backref_word(2, 3));
        assert_eq!(
            decompress(&src, 8),
            Err(DecodeError::InvalidBackref {
                offset: 2,
                written: 1
            })
        );
    }

    #[test]
    fn truncated_flag_byte() {
        assert_eq!(
            decompress(&[], 1),
            Err(DecodeError::TruncatedLzss {
                pos: 0,
                expected: "flag byte"
            })
        );
    }

    #[test]
    fn truncated_literal() {
        assert_eq!(
            decompress(&[0x01], 1),
            Err(DecodeError::TruncatedLzss {
                pos: 1,
                expected: "literal byte"
            })
        );
    }

    #[test]
    fn truncated_backref_word() {
        // One literal, then a flag-0 step with only one byte left.
        let src = [0x01, b'x', 0x02];
        assert_eq!(
            decompress(&src, 8),
            Err(DecodeError::TruncatedLzss {
                pos: 2,
                expected: "back-reference word"
            })
        );
    }

    #[test]
    fn zero_out_size_reads_nothing() {
        assert_eq!(decompress(&[], 0).unwrap(), b"");
    }

    #[test]
    fn decoding_is_idempotent() {
        let mut src = vec![0x03, b'A', b'B'];
        src.extend_from_slice(&backref_word(2, 6));
        assert_eq!(decompress(&src, 8).unwrap(), decompress(&src, 8).unwrap());
    }
}
