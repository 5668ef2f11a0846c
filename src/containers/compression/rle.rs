//! Byte-run decoder (descriptor comp_type 2).
//!
//! Each control byte `b` selects what follows: 0 terminates the stream,
//! high bit set repeats the next byte `b & 0x7F` times, high bit clear
//! copies `b` literal bytes. If the stream stops short of `out_size` the
//! remainder is zero-filled; overshoot is truncated. The padding is a
//! contract of this engine, not confirmed behaviour of the original
//! decoder it was reverse-engineered from.

use crate::error::DecodeError;

pub fn decompress(src: &[u8], out_size: usize) -> Result<Vec<u8>, DecodeError> {
    let mut dst = Vec::with_capacity(out_size);
    let mut si = 0;

    while si < src.len() && dst.len() < out_size {
        let b = src[si];
        si += 1;
        if b == 0 {
            break;
        }
        if b & 0x80 != 0 {
            let count = (b & 0x7F) as usize;
            if si >= src.len() {
                return Err(DecodeError::TruncatedRunValue { pos: si });
            }
            let val = src[si];
            si += 1;
            dst.extend(std::iter::repeat(val).take(count));
        } else {
            let count = b as usize;
            if si + count > src.len() {
                return Err(DecodeError::TruncatedLiteralRun { pos: si, count });
            }
            dst.extend_from_slice(&src[si..si + count]);
            si += count;
        }
    }

    dst.resize(out_size, 0);
    Ok(dst)
}
