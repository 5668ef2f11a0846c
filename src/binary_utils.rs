//! Helpers for reading little-endian values out of a byte buffer.
//!
//! Callers validate the remaining length once up front (the descriptor
//! table size is known before any field is read), so these helpers take
//! plain offsets rather than threading a cursor through every call.

pub fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    let low = data[offset] as u16;
    let high = data[offset + 1] as u16;
    (high << 8) | low
}

pub fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    let b0 = data[offset] as u32;
    let b1 = data[offset + 1] as u32;
    let b2 = data[offset + 2] as u32;
    let b3 = data[offset + 3] as u32;
    b0 | (b1 << 8) | (b2 << 16) | (b3 << 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_u16_little_endian() {
        let data = [0x34, 0x12, 0xFF];
        assert_eq!(read_u16_le(&data, 0), 0x1234);
        assert_eq!(read_u16_le(&data, 1), 0xFF12);
    }

    #[test]
    fn reads_u32_little_endian() {
        let data = [0x00, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(read_u32_le(&data, 1), 0x12345678);
    }
}
