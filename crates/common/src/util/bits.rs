/// Width of the words [`extract_bits`] reads from
pub const WORD_BITS: u32 = u64::BITS;

/// Read `length` bits out of `num`, starting at `index_start`.
///
/// Bits are numbered from the most significant end: index 0 is the top bit.
///  A negative `index_start` counts from the low end instead, the field
///  ending `|index_start|` bits above bit 0 (so `-1` ends at bit 1, not
///  bit 0). Returns `None` when the field does not fit in 64 bits.
pub fn extract_bits(num: u64, index_start: i32, length: u32) -> Option<u64> {
    let shift = if index_start >= 0 {
        let end = index_start.unsigned_abs().checked_add(length)?;
        if end > WORD_BITS {
            return None;
        }
        WORD_BITS - end
    } else {
        let reach = index_start.unsigned_abs() + 1;
        if reach < length {
            return None;
        }
        reach - length
    };

    let mask = if length >= WORD_BITS {
        u64::MAX
    } else {
        (1u64 << length) - 1
    };

    Some(num.checked_shr(shift).unwrap_or(0) & mask)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_top_bits() {
        assert_eq!(extract_bits(0xF000_0000_0000_0000, 0, 4), Some(0xF));
        assert_eq!(extract_bits(0x8000_0000_0000_0000, 0, 1), Some(1));
        assert_eq!(extract_bits(u64::MAX, 0, 64), Some(u64::MAX));
    }

    #[test]
    fn test_low_bits_from_positive_index() {
        assert_eq!(extract_bits(0b1010, 60, 4), Some(0b1010));
        assert_eq!(extract_bits(0xABCD, 48, 8), Some(0xAB));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(extract_bits(1, 61, 4), None);
        assert_eq!(extract_bits(1, i32::MAX, u32::MAX), None);
        assert_eq!(extract_bits(1, -1, 3), None);
    }

    #[test]
    fn test_negative_index() {
        // -2 ends at bit 2: bits 2..=1 of 0b110
        assert_eq!(extract_bits(0b110, -2, 2), Some(0b11));
        // -1 ends at bit 1
        assert_eq!(extract_bits(0b10, -1, 1), Some(1));
        assert_eq!(extract_bits(0b01, -1, 1), Some(0));
        // field entirely above the word
        assert_eq!(extract_bits(u64::MAX, -100, 1), Some(0));
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(extract_bits(u64::MAX, 0, 0), Some(0));
        assert_eq!(extract_bits(u64::MAX, 64, 0), Some(0));
    }
}
