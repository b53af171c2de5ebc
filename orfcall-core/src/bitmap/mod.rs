//! Packed bit operations backing the coding-base masks.
//!
//! Bit `i` lives in byte `i / 8` at bit `i % 8` (least significant first).

#[inline]
const fn calculate_bit_position(bit_index: usize) -> (usize, u8) {
    (bit_index >> 3, 1 << (bit_index & 0x07))
}

/// Number of bytes needed to hold `bit_count` bits
#[inline]
pub const fn bytes_for_bits(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// Test if a bit is set at the given index
pub fn test_bit(bitmap: &[u8], bit_index: usize) -> bool {
    let (byte_index, bit_mask) = calculate_bit_position(bit_index);
    (bitmap[byte_index] & bit_mask) != 0
}

/// Mask with bits `lo..hi` of a single byte set (`hi <= 8`)
#[inline]
const fn byte_span_mask(lo: usize, hi: usize) -> u8 {
    ((0xFFu16 << lo) & (0xFFu16 >> (8 - hi))) as u8
}

/// Set every bit in `start..end` to 1.
///
/// Whole bytes inside the range are filled at once, so the cost is linear in
/// the range length divided by eight.
pub fn set_range(bitmap: &mut [u8], start: usize, end: usize) {
    if start >= end {
        return;
    }
    let first_byte = start >> 3;
    let last_byte = (end - 1) >> 3;

    if first_byte == last_byte {
        bitmap[first_byte] |= byte_span_mask(start & 0x07, ((end - 1) & 0x07) + 1);
        return;
    }

    bitmap[first_byte] |= byte_span_mask(start & 0x07, 8);
    bitmap[first_byte + 1..last_byte].fill(0xFF);
    bitmap[last_byte] |= byte_span_mask(0, ((end - 1) & 0x07) + 1);
}

/// Count bits set to 1 in `start..end`
pub fn count_range(bitmap: &[u8], start: usize, end: usize) -> usize {
    if start >= end {
        return 0;
    }
    let first_byte = start >> 3;
    let last_byte = (end - 1) >> 3;

    if first_byte == last_byte {
        let mask = byte_span_mask(start & 0x07, ((end - 1) & 0x07) + 1);
        return (bitmap[first_byte] & mask).count_ones() as usize;
    }

    let head = (bitmap[first_byte] & byte_span_mask(start & 0x07, 8)).count_ones();
    let body: u32 = bitmap[first_byte + 1..last_byte]
        .iter()
        .map(|byte| byte.count_ones())
        .sum();
    let tail = (bitmap[last_byte] & byte_span_mask(0, ((end - 1) & 0x07) + 1)).count_ones();

    (head + body + tail) as usize
}
