//! MSB-first bit addressing over a packed byte slice.
//!
//! Bit `i` lives in byte `i / 8`, at position `7 - i % 8` counted from the
//! least-significant bit.

const HIGH_BIT: u8 = 0x80;

/// Number of bytes needed to hold `bits` bits.
#[inline]
pub const fn packed_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

#[inline(always)]
pub const fn byte_index(bit: usize) -> usize {
    bit / 8
}

#[inline(always)]
pub const fn bit_mask(bit: usize) -> u8 {
    HIGH_BIT >> (bit % 8)
}

pub fn get_bit(slice: &[u8], bit: usize) -> bool {
    slice[byte_index(bit)] & bit_mask(bit) != 0
}

pub fn flip_bit(slice: &mut [u8], bit: usize) {
    slice[byte_index(bit)] ^= bit_mask(bit);
}

/// Writes `value` at `bit`, leaving the byte untouched when it already matches.
pub fn set_bit(slice: &mut [u8], bit: usize, value: bool) {
    if get_bit(slice, bit) != value {
        flip_bit(slice, bit);
    }
}
