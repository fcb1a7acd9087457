//! Variable-length quantity codec for the element count prefix.
//!
//! Each byte carries seven bits of the value, least-significant group first.
//! The high bit is set on every byte except the last.
//!
//! ```rust
//! use packed_bools::vlq;
//!
//! assert_eq!(vlq::encode(0), vec![0x00]);
//! assert_eq!(vlq::encode(200), vec![0xC8, 0x01]);
//! assert_eq!(vlq::decode(&[0xC8, 0x01], 0), Ok((200, 2)));
//! ```

use crate::EncodingError;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u8 = 0x7F;
const GROUP_BITS: u32 = 7;

/// Number of bytes `encode(value)` produces.
pub const fn encoded_len(value: usize) -> usize {
    if value == 0 {
        return 1;
    }
    let bits = usize::BITS - value.leading_zeros();
    bits.div_ceil(GROUP_BITS) as usize
}

pub fn encode(value: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    encode_into(value, &mut out);
    out
}

/// Appends the encoding of `value` to `out`.
pub fn encode_into(mut value: usize, out: &mut Vec<u8>) {
    loop {
        let group = (value as u8) & GROUP_MASK;
        value >>= GROUP_BITS;
        if value == 0 {
            out.push(group);
            return;
        }
        out.push(group | CONTINUATION);
    }
}

/// Decodes a value starting at `start`, returning it with the number of
/// bytes consumed.
///
/// # Errors
///
/// - [`EncodingError::TruncatedPrefix`] if the buffer ends before a byte with
///   the continuation bit clear.
/// - [`EncodingError::PrefixOverflow`] if the value does not fit in `usize`.
pub fn decode(buf: &[u8], start: usize) -> Result<(usize, usize), EncodingError> {
    let mut value = 0usize;
    let mut shift = 0u32;

    for (consumed, &byte) in buf.get(start..).unwrap_or_default().iter().enumerate() {
        let group = (byte & GROUP_MASK) as usize;
        if shift < usize::BITS {
            if (group << shift) >> shift != group {
                return Err(EncodingError::PrefixOverflow);
            }
            value |= group << shift;
        } else if group != 0 {
            return Err(EncodingError::PrefixOverflow);
        }
        if byte & CONTINUATION == 0 {
            return Ok((value, consumed + 1));
        }
        shift = shift.saturating_add(GROUP_BITS);
    }

    Err(EncodingError::TruncatedPrefix)
}
