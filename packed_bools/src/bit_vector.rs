//! Fixed-length boolean vector backed by its own encoded buffer.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use packed_bools::BitVector;
//!
//! let mut bits = BitVector::zeroed(10);
//! bits.set(0, true).unwrap();
//! bits.set(9, true).unwrap();
//!
//! assert_eq!(bits.get(0), Ok(true));
//! assert_eq!(bits.get(1), Ok(false));
//! assert!(bits[9]);
//! assert_eq!(bits.len(), 10);
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! use packed_bools::BitVector;
//!
//! let bits: BitVector = [true, false, true].into_iter().collect();
//!
//! // Save to bytes
//! let bytes = bits.as_bytes().to_vec();
//!
//! // Restore later
//! let restored = BitVector::try_from(bytes.as_slice()).unwrap();
//! assert_eq!(restored.to_bools(), vec![true, false, true]);
//! ```

use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::bit_ops::{self, packed_len};
use crate::{BitVectorError, EncodingError, Result, vlq};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A sequence of booleans stored one bit each.
///
/// The vector owns a single buffer laid out as `VLQ(len) || packed bits`.
/// Its length never changes after construction; only [`set`](Self::set) and
/// [`toggle`](Self::toggle) mutate it, in place.
///
/// Two vectors are equal when their encoded buffers are byte-for-byte
/// identical.
#[derive(Debug, Clone, Eq)]
pub struct BitVector {
    buffer: Vec<u8>,
    len: usize,
    offset: usize,
}

impl BitVector {
    /// Packs `bits` into a freshly allocated buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bools::BitVector;
    ///
    /// let bits = BitVector::from_bools(&[true, false, true, true, false]);
    /// assert_eq!(bits.as_bytes(), &[0x05, 0xB0]);
    /// ```
    pub fn from_bools(bits: &[bool]) -> Self {
        let mut vector = Self::zeroed(bits.len());
        let packed = vector.packed_mut();
        for (i, _) in bits.iter().enumerate().filter(|(_, bit)| **bit) {
            bit_ops::flip_bit(packed, i);
        }
        vector
    }

    /// Creates a vector of `len` bits, all `false`.
    pub fn zeroed(len: usize) -> Self {
        let offset = vlq::encoded_len(len);
        let mut buffer = Vec::with_capacity(offset + packed_len(len));
        vlq::encode_into(len, &mut buffer);
        buffer.resize(offset + packed_len(len), 0);
        Self {
            buffer,
            len,
            offset,
        }
    }

    /// Takes ownership of an encoded buffer.
    ///
    /// The buffer is kept unmodified, including any bytes past the packed
    /// region.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidEncoding`] if the count prefix is
    /// truncated or oversized, or if the packed region is too short to hold
    /// every bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bools::{BitVector, BitVectorError, EncodingError};
    ///
    /// let bits = BitVector::from_encoded(vec![0x03, 0b1010_0000]).unwrap();
    /// assert_eq!(bits.to_bools(), vec![true, false, true]);
    ///
    /// assert_eq!(
    ///     BitVector::from_encoded(vec![0x80]),
    ///     Err(BitVectorError::InvalidEncoding(EncodingError::TruncatedPrefix))
    /// );
    /// ```
    pub fn from_encoded(buffer: Vec<u8>) -> Result<Self> {
        let (len, offset) = vlq::decode(&buffer, 0).inspect_err(|err| {
            tracing::debug!(buffer_len = buffer.len(), %err, "rejected count prefix");
        })?;

        let expected = packed_len(len);
        let found = buffer.len() - offset;
        if found < expected {
            tracing::debug!(len, expected, found, "rejected short packed region");
            return Err(EncodingError::TruncatedPayload { expected, found }.into());
        }

        tracing::trace!(
            len,
            prefix_len = offset,
            trailing = found - expected,
            "decoded bit vector"
        );
        Ok(Self {
            buffer,
            len,
            offset,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size in bytes of the VLQ count prefix.
    pub fn prefix_len(&self) -> usize {
        self.offset
    }

    /// The full encoded buffer: count prefix followed by the packed bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// The packed region, without the count prefix.
    pub fn packed(&self) -> &[u8] {
        &self.buffer[self.offset..]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    fn packed_mut(&mut self) -> &mut [u8] {
        &mut self.buffer[self.offset..]
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(BitVectorError::IndexOutOfRange(index, self.len))
        }
    }

    /// Returns the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(bit_ops::get_bit(self.packed(), index))
    }

    /// Stores `value` at `index`. The buffer is left untouched when the bit
    /// already holds `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bools::BitVector;
    ///
    /// let mut bits = BitVector::zeroed(9);
    /// bits.set(8, true).unwrap();
    /// assert_eq!(bits.as_bytes(), &[0x09, 0x00, 0x80]);
    /// assert!(bits.set(9, true).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        bit_ops::set_bit(self.packed_mut(), index, value);
        Ok(())
    }

    /// Inverts the bit at `index` and returns its new value.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] if `index >= len()`.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let packed = self.packed_mut();
        bit_ops::flip_bit(packed, index);
        Ok(bit_ops::get_bit(packed, index))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            packed: self.packed(),
            front: 0,
            back: self.len,
        }
    }

    pub fn to_bools(&self) -> Vec<bool> {
        self.iter().collect()
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::zeroed(0)
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

impl core::ops::Index<usize> for BitVector {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        if self.get(index).expect("index out of range") {
            &true
        } else {
            &false
        }
    }
}

impl AsRef<[u8]> for BitVector {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[bool]> for BitVector {
    fn from(bits: &[bool]) -> Self {
        Self::from_bools(bits)
    }
}

impl From<Vec<bool>> for BitVector {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bools(&bits)
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let bits: Vec<bool> = iter.into_iter().collect();
        Self::from_bools(&bits)
    }
}

impl From<&BitVector> for Vec<bool> {
    fn from(vector: &BitVector) -> Self {
        vector.to_bools()
    }
}

impl From<BitVector> for Vec<u8> {
    fn from(vector: BitVector) -> Self {
        vector.into_bytes()
    }
}

impl TryFrom<Vec<u8>> for BitVector {
    type Error = BitVectorError;

    fn try_from(buffer: Vec<u8>) -> Result<Self> {
        Self::from_encoded(buffer)
    }
}

impl TryFrom<&[u8]> for BitVector {
    type Error = BitVectorError;

    fn try_from(buffer: &[u8]) -> Result<Self> {
        Self::from_encoded(buffer.to_vec())
    }
}

/// Iterator over the bits of a [`BitVector`], front to back.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    packed: &'a [u8],
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let bit = bit_ops::get_bit(self.packed, self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(bit_ops::get_bit(self.packed, self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn packs_msb_first() {
        let bits = BitVector::from_bools(&[true, false, true, true, false]);
        assert_eq!(bits.len(), 5);
        assert_eq!(bits.prefix_len(), 1);
        assert_eq!(bits.as_bytes(), &[0x05, 0xB0]);
        assert_eq!(bits.packed(), &[0xB0]);
    }

    #[test]
    fn empty_vector() {
        let bits = BitVector::from_bools(&[]);
        assert!(bits.is_empty());
        assert_eq!(bits.as_bytes(), &[0x00]);
        assert!(bits.packed().is_empty());
        assert_eq!(bits, BitVector::default());
        assert_eq!(bits.iter().next(), None);
    }

    #[test]
    fn boundary_sizes() {
        assert_eq!(BitVector::zeroed(8).packed().len(), 1);
        assert_eq!(BitVector::zeroed(9).packed().len(), 2);

        let bits = BitVector::zeroed(127);
        assert_eq!(bits.prefix_len(), 1);

        let bits = BitVector::zeroed(128);
        assert_eq!(bits.prefix_len(), 2);
        assert_ne!(bits.as_bytes()[0] & 0x80, 0);

        let bits = BitVector::zeroed(200);
        assert_eq!(&bits.as_bytes()[..2], &[0xC8, 0x01]);
        assert_eq!(bits.packed().len(), 25);
    }

    #[test]
    fn get_and_set() -> Result<()> {
        let mut bits = BitVector::zeroed(10);
        bits.set(0, true)?;
        bits.set(5, true)?;
        bits.set(9, true)?;

        assert!(bits.get(0)?);
        assert!(!bits.get(1)?);
        assert!(bits.get(5)?);
        assert!(bits.get(9)?);

        bits.set(5, false)?;
        assert!(!bits.get(5)?);
        Ok(())
    }

    #[test]
    fn set_same_value_keeps_buffer() -> Result<()> {
        let mut bits = BitVector::from_bools(&[true, false, true]);
        let before = bits.as_bytes().to_vec();
        bits.set(0, true)?;
        bits.set(1, false)?;
        assert_eq!(bits.as_bytes(), before.as_slice());
        Ok(())
    }

    #[test]
    fn toggle_flips() -> Result<()> {
        let mut bits = BitVector::zeroed(3);
        assert!(bits.toggle(1)?);
        assert_eq!(bits.to_bools(), vec![false, true, false]);
        assert!(!bits.toggle(1)?);
        assert_eq!(bits, BitVector::zeroed(3));
        Ok(())
    }

    #[test]
    fn out_of_range() {
        let mut bits = BitVector::zeroed(5);
        assert_eq!(bits.get(5), Err(BitVectorError::IndexOutOfRange(5, 5)));
        assert_eq!(bits.get(10), Err(BitVectorError::IndexOutOfRange(10, 5)));
        assert_eq!(
            bits.get(usize::MAX),
            Err(BitVectorError::IndexOutOfRange(usize::MAX, 5))
        );
        assert_eq!(
            bits.set(5, true),
            Err(BitVectorError::IndexOutOfRange(5, 5))
        );
        assert_eq!(
            bits.set(usize::MAX, true),
            Err(BitVectorError::IndexOutOfRange(usize::MAX, 5))
        );
        assert!(bits.toggle(5).is_err());
        assert_eq!(
            bits.toggle(usize::MAX),
            Err(BitVectorError::IndexOutOfRange(usize::MAX, 5))
        );
        assert_eq!(bits, BitVector::zeroed(5));
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn index_operator_panics() {
        let bits = BitVector::zeroed(5);
        let _bit: bool = bits[5];
    }

    #[test]
    fn index_operator() {
        let bits = BitVector::from_bools(&[false, true]);
        assert!(!bits[0]);
        assert!(bits[1]);
    }

    #[test]
    fn from_encoded_roundtrip() -> Result<()> {
        let original = BitVector::from_bools(&[true, false, true]);
        let restored = BitVector::from_encoded(original.as_bytes().to_vec())?;
        assert_eq!(restored.len(), original.len());
        assert_eq!(restored, original);
        assert_eq!(restored.to_bools(), vec![true, false, true]);
        Ok(())
    }

    #[test]
    fn large_count_roundtrip() -> Result<()> {
        let original = BitVector::zeroed(16_384);
        assert_eq!(original.prefix_len(), 3);
        let restored = BitVector::try_from(original.as_bytes())?;
        assert_eq!(restored.len(), 16_384);
        Ok(())
    }

    #[test]
    fn from_encoded_rejects_truncation() {
        assert_eq!(
            BitVector::from_encoded(vec![]),
            Err(BitVectorError::InvalidEncoding(EncodingError::TruncatedPrefix))
        );
        assert_eq!(
            BitVector::try_from(vec![0xC8]),
            Err(BitVectorError::InvalidEncoding(EncodingError::TruncatedPrefix))
        );
        assert_eq!(
            BitVector::try_from(&[0x09, 0xFF][..]),
            Err(BitVectorError::InvalidEncoding(
                EncodingError::TruncatedPayload {
                    expected: 2,
                    found: 1
                }
            ))
        );
    }

    #[test]
    fn from_encoded_keeps_trailing_bytes() -> Result<()> {
        let bits = BitVector::from_encoded(vec![0x02, 0x40, 0xEE])?;
        assert_eq!(bits.to_bools(), vec![false, true]);
        assert_eq!(bits.as_bytes(), &[0x02, 0x40, 0xEE]);
        assert_ne!(bits, BitVector::from_bools(&[false, true]));
        Ok(())
    }

    #[test]
    fn equality_is_byte_exact() {
        let a = BitVector::from_bools(&[true, false, true]);
        let b = BitVector::from_bools(&[true, false, true]);
        let c = BitVector::from_bools(&[true, false, false]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(Some(&a), None);

        // Padding bits differ, logical bits match.
        let padded = BitVector::from_encoded(vec![0x03, 0b1010_0001]).unwrap();
        assert_eq!(padded.to_bools(), a.to_bools());
        assert_ne!(padded, a);
    }

    #[test]
    fn clone_is_independent() -> Result<()> {
        let original = BitVector::from_bools(&[true, false, true, true]);
        let mut clone = original.clone();
        assert_eq!(clone, original);

        clone.set(0, false)?;
        assert!(original.get(0)?);
        assert!(!clone.get(0)?);

        let mut original = original;
        let snapshot = original.clone();
        original.set(1, true)?;
        assert_eq!(snapshot.to_bools(), vec![true, false, true, true]);
        assert_ne!(snapshot, original);
        Ok(())
    }

    #[test]
    fn iterates_both_ways() {
        let bools = [true, false, true, true, false];
        let bits = BitVector::from_bools(&bools);

        let forward: Vec<bool> = bits.iter().collect();
        assert_eq!(forward, bools);

        let backward: Vec<bool> = bits.iter().rev().collect();
        assert_eq!(backward, [false, true, true, false, true]);

        let mut iter = bits.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(true));
        assert_eq!(iter.next_back(), Some(false));
        assert_eq!(iter.len(), 3);

        let mut count = 0;
        for (i, bit) in (&bits).into_iter().enumerate() {
            assert_eq!(bit, bools[i]);
            count += 1;
        }
        assert_eq!(count, bools.len());
    }

    #[test]
    fn conversions() {
        let bools = vec![true, false, true];
        let bits: BitVector = bools.clone().into();
        assert_eq!(bits.len(), 3);
        assert!(bits[0]);

        let restored: Vec<bool> = (&bits).into();
        assert_eq!(restored, bools);

        let collected: BitVector = bools.iter().copied().collect();
        assert_eq!(collected, bits);

        let bytes: Vec<u8> = bits.into();
        assert_eq!(bytes, [0x03, 0xA0]);
    }
}
