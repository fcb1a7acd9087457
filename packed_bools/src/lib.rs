//! # packed_bools
//!
//! A `no_std` compatible boolean vector that stores one bit per value and
//! serializes to a self-describing byte buffer.
//!
//! ```rust
//! use packed_bools::BitVector;
//!
//! let mut flags = BitVector::from_bools(&[true, false, true, true, false]);
//! assert_eq!(flags.len(), 5);
//! assert_eq!(flags.get(2), Ok(true));
//!
//! flags.set(1, true).unwrap();
//! assert_eq!(flags.to_bools(), vec![true, true, true, true, false]);
//! ```
//!
//! ## Wire format
//!
//! The encoded buffer is a VLQ element count followed by the packed bits,
//! most-significant bit first within each byte:
//!
//! ```rust
//! use packed_bools::BitVector;
//!
//! let bits = BitVector::from_bools(&[true, false, true, true, false]);
//! assert_eq!(bits.as_bytes(), &[0x05, 0b1011_0000]);
//!
//! // Restore later
//! let restored = BitVector::from_encoded(bits.as_bytes().to_vec()).unwrap();
//! assert_eq!(restored, bits);
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use packed_bools::BitVector;
//!
//! // Vec<bool>: 10_000 elements × 1 byte = 10_000 bytes
//! let plain = vec![false; 10_000];
//!
//! // BitVector: 2 prefix bytes + 1250 packed bytes
//! let packed = BitVector::from_bools(&plain);
//! assert_eq!(packed.as_bytes().len(), 1252);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::{BitVectorError, EncodingError};

mod bit_ops;

pub mod vlq;

pub mod bit_vector;
pub use bit_vector::{BitVector, Iter};

pub type Result<T, E = BitVectorError> = core::result::Result<T, E>;
