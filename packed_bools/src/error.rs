#[cfg(feature = "std")]
use thiserror::Error;

/// Reasons an encoded buffer is rejected.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    #[cfg_attr(feature = "std", error("VLQ prefix ends without a terminating byte"))]
    TruncatedPrefix,

    #[cfg_attr(feature = "std", error("VLQ prefix does not fit in usize"))]
    PrefixOverflow,

    #[cfg_attr(
        feature = "std",
        error("packed region holds {found} bytes, {expected} required")
    )]
    TruncatedPayload { expected: usize, found: usize },
}

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitVectorError {
    #[cfg_attr(feature = "std", error("Index {0} is out of range for length {1}"))]
    IndexOutOfRange(usize, usize),

    #[cfg_attr(feature = "std", error("invalid encoding: {0}"))]
    InvalidEncoding(#[cfg_attr(feature = "std", from)] EncodingError),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EncodingError::TruncatedPrefix => {
                write!(f, "VLQ prefix ends without a terminating byte")
            }
            EncodingError::PrefixOverflow => write!(f, "VLQ prefix does not fit in usize"),
            EncodingError::TruncatedPayload { expected, found } => {
                write!(f, "packed region holds {} bytes, {} required", found, expected)
            }
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitVectorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitVectorError::IndexOutOfRange(i, l) => {
                write!(f, "Index {} is out of range for length {}", i, l)
            }
            BitVectorError::InvalidEncoding(e) => write!(f, "invalid encoding: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<EncodingError> for BitVectorError {
    fn from(err: EncodingError) -> Self {
        BitVectorError::InvalidEncoding(err)
    }
}
