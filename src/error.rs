use thiserror::Error;

use crate::addr::Address;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuadError {
    #[error("IPv4 address must have 4 segments, got {0}")]
    SegmentCount(usize),
    #[error("IPv4 segment can't be less than 0: {0}")]
    NegativeSegment(i64),
    #[error("IPv4 segment can't be more than 255: {0}")]
    SegmentOverflow(i64),
    #[error("IPv4 segment is not a decimal number: {0:?}")]
    InvalidSegment(String),
    #[error("IPv4 value is out of range (negative): {0}")]
    IntNegative(i64),
    #[error("IPv4 value is out of range (too large): {0}")]
    IntTooLarge(i64),
    #[error("incorrect subnet mask: {0}")]
    InvalidMask(Address),
    #[error("prefix length can't be more than 32: {0}")]
    PrefixTooLong(u8),
    #[error("invalid prefix length: {0:?}")]
    InvalidPrefix(String),
}

pub type QuadResult<T> = std::result::Result<T, QuadError>;
