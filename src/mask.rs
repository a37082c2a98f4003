use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    addr::Address,
    error::{QuadError, QuadResult},
};

/// Maximum prefix length of an IPv4 network.
pub const MAX_PREFIX_LENGTH: u8 = 32;

/// An IPv4 subnet mask.
///
/// A mask shares the integer and text representation of [`Address`], with one
/// extra invariant: read from the most significant bit, its binary form is a
/// contiguous run of 1-bits followed by a contiguous run of 0-bits. The length
/// of the leading run is the prefix length of `/n` notation.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Mask(u32);

impl Mask {
    /// The all-ones mask of a single-host `/32` subnet.
    pub const HOST: Mask = Mask(u32::MAX);

    /// Construct a mask with the top `prefix_length` bits set.
    ///
    /// Fails with [`QuadError::PrefixTooLong`] for lengths over 32.
    pub fn from_prefix_length(prefix_length: u8) -> QuadResult<Mask> {
        match prefix_length {
            0 => Ok(Mask(0)),
            n if n <= MAX_PREFIX_LENGTH => Ok(Mask(u32::MAX << (MAX_PREFIX_LENGTH - n))),
            n => Err(QuadError::PrefixTooLong(n)),
        }
    }

    /// Construct a mask from a wider integer, rejecting values outside
    /// `0..2^32` as well as bit patterns that are not a valid mask.
    pub fn from_int(value: i64) -> QuadResult<Mask> {
        Address::from_int(value)?.try_into()
    }

    /// Return the integer value of the mask.
    pub const fn to_bits(&self) -> u32 {
        self.0
    }

    /// Return the prefix length, the number of leading 1-bits.
    pub const fn prefix_length(&self) -> u8 {
        self.0.leading_ones() as u8
    }
}

impl TryFrom<Address> for Mask {
    type Error = QuadError;

    fn try_from(addr: Address) -> Result<Self, Self::Error> {
        let bits = addr.to_bits();
        // No 1-bit may follow the first 0-bit, so every set bit is a leading one.
        if bits.count_ones() == bits.leading_ones() {
            Ok(Mask(bits))
        } else {
            Err(QuadError::InvalidMask(addr))
        }
    }
}

impl FromStr for Mask {
    type Err = QuadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Address>()?.try_into()
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Address::from_bits(self.0))
    }
}

impl Serialize for Mask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Mask {
    fn deserialize<D>(deserializer: D) -> Result<Mask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
