use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::{
    error::{QuadError, QuadResult},
    standard,
    subnet::Subnet,
};

/// Number of dotted-decimal segments in an IPv4 address.
pub const SEGMENTS: usize = 4;

/// A 32-bit IPv4 address.
///
/// The address is stored as a single network-order integer. Its canonical
/// text form is four dot-separated base-10 octets, most significant first,
/// as in `192.168.0.1`.
///
/// See also [RFC 791 § 3.2](https://www.rfc-editor.org/rfc/rfc791#section-3.2)
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Address(u32);

impl Address {
    /// The unspecified address.
    pub const UNSPECIFIED: Address = Address(0);

    /// The loopback address.
    pub const LOCALHOST: Address = Address(0x7f00_0001);

    /// The limited broadcast address.
    pub const BROADCAST: Address = Address(u32::MAX);

    /// Construct an IPv4 address from four octets, most significant first.
    pub const fn new(a0: u8, a1: u8, a2: u8, a3: u8) -> Address {
        Address(u32::from_be_bytes([a0, a1, a2, a3]))
    }

    /// Construct an IPv4 address from its integer value.
    pub const fn from_bits(bits: u32) -> Address {
        Address(bits)
    }

    /// Construct an IPv4 address from a wider integer, rejecting values
    /// outside `0..2^32`.
    pub fn from_int(value: i64) -> QuadResult<Address> {
        if value < 0 {
            Err(QuadError::IntNegative(value))
        } else if value > u32::MAX as i64 {
            Err(QuadError::IntTooLarge(value))
        } else {
            Ok(Address(value as u32))
        }
    }

    /// Return the integer value of the address.
    pub const fn to_bits(&self) -> u32 {
        self.0
    }

    /// Return the four octets of the address, most significant first.
    pub const fn octets(&self) -> [u8; SEGMENTS] {
        self.0.to_be_bytes()
    }

    /// Query whether the address belongs to one of the private-use networks.
    ///
    /// See also [RFC 1918](https://www.rfc-editor.org/rfc/rfc1918)
    pub fn is_private(&self) -> bool {
        self.in_any(&standard::PRIVATE_NETWORKS)
    }

    /// Query whether the address falls into the loopback range.
    ///
    /// See also [RFC 1122 § 3.2.1.3](https://www.rfc-editor.org/rfc/rfc1122#section-3.2.1.3)
    pub fn is_loopback(&self) -> bool {
        self.in_any(&standard::LOOPBACK_NETWORKS)
    }

    /// Query whether the address belongs to any of the special-use networks
    /// of RFC 6890, the private, documentation and loopback ranges included.
    /// An address that is not special is globally routable.
    ///
    /// See also [RFC 6890](https://www.rfc-editor.org/rfc/rfc6890)
    pub fn is_special(&self) -> bool {
        self.in_any(&standard::SPECIAL_NETWORKS)
    }

    // True if the address is contained in any of the given slash-notation
    // networks. Entries that fail to parse are skipped.
    fn in_any(&self, networks: &[&str]) -> bool {
        for net in networks {
            match Subnet::from_slash_format(net) {
                Ok(subnet) if subnet.contains(*self) => {
                    debug!("{} is within {}", self, subnet);
                    return true;
                }
                _ => {}
            }
        }
        false
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> u32 {
        addr.0
    }
}

impl From<std::net::Ipv4Addr> for Address {
    fn from(addr: std::net::Ipv4Addr) -> Address {
        Address(addr.into())
    }
}

impl From<Address> for std::net::Ipv4Addr {
    fn from(addr: Address) -> std::net::Ipv4Addr {
        addr.0.into()
    }
}

impl FromStr for Address {
    type Err = QuadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != SEGMENTS {
            return Err(QuadError::SegmentCount(parts.len()));
        }
        let mut octets = [0u8; SEGMENTS];
        for (octet, part) in octets.iter_mut().zip(parts) {
            let value: i64 = part
                .parse()
                .map_err(|_| QuadError::InvalidSegment(part.to_string()))?;
            if value < 0 {
                return Err(QuadError::NegativeSegment(value));
            }
            if value > u8::MAX as i64 {
                return Err(QuadError::SegmentOverflow(value));
            }
            *octet = value as u8;
        }
        Ok(Address(u32::from_be_bytes(octets)))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let octets = self.octets();
        write!(f, "{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
