use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    addr::Address,
    error::{QuadError, QuadResult},
    mask::Mask,
};

/// An IPv4 subnet, an address paired with a mask.
///
/// The declared address may be any host inside the subnet. The canonical
/// network prefix is derived on demand with [`Subnet::prefix`], so the two
/// components can never fall out of sync.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Subnet {
    addr: Address,
    mask: Mask,
}

impl Subnet {
    /// Construct a subnet from an address and a mask.
    pub const fn new(addr: Address, mask: Mask) -> Subnet {
        Subnet { addr, mask }
    }

    /// Parse `a.b.c.d/n` slash notation.
    ///
    /// The address part follows [`Address`] parsing. A missing `/n` part
    /// denotes a single-host `/32` subnet.
    pub fn from_slash_format(text: &str) -> QuadResult<Subnet> {
        match text.split_once('/') {
            Some((addr, prefix)) => {
                let addr: Address = addr.parse()?;
                let prefix_length: u8 = prefix
                    .parse()
                    .map_err(|_| QuadError::InvalidPrefix(prefix.to_string()))?;
                Ok(Subnet::new(addr, Mask::from_prefix_length(prefix_length)?))
            }
            None => Ok(Subnet::from(text.parse::<Address>()?)),
        }
    }

    /// Return the address the subnet was declared with.
    pub const fn address(&self) -> Address {
        self.addr
    }

    /// Return the mask of the subnet.
    pub const fn mask(&self) -> Mask {
        self.mask
    }

    /// Return the network prefix, the declared address with its host bits
    /// cleared by the mask.
    pub const fn prefix(&self) -> Address {
        Address::from_bits(self.addr.to_bits() & self.mask.to_bits())
    }

    /// Query whether `addr` falls inside the subnet.
    pub const fn contains(&self, addr: Address) -> bool {
        (addr.to_bits() & self.mask.to_bits()) == self.prefix().to_bits()
    }
}

impl From<Address> for Subnet {
    fn from(addr: Address) -> Subnet {
        Subnet::new(addr, Mask::HOST)
    }
}

impl FromStr for Subnet {
    type Err = QuadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subnet::from_slash_format(s)
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.prefix(), self.mask.prefix_length())
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        // Keep the declared address rather than the prefix so that
        // serialization loses no information.
        let text = format!("{}/{}", self.addr, self.mask.prefix_length());
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::from_slash_format(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let inputs = [
            ("127.0.0.0/20", "127.0.0.0", true),
            ("127.0.0.0/20", "127.0.0.1", true),
            ("127.0.0.0/20", "127.0.1.255", true),
            ("127.0.0.0/20", "127.0.15.255", true),
            ("127.0.0.0/20", "127.0.16.0", false),
            ("127.0.0.0/20", "127.0.255.255", false),
            ("127.0.0.0/20", "126.255.255.255", false),
            ("127.0.0.1", "127.0.0.1", true),
            ("127.0.0.1", "127.0.0.0", false),
            ("127.0.0.1", "127.0.0.2", false),
            ("255.255.255.0/24", "255.255.255.128", true),
            ("255.255.255.0/25", "255.255.255.127", true),
            ("255.255.255.0/25", "255.255.255.128", false),
            ("0.0.0.0/0", "0.0.0.0", true),
            ("0.0.0.0/0", "255.255.255.255", true),
            ("0.0.0.0/0", "192.0.2.7", true),
            ("8.8.8.8/8", "8.0.0.0", true),
            ("8.8.8.8/8", "8.255.0.1", true),
            ("8.8.8.8/8", "9.0.0.1", false),
            ("10.99.0.0/16", "10.99.255.4", true),
            ("10.99.0.0/16", "10.100.0.4", false),
            ("192.168.1.130/25", "192.168.1.129", true),
        ];
        for (subnet, addr, expected) in inputs {
            let subnet: Subnet = subnet.parse().unwrap();
            let addr: Address = addr.parse().unwrap();
            assert_eq!(subnet.contains(addr), expected, "{addr} in {subnet}");
        }
    }

    #[test]
    fn text_form_is_normalized() {
        let inputs = [
            ("127.0.0.1/30", "127.0.0.0/30"),
            ("127.0.0.4/30", "127.0.0.4/30"),
            ("127.0.0.1", "127.0.0.1/32"),
            ("8.8.8.8/8", "8.0.0.0/8"),
            ("0.0.0.0/0", "0.0.0.0/0"),
            ("192.168.1.130/25", "192.168.1.128/25"),
        ];
        for (input, expected) in inputs {
            let subnet: Subnet = input.parse().unwrap();
            assert_eq!(subnet.to_string(), expected);
        }
    }

    #[test]
    fn prefix_clears_host_bits() {
        let subnet: Subnet = "10.1.2.3/8".parse().unwrap();
        assert_eq!(subnet.prefix(), "10.0.0.0".parse().unwrap());
        assert_eq!(subnet.address(), "10.1.2.3".parse().unwrap());

        let subnet: Subnet = "192.168.1.130/25".parse().unwrap();
        assert_eq!(subnet.prefix(), "192.168.1.128".parse().unwrap());
        assert_eq!(subnet.mask().prefix_length(), 25);
    }

    #[test]
    fn single_address_subnet() {
        let addr: Address = "203.0.113.9".parse().unwrap();
        let subnet = Subnet::from(addr);
        assert_eq!(subnet.mask(), Mask::HOST);
        assert_eq!(subnet.prefix(), addr);
        assert!(subnet.contains(addr));
        assert!(!subnet.contains("203.0.113.8".parse().unwrap()));
    }

    #[test]
    fn rejects_invalid_text() {
        assert_eq!(
            "300.0.0.0/8".parse::<Subnet>(),
            Err(QuadError::SegmentOverflow(300))
        );
        assert_eq!(
            "1.2.3.4/33".parse::<Subnet>(),
            Err(QuadError::PrefixTooLong(33))
        );
        assert_eq!(
            "1.2.3.4/abc".parse::<Subnet>(),
            Err(QuadError::InvalidPrefix("abc".to_string()))
        );
        assert_eq!(
            "1.2.3.4/".parse::<Subnet>(),
            Err(QuadError::InvalidPrefix("".to_string()))
        );
        assert_eq!(
            "1.2.3.4/256".parse::<Subnet>(),
            Err(QuadError::InvalidPrefix("256".to_string()))
        );
        assert_eq!("1.2/3.4".parse::<Subnet>(), Err(QuadError::SegmentCount(2)));
    }

    #[test]
    fn serde_keeps_declared_address() {
        let subnet: Subnet = "8.8.8.8/8".parse().unwrap();
        let json = serde_json::to_string(&subnet).unwrap();
        assert_eq!(json, "\"8.8.8.8/8\"");
        assert_eq!(serde_json::from_str::<Subnet>(&json).unwrap(), subnet);

        let err = serde_json::from_str::<Subnet>("\"1.2.3.4/40\"").unwrap_err();
        assert!(err.to_string().contains("more than 32"));
    }
}
