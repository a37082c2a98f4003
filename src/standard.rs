//! Well-known IPv4 network tables from the IANA special-purpose registry.
//!
//! Entries are written in slash notation and parsed on use. [`crate::Address`]
//! classification queries consult these tables.

/// Private-use networks.
///
/// See also [RFC 1918](https://datatracker.ietf.org/doc/html/rfc1918)
pub const PRIVATE_NETWORKS: [&str; 3] = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];

/// The loopback network.
///
/// See also [RFC 1122 §3.2.1.3](https://datatracker.ietf.org/doc/html/rfc1122#section-3.2.1.3)
pub const LOOPBACK_NETWORKS: [&str; 1] = ["127.0.0.0/8"];

/// Networks reserved for use in documentation and example code.
///
/// See also [RFC 5737](https://datatracker.ietf.org/doc/html/rfc5737)
pub const DOCUMENTATION_NETWORKS: [&str; 3] = ["192.0.2.0/24", "198.51.100.0/24", "203.0.113.0/24"];

/// Special-purpose networks that are not publicly routable.
///
/// The table follows the IPv4 special-purpose address registry of RFC 6890 and
/// subsumes the private, loopback and documentation tables. An address outside
/// every entry is treated as publicly routable.
///
/// See also [RFC 6890](https://datatracker.ietf.org/doc/html/rfc6890)
pub const SPECIAL_NETWORKS: [&str; 16] = [
    "0.0.0.0/8",                // "this host on this network", RFC 1122
    PRIVATE_NETWORKS[0],        // private use, RFC 1918
    "100.64.0.0/10",            // shared address space, RFC 6598
    LOOPBACK_NETWORKS[0],       // loopback, RFC 1122
    "169.254.0.0/16",           // link local, RFC 3927
    PRIVATE_NETWORKS[1],        // private use, RFC 1918
    "192.0.0.0/24",             // IETF protocol assignments, RFC 6890
    "192.0.0.0/29",             // DS-Lite, RFC 6333
    DOCUMENTATION_NETWORKS[0],  // TEST-NET-1, RFC 5737
    "192.88.99.0/24",           // 6to4 relay anycast, RFC 3068
    PRIVATE_NETWORKS[2],        // private use, RFC 1918
    "198.18.0.0/15",            // benchmarking, RFC 2544
    DOCUMENTATION_NETWORKS[1],  // TEST-NET-2, RFC 5737
    DOCUMENTATION_NETWORKS[2],  // TEST-NET-3, RFC 5737
    "240.0.0.0/4",              // reserved, RFC 1112
    "255.255.255.255/32",       // limited broadcast, RFC 919
];
