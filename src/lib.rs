//! Validated IPv4 value types: addresses, subnet masks and subnets in
//! dotted-quad notation, with classification against the IANA
//! special-purpose registry.

mod addr;
pub use addr::{Address, SEGMENTS};

mod error;
pub use error::{QuadError, QuadResult};

mod mask;
pub use mask::{Mask, MAX_PREFIX_LENGTH};

pub mod standard;

mod subnet;
pub use subnet::Subnet;
