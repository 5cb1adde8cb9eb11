//! IPv4 prefix arithmetic.
//!
//! Provides [`Ipv4`] for an address paired with a prefix length, along with
//! the bitmask helpers the subnet calculation is built on.

use super::mask::SubnetMask;
use crate::error::InputError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, InputError> {
    if len > MAX_LENGTH {
        Err(InputError::CidrOutOfRange)
    } else {
        Ok(prefix_bits(len))
    }
}

// Caller guarantees len <= MAX_LENGTH.
fn prefix_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Prefix length of a mask given as raw bits.
///
/// Fails unless the bits are a run of ones followed by a run of zeros.
pub fn bits_to_prefix_len(mask: u32) -> Result<u8, InputError> {
    let ones = mask.leading_ones();
    if ones + mask.trailing_zeros() == u32::from(MAX_LENGTH) {
        Ok(ones as u8)
    } else {
        Err(InputError::NonContiguousMask)
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Ipv4 {
    /// Pair an address with an already validated mask.
    pub fn with_mask(addr: Ipv4Addr, mask: SubnetMask) -> Ipv4 {
        Ipv4 {
            addr,
            mask: mask.prefix_len(),
        }
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & prefix_bits(self.mask))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | !prefix_bits(self.mask))
    }

    /// The subnet this address belongs to, with host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Number of usable host addresses in the subnet.
    ///
    /// Network and broadcast are reserved, so this is `2^(32-len) - 2`. A /31
    /// or /32 has no room for both and reports 0.
    pub fn usable_hosts(&self) -> u64 {
        let total = 1u64 << (MAX_LENGTH - self.mask);
        total.saturating_sub(2)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);

        assert_eq!(get_cidr_mask(33), Err(InputError::CidrOutOfRange));
    }

    #[test]
    fn test_bits_to_prefix_len() {
        assert_eq!(bits_to_prefix_len(0x00000000), Ok(0));
        assert_eq!(bits_to_prefix_len(0xFFFFFF00), Ok(24));
        assert_eq!(bits_to_prefix_len(0xFFFFFFFC), Ok(30));
        assert_eq!(bits_to_prefix_len(0xFFFFFFFF), Ok(32));
        // 255.0.255.0
        assert_eq!(
            bits_to_prefix_len(0xFF00FF00),
            Err(InputError::NonContiguousMask)
        );
        // 0.0.0.255 is a host mask, not a netmask
        assert_eq!(
            bits_to_prefix_len(0x000000FF),
            Err(InputError::NonContiguousMask)
        );
    }

    fn subnet(addr: [u8; 4], len: u8) -> Ipv4 {
        Ipv4::with_mask(
            Ipv4Addr::from(addr),
            SubnetMask::from_prefix_len(len).unwrap(),
        )
    }

    #[test]
    fn test_usable_hosts() {
        let hosts = |len: u8| subnet([0, 0, 0, 0], len).usable_hosts();
        assert_eq!(hosts(0), 4294967294); // 2^32 - 2
        assert_eq!(hosts(8), 16777214);
        assert_eq!(hosts(16), 65534);
        assert_eq!(hosts(24), 254);
        assert_eq!(hosts(29), 6);
        assert_eq!(hosts(30), 2);
        // no room for hosts once network and broadcast are reserved
        assert_eq!(hosts(31), 0);
        assert_eq!(hosts(32), 0);
    }

    #[test]
    fn test_ipv4_display() {
        let ip = subnet([10, 2, 3, 4], 16);
        assert_eq!(ip.addr(), Ipv4Addr::new(10, 2, 3, 4));
        assert_eq!(ip.mask(), 16);
        assert_eq!(ip.to_string(), "10.2.3.4/16");
        assert_eq!(ip.network().to_string(), "10.2.0.0/16");
    }

    #[test]
    fn test_ipv4_lo_hi() {
        let ip = subnet([172, 16, 5, 5], 30);
        assert_eq!(ip.lo(), Ipv4Addr::new(172, 16, 5, 4));
        assert_eq!(ip.hi(), Ipv4Addr::new(172, 16, 5, 7));
        assert_eq!(ip.network(), subnet([172, 16, 5, 4], 30));
        assert_eq!(ip.usable_hosts(), 2);

        let all = subnet([10, 0, 0, 1], 0);
        assert_eq!(all.lo(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(all.hi(), Ipv4Addr::new(255, 255, 255, 255));

        let host = subnet([10, 0, 0, 1], 32);
        assert_eq!(host.lo(), host.hi());
        assert_eq!(host.usable_hosts(), 0);
    }

    #[test]
    fn test_ipv4_serialize() {
        let ip = subnet([192, 168, 1, 0], 24);
        assert_eq!(serde_json::to_string(&ip).unwrap(), r#""192.168.1.0/24""#);
    }
}
