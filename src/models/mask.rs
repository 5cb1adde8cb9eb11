//! Subnet mask value type.

use super::ipv4::{bits_to_prefix_len, get_cidr_mask};
use crate::error::InputError;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// A subnet mask whose bits are `1^n 0^(32-n)` for some n in [0,32].
///
/// Only the checked constructors build one, so every value is a valid prefix mask.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct SubnetMask(u32);

impl SubnetMask {
    /// Mask for a CIDR prefix length.
    pub fn from_prefix_len(len: u8) -> Result<SubnetMask, InputError> {
        get_cidr_mask(len).map(SubnetMask)
    }

    /// Mask from raw bits, rejecting non-contiguous patterns.
    pub fn from_bits(bits: u32) -> Result<SubnetMask, InputError> {
        bits_to_prefix_len(bits)?;
        Ok(SubnetMask(bits))
    }

    pub fn from_octets(octets: [u8; 4]) -> Result<SubnetMask, InputError> {
        SubnetMask::from_bits(u32::from_be_bytes(octets))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Number of leading one-bits.
    pub fn prefix_len(self) -> u8 {
        self.0.leading_ones() as u8
    }
}

impl From<SubnetMask> for Ipv4Addr {
    fn from(mask: SubnetMask) -> Ipv4Addr {
        Ipv4Addr::from(mask.0)
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(*self))
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefix_len() {
        assert_eq!(SubnetMask::from_prefix_len(0).unwrap().to_string(), "0.0.0.0");
        assert_eq!(
            SubnetMask::from_prefix_len(20).unwrap().to_string(),
            "255.255.240.0"
        );
        assert_eq!(
            SubnetMask::from_prefix_len(32).unwrap().to_string(),
            "255.255.255.255"
        );
        assert_eq!(
            SubnetMask::from_prefix_len(33),
            Err(InputError::CidrOutOfRange)
        );
    }

    #[test]
    fn test_from_octets() {
        let mask = SubnetMask::from_octets([255, 255, 255, 192]).unwrap();
        assert_eq!(mask.prefix_len(), 26);
        assert_eq!(mask.bits(), 0xFFFFFFC0);

        assert_eq!(
            SubnetMask::from_octets([255, 0, 255, 0]),
            Err(InputError::NonContiguousMask)
        );
        assert_eq!(
            SubnetMask::from_octets([255, 255, 255, 1]),
            Err(InputError::NonContiguousMask)
        );
    }

    #[test]
    fn test_prefix_len_round_trip() {
        for len in 0..=32u8 {
            let mask = SubnetMask::from_prefix_len(len).unwrap();
            assert_eq!(mask.prefix_len(), len);
            assert_eq!(SubnetMask::from_bits(mask.bits()), Ok(mask));
        }
    }
}
