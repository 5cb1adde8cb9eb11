//! Facts derived from an address and its subnet mask.

use super::ipv4::Ipv4;
use super::mask::SubnetMask;
use std::net::Ipv4Addr;

/// Network facts for one address/mask pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// The address as entered.
    pub address: Ipv4Addr,
    pub mask: SubnetMask,
    pub prefix_len: u8,
    /// All host bits cleared.
    pub network: Ipv4Addr,
    /// All host bits set.
    pub broadcast: Ipv4Addr,
    /// Addresses left once network and broadcast are reserved, 0 for /31 and /32.
    pub usable_hosts: u64,
}

impl NetworkInfo {
    /// The subnet in CIDR notation, e.g. `192.168.1.0/24`.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4::with_mask(self.address, self.mask).network()
    }
}

/// Derive network, broadcast, prefix length and usable host count.
pub fn compute_network_info(address: Ipv4Addr, mask: SubnetMask) -> NetworkInfo {
    let subnet = Ipv4::with_mask(address, mask);
    NetworkInfo {
        address,
        mask,
        prefix_len: subnet.mask(),
        network: subnet.lo(),
        broadcast: subnet.hi(),
        usable_hosts: subnet.usable_hosts(),
    }
}
