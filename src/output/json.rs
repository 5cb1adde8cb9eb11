//! JSON output for scripted use.

use crate::models::{Ipv4, NetworkInfo, SubnetMask};
use serde::Serialize;
use std::net::Ipv4Addr;

#[derive(Serialize)]
struct JsonReport {
    input_address: Ipv4Addr,
    subnet_mask: SubnetMask,
    cidr: u8,
    subnet: Ipv4,
    network_address: Ipv4Addr,
    broadcast_address: Ipv4Addr,
    total_usable: u64,
}

impl From<&NetworkInfo> for JsonReport {
    fn from(info: &NetworkInfo) -> Self {
        JsonReport {
            input_address: info.address,
            subnet_mask: info.mask,
            cidr: info.prefix_len,
            subnet: info.cidr(),
            network_address: info.network,
            broadcast_address: info.broadcast,
            total_usable: info.usable_hosts,
        }
    }
}

/// Pretty-printed JSON object with the same facts as the text report.
pub fn render_json(info: &NetworkInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::from(info))
}
