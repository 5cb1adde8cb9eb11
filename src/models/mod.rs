//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] and the prefix helpers - 32-bit mask arithmetic
//! - [`SubnetMask`] - a mask that always holds a contiguous prefix
//! - [`NetworkInfo`] - facts derived from an address and mask

mod ipv4;
mod mask;
mod network_info;

// Re-export public types
pub use ipv4::{bits_to_prefix_len, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use mask::SubnetMask;
pub use network_info::{compute_network_info, NetworkInfo};
