//! Address and mask validation.
//!
//! The `parse_*` functions report the precise [`InputError`] kind; the
//! `validate_*` functions are the boolean view of the same checks.

use crate::error::InputError;
use crate::models::{SubnetMask, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$").expect("Invalid Regex?");
    static ref CIDR_VALUE: Regex = Regex::new(r"^[+-]?[0-9]+$").expect("Invalid Regex?");
}

/// Split `a.b.c.d` into octets. `None` on wrong shape or an octet above 255.
fn parse_octets(text: &str, allow_leading_zeros: bool) -> Option<[u8; 4]> {
    let caps = DOTTED_QUAD.captures(text)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let digits = caps.get(i + 1)?.as_str();
        if !allow_leading_zeros && digits.len() > 1 && digits.starts_with('0') {
            return None;
        }
        *octet = digits.parse().ok()?;
    }
    Some(octets)
}

/// Parse an IPv4 address in strict dotted-decimal form.
///
/// Leading zeros (`010.0.0.1`) are rejected since they read as octal in many tools.
pub fn parse_address(text: &str) -> Result<Ipv4Addr, InputError> {
    parse_octets(text.trim(), false)
        .map(Ipv4Addr::from)
        .ok_or(InputError::InvalidAddress)
}

pub fn validate_address(text: &str) -> bool {
    parse_address(text).is_ok()
}

/// Build the mask for a prefix length, failing outside [0,32].
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::processing::cidr_to_mask;
/// assert_eq!(cidr_to_mask(20).unwrap().to_string(), "255.255.240.0");
/// assert!(cidr_to_mask(33).is_err());
/// ```
pub fn cidr_to_mask(prefix_len: i64) -> Result<SubnetMask, InputError> {
    let len = u8::try_from(prefix_len)
        .ok()
        .filter(|len| *len <= MAX_LENGTH)
        .ok_or(InputError::CidrOutOfRange)?;
    SubnetMask::from_prefix_len(len)
}

pub fn mask_to_prefix_len(mask: SubnetMask) -> u8 {
    mask.prefix_len()
}

fn parse_cidr(value: &str) -> Result<SubnetMask, InputError> {
    let value = value.trim();
    if !CIDR_VALUE.is_match(value) {
        return Err(InputError::InvalidCidr);
    }
    // all digits but too large for i64 is still just out of range
    let prefix_len = value.parse::<i64>().map_err(|_| InputError::CidrOutOfRange)?;
    cidr_to_mask(prefix_len)
}

/// Parse a mask in CIDR (`/24`) or dotted-decimal (`255.255.255.0`) form.
///
/// Any input containing a slash is treated as CIDR; surrounding slashes are
/// stripped. Dotted masks must be a contiguous prefix.
pub fn parse_mask(text: &str) -> Result<SubnetMask, InputError> {
    let text = text.trim();
    if text.contains('/') {
        parse_cidr(text.trim_matches('/'))
    } else {
        let octets = parse_octets(text, true).ok_or(InputError::InvalidMask)?;
        SubnetMask::from_octets(octets)
    }
}

pub fn validate_mask(text: &str) -> bool {
    parse_mask(text).is_ok()
}
