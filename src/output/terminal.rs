//! Terminal output.
//!
//! Builds the report and diagnostic strings. Color is applied only when the
//! caller asks for it, so the plain text stays byte-exact for pipes and tests.

use crate::error::InputError;
use crate::models::NetworkInfo;
use colored::Colorize;

/// Format the subnet report, starting with a blank line.
pub fn render_report(info: &NetworkInfo, color: bool) -> String {
    let heading = if color {
        "SUBNET INFORMATION".bold().to_string()
    } else {
        "SUBNET INFORMATION".to_string()
    };
    format!(
        "\n{heading}\n\
         Input Address: {address}\n\
         Subnet Mask: {mask}/{cidr}\n\
         Network Address: {network}\n\
         Broadcast Address: {broadcast}\n\
         Total Usable IPv4: {usable}\n",
        address = info.address,
        mask = info.mask,
        cidr = info.prefix_len,
        network = info.network,
        broadcast = info.broadcast,
        usable = info.usable_hosts,
    )
}

/// The message shown for a rejected input line.
pub fn format_diagnostic(err: &InputError, color: bool) -> String {
    if color {
        err.to_string().red().to_string()
    } else {
        err.to_string()
    }
}
