//! Error kinds for input validation and the prompt session.
//!
//! [`InputError`] is returned by every validation function; its `Display`
//! text is exactly the diagnostic shown to the user, so callers print it as is.

use std::fmt;
use thiserror::Error;

/// A rejected address or mask. Every variant is recoverable: the caller
/// prints the message and asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Not four dot-separated octets in [0,255].
    #[error("[Error] The entered IPv4 address is invalid!")]
    InvalidAddress,

    /// CIDR prefix length outside [0,32].
    #[error("[Error] The CIDR value must be between 0 and 32!")]
    CidrOutOfRange,

    /// CIDR text after the slash is not an integer.
    #[error("[Error] The CIDR notation is invalid!")]
    InvalidCidr,

    /// Dotted mask with a bad octet or the wrong number of octets.
    #[error("[Error] The subnet mask is invalid!")]
    InvalidMask,

    /// Dotted mask whose bits are not a run of ones followed by zeros.
    #[error("Invalid subnet mask. Please enter a valid subnet mask.")]
    NonContiguousMask,
}

/// Which value the session was asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Address,
    Mask,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Address => write!(f, "IPv4 address"),
            Field::Mask => write!(f, "subnet mask"),
        }
    }
}

/// Failures that end a prompt session.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// End of input reached while waiting for a value.
    #[error("input closed before a valid {0} was entered")]
    InputClosed(Field),

    /// Configured attempt limit exhausted.
    #[error("no valid {field} after {attempts} attempts")]
    TooManyAttempts { field: Field, attempts: u32 },
}

/// Bad value in the environment or `.env` file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}
