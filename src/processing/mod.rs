//! Input handling for the calculator.
//!
//! - [`validate`] - address and mask checks with explicit error kinds
//! - [`prompt`] - the interactive ask-until-valid loop

mod prompt;
mod validate;

// Re-export public functions
pub use prompt::{Prompter, ADDRESS_PROMPT, MASK_PROMPT};
pub use validate::{
    cidr_to_mask, mask_to_prefix_len, parse_address, parse_mask, validate_address, validate_mask,
};
