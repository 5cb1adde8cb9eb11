//! Interactive prompt loop.
//!
//! Asks for the address until it is valid, then for the mask until it is
//! valid. Each rejected line gets its diagnostic and the same field is asked
//! again. Without an attempt limit the loop waits forever on bad input; it
//! stops only when the input stream closes.

use super::validate::{parse_address, parse_mask};
use crate::error::{Field, InputError, PromptError};
use crate::models::SubnetMask;
use crate::output::format_diagnostic;
use std::fmt::Debug;
use std::io::{BufRead, Write};
use std::net::Ipv4Addr;

pub const ADDRESS_PROMPT: &str = "Please enter an IPv4 address: ";
pub const MASK_PROMPT: &str = "Please enter the subnet mask (dotted-decimal/CIDR format): ";

/// Reads answers from `input`, writes prompts and diagnostics to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: Option<u32>,
    color: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            max_attempts: None,
            color: false,
        }
    }

    /// Give up on a field after this many rejected lines. `None` retries forever.
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Print diagnostics in color.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn prompt_and_validate(&mut self) -> Result<(Ipv4Addr, SubnetMask), PromptError> {
        let address = self.ask(Field::Address, ADDRESS_PROMPT, parse_address)?;
        let mask = self.ask(Field::Mask, MASK_PROMPT, parse_mask)?;
        Ok((address, mask))
    }

    fn ask<T, F>(&mut self, field: Field, prompt: &str, parse: F) -> Result<T, PromptError>
    where
        T: Debug,
        F: Fn(&str) -> Result<T, InputError>,
    {
        let mut attempts = 0u32;
        loop {
            attempts = attempts.saturating_add(1);
            let line = self.read_line(field, prompt)?;
            match parse(&line) {
                Ok(value) => {
                    log::debug!("Accepted {field} {value:?} on attempt {attempts}");
                    return Ok(value);
                }
                Err(e) => {
                    log::warn!("Rejected {field} {line:?}: {e:?}");
                    writeln!(self.output, "{}", format_diagnostic(&e, self.color))?;
                }
            }
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                log::error!("Giving up on {field} after {attempts} attempts");
                return Err(PromptError::TooManyAttempts { field, attempts });
            }
        }
    }

    fn read_line(&mut self, field: Field, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        // a line that is not UTF-8 is rejected like any other bad input
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::InputClosed(field));
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
