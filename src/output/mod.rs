//! Output formatting for subnet reports.
//!
//! - [`terminal`] - the fixed text report and colored diagnostics
//! - [`json`] - the report as a JSON object

mod json;
mod terminal;

pub use json::render_json;
pub use terminal::{format_diagnostic, render_report};
