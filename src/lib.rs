//! Interactive IPv4 subnet calculator.
//!
//! Reads an address and a mask (dotted-decimal or CIDR), then reports the
//! network address, broadcast address and usable host count.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{Config, OutputFormat};
pub use error::{ConfigError, Field, InputError, PromptError};
pub use models::{compute_network_info, NetworkInfo, SubnetMask};
pub use processing::Prompter;

use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};

/// Initialize log4rs from the configured file.
///
/// The error names the file, so the caller can report it and carry on unlogged.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let path = config.log_config_path();
    log4rs::init_file(path, Default::default())
        .map_err(|e| {
            Box::<dyn Error>::from(format!(
                "Logging disabled, cannot load {}: {e}",
                path.display()
            ))
        })
}

/// Run one session on stdin/stdout.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    run_session(io::stdin().lock(), stdout.lock(), config, color)?;
    Ok(())
}

/// Prompt for an address and mask, then write the report.
///
/// Returns `None` when the input closes before both values were entered.
pub fn run_session<R, W>(
    input: R,
    mut output: W,
    config: &Config,
    color: bool,
) -> Result<Option<NetworkInfo>, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    log::info!("#Start run_session() output={:?}", config.output);

    let answer = Prompter::new(input, &mut output)
        .with_max_attempts(config.max_attempts)
        .with_color(color)
        .prompt_and_validate();

    let (address, mask) = match answer {
        Ok(answer) => answer,
        Err(PromptError::InputClosed(field)) => {
            log::warn!("Input closed while waiting for {field}, no report");
            writeln!(output)?;
            return Ok(None);
        }
        Err(e) => {
            log::error!("Session failed: {e}");
            return Err(e.into());
        }
    };

    let info = compute_network_info(address, mask);
    log::info!(
        "Computed {} broadcast={} usable={}",
        info.cidr(),
        info.broadcast,
        info.usable_hosts
    );

    match config.output {
        OutputFormat::Text => write!(output, "{}", output::render_report(&info, color))?,
        OutputFormat::Json => writeln!(output, "\n{}", output::render_json(&info)?)?,
    }
    output.flush()?;

    Ok(Some(info))
}
