//! One-shot gated estimates for the command line.
//!
//! Each invocation is a fresh session: the disclaimer flag starts unset and is
//! gone when the process exits.

use std::io::{self, Write};

use thiserror::Error;

use crate::flow::{self, Action, FlowContext, FlowError, Outcome};
use crate::models::*;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Gate, acknowledge and estimate in one pass.
///
/// Results go to `out`; the disclaimer text, when it has not been accepted,
/// goes to `err` so that `out` only ever carries estimate lines.
pub fn run_estimate(
    settings: &Settings,
    password: &str,
    accept_disclaimer: bool,
    request: EstimateRequest,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let ctx = FlowContext {
        credential: &settings.credential,
        currency_symbol: &settings.currency_symbol,
    };
    let mut flags = SessionFlags::default();

    if accept_disclaimer {
        flow::handle(&ctx, &mut flags, password, Action::AcceptDisclaimer)?;
        writeln!(out, "Disclaimer accepted. Welcome!")?;
    } else {
        print_disclaimer(err)?;
    }

    match flow::handle(&ctx, &mut flags, password, Action::Estimate(request))? {
        Outcome::Estimate(estimate) => {
            for message in estimate.messages() {
                writeln!(out, "{}", message)?;
            }
        }
        Outcome::Stage(stage) => writeln!(out, "{}", stage.as_str())?,
    }
    Ok(())
}

fn print_disclaimer(err: &mut impl Write) -> io::Result<()> {
    let disclaimer = Disclaimer::standard();
    writeln!(err, "{}", disclaimer.title)?;
    for line in disclaimer.notices.iter().chain(&disclaimer.assumptions) {
        writeln!(err, "  - {}", line)?;
    }
    writeln!(err, "Pass --accept-disclaimer to confirm: {}", disclaimer.accept_label)
}
