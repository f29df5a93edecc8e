//! One user interaction, start to finish.
//!
//! Every interaction re-runs the password gate, then the disclaimer gate, then
//! (for estimate actions) the estimator. Only a plain view may proceed with no
//! password entered; it reports the password prompt stage.
//!
//! Session state goes in and comes back out through `&mut SessionFlags`;
//! nothing else is retained.

use thiserror::Error;

use crate::estimator::{self, EstimateError};
use crate::gate::{self, AccessError, Credential, GateOutcome};
use crate::models::*;

/// What the user asked for on this interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Load the page without triggering anything.
    View,
    AcceptDisclaimer,
    Estimate(EstimateRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The stage the session is in after the gate passed.
    Stage(Stage),
    Estimate(Estimate),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// Display options the estimator needs at this point.
#[derive(Debug, Clone)]
pub struct FlowContext<'a> {
    pub credential: &'a Credential,
    pub currency_symbol: &'a str,
}

pub fn handle(
    ctx: &FlowContext<'_>,
    flags: &mut SessionFlags,
    password: &str,
    action: Action,
) -> Result<Outcome, FlowError> {
    match action {
        Action::View => view(ctx, flags, password).map(Outcome::Stage),
        Action::AcceptDisclaimer => {
            accept_disclaimer(ctx, flags, password).map(Outcome::Stage)
        }
        Action::Estimate(request) => {
            estimate(ctx, flags, password, &request).map(Outcome::Estimate)
        }
    }
}

/// Re-check the password and report the stage the session has reached.
///
/// Viewing with nothing entered is not an error: the session is simply still
/// at the password prompt. A wrong password is.
pub fn view(
    ctx: &FlowContext<'_>,
    flags: &SessionFlags,
    password: &str,
) -> Result<Stage, FlowError> {
    match gate::check(ctx.credential, password) {
        GateOutcome::Empty => Ok(Stage::AwaitingPassword),
        GateOutcome::Invalid => Err(AccessError::InvalidCredential.into()),
        GateOutcome::Valid => Ok(Stage::after_gate(flags)),
    }
}

/// Record acknowledgement of the disclaimer. Accepting twice is a no-op.
pub fn accept_disclaimer(
    ctx: &FlowContext<'_>,
    flags: &mut SessionFlags,
    password: &str,
) -> Result<Stage, FlowError> {
    gate::require(ctx.credential, password)?;
    flags.accept_disclaimer();
    Ok(Stage::Ready)
}

/// Both gates passed: the estimator may run on this interaction.
pub fn require_ready(
    ctx: &FlowContext<'_>,
    flags: &SessionFlags,
    password: &str,
) -> Result<(), FlowError> {
    gate::require(ctx.credential, password)?;
    if !flags.disclaimer_accepted {
        return Err(AccessError::DisclaimerNotAccepted.into());
    }
    Ok(())
}

pub fn estimate(
    ctx: &FlowContext<'_>,
    flags: &SessionFlags,
    password: &str,
    request: &EstimateRequest,
) -> Result<Estimate, FlowError> {
    require_ready(ctx, flags, password)?;
    Ok(estimator::estimate(request, ctx.currency_symbol)?)
}
