//! Domain models for the kiwi estimator.
//!
//! # Core Concepts
//!
//! - [`FlowersPerCaneInput`] / [`RevenueInput`]: orchard parameters supplied with
//!   a single calculation request. Nothing is retained after the result is returned.
//! - [`Estimate`]: the structured result of either estimator mode, with preformatted
//!   display strings.
//! - [`SessionFlags`] / [`Stage`]: the per-session access state. A session moves
//!   `AwaitingPassword → AwaitingDisclaimer → Ready`.
//! - [`Disclaimer`]: the terms shown before the estimator becomes reachable.

mod disclaimer;
mod estimate;
mod orchard;
mod session;

pub use disclaimer::*;
pub use estimate::*;
pub use orchard::*;
pub use session::*;
