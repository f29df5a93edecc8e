//! Password-gated kiwifruit yield and revenue estimator.
//!
//! The [`estimator`] computes flowers-per-cane and revenue figures; the
//! [`gate`] and [`flow`] modules decide whether an interaction may reach it.
//! [`api`] exposes the whole sequence over HTTP and [`cli`] runs it once from
//! the command line.

pub mod api;
pub mod cli;
pub mod estimator;
pub mod flow;
pub mod gate;
pub mod models;
pub mod settings;
pub mod store;
