//! Per-step mean of available moves across recorded Dvonn games.
//!
//! Pipeline: [`core::dataset::Dataset`] → [`core::grid::StepGrid`] →
//! [`core::profile::StepProfile`] → window ([`app`]) or PNG ([`ui::export`]).

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod ui;

pub use error::{ProfileError, Result};
