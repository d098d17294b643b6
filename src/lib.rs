//! Support utilities for astrodynamics simulations.
//!
//! The main entry point is [`stats::step_function_window_average`], which
//! computes the time-weighted average of a step function over a window.

pub mod astro;
pub mod body;
pub mod config;
pub mod io;
pub mod manager;
pub mod stats;
pub mod units;
pub mod utils;

pub use stats::{StatsError, StepSeries, step_function_window_average};
