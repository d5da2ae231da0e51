//! Terminal output formatting
//!
//! Display utilities for the CLI mode and shared string formatters.

pub mod display;
pub mod formatters;

pub use display::{print_loss, print_round, print_win};
