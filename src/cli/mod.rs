//! CLI argument parsing and command handling.

mod args;
pub mod validators;

pub use args::{AugmentArgs, ChainsAction, Cli, Command, ConfigAction};
