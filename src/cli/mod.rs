//! Command-line interface module.

mod args;
pub mod build;
pub mod inspect;

pub use args::{Cli, Commands};
