//! Command Line Interface (CLI) layer for COLPAD.
//!
//! Defines argument parsing (`args`), CLI error types (`errors`) and the
//! orchestration logic (`runner`). Embedders should call `colpad::api`
//! directly instead of going through this module.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
