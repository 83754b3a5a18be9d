//! Command implementations for the tsforge CLI.
//!
//! There is exactly one command: [`init`], the interactive scaffolding run.

pub mod init;
