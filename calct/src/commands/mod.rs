//! Command modules for the calct CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod check;
pub mod init;
pub mod lex;

pub use check::{run_check, CheckArgs};
pub use init::{run_init, InitArgs};
pub use lex::{run_lex, LexArgs};
