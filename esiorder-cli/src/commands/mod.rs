//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`submit`] - Compile an options document and post the order
//! - [`status`] - Poll the status of one or more submitted orders

pub mod status;
pub mod submit;
