//! Command implementations for the `netcost` binary.
//!
//! Each module contains the full implementation for one subcommand.

pub mod check;
pub mod report_cmd;
