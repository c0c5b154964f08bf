//! Command-line tools for warehouse network cost planning.
//!
//! This crate provides the `netcost` binary:
//!
//! - `netcost check`: Validate a scenario file and print diagnostics
//! - `netcost report`: Run every cost calculator and print the annual report
//!
//! # Example Usage
//!
//! ```bash
//! netcost check scenario.json
//! netcost report scenario.json
//! netcost report scenario.json --format json
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod report;
pub mod scenario;
