//! netcost report - run every calculator and print the annual cost report.
//!
//! Validator diagnostics go to stderr and never block the report; a
//! condition the engine cannot compute through aborts with the failing
//! calculator's error instead of printing a partial total.

use crate::cmd::check::OutputFormat;
use crate::report;
use crate::scenario;
use anyhow::{Context, Result};
use clap::Parser;
use netcost_core::Layout;
use netcost_engine::{
    financing_cost, labor_costs, rental_costs, shipping_costs, FinancingReport, LaborReport,
    RentalReport, ShippingReport,
};
use netcost_validate::validate;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Full cost report in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Network layout the report was computed under.
    pub layout: Layout,
    /// Rental section.
    pub rental: RentalReport,
    /// Inventory financing section.
    pub financing: FinancingReport,
    /// Shipping section.
    pub shipping: ShippingReport,
    /// Labor section.
    pub labor: LaborReport,
    /// Sum of the four section totals.
    pub total_annual_cost: f64,
}

/// Compute the annual cost report for a scenario.
#[derive(Parser, Debug)]
pub struct Args {
    /// The scenario file to evaluate
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Run the report command.
pub fn run(args: &Args) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    if !args.scenario.exists() {
        anyhow::bail!("file not found: {}", args.scenario.display());
    }

    let scenario = scenario::load(&args.scenario)?;
    let network = scenario
        .into_network()
        .context("scenario cannot be built into a network")?;

    for diagnostic in validate(&network) {
        eprintln!(
            "{}[{}]: {}",
            diagnostic.severity(),
            diagnostic.code,
            diagnostic.message
        );
    }

    let rental = rental_costs(&network).context("rental cost calculation failed")?;
    let financing = financing_cost(&network).context("financing cost calculation failed")?;
    let shipping = shipping_costs(&network).context("shipping cost calculation failed")?;
    let labor = labor_costs(&network);
    let total = rental.total_cost + financing.total_cost + shipping.total_cost + labor.total_cost;

    match args.format {
        OutputFormat::Json => {
            let output = JsonReport {
                layout: network.config().layout,
                rental,
                financing,
                shipping,
                labor,
                total_annual_cost: total,
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Text => {
            writeln!(stdout, "Annual Cost Report - {}", network.config().layout)?;
            writeln!(stdout, "{}", "=".repeat(60))?;
            writeln!(stdout)?;
            report::report_rental(&rental, &mut stdout)?;
            report::report_financing(&financing, &mut stdout)?;
            report::report_shipping(&shipping, &mut stdout)?;
            report::report_labor(&labor, &mut stdout)?;
            report::report_totals(
                network.config().layout,
                rental.total_cost,
                financing.total_cost,
                shipping.total_cost,
                labor.total_cost,
                &mut stdout,
            )?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
