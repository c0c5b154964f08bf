//! Text rendering for diagnostics and cost reports.

use netcost_core::Layout;
use netcost_engine::{FinancingReport, LaborReport, RentalReport, ShippingReport};
use netcost_validate::Diagnostic;
use std::io::Write;

/// Print diagnostics in text form, one block per diagnostic.
pub fn report_diagnostics<W: Write>(
    diagnostics: &[Diagnostic],
    writer: &mut W,
) -> std::io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(
            writer,
            "{}[{}]: {}",
            diagnostic.severity(),
            diagnostic.code,
            diagnostic.message
        )?;
        if let Some(ctx) = &diagnostic.context {
            writeln!(writer, "  context: {ctx}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn tally(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Print the closing status line of a check run: a colored glyph and the
/// diagnostic tallies, or a clean bill for the scenario.
pub fn print_summary<W: Write>(
    errors: usize,
    warnings: usize,
    writer: &mut W,
) -> std::io::Result<()> {
    match (errors, warnings) {
        (0, 0) => writeln!(writer, "\x1b[32m\u{2713}\x1b[0m Scenario is clean"),
        (0, warnings) => writeln!(
            writer,
            "\x1b[33m\u{26A0}\x1b[0m {}",
            tally(warnings, "warning")
        ),
        (errors, 0) => writeln!(writer, "\x1b[31m\u{2717}\x1b[0m {}", tally(errors, "error")),
        (errors, warnings) => writeln!(
            writer,
            "\x1b[31m\u{2717}\x1b[0m {}, {}",
            tally(errors, "error"),
            tally(warnings, "warning")
        ),
    }
}

/// Render the rental section.
pub fn report_rental<W: Write>(report: &RentalReport, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "Rental Costs")?;
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(writer)?;

    for breakdown in &report.warehouses {
        if breakdown.area_sq_ft > 0.0 {
            writeln!(
                writer,
                "  {:<8} {:<5} {:>15.2}  ({:.1} sq ft)",
                breakdown.location, breakdown.kind, breakdown.cost, breakdown.area_sq_ft
            )?;
        } else {
            writeln!(
                writer,
                "  {:<8} {:<5} {:>15.2}",
                breakdown.location, breakdown.kind, breakdown.cost
            )?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "  {:<14} {:>15.2}", "Total", report.total_cost)?;
    writeln!(writer)?;
    Ok(())
}

/// Render the inventory financing section.
pub fn report_financing<W: Write>(report: &FinancingReport, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "Inventory Financing")?;
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(writer)?;

    for breakdown in &report.warehouses {
        writeln!(writer, "  {}", breakdown.location)?;
        writeln!(
            writer,
            "    Annual demand:     {:>12} units",
            breakdown.annual_demand
        )?;
        writeln!(
            writer,
            "    Safety stock:      {:>12.1} units",
            breakdown.safety_stock
        )?;
        writeln!(
            writer,
            "    Average inventory: {:>12.1} units",
            breakdown.average_inventory
        )?;
        writeln!(writer, "    Cost:              {:>12.2}", breakdown.cost)?;
    }

    writeln!(writer)?;
    writeln!(writer, "  {:<14} {:>15.2}", "Total", report.total_cost)?;
    writeln!(writer)?;
    Ok(())
}

/// Render the shipping section, sea legs first.
pub fn report_shipping<W: Write>(report: &ShippingReport, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "Shipping Costs")?;
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(writer)?;

    if !report.sea_legs.is_empty() {
        writeln!(writer, "Sea freight:")?;
        for leg in &report.sea_legs {
            writeln!(
                writer,
                "  {:<8} -> {:<8} {:>8.1} containers {:>15.2}",
                leg.location, leg.market, leg.containers, leg.cost
            )?;
        }
        writeln!(writer)?;
    }

    if !report.land_legs.is_empty() {
        writeln!(writer, "Land freight:")?;
        for leg in &report.land_legs {
            match &leg.market {
                Some(market) => writeln!(
                    writer,
                    "  {:<8} -> {:<8} {:>15.2}",
                    leg.location, market, leg.cost
                )?,
                None => writeln!(
                    writer,
                    "  {:<8} resupply {:>15.2}",
                    leg.location, leg.cost
                )?,
            }
        }
        writeln!(writer)?;
    }

    writeln!(writer, "  {:<14} {:>15.2}", "Sea total", report.sea_total)?;
    writeln!(writer, "  {:<14} {:>15.2}", "Land total", report.land_total)?;
    writeln!(writer, "  {:<14} {:>15.2}", "Total", report.total_cost)?;
    writeln!(writer)?;
    Ok(())
}

/// Render the labor section.
pub fn report_labor<W: Write>(report: &LaborReport, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "Labor Costs")?;
    writeln!(writer, "{}", "=".repeat(40))?;
    writeln!(writer)?;

    for breakdown in &report.warehouses {
        writeln!(
            writer,
            "  {:<8} {:>3} employees {:>15.2}",
            breakdown.location, breakdown.employees, breakdown.cost
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "  {:<14} {:>15.2}", "Total", report.total_cost)?;
    writeln!(writer)?;
    Ok(())
}

/// Render the closing summary with the grand total.
pub fn report_totals<W: Write>(
    layout: Layout,
    rental: f64,
    financing: f64,
    shipping: f64,
    labor: f64,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "Annual Cost Summary - {layout}")?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer)?;
    writeln!(writer, "  {:<20} {:>15.2}", "Rental:", rental)?;
    writeln!(writer, "  {:<20} {:>15.2}", "Financing:", financing)?;
    writeln!(writer, "  {:<20} {:>15.2}", "Shipping:", shipping)?;
    writeln!(writer, "  {:<20} {:>15.2}", "Labor:", labor)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "  {:<20} {:>15.2}",
        "Total Annual Cost:",
        rental + financing + shipping + labor
    )?;
    Ok(())
}
