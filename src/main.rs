//! Lifeplan CLI
//!
//! Runs one household projection and prints the year-by-year trajectory,
//! optionally exporting the full series as CSV.

use anyhow::Context;
use clap::Parser;
use lifeplan::plan::{load_scenario, PlanParams};
use lifeplan::projection::{ProjectionResult, YearRow};
use lifeplan::ProjectionEngine;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lifeplan", version, about = "Household net-worth projection")]
struct Cli {
    /// JSON scenario file; the built-in default scenario is used if omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Write the full result series to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of year rows to print to the console
    #[arg(long, default_value_t = 20)]
    rows: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let params = match &cli.scenario {
        Some(path) => load_scenario(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => PlanParams::default_scenario(),
    };

    println!("Lifeplan v{}", env!("CARGO_PKG_VERSION"));
    println!("Ages {}..={}, initial assets {:.1}", params.current_age, params.target_age, params.initial_assets);
    println!();

    let result = ProjectionEngine::new(params).run();

    println!(
        "{:>4} {:>9} {:>9} {:>8} {:>8} {:>8} {:>10} {:>9} {:>9} {:>9} {:>10}",
        "Age", "Gross", "Net", "Edu", "Housing", "Save", "FinAssets", "Land", "Bldg", "Loan", "NetWorth"
    );
    println!("{}", "-".repeat(104));
    for row in result.rows.iter().take(cli.rows) {
        println!(
            "{:>4} {:>9.1} {:>9.1} {:>8.1} {:>8.1} {:>8.1} {:>10.1} {:>9.1} {:>9.1} {:>9.1} {:>10.1}",
            row.age,
            row.gross_income,
            row.net_income,
            row.education_cost,
            row.housing_cost,
            row.savings_contribution,
            row.financial_assets,
            row.land_value,
            row.building_value,
            row.loan_balance,
            row.net_worth,
        );
    }
    if result.rows.len() > cli.rows {
        println!("... ({} more years)", result.rows.len() - cli.rows);
    }

    let summary = result.summary();
    println!();
    println!("Summary:");
    println!("  Years simulated: {}", summary.years);
    println!("  Final net worth: {:.1}", summary.final_net_worth);
    println!("  Final financial assets: {:.1}", summary.final_financial_assets);
    println!("  Real-estate equity: {:.1}", summary.real_estate_equity);
    println!("  Total tax and social insurance: {:.1}", summary.total_tax_paid);
    println!("  Total contributions: {:.1}", summary.total_contributions);

    if let Some(path) = &cli.output {
        write_csv(path, &result)
            .with_context(|| format!("writing results to {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

/// Export the series as CSV, one row per age, values rounded to one decimal
fn write_csv(path: &PathBuf, result: &ProjectionResult) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "age",
        "gross_income",
        "spouse_income",
        "income_tax",
        "resident_tax",
        "social_insurance",
        "net_income",
        "education_cost",
        "housing_cost",
        "one_off_purchases",
        "savings_contribution",
        "free_cash",
        "financial_assets",
        "land_value",
        "building_value",
        "loan_balance",
        "net_worth",
    ])?;

    for row in &result.rows {
        writer.write_record(csv_fields(row))?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_fields(row: &YearRow) -> Vec<String> {
    let mut fields = vec![row.age.to_string()];
    fields.extend(
        [
            row.gross_income,
            row.spouse_income,
            row.income_tax,
            row.resident_tax,
            row.social_insurance,
            row.net_income,
            row.education_cost,
            row.housing_cost,
            row.one_off_purchases,
            row.savings_contribution,
            row.free_cash,
            row.financial_assets,
            row.land_value,
            row.building_value,
            row.loan_balance,
            row.net_worth,
        ]
        .iter()
        .map(|v| format!("{:.1}", v)),
    );
    fields
}
