//! Command-line shell for the payslip engine.
//!
//! Gathers the same inputs as the HTTP API from command-line arguments and
//! writes one rendered payslip document per record to local storage, named
//! sequentially (`payslip_1.txt`, `payslip_2.txt`, ...).

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{NaiveDate, Utc};
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use payslip_engine::calculation::generate_payslips;
use payslip_engine::config::ConfigLoader;
use payslip_engine::models::EmployeeContext;
use payslip_engine::render::{PayslipRenderer, TextRenderer};

/// Generate fortnightly payslips as local text files.
#[derive(Parser, Debug)]
#[command(name = "payslip-cli", version, about, long_about = None)]
struct Cli {
    /// How many fortnights of payslips to generate.
    #[arg(short = 'n', long)]
    count: u32,

    /// Employee first name.
    #[arg(long)]
    first_name: String,

    /// Employee last name.
    #[arg(long)]
    last_name: String,

    /// Registered business name.
    #[arg(long)]
    business_name: String,

    /// Australian Business Number.
    #[arg(long)]
    abn: String,

    /// Business address.
    #[arg(long)]
    address: String,

    /// Average annual gross income.
    #[arg(long)]
    annual_income: Decimal,

    /// Anchor date for the run. Defaults to today.
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Directory the payslip files are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Path to the configuration directory.
    #[arg(long, default_value = "config/ato")]
    config: PathBuf,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(count) => {
            println!(
                "Wrote {} payslip(s) to {}",
                count,
                cli.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<usize, Box<dyn std::error::Error>> {
    let config = ConfigLoader::load(&cli.config)?;
    tracing::debug!(
        config = %cli.config.display(),
        financial_year = %config.financial_year(),
        "Configuration loaded"
    );

    let employee = EmployeeContext {
        first_name: cli.first_name.clone(),
        last_name: cli.last_name.clone(),
        business_name: cli.business_name.clone(),
        abn: cli.abn.clone(),
        address: cli.address.clone(),
    };

    let reference_date = cli
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let payslips = generate_payslips(
        cli.count,
        &employee,
        cli.annual_income,
        reference_date,
        config.rules(),
        config.schedule(),
    )?;

    std::fs::create_dir_all(&cli.output_dir)?;

    for (index, payslip) in payslips.iter().enumerate() {
        let page = TextRenderer.render_payslip(&employee, payslip);
        let path = cli.output_dir.join(format!("payslip_{}.txt", index + 1));
        std::fs::write(&path, page)?;
        tracing::info!(
            file = %path.display(),
            period_end = %payslip.period.end_date,
            "Payslip written"
        );
    }

    Ok(payslips.len())
}
