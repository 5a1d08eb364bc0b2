use clap::{Parser, Subcommand};

use fpl_report::guidelines::Region;

#[derive(Parser)]
#[command(name = "fpl-report")]
#[command(about = "Household income report with federal poverty level and benefit eligibility")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config/default")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the full household report
    Report {
        /// Household data file (overrides input.path)
        #[arg(short, long)]
        input: Option<String>,

        /// Report file (overrides output.path)
        #[arg(short, long)]
        output: Option<String>,

        /// Write the report to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Look up the poverty guideline for one region and household size
    Lookup {
        /// Region code: us, ak or hi
        region: Region,

        /// Household size
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,
    },

    /// Load and list households without contacting the guideline service
    Households {
        /// Household data file (overrides input.path)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Print the effective configuration
    Config,
}
