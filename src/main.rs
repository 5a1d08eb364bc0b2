mod cli;

use std::io::{self, Write};

use clap::Parser;
use cli::{Cli, Commands};
use colored::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fpl_report::{
    config::Config,
    error,
    guidelines::{GuidelineClient, GuidelineSource, HttpGuidelineSource, Region},
    household,
    report::{generator::write_household_table, Report, ReportGenerator},
    utils::format_money,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fpl_report=info,warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Report {
            input,
            output,
            stdout,
        } => {
            let input = input.unwrap_or_else(|| config.input.path.clone());
            let output = if stdout {
                None
            } else {
                Some(output.unwrap_or_else(|| config.output.path.clone()))
            };
            run_report(&config, &input, output.as_deref()).await
        }

        Commands::Lookup { region, size } => lookup_guideline(&config, region, size).await,

        Commands::Households { input } => {
            let input = input.unwrap_or_else(|| config.input.path.clone());
            list_households(&input)
        }

        Commands::Config => show_config(&config),
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn run_report(config: &Config, input: &str, output: Option<&str>) -> error::Result<()> {
    info!("Loading households from {}", input);
    let loaded = household::load_households(input)?;
    if !loaded.rejected.is_empty() {
        eprintln!(
            "{}",
            format!("Skipped {} malformed line(s) in {}", loaded.rejected.len(), input).yellow()
        );
    }

    let source = HttpGuidelineSource::from_config(&config.guidelines);
    let mut client = GuidelineClient::new(source);
    let report = Report::build(
        loaded.households,
        &mut client,
        config.guidelines.year,
        config.eligibility.multiplier,
    )
    .await;

    let generator = ReportGenerator::new(&report);
    match output {
        Some(path) => {
            generator.write_to_file(path)?;
            println!("{}", format!("Output successfully written to {}", path).green());
        }
        None => {
            let text = generator.render_to_string()?;
            let mut writer = io::stdout().lock();
            writer.write_all(text.as_bytes())?;
            writer.flush()?;
        }
    }

    Ok(())
}

async fn lookup_guideline(config: &Config, region: Region, size: u32) -> error::Result<()> {
    let source = HttpGuidelineSource::from_config(&config.guidelines);
    println!("{}", format!("GET {}", source.url_for(region, size)).cyan());

    let amount = source.fetch(region, size).await?;
    let multiplier = config.eligibility.multiplier;

    println!("Region:               {}", region);
    println!("Household size:       {}", size);
    println!(
        "Poverty guideline:    ${}",
        format_money(amount).yellow()
    );
    println!(
        "Eligibility ({:.0}%):   ${}",
        multiplier * 100.0,
        format_money(amount * multiplier).yellow()
    );
    Ok(())
}

fn list_households(input: &str) -> error::Result<()> {
    let loaded = household::load_households(input)?;

    {
        let mut out = io::stdout().lock();
        write_household_table(&mut out, &loaded.households)?;
    }

    if !loaded.rejected.is_empty() {
        println!("\n{}", "Rejected lines:".yellow());
        for rejected in &loaded.rejected {
            println!("  {}", rejected.error);
        }
    }
    println!(
        "\n{} households loaded, {} rejected",
        loaded.households.len().to_string().green(),
        loaded.rejected.len().to_string().yellow()
    );
    Ok(())
}

fn show_config(config: &Config) -> error::Result<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| error::ReportError::Config(e.to_string()))?;
    println!("{}", rendered);
    Ok(())
}
