//! Command line front end for the sample size calculators.
//!
//! Usage:
//!   pmsampsize --type binary --rsquared 0.288 --parameters 24 --prevalence 0.174
//!   pmsampsize --input request.json --settings settings.json --json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::{Level, debug};

use pmsampsize::compute::{CalculationInput, CriteriaSettings, OutcomeType, compute_sample_size};
use pmsampsize::report::{DisplayMode, render};

#[derive(Parser, Debug)]
#[command(name = "pmsampsize")]
#[command(
    version,
    about = "Minimum sample size for developing a multivariable prediction model"
)]
struct Cli {
    /// Outcome type: continuous, binary or survival
    #[arg(long = "type", value_name = "OUTCOME")]
    outcome: Option<OutcomeType>,

    /// Anticipated R-squared (adjusted for continuous, Cox-Snell otherwise)
    #[arg(long)]
    rsquared: Option<f64>,

    /// Number of candidate predictor parameters
    #[arg(long)]
    parameters: Option<f64>,

    /// Target expected shrinkage
    #[arg(long)]
    shrinkage: Option<f64>,

    /// Mean outcome value (continuous)
    #[arg(long, allow_negative_numbers = true)]
    intercept: Option<f64>,

    /// Outcome standard deviation (continuous)
    #[arg(long)]
    sd: Option<f64>,

    /// Multiplicative margin of error (continuous, survival)
    #[arg(long)]
    mmoe: Option<f64>,

    /// Outcome prevalence (binary)
    #[arg(long)]
    prevalence: Option<f64>,

    /// Overall event rate (survival)
    #[arg(long)]
    rate: Option<f64>,

    /// Time point of interest for prediction (survival)
    #[arg(long)]
    timepoint: Option<f64>,

    /// Average follow-up per subject (survival)
    #[arg(long)]
    meanfup: Option<f64>,

    /// JSON request file; flags given on the command line take precedence
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// JSON file overriding the default criteria settings
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Use the summary view of the text report
    #[arg(long, conflicts_with = "json")]
    summary: bool,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

impl Cli {
    fn request(&self) -> Result<CalculationInput> {
        let base = match &self.input {
            Some(path) => Some(read_json::<CalculationInput>(path)?),
            None => None,
        };
        let outcome = match (self.outcome, base) {
            (Some(outcome), _) => outcome,
            (None, Some(base)) => base.outcome,
            (None, None) => bail!("an outcome type is required (--type or --input)"),
        };
        let base = base.unwrap_or_else(|| CalculationInput::new(outcome));
        Ok(CalculationInput {
            outcome,
            rsquared: self.rsquared.or(base.rsquared),
            parameters: self.parameters.or(base.parameters),
            shrinkage: self.shrinkage.or(base.shrinkage),
            intercept: self.intercept.or(base.intercept),
            sd: self.sd.or(base.sd),
            mmoe: self.mmoe.or(base.mmoe),
            prevalence: self.prevalence.or(base.prevalence),
            rate: self.rate.or(base.rate),
            timepoint: self.timepoint.or(base.timepoint),
            meanfup: self.meanfup.or(base.meanfup),
        })
    }

    fn criteria_settings(&self) -> Result<CriteriaSettings> {
        match &self.settings {
            Some(path) => read_json(path),
            None => Ok(CriteriaSettings::default()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let request = cli.request()?;
    let settings = cli.criteria_settings()?;
    debug!(?request, ?settings, "sample size request");

    let result = compute_sample_size(&request, &settings)
        .with_context(|| format!("failed to compute sample size for {} outcome", request.outcome))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let mode = if cli.summary {
            DisplayMode::Summary
        } else {
            DisplayMode::Print
        };
        println!("{}", render(&result, mode));
    }
    Ok(())
}
