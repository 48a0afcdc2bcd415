use std::fmt;

use itertools::Itertools;

use crate::sample_size::types::{CalculationResult, Interval, OutcomeDetails};

const LABEL_WIDTH: usize = 36;
const CELL_WIDTH: usize = 11;

/// Both views carry the same content and differ only in their heading
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum DisplayMode {
    #[default]
    Print,
    Summary,
}

/// Formats a result as assumption notes, a criteria table and a closing
/// sentence
pub fn render(result: &CalculationResult, mode: DisplayMode) -> String {
    let mut lines = vec![heading(result, mode), String::new()];
    lines.extend(notes(result));
    lines.push(String::new());
    lines.extend(table(result));
    lines.push(String::new());
    lines.push(narrative(result));
    lines.join("\n")
}

fn heading(result: &CalculationResult, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Print => format!(
            "Minimum sample size for a {} outcome prediction model",
            result.outcome()
        ),
        DisplayMode::Summary => format!(
            "Summary of sample size calculation ({} outcome)",
            result.outcome()
        ),
    }
}

fn notes(result: &CalculationResult) -> Vec<String> {
    let mut notes = vec![format!(
        "NB: Assuming {} acceptable difference in apparent & adjusted R-squared",
        result.rsquared_difference
    )];
    match result.details {
        OutcomeDetails::Continuous { mmoe, .. } => {
            notes.push(format!(
                "NB: Assuming MMOE <= {mmoe} in estimation of intercept & residual standard deviation"
            ));
            notes.push("NB: SPP - Subjects per Predictor Parameter".to_string());
        }
        OutcomeDetails::Binary { prevalence, .. } => {
            notes.push(format!(
                "NB: Assuming {} margin of error in estimation of overall risk",
                result.risk_margin
            ));
            notes.push(format!(
                "NB: Events per Predictor Parameter (EPP) assumes prevalence = {prevalence}"
            ));
        }
        OutcomeDetails::Survival {
            rate, timepoint, ..
        } => {
            notes.push(format!(
                "NB: Assuming {} margin of error in estimation of overall risk at time point = {timepoint}",
                result.risk_margin
            ));
            notes.push(format!(
                "NB: Events per Predictor Parameter (EPP) assumes overall event rate = {rate}"
            ));
        }
    }
    notes
}

fn row(label: &str, cells: &[String]) -> String {
    std::iter::once(format!("{label:<LABEL_WIDTH$}"))
        .chain(cells.iter().map(|cell| format!("{cell:>CELL_WIDTH$}")))
        .join(" | ")
}

fn table(result: &CalculationResult) -> Vec<String> {
    let per_parameter = match result.details {
        OutcomeDetails::Continuous { .. } => "SPP",
        _ => "EPP",
    };
    let header = row(
        "Criterion",
        &[
            "Sample size".to_string(),
            "Shrinkage".to_string(),
            "Parameters".to_string(),
            per_parameter.to_string(),
        ],
    );
    let rule = "-".repeat(header.len());

    let mut lines = vec![header, rule.clone()];
    lines.extend(result.criteria.iter().enumerate().map(|(i, r)| {
        row(
            &format!("Criterion {} ({})", i + 1, r.criterion),
            &[
                r.sample_size.to_string(),
                format!("{:.3}", r.shrinkage),
                result.parameters.to_string(),
                format!("{:.2}", r.per_parameter),
            ],
        )
    }));
    lines.push(rule);
    lines.push(row(
        &format!("Final ({})", result.binding),
        &[
            result.sample_size.to_string(),
            format!("{:.3}", result.shrinkage),
            result.parameters.to_string(),
            format!("{:.2}", final_per_parameter(result)),
        ],
    ));
    lines
}

fn final_per_parameter(result: &CalculationResult) -> f64 {
    match result.details {
        OutcomeDetails::Continuous { spp, .. } => spp,
        OutcomeDetails::Binary { epp, .. } | OutcomeDetails::Survival { epp, .. } => epp,
    }
}

fn interval(ci: &Interval) -> String {
    format!("({:.4}, {:.4})", ci.lower, ci.upper)
}

fn narrative(result: &CalculationResult) -> String {
    let level = format!("{:.0}%", result.confidence_level * 100.);
    let lead = format!(
        "Minimum sample size required for new model development based on user inputs = {}",
        result.sample_size
    );
    match &result.details {
        OutcomeDetails::Continuous {
            spp,
            intercept_interval,
            ..
        } => format!(
            "{lead}, with an SPP of {spp:.2}. The {level} confidence interval for the intercept is {}",
            interval(intercept_interval)
        ),
        OutcomeDetails::Binary {
            events,
            epp,
            prevalence_interval,
            ..
        } => format!(
            "{lead}, with {events} required events, and an EPP of {epp:.2}. \
            The {level} confidence interval for the overall risk is {}",
            interval(prevalence_interval)
        ),
        OutcomeDetails::Survival {
            timepoint,
            person_years,
            events,
            epp,
            incidence_interval,
            ..
        } => format!(
            "{lead}, corresponding to {person_years:.2} person-time units of follow-up, \
            with {events} required events, and an EPP of {epp:.2}. \
            The {level} confidence interval for the cumulative incidence at time {timepoint} is {}",
            interval(incidence_interval)
        ),
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, DisplayMode::Print))
    }
}
