//----------------------------------------
// sample size mod types
//----------------------------------------
use std::fmt;

use crate::compute::types::OutcomeType;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Expected shrinkage of predictor effects at least the target
    Shrinkage,
    /// Small optimism: apparent and adjusted R-squared close together
    RsquaredDifference,
    /// Precise estimate of the residual standard deviation
    ResidualVariance,
    /// Precise estimate of the mean outcome (intercept)
    InterceptPrecision,
    /// Precise estimate of the overall outcome risk
    RiskPrecision,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Criterion::Shrinkage => "shrinkage",
            Criterion::RsquaredDifference => "R-squared difference",
            Criterion::ResidualVariance => "residual variance",
            Criterion::InterceptPrecision => "intercept precision",
            Criterion::RiskPrecision => "risk precision",
        })
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct CriterionRow {
    pub criterion: Criterion,
    pub sample_size: u64,
    /// Expected shrinkage at this sample size
    pub shrinkage: f64,
    /// Subjects per parameter (continuous) or events per parameter
    pub per_parameter: f64,
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum OutcomeDetails {
    Continuous {
        intercept: f64,
        sd: f64,
        mmoe: f64,
        spp: f64,
        intercept_interval: Interval,
    },
    Binary {
        prevalence: f64,
        max_rsquared: f64,
        nagelkerke_rsquared: f64,
        events: u64,
        epp: f64,
        prevalence_interval: Interval,
    },
    Survival {
        rate: f64,
        timepoint: f64,
        meanfup: f64,
        mmoe: f64,
        max_rsquared: f64,
        nagelkerke_rsquared: f64,
        person_years: f64,
        events: u64,
        epp: f64,
        cumulative_incidence: f64,
        incidence_interval: Interval,
    },
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CalculationResult {
    /// Minimum number of subjects meeting every criterion
    pub sample_size: u64,
    pub binding: Criterion,
    pub criteria: Vec<CriterionRow>,
    pub rsquared: f64,
    pub parameters: u32,
    pub target_shrinkage: f64,
    /// Expected shrinkage at the selected sample size
    pub shrinkage: f64,
    pub rsquared_difference: f64,
    pub risk_margin: f64,
    pub confidence_level: f64,
    #[serde(flatten)]
    pub details: OutcomeDetails,
}

impl CalculationResult {
    pub fn outcome(&self) -> OutcomeType {
        match self.details {
            OutcomeDetails::Continuous { .. } => OutcomeType::Continuous,
            OutcomeDetails::Binary { .. } => OutcomeType::Binary,
            OutcomeDetails::Survival { .. } => OutcomeType::Survival,
        }
    }

    pub fn row(&self, criterion: Criterion) -> Option<&CriterionRow> {
        self.criteria.iter().find(|row| row.criterion == criterion)
    }
}

/// Picks the largest candidate; on ties the earliest criterion binds
pub(crate) fn select_binding(
    first: (Criterion, u64),
    rest: &[(Criterion, u64)],
) -> (Criterion, u64) {
    rest.iter()
        .fold(first, |best, &candidate| if candidate.1 > best.1 { candidate } else { best })
}
