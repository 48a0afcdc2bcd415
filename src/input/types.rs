//----------------------------------------
// input mod types
//----------------------------------------
use crate::compute::types::OutcomeType;
use serde::{Deserialize, Serialize};

/// A sample size request as supplied by the caller. Every scalar is optional
/// so that missing fields, and fields that belong to another outcome type,
/// can be reported instead of silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationInput {
    #[serde(rename = "type", alias = "outcome")]
    pub outcome: OutcomeType,
    /// Anticipated R-squared: adjusted R-squared for continuous outcomes,
    /// Cox-Snell R-squared otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsquared: Option<f64>,
    /// Number of candidate predictor parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<f64>,
    /// Target expected shrinkage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shrinkage: Option<f64>,
    /// Mean outcome value in the population (continuous)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercept: Option<f64>,
    /// Standard deviation of outcome values (continuous)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sd: Option<f64>,
    /// Multiplicative margin of error (continuous, survival)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mmoe: Option<f64>,
    /// Outcome prevalence (binary)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevalence: Option<f64>,
    /// Overall event rate per person-year (survival)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Time point of interest for prediction (survival)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timepoint: Option<f64>,
    /// Average follow-up per subject (survival)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meanfup: Option<f64>,
}

impl CalculationInput {
    pub fn new(outcome: OutcomeType) -> Self {
        CalculationInput {
            outcome,
            rsquared: None,
            parameters: None,
            shrinkage: None,
            intercept: None,
            sd: None,
            mmoe: None,
            prevalence: None,
            rate: None,
            timepoint: None,
            meanfup: None,
        }
    }

    pub fn continuous(rsquared: f64, parameters: u32, intercept: f64, sd: f64) -> Self {
        CalculationInput {
            rsquared: Some(rsquared),
            parameters: Some(parameters as f64),
            intercept: Some(intercept),
            sd: Some(sd),
            ..CalculationInput::new(OutcomeType::Continuous)
        }
    }

    pub fn binary(rsquared: f64, parameters: u32, prevalence: f64) -> Self {
        CalculationInput {
            rsquared: Some(rsquared),
            parameters: Some(parameters as f64),
            prevalence: Some(prevalence),
            ..CalculationInput::new(OutcomeType::Binary)
        }
    }

    pub fn survival(rsquared: f64, parameters: u32, rate: f64, timepoint: f64, meanfup: f64) -> Self {
        CalculationInput {
            rsquared: Some(rsquared),
            parameters: Some(parameters as f64),
            rate: Some(rate),
            timepoint: Some(timepoint),
            meanfup: Some(meanfup),
            ..CalculationInput::new(OutcomeType::Survival)
        }
    }

    pub fn with_shrinkage(mut self, shrinkage: f64) -> Self {
        self.shrinkage = Some(shrinkage);
        self
    }

    pub fn with_mmoe(mut self, mmoe: f64) -> Self {
        self.mmoe = Some(mmoe);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContinuousInput {
    pub rsquared: f64,
    pub parameters: u32,
    pub intercept: f64,
    pub sd: f64,
    pub shrinkage: f64,
    pub mmoe: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinaryInput {
    pub rsquared: f64,
    pub parameters: u32,
    pub prevalence: f64,
    pub shrinkage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurvivalInput {
    pub rsquared: f64,
    pub parameters: u32,
    pub rate: f64,
    pub timepoint: f64,
    pub meanfup: f64,
    pub shrinkage: f64,
    pub mmoe: f64,
}

/// Output of the validator: defaults applied, and only the fields relevant
/// to the outcome type remain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidatedInput {
    Continuous(ContinuousInput),
    Binary(BinaryInput),
    Survival(SurvivalInput),
}

impl ValidatedInput {
    pub fn outcome(&self) -> OutcomeType {
        match self {
            ValidatedInput::Continuous(_) => OutcomeType::Continuous,
            ValidatedInput::Binary(_) => OutcomeType::Binary,
            ValidatedInput::Survival(_) => OutcomeType::Survival,
        }
    }
}
