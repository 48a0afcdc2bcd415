//----------------------------------------
// Criteria settings
//----------------------------------------
//! Constants shared by the calculators. They are collected in
//! [`CriteriaSettings`] and passed explicitly to every calculation.

use crate::error::PmsampsizeErr;
use crate::input::error::UsageError;
use serde::{Deserialize, Serialize};

/// Target expected shrinkage when the caller does not supply one
pub const DEFAULT_SHRINKAGE: f64 = 0.9;
/// Multiplicative margin of error when the caller does not supply one
pub const DEFAULT_MMOE: f64 = 1.1;
/// Acceptable difference between apparent and adjusted R-squared
pub const DEFAULT_RSQUARED_DIFFERENCE: f64 = 0.05;
/// Absolute margin of error for the overall outcome risk
pub const DEFAULT_RISK_MARGIN: f64 = 0.05;
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
/// Searches give up beyond this many subjects
pub const DEFAULT_MAX_SAMPLE_SIZE: u64 = 100_000_000;
pub const DEFAULT_TOL: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CriteriaSettings {
    pub default_shrinkage: f64,
    pub default_mmoe: f64,
    pub rsquared_difference: f64,
    pub risk_margin: f64,
    pub confidence_level: f64,
    pub max_sample_size: u64,
    pub tol: f64,
}

impl Default for CriteriaSettings {
    fn default() -> Self {
        CriteriaSettings {
            default_shrinkage: DEFAULT_SHRINKAGE,
            default_mmoe: DEFAULT_MMOE,
            rsquared_difference: DEFAULT_RSQUARED_DIFFERENCE,
            risk_margin: DEFAULT_RISK_MARGIN,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            max_sample_size: DEFAULT_MAX_SAMPLE_SIZE,
            tol: DEFAULT_TOL,
        }
    }
}

impl CriteriaSettings {
    pub fn validate(&self) -> Result<(), PmsampsizeErr> {
        let bad = |name: &'static str, value: f64| -> PmsampsizeErr {
            UsageError::BadSetting { name, value }.into()
        };
        if !(self.default_shrinkage > 0.0 && self.default_shrinkage <= 1.0) {
            return Err(bad("default_shrinkage", self.default_shrinkage));
        }
        if !(self.default_mmoe > 1.0 && self.default_mmoe.is_finite()) {
            return Err(bad("default_mmoe", self.default_mmoe));
        }
        if !(self.rsquared_difference > 0.0 && self.rsquared_difference < 1.0) {
            return Err(bad("rsquared_difference", self.rsquared_difference));
        }
        if !(self.risk_margin > 0.0 && self.risk_margin < 1.0) {
            return Err(bad("risk_margin", self.risk_margin));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(bad("confidence_level", self.confidence_level));
        }
        if self.max_sample_size == 0 {
            return Err(bad("max_sample_size", 0.));
        }
        if !(self.tol > 0.0 && self.tol < 1.0) {
            return Err(bad("tol", self.tol));
        }
        Ok(())
    }
}
