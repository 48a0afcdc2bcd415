//----------------------------------------
// sample size errors
//----------------------------------------
use crate::error::PmsampsizeErr;
use crate::sample_size::types::Criterion;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error(
        "anticipated R-squared ({rsquared}) should be smaller than the shrinkage \
        target ({shrinkage})"
    )]
    ShrinkageBelowRsquared { rsquared: f64, shrinkage: f64 },
    #[error(
        "anticipated Cox-Snell R-squared ({rsquared}) should be smaller than the maximum \
        attainable for this outcome ({max_rsquared})"
    )]
    RsquaredExceedsMax { rsquared: f64, max_rsquared: f64 },
    #[error(
        "{criterion} criterion cannot be met with anticipated R-squared {rsquared}; \
        reduce the acceptable R-squared difference"
    )]
    Unattainable { criterion: Criterion, rsquared: f64 },
    #[error("{criterion} criterion requires more than {cap} subjects")]
    Unbounded { criterion: Criterion, cap: u64 },
    #[error("{criterion} criterion produced an undefined value")]
    Undefined { criterion: Criterion },
    #[error("intercept is zero, so its margin of error is undefined")]
    ZeroIntercept,
}

impl From<DomainError> for PmsampsizeErr {
    fn from(err: DomainError) -> Self {
        PmsampsizeErr::Domain(err)
    }
}
