//----------------------------------------
// Input errors
//----------------------------------------
use crate::compute::types::OutcomeType;
use crate::error::PmsampsizeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    #[error("unrecognised outcome type {0:?}; expected one of continuous, binary, survival")]
    UnknownOutcomeType(String),
    #[error("{field} is required for {outcome} outcomes")]
    Missing {
        field: &'static str,
        outcome: OutcomeType,
    },
    #[error("{field} should be a finite number; got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} should be {expected}; got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
    #[error("parameters should be a positive integer; got {0}")]
    NotPositiveInteger(f64),
    #[error("{field} does not apply to {outcome} outcomes and should not be supplied")]
    CrossContamination {
        field: &'static str,
        outcome: OutcomeType,
    },
    #[error("setting {name} is out of range; got {value}")]
    BadSetting { name: &'static str, value: f64 },
}

impl From<UsageError> for PmsampsizeErr {
    fn from(err: UsageError) -> Self {
        PmsampsizeErr::Usage(err)
    }
}
