//----------------------------------------
// distribution errors
//----------------------------------------
use crate::error::PmsampsizeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("degrees of freedom should be positive; got {0}")]
    BadDegreesOfFreedom(f64),
    #[error("failed to construct {name} distribution: {reason}")]
    Construction { name: &'static str, reason: String },
}

impl From<DistributionErr> for PmsampsizeErr {
    fn from(err: DistributionErr) -> Self {
        PmsampsizeErr::Distribution(err)
    }
}
