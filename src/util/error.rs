//----------------------------------------
// root finding errors
//----------------------------------------
use crate::error::PmsampsizeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootFindErr {
    #[error("f(lower_bound) is larger than target; use smaller lower bound")]
    BadLowerBound,
    #[error("failed to bracket target {target} within {iterations} expansions")]
    FailedToBracket { target: f64, iterations: usize },
    #[error("failed to converge within {0} iterations")]
    FailedToConverge(usize),
    #[error("no sample size up to {cap} satisfies the criterion")]
    ExceededCap { cap: u64 },
}

impl From<RootFindErr> for PmsampsizeErr {
    fn from(err: RootFindErr) -> Self {
        PmsampsizeErr::RootFind(err)
    }
}
