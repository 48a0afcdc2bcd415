//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::distribution::error::DistributionErr;
pub use crate::input::error::UsageError;
pub use crate::sample_size::error::DomainError;
pub use crate::util::error::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PmsampsizeErr {
    #[error("invalid input: {0}")]
    Usage(UsageError),
    #[error("while computing sample size: {0}")]
    Domain(DomainError),
    #[error("while searching for a sample size: {0}")]
    RootFind(RootFindErr),
    #[error("while evaluating distribution: {0}")]
    Distribution(DistributionErr),
}

/// Broad classification of a failure. Usage errors are caught before any
/// formula is evaluated; everything else arises during a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Domain,
}

impl PmsampsizeErr {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PmsampsizeErr::Usage(_) => ErrorKind::Usage,
            PmsampsizeErr::Domain(_)
            | PmsampsizeErr::RootFind(_)
            | PmsampsizeErr::Distribution(_) => ErrorKind::Domain,
        }
    }
}
