//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to compute the minimum sample size needed
//! to develop a multivariable prediction model for a continuous, binary or
//! time-to-event outcome, following the criteria of Riley et al. Each
//! calculation evaluates several criteria (shrinkage, optimism in R-squared,
//! precision of the intercept or overall risk) and reports the largest
//! requirement alongside supporting statistics.

/// This module houses the public API for validating requests and computing
/// sample sizes
pub mod compute;
mod distribution;
/// This module contains error types
pub mod error;
mod input;
/// Text rendering of calculation results
pub mod report;
mod sample_size;
/// Named defaults and tunables shared by the calculators
pub mod settings;
mod util;
