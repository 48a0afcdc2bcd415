//----------------------------------------
// sample size mod
//----------------------------------------
pub mod binary;
pub mod continuous;
mod criteria;
pub mod error;
pub mod survival;
pub mod types;
