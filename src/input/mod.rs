//----------------------------------------
// input mod
//----------------------------------------
pub mod error;
pub mod types;
pub mod validate;
