//----------------------------------------
// distribution mod
//----------------------------------------
pub mod error;
pub mod quantile;
