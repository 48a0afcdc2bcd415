//----------------------------------------
// compute mod types
//----------------------------------------
use std::fmt;
use std::str::FromStr;

use crate::input::error::UsageError;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutcomeType {
    Continuous,
    Binary,
    Survival, // time-to-event
}

impl OutcomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Continuous => "continuous",
            OutcomeType::Binary => "binary",
            OutcomeType::Survival => "survival",
        }
    }
}

impl fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutcomeType {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "continuous" => Ok(OutcomeType::Continuous),
            "b" | "binary" => Ok(OutcomeType::Binary),
            "s" | "survival" => Ok(OutcomeType::Survival),
            _ => Err(UsageError::UnknownOutcomeType(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutcomeType {
    type Error = UsageError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
