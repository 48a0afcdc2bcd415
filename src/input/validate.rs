use crate::compute::types::OutcomeType;
use crate::error::PmsampsizeErr;
use crate::input::error::UsageError;
use crate::input::types::{
    BinaryInput, CalculationInput, ContinuousInput, SurvivalInput, ValidatedInput,
};
use crate::settings::CriteriaSettings;

use OutcomeType::{Binary, Continuous, Survival};

/// Checks a request for missing, out of range and misplaced fields, and
/// converts it into the typed input of its outcome type. Nothing is
/// calculated unless every check passes.
pub fn validate_input(
    input: &CalculationInput,
    settings: &CriteriaSettings,
) -> Result<ValidatedInput, PmsampsizeErr> {
    let outcome = input.outcome;
    check_foreign_fields(input)?;

    //----------------------------------------
    // Fields shared by every outcome type
    //----------------------------------------
    let rsquared = required(input.rsquared, "rsquared", outcome)?;
    if !(rsquared > 0.0 && rsquared < 1.0) {
        return Err(out_of_range("rsquared", "strictly between 0 and 1", rsquared));
    }
    let parameters = positive_integer(input.parameters, outcome)?;
    let shrinkage = optional(input.shrinkage, "shrinkage")?.unwrap_or(settings.default_shrinkage);
    if !(shrinkage > 0.0 && shrinkage <= 1.0) {
        return Err(out_of_range("shrinkage", "in (0, 1]", shrinkage));
    }

    //----------------------------------------
    // Outcome-specific fields
    //----------------------------------------
    match outcome {
        Continuous => {
            let intercept = required(input.intercept, "intercept", outcome)?;
            let sd = required(input.sd, "sd", outcome)?;
            if sd <= 0.0 {
                return Err(out_of_range("sd", "positive", sd));
            }
            let mmoe = mmoe(input.mmoe, settings)?;
            Ok(ValidatedInput::Continuous(ContinuousInput {
                rsquared,
                parameters,
                intercept,
                sd,
                shrinkage,
                mmoe,
            }))
        }
        Binary => {
            let prevalence = required(input.prevalence, "prevalence", outcome)?;
            if !(prevalence > 0.0 && prevalence < 1.0) {
                return Err(out_of_range(
                    "prevalence",
                    "strictly between 0 and 1",
                    prevalence,
                ));
            }
            Ok(ValidatedInput::Binary(BinaryInput {
                rsquared,
                parameters,
                prevalence,
                shrinkage,
            }))
        }
        Survival => {
            let rate = positive(input.rate, "rate", outcome)?;
            let timepoint = positive(input.timepoint, "timepoint", outcome)?;
            let meanfup = positive(input.meanfup, "meanfup", outcome)?;
            let mmoe = mmoe(input.mmoe, settings)?;
            Ok(ValidatedInput::Survival(SurvivalInput {
                rsquared,
                parameters,
                rate,
                timepoint,
                meanfup,
                shrinkage,
                mmoe,
            }))
        }
    }
}

/// Fields that only make sense for some outcome types
fn check_foreign_fields(input: &CalculationInput) -> Result<(), PmsampsizeErr> {
    let specific: [(&'static str, Option<f64>, &[OutcomeType]); 7] = [
        ("intercept", input.intercept, &[Continuous]),
        ("sd", input.sd, &[Continuous]),
        ("mmoe", input.mmoe, &[Continuous, Survival]),
        ("prevalence", input.prevalence, &[Binary]),
        ("rate", input.rate, &[Survival]),
        ("timepoint", input.timepoint, &[Survival]),
        ("meanfup", input.meanfup, &[Survival]),
    ];
    match specific
        .iter()
        .find(|(_, value, allowed)| value.is_some() && !allowed.contains(&input.outcome))
    {
        Some((field, _, _)) => Err(UsageError::CrossContamination {
            field: *field,
            outcome: input.outcome,
        }
        .into()),
        None => Ok(()),
    }
}

fn out_of_range(field: &'static str, expected: &'static str, value: f64) -> PmsampsizeErr {
    UsageError::OutOfRange {
        field,
        expected,
        value,
    }
    .into()
}

fn optional(value: Option<f64>, field: &'static str) -> Result<Option<f64>, PmsampsizeErr> {
    match value {
        Some(v) if !v.is_finite() => Err(UsageError::NotFinite { field, value: v }.into()),
        _ => Ok(value),
    }
}

fn required(
    value: Option<f64>,
    field: &'static str,
    outcome: OutcomeType,
) -> Result<f64, PmsampsizeErr> {
    optional(value, field)?.ok_or_else(|| UsageError::Missing { field, outcome }.into())
}

fn positive(
    value: Option<f64>,
    field: &'static str,
    outcome: OutcomeType,
) -> Result<f64, PmsampsizeErr> {
    let v = required(value, field, outcome)?;
    if v <= 0.0 {
        return Err(out_of_range(field, "positive", v));
    }
    Ok(v)
}

fn positive_integer(value: Option<f64>, outcome: OutcomeType) -> Result<u32, PmsampsizeErr> {
    let v = required(value, "parameters", outcome)?;
    if v < 1.0 || v.fract() != 0.0 || v > u32::MAX as f64 {
        return Err(UsageError::NotPositiveInteger(v).into());
    }
    Ok(v as u32)
}

fn mmoe(value: Option<f64>, settings: &CriteriaSettings) -> Result<f64, PmsampsizeErr> {
    let mmoe = optional(value, "mmoe")?.unwrap_or(settings.default_mmoe);
    if mmoe <= 1.0 {
        return Err(out_of_range("mmoe", "greater than 1", mmoe));
    }
    Ok(mmoe)
}
