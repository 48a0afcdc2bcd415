//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

use tracing::debug;

pub use crate::input::types::{
    BinaryInput, CalculationInput, ContinuousInput, SurvivalInput, ValidatedInput,
};
pub use crate::input::validate::validate_input;
pub use crate::sample_size::binary::binary_sample_size;
pub use crate::sample_size::continuous::continuous_sample_size;
pub use crate::sample_size::survival::survival_sample_size;
pub use crate::sample_size::types::{
    CalculationResult, Criterion, CriterionRow, Interval, OutcomeDetails,
};
pub use crate::settings::CriteriaSettings;
pub use types::OutcomeType;

use crate::error::PmsampsizeErr;

/// Validates a request and runs the calculator for its outcome type
pub fn compute_sample_size(
    input: &CalculationInput,
    settings: &CriteriaSettings,
) -> Result<CalculationResult, PmsampsizeErr> {
    settings.validate()?;
    let validated = validate_input(input, settings)?;
    debug!(outcome = %validated.outcome(), "validated sample size request");
    match validated {
        ValidatedInput::Continuous(c) => continuous_sample_size(&c, settings),
        ValidatedInput::Binary(b) => binary_sample_size(&b, settings),
        ValidatedInput::Survival(s) => survival_sample_size(&s, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn dispatch_by_outcome() {
        let settings = CriteriaSettings::default();
        let binary = compute_sample_size(&CalculationInput::binary(0.288, 24, 0.174), &settings)
            .expect("failed to compute binary sample size");
        assert_eq!(binary.outcome(), OutcomeType::Binary);
        assert_eq!(binary.sample_size, 662);

        let survival = compute_sample_size(
            &CalculationInput::survival(0.051, 30, 0.065, 2., 2.07),
            &settings,
        )
        .expect("failed to compute survival sample size");
        assert_eq!(survival.outcome(), OutcomeType::Survival);
        assert_eq!(survival.sample_size, 5143);

        let continuous = compute_sample_size(
            &CalculationInput::continuous(0.2, 25, 1.9, 0.6),
            &settings,
        )
        .expect("failed to compute continuous sample size");
        assert_eq!(continuous.outcome(), OutcomeType::Continuous);
        assert_eq!(continuous.sample_size, 918);
    }

    #[test]
    fn usage_errors_stop_before_calculation() {
        let input = CalculationInput {
            prevalence: Some(0.174),
            ..CalculationInput::continuous(0.2, 25, 1.9, 0.6)
        };
        let err = compute_sample_size(&input, &CriteriaSettings::default())
            .expect_err("prevalence should be rejected for continuous outcomes");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn domain_errors_classified() {
        let err = compute_sample_size(
            &CalculationInput::binary(0.288, 24, 0.174).with_shrinkage(1.0),
            &CriteriaSettings::default(),
        )
        .expect_err("full shrinkage should be unbounded");
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn bad_settings_rejected() {
        let settings = CriteriaSettings {
            risk_margin: 0.,
            ..Default::default()
        };
        let err = compute_sample_size(&CalculationInput::binary(0.288, 24, 0.174), &settings)
            .expect_err("zero risk margin should be rejected");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn idempotent() {
        let input = CalculationInput::survival(0.051, 30, 0.065, 2., 2.07);
        let settings = CriteriaSettings::default();
        assert_eq!(
            compute_sample_size(&input, &settings).unwrap(),
            compute_sample_size(&input, &settings).unwrap()
        );
    }
}
