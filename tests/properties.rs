use pmsampsize::compute::{CalculationInput, CalculationResult, compute_sample_size};
use pmsampsize::error::{DomainError, ErrorKind, PmsampsizeErr};
use pmsampsize::settings::CriteriaSettings;
use proptest::prelude::*;

fn compute(input: &CalculationInput) -> Result<CalculationResult, TestCaseError> {
    compute_sample_size(input, &CriteriaSettings::default())
        .map_err(|e| TestCaseError::fail(format!("input={input:?} error={e}")))
}

fn check_selection_law(res: &CalculationResult) -> Result<(), TestCaseError> {
    let max = res.criteria.iter().map(|row| row.sample_size).max();
    prop_assert_eq!(max, Some(res.sample_size));
    let binding = res.row(res.binding).map(|row| row.sample_size);
    prop_assert_eq!(binding, Some(res.sample_size));
    Ok(())
}

fn continuous_input() -> impl Strategy<Value = CalculationInput> {
    (0.1f64..0.6, 1u32..40, 0.5f64..5.0, 0.1f64..3.0, 0.8f64..0.95).prop_map(
        |(rsquared, parameters, intercept, sd, shrinkage)| {
            CalculationInput::continuous(rsquared, parameters, intercept, sd)
                .with_shrinkage(shrinkage)
        },
    )
}

fn binary_input() -> impl Strategy<Value = CalculationInput> {
    (0.05f64..0.4, 1u32..40, 0.1f64..0.5, 0.8f64..0.95).prop_map(
        |(rsquared, parameters, prevalence, shrinkage)| {
            CalculationInput::binary(rsquared, parameters, prevalence).with_shrinkage(shrinkage)
        },
    )
}

fn survival_input() -> impl Strategy<Value = CalculationInput> {
    (
        0.01f64..0.1,
        1u32..40,
        0.05f64..0.2,
        1.0f64..5.0,
        1.0f64..5.0,
        0.8f64..0.95,
    )
        .prop_map(|(rsquared, parameters, rate, timepoint, meanfup, shrinkage)| {
            CalculationInput::survival(rsquared, parameters, rate, timepoint, meanfup)
                .with_shrinkage(shrinkage)
        })
}

fn any_input() -> impl Strategy<Value = CalculationInput> {
    prop_oneof![continuous_input(), binary_input(), survival_input()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn selection_law(input in any_input()) {
        let res = compute(&input)?;
        check_selection_law(&res)?;
    }

    #[test]
    fn continuous_exceeds_parameters(input in continuous_input()) {
        let res = compute(&input)?;
        let parameters = input.parameters.unwrap_or_default() as u64;
        prop_assert!(res.sample_size >= parameters + 2);
    }

    #[test]
    fn stricter_shrinkage_never_smaller(input in any_input(), bump in 0.0f64..0.04) {
        let shrinkage = input.shrinkage.unwrap_or(0.9);
        let loose = compute(&input)?;
        let strict = compute(&input.with_shrinkage(shrinkage + bump))?;
        prop_assert!(strict.sample_size >= loose.sample_size);
    }

    #[test]
    fn smaller_rsquared_never_smaller(input in any_input(), factor in 0.5f64..1.0) {
        let rsquared = input.rsquared.unwrap_or_default();
        let high = compute(&input)?;
        let low = compute(&CalculationInput { rsquared: Some(rsquared * factor), ..input })?;
        prop_assert!(low.sample_size >= high.sample_size);
    }

    #[test]
    fn idempotent(input in any_input()) {
        prop_assert_eq!(compute(&input)?, compute(&input)?);
    }

    #[test]
    fn foreign_prevalence_rejected(input in continuous_input(), prevalence in 0.01f64..0.99) {
        let err = compute_sample_size(
            &CalculationInput { prevalence: Some(prevalence), ..input },
            &CriteriaSettings::default(),
        );
        prop_assert_eq!(err.map_err(|e| e.kind()), Err(ErrorKind::Usage));
    }

    #[test]
    fn full_shrinkage_never_finite(input in prop_oneof![binary_input(), survival_input()]) {
        let res = compute_sample_size(&input.with_shrinkage(1.0), &CriteriaSettings::default());
        prop_assert!(
            matches!(res, Err(PmsampsizeErr::Domain(DomainError::Unbounded { .. }))),
            "unexpected result {:?}",
            res
        );
    }
}

#[test]
fn continuous_full_shrinkage_unbounded() {
    for parameters in [1, 2, 3, 25] {
        let input = CalculationInput::continuous(0.2, parameters, 1.9, 0.6).with_shrinkage(1.0);
        let err = compute_sample_size(&input, &CriteriaSettings::default())
            .expect_err("full shrinkage should be unbounded");
        assert!(
            matches!(err, PmsampsizeErr::Domain(DomainError::Unbounded { .. })),
            "parameters={parameters} error={err}"
        );
    }
}

#[test]
fn vanishing_rsquared_unbounded() {
    let err = compute_sample_size(
        &CalculationInput::binary(1e-9, 24, 0.174),
        &CriteriaSettings::default(),
    )
    .expect_err("tiny R-squared should be unbounded");
    assert!(matches!(
        err,
        PmsampsizeErr::Domain(DomainError::Unbounded { .. })
    ));
}

#[test]
fn json_request_round_trip() {
    let request: CalculationInput = serde_json::from_str(
        r#"{"type": "b", "rsquared": 0.288, "parameters": 24, "prevalence": 0.174}"#,
    )
    .expect("failed to parse request");
    let res = compute_sample_size(&request, &CriteriaSettings::default())
        .expect("failed to compute binary sample size");
    assert_eq!(res.sample_size, 662);

    let json = serde_json::to_value(&res).expect("failed to serialize result");
    assert_eq!(json["outcome"], "binary");
    assert_eq!(json["binding"], "rsquared_difference");
    assert_eq!(json["events"], 116);
}
