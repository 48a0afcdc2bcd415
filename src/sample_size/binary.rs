use tracing::{debug, info};

use crate::distribution::quantile::two_sided_z;
use crate::error::PmsampsizeErr;
use crate::input::types::BinaryInput;
use crate::sample_size::criteria::{
    ceil_sample_size, check_max_rsquared, expected_shrinkage, max_rsquared_binary,
    optimism_shrinkage, shrinkage_sample_size,
};
use crate::sample_size::types::{
    CalculationResult, Criterion, CriterionRow, Interval, OutcomeDetails, select_binding,
};
use crate::settings::CriteriaSettings;

/// Minimum sample size for developing a logistic prediction model.
/// Three criteria are evaluated:
/// 1. expected shrinkage of at least the target
/// 2. optimism in apparent Nagelkerke R-squared of at most
///    `settings.rsquared_difference`
/// 3. overall outcome risk estimated within `settings.risk_margin`
///
/// and the largest requirement is returned.
pub fn binary_sample_size(
    input: &BinaryInput,
    settings: &CriteriaSettings,
) -> Result<CalculationResult, PmsampsizeErr> {
    let BinaryInput {
        rsquared,
        parameters,
        prevalence,
        shrinkage,
    } = *input;
    let cap = settings.max_sample_size;
    let z = two_sided_z(settings.confidence_level)?;

    //----------------------------------------
    // R-squared scales
    //----------------------------------------
    let max_rsquared = max_rsquared_binary(prevalence);
    check_max_rsquared(rsquared, max_rsquared)?;
    let nagelkerke_rsquared = rsquared / max_rsquared;

    //----------------------------------------
    // Criteria
    //----------------------------------------
    let n_shrinkage =
        shrinkage_sample_size(Criterion::Shrinkage, rsquared, parameters, shrinkage, cap)?;

    let s_optimism = optimism_shrinkage(rsquared, max_rsquared, settings.rsquared_difference);
    let n_optimism = shrinkage_sample_size(
        Criterion::RsquaredDifference,
        rsquared,
        parameters,
        s_optimism,
        cap,
    )?;

    let n_risk = ceil_sample_size(
        Criterion::RiskPrecision,
        (z / settings.risk_margin).powi(2) * prevalence * (1. - prevalence),
        cap,
    )?;

    let candidates = [
        (Criterion::Shrinkage, n_shrinkage),
        (Criterion::RsquaredDifference, n_optimism),
        (Criterion::RiskPrecision, n_risk),
    ];
    for (criterion, n) in candidates {
        debug!(%criterion, sample_size = n, "binary criterion");
    }
    let (binding, sample_size) = select_binding(candidates[0], &candidates[1..]);

    //----------------------------------------
    // Summaries at each candidate and at the final size
    //----------------------------------------
    let epp = |n: u64| n as f64 * prevalence / parameters as f64;
    let criteria = candidates
        .iter()
        .map(|&(criterion, n)| {
            Ok(CriterionRow {
                criterion,
                sample_size: n,
                shrinkage: expected_shrinkage(rsquared, parameters, n, settings.tol)?,
                per_parameter: epp(n),
            })
        })
        .collect::<Result<Vec<CriterionRow>, PmsampsizeErr>>()?;
    let final_shrinkage = expected_shrinkage(rsquared, parameters, sample_size, settings.tol)?;

    let events = sample_size as f64 * prevalence;
    let se = (prevalence * (1. - prevalence) / sample_size as f64).sqrt();

    info!(
        sample_size,
        %binding,
        events,
        "minimum sample size for binary outcome"
    );

    Ok(CalculationResult {
        sample_size,
        binding,
        criteria,
        rsquared,
        parameters,
        target_shrinkage: shrinkage,
        shrinkage: final_shrinkage,
        rsquared_difference: settings.rsquared_difference,
        risk_margin: settings.risk_margin,
        confidence_level: settings.confidence_level,
        details: OutcomeDetails::Binary {
            prevalence,
            max_rsquared,
            nagelkerke_rsquared,
            events: events.ceil() as u64,
            epp: epp(sample_size),
            prevalence_interval: Interval {
                lower: prevalence - z * se,
                upper: prevalence + z * se,
            },
        },
    })
}
