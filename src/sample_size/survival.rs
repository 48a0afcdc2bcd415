use tracing::{debug, info};

use crate::distribution::quantile::two_sided_z;
use crate::error::PmsampsizeErr;
use crate::input::types::SurvivalInput;
use crate::sample_size::criteria::{
    bounded_search, check_max_rsquared, expected_shrinkage, max_rsquared_survival,
    optimism_shrinkage, shrinkage_sample_size,
};
use crate::sample_size::types::{
    CalculationResult, Criterion, CriterionRow, Interval, OutcomeDetails, select_binding,
};
use crate::settings::CriteriaSettings;

/// Confidence interval for the cumulative incidence at `timepoint`, assuming
/// a constant hazard `rate` estimated from `person_years` of follow-up
fn incidence_interval(rate: f64, timepoint: f64, person_years: f64, z: f64) -> Interval {
    let se = (rate / person_years).sqrt();
    Interval {
        lower: 1. - (-(rate - z * se).max(0.) * timepoint).exp(),
        upper: 1. - (-(rate + z * se) * timepoint).exp(),
    }
}

/// Minimum sample size for developing a time-to-event prediction model.
/// Each subject contributes `meanfup` person-years and `rate * meanfup`
/// expected events. Three criteria are evaluated:
/// 1. expected shrinkage of at least the target
/// 2. optimism in apparent Nagelkerke R-squared of at most
///    `settings.rsquared_difference`
/// 3. cumulative incidence at `timepoint` estimated within
///    `settings.risk_margin`
pub fn survival_sample_size(
    input: &SurvivalInput,
    settings: &CriteriaSettings,
) -> Result<CalculationResult, PmsampsizeErr> {
    let SurvivalInput {
        rsquared,
        parameters,
        rate,
        timepoint,
        meanfup,
        shrinkage,
        mmoe,
    } = *input;
    let cap = settings.max_sample_size;
    let z = two_sided_z(settings.confidence_level)?;
    let events_per_subject = rate * meanfup;

    //----------------------------------------
    // R-squared scales
    //----------------------------------------
    let max_rsquared = max_rsquared_survival(events_per_subject);
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

    let cumulative_incidence = 1. - (-rate * timepoint).exp();
    let n_risk = bounded_search(
        Criterion::RiskPrecision,
        |n| {
            let ci = incidence_interval(rate, timepoint, meanfup * n as f64, z);
            Ok(ci.upper - cumulative_incidence <= settings.risk_margin
                && cumulative_incidence - ci.lower <= settings.risk_margin)
        },
        1,
        cap,
    )?;

    let candidates = [
        (Criterion::Shrinkage, n_shrinkage),
        (Criterion::RsquaredDifference, n_optimism),
        (Criterion::RiskPrecision, n_risk),
    ];
    for (criterion, n) in candidates {
        debug!(%criterion, sample_size = n, "survival criterion");
    }
    let (binding, sample_size) = select_binding(candidates[0], &candidates[1..]);

    //----------------------------------------
    // Summaries at each candidate and at the final size
    //----------------------------------------
    let epp = |n: u64| n as f64 * events_per_subject / parameters as f64;
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

    let person_years = meanfup * sample_size as f64;
    let events = events_per_subject * sample_size as f64;

    info!(
        sample_size,
        %binding,
        events,
        person_years,
        "minimum sample size for survival outcome"
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
        details: OutcomeDetails::Survival {
            rate,
            timepoint,
            meanfup,
            mmoe,
            max_rsquared,
            nagelkerke_rsquared,
            person_years,
            events: events.ceil() as u64,
            epp: epp(sample_size),
            cumulative_incidence,
            incidence_interval: incidence_interval(rate, timepoint, person_years, z),
        },
    })
}
