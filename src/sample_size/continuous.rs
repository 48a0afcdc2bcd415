use tracing::{debug, info};

use crate::distribution::quantile::{chi_squared_quantile, students_t_quantile};
use crate::error::PmsampsizeErr;
use crate::input::types::ContinuousInput;
use crate::sample_size::criteria::{bounded_search, ceil_sample_size};
use crate::sample_size::error::DomainError;
use crate::sample_size::types::{
    CalculationResult, Criterion, CriterionRow, Interval, OutcomeDetails, select_binding,
};
use crate::settings::CriteriaSettings;

/// Apparent R-squared expected at sample size n for a linear model with
/// the given adjusted R-squared
fn apparent_rsquared(adjusted_rsquared: f64, parameters: f64, n: u64) -> f64 {
    let n = n as f64;
    (adjusted_rsquared * (n - parameters - 1.) + parameters) / (n - 1.)
}

/// Expected (heuristic) shrinkage of a linear model at sample size n
fn expected_shrinkage(adjusted_rsquared: f64, parameters: f64, n: u64) -> f64 {
    let apparent = apparent_rsquared(adjusted_rsquared, parameters, n);
    1. + (parameters - 2.) / (n as f64 * (1. - apparent).ln())
}

/// Minimum sample size for developing a linear regression prediction model.
/// Four criteria are evaluated:
/// 1. expected shrinkage of at least the target
/// 2. apparent and adjusted R-squared within `settings.rsquared_difference`
/// 3. residual standard deviation estimated within the multiplicative
///    margin of error
/// 4. mean outcome (intercept) estimated within the multiplicative margin
///    of error
pub fn continuous_sample_size(
    input: &ContinuousInput,
    settings: &CriteriaSettings,
) -> Result<CalculationResult, PmsampsizeErr> {
    let ContinuousInput {
        rsquared,
        parameters,
        intercept,
        sd,
        shrinkage,
        mmoe,
    } = *input;
    if rsquared / shrinkage >= 1.0 {
        return Err(DomainError::ShrinkageBelowRsquared {
            rsquared,
            shrinkage,
        }
        .into());
    }
    if intercept == 0.0 {
        return Err(DomainError::ZeroIntercept.into());
    }

    let p = parameters as f64;
    let cap = settings.max_sample_size;
    // At least one residual degree of freedom
    let n_min = parameters as u64 + 2;
    let alpha = 1. - settings.confidence_level;
    let residual_sd = sd * (1. - rsquared).sqrt();
    let df = |n: u64| (n - parameters as u64 - 1) as f64;
    let intercept_half_width = |n: u64| -> Result<f64, PmsampsizeErr> {
        let t = students_t_quantile(1. - alpha / 2., df(n))?;
        Ok(t * residual_sd / (n as f64).sqrt())
    };

    //----------------------------------------
    // Criterion 1: shrinkage
    //----------------------------------------
    // Expected shrinkage first dips and then rises towards one, so only
    // sizes beyond the dip are searched
    let n_shrinkage = if shrinkage >= 1.0 {
        // No finite sample removes all shrinkage
        return Err(DomainError::Unbounded {
            criterion: Criterion::Shrinkage,
            cap,
        }
        .into());
    } else if parameters <= 2 {
        n_min
    } else {
        let es = |n: u64| expected_shrinkage(rsquared, p, n);
        let turn = bounded_search(Criterion::Shrinkage, |n| Ok(es(n + 1) >= es(n)), n_min, cap)?;
        let n = bounded_search(Criterion::Shrinkage, |n| Ok(es(n) >= shrinkage), turn, cap)?;
        if n == turn { n_min } else { n }
    };

    //----------------------------------------
    // Criterion 2: R-squared difference
    //----------------------------------------
    // apparent - adjusted = p (1 - R2) / (n - 1)
    let n_optimism = ceil_sample_size(
        Criterion::RsquaredDifference,
        1. + p * (1. - rsquared) / settings.rsquared_difference,
        cap,
    )?
    .max(n_min);

    //----------------------------------------
    // Criterion 3: residual variance
    //----------------------------------------
    let n_residual = bounded_search(
        Criterion::ResidualVariance,
        |n| {
            let dof = df(n);
            let chi_lower = chi_squared_quantile(alpha / 2., dof)?;
            let chi_upper = chi_squared_quantile(1. - alpha / 2., dof)?;
            let sigma_mmoe = (dof / chi_lower).sqrt().max((chi_upper / dof).sqrt());
            Ok(sigma_mmoe <= mmoe)
        },
        n_min,
        cap,
    )?;

    //----------------------------------------
    // Criterion 4: intercept
    //----------------------------------------
    let n_intercept = bounded_search(
        Criterion::InterceptPrecision,
        |n| Ok(intercept_half_width(n)? <= (mmoe - 1.) * intercept.abs()),
        n_min,
        cap,
    )?;

    let candidates = [
        (Criterion::Shrinkage, n_shrinkage),
        (Criterion::RsquaredDifference, n_optimism),
        (Criterion::ResidualVariance, n_residual),
        (Criterion::InterceptPrecision, n_intercept),
    ];
    for (criterion, n) in candidates {
        debug!(%criterion, sample_size = n, "continuous criterion");
    }
    let (binding, sample_size) = select_binding(candidates[0], &candidates[1..]);

    //----------------------------------------
    // Summaries
    //----------------------------------------
    let criteria: Vec<CriterionRow> = candidates
        .iter()
        .map(|&(criterion, n)| CriterionRow {
            criterion,
            sample_size: n,
            shrinkage: expected_shrinkage(rsquared, p, n),
            per_parameter: n as f64 / p,
        })
        .collect();
    let half_width = intercept_half_width(sample_size)?;

    info!(
        sample_size,
        %binding,
        "minimum sample size for continuous outcome"
    );

    Ok(CalculationResult {
        sample_size,
        binding,
        criteria,
        rsquared,
        parameters,
        target_shrinkage: shrinkage,
        shrinkage: expected_shrinkage(rsquared, p, sample_size),
        rsquared_difference: settings.rsquared_difference,
        risk_margin: settings.risk_margin,
        confidence_level: settings.confidence_level,
        details: OutcomeDetails::Continuous {
            intercept,
            sd,
            mmoe,
            spp: sample_size as f64 / p,
            intercept_interval: Interval {
                lower: intercept - half_width,
                upper: intercept + half_width,
            },
        },
    })
}
