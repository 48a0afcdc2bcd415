//----------------------------------------
// Formulas shared by the calculators
//----------------------------------------
use crate::error::PmsampsizeErr;
use crate::sample_size::error::DomainError;
use crate::sample_size::types::Criterion;
use crate::util::error::RootFindErr;
use crate::util::root_find::{min_size_satisfying, root_find_monotonic};

/// Rounds a required sample size up to whole subjects. Values within 1e-9
/// of an integer are not bumped.
pub(crate) fn ceil_sample_size(
    criterion: Criterion,
    n: f64,
    cap: u64,
) -> Result<u64, PmsampsizeErr> {
    if n.is_nan() {
        return Err(DomainError::Undefined { criterion }.into());
    }
    if !n.is_finite() || n > cap as f64 {
        return Err(DomainError::Unbounded { criterion, cap }.into());
    }
    Ok((n - 1e-9).ceil().max(1.) as u64)
}

/// Integer search for the smallest size satisfying a criterion; running
/// past the cap is reported against the criterion
pub(crate) fn bounded_search<P>(
    criterion: Criterion,
    predicate: P,
    start: u64,
    cap: u64,
) -> Result<u64, PmsampsizeErr>
where
    P: Fn(u64) -> Result<bool, PmsampsizeErr>,
{
    match min_size_satisfying(predicate, start, cap) {
        Err(PmsampsizeErr::RootFind(RootFindErr::ExceededCap { cap })) => {
            Err(DomainError::Unbounded { criterion, cap }.into())
        }
        res => res,
    }
}

/// Sample size at which a model with the given Cox-Snell R-squared and
/// number of parameters has expected shrinkage `shrinkage`:
/// n = p / ((S - 1) ln(1 - R2 / S))
pub(crate) fn shrinkage_sample_size(
    criterion: Criterion,
    rsquared: f64,
    parameters: u32,
    shrinkage: f64,
    cap: u64,
) -> Result<u64, PmsampsizeErr> {
    let ratio = rsquared / shrinkage;
    if ratio >= 1.0 {
        return Err(match criterion {
            Criterion::Shrinkage => DomainError::ShrinkageBelowRsquared {
                rsquared,
                shrinkage,
            },
            _ => DomainError::Unattainable {
                criterion,
                rsquared,
            },
        }
        .into());
    }
    let n = parameters as f64 / ((shrinkage - 1.) * (1. - ratio).ln());
    ceil_sample_size(criterion, n, cap)
}

/// Expected shrinkage at sample size n, the root in (R2, 1) of
/// S = 1 + p / (n ln(1 - R2 / S))
pub(crate) fn expected_shrinkage(
    rsquared: f64,
    parameters: u32,
    n: u64,
    tol: f64,
) -> Result<f64, PmsampsizeErr> {
    let p = parameters as f64;
    let n = n as f64;
    let gap = |s: f64| s - 1. - p / (n * (1. - rsquared / s).ln());
    root_find_monotonic(gap, rsquared, 0., tol)
}

/// Target shrinkage that limits the optimism in apparent Nagelkerke
/// R-squared to `difference`
pub(crate) fn optimism_shrinkage(rsquared: f64, max_rsquared: f64, difference: f64) -> f64 {
    rsquared / (rsquared + difference * max_rsquared)
}

/// Largest Cox-Snell R-squared attainable for a binary outcome
pub(crate) fn max_rsquared_binary(prevalence: f64) -> f64 {
    let ln_null = prevalence * prevalence.ln() + (1. - prevalence) * (1. - prevalence).ln();
    1. - (2. * ln_null).exp()
}

/// Largest Cox-Snell R-squared attainable for a time-to-event outcome with
/// the given expected events per subject
pub(crate) fn max_rsquared_survival(events_per_subject: f64) -> f64 {
    let ln_null = events_per_subject * events_per_subject.ln() - events_per_subject;
    1. - (2. * ln_null).exp()
}

pub(crate) fn check_max_rsquared(rsquared: f64, max_rsquared: f64) -> Result<(), PmsampsizeErr> {
    if !(rsquared < max_rsquared) {
        return Err(DomainError::RsquaredExceedsMax {
            rsquared,
            max_rsquared,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_absorbs_noise() {
        assert_eq!(
            ceil_sample_size(Criterion::Shrinkage, 401.000000000001, 1_000).unwrap(),
            401
        );
        assert_eq!(ceil_sample_size(Criterion::Shrinkage, 400.2, 1_000).unwrap(), 401);
        assert_eq!(ceil_sample_size(Criterion::Shrinkage, 0.3, 1_000).unwrap(), 1);
    }

    #[test]
    fn ceil_keeps_small_excess_near_cap() {
        assert_eq!(
            ceil_sample_size(Criterion::Shrinkage, 12345678.00001, 100_000_000).unwrap(),
            12345679
        );
    }

    #[test]
    fn ceil_rejects_infinite() {
        if let Err(e) = ceil_sample_size(Criterion::Shrinkage, f64::INFINITY, 1_000) {
            assert_eq!(
                String::from(
                    "while computing sample size: \
                    shrinkage criterion requires more than 1000 subjects"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
        assert!(ceil_sample_size(Criterion::Shrinkage, f64::NAN, 1_000).is_err());
    }

    #[test]
    fn shrinkage_closed_form() {
        let n = shrinkage_sample_size(Criterion::Shrinkage, 0.288, 24, 0.9, 1_000_000)
            .expect("failed to compute shrinkage sample size");
        assert_eq!(n, 623);
    }

    #[test]
    fn shrinkage_below_rsquared() {
        let res = shrinkage_sample_size(Criterion::Shrinkage, 0.5, 10, 0.4, 1_000_000);
        assert_eq!(
            res,
            Err(DomainError::ShrinkageBelowRsquared {
                rsquared: 0.5,
                shrinkage: 0.4
            }
            .into())
        );
    }

    #[test]
    fn optimism_target_unattainable() {
        if let Err(e) =
            shrinkage_sample_size(Criterion::RsquaredDifference, 0.5, 10, 0.45, 1_000_000)
        {
            assert_eq!(
                String::from(
                    "while computing sample size: R-squared difference criterion cannot be \
                    met with anticipated R-squared 0.5; reduce the acceptable R-squared difference"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn full_shrinkage_unbounded() {
        let res = shrinkage_sample_size(Criterion::Shrinkage, 0.288, 24, 1.0, 1_000_000);
        assert_eq!(
            res,
            Err(DomainError::Unbounded {
                criterion: Criterion::Shrinkage,
                cap: 1_000_000
            }
            .into())
        );
    }

    #[test]
    fn tiny_rsquared_unbounded() {
        let res = shrinkage_sample_size(Criterion::Shrinkage, 1e-9, 24, 0.9, 100_000_000);
        assert!(matches!(
            res,
            Err(PmsampsizeErr::Domain(DomainError::Unbounded { .. }))
        ));
    }

    #[test]
    fn expected_shrinkage_inverts_closed_form() {
        let n = shrinkage_sample_size(Criterion::Shrinkage, 0.288, 24, 0.9, 1_000_000)
            .expect("failed to compute shrinkage sample size");
        let s = expected_shrinkage(0.288, 24, n, 1e-10).expect("failed to find shrinkage");
        assert!(s >= 0.9);
        assert!((s - 0.9).abs() < 0.001);
    }

    #[test]
    fn expected_shrinkage_grows_with_n() {
        let small = expected_shrinkage(0.288, 24, 200, 1e-10).unwrap();
        let large = expected_shrinkage(0.288, 24, 2_000, 1e-10).unwrap();
        assert!(small < large);
        assert!(large < 1.);
    }

    #[test]
    fn max_rsquared_values() {
        assert!((max_rsquared_binary(0.174) - 0.6032087).abs() < 1e-6);
        assert!((max_rsquared_binary(0.5) - 0.75).abs() < 1e-12);
        assert!((max_rsquared_survival(0.065 * 2.07) - 0.5546372).abs() < 1e-6);
    }

    #[test]
    fn optimism_target() {
        let s = optimism_shrinkage(0.288, max_rsquared_binary(0.174), 0.05);
        assert!((s - 0.9052037).abs() < 1e-6);
    }

    #[test]
    fn rsquared_above_max() {
        assert!(check_max_rsquared(0.5, 0.6).is_ok());
        if let Err(e) = check_max_rsquared(0.75, 0.75) {
            assert_eq!(
                String::from(
                    "while computing sample size: anticipated Cox-Snell R-squared (0.75) \
                    should be smaller than the maximum attainable for this outcome (0.75)"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn search_reports_criterion() {
        let res = bounded_search(Criterion::RiskPrecision, |n| Ok(n > 10_000), 1, 500);
        assert_eq!(
            res,
            Err(DomainError::Unbounded {
                criterion: Criterion::RiskPrecision,
                cap: 500
            }
            .into())
        );
    }
}
