use crate::error::PmsampsizeErr;
use crate::util::error::RootFindErr;

const MAX_BRACKET_EXPANSIONS: usize = 64;
const MAX_BISECTIONS: usize = 200;

/// Given a monotonically increasing function f(x) and lower bound, finds
/// value x' to the right of the lower bound such that f(x') = target
pub fn root_find_monotonic<F>(
    f: F,
    lower_bound: f64,
    target: f64,
    tol: f64,
) -> Result<f64, PmsampsizeErr>
where
    F: Fn(f64) -> f64,
{
    if f(lower_bound) >= target {
        return Err(RootFindErr::BadLowerBound.into());
    }
    // Set window for search
    let mut lower_bound = lower_bound;
    let mut upper_bound = lower_bound;
    let mut f_upper_bound = f(upper_bound);
    let mut expansions = 0;
    while f_upper_bound.is_nan() || f_upper_bound < target {
        if expansions == MAX_BRACKET_EXPANSIONS {
            return Err(RootFindErr::FailedToBracket {
                target,
                iterations: expansions,
            }
            .into());
        }
        upper_bound *= 2.;
        upper_bound += 1.; // In case lower_bound is zero
        f_upper_bound = f(upper_bound);
        expansions += 1;
    }

    // Perform search
    let mut x = (lower_bound + upper_bound) / 2.;
    let mut y = f(x);
    let mut iterations = 0;
    while (lower_bound - upper_bound).abs() > tol / 2. && (y - target).abs() > tol {
        if iterations == MAX_BISECTIONS {
            return Err(RootFindErr::FailedToConverge(MAX_BISECTIONS).into());
        }
        if y <= target {
            lower_bound = x;
        } else {
            upper_bound = x;
        }
        x = (lower_bound + upper_bound) / 2.;
        y = f(x);
        iterations += 1;
    }
    Ok(x)
}

/// Given a predicate that fails below some size and holds from that size
/// onwards, finds the smallest size >= start for which it holds.
/// Sizes larger than cap are never evaluated.
pub fn min_size_satisfying<P>(predicate: P, start: u64, cap: u64) -> Result<u64, PmsampsizeErr>
where
    P: Fn(u64) -> Result<bool, PmsampsizeErr>,
{
    if start > cap {
        return Err(RootFindErr::ExceededCap { cap }.into());
    }
    if predicate(start)? {
        return Ok(start);
    }

    //----------------------------------------
    // Bracket: predicate fails at lower, holds at upper
    //----------------------------------------
    let mut lower = start;
    let mut step: u64 = 1;
    let mut upper = loop {
        let candidate = start.saturating_add(step).min(cap);
        if predicate(candidate)? {
            break candidate;
        }
        if candidate == cap {
            return Err(RootFindErr::ExceededCap { cap }.into());
        }
        lower = candidate;
        step = step.saturating_mul(2);
    };

    //----------------------------------------
    // Bisect
    //----------------------------------------
    while upper - lower > 1 {
        let mid = lower + (upper - lower) / 2;
        if predicate(mid)? {
            upper = mid;
        } else {
            lower = mid;
        }
    }
    Ok(upper)
}
