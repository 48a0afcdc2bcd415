use crate::distribution::error::DistributionErr;
use crate::error::PmsampsizeErr;
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal, StudentsT};

fn check_probability(p: f64) -> Result<(), PmsampsizeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(DistributionErr::QuantileOutOfBounds(p).into());
    }
    Ok(())
}

fn check_df(df: f64) -> Result<(), PmsampsizeErr> {
    if !(df > 0.0 && df.is_finite()) {
        return Err(DistributionErr::BadDegreesOfFreedom(df).into());
    }
    Ok(())
}

pub fn std_normal_quantile(p: f64) -> Result<f64, PmsampsizeErr> {
    check_probability(p)?;
    let std_normal = Normal::new(0.0, 1.0).map_err(|e| DistributionErr::Construction {
        name: "normal",
        reason: e.to_string(),
    })?;
    Ok(std_normal.inverse_cdf(p))
}

pub fn students_t_quantile(p: f64, df: f64) -> Result<f64, PmsampsizeErr> {
    check_probability(p)?;
    check_df(df)?;
    let t = StudentsT::new(0.0, 1.0, df).map_err(|e| DistributionErr::Construction {
        name: "Student's t",
        reason: e.to_string(),
    })?;
    Ok(t.inverse_cdf(p))
}

pub fn chi_squared_quantile(p: f64, df: f64) -> Result<f64, PmsampsizeErr> {
    check_probability(p)?;
    check_df(df)?;
    let chi_sq = ChiSquared::new(df).map_err(|e| DistributionErr::Construction {
        name: "chi-squared",
        reason: e.to_string(),
    })?;
    Ok(chi_sq.inverse_cdf(p))
}

/// Two-sided critical value of the standard normal for the given
/// confidence level, e.g. 1.96 for 0.95
pub fn two_sided_z(confidence_level: f64) -> Result<f64, PmsampsizeErr> {
    std_normal_quantile(1. - (1. - confidence_level) / 2.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_normal_quantile_err() {
        if let Err(e) = std_normal_quantile(1.1) {
            assert_eq!(
                String::from(
                    "while evaluating distribution: arguments to \
                    quantile function should be in (0, 1); got 1.1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn std_normal_quantile_value() {
        assert!((std_normal_quantile(0.975).unwrap() - 1.96).abs() < 0.0001)
    }

    #[test]
    fn std_normal_quantile_symmetric() {
        let upper = std_normal_quantile(0.975).unwrap();
        let lower = std_normal_quantile(0.025).unwrap();
        assert!((upper + lower).abs() < 1e-9)
    }

    #[test]
    fn two_sided_z_95() {
        assert!((two_sided_z(0.95).unwrap() - 1.959964).abs() < 1e-6)
    }

    #[test]
    fn t_quantile_value() {
        assert!((students_t_quantile(0.975, 10.).unwrap() - 2.228139).abs() < 1e-5)
    }

    #[test]
    fn t_quantile_large_df_approaches_normal() {
        let t = students_t_quantile(0.975, 100_000.).unwrap();
        assert!((t - 1.959964).abs() < 1e-3)
    }

    #[test]
    fn chi_squared_quantile_values() {
        assert!((chi_squared_quantile(0.025, 10.).unwrap() - 3.246973).abs() < 1e-4);
        let upper = chi_squared_quantile(0.975, 10.).unwrap();
        assert!((upper - 20.48318).abs() / 20.48318 < 1e-4);
    }

    #[test]
    fn bad_df() {
        if let Err(e) = chi_squared_quantile(0.5, 0.) {
            assert_eq!(
                String::from(
                    "while evaluating distribution: degrees of freedom should be positive; got 0"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
