use serde::{Deserialize, Serialize};

pub const HOURS_PER_WEEK: f64 = 40.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// 40 hours x 52 weeks.
pub const HOURS_PER_YEAR: f64 = HOURS_PER_WEEK * WEEKS_PER_YEAR;

/// How the developer rate of a scenario is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    #[default]
    Hourly,
    Annual,
}

/// Developer rate resolved into both conventions. The hourly figure feeds
/// development costs, the annual (OTE) figure feeds onboarding and maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedRate {
    pub hourly: f64,
    pub annual: f64,
}

impl ResolvedRate {
    pub fn resolve(rate: f64, basis: RateBasis) -> Self {
        match basis {
            RateBasis::Hourly => Self {
                hourly: rate,
                annual: rate * HOURS_PER_YEAR,
            },
            RateBasis::Annual => Self {
                hourly: rate / HOURS_PER_YEAR,
                annual: rate,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_rate_expands_to_annual_ote() {
        let rate = ResolvedRate::resolve(45.0, RateBasis::Hourly);
        assert_eq!(rate.hourly, 45.0);
        assert_eq!(rate.annual, 93_600.0);
    }

    #[test]
    fn annual_salary_derives_hourly_rate() {
        let rate = ResolvedRate::resolve(93_600.0, RateBasis::Annual);
        assert_eq!(rate.annual, 93_600.0);
        assert_eq!(rate.hourly, 45.0);
    }
}
