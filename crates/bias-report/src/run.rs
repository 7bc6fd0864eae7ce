//! Verification-run bookkeeping.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One model-vs-analysis verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    /// Canonical model key (e.g., "hrrr").
    pub model_key: String,
    /// Cycle (initialization) time of the forecast.
    pub cycle: DateTime<Utc>,
    /// Forecast lead time in hours.
    pub forecast_hour: u32,
}

impl RunSpec {
    /// Create a run spec.
    pub fn new(model_key: impl Into<String>, cycle: DateTime<Utc>, forecast_hour: u32) -> Self {
        Self {
            model_key: model_key.into(),
            cycle,
            forecast_hour,
        }
    }

    /// The forecast valid time: cycle plus lead time.
    ///
    /// Day/month/year rollovers are handled by the datetime arithmetic.
    pub fn valid_time(&self) -> DateTime<Utc> {
        self.cycle + Duration::hours(i64::from(self.forecast_hour))
    }

    /// Caption line for a report, e.g.
    /// `HRRR - RTMA: 2 Meter Temperature Difference | Valid: 2026-02-01 06:00Z | Init: 2026-02-01 00:00Z | Forecast Hour: 6`.
    pub fn title(&self, var_title: &str) -> String {
        format!(
            "{} - RTMA: {} Difference | Valid: {} | Init: {} | Forecast Hour: {}",
            self.model_key.to_uppercase(),
            var_title,
            self.valid_time().format("%Y-%m-%d %H:%MZ"),
            self.cycle.format("%Y-%m-%d %H:%MZ"),
            self.forecast_hour,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_valid_time_simple() {
        let cycle = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let run = RunSpec::new("hrrr", cycle, 6);
        assert_eq!(
            run.valid_time(),
            Utc.with_ymd_and_hms(2026, 2, 1, 18, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_valid_time_rolls_over_midnight() {
        let cycle = Utc.with_ymd_and_hms(2026, 12, 31, 18, 0, 0).unwrap();
        let run = RunSpec::new("gfs", cycle, 12);
        assert_eq!(
            run.valid_time(),
            Utc.with_ymd_and_hms(2027, 1, 1, 6, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_title() {
        let cycle = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let run = RunSpec::new("hrrr", cycle, 6);
        let title = run.title("2 Meter Temperature");
        assert!(title.starts_with("HRRR - RTMA: 2 Meter Temperature Difference"));
        assert!(title.contains("Valid: 2026-02-01 06:00Z"));
        assert!(title.contains("Init: 2026-02-01 00:00Z"));
        assert!(title.contains("Forecast Hour: 6"));
    }
}
