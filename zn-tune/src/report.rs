use serde::Serialize;

use crate::{CriticalPoint, Gains, Rule, TuningError};

/// How the result line is rendered on stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `kp = 1.2000, ki = 0.2400, kd = 1.5000`
    #[default]
    Text,
    /// Single line JSON object with the inputs and full precision gains
    Json,
}

/// The outcome of one tuning run, together with what produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub rule: Rule,
    pub kc: f64,
    pub pc: f64,
    pub dt: f64,
    #[serde(flatten)]
    pub gains: Gains,
}

impl Report {
    pub fn new(rule: Rule, critical: CriticalPoint, dt: f64) -> Result<Self, TuningError> {
        let gains = rule.tune(critical, dt)?;
        Ok(Self {
            rule,
            kc: critical.gain,
            pc: critical.period,
            dt,
            gains,
        })
    }

    /// Renders the report without a trailing newline.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.gains.to_string()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(kc: f64, pc: f64, dt: f64) -> Report {
        Report::new(
            Rule::Classic,
            CriticalPoint {
                gain: kc,
                period: pc,
            },
            dt,
        )
        .unwrap()
    }

    #[test]
    fn test_text() {
        assert_eq!(
            report(2.0, 1.0, 0.1).render(OutputFormat::Text).unwrap(),
            "kp = 1.2000, ki = 0.2400, kd = 1.5000"
        );
    }

    #[test]
    fn test_json() {
        let json = report(10.0, 2.0, 1.0).render(OutputFormat::Json).unwrap();
        assert_eq!(
            json,
            r#"{"rule":"classic","kc":10.0,"pc":2.0,"dt":1.0,"kp":6.0,"ki":6.0,"kd":1.5}"#
        );
    }

    #[test]
    fn test_json_non_finite_is_null() {
        let json = report(f64::INFINITY, 1.0, 1.0)
            .render(OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["kc"].is_null());
        assert!(value["kp"].is_null());
    }

    #[test]
    fn test_propagates_tuning_error() {
        let err = Report::new(
            Rule::Pi,
            CriticalPoint {
                gain: 1.0,
                period: 1.0,
            },
            0.0,
        )
        .unwrap_err();
        assert_eq!(err, TuningError::DivisionByZero { name: "dt" });
    }
}
