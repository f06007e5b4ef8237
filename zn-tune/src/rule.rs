use serde::Serialize;

use crate::{CriticalPoint, Gains, TuningError};

/// A Ziegler–Nichols style tuning rule.
///
/// Every rule scales the critical gain for `kp` and derives the integral and
/// derivative times as fractions of the critical period.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Classic PID: kp = 0.6 kc, Ti = pc/2, Td = pc/8
    #[default]
    Classic,
    /// Proportional only: kp = 0.5 kc
    P,
    /// PI: kp = 0.45 kc, Ti = pc/1.2
    Pi,
    /// PD: kp = 0.8 kc, Td = pc/8
    Pd,
    /// Pessen integral rule: kp = 0.7 kc, Ti = pc/2.5, Td = 3 pc/20
    Pessen,
    /// Some overshoot: kp = kc/3, Ti = pc/2, Td = pc/3
    SomeOvershoot,
    /// No overshoot: kp = 0.2 kc, Ti = pc/2, Td = pc/3
    NoOvershoot,
}

/// `Ti = pc / ti_div`, `Td = pc / td_div`. A missing divisor disables the term.
struct Coefficients {
    kp_factor: f64,
    ti_div: Option<f64>,
    td_div: Option<f64>,
}

impl Rule {
    fn coefficients(self) -> Coefficients {
        let (kp_factor, ti_div, td_div) = match self {
            Rule::Classic => (0.6, Some(2.0), Some(8.0)),
            Rule::P => (0.5, None, None),
            Rule::Pi => (0.45, Some(1.2), None),
            Rule::Pd => (0.8, None, Some(8.0)),
            Rule::Pessen => (0.7, Some(2.5), Some(20.0 / 3.0)),
            Rule::SomeOvershoot => (1.0 / 3.0, Some(2.0), Some(3.0)),
            Rule::NoOvershoot => (0.2, Some(2.0), Some(3.0)),
        };
        Coefficients {
            kp_factor,
            ti_div,
            td_div,
        }
    }

    /// Computes the discrete gains for a controller sampled every `dt`.
    ///
    /// Fails if the critical period or `dt` is zero, regardless of whether the
    /// rule uses the terms that divide by them.
    pub fn tune(self, critical: CriticalPoint, dt: f64) -> Result<Gains, TuningError> {
        let pc = critical.period;
        if pc == 0.0 {
            return Err(TuningError::DivisionByZero { name: "pc" });
        }
        if dt == 0.0 {
            return Err(TuningError::DivisionByZero { name: "dt" });
        }

        let Coefficients {
            kp_factor,
            ti_div,
            td_div,
        } = self.coefficients();
        let kp = kp_factor * critical.gain;
        let ki = ti_div.map_or(0.0, |ti_div| ti_div * kp * dt / pc);
        let kd = td_div.map_or(0.0, |td_div| kp * pc / (td_div * dt));

        Ok(Gains { kp, ki, kd })
    }
}
