//! Ziegler–Nichols PID tuning.
//!
//! Derives discrete PID gains from the critical point of a closed loop: the gain
//! `kc` at which the loop oscillates with constant amplitude, and the period `pc`
//! of that oscillation. The gains are scaled by the controller's sample interval
//! `dt`, so `ki` and `kd` are per-sample coefficients.
//!
//! # Examples
//!
//! ```
//! use zn_tune::{CriticalPoint, Rule};
//!
//! let critical = CriticalPoint { gain: 10.0, period: 2.0 };
//! let gains = Rule::Classic.tune(critical, 1.0).unwrap();
//! assert_eq!(gains.to_string(), "kp = 6.0000, ki = 6.0000, kd = 1.5000");
//! ```

#![forbid(unsafe_code)]

mod gains;
mod report;
mod rule;

pub use self::gains::{CriticalPoint, Gains};
pub use self::report::{OutputFormat, Report};
pub use self::rule::Rule;

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TuningError {
    #[error("{value:?} is not a number")]
    Parse {
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("division by zero: {name} must be nonzero")]
    DivisionByZero { name: &'static str },
}

/// Parses a command-line number. Surrounding whitespace is ignored.
pub fn parse_number(s: &str) -> Result<f64, TuningError> {
    s.trim().parse().map_err(|source| TuningError::Parse {
        value: s.to_owned(),
        source,
    })
}
