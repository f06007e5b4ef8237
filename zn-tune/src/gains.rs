use std::fmt;

use serde::Serialize;

/// Where the closed loop sits on the edge of stability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    /// Ultimate gain `kc`.
    pub gain: f64,
    /// Period `pc` of the sustained oscillation at `gain`.
    pub period: f64,
}

/// Discrete PID gains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

/// Renders like C's `%6.4f`: right-aligned in six columns with four decimals.
impl fmt::Display for Gains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kp = {}, ki = {}, kd = {}",
            Fixed(self.kp),
            Fixed(self.ki),
            Fixed(self.kd)
        )
    }
}

struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rust spells it `NaN`, printf spells it `nan`. Infinities already agree.
        if self.0.is_nan() {
            write!(f, "{:>6}", "nan")
        } else {
            write!(f, "{:6.4}", self.0)
        }
    }
}
