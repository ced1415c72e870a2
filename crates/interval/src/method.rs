//! Confidence-interval method tags.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::IntervalError;

/// Which confidence-interval estimator a request asks for.
///
/// Parsed from the wire tags `t_distribution`, `normal_distribution`, and
/// `arima_distribution`; an unrecognised tag fails with
/// [`IntervalError::UnknownMethod`] before any computation is attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CiMethod {
    /// Student-t standard-error interval from the rolling std.
    TDistribution,
    /// Fixed ±2 rolling-std heuristic interval.
    NormalDistribution,
    /// The ARIMA model's own 95% forecast interval.
    ArimaDistribution,
}

impl CiMethod {
    /// Returns the wire tag for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            CiMethod::TDistribution => "t_distribution",
            CiMethod::NormalDistribution => "normal_distribution",
            CiMethod::ArimaDistribution => "arima_distribution",
        }
    }
}

impl FromStr for CiMethod {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t_distribution" => Ok(CiMethod::TDistribution),
            "normal_distribution" => Ok(CiMethod::NormalDistribution),
            "arima_distribution" => Ok(CiMethod::ArimaDistribution),
            other => Err(IntervalError::UnknownMethod {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
