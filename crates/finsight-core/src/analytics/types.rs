//! Core types for the analytics engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative slope classification of the monthly expense series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Spending is rising month over month
    Increasing,
    /// Spending is falling month over month
    Decreasing,
    /// No meaningful slope either way
    Stable,
    /// History too sparse to classify
    InsufficientData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
            Trend::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Trend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increasing" => Ok(Trend::Increasing),
            "decreasing" => Ok(Trend::Decreasing),
            "stable" => Ok(Trend::Stable),
            "insufficient_data" => Ok(Trend::InsufficientData),
            _ => Err(format!("Unknown trend: {}", s)),
        }
    }
}

/// Coarse reliability label for a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Confidence::Low),
            "medium" => Ok(Confidence::Medium),
            "high" => Ok(Confidence::High),
            _ => Err(format!("Unknown confidence: {}", s)),
        }
    }
}

/// Next-month spending prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Extrapolated expense total for the coming month, clamped at zero
    pub predicted_amount: f64,
    pub confidence: Confidence,
    pub trend: Trend,
    /// Mean of the monthly expense totals, same units as amount
    pub historical_average: f64,
}

impl PredictionResult {
    /// The declared response for histories too sparse to regress over.
    ///
    /// This is a normal return value, not an error.
    pub fn insufficient_data() -> Self {
        Self {
            predicted_amount: 0.0,
            confidence: Confidence::Low,
            trend: Trend::InsufficientData,
            historical_average: 0.0,
        }
    }
}

/// Combined analytics artifact for one user: prediction, health score,
/// and advice, produced in a single engine pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    pub prediction: PredictionResult,
    /// Financial health score in [0, 100]
    pub score: u8,
    /// At most four prioritized tips
    pub tips: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
