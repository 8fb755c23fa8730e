use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered `(p_buy, p_sell, p_neutral)` triple.
pub type ProbabilityVector = [f64; 3];

pub const BUY: usize = 0;
pub const SELL: usize = 1;
pub const NEUTRAL: usize = 2;

/// "No information" answer: certain neutral.
pub const CERTAIN_NEUTRAL: ProbabilityVector = [0.0, 0.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

impl SignalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
            SignalDirection::Neutral => "NEUTRAL",
        }
    }

    /// +1 for BUY, -1 for SELL, 0 for NEUTRAL.
    pub fn sign(&self) -> f64 {
        match self {
            SignalDirection::Buy => 1.0,
            SignalDirection::Sell => -1.0,
            SignalDirection::Neutral => 0.0,
        }
    }

    pub fn is_directional(&self) -> bool {
        !matches!(self, SignalDirection::Neutral)
    }

    /// Case-insensitive parse of `BUY`/`SELL`; anything else is NEUTRAL.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "BUY" => SignalDirection::Buy,
            "SELL" => SignalDirection::Sell,
            _ => SignalDirection::Neutral,
        }
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market character label supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Trend,
    Range,
    Shock,
    Stable,
    Unknown,
}

impl Regime {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "trend" => Regime::Trend,
            "range" => Regime::Range,
            "shock" => Regime::Shock,
            "stable" => Regime::Stable,
            _ => Regime::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Trend => "trend",
            Regime::Range => "range",
            Regime::Shock => "shock",
            Regime::Stable => "stable",
            Regime::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final record of one inference call, serialized flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    pub instrument: String,
    pub signal: SignalDirection,
    pub confidence: f64,
    pub entry_zone: (f64, f64),
    pub stop_zone: (f64, f64),
    pub targets: (f64, f64),
    pub risk_fraction: f64,
}
