use serde::{Deserialize, Serialize};

/// Sparse macro snapshot. A missing field is excluded from the bias score,
/// it is never read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    #[serde(default)]
    pub usd_index: Option<f64>,
    #[serde(default)]
    pub real_yield_10y: Option<f64>,
    #[serde(default)]
    pub fed_rate: Option<f64>,
    /// Expected in [-1, 1]; higher means more risk aversion.
    #[serde(default)]
    pub risk_aversion_score: Option<f64>,
}

impl FundamentalSnapshot {
    pub fn with_usd_index(mut self, value: f64) -> Self {
        self.usd_index = Some(value);
        self
    }

    pub fn with_real_yield_10y(mut self, value: f64) -> Self {
        self.real_yield_10y = Some(value);
        self
    }

    pub fn with_fed_rate(mut self, value: f64) -> Self {
        self.fed_rate = Some(value);
        self
    }

    pub fn with_risk_aversion_score(mut self, value: f64) -> Self {
        self.risk_aversion_score = Some(value);
        self
    }
}
