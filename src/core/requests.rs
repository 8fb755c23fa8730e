//! Request bodies of the HTTP API and their validation into engine inputs

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::fundamentals::FundamentalSnapshot;
use crate::models::market::MarketBar;
use crate::models::signal::{ProbabilityVector, Regime};
use crate::models::vote::TimeframeVote;
use crate::signals::engine::SignalInput;

fn finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
        })
    }
}

fn in_range(field: &str, value: f64, min: f64, max: f64, expected: &'static str) -> Result<f64, ValidationError> {
    let value = finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            expected,
        });
    }
    Ok(value)
}

fn positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            expected: "> 0",
        });
    }
    Ok(value)
}

fn probability_vector(field: &str, values: &[f64]) -> Result<ProbabilityVector, ValidationError> {
    let probs: ProbabilityVector = values
        .try_into()
        .map_err(|_| ValidationError::ProbabilityLength {
            field: field.to_string(),
            len: values.len(),
        })?;
    for p in probs {
        finite(field, p)?;
    }
    Ok(probs)
}

fn optional_finite(field: &str, value: Option<f64>) -> Result<Option<f64>, ValidationError> {
    value.map(|v| finite(field, v)).transpose()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteInput {
    pub timeframe: String,
    /// `[buy, sell, neutral]`
    pub probs: Vec<f64>,
    pub confidence: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRequest {
    pub price: f64,
    pub atr: f64,
    pub pattern_quality: f64,
    #[serde(default = "default_regime")]
    pub regime: String,
    pub d1_probs: Vec<f64>,
    pub votes: Vec<VoteInput>,
    #[serde(default = "default_chaikin_ok")]
    pub chaikin_ok: bool,
    #[serde(default)]
    pub fundamentals: Option<FundamentalSnapshot>,
}

fn default_regime() -> String {
    "range".to_string()
}

fn default_chaikin_ok() -> bool {
    true
}

impl SignalRequest {
    /// Reject malformed shapes and out-of-domain values
    pub fn into_input(self) -> Result<SignalInput, ValidationError> {
        let price = positive("price", self.price)?;
        let atr = positive("atr", self.atr)?;
        let pattern_quality = in_range("pattern_quality", self.pattern_quality, 0.0, 1.0, "[0, 1]")?;
        let d1_probs = probability_vector("d1_probs", &self.d1_probs)?;

        let votes = self
            .votes
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                let probs = probability_vector(&format!("votes[{}].probs", i), &v.probs)?;
                let confidence =
                    in_range(&format!("votes[{}].confidence", i), v.confidence, 0.0, 1.0, "[0, 1]")?;
                let weight = in_range(&format!("votes[{}].weight", i), v.weight, 0.0, f64::MAX, ">= 0")?;
                Ok(TimeframeVote::new(v.timeframe, probs, confidence, weight))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let fundamentals = self
            .fundamentals
            .map(|f| -> Result<FundamentalSnapshot, ValidationError> {
                Ok(FundamentalSnapshot {
                    usd_index: optional_finite("fundamentals.usd_index", f.usd_index)?,
                    real_yield_10y: optional_finite("fundamentals.real_yield_10y", f.real_yield_10y)?,
                    fed_rate: optional_finite("fundamentals.fed_rate", f.fed_rate)?,
                    risk_aversion_score: f
                        .risk_aversion_score
                        .map(|v| in_range("fundamentals.risk_aversion_score", v, -1.0, 1.0, "[-1, 1]"))
                        .transpose()?,
                })
            })
            .transpose()?;

        Ok(SignalInput {
            price,
            atr,
            votes,
            d1_probs,
            pattern_quality,
            regime: Regime::from_label(&self.regime),
            fundamentals,
            chaikin_ok: self.chaikin_ok,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketBarInput {
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(default = "default_bar_source")]
    pub source: String,
}

fn default_bar_source() -> String {
    "api".to_string()
}

/// RFC 3339 (`Z` or offset); a timestamp without offset is read as UTC
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| ValidationError::Timestamp {
            field: "timestamp".to_string(),
            value: value.to_string(),
        })
}

impl MarketBarInput {
    pub fn into_bar(self) -> Result<MarketBar, ValidationError> {
        let timestamp = parse_timestamp(&self.timestamp)?;
        Ok(MarketBar {
            timestamp,
            open: finite("open", self.open)?,
            high: finite("high", self.high)?,
            low: finite("low", self.low)?,
            close: finite("close", self.close)?,
            volume: finite("volume", self.volume)?,
            source: self.source,
        })
    }
}
