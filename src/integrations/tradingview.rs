//! Local store of analyses pushed by TradingView alerts/webhooks

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::errors::StoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingViewAnalysis {
    pub timestamp: String,
    pub symbol: String,
    pub timeframe: String,
    pub source: String,
    pub note: String,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub macd: Option<f64>,
    #[serde(default)]
    pub chaikin_ad: Option<f64>,
    #[serde(default)]
    pub fundamental_bias: Option<f64>,
    #[serde(default)]
    pub chart_image_url: Option<String>,
}

fn text_field(payload: &Value, key: &str, default: &str) -> String {
    match payload.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn optional_text(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}

fn optional_number(payload: &Value, key: &str) -> Option<f64> {
    payload.get(key).and_then(Value::as_f64)
}

/// Build an analysis from a loose alert payload, filling defaults for the
/// identifying fields.
pub fn build_analysis_from_payload(payload: &Value) -> TradingViewAnalysis {
    let now = Utc::now().to_rfc3339();
    TradingViewAnalysis {
        timestamp: text_field(payload, "timestamp", &now),
        symbol: text_field(payload, "symbol", "XAUUSD"),
        timeframe: text_field(payload, "timeframe", "1H"),
        source: text_field(payload, "source", "tradingview"),
        note: text_field(payload, "note", "alert received"),
        pattern: optional_text(payload, "pattern"),
        rsi: optional_number(payload, "rsi"),
        macd: optional_number(payload, "macd"),
        chaikin_ad: optional_number(payload, "chaikin_ad"),
        fundamental_bias: optional_number(payload, "fundamental_bias"),
        chart_image_url: optional_text(payload, "chart_image_url"),
    }
}

/// NDJSON-backed alert store
pub struct TradingViewFeed {
    path: PathBuf,
}

impl TradingViewFeed {
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, analysis: &TradingViewAnalysis) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(analysis)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Last `n` stored analyses, oldest first. Malformed lines are skipped.
    pub async fn latest(&self, n: usize) -> Result<Vec<TradingViewAnalysis>, StoreError> {
        if n == 0 || fs::metadata(&self.path).await.is_err() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).await?;
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        let skip = lines.len().saturating_sub(n);

        let mut out = Vec::new();
        for line in &lines[skip..] {
            match serde_json::from_str::<TradingViewAnalysis>(line) {
                Ok(analysis) => out.push(analysis),
                Err(e) => warn!(error = %e, "TradingViewFeed: skipping malformed line"),
            }
        }
        Ok(out)
    }
}
