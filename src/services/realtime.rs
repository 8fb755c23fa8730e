//! Bounded buffer of live bars with an NDJSON mirror, and the collector that feeds it

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, watch, RwLock};
use tokio::time::Duration;
use tracing::{debug, info};

use crate::errors::StoreError;
use crate::models::market::MarketBar;

pub const DEFAULT_CAPACITY: usize = 5000;

/// Append-only ring of the most recent bars.
///
/// Oldest bars are evicted once `capacity` is reached. When a mirror path is
/// set, every appended bar is also written as one JSON line.
pub struct RealTimeBuffer {
    bars: RwLock<VecDeque<MarketBar>>,
    capacity: usize,
    persist_path: Option<PathBuf>,
}

impl RealTimeBuffer {
    /// In-memory buffer without a disk mirror
    pub fn new(capacity: usize) -> Self {
        Self {
            bars: RwLock::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity: capacity.max(1),
            persist_path: None,
        }
    }

    /// Buffer mirrored to `path`; the parent directory is created if missing
    pub async fn with_persistence(capacity: usize, path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let mut buffer = Self::new(capacity);
        buffer.persist_path = Some(path);
        Ok(buffer)
    }

    pub fn persist_path(&self) -> Option<&Path> {
        self.persist_path.as_deref()
    }

    /// Append a bar and return the new buffer size.
    ///
    /// The mirror line is written and flushed under the write lock; file
    /// order matches buffer order.
    pub async fn append(&self, bar: MarketBar) -> Result<usize, StoreError> {
        let mut bars = self.bars.write().await;

        if let Some(ref path) = self.persist_path {
            let mut line = serde_json::to_string(&bar)?;
            line.push('\n');
            let mut file = OpenOptions::new().create(true).append(true).open(path).await?;
            file.write_all(line.as_bytes()).await?;
            file.flush().await?;
        }

        if bars.len() >= self.capacity {
            bars.pop_front();
        }
        bars.push_back(bar);
        Ok(bars.len())
    }

    /// Last `n` bars in chronological order
    pub async fn latest(&self, n: usize) -> Vec<MarketBar> {
        if n == 0 {
            return Vec::new();
        }
        let bars = self.bars.read().await;
        let skip = bars.len().saturating_sub(n);
        bars.iter().skip(skip).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.bars.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bars.read().await.is_empty()
    }
}

type BarCallback = Box<dyn Fn(&MarketBar) + Send + Sync>;

/// Drains a bar stream into a [`RealTimeBuffer`]
pub struct RealTimeCollector {
    buffer: Arc<RealTimeBuffer>,
    callbacks: Vec<BarCallback>,
}

impl RealTimeCollector {
    pub fn new(buffer: Arc<RealTimeBuffer>) -> Self {
        Self {
            buffer,
            callbacks: Vec::new(),
        }
    }

    /// Called with every bar after it is buffered
    pub fn register_callback<F>(&mut self, callback: F)
    where
        F: Fn(&MarketBar) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Consume bars until the stream closes or `stop` flips to true.
    /// Returns the number of bars collected.
    pub async fn run(
        &self,
        mut stream: mpsc::Receiver<MarketBar>,
        mut stop: watch::Receiver<bool>,
    ) -> Result<usize, StoreError> {
        let mut collected = 0;
        loop {
            if *stop.borrow() {
                break;
            }
            tokio::select! {
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        break;
                    }
                }
                next = stream.recv() => {
                    let Some(bar) = next else {
                        debug!("RealTimeCollector: stream closed");
                        break;
                    };
                    self.buffer.append(bar.clone()).await?;
                    for callback in &self.callbacks {
                        callback(&bar);
                    }
                    collected += 1;
                }
            }
        }
        info!(collected = collected, "RealTimeCollector: stopped after {} bars", collected);
        Ok(collected)
    }
}

/// Synthetic drifting bars for paper trading and development.
///
/// Starts at 2300 and rises 0.2 per bar, floored at 1000. The producer task
/// ends when the receiver is dropped.
pub fn mock_bar_stream(interval: Duration) -> mpsc::Receiver<MarketBar> {
    let (tx, rx) = mpsc::channel(64);
    tokio::spawn(async move {
        let drift = 0.2;
        let mut price: f64 = 2300.0;
        loop {
            price = (price + drift).max(1000.0);
            let bar = MarketBar::new(Utc::now(), price - 0.3, price + 0.5, price - 0.7, price, 1000.0)
                .with_source("mock");
            if tx.send(bar).await.is_err() {
                break;
            }
            tokio::time::sleep(interval).await;
        }
    });
    rx
}
