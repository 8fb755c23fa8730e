//! Background poller that consumes new experience lines.
//!
//! There is no learning here: each new line counts as one step and the
//! reported loss is a synthetic decaying number.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, SeekFrom};
use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use crate::metrics::Metrics;

const STOP_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainerStats {
    pub running: bool,
    pub steps: u64,
    pub last_loss: f64,
    /// Seconds since the Unix epoch
    pub last_update_ts: f64,
}

/// Loss reported after `steps` lines; blank lines add a 0.1 penalty
pub fn proxy_loss(steps: u64, line: &str) -> f64 {
    let base = (1.0 / (1.0 + steps as f64)).max(0.01);
    let penalty = if line.trim().is_empty() { 0.1 } else { 0.0 };
    base + penalty
}

struct TrainerTask {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

pub struct OnlineTrainer {
    experience_path: PathBuf,
    poll_interval: Duration,
    stats: Arc<RwLock<TrainerStats>>,
    /// Bytes of the experience file already consumed; survives restarts
    offset: Arc<AtomicU64>,
    task: Mutex<Option<TrainerTask>>,
    metrics: Option<Arc<Metrics>>,
}

impl OnlineTrainer {
    pub fn new(experience_path: impl AsRef<Path>, poll_interval: Duration) -> Self {
        Self {
            experience_path: experience_path.as_ref().to_path_buf(),
            poll_interval,
            stats: Arc::new(RwLock::new(TrainerStats::default())),
            offset: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Spawn the polling task. Returns false if it is already running.
    pub async fn start(&self) -> bool {
        let mut task = self.task.lock().await;
        if task.as_ref().is_some_and(|t| !t.handle.is_finished()) {
            return false;
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        let poller = Poller {
            path: self.experience_path.clone(),
            poll_interval: self.poll_interval,
            stats: self.stats.clone(),
            metrics: self.metrics.clone(),
            offset: self.offset.clone(),
        };
        let handle = tokio::spawn(poller.run(stop_rx));
        *task = Some(TrainerTask { stop_tx, handle });

        info!(path = %self.experience_path.display(), "OnlineTrainer: started");
        true
    }

    /// Signal the task to stop and wait briefly for it. Returns false if no
    /// task was running.
    pub async fn stop(&self) -> bool {
        let mut task = self.task.lock().await;
        let Some(TrainerTask { stop_tx, mut handle }) = task.take() else {
            return false;
        };

        let _ = stop_tx.send(true);
        if timeout(STOP_GRACE, &mut handle).await.is_err() {
            warn!("OnlineTrainer: did not stop within grace period, aborting");
            handle.abort();
            self.stats.write().await.running = false;
        }

        info!("OnlineTrainer: stopped");
        true
    }

    pub async fn status(&self) -> TrainerStats {
        self.stats.read().await.clone()
    }
}

/// State owned by the polling task
struct Poller {
    path: PathBuf,
    poll_interval: Duration,
    stats: Arc<RwLock<TrainerStats>>,
    metrics: Option<Arc<Metrics>>,
    offset: Arc<AtomicU64>,
}

impl Poller {
    async fn run(self, mut stop_rx: watch::Receiver<bool>) {
        self.stats.write().await.running = true;

        if let Err(e) = self.ensure_file().await {
            warn!(error = %e, path = %self.path.display(), "OnlineTrainer: cannot create experience file");
        }

        loop {
            if *stop_rx.borrow() {
                break;
            }

            match self.read_new_lines().await {
                Ok(lines) if !lines.is_empty() => self.train_on(&lines).await,
                Ok(_) => {}
                Err(e) => warn!(error = %e, "OnlineTrainer: failed to read experiences"),
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
            }
        }

        self.stats.write().await.running = false;
    }

    async fn ensure_file(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        OpenOptions::new().create(true).append(true).open(&self.path).await?;
        Ok(())
    }

    /// Complete lines appended since the last read. A trailing partial line
    /// is left for the next poll.
    async fn read_new_lines(&self) -> std::io::Result<Vec<String>> {
        let offset = self.offset.load(Ordering::SeqCst);
        let mut file = fs::File::open(&self.path).await?;
        file.seek(SeekFrom::Start(offset)).await?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).await?;

        let Some(last_newline) = buf.iter().rposition(|&b| b == b'\n') else {
            return Ok(Vec::new());
        };
        let complete = &buf[..=last_newline];
        self.offset
            .store(offset + complete.len() as u64, Ordering::SeqCst);

        Ok(String::from_utf8_lossy(complete)
            .lines()
            .map(str::to_string)
            .collect())
    }

    async fn train_on(&self, lines: &[String]) {
        let mut stats = self.stats.write().await;
        for line in lines {
            stats.steps += 1;
            stats.last_loss = proxy_loss(stats.steps, line);
        }
        stats.last_update_ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();

        if let Some(ref metrics) = self.metrics {
            metrics.trainer_steps.set(stats.steps as f64);
        }
        debug!(
            steps = stats.steps,
            last_loss = stats.last_loss,
            "OnlineTrainer: consumed {} experiences",
            lines.len()
        );
    }
}
