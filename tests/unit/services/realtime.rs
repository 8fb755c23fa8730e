//! Unit tests for the realtime buffer and collector

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use tempfile::tempdir;
use tokio::sync::{mpsc, watch};
use xausignal::models::market::MarketBar;
use xausignal::services::realtime::{mock_bar_stream, RealTimeBuffer, RealTimeCollector};

fn bar(i: i64, close: f64) -> MarketBar {
    let start = Utc.with_ymd_and_hms(2026, 2, 21, 0, 0, 0).unwrap();
    MarketBar::new(start + Duration::minutes(i), close, close + 1.0, close - 1.0, close, 10.0)
}

#[tokio::test]
async fn test_buffer_evicts_oldest() {
    let buffer = RealTimeBuffer::new(3);
    for i in 0..5 {
        buffer.append(bar(i, 2300.0 + i as f64)).await.unwrap();
    }
    assert_eq!(buffer.len().await, 3);
    let closes: Vec<f64> = buffer.latest(10).await.iter().map(|b| b.close).collect();
    assert_eq!(closes, vec![2302.0, 2303.0, 2304.0]);
}

#[tokio::test]
async fn test_latest_is_chronological_and_bounded() {
    let buffer = RealTimeBuffer::new(10);
    for i in 0..4 {
        buffer.append(bar(i, i as f64)).await.unwrap();
    }
    let latest = buffer.latest(2).await;
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].close, 2.0);
    assert_eq!(latest[1].close, 3.0);
    assert!(buffer.latest(0).await.is_empty());
}

#[tokio::test]
async fn test_buffer_mirrors_to_ndjson() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("bars.ndjson");
    let buffer = RealTimeBuffer::with_persistence(100, &path).await.unwrap();

    assert_eq!(buffer.append(bar(0, 2300.0)).await.unwrap(), 1);
    assert_eq!(buffer.append(bar(1, 2301.0)).await.unwrap(), 2);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let restored: MarketBar = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(restored, bar(1, 2301.0));
}

#[tokio::test]
async fn test_every_append_is_on_disk_when_it_returns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bars.ndjson");
    let buffer = RealTimeBuffer::with_persistence(50, &path).await.unwrap();

    for i in 0..200 {
        buffer.append(bar(i, 2300.0 + i as f64)).await.unwrap();
        let lines = std::fs::read_to_string(&path).unwrap().lines().count();
        assert_eq!(lines, i as usize + 1, "append {} not on disk", i);
    }
}

#[tokio::test]
async fn test_concurrent_appends_keep_disk_and_buffer_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bars.ndjson");
    let buffer = Arc::new(RealTimeBuffer::with_persistence(100, &path).await.unwrap());

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let buffer = buffer.clone();
            tokio::spawn(async move { buffer.append(bar(i, 2300.0 + i as f64)).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let on_disk: Vec<MarketBar> = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(on_disk, buffer.latest(100).await);
}

#[tokio::test]
async fn test_collector_drains_stream_and_fires_callbacks() {
    let buffer = Arc::new(RealTimeBuffer::new(100));
    let seen = Arc::new(AtomicUsize::new(0));
    let mut collector = RealTimeCollector::new(buffer.clone());
    let counter = seen.clone();
    collector.register_callback(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let (tx, rx) = mpsc::channel(8);
    let (_stop_tx, stop_rx) = watch::channel(false);
    for i in 0..3 {
        tx.send(bar(i, 2300.0)).await.unwrap();
    }
    drop(tx);

    let collected = collector.run(rx, stop_rx).await.unwrap();
    assert_eq!(collected, 3);
    assert_eq!(seen.load(Ordering::SeqCst), 3);
    assert_eq!(buffer.len().await, 3);
}

#[tokio::test]
async fn test_collector_stops_on_signal() {
    let buffer = Arc::new(RealTimeBuffer::new(100));
    let collector = RealTimeCollector::new(buffer);
    let (_tx, rx) = mpsc::channel::<MarketBar>(8);
    let (stop_tx, stop_rx) = watch::channel(false);

    let handle = tokio::spawn(async move { collector.run(rx, stop_rx).await });
    stop_tx.send(true).unwrap();
    let collected = handle.await.unwrap().unwrap();
    assert_eq!(collected, 0);
}

#[tokio::test]
async fn test_mock_stream_drifts_upward() {
    let mut rx = mock_bar_stream(std::time::Duration::from_millis(1));
    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(first.source, "mock");
    assert!(second.close > first.close);
    assert!(first.low <= first.close && first.close <= first.high);
}
