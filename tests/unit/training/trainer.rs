//! Unit tests for the online trainer stub

use std::time::Duration;

use tempfile::tempdir;
use xausignal::training::experience::{Experience, ExperienceBuffer};
use xausignal::training::trainer::{proxy_loss, OnlineTrainer};

fn experience(id: &str) -> Experience {
    Experience {
        state_id: id.to_string(),
        signal: "BUY".to_string(),
        confidence: 0.7,
        reward: 0.01,
        pnl: 12.5,
        regime: "trend".to_string(),
    }
}

async fn wait_for_steps(trainer: &OnlineTrainer, steps: u64) -> bool {
    for _ in 0..200 {
        if trainer.status().await.steps >= steps {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

#[test]
fn test_proxy_loss_decays_with_floor() {
    assert!((proxy_loss(1, "{}") - 0.5).abs() < 1e-12);
    assert!(proxy_loss(10, "{}") < proxy_loss(2, "{}"));
    assert_eq!(proxy_loss(1_000, "{}"), 0.01);
    assert!((proxy_loss(1, "  ") - 0.6).abs() < 1e-12);
}

#[tokio::test]
async fn test_stop_without_start_returns_false() {
    let dir = tempdir().unwrap();
    let trainer = OnlineTrainer::new(dir.path().join("exp.ndjson"), Duration::from_millis(10));
    assert!(!trainer.stop().await);
    assert!(!trainer.status().await.running);
}

#[tokio::test]
async fn test_trainer_consumes_new_experiences() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("exp.ndjson");
    let experiences = ExperienceBuffer::new(&path).await.unwrap();
    experiences.append(&experience("a")).await.unwrap();

    let trainer = OnlineTrainer::new(&path, Duration::from_millis(10));
    assert!(trainer.start().await);
    assert!(!trainer.start().await, "second start is a no-op");

    assert!(wait_for_steps(&trainer, 1).await);
    experiences.append(&experience("b")).await.unwrap();
    experiences.append(&experience("c")).await.unwrap();
    assert!(wait_for_steps(&trainer, 3).await);

    let status = trainer.status().await;
    assert!(status.running);
    assert_eq!(status.steps, 3);
    assert!(status.last_loss > 0.0);
    assert!(status.last_update_ts > 0.0);

    assert!(trainer.stop().await);
    assert!(!trainer.status().await.running);
    assert!(!trainer.stop().await);
}

#[tokio::test]
async fn test_experience_buffer_writes_through() {
    let dir = tempdir().unwrap();
    let experiences = ExperienceBuffer::new(dir.path().join("exp.ndjson")).await.unwrap();
    for i in 0..50 {
        experiences.append(&experience(&i.to_string())).await.unwrap();
        let lines = std::fs::read_to_string(experiences.path()).unwrap().lines().count();
        assert_eq!(lines, i + 1);
    }
}

#[tokio::test]
async fn test_restart_resumes_from_consumed_offset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("exp.ndjson");
    let experiences = ExperienceBuffer::new(&path).await.unwrap();
    for id in ["a", "b", "c"] {
        experiences.append(&experience(id)).await.unwrap();
    }

    let trainer = OnlineTrainer::new(&path, Duration::from_millis(10));
    trainer.start().await;
    assert!(wait_for_steps(&trainer, 3).await);
    trainer.stop().await;

    trainer.start().await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(trainer.status().await.steps, 3);

    experiences.append(&experience("d")).await.unwrap();
    assert!(wait_for_steps(&trainer, 4).await);
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert_eq!(trainer.status().await.steps, 4);
    trainer.stop().await;
}

#[tokio::test]
async fn test_partial_line_waits_for_newline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("exp.ndjson");
    std::fs::write(&path, "{\"partial\":").unwrap();

    let trainer = OnlineTrainer::new(&path, Duration::from_millis(10));
    trainer.start().await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(trainer.status().await.steps, 0);

    let mut content = std::fs::read_to_string(&path).unwrap();
    content.push_str("1}\n");
    std::fs::write(&path, content).unwrap();
    assert!(wait_for_steps(&trainer, 1).await);
    assert_eq!(trainer.status().await.steps, 1);

    trainer.stop().await;
}
