//! Online training stub and its bookkeeping.

pub mod experience;
pub mod promotion;
pub mod reward;
pub mod trainer;

pub use experience::{Experience, ExperienceBuffer};
pub use promotion::{gating_decision, PromotionDecision};
pub use reward::{trade_reward, RewardWeights};
pub use trainer::{OnlineTrainer, TrainerStats};
