//! Per-trade reward shaping

/// Coefficients of [`RewardWeights::reward`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardWeights {
    pub net_return: f64,
    pub drawdown: f64,
    pub turnover: f64,
    pub regime_mismatch: f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            net_return: 1.0,
            drawdown: 0.5,
            turnover: 0.2,
            regime_mismatch: 0.2,
        }
    }
}

impl RewardWeights {
    /// Return minus drawdown, turnover and regime-mismatch penalties
    pub fn reward(&self, net_return: f64, dd_increment: f64, turnover_cost: f64, regime_mismatch: f64) -> f64 {
        self.net_return * net_return
            - self.drawdown * dd_increment
            - self.turnover * turnover_cost
            - self.regime_mismatch * regime_mismatch
    }
}

pub fn trade_reward(net_return: f64, dd_increment: f64, turnover_cost: f64, regime_mismatch: f64) -> f64 {
    RewardWeights::default().reward(net_return, dd_increment, turnover_cost, regime_mismatch)
}
