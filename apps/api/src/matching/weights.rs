use serde::{Deserialize, Serialize};

/// Weights applied by the matcher. Defaults: 0.6 interest, 0.3 strength, ±0.1 performance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWeights {
    pub interest: f64,
    pub strength: f64,
    /// Added for "High" academic performance.
    pub performance_boost: f64,
    /// Subtracted for "Low" academic performance.
    pub performance_penalty: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            interest: 0.6,
            strength: 0.3,
            performance_boost: 0.1,
            performance_penalty: 0.1,
        }
    }
}

impl MatchWeights {
    /// Adjustment for a self-reported performance level, compared case-insensitively.
    /// Anything other than "high" or "low" is neutral.
    pub fn performance_modifier(&self, performance: &str) -> f64 {
        match performance.to_lowercase().as_str() {
            "high" => self.performance_boost,
            "low" => -self.performance_penalty,
            _ => 0.0,
        }
    }
}
