pub mod constraints;
pub mod parity;
pub mod runner;

pub use self::runner::{
    NoProgress, OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback,
};

use crate::march::March;
use serde::{Deserialize, Serialize};

/// Score contribution of a single march. Deviations beyond `tolerance` are
/// multiplied by `penalty`, so the score jumps at the threshold.
#[inline(always)]
pub fn deviation_score(speed: f32, target: f32, tolerance: f32, penalty: f32) -> f32 {
    let dev = (speed - target).abs();
    if dev > tolerance {
        dev * penalty
    } else {
        dev
    }
}

/// A complete assignment (forced marches first) and its aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlan {
    pub score: f32,
    pub marches: Vec<March>,
    pub benched: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanSummary {
    pub average_speed: f32,
    /// Fastest minus slowest march.
    pub spread: f32,
    pub target_error: f32,
}

impl RankedPlan {
    pub fn summary(&self, target: f32) -> PlanSummary {
        if self.marches.is_empty() {
            return PlanSummary::default();
        }
        let speeds = self.marches.iter().map(|m| m.total_speed);
        let sum: f32 = speeds.clone().sum();
        let max = speeds.clone().fold(f32::MIN, f32::max);
        let min = speeds.fold(f32::MAX, f32::min);
        let average_speed = sum / self.marches.len() as f32;

        PlanSummary {
            average_speed,
            spread: max - min,
            target_error: (average_speed - target).abs(),
        }
    }
}
