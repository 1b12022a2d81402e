//! Entry points for front ends: one-shot planning and a result browser.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::MsResult;
use crate::optimizer::{
    NoProgress, OptimizationOptions, OptimizationResult, Optimizer, PlanSummary, RankedPlan,
};
use crate::roster::PlanRequest;
use std::sync::Arc;
use tracing::warn;

/// Runs a full optimization with options taken from `config`. The target
/// speed in `config.scoring` overrides the one carried by `request`.
pub fn plan(
    catalog: Arc<Catalog>,
    config: &Config,
    request: &PlanRequest,
) -> MsResult<OptimizationResult> {
    config.validate()?;
    let mut request = request.clone();
    request.target_speed = config.scoring.target_speed;

    let optimizer = Optimizer::new(catalog, OptimizationOptions::from(config));
    optimizer.run(&request, NoProgress)
}

/// Browsing state over the latest successful run (current option + list).
/// Lives with the front end; the core never holds on to results.
#[derive(Debug, Clone, Default)]
pub struct ResultCursor {
    result: Option<OptimizationResult>,
    index: usize,
}

impl ResultCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a fresh run and rewinds to the first option. A failed run
    /// leaves the previous results and position untouched.
    pub fn apply(&mut self, outcome: MsResult<OptimizationResult>) -> MsResult<()> {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.index = 0;
                Ok(())
            }
            Err(e) => {
                warn!("Optimization failed, keeping previous results: {}", e);
                Err(e)
            }
        }
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        self.result.as_ref()
    }

    pub fn len(&self) -> usize {
        self.result.as_ref().map(|r| r.plans.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zero-based position of the option on display.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&RankedPlan> {
        self.result.as_ref().and_then(|r| r.plans.get(self.index))
    }

    pub fn current_summary(&self) -> Option<PlanSummary> {
        let result = self.result.as_ref()?;
        self.current().map(|p| p.summary(result.target_speed))
    }

    pub fn next_option(&mut self) {
        self.select(self.index + 1);
    }

    pub fn prev_option(&mut self) {
        self.select(self.index.saturating_sub(1));
    }

    /// Jumps to `index`, clamped to the available options.
    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.len().saturating_sub(1));
    }
}
