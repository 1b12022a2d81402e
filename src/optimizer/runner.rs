use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::MsResult;
use crate::march::{March, MarchSolver};
use crate::optimizer::parity::candidate_rosters;
use crate::optimizer::{constraints, deviation_score, RankedPlan};
use crate::pairing::enumerate_pairings;
use crate::roster::{EntityRef, PlanRequest, ResolvedRoster};
use crate::talents::TalentCache;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub max_evaluations: usize,
    pub result_limit: usize,
    pub progress_interval: usize,
    pub deviation_tolerance: f32,
    pub deviation_penalty: f32,
    pub filler_category: String,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            max_evaluations: cfg.search.max_evaluations,
            result_limit: cfg.search.result_limit.max(1),
            progress_interval: cfg.search.progress_interval.max(1),
            deviation_tolerance: cfg.scoring.deviation_tolerance,
            deviation_penalty: cfg.scoring.deviation_penalty,
            filler_category: cfg.scoring.filler_category.clone(),
        }
    }
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub target_speed: f32,
    /// Ascending by score; lower is better.
    pub plans: Vec<RankedPlan>,
    /// Full pairings scored, pinned-only runs included.
    pub evaluated: usize,
    /// True when the evaluation budget cut the enumeration short.
    pub truncated: bool,
}

impl OptimizationResult {
    pub fn best(&self) -> Option<&RankedPlan> {
        self.plans.first()
    }
}

pub trait ProgressCallback {
    fn on_progress(&self, evaluated: usize, budget: usize, best_score: Option<f32>);
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _evaluated: usize, _budget: usize, _best_score: Option<f32>) {}
}

/// Each ordered pair is resolved once per run.
struct MarchMemo<'a> {
    solver: MarchSolver<'a>,
    target: f32,
    tolerance: f32,
    penalty: f32,
    index: HashMap<(EntityRef, EntityRef), usize>,
    marches: Vec<March>,
    scores: Vec<f32>,
}

impl<'a> MarchMemo<'a> {
    fn resolve(&mut self, main: EntityRef, deputy: EntityRef) -> usize {
        if let Some(&idx) = self.index.get(&(main, deputy)) {
            return idx;
        }
        let march = self.solver.solve(main, deputy);
        let score = deviation_score(march.total_speed, self.target, self.tolerance, self.penalty);
        let idx = self.marches.len();
        self.marches.push(march);
        self.scores.push(score);
        self.index.insert((main, deputy), idx);
        idx
    }
}

struct Candidate {
    score: f32,
    marches: Vec<usize>,
    benched: Option<EntityRef>,
}

/// Keeps the best `limit` candidates. Equal scores keep arrival order, the
/// same outcome as a stable sort over everything followed by truncation.
struct Ranking {
    limit: usize,
    entries: Vec<Candidate>,
}

impl Ranking {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: Vec::with_capacity(limit + 1),
        }
    }

    fn accepts(&self, score: f32) -> bool {
        self.entries.len() < self.limit
            || self.entries.last().map(|c| score < c.score).unwrap_or(true)
    }

    fn insert(&mut self, candidate: Candidate) {
        let pos = self
            .entries
            .partition_point(|c| c.score <= candidate.score);
        self.entries.insert(pos, candidate);
        self.entries.truncate(self.limit);
    }

    fn best(&self) -> Option<f32> {
        self.entries.first().map(|c| c.score)
    }
}

pub struct Optimizer {
    catalog: Arc<Catalog>,
    cache: Arc<TalentCache>,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(catalog: Arc<Catalog>, options: OptimizationOptions) -> Self {
        Self::with_cache(catalog, Arc::new(TalentCache::new()), options)
    }

    /// Shares a talent cache across optimizers built on the same catalog.
    pub fn with_cache(
        catalog: Arc<Catalog>,
        cache: Arc<TalentCache>,
        options: OptimizationOptions,
    ) -> Self {
        Self {
            catalog,
            cache,
            options,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cache(&self) -> &TalentCache {
        &self.cache
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    pub fn run<CB: ProgressCallback>(
        &self,
        request: &PlanRequest,
        callback: CB,
    ) -> MsResult<OptimizationResult> {
        let roster = ResolvedRoster::resolve(&self.catalog, request)?;
        self.run_resolved(&roster, callback)
    }

    pub fn run_resolved<CB: ProgressCallback>(
        &self,
        roster: &ResolvedRoster,
        callback: CB,
    ) -> MsResult<OptimizationResult> {
        let opts = &self.options;
        let catalog = self.catalog.as_ref();
        let start_time = Instant::now();

        // 1. Validate pins before touching anything else
        constraints::validate_constraints(catalog, roster)?;

        let mut memo = MarchMemo {
            solver: MarchSolver::new(catalog, &self.cache, roster, &opts.filler_category),
            target: roster.target_speed,
            tolerance: opts.deviation_tolerance,
            penalty: opts.deviation_penalty,
            index: HashMap::new(),
            marches: Vec::new(),
            scores: Vec::new(),
        };

        // 2. Pinned marches form the base of every candidate
        let pinned: Vec<usize> = roster
            .pinned
            .iter()
            .map(|&(main, deputy)| memo.resolve(main, deputy))
            .collect();
        let base_deviation: f32 = pinned.iter().map(|&i| memo.scores[i]).sum();

        // 3. Remaining roster + parity
        let pinned_heroes: HashSet<EntityRef> =
            roster.pinned.iter().flat_map(|&(m, d)| [m, d]).collect();
        let remaining: Vec<EntityRef> = roster
            .selected
            .iter()
            .copied()
            .filter(|e| !pinned_heroes.contains(e))
            .collect();

        let rosters = candidate_rosters(&remaining, &roster.fillers, &roster.leader_only)?;

        info!(
            "🔍 Optimizing {} heroes + {} fillers ({} forced marches, {} candidate rosters, target {:.1}%)",
            roster.selected.len(),
            roster.fillers.len(),
            pinned.len(),
            rosters.len(),
            roster.target_speed
        );

        // 4. Enumerate and score
        let mut ranking = Ranking::new(opts.result_limit);
        let mut buffer: Vec<usize> = Vec::with_capacity(pinned.len() + remaining.len() / 2 + 1);
        let mut evaluated = 0usize;
        let mut truncated = false;

        'rosters: for candidate in &rosters {
            debug!(
                "Roster of {} (benched: {:?})",
                candidate.members.len(),
                candidate.benched
            );

            for pairing in enumerate_pairings(&candidate.members, &roster.leader_only) {
                if evaluated >= opts.max_evaluations {
                    truncated = true;
                    break 'rosters;
                }

                buffer.clear();
                buffer.extend_from_slice(&pinned);
                let mut total = base_deviation;
                for (main, deputy) in pairing {
                    let idx = memo.resolve(main, deputy);
                    total += memo.scores[idx];
                    buffer.push(idx);
                }

                if ranking.accepts(total) {
                    ranking.insert(Candidate {
                        score: total,
                        marches: buffer.clone(),
                        benched: candidate.benched,
                    });
                }

                evaluated += 1;
                if evaluated % opts.progress_interval == 0 {
                    callback.on_progress(evaluated, opts.max_evaluations, ranking.best());
                }
            }
        }

        // 5. Materialize the shortlist
        let plans: Vec<RankedPlan> = ranking
            .entries
            .into_iter()
            .map(|c| RankedPlan {
                score: c.score,
                marches: c.marches.iter().map(|&i| memo.marches[i].clone()).collect(),
                benched: c.benched.map(|e| e.display_name(catalog)),
            })
            .collect();

        info!(
            "✅ Checked {} combos ({} distinct marches) in {:.2?}{}",
            evaluated,
            memo.marches.len(),
            start_time.elapsed(),
            if truncated { " [budget reached]" } else { "" }
        );

        Ok(OptimizationResult {
            target_speed: roster.target_speed,
            plans,
            evaluated,
            truncated,
        })
    }
}
