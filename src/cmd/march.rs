use super::write_json;
use crate::reports;
use clap::Args;
use marchsync::catalog::Catalog;
use marchsync::config::Config;
use marchsync::consts::MAX_SKILL_LEVEL;
use marchsync::error::MsResult;
use marchsync::march::MarchSolver;
use marchsync::optimizer::deviation_score;
use marchsync::roster::{PlanRequest, ResolvedRoster};
use marchsync::talents::TalentCache;
use std::collections::HashMap;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct MarchArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'm', long)]
    pub main: String,

    #[arg(short = 'd', long)]
    pub deputy: String,

    #[arg(long, default_value_t = MAX_SKILL_LEVEL)]
    pub main_level: u8,

    #[arg(long, default_value_t = MAX_SKILL_LEVEL)]
    pub deputy_level: u8,

    #[arg(short = 'a', long = "artifact")]
    pub artifacts: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub alternate_mode: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &MarchArgs, config: Config, catalog: &Catalog) -> MsResult<()> {
    let levels = HashMap::from([
        (args.main.clone(), args.main_level),
        (args.deputy.clone(), args.deputy_level),
    ]);
    let request = PlanRequest::builder()
        .heroes(vec![args.main.clone(), args.deputy.clone()])
        .levels(levels)
        .target_speed(config.scoring.target_speed)
        .artifacts(args.artifacts.clone())
        .alternate_mode(args.alternate_mode)
        .build();

    let roster = ResolvedRoster::resolve(catalog, &request)?;
    let cache = TalentCache::new();
    let solver = MarchSolver::new(catalog, &cache, &roster, &config.scoring.filler_category);
    let march = solver.solve(roster.selected[0], roster.selected[1]);

    if args.json {
        return write_json(&march);
    }

    let score = deviation_score(
        march.total_speed,
        roster.target_speed,
        config.scoring.deviation_tolerance,
        config.scoring.deviation_penalty,
    );
    info!(
        "🎯 {} + {}: {:.1}% (target {:.1}%, score {:.2})",
        march.main, march.deputy, march.total_speed, roster.target_speed, score
    );
    reports::print_marches(
        std::slice::from_ref(&march),
        roster.target_speed,
        config.scoring.deviation_tolerance,
    );
    Ok(())
}
