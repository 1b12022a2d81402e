use super::{parse_level, parse_pin, write_json};
use crate::reports;
use clap::Args;
use marchsync::api::ResultCursor;
use marchsync::catalog::Catalog;
use marchsync::config::Config;
use marchsync::consts::MAX_SKILL_LEVEL;
use marchsync::error::{MarchError, MsResult};
use marchsync::optimizer::{OptimizationOptions, Optimizer, ProgressCallback};
use marchsync::roster::PlanRequest;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Comma-separated hero names.
    #[arg(short = 'H', long, value_delimiter = ',')]
    pub heroes: Vec<String>,

    /// Select every hero in the catalog.
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Per-hero skill level, e.g. `--level Neya=3`. Repeatable.
    #[arg(short = 'l', long = "level", value_parser = parse_level)]
    pub levels: Vec<(String, u8)>,

    /// Level for selected heroes without an explicit `--level`.
    #[arg(long, default_value_t = MAX_SKILL_LEVEL)]
    pub default_level: u8,

    /// Force a march, e.g. `--pin Neya:Urag`. Repeatable.
    #[arg(short = 'p', long = "pin", value_parser = parse_pin)]
    pub pins: Vec<(String, String)>,

    /// Hero that may only ever lead a march. Repeatable.
    #[arg(long = "lead")]
    pub leaders: Vec<String>,

    #[arg(short = 'f', long, default_value_t = 0)]
    pub fillers: usize,

    /// Activate an artifact by name. Repeatable.
    #[arg(short = 'a', long = "artifact")]
    pub artifacts: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub alternate_mode: bool,

    /// Number of options listed in the overview table.
    #[arg(long, default_value_t = 5)]
    pub show: usize,

    /// Option (1-based) shown in detail.
    #[arg(long)]
    pub option: Option<usize>,

    /// Write every ranked plan to a CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the raw result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_progress(&self, evaluated: usize, budget: usize, best_score: Option<f32>) {
        let pct = evaluated as f32 * 100.0 / budget.max(1) as f32;
        match best_score {
            Some(score) => info!(
                "Checked {:7} combos ({:5.1}% of budget) | Best: {:.2}",
                evaluated, pct, score
            ),
            None => info!("Checked {:7} combos ({:5.1}% of budget)", evaluated, pct),
        }
    }
}

fn build_request(args: &OptimizeArgs, config: &Config, catalog: &Catalog) -> MsResult<PlanRequest> {
    let heroes: Vec<String> = if args.all {
        if !args.heroes.is_empty() {
            warn!("⚠️  --all given; ignoring --heroes");
        }
        catalog.heroes().map(|(_, h)| h.name.clone()).collect()
    } else {
        args.heroes
            .iter()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect()
    };

    if args.default_level > MAX_SKILL_LEVEL {
        return Err(MarchError::Config(format!(
            "--default-level must be 0-{}",
            MAX_SKILL_LEVEL
        )));
    }

    let mut levels: HashMap<String, u8> = heroes
        .iter()
        .map(|h| (h.clone(), args.default_level))
        .collect();
    for (name, level) in &args.levels {
        match heroes.iter().find(|h| h.eq_ignore_ascii_case(name)) {
            Some(h) => {
                levels.insert(h.clone(), *level);
            }
            None => {
                levels.insert(name.clone(), *level);
            }
        }
    }

    Ok(PlanRequest::builder()
        .heroes(heroes)
        .levels(levels)
        .target_speed(config.scoring.target_speed)
        .pinned(args.pins.clone())
        .leader_only(args.leaders.clone())
        .artifacts(args.artifacts.clone())
        .alternate_mode(args.alternate_mode)
        .fillers(args.fillers)
        .build())
}

pub fn run(args: &OptimizeArgs, config: Config, catalog: Arc<Catalog>) -> MsResult<()> {
    let request = build_request(args, &config, &catalog)?;
    let optimizer = Optimizer::new(catalog.clone(), OptimizationOptions::from(&config));

    let mut cursor = ResultCursor::new();
    cursor.apply(optimizer.run(&request, CliLogger))?;

    let Some(result) = cursor.result() else {
        return Ok(());
    };

    if let Some(path) = &args.export {
        reports::export_plans(path, result)?;
        info!("💾 Exported {} plans to {:?}", result.plans.len(), path);
    }

    if args.json {
        return write_json(result);
    }

    if result.plans.is_empty() {
        warn!("⚠️  No plan could be formed from this selection.");
        return Ok(());
    }

    reports::print_options_table(result, args.show);
    let target = result.target_speed;

    if let Some(k) = args.option {
        if k == 0 || k > cursor.len() {
            warn!(
                "⚠️  Option {} does not exist (1-{}); showing the closest.",
                k,
                cursor.len()
            );
        }
        cursor.select(k.saturating_sub(1));
    }

    if let (Some(plan), Some(summary)) = (cursor.current(), cursor.current_summary()) {
        info!("\n=== 🏆 OPTION {} of {} ===", cursor.index() + 1, cursor.len());
        reports::print_plan(plan, &summary, target, config.scoring.deviation_tolerance);
    }
    Ok(())
}
