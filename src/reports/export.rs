use marchsync::error::MsResult;
use marchsync::optimizer::OptimizationResult;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct PlanRow<'a> {
    option: usize,
    score: f32,
    march: usize,
    main: &'a str,
    deputy: &'a str,
    speed: f32,
    diff: f32,
    talents: &'a str,
    talent_cost: u32,
    synergy: bool,
    compatibility: &'a str,
    skills: &'a str,
    benched: &'a str,
}

/// One row per march, grouped by option.
pub fn export_plans<P: AsRef<Path>>(path: P, result: &OptimizationResult) -> MsResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for (i, plan) in result.plans.iter().enumerate() {
        for (j, m) in plan.marches.iter().enumerate() {
            wtr.serialize(PlanRow {
                option: i + 1,
                score: plan.score,
                march: j + 1,
                main: &m.main,
                deputy: &m.deputy,
                speed: m.total_speed,
                diff: m.total_speed - result.target_speed,
                talents: &m.talent_config,
                talent_cost: m.talent_cost,
                synergy: m.synergy_match,
                compatibility: m.compatibility.as_deref().unwrap_or(""),
                skills: &m.skill_breakdown,
                benched: plan.benched.as_deref().unwrap_or(""),
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
