use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use marchsync::catalog::{Catalog, SpecialRule};
use marchsync::march::March;
use marchsync::optimizer::{OptimizationResult, PlanSummary, RankedPlan};
use marchsync::talents::TalentOptions;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Green inside the scoring tolerance, yellow within 5%, red beyond.
fn deviation_color(deviation: f32, tolerance: f32) -> Color {
    if deviation <= tolerance {
        Color::Green
    } else if deviation <= 5.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn options(result: &OptimizationResult, limit: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Avg %"),
        Cell::new("Spread"),
        Cell::new("Marches"),
        Cell::new("Benched"),
    ]);
    align_right(&mut table, 1..=3);

    for (i, plan) in result.plans.iter().take(limit.max(1)).enumerate() {
        let summary = plan.summary(result.target_speed);
        let pairs = plan
            .marches
            .iter()
            .map(|m| format!("{}/{}", m.main, m.deputy))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(i + 1).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", plan.score)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", summary.average_speed)),
            Cell::new(format!("{:.1}", summary.spread)),
            Cell::new(pairs),
            Cell::new(plan.benched.as_deref().unwrap_or("-")),
        ]);
    }
    println!("\n{}", table);
    println!(
        "Evaluated {} pairings{} | target {:.1}%",
        result.evaluated,
        if result.truncated {
            " (budget reached)"
        } else {
            ""
        },
        result.target_speed
    );
}

pub fn marches(marches: &[March], target: f32, tolerance: f32) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Main").add_attribute(Attribute::Bold),
        Cell::new("Deputy").add_attribute(Attribute::Bold),
        Cell::new("Speed %").fg(Color::Cyan),
        Cell::new("Diff"),
        Cell::new("Skills"),
        Cell::new("Talents"),
        Cell::new("Pts"),
        Cell::new("Synergy"),
    ]);
    align_right(&mut table, 2..=3);

    for m in marches {
        let diff = m.total_speed - target;
        let synergy = match (&m.compatibility, m.synergy_match) {
            (Some(tag), _) => tag.clone(),
            (None, true) => "Match".to_string(),
            (None, false) => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(&m.main).add_attribute(Attribute::Bold),
            Cell::new(&m.deputy),
            Cell::new(format!("{:.1}", m.total_speed)).fg(Color::Cyan),
            Cell::new(format!("{:+.1}", diff)).fg(deviation_color(diff.abs(), tolerance)),
            Cell::new(&m.skill_breakdown),
            Cell::new(&m.talent_config),
            Cell::new(m.talent_cost),
            Cell::new(synergy),
        ]);
    }
    println!("\n{}", table);
}

pub fn plan(plan: &RankedPlan, summary: &PlanSummary, target: f32, tolerance: f32) {
    marches(&plan.marches, target, tolerance);
    println!(
        "Score {:.2} | Avg {:.1}% | Spread {:.1} | Target error {:.1}",
        plan.score, summary.average_speed, summary.spread, summary.target_error
    );
    if let Some(benched) = &plan.benched {
        println!("Benched: {}", benched);
    }
}

pub fn talents(options: &TalentOptions) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Speed %").fg(Color::Cyan),
        Cell::new("Cost"),
        Cell::new("Allocation").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 0..=1);

    for opt in options.iter() {
        table.add_row(vec![
            Cell::new(format!("{:.1}", opt.speed)).fg(Color::Cyan),
            Cell::new(opt.cost),
            Cell::new(&opt.description),
        ]);
    }
    println!("\n{}", table);
}

pub fn heroes(catalog: &Catalog, rule: Option<SpecialRule>) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Hero").add_attribute(Attribute::Bold),
        Cell::new("Category"),
        Cell::new("Trees"),
        Cell::new("Skill (L1-L5)"),
        Cell::new("Keystone"),
        Cell::new("Rule"),
    ]);

    for (_, hero) in catalog
        .heroes()
        .filter(|(_, h)| rule.is_none() || h.special_rule == rule)
    {
        let skills = hero
            .skill_speeds
            .iter()
            .map(|s| format!("{}", s))
            .collect::<Vec<_>>()
            .join("/");
        table.add_row(vec![
            Cell::new(&hero.name).add_attribute(Attribute::Bold),
            Cell::new(&hero.category),
            Cell::new(hero.trees.join(", ")),
            Cell::new(skills),
            Cell::new(hero.keystone.as_deref().unwrap_or("-")),
            Cell::new(
                hero.special_rule
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }
    println!("\n{}", table);
    println!(
        "Catalog v{} | {} heroes | fingerprint {}",
        catalog.version(),
        catalog.hero_count(),
        &catalog.fingerprint()[..12.min(catalog.fingerprint().len())]
    );
}
