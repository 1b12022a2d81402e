use crate::reports;
use clap::Args;
use marchsync::catalog::Catalog;
use marchsync::error::{MarchError, MsResult};
use marchsync::talents::compute_talent_options;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TalentsArgs {
    /// Hero name as listed by `heroes`.
    pub hero: String,
}

pub fn run(args: &TalentsArgs, catalog: &Catalog) -> MsResult<()> {
    let id = catalog
        .hero_id(args.hero.trim())
        .ok_or_else(|| MarchError::UnknownHero(args.hero.clone()))?;
    let hero = catalog.hero(id);
    let options = compute_talent_options(hero, catalog);

    info!(
        "🌳 {} ({}): {} reachable talent speeds from {} points",
        hero.name,
        hero.trees.join(", "),
        options.len(),
        catalog.rules().talent_points
    );
    reports::print_talent_table(&options);
    Ok(())
}
