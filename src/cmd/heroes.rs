use crate::reports;
use clap::Args;
use marchsync::catalog::{Catalog, SpecialRule};
use marchsync::error::MsResult;
use std::str::FromStr;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct HeroesArgs {
    /// Only list heroes with this special rule (`main_only` or `mode_gated`).
    #[arg(long, value_parser = SpecialRule::from_str)]
    pub rule: Option<SpecialRule>,
}

pub fn run(args: &HeroesArgs, catalog: &Catalog) -> MsResult<()> {
    if let Some(rule) = args.rule {
        info!("🔎 Filtering heroes by rule '{}'", rule);
    }
    reports::print_hero_table(catalog, args.rule);
    Ok(())
}
