use super::types::{CatalogDef, SpecialRule};
use super::Catalog;
use crate::consts::{FILLER_PREFIX, SPEED_KEY_SCALE};
use crate::error::{MarchError, MsResult};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

pub fn load_catalog_from_file<P: AsRef<Path>>(path: P) -> MsResult<Catalog> {
    let file = File::open(path.as_ref())?;
    info!("📂 Loading hero catalog: {:?}", path.as_ref());
    load_catalog_from_reader(BufReader::new(file))
}

pub fn load_catalog_from_reader<R: Read>(reader: R) -> MsResult<Catalog> {
    let def: CatalogDef = serde_json::from_reader(reader)?;
    Catalog::from_def(def)
}

fn looks_like_filler(name: &str) -> bool {
    name.strip_prefix(FILLER_PREFIX)
        .map(|rest| {
            let rest = rest.trim_start();
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
        })
        .unwrap_or(false)
}

/// True when `value` has more precision than talent speed keys can hold.
fn too_precise(value: f32) -> bool {
    let scaled = value * SPEED_KEY_SCALE;
    (scaled - scaled.round()).abs() > 1e-2
}

/// Checks every cross reference in the catalog so lookups downstream can't miss.
pub fn validate(def: &CatalogDef) -> MsResult<()> {
    if def.rules.innate_speed.is_nan() {
        return Err(MarchError::Validation("innate_speed is NaN".into()));
    }
    if too_precise(def.rules.innate_speed) {
        return Err(MarchError::Validation(format!(
            "innate_speed {} is finer than 0.01%",
            def.rules.innate_speed
        )));
    }

    for (tree_name, milestones) in &def.trees {
        for (&cost, &bonus) in milestones {
            if cost == 0 {
                return Err(MarchError::Validation(format!(
                    "Tree '{}' has a milestone with zero cost",
                    tree_name
                )));
            }
            if !bonus.is_finite() {
                return Err(MarchError::Validation(format!(
                    "Tree '{}' has a non-finite bonus at cost {}",
                    tree_name, cost
                )));
            }
            if too_precise(bonus) {
                return Err(MarchError::Validation(format!(
                    "Tree '{}' bonus {} at cost {} is finer than 0.01%",
                    tree_name, bonus, cost
                )));
            }
        }
    }

    let mut names = HashSet::new();
    for hero in &def.heroes {
        if hero.name.trim().is_empty() {
            return Err(MarchError::Validation("Hero with empty name".into()));
        }
        if !names.insert(hero.name.as_str()) {
            return Err(MarchError::Validation(format!(
                "Hero '{}' is defined twice",
                hero.name
            )));
        }
        if looks_like_filler(&hero.name) {
            return Err(MarchError::Validation(format!(
                "Hero name '{}' collides with filler naming",
                hero.name
            )));
        }
        for tree in &hero.trees {
            if !def.trees.contains_key(tree) {
                return Err(MarchError::Validation(format!(
                    "Hero '{}' references unknown talent tree '{}'",
                    hero.name, tree
                )));
            }
        }
        if let Some(keystone) = &hero.keystone {
            if !def.keystones.contains_key(keystone) {
                return Err(MarchError::Validation(format!(
                    "Hero '{}' references unknown keystone '{}'",
                    hero.name, keystone
                )));
            }
        }
        if hero.special_rule == Some(SpecialRule::ModeGated) && hero.mode_skill_speeds.is_none() {
            return Err(MarchError::Validation(format!(
                "Hero '{}' is mode_gated but has no mode_skill_speeds",
                hero.name
            )));
        }
    }

    for artifact in &def.artifacts {
        if !names.contains(artifact.holder.as_str()) {
            return Err(MarchError::Validation(format!(
                "Artifact '{}' is held by unknown hero '{}'",
                artifact.name, artifact.holder
            )));
        }
    }

    for compat in &def.compatibilities {
        for name in [&compat.main, &compat.deputy] {
            if !names.contains(name.as_str()) {
                return Err(MarchError::Validation(format!(
                    "Compatibility '{}' references unknown hero '{}'",
                    compat.tag, name
                )));
            }
        }
    }

    debug!(
        "Catalog v{} validated: {} heroes, {} trees",
        def.version,
        def.heroes.len(),
        def.trees.len()
    );
    Ok(())
}
