#![allow(dead_code)]

use marchsync::catalog::{
    ArtifactDef, Catalog, CatalogDef, CompatibilityDef, HeroDef, SpecialRule, TalentRules,
};
use marchsync::roster::PlanRequest;
use std::collections::{BTreeMap, HashMap};

pub fn builtin() -> Catalog {
    Catalog::builtin()
}

/// Request with every named hero at `level` and defaults elsewhere.
pub fn request_at(heroes: &[&str], level: u8) -> PlanRequest {
    let levels: HashMap<String, u8> = heroes.iter().map(|h| (h.to_string(), level)).collect();
    PlanRequest::builder()
        .heroes(heroes.iter().map(|h| h.to_string()).collect())
        .levels(levels)
        .build()
}

fn hero(name: &str, category: &str, trees: &[&str], skill: [f32; 5]) -> HeroDef {
    HeroDef {
        name: name.to_string(),
        category: category.to_string(),
        trees: trees.iter().map(|t| t.to_string()).collect(),
        skill_speeds: skill,
        keystone: None,
        special_rule: None,
        mode_skill_speeds: None,
    }
}

/// Small catalog exercising the rules the built-in roster does not use.
pub fn mixed_def() -> CatalogDef {
    let mut trees = BTreeMap::new();
    trees.insert("Swift".to_string(), BTreeMap::from([(5, 10.0), (20, 20.0)]));
    trees.insert("Rush".to_string(), BTreeMap::from([(30, 15.0)]));

    let mut keystones = BTreeMap::new();
    keystones.insert("Gallop".to_string(), 5.0);

    let mut rider = hero("Rider", "Cavalry", &["Swift"], [2.0, 4.0, 6.0, 8.0, 10.0]);
    rider.keystone = Some("Gallop".to_string());

    let mut shaman = hero("Shaman", "Magic", &[], [1.0, 1.0, 1.0, 1.0, 1.0]);
    shaman.special_rule = Some(SpecialRule::ModeGated);
    shaman.mode_skill_speeds = Some([5.0, 6.0, 7.0, 8.0, 12.0]);

    let lancer = hero("Lancer", "Cavalry", &["Swift", "Rush"], [0.0; 5]);
    let scout = hero("Scout", "Magic", &[], [3.0, 3.0, 3.0, 3.0, 3.0]);

    CatalogDef {
        version: "test-1".to_string(),
        rules: TalentRules::default(),
        trees,
        keystones,
        artifacts: vec![ArtifactDef {
            name: "Horn".to_string(),
            holder: "Scout".to_string(),
            bonus: 7.5,
        }],
        heroes: vec![rider, shaman, lancer, scout],
        compatibilities: vec![
            CompatibilityDef {
                main: "Rider".to_string(),
                deputy: "Lancer".to_string(),
                tag: "Charge".to_string(),
                bidirectional: false,
            },
            CompatibilityDef {
                main: "Shaman".to_string(),
                deputy: "Scout".to_string(),
                tag: "Ritual".to_string(),
                bidirectional: true,
            },
        ],
    }
}

pub fn mixed() -> Catalog {
    Catalog::from_def(mixed_def()).expect("test catalog is valid")
}
