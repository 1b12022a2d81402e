use super::types::{ArtifactDef, CatalogDef, HeroDef, SpecialRule, TalentRules, TreeMilestones};
use std::collections::BTreeMap;

const STANDARD_SKILL: [f32; 5] = [4.0, 5.0, 6.0, 8.0, 10.0];
const NO_SKILL: [f32; 5] = [0.0; 5];

fn tree(milestones: &[(u32, f32)]) -> TreeMilestones {
    milestones.iter().copied().collect()
}

fn hero(name: &str, trees: &[&str], skill_speeds: [f32; 5], keystone: &str) -> HeroDef {
    HeroDef {
        name: name.to_string(),
        category: "Cavalry".to_string(),
        trees: trees.iter().map(|t| t.to_string()).collect(),
        skill_speeds,
        keystone: Some(keystone.to_string()),
        special_rule: None,
        mode_skill_speeds: None,
    }
}

/// The cavalry roster shipped with the tool.
pub fn builtin_def() -> CatalogDef {
    let mut trees = BTreeMap::new();
    trees.insert("Cavalry".to_string(), tree(&[(5, 15.0)]));
    trees.insert("Pvp".to_string(), tree(&[(10, 10.0), (21, 20.0)]));
    trees.insert("Tank".to_string(), tree(&[(10, 10.0), (21, 20.0)]));
    trees.insert(
        "Mobility".to_string(),
        tree(&[(5, 10.0), (15, 20.0), (26, 25.0)]),
    );
    trees.insert("Overall".to_string(), tree(&[(10, 10.0)]));
    trees.insert("Peacekeeping".to_string(), tree(&[(10, 10.0)]));
    trees.insert("Control".to_string(), tree(&[(5, 10.0)]));

    let mut keystones = BTreeMap::new();
    keystones.insert("Balanced Heart".to_string(), 5.0);
    keystones.insert("Mighty Power".to_string(), 0.0);
    keystones.insert("Shield of Stability".to_string(), -2.0);
    keystones.insert("Backstabber".to_string(), 0.0);

    let mut forondil = hero(
        "Forondil",
        &["Cavalry", "Pvp", "Control"],
        [10.0, 12.0, 14.0, 16.0, 20.0],
        "Balanced Heart",
    );
    forondil.special_rule = Some(SpecialRule::MainOnly);

    let heroes = vec![
        hero(
            "Neya",
            &["Cavalry", "Pvp", "Mobility"],
            STANDARD_SKILL,
            "Balanced Heart",
        ),
        hero("Lieh-Shan Yen", &["Cavalry"], NO_SKILL, "Mighty Power"),
        hero("Urag", &["Cavalry", "Pvp"], STANDARD_SKILL, "Mighty Power"),
        hero(
            "Emrys",
            &["Cavalry", "Pvp", "Mobility"],
            [3.0, 4.5, 6.0, 8.0, 10.0],
            "Balanced Heart",
        ),
        forondil,
        hero(
            "Tobin",
            &["Cavalry", "Tank"],
            NO_SKILL,
            "Shield of Stability",
        ),
        hero(
            "Bakshi",
            &["Cavalry", "Peacekeeping"],
            NO_SKILL,
            "Mighty Power",
        ),
        hero("Theodore", &["Cavalry"], STANDARD_SKILL, "Mighty Power"),
        hero(
            "Mardok",
            &["Cavalry", "Pvp", "Mobility"],
            STANDARD_SKILL,
            "Balanced Heart",
        ),
        hero("Freya", &["Cavalry", "Control"], NO_SKILL, "Backstabber"),
        hero("Agnar", &["Cavalry", "Pvp"], NO_SKILL, "Mighty Power"),
    ];

    CatalogDef {
        version: "3.1".to_string(),
        rules: TalentRules::default(),
        trees,
        keystones,
        artifacts: vec![ArtifactDef {
            name: "Lunaris".to_string(),
            holder: "Neya".to_string(),
            bonus: 40.0,
        }],
        heroes,
        compatibilities: Vec::new(),
    }
}
