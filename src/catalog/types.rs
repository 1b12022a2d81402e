use crate::consts::{INNATE_SPEED_BONUS, MAX_TALENT_POINTS, SKILL_TIERS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumString};

/// Talent point cost -> speed bonus unlocked at that cost.
pub type TreeMilestones = BTreeMap<u32, f32>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TalentRules {
    pub talent_points: u32,
    pub innate_speed: f32,
}

impl Default for TalentRules {
    fn default() -> Self {
        Self {
            talent_points: MAX_TALENT_POINTS,
            innate_speed: INNATE_SPEED_BONUS,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SpecialRule {
    /// Skill speed only applies while leading the march.
    MainOnly,
    /// Skill speed is zero unless the alternate mode is on, in which case
    /// `mode_skill_speeds` replaces the regular table.
    ModeGated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroDef {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub trees: Vec<String>,
    #[serde(default)]
    pub skill_speeds: [f32; SKILL_TIERS],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_rule: Option<SpecialRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_skill_speeds: Option<[f32; SKILL_TIERS]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactDef {
    pub name: String,
    /// Hero whose presence in a march (either role) triggers the bonus.
    pub holder: String,
    pub bonus: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityDef {
    pub main: String,
    pub deputy: String,
    pub tag: String,
    #[serde(default)]
    pub bidirectional: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDef {
    pub version: String,
    pub rules: TalentRules,
    pub trees: BTreeMap<String, TreeMilestones>,
    pub keystones: BTreeMap<String, f32>,
    pub artifacts: Vec<ArtifactDef>,
    pub heroes: Vec<HeroDef>,
    pub compatibilities: Vec<CompatibilityDef>,
}
