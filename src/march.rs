use crate::catalog::{Catalog, SpecialRule};
use crate::consts::{MAX_SKILL_LEVEL, SKILL_TIERS};
use crate::roster::{EntityRef, ResolvedRoster};
use crate::talents::{fmt_pct, TalentCache};
use serde::{Deserialize, Serialize};

pub const NO_TALENTS_AVAILABLE: &str = "No Talents Available";
pub const NO_KEYSTONE: &str = "No Keystone";

/// One resolved (main, deputy) pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct March {
    pub main: String,
    pub deputy: String,
    pub main_ref: EntityRef,
    pub deputy_ref: EntityRef,
    pub total_speed: f32,
    /// Skills + keystone + artifacts. Not subject to optimization.
    pub fixed_speed: f32,
    pub talent_speed: f32,
    pub talent_config: String,
    pub talent_cost: u32,
    pub synergy_match: bool,
    pub compatibility: Option<String>,
    pub skill_breakdown: String,
}

impl March {
    pub fn deviation(&self, target: f32) -> f32 {
        (self.total_speed - target).abs()
    }
}

/// Looks up the skill speed a hero brings at `level`.
pub fn skill_speed(
    catalog: &Catalog,
    entity: EntityRef,
    level: u8,
    is_main: bool,
    alternate_mode: bool,
) -> f32 {
    let Some(id) = entity.hero_id() else {
        return 0.0;
    };
    if level == 0 {
        return 0.0;
    }

    let hero = catalog.hero(id);
    let table: &[f32; SKILL_TIERS] = match hero.special_rule {
        Some(SpecialRule::MainOnly) if !is_main => return 0.0,
        Some(SpecialRule::ModeGated) => match (&hero.mode_skill_speeds, alternate_mode) {
            (Some(alt), true) => alt,
            _ => return 0.0,
        },
        _ => &hero.skill_speeds,
    };

    let idx = (level.min(MAX_SKILL_LEVEL) - 1) as usize;
    table[idx]
}

/// Resolves marches against a fixed roster, target and modifier set.
pub struct MarchSolver<'a> {
    catalog: &'a Catalog,
    cache: &'a TalentCache,
    roster: &'a ResolvedRoster,
    filler_category: &'a str,
}

impl<'a> MarchSolver<'a> {
    pub fn new(
        catalog: &'a Catalog,
        cache: &'a TalentCache,
        roster: &'a ResolvedRoster,
        filler_category: &'a str,
    ) -> Self {
        Self {
            catalog,
            cache,
            roster,
            filler_category,
        }
    }

    fn category(&self, entity: EntityRef) -> &str {
        match entity.hero_id() {
            Some(id) => &self.catalog.hero(id).category,
            None => self.filler_category,
        }
    }

    pub fn solve(&self, main: EntityRef, deputy: EntityRef) -> March {
        let alternate_mode = self.roster.modifiers.alternate_mode;

        // 1. Skills
        let m_skill = skill_speed(
            self.catalog,
            main,
            self.roster.level_of(main),
            true,
            alternate_mode,
        );
        let d_skill = skill_speed(
            self.catalog,
            deputy,
            self.roster.level_of(deputy),
            false,
            alternate_mode,
        );

        // 2. Keystone (main only)
        let (keystone_name, keystone_val) = main
            .hero_id()
            .and_then(|id| self.catalog.hero(id).keystone.as_deref())
            .map(|name| (name, self.catalog.keystone_bonus(name).unwrap_or(0.0)))
            .unwrap_or((NO_KEYSTONE, 0.0));

        let mut skill_breakdown = format!(
            "Main({}) + Dep({}) + {}({})",
            fmt_pct(m_skill),
            fmt_pct(d_skill),
            keystone_name,
            fmt_pct(keystone_val)
        );

        // 3. Artifacts
        let mut artifact_bonus = 0.0;
        for artifact in &self.roster.modifiers.artifacts {
            let holder = EntityRef::Hero(artifact.holder);
            if holder == main || holder == deputy {
                artifact_bonus += artifact.bonus;
                skill_breakdown.push_str(&format!(
                    " + {}({})",
                    artifact.name,
                    fmt_pct(artifact.bonus)
                ));
            }
        }

        let fixed_speed = m_skill + d_skill + keystone_val + artifact_bonus;

        // 4. Talent search on the main's trees
        let gap = self.roster.target_speed - fixed_speed;
        let (talent_speed, talent_config, talent_cost) = match main.hero_id() {
            Some(id) => {
                let options = self.cache.get_or_compute(self.catalog, id);
                match options.closest(gap) {
                    Some(best) => (best.speed, best.description.clone(), best.cost),
                    None => (0.0, NO_TALENTS_AVAILABLE.to_string(), 0),
                }
            }
            None => (0.0, NO_TALENTS_AVAILABLE.to_string(), 0),
        };

        let main_name = main.display_name(self.catalog);
        let deputy_name = deputy.display_name(self.catalog);
        let compatibility = self
            .catalog
            .compatibility(&main_name, &deputy_name)
            .map(str::to_string);

        March {
            synergy_match: self.category(main) == self.category(deputy),
            compatibility,
            main: main_name,
            deputy: deputy_name,
            main_ref: main,
            deputy_ref: deputy,
            total_speed: fixed_speed + talent_speed,
            fixed_speed,
            talent_speed,
            talent_config,
            talent_cost,
            skill_breakdown,
        }
    }
}
