//! Input boundary: turns the names a user picked into tagged entity references.
//!
//! Everything downstream works with [`EntityRef`] and never looks at names again.

use crate::catalog::{Catalog, HeroId};
use crate::consts::{DEFAULT_TARGET_SPEED, FILLER_PREFIX, MAX_FILLERS, MAX_SKILL_LEVEL};
use crate::error::{MarchError, MsResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityRef {
    Hero(HeroId),
    /// 1-based placeholder slot. Contributes nothing to any bonus.
    Filler(u8),
}

impl EntityRef {
    pub fn hero_id(&self) -> Option<HeroId> {
        match self {
            EntityRef::Hero(id) => Some(*id),
            EntityRef::Filler(_) => None,
        }
    }

    pub fn display_name(&self, catalog: &Catalog) -> String {
        match self {
            EntityRef::Hero(id) => catalog.hero(*id).name.clone(),
            EntityRef::Filler(i) => format!("{} {}", FILLER_PREFIX, i),
        }
    }
}

/// Raw user choices, as collected by a form or the command line.
#[derive(Debug, Clone, TypedBuilder, Serialize, Deserialize)]
pub struct PlanRequest {
    #[builder(default)]
    pub heroes: Vec<String>,
    /// Skill level per hero name (0..=5). Missing entries count as 0.
    #[builder(default)]
    pub levels: HashMap<String, u8>,
    #[builder(default = DEFAULT_TARGET_SPEED)]
    pub target_speed: f32,
    /// Forced (main, deputy) pairs.
    #[builder(default)]
    pub pinned: Vec<(String, String)>,
    /// Heroes that must lead whichever march they end up in.
    #[builder(default)]
    pub leader_only: Vec<String>,
    #[builder(default)]
    pub artifacts: Vec<String>,
    #[builder(default = false)]
    pub alternate_mode: bool,
    #[builder(default = 0)]
    pub fillers: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveArtifact {
    pub name: String,
    pub holder: HeroId,
    pub bonus: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modifiers {
    pub artifacts: Vec<ActiveArtifact>,
    pub alternate_mode: bool,
}

#[derive(Debug, Clone)]
pub struct ResolvedRoster {
    /// Selected heroes in selection order.
    pub selected: Vec<EntityRef>,
    pub fillers: Vec<EntityRef>,
    pub pinned: Vec<(EntityRef, EntityRef)>,
    pub leader_only: BTreeSet<EntityRef>,
    pub levels: HashMap<EntityRef, u8>,
    pub target_speed: f32,
    pub modifiers: Modifiers,
}

fn lookup(catalog: &Catalog, name: &str) -> MsResult<EntityRef> {
    catalog
        .hero_id(name.trim())
        .map(EntityRef::Hero)
        .ok_or_else(|| MarchError::UnknownHero(name.to_string()))
}

impl ResolvedRoster {
    pub fn resolve(catalog: &Catalog, request: &PlanRequest) -> MsResult<Self> {
        if !request.target_speed.is_finite() {
            return Err(MarchError::Config("Target speed must be a number".into()));
        }
        if request.fillers > MAX_FILLERS {
            return Err(MarchError::Config(format!(
                "At most {} fillers are allowed (got {})",
                MAX_FILLERS, request.fillers
            )));
        }

        // 1. Selection
        let mut selected = Vec::with_capacity(request.heroes.len());
        let mut seen = HashSet::new();
        for name in &request.heroes {
            let entity = lookup(catalog, name)?;
            if !seen.insert(entity) {
                return Err(MarchError::Config(format!(
                    "Hero '{}' is selected more than once",
                    name
                )));
            }
            selected.push(entity);
        }

        if selected.len() + request.fillers < 2 {
            return Err(MarchError::Config("Select 2+ heroes".into()));
        }

        let fillers = (1..=request.fillers as u8).map(EntityRef::Filler).collect();

        // 2. Levels
        let mut levels = HashMap::new();
        for (name, &level) in &request.levels {
            let entity = lookup(catalog, name)?;
            if level > MAX_SKILL_LEVEL {
                return Err(MarchError::Config(format!(
                    "Skill level for '{}' must be 0-{} (got {})",
                    name, MAX_SKILL_LEVEL, level
                )));
            }
            if !seen.contains(&entity) {
                debug!("Ignoring level for unselected hero '{}'", name);
                continue;
            }
            levels.insert(entity, level);
        }

        // 3. Constraints (validated later by the optimizer)
        let pinned = request
            .pinned
            .iter()
            .map(|(m, d)| -> MsResult<(EntityRef, EntityRef)> {
                Ok((lookup(catalog, m)?, lookup(catalog, d)?))
            })
            .collect::<MsResult<Vec<_>>>()?;

        let leader_only = request
            .leader_only
            .iter()
            .map(|n| lookup(catalog, n))
            .collect::<MsResult<BTreeSet<_>>>()?;

        // 4. Modifiers
        let mut artifacts = Vec::new();
        for name in &request.artifacts {
            let def = catalog
                .artifact(name)
                .ok_or_else(|| MarchError::Config(format!("Unknown artifact '{}'", name)))?;
            let holder = catalog.hero_id(&def.holder).ok_or_else(|| {
                MarchError::Validation(format!("Artifact holder '{}' missing", def.holder))
            })?;
            if !seen.contains(&EntityRef::Hero(holder)) {
                warn!(
                    "⚠️  Artifact '{}' needs '{}' on the roster; it will never trigger.",
                    def.name, def.holder
                );
            }
            artifacts.push(ActiveArtifact {
                name: def.name.clone(),
                holder,
                bonus: def.bonus,
            });
        }

        Ok(Self {
            selected,
            fillers,
            pinned,
            leader_only,
            levels,
            target_speed: request.target_speed,
            modifiers: Modifiers {
                artifacts,
                alternate_mode: request.alternate_mode,
            },
        })
    }

    pub fn level_of(&self, entity: EntityRef) -> u8 {
        self.levels.get(&entity).copied().unwrap_or(0)
    }
}
