pub mod defaults;
pub mod loader;
pub mod types;

pub use self::loader::{load_catalog_from_file, load_catalog_from_reader};
pub use self::types::{
    ArtifactDef, CatalogDef, CompatibilityDef, HeroDef, SpecialRule, TalentRules, TreeMilestones,
};

use crate::error::MsResult;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;

/// Index of a hero inside its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeroId(pub u16);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only hero, tree and bonus tables for a run.
#[derive(Debug, Clone)]
pub struct Catalog {
    def: CatalogDef,
    by_name: HashMap<String, HeroId>,
    fingerprint: String,
}

impl Catalog {
    pub fn from_def(def: CatalogDef) -> MsResult<Self> {
        loader::validate(&def)?;
        Ok(Self::index(def))
    }

    /// The built-in roster. Covered by `test_builtin_catalog_is_valid`.
    pub fn builtin() -> Self {
        Self::index(defaults::builtin_def())
    }

    fn index(def: CatalogDef) -> Self {
        let by_name = def
            .heroes
            .iter()
            .enumerate()
            .map(|(i, h)| (h.name.clone(), HeroId(i as u16)))
            .collect();

        let bytes = serde_json::to_vec(&def).unwrap_or_default();
        let fingerprint = hex::encode(Sha256::digest(&bytes));

        Self {
            def,
            by_name,
            fingerprint,
        }
    }

    pub fn version(&self) -> &str {
        &self.def.version
    }

    /// SHA-256 of the canonical catalog JSON. Changes whenever any table does.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn rules(&self) -> &TalentRules {
        &self.def.rules
    }

    pub fn hero_id(&self, name: &str) -> Option<HeroId> {
        self.by_name.get(name).copied()
    }

    pub fn hero(&self, id: HeroId) -> &HeroDef {
        &self.def.heroes[id.0 as usize]
    }

    pub fn heroes(&self) -> impl Iterator<Item = (HeroId, &HeroDef)> {
        self.def
            .heroes
            .iter()
            .enumerate()
            .map(|(i, h)| (HeroId(i as u16), h))
    }

    pub fn hero_count(&self) -> usize {
        self.def.heroes.len()
    }

    pub fn tree(&self, name: &str) -> Option<&TreeMilestones> {
        self.def.trees.get(name)
    }

    pub fn keystone_bonus(&self, name: &str) -> Option<f32> {
        self.def.keystones.get(name).copied()
    }

    pub fn artifact(&self, name: &str) -> Option<&ArtifactDef> {
        self.def
            .artifacts
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Tag for a (main, deputy) combination. Directional entries only match
    /// in their declared orientation.
    pub fn compatibility(&self, main: &str, deputy: &str) -> Option<&str> {
        self.def
            .compatibilities
            .iter()
            .find(|c| {
                (c.main == main && c.deputy == deputy)
                    || (c.bidirectional && c.main == deputy && c.deputy == main)
            })
            .map(|c| c.tag.as_str())
    }
}
