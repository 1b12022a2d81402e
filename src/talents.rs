//! Talent allocation search: every affordable mix of tree milestones for a hero,
//! reduced to the cheapest allocation per achievable speed bonus.

use crate::catalog::{Catalog, HeroDef, HeroId};
use crate::consts::SPEED_KEY_SCALE;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};
use tracing::debug;

pub const NO_TALENTS: &str = "No Talents";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentConfig {
    pub speed: f32,
    pub description: String,
    pub cost: u32,
}

/// Achievable talent speeds for one hero, ascending by speed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TalentOptions {
    by_speed: BTreeMap<i64, TalentConfig>,
}

#[inline(always)]
fn speed_key(speed: f32) -> i64 {
    (speed * SPEED_KEY_SCALE).round() as i64
}

pub(crate) fn fmt_pct(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

impl TalentOptions {
    /// Records `speed` unless an allocation at most as expensive already reaches it.
    fn offer(&mut self, speed: f32, cost: u32, description: impl FnOnce() -> String) {
        match self.by_speed.get(&speed_key(speed)) {
            Some(existing) if existing.cost <= cost => {}
            _ => {
                self.by_speed.insert(
                    speed_key(speed),
                    TalentConfig {
                        speed,
                        description: description(),
                        cost,
                    },
                );
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_speed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_speed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TalentConfig> {
        self.by_speed.values()
    }

    pub fn get(&self, speed: f32) -> Option<&TalentConfig> {
        self.by_speed.get(&speed_key(speed))
    }

    /// Option whose speed is nearest to `gap`. Equidistant options resolve to
    /// the smaller speed.
    pub fn closest(&self, gap: f32) -> Option<&TalentConfig> {
        self.by_speed
            .values()
            .min_by(|a, b| (a.speed - gap).abs().total_cmp(&(b.speed - gap).abs()))
    }
}

struct BranchStep {
    cost: u32,
    speed: f32,
    label: Option<String>,
}

pub fn compute_talent_options(hero: &HeroDef, catalog: &Catalog) -> TalentOptions {
    let rules = catalog.rules();
    let innate_label = format!("Innate({}%)", fmt_pct(rules.innate_speed));

    // 1. One option list per tree: invest nothing, or stop at a milestone
    let branches: Vec<Vec<BranchStep>> = hero
        .trees
        .iter()
        .filter_map(|tree_name| {
            catalog.tree(tree_name).map(|milestones| {
                let mut steps = vec![BranchStep {
                    cost: 0,
                    speed: 0.0,
                    label: None,
                }];
                steps.extend(milestones.iter().map(|(&cost, &speed)| BranchStep {
                    cost,
                    speed,
                    label: Some(format!("{}({}%)", tree_name, fmt_pct(speed))),
                }));
                steps
            })
        })
        .collect();

    let mut options = TalentOptions::default();
    if branches.is_empty() {
        return options;
    }

    // 2. Cartesian product, capped by the point budget
    for combo in branches.iter().map(|b| b.iter()).multi_cartesian_product() {
        let cost: u32 = combo.iter().map(|s| s.cost).sum();
        if cost > rules.talent_points {
            continue;
        }
        let speed: f32 = combo.iter().map(|s| s.speed).sum();
        let parts: Vec<&str> = combo.iter().filter_map(|s| s.label.as_deref()).collect();

        options.offer(speed, cost, || {
            if parts.is_empty() {
                NO_TALENTS.to_string()
            } else {
                parts.join(", ")
            }
        });

        options.offer(speed + rules.innate_speed, cost, || {
            if parts.is_empty() {
                innate_label.clone()
            } else {
                format!("{} + {}", parts.join(", "), innate_label)
            }
        });
    }

    options
}

/// Memoizes [`compute_talent_options`] per catalog fingerprint and hero.
#[derive(Debug, Default)]
pub struct TalentCache {
    entries: RwLock<HashMap<(String, HeroId), Arc<TalentOptions>>>,
}

impl TalentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&self, catalog: &Catalog, hero: HeroId) -> Arc<TalentOptions> {
        let key = (catalog.fingerprint().to_string(), hero);

        if let Ok(map) = self.entries.read() {
            if let Some(hit) = map.get(&key) {
                return hit.clone();
            }
        }

        let options = Arc::new(compute_talent_options(catalog.hero(hero), catalog));
        debug!(
            "Talent options for '{}': {} distinct speeds",
            catalog.hero(hero).name,
            options.len()
        );

        if let Ok(mut map) = self.entries.write() {
            map.entry(key).or_insert_with(|| options.clone());
        }
        options
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_pct() {
        assert_eq!(fmt_pct(15.0), "15");
        assert_eq!(fmt_pct(-2.0), "-2");
        assert_eq!(fmt_pct(4.5), "4.5");
    }

    #[test]
    fn test_offer_keeps_cheapest_and_first_on_tie() {
        let mut opts = TalentOptions::default();
        opts.offer(20.0, 21, || "Pvp(20%)".into());
        opts.offer(20.0, 15, || "Mobility(20%)".into());
        opts.offer(20.0, 15, || "Later(20%)".into());

        let cfg = opts.get(20.0).unwrap();
        assert_eq!(cfg.cost, 15);
        assert_eq!(cfg.description, "Mobility(20%)");
    }

    #[test]
    fn test_closest_prefers_smaller_on_tie() {
        let mut opts = TalentOptions::default();
        opts.offer(0.0, 0, || NO_TALENTS.into());
        opts.offer(6.0, 0, || "Innate(6%)".into());

        assert_eq!(opts.closest(3.0).unwrap().speed, 0.0);
        assert_eq!(opts.closest(3.1).unwrap().speed, 6.0);
        assert!(TalentOptions::default().closest(3.0).is_none());
    }
}
