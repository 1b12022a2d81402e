use marchsync::catalog::{Catalog, CatalogDef, HeroDef, TalentRules, TreeMilestones};
use marchsync::optimizer::deviation_score;
use marchsync::talents::compute_talent_options;
use proptest::prelude::*;
use std::collections::BTreeMap;

// --- STRATEGIES ---

prop_compose! {
    fn arb_tree()(
        milestones in proptest::collection::btree_map(1u32..40, 1u8..30, 1..4)
    ) -> TreeMilestones {
        milestones.into_iter().map(|(cost, bonus)| (cost, bonus as f32)).collect()
    }
}

prop_compose! {
    fn arb_catalog()(
        trees in proptest::collection::vec(arb_tree(), 1..4),
        points in 10u32..60,
        innate in 0u8..10
    ) -> CatalogDef {
        let names: Vec<String> = (0..trees.len()).map(|i| format!("T{}", i)).collect();
        let trees: BTreeMap<String, TreeMilestones> =
            names.iter().cloned().zip(trees).collect();
        CatalogDef {
            version: "prop".to_string(),
            rules: TalentRules { talent_points: points, innate_speed: innate as f32 },
            trees,
            heroes: vec![HeroDef {
                name: "Subject".to_string(),
                category: "Cavalry".to_string(),
                trees: names,
                skill_speeds: [0.0; 5],
                keystone: None,
                special_rule: None,
                mode_skill_speeds: None,
            }],
            ..Default::default()
        }
    }
}

/// Every (speed, cost) pair the point budget allows, innate included.
fn brute_force(def: &CatalogDef) -> Vec<(f32, u32)> {
    let mut combos: Vec<(f32, u32)> = vec![(0.0, 0)];
    for tree in &def.heroes[0].trees {
        let milestones = &def.trees[tree];
        let mut next = Vec::new();
        for &(speed, cost) in &combos {
            next.push((speed, cost));
            for (&c, &s) in milestones {
                next.push((speed + s, cost + c));
            }
        }
        combos = next;
    }
    let innate = def.rules.innate_speed;
    combos
        .into_iter()
        .filter(|&(_, cost)| cost <= def.rules.talent_points)
        .flat_map(|(speed, cost)| [(speed, cost), (speed + innate, cost)])
        .collect()
}

proptest! {
    #[test]
    fn prop_allocations_respect_budget(def in arb_catalog()) {
        let catalog = Catalog::from_def(def.clone()).unwrap();
        let options = compute_talent_options(catalog.hero(catalog.hero_id("Subject").unwrap()), &catalog);
        for opt in options.iter() {
            prop_assert!(opt.cost <= def.rules.talent_points);
        }
    }

    #[test]
    fn prop_each_speed_uses_cheapest_allocation(def in arb_catalog()) {
        let catalog = Catalog::from_def(def.clone()).unwrap();
        let options = compute_talent_options(catalog.hero(catalog.hero_id("Subject").unwrap()), &catalog);
        let combos = brute_force(&def);

        for opt in options.iter() {
            let cheapest = combos
                .iter()
                .filter(|(s, _)| (s - opt.speed).abs() < 1e-3)
                .map(|&(_, c)| c)
                .min()
                .unwrap();
            prop_assert_eq!(opt.cost, cheapest);
        }
        // Nothing reachable is missing.
        for (speed, _) in combos {
            prop_assert!(options.get(speed).is_some());
        }
    }

    #[test]
    fn prop_computation_is_idempotent(def in arb_catalog()) {
        let catalog = Catalog::from_def(def).unwrap();
        let hero = catalog.hero(catalog.hero_id("Subject").unwrap());
        prop_assert_eq!(compute_talent_options(hero, &catalog), compute_talent_options(hero, &catalog));
    }

    #[test]
    fn prop_closest_minimizes_distance(def in arb_catalog(), gap in -20.0f32..120.0) {
        let catalog = Catalog::from_def(def).unwrap();
        let options = compute_talent_options(catalog.hero(catalog.hero_id("Subject").unwrap()), &catalog);
        let best = options.closest(gap).unwrap();
        for opt in options.iter() {
            prop_assert!((best.speed - gap).abs() <= (opt.speed - gap).abs());
        }
    }

    #[test]
    fn prop_deviation_score_is_symmetric_and_nonnegative(
        offset in 0.0f32..40.0,
        target in 10.0f32..100.0
    ) {
        let above = deviation_score(target + offset, target, 1.5, 10.0);
        let below = deviation_score(target - offset, target, 1.5, 10.0);
        prop_assert!(above >= 0.0);
        prop_assert!((above - below).abs() < 1e-3);
    }
}
