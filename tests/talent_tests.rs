mod common;

use marchsync::talents::{compute_talent_options, TalentCache, NO_TALENTS};
use std::sync::Arc;

#[test]
fn test_neya_full_allocation_range() {
    let catalog = common::builtin();
    let neya = catalog.hero(catalog.hero_id("Neya").unwrap());
    let options = compute_talent_options(neya, &catalog);

    let none = options.get(0.0).unwrap();
    assert_eq!(none.description, NO_TALENTS);
    assert_eq!(none.cost, 0);

    let innate_only = options.get(6.0).unwrap();
    assert_eq!(innate_only.description, "Innate(6%)");
    assert_eq!(innate_only.cost, 0);

    let top = options.get(55.0).unwrap();
    assert_eq!(top.cost, 41);
    assert_eq!(top.description, "Cavalry(15%), Pvp(20%), Mobility(20%)");

    let top_innate = options.get(61.0).unwrap();
    assert_eq!(
        top_innate.description,
        "Cavalry(15%), Pvp(20%), Mobility(20%) + Innate(6%)"
    );

    let max = options.iter().map(|o| o.speed).fold(f32::MIN, f32::max);
    assert_eq!(max, 61.0);
}

#[test]
fn test_cheapest_allocation_wins_for_same_speed() {
    let catalog = common::builtin();
    let neya = catalog.hero(catalog.hero_id("Neya").unwrap());
    let options = compute_talent_options(neya, &catalog);

    // 45% is reachable three ways; the 30-point route is cheapest.
    let cfg = options.get(45.0).unwrap();
    assert_eq!(cfg.cost, 30);
    assert_eq!(cfg.description, "Cavalry(15%), Pvp(10%), Mobility(20%)");

    let cfg = options.get(25.0).unwrap();
    assert_eq!(cfg.cost, 10);
    assert_eq!(cfg.description, "Cavalry(15%), Mobility(10%)");
}

#[test]
fn test_single_tree_hero() {
    let catalog = common::builtin();
    let hero = catalog.hero(catalog.hero_id("Lieh-Shan Yen").unwrap());
    let options = compute_talent_options(hero, &catalog);

    let speeds: Vec<f32> = options.iter().map(|o| o.speed).collect();
    assert_eq!(speeds, vec![0.0, 6.0, 15.0, 21.0]);
}

#[test]
fn test_point_budget_excludes_expensive_mixes() {
    let catalog = common::mixed();
    let lancer = catalog.hero(catalog.hero_id("Lancer").unwrap());
    let options = compute_talent_options(lancer, &catalog);

    // Swift(20%) + Rush(15%) would need 50 points.
    assert!(options.get(35.0).is_none());
    assert_eq!(options.len(), 10);

    let cfg = options.get(25.0).unwrap();
    assert_eq!(cfg.cost, 35);
    assert_eq!(cfg.description, "Swift(10%), Rush(15%)");
}

#[test]
fn test_hero_without_trees_has_no_options() {
    let catalog = common::mixed();
    let shaman = catalog.hero(catalog.hero_id("Shaman").unwrap());
    let options = compute_talent_options(shaman, &catalog);
    assert!(options.is_empty());
    assert!(options.closest(20.0).is_none());
}

#[test]
fn test_closest_picks_nearest_speed() {
    let catalog = common::builtin();
    let hero = catalog.hero(catalog.hero_id("Lieh-Shan Yen").unwrap());
    let options = compute_talent_options(hero, &catalog);

    assert_eq!(options.closest(100.0).unwrap().speed, 21.0);
    assert_eq!(options.closest(-10.0).unwrap().speed, 0.0);
    assert_eq!(options.closest(14.0).unwrap().speed, 15.0);
    // 18 sits between 15 and 21; the smaller one wins.
    assert_eq!(options.closest(18.0).unwrap().speed, 15.0);
}

#[test]
fn test_cache_computes_once_per_hero() {
    let catalog = common::builtin();
    let cache = TalentCache::new();
    let neya = catalog.hero_id("Neya").unwrap();

    let first = cache.get_or_compute(&catalog, neya);
    let second = cache.get_or_compute(&catalog, neya);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    cache.get_or_compute(&catalog, catalog.hero_id("Urag").unwrap());
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cache_separates_catalogs() {
    let builtin = common::builtin();
    let mixed = common::mixed();
    let cache = TalentCache::new();

    // HeroId(0) exists in both catalogs but names a different hero.
    let a = cache.get_or_compute(&builtin, builtin.hero_id("Neya").unwrap());
    let b = cache.get_or_compute(&mixed, mixed.hero_id("Rider").unwrap());
    assert_ne!(a.len(), b.len());
    assert_eq!(cache.len(), 2);
}
