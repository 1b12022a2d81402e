use marchsync::catalog::HeroId;
use marchsync::pairing::enumerate_pairings;
use marchsync::roster::EntityRef;
use rstest::rstest;
use std::collections::{BTreeSet, HashSet};

fn heroes(n: u16) -> Vec<EntityRef> {
    (0..n).map(|i| EntityRef::Hero(HeroId(i))).collect()
}

#[rstest]
#[case(2, 2)]
#[case(4, 12)]
#[case(6, 120)]
#[case(8, 1680)]
fn test_pairing_counts(#[case] n: u16, #[case] expected: usize) {
    let count = enumerate_pairings(&heroes(n), &BTreeSet::new()).count();
    assert_eq!(count, expected);
}

#[test]
fn test_every_pairing_uses_each_entity_once() {
    let items = heroes(6);
    for pairing in enumerate_pairings(&items, &BTreeSet::new()) {
        assert_eq!(pairing.len(), 3);
        let used: HashSet<EntityRef> = pairing.iter().flat_map(|&(m, d)| [m, d]).collect();
        assert_eq!(used.len(), 6);
    }
}

#[test]
fn test_pairings_are_distinct() {
    let items = heroes(6);
    let all: Vec<_> = enumerate_pairings(&items, &BTreeSet::new()).collect();
    let unique: HashSet<_> = all
        .iter()
        .map(|p| {
            let mut sorted = p.clone();
            sorted.sort();
            sorted
        })
        .collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_first_pairing_is_in_roster_order() {
    let items = heroes(4);
    let first = enumerate_pairings(&items, &BTreeSet::new()).next().unwrap();
    assert_eq!(first, vec![(items[0], items[1]), (items[2], items[3])]);
}

#[test]
fn test_must_lead_never_deputizes() {
    let items = heroes(4);
    let leaders: BTreeSet<_> = [items[0], items[1]].into_iter().collect();

    let all: Vec<_> = enumerate_pairings(&items, &leaders).collect();
    assert_eq!(all.len(), 2);
    for pairing in &all {
        for (_, deputy) in pairing {
            assert!(!leaders.contains(deputy));
        }
        assert_eq!(pairing.len(), 2);
    }
}

#[test]
fn test_too_many_leaders_yields_nothing() {
    let items = heroes(4);
    let leaders: BTreeSet<_> = items[..3].iter().copied().collect();
    assert_eq!(enumerate_pairings(&items, &leaders).count(), 0);
}

#[test]
fn test_degenerate_rosters() {
    let none = BTreeSet::new();
    let empty: Vec<_> = enumerate_pairings(&[], &none).collect();
    assert_eq!(empty, vec![Vec::new()]);

    let single: Vec<_> = enumerate_pairings(&heroes(1), &none).collect();
    assert_eq!(single, vec![Vec::new()]);
}

#[test]
fn test_fillers_pair_like_heroes() {
    let items = vec![
        EntityRef::Hero(HeroId(0)),
        EntityRef::Filler(1),
        EntityRef::Filler(2),
        EntityRef::Hero(HeroId(1)),
    ];
    assert_eq!(enumerate_pairings(&items, &BTreeSet::new()).count(), 12);
}
