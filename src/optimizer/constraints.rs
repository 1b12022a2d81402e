use crate::catalog::Catalog;
use crate::error::{MarchError, MsResult};
use crate::roster::{EntityRef, ResolvedRoster};
use std::collections::HashSet;

/// Rejects pin sets that reuse a hero or mix pinned pairs with leader-only pins.
/// Runs before any search work so a bad request never replaces prior results.
pub fn validate_constraints(catalog: &Catalog, roster: &ResolvedRoster) -> MsResult<()> {
    let selected: HashSet<EntityRef> = roster.selected.iter().copied().collect();
    let mut pinned = HashSet::new();

    for &(main, deputy) in &roster.pinned {
        for entity in [main, deputy] {
            if !selected.contains(&entity) {
                return Err(MarchError::Config(format!(
                    "Forced pairing uses '{}', who is not in the selected roster",
                    entity.display_name(catalog)
                )));
            }
            if !pinned.insert(entity) {
                return Err(MarchError::DuplicatePin(entity.display_name(catalog)));
            }
        }
    }

    for entity in &roster.leader_only {
        if !selected.contains(entity) {
            return Err(MarchError::Config(format!(
                "Leader-only hero '{}' is not in the selected roster",
                entity.display_name(catalog)
            )));
        }
        if pinned.contains(entity) {
            return Err(MarchError::PinLeaderOverlap(entity.display_name(catalog)));
        }
    }

    Ok(())
}
