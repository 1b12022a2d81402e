use crate::error::{MarchError, MsResult};
use crate::roster::EntityRef;
use std::collections::BTreeSet;
use tracing::debug;

/// An even roster ready for pairing, plus whoever sat out to make it even.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRoster {
    pub members: Vec<EntityRef>,
    pub benched: Option<EntityRef>,
}

impl CandidateRoster {
    fn is_pairable(&self, leader_only: &BTreeSet<EntityRef>) -> bool {
        let leaders = self
            .members
            .iter()
            .filter(|e| leader_only.contains(e))
            .count();
        leaders <= self.members.len() / 2
    }
}

/// Builds the rosters to enumerate once pinned heroes are removed.
///
/// Even rosters pass through. Odd rosters drop the last filler when there is
/// one; otherwise every hero not pinned as leader-only takes a turn on the bench.
pub fn candidate_rosters(
    remaining: &[EntityRef],
    fillers: &[EntityRef],
    leader_only: &BTreeSet<EntityRef>,
) -> MsResult<Vec<CandidateRoster>> {
    let mut roster: Vec<EntityRef> = remaining.to_vec();
    roster.extend_from_slice(fillers);
    let remaining_count = roster.len();

    let candidates = if roster.len() % 2 == 0 {
        vec![CandidateRoster {
            members: roster,
            benched: None,
        }]
    } else if let Some(&last_filler) = fillers.last() {
        roster.retain(|&e| e != last_filler);
        vec![CandidateRoster {
            members: roster,
            benched: None,
        }]
    } else {
        (0..roster.len())
            .filter(|&i| !leader_only.contains(&roster[i]))
            .map(|i| {
                let mut members = roster.clone();
                let benched = members.remove(i);
                CandidateRoster {
                    members,
                    benched: Some(benched),
                }
            })
            .collect()
    };

    let feasible: Vec<CandidateRoster> = candidates
        .into_iter()
        .filter(|c| c.is_pairable(leader_only))
        .collect();

    if feasible.is_empty() {
        return Err(MarchError::InfeasibleParity(format!(
            "{} remaining heroes cannot be split into marches with {} leader-only pins",
            remaining_count,
            leader_only.len()
        )));
    }

    debug!(
        "Parity: {} remaining -> {} candidate roster(s)",
        remaining_count,
        feasible.len()
    );
    Ok(feasible)
}
