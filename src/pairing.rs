//! Lazy enumeration of every oriented (main, deputy) partition of a roster.
//!
//! The walk is depth-first over an explicit frame stack so roster size never
//! turns into call-stack depth. Order matches the natural recursion: the first
//! entity is paired with each later one in turn, leading first, then deputizing.

use crate::roster::EntityRef;
use std::collections::BTreeSet;

pub type Pairing = Vec<(EntityRef, EntityRef)>;

struct Frame {
    items: Vec<EntityRef>,
    partner: usize,
    flipped: bool,
}

impl Frame {
    fn new(items: Vec<EntityRef>) -> Self {
        Self {
            items,
            partner: 1,
            flipped: false,
        }
    }

    /// Next oriented pair at this depth, with the entities still unpaired.
    fn advance(
        &mut self,
        must_lead: &BTreeSet<EntityRef>,
    ) -> Option<((EntityRef, EntityRef), Vec<EntityRef>)> {
        let first = self.items[0];

        while self.partner < self.items.len() {
            let partner_idx = self.partner;
            let other = self.items[partner_idx];
            let flipped = self.flipped;

            if flipped {
                self.flipped = false;
                self.partner += 1;
            } else {
                self.flipped = true;
            }

            let pair = if flipped { (other, first) } else { (first, other) };
            if must_lead.contains(&pair.1) {
                continue;
            }

            let rest: Vec<EntityRef> = self
                .items
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != 0 && i != partner_idx)
                .map(|(_, &e)| e)
                .collect();

            // Dead end: more leaders than marches left to lead
            if rest.len() % 2 == 0 {
                let leaders = rest.iter().filter(|e| must_lead.contains(e)).count();
                if leaders > rest.len() / 2 {
                    continue;
                }
            }

            return Some((pair, rest));
        }
        None
    }
}

pub struct Pairings {
    must_lead: BTreeSet<EntityRef>,
    stack: Vec<Frame>,
    current: Pairing,
    pending_empty: bool,
}

/// Every way to split `entities` into oriented pairs, never placing a
/// `must_lead` entity in the deputy slot. With an odd count the entity left
/// over at the bottom of each branch is dropped.
pub fn enumerate_pairings(entities: &[EntityRef], must_lead: &BTreeSet<EntityRef>) -> Pairings {
    let mut stack = Vec::new();
    if entities.len() >= 2 {
        stack.push(Frame::new(entities.to_vec()));
    }

    Pairings {
        must_lead: must_lead.clone(),
        stack,
        current: Vec::with_capacity(entities.len() / 2),
        pending_empty: entities.len() < 2,
    }
}

impl Iterator for Pairings {
    type Item = Pairing;

    fn next(&mut self) -> Option<Pairing> {
        if self.pending_empty {
            self.pending_empty = false;
            return Some(Vec::new());
        }

        loop {
            let depth = self.stack.len();
            let top = self.stack.last_mut()?;

            match top.advance(&self.must_lead) {
                Some((pair, rest)) => {
                    self.current.truncate(depth - 1);
                    self.current.push(pair);
                    if rest.len() < 2 {
                        return Some(self.current.clone());
                    }
                    self.stack.push(Frame::new(rest));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
