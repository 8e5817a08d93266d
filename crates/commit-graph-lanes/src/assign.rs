use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use commit_graph_types::{Commit, HeadRef};

/// Fixed render palette. Lane `n` gets entry `n % PALETTE.len()`.
pub const PALETTE: [&str; 9] = [
    "#fd7f6f", "#beb9db", "#7eb0d5", "#b2e061", "#bd7ebe", "#ffb55a", "#ffee65", "#fdcce5", "#8bd3c7",
];

/// The lanes alive between one row and the next, sorted ascending.
pub type OccupancyRow = Vec<u32>;

fn color_for_lane(lane: u32) -> String {
    PALETTE[(lane as usize) % PALETTE.len()].to_string()
}

/// Lowest-index-first reuse pool, growing by one past the highest lane ever
/// handed out.
#[derive(Default)]
struct LaneAllocator {
    free: BinaryHeap<Reverse<u32>>,
    next_new: u32,
}

impl LaneAllocator {
    fn allocate(&mut self) -> u32 {
        match self.free.pop() {
            Some(Reverse(lane)) => lane,
            None => {
                let lane = self.next_new;
                self.next_new += 1;
                lane
            }
        }
    }

    fn release(&mut self, lane: u32) {
        self.free.push(Reverse(lane));
    }
}

/// Stamp every commit with `lineIndex`, `color`, and `isHead`, and return the
/// per-row lane occupancy matrix. `commits` must already be ordered
/// newest-first. Deterministic and append-stable: repeat runs
/// produce byte-identical output, and prepending no commits / appending only
/// older ones never perturbs lanes already handed to newer rows.
pub fn assign_lanes(commits: &mut [Commit], heads: &[HeadRef]) -> Vec<OccupancyRow> {
    let all_oids: HashSet<&str> = commits.iter().map(|c| c.oid.as_str()).collect();
    let head_oids: HashSet<&str> = heads.iter().map(|h| h.oid.as_str()).collect();

    let mut allocator = LaneAllocator::default();
    // oid -> lane reserved for whichever future row carries that oid.
    let mut reservations: HashMap<String, u32> = HashMap::new();
    let mut active: HashSet<u32> = HashSet::new();
    let mut occupancy = Vec::with_capacity(commits.len());

    for commit in commits.iter_mut() {
        let lane = match reservations.remove(&commit.oid) {
            Some(lane) => lane,
            None => allocator.allocate(),
        };
        active.insert(lane);

        commit.line_index = lane;
        commit.color = color_for_lane(lane);
        commit.is_head = head_oids.contains(commit.oid.as_str());

        let parent_oids: Vec<&str> = commit.parent_oids().collect();
        let mut release_own_lane = true;

        if let Some((&first, rest)) = parent_oids.split_first() {
            if all_oids.contains(first) {
                if reservations.contains_key(first) {
                    // A criss-cross merge: an earlier-processed commit already
                    // claimed this parent for a different lane. First one to
                    // claim wins; our lane has no future consumer.
                } else {
                    reservations.insert(first.to_string(), lane);
                    release_own_lane = false;
                }
            }
            // Parent outside the fetched window: no reservation to make,
            // the lane is released below and the renderer draws a truncated
            // line.

            for &parent in rest {
                if all_oids.contains(parent) && !reservations.contains_key(parent) {
                    let fresh = allocator.allocate();
                    active.insert(fresh);
                    reservations.insert(parent.to_string(), fresh);
                }
            }
        }

        if release_own_lane {
            active.remove(&lane);
            allocator.release(lane);
        }

        let mut row: OccupancyRow = active.iter().copied().collect();
        row.sort_unstable();
        occupancy.push(row);
    }

    occupancy
}

#[cfg(test)]
#[path = "assign_test.rs"]
mod assign_test;
