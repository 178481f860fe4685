//! The assignment search.
//!
//! Givers are visited in input order. Each one takes the first candidate that
//! is neither claimed by an earlier giver nor already rejected for them. When a
//! giver runs out of candidates, the most recent commitment is undone and that
//! receiver is marked as rejected for its giver, which then tries again.
//!
//! Rejections are never lifted during a search. Each (giver, candidate) edge is
//! committed at most once, so the number of commits is bounded by the edge
//! count of the graph and the loop always terminates. The search gives up when
//! a dead end is reached with nothing left to undo, which only happens once
//! every choice of the first giver has been rejected.
//!
//! Because a rejection outlives the commitments it was made under, a receiver
//! refused to a later giver stays refused after an earlier giver changes its
//! pick. On sparse graphs this can report failure for a roster that does have
//! a valid round.

use std::collections::HashSet;

use kringle_common::assignment::{AssignmentMap, Pairing};
use kringle_common::error::UnsatisfiableConstraints;
use tracing::{debug, info, trace};

use crate::graph::CandidateGraph;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of times a receiver was committed to a giver.
    pub commits: u64,
    /// Number of commitments undone after a dead end.
    pub backtracks: u64,
}

/// Finds a full assignment over the participants of `graph`.
pub fn assign(graph: &CandidateGraph<'_>) -> Result<AssignmentMap, UnsatisfiableConstraints> {
    assign_with_stats(graph).map(|(assignments, _)| assignments)
}

/// Same as [`assign`], also reporting how much work the search did.
pub fn assign_with_stats(
    graph: &CandidateGraph<'_>,
) -> Result<(AssignmentMap, SearchStats), UnsatisfiableConstraints> {
    let mut search = Search::new(graph);
    let receivers = search.run()?;

    info!(
        "Assigned {} participants after {} commits and {} backtracks",
        receivers.len(),
        search.stats.commits,
        search.stats.backtracks
    );

    let participants = graph.participants();
    let pairings = receivers
        .into_iter()
        .enumerate()
        .map(|(giver, receiver)| Pairing {
            giver: participants[giver].clone(),
            receiver: participants[receiver].clone(),
        })
        .collect();

    Ok((AssignmentMap::from_pairings(pairings), search.stats))
}

struct Search<'g, 'p> {
    graph: &'g CandidateGraph<'p>,
    /// The receiver currently committed to each giver.
    ///
    /// # Invariant
    ///
    /// `assigned[g]` is `Some` if and only if `(g, _)` is on `history`.
    assigned: Vec<Option<usize>>,
    /// `used[r]` is `true` if and only if some giver holds `r` in `assigned`.
    used: Vec<bool>,
    /// Receivers rejected for each giver. Only grows during a search.
    exhausted: Vec<HashSet<usize>>,
    /// Length of the leading run of each giver's candidate list that lies in
    /// `exhausted`. Scans start here instead of at the front.
    ///
    /// # Invariant
    ///
    /// Every entry in `graph.candidates(g)[..skip[g]]` is in `exhausted[g]`.
    skip: Vec<usize>,
    /// Commitments in the order they were made.
    history: Vec<(usize, usize)>,
    stats: SearchStats,
}

impl<'g, 'p> Search<'g, 'p> {
    fn new(graph: &'g CandidateGraph<'p>) -> Self {
        let n = graph.len();
        Self {
            graph,
            assigned: vec![None; n],
            used: vec![false; n],
            exhausted: vec![HashSet::new(); n],
            skip: vec![0; n],
            history: Vec::with_capacity(n),
            stats: SearchStats::default(),
        }
    }

    /// Runs the search to completion and returns the receiver of every giver,
    /// indexed by giver position.
    fn run(&mut self) -> Result<Vec<usize>, UnsatisfiableConstraints> {
        let n = self.graph.len();
        let mut cursor = 0;

        while cursor < n {
            // Coming back to a giver after a dead end further down the line.
            if let Some(receiver) = self.assigned[cursor] {
                self.release(cursor, receiver);
            }

            match self.next_candidate(cursor) {
                Some(receiver) => {
                    self.commit(cursor, receiver);
                    cursor += 1;
                }
                None => {
                    let Some(&(giver, receiver)) = self.history.last() else {
                        debug!("Giver #{cursor} has no candidates left and nothing to undo");
                        return Err(UnsatisfiableConstraints { participants: n });
                    };

                    debug!("Dead end at giver #{cursor}, undoing #{giver} -> #{receiver}");
                    self.stats.backtracks += 1;
                    cursor = giver;
                }
            }
        }

        // Givers are committed in input order, so the history lines up with them.
        Ok(self.history.iter().map(|&(_, receiver)| receiver).collect())
    }

    /// The first candidate of `giver` that is neither taken nor rejected.
    fn next_candidate(&mut self, giver: usize) -> Option<usize> {
        let candidates = self.graph.candidates(giver);
        let exhausted = &self.exhausted[giver];

        let mut skip = self.skip[giver];
        while skip < candidates.len() && exhausted.contains(&candidates[skip]) {
            skip += 1;
        }
        self.skip[giver] = skip;

        candidates[skip..]
            .iter()
            .copied()
            .find(|receiver| !self.used[*receiver] && !exhausted.contains(receiver))
    }

    fn commit(&mut self, giver: usize, receiver: usize) {
        trace!("Commit #{giver} -> #{receiver}");
        self.assigned[giver] = Some(receiver);
        self.used[receiver] = true;
        self.history.push((giver, receiver));
        self.stats.commits += 1;
    }

    /// Undoes the commitment of `receiver` to `giver` and rejects that pair
    /// for the rest of the search.
    fn release(&mut self, giver: usize, receiver: usize) {
        debug_assert_eq!(self.assigned[giver], Some(receiver));
        debug_assert_eq!(self.history.last(), Some(&(giver, receiver)));

        self.history.pop();
        self.assigned[giver] = None;
        self.used[receiver] = false;
        self.exhausted[giver].insert(receiver);
    }
}
