//! Candidate graph construction.
//!
//! Every participant gets the list of people they may be paired with this
//! round: everybody except themselves and the person they gave to last round.
//! Each list is shuffled on its own so that the greedy phase of the search
//! does not always favour participants near the front of the input.

use kringle_common::assignment::PriorAssignments;
use kringle_common::participant::Participant;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Allowed partners per participant, stored as positions in the participant
/// slice the graph was built from.
#[derive(Debug, Clone)]
pub struct CandidateGraph<'p> {
    participants: &'p [Participant],
    candidates: Vec<Vec<usize>>,
}

impl<'p> CandidateGraph<'p> {
    pub fn participants(&self) -> &'p [Participant] {
        self.participants
    }

    /// Candidate positions for the participant at `giver`, in search order.
    ///
    /// # Panics
    ///
    /// If `giver` is not a position in [`Self::participants`].
    pub fn candidates(&self, giver: usize) -> &[usize] {
        &self.candidates[giver]
    }

    /// Candidate participants for `giver`, in search order.
    #[cfg(test)]
    pub(crate) fn candidates_of(&self, giver: &Participant) -> Option<impl Iterator<Item = &'p Participant> + '_> {
        let position = self.participants.iter().position(|p| p == giver)?;
        let participants = self.participants;
        Some(self.candidates[position].iter().map(move |&c| &participants[c]))
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// A graph with a fixed candidate order.
    #[cfg(test)]
    pub(crate) fn from_candidates(participants: &'p [Participant], candidates: Vec<Vec<usize>>) -> Self {
        assert_eq!(participants.len(), candidates.len());
        Self {
            participants,
            candidates,
        }
    }

    /// Total number of (giver, candidate) edges.
    pub fn edge_count(&self) -> usize {
        self.candidates.iter().map(Vec::len).sum()
    }
}

/// Builds the candidate graph for `participants`.
///
/// A participant is never their own candidate, and never a candidate for the
/// giver who had them last round. Fewer than two participants yield empty
/// candidate lists.
pub fn build_graph<'p, R>(
    participants: &'p [Participant],
    prior: &PriorAssignments,
    rng: &mut R,
) -> CandidateGraph<'p>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<Vec<usize>> = participants
        .iter()
        .map(|giver| {
            let mut allowed: Vec<usize> = participants
                .iter()
                .enumerate()
                .filter(|(_, receiver)| {
                    receiver.email() != giver.email() && !prior.forbids(giver.email(), receiver.email())
                })
                .map(|(idx, _)| idx)
                .collect();

            allowed.shuffle(&mut *rng);
            allowed
        })
        .collect();

    let graph = CandidateGraph {
        participants,
        candidates,
    };

    debug!(
        "Candidate graph built: {} participants, {} edges",
        graph.len(),
        graph.edge_count()
    );

    graph
}
