//! # Kringle Core
//!
//! The assignment engine and the CSV roster that feeds it.
//!
//! * **[`graph`]**: who may be paired with whom this round.
//! * **[`search`]**: backtracking over the candidate graph until every
//!   participant has exactly one partner.
//! * **[`roster`]**: reading participants and last round's pairings from CSV,
//!   writing the new pairings back out.
//!
//! The engine modules never touch the roster; callers load the inputs, hand
//! them to [`run_assignment`] and write the result themselves.

use kringle_common::assignment::{AssignmentMap, PriorAssignments};
use kringle_common::error::UnsatisfiableConstraints;
use kringle_common::participant::Participant;
use rand::Rng;

pub mod graph;
pub mod roster;
pub mod search;

pub use graph::{CandidateGraph, build_graph};
pub use search::{SearchStats, assign, assign_with_stats};

/// Builds the candidate graph and searches it in one go.
pub fn run_assignment<R>(
    participants: &[Participant],
    prior: &PriorAssignments,
    rng: &mut R,
) -> Result<AssignmentMap, UnsatisfiableConstraints>
where
    R: Rng + ?Sized,
{
    let graph = build_graph(participants, prior, rng);
    assign(&graph)
}
