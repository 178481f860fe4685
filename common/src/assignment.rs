use std::collections::{HashMap, HashSet};

use crate::participant::Participant;

/// Last round's pairings, keyed by giver email.
///
/// Givers that are missing from the map are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorAssignments {
    by_giver: HashMap<String, String>,
}

impl PriorAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `giver` gave to `receiver` last round, replacing any
    /// earlier entry for the same giver.
    pub fn insert(&mut self, giver: impl Into<String>, receiver: impl Into<String>) {
        self.by_giver.insert(giver.into(), receiver.into());
    }

    /// Last round's receiver for `giver`, if one was recorded.
    pub fn get(&self, giver: &str) -> Option<&str> {
        self.by_giver.get(giver).map(String::as_str)
    }

    /// Whether `giver` gave to `receiver` last round.
    pub fn forbids(&self, giver: &str, receiver: &str) -> bool {
        self.get(giver) == Some(receiver)
    }

    pub fn len(&self) -> usize {
        self.by_giver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_giver.is_empty()
    }
}

impl<G, R> FromIterator<(G, R)> for PriorAssignments
where
    G: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (G, R)>>(iter: I) -> Self {
        let mut prior = Self::new();
        for (giver, receiver) in iter {
            prior.insert(giver, receiver);
        }
        prior
    }
}

/// One giver and the partner found for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub giver: Participant,
    pub receiver: Participant,
}

/// A complete round of pairings.
///
/// Produced only by a successful search, which guarantees that every
/// participant appears exactly once as a giver and exactly once as a receiver.
/// Pairings are kept in the order the givers were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentMap {
    pairings: Vec<Pairing>,
}

impl AssignmentMap {
    /// Wraps pairings that the caller has already checked.
    ///
    /// Debug builds assert that the pairings form a round.
    #[doc(hidden)]
    pub fn from_pairings(pairings: Vec<Pairing>) -> Self {
        let map = Self { pairings };
        debug_assert!(map.is_round(), "pairings do not form a round: {map:?}");
        map
    }

    /// Whether every giver is paired with someone else and every giver is
    /// also drawn exactly once.
    fn is_round(&self) -> bool {
        let mut givers: HashSet<&Participant> = HashSet::new();
        let mut receivers: HashSet<&Participant> = HashSet::new();

        self.pairings.iter().all(|pairing| {
            pairing.giver != pairing.receiver
                && givers.insert(&pairing.giver)
                && receivers.insert(&pairing.receiver)
        }) && givers == receivers
    }

    /// The receiver assigned to `giver`.
    ///
    /// Linear in the number of pairings.
    pub fn receiver_of(&self, giver: &Participant) -> Option<&Participant> {
        self.pairings
            .iter()
            .find(|pairing| &pairing.giver == giver)
            .map(|pairing| &pairing.receiver)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pairing> {
        self.pairings.iter()
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssignmentMap {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}

impl IntoIterator for AssignmentMap {
    type Item = Pairing;
    type IntoIter = std::vec::IntoIter<Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.into_iter()
    }
}
