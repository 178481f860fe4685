use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use kringle_common::assignment::{AssignmentMap, PriorAssignments};
use kringle_common::participant::Participant;

pub fn employees(n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| Participant::new(format!("Emp{i}"), format!("emp{i}@example.com")).unwrap())
        .collect()
}

pub fn person(name: &str, email: &str) -> Participant {
    Participant::new(name, email).unwrap()
}

/// Every participant gives once, receives once, never to themselves and
/// never to last round's partner.
pub fn assert_valid(participants: &[Participant], prior: &PriorAssignments, map: &AssignmentMap) {
    assert_eq!(map.len(), participants.len(), "Not every participant was paired");

    let mut givers: HashSet<&str> = HashSet::new();
    let mut receivers: HashSet<&str> = HashSet::new();

    for pairing in map {
        assert_ne!(pairing.giver, pairing.receiver, "{} drew themselves", pairing.giver);
        assert_ne!(
            prior.get(pairing.giver.email()),
            Some(pairing.receiver.email()),
            "{} drew last round's partner",
            pairing.giver
        );
        assert!(givers.insert(pairing.giver.email()), "{} gives twice", pairing.giver);
        assert!(receivers.insert(pairing.receiver.email()), "{} drawn twice", pairing.receiver);
    }

    for participant in participants {
        assert!(givers.contains(participant.email()));
        assert!(receivers.contains(participant.email()));
    }
}

/// A path under the system temp dir that no other test uses.
pub fn temp_csv(stem: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("kringle-{stem}-{}-{n}.csv", std::process::id()))
}
