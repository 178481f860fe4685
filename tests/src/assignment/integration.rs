#![cfg(test)]
use kringle_common::assignment::PriorAssignments;
use kringle_common::error::UnsatisfiableConstraints;
use kringle_core::{assign, assign_with_stats, build_graph, run_assignment};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::util::{assert_valid, employees, person};

/// Four colleagues who gave around a circle last year must not repeat it.
#[test]
fn assignment_respects_last_year() {
    let participants = vec![
        person("Alice", "alice@example.com"),
        person("Bob", "bob@example.com"),
        person("Charlie", "charlie@example.com"),
        person("David", "david@example.com"),
    ];
    let prior: PriorAssignments = [
        ("alice@example.com", "bob@example.com"),
        ("bob@example.com", "charlie@example.com"),
        ("charlie@example.com", "david@example.com"),
        ("david@example.com", "alice@example.com"),
    ]
    .into_iter()
    .collect();

    let result = run_assignment(&participants, &prior, &mut rand::rng());

    assert!(result.is_ok(), "Assignment failed: {:?}", result.err());
    assert_valid(&participants, &prior, &result.unwrap());
}

#[test]
fn single_employee_cannot_be_paired() {
    let participants = vec![person("Eve", "eve@example.com")];

    let result = run_assignment(&participants, &PriorAssignments::new(), &mut rand::rng());

    assert_eq!(result, Err(UnsatisfiableConstraints { participants: 1 }));
}

#[test]
fn two_employees_swap() {
    let participants = vec![
        person("Xavier", "xavier@example.com"),
        person("Yasmine", "yasmine@example.com"),
    ];

    let map = run_assignment(&participants, &PriorAssignments::new(), &mut rand::rng()).unwrap();

    assert_eq!(map.receiver_of(&participants[0]), Some(&participants[1]));
    assert_eq!(map.receiver_of(&participants[1]), Some(&participants[0]));
}

#[test]
fn triangle_that_only_fits_one_way() {
    // Each of the three may only give to the next one round the triangle.
    let participants = employees(3);
    let prior: PriorAssignments = [
        ("emp0@example.com", "emp2@example.com"),
        ("emp1@example.com", "emp0@example.com"),
        ("emp2@example.com", "emp1@example.com"),
    ]
    .into_iter()
    .collect();

    for seed in 0..16 {
        let map = run_assignment(&participants, &prior, &mut StdRng::seed_from_u64(seed)).unwrap();

        assert_eq!(map.receiver_of(&participants[0]), Some(&participants[1]));
        assert_eq!(map.receiver_of(&participants[1]), Some(&participants[2]));
        assert_eq!(map.receiver_of(&participants[2]), Some(&participants[0]));
    }
}

#[test]
fn two_people_who_swapped_last_year_are_unsatisfiable() {
    let participants = employees(2);
    let prior: PriorAssignments = [
        ("emp0@example.com", "emp1@example.com"),
        ("emp1@example.com", "emp0@example.com"),
    ]
    .into_iter()
    .collect();

    let result = run_assignment(&participants, &prior, &mut rand::rng());

    assert_eq!(result, Err(UnsatisfiableConstraints { participants: 2 }));
}

#[test]
fn prior_pairings_of_people_who_left_are_ignored() {
    let participants = employees(5);
    let prior: PriorAssignments = [
        ("former@example.com", "emp0@example.com"),
        ("emp0@example.com", "former@example.com"),
        ("emp1@example.com", "emp2@example.com"),
    ]
    .into_iter()
    .collect();

    for seed in 0..16 {
        let map = run_assignment(&participants, &prior, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_valid(&participants, &prior, &map);
    }
}

#[test]
fn same_seed_draws_the_same_pairs() {
    let participants = employees(40);
    let prior = PriorAssignments::new();

    let first = run_assignment(&participants, &prior, &mut StdRng::seed_from_u64(99)).unwrap();
    let second = run_assignment(&participants, &prior, &mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn graph_and_search_compose_like_run_assignment() {
    let participants = employees(25);
    let prior: PriorAssignments = [
        ("emp0@example.com", "emp1@example.com"),
        ("emp1@example.com", "emp2@example.com"),
        ("emp2@example.com", "emp3@example.com"),
    ]
    .into_iter()
    .collect();

    let graph = build_graph(&participants, &prior, &mut StdRng::seed_from_u64(11));
    let map = assign(&graph).unwrap();

    assert_valid(&participants, &prior, &map);
    assert_eq!(
        Ok(map),
        run_assignment(&participants, &prior, &mut StdRng::seed_from_u64(11))
    );
}

/// Nobody may give to the person everybody drew last year, so the office
/// has to be told rather than kept waiting.
#[test]
fn everybody_drew_the_same_colleague_last_year() {
    let participants = employees(30);
    let prior: PriorAssignments = (1..30)
        .map(|i| (format!("emp{i}@example.com"), String::from("emp0@example.com")))
        .collect();

    let result = run_assignment(&participants, &prior, &mut rand::rng());

    assert_eq!(result, Err(UnsatisfiableConstraints { participants: 30 }));
}

#[test]
fn search_work_is_bounded_by_the_graph() {
    let participants = employees(1000);
    let prior: PriorAssignments = (0..1000)
        .map(|i| (format!("emp{i}@example.com"), format!("emp{}@example.com", (i + 1) % 1000)))
        .collect();

    for seed in 0..3 {
        let graph = build_graph(&participants, &prior, &mut StdRng::seed_from_u64(seed));
        let (map, stats) = assign_with_stats(&graph).unwrap();

        assert_valid(&participants, &prior, &map);
        assert!(stats.commits <= graph.edge_count() as u64, "seed {seed}: {stats:?}");
    }
}

#[test]
fn stress_thousand_employees() {
    let participants = employees(1000);
    let prior = PriorAssignments::new();

    let map = run_assignment(&participants, &prior, &mut rand::rng()).unwrap();

    assert_valid(&participants, &prior, &map);
}

#[test]
fn stress_thousand_employees_with_last_year() {
    let participants = employees(1000);
    let prior: PriorAssignments = (0..1000)
        .map(|i| (format!("emp{i}@example.com"), format!("emp{}@example.com", (i + 7) % 1000)))
        .collect();

    let map = run_assignment(&participants, &prior, &mut StdRng::seed_from_u64(1000)).unwrap();

    assert_valid(&participants, &prior, &map);
}
