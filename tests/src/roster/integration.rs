#![cfg(test)]
use std::fs;

use kringle_common::error::ValidationError;
use kringle_core::roster::{self, RosterError};
use kringle_core::run_assignment;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::util::{assert_valid, temp_csv};

const EMPLOYEES: &str = "Employee_Name,Employee_EmailID\n\
                         Hamish Murray,hamish.murray@acme.com\n\
                         Layla Graham,layla.graham@acme.com\n\
                         Matthew King,matthew.king@acme.com\n\
                         Benjamin Collins,benjamin.collins@acme.com\n\
                         Isabella Scott,isabella.scott@acme.com\n";

const PREVIOUS: &str = "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID\n\
                        Hamish Murray,hamish.murray@acme.com,Benjamin Collins,benjamin.collins@acme.com\n\
                        Layla Graham,layla.graham@acme.com,Matthew King,matthew.king@acme.com\n\
                        Matthew King,matthew.king@acme.com,Isabella Scott,isabella.scott@acme.com\n";

/// Files in, engine, file out, and the output reads back as a valid round.
#[test]
fn full_round_through_files() -> anyhow::Result<()> {
    let employees_path = temp_csv("employees");
    let previous_path = temp_csv("previous");
    let output_path = temp_csv("output");
    fs::write(&employees_path, EMPLOYEES)?;
    fs::write(&previous_path, PREVIOUS)?;

    let participants = roster::read_participants(&employees_path)?;
    let prior = roster::read_prior_assignments(&previous_path)?;
    let map = run_assignment(&participants, &prior, &mut StdRng::seed_from_u64(3))?;
    roster::write_assignments(&output_path, &map)?;

    assert_eq!(participants.len(), 5);
    assert_eq!(prior.len(), 3);
    assert_valid(&participants, &prior, &map);

    let written = fs::read_to_string(&output_path)?;
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID")
    );
    assert_eq!(lines.count(), 5);

    // The output doubles as next year's constraint file.
    let next_prior = roster::read_prior_assignments(&output_path)?;
    for pairing in &map {
        assert_eq!(next_prior.get(pairing.giver.email()), Some(pairing.receiver.email()));
    }

    for path in [employees_path, previous_path, output_path] {
        let _ = fs::remove_file(path);
    }
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let path = temp_csv("does-not-exist");

    let err = roster::read_participants(&path).unwrap_err();

    assert!(matches!(err, RosterError::Io { .. }), "Unexpected error: {err:?}");
}

#[test]
fn invalid_email_in_file_names_row() -> anyhow::Result<()> {
    let path = temp_csv("invalid");
    fs::write(
        &path,
        "Employee_Name,Employee_EmailID\nAlice,alice@example.com\nCharlie,charlie.example.com\n",
    )?;

    let err = roster::read_participants(&path).unwrap_err();
    let _ = fs::remove_file(&path);

    match err {
        RosterError::Validation { row, source, .. } => {
            assert_eq!(row, 2);
            assert_eq!(source, ValidationError::InvalidEmail("charlie.example.com".to_string()));
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    Ok(())
}
