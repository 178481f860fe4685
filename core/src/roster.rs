//! # CSV Roster
//!
//! Participant lists and pairings travel as CSV files with these headers:
//!
//! * participants: `Employee_Name`, `Employee_EmailID`
//! * last round: `Employee_EmailID`, `Secret_Child_EmailID`
//! * output: `Employee_Name`, `Employee_EmailID`, `Secret_Child_Name`, `Secret_Child_EmailID`
//!
//! Columns that are not listed are ignored on input.

use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use kringle_common::assignment::{AssignmentMap, PriorAssignments};
use kringle_common::error::ValidationError;
use kringle_common::participant::Participant;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMPLOYEE_NAME: &str = "Employee_Name";
const EMPLOYEE_EMAIL: &str = "Employee_EmailID";
const CHILD_NAME: &str = "Secret_Child_Name";
const CHILD_EMAIL: &str = "Secret_Child_EmailID";

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("could not access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}, row {row}", path.display())]
    Validation {
        path: PathBuf,
        row: usize,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Deserialize)]
struct ParticipantRow {
    #[serde(rename = "Employee_Name")]
    name: Option<String>,
    #[serde(rename = "Employee_EmailID")]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriorRow {
    #[serde(rename = "Employee_EmailID")]
    giver: Option<String>,
    #[serde(rename = "Secret_Child_EmailID")]
    receiver: Option<String>,
}

#[derive(Debug, Serialize)]
struct PairingRow<'a> {
    #[serde(rename = "Employee_Name")]
    giver_name: &'a str,
    #[serde(rename = "Employee_EmailID")]
    giver_email: &'a str,
    #[serde(rename = "Secret_Child_Name")]
    receiver_name: &'a str,
    #[serde(rename = "Secret_Child_EmailID")]
    receiver_email: &'a str,
}

/// Reads and validates the participant list at `path`.
pub fn read_participants(path: &Path) -> Result<Vec<Participant>, RosterError> {
    participants_from_reader(open(path)?, path)
}

/// Reads last round's pairings at `path`.
pub fn read_prior_assignments(path: &Path) -> Result<PriorAssignments, RosterError> {
    prior_assignments_from_reader(open(path)?, path)
}

/// Writes `assignments` to `path`, replacing any existing file.
pub fn write_assignments(path: &Path, assignments: &AssignmentMap) -> Result<(), RosterError> {
    let file = File::create(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    assignments_to_writer(file, assignments, path)
}

/// Parses a participant list. `origin` only labels errors.
pub fn participants_from_reader<R: Read>(reader: R, origin: &Path) -> Result<Vec<Participant>, RosterError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    require_columns(&mut csv_reader, &[EMPLOYEE_NAME, EMPLOYEE_EMAIL], origin)?;

    let mut participants = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (idx, row) in csv_reader.deserialize::<ParticipantRow>().enumerate() {
        let row_number = idx + 1;
        let row = row.map_err(|source| csv_error(origin, source))?;

        let participant = row_to_participant(row).map_err(|source| RosterError::Validation {
            path: origin.to_path_buf(),
            row: row_number,
            source,
        })?;

        if !seen.insert(participant.email().to_string()) {
            return Err(RosterError::Validation {
                path: origin.to_path_buf(),
                row: row_number,
                source: ValidationError::DuplicateEmail(participant.email().to_string()),
            });
        }

        participants.push(participant);
    }

    debug!("Read {} participants from {}", participants.len(), origin.display());
    Ok(participants)
}

/// Parses last round's pairings. `origin` only labels errors.
pub fn prior_assignments_from_reader<R: Read>(reader: R, origin: &Path) -> Result<PriorAssignments, RosterError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    require_columns(&mut csv_reader, &[EMPLOYEE_EMAIL, CHILD_EMAIL], origin)?;

    let mut prior = PriorAssignments::new();

    for (idx, row) in csv_reader.deserialize::<PriorRow>().enumerate() {
        let row = row.map_err(|source| csv_error(origin, source))?;
        let validation = |field| RosterError::Validation {
            path: origin.to_path_buf(),
            row: idx + 1,
            source: ValidationError::MissingField { field },
        };

        let giver = non_empty(row.giver).ok_or_else(|| validation(EMPLOYEE_EMAIL))?;
        let receiver = non_empty(row.receiver).ok_or_else(|| validation(CHILD_EMAIL))?;
        prior.insert(giver, receiver);
    }

    debug!("Read {} prior pairings from {}", prior.len(), origin.display());
    Ok(prior)
}

/// Serializes `assignments` in giver order. `origin` only labels errors.
pub fn assignments_to_writer<W: Write>(
    writer: W,
    assignments: &AssignmentMap,
    origin: &Path,
) -> Result<(), RosterError> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer
        .write_record([EMPLOYEE_NAME, EMPLOYEE_EMAIL, CHILD_NAME, CHILD_EMAIL])
        .map_err(|source| csv_error(origin, source))?;

    for pairing in assignments {
        csv_writer
            .serialize(PairingRow {
                giver_name: pairing.giver.name(),
                giver_email: pairing.giver.email(),
                receiver_name: pairing.receiver.name(),
                receiver_email: pairing.receiver.email(),
            })
            .map_err(|source| csv_error(origin, source))?;
    }

    csv_writer.flush().map_err(|source| RosterError::Io {
        path: origin.to_path_buf(),
        source,
    })
}

fn open(path: &Path) -> Result<File, RosterError> {
    File::open(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn require_columns<R: Read>(
    csv_reader: &mut csv::Reader<R>,
    columns: &[&'static str],
    origin: &Path,
) -> Result<(), RosterError> {
    let headers = csv_reader.headers().map_err(|source| csv_error(origin, source))?;

    match columns.iter().find(|column| !headers.iter().any(|header| header == **column)) {
        Some(&column) => Err(RosterError::MissingColumn {
            path: origin.to_path_buf(),
            column,
        }),
        None => Ok(()),
    }
}

fn csv_error(origin: &Path, source: csv::Error) -> RosterError {
    RosterError::Csv {
        path: origin.to_path_buf(),
        source,
    }
}

fn row_to_participant(row: ParticipantRow) -> Result<Participant, ValidationError> {
    let name = row.name.unwrap_or_default();
    let email = non_empty(row.email).ok_or(ValidationError::MissingField { field: EMPLOYEE_EMAIL })?;
    Participant::new(name, email)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
