use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, ensure};
use colored::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, info_span, warn};

use crate::{mprint, terminal::{colors, format, print, spinner}};
use kringle_common::assignment::{AssignmentMap, PriorAssignments};
use kringle_common::config::Config;
use kringle_common::error::UnsatisfiableConstraints;
use kringle_common::participant::Participant;
use kringle_core::{SearchStats, assign_with_stats, build_graph, roster};

pub fn assign(input: &Path, constraint: Option<&Path>, output: &Path, cfg: &Config) -> anyhow::Result<()> {
    ensure_file(input, "Employee")?;
    if let Some(path) = constraint {
        ensure_file(path, "Previous assignments")?;
    }

    let participants: Vec<Participant> =
        roster::read_participants(input).context("Error reading employee list")?;
    let prior: PriorAssignments = match constraint {
        Some(path) => roster::read_prior_assignments(path).context("Error reading previous assignments")?,
        None => {
            warn!("No previous assignments given, every pairing is allowed");
            PriorAssignments::new()
        }
    };
    info!("Loaded {} participants", participants.len());

    let span = info_span!("assignment", participants = participants.len());
    let guard = span.enter();

    if cfg.quiet < 2 {
        spinner::start("Searching for a valid set of pairings...");
    }
    let start_time: Instant = Instant::now();
    let result = match cfg.seed {
        Some(seed) => draw(&participants, &prior, &mut StdRng::seed_from_u64(seed)),
        None => draw(&participants, &prior, &mut rand::rng()),
    };
    spinner::stop();

    drop(guard);

    let (assignments, stats) = result.context("Error drawing secret santas")?;
    roster::write_assignments(output, &assignments).context("Error writing assignments to CSV")?;

    let constrained: usize = participants
        .iter()
        .filter(|participant| prior.get(participant.email()).is_some())
        .count();

    assignment_ends(&assignments, constrained, stats, start_time.elapsed(), cfg);
    info!("Secret Santa assignments saved to {}", output.display());
    print::end_of_program(cfg.quiet);
    Ok(())
}

fn draw<R>(
    participants: &[Participant],
    prior: &PriorAssignments,
    rng: &mut R,
) -> Result<(AssignmentMap, SearchStats), UnsatisfiableConstraints>
where
    R: Rng + ?Sized,
{
    let graph = build_graph(participants, prior, rng);
    assign_with_stats(&graph)
}

fn ensure_file(path: &Path, label: &str) -> anyhow::Result<()> {
    ensure!(path.is_file(), "{label} file '{}' not found.", path.display());
    Ok(())
}

fn assignment_ends(
    assignments: &AssignmentMap,
    constrained: usize,
    stats: SearchStats,
    total_time: Duration,
    cfg: &Config,
) {
    if cfg.quiet == 0 {
        print::header("Pairings", cfg.quiet);
        print_pairings(assignments);
    }

    print_summary(assignments.len(), constrained, stats, total_time, cfg);
}

fn print_pairings(assignments: &AssignmentMap) {
    for (idx, pairing) in assignments.iter().enumerate() {
        print::tree_head(idx, format::display_name(&pairing.giver));
        print::as_tree_one_level(format::pairing_to_details(pairing));

        if idx + 1 != assignments.len() {
            mprint!();
        }
    }
}

fn print_summary(pairs: usize, constrained: usize, stats: SearchStats, total_time: Duration, cfg: &Config) {
    if cfg.quiet == 0 {
        print::header("Summary", cfg.quiet);
        print::set_key_width(["Participants", "Constrained", "Backtracks"]);
        print::aligned_line("Participants", pairs.to_string());
        print::aligned_line("Constrained", constrained.to_string());
        print::aligned_line("Backtracks", stats.backtracks.to_string());
    }

    let pairs: ColoredString = format!("{pairs} pairs").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString =
        &format!("Draw Complete: {pairs} drawn in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
        }
        _ => info!("{}", output),
    }
}
