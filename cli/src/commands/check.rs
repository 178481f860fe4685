use std::path::Path;

use anyhow::{Context, ensure};
use tracing::{info, warn};

use crate::terminal::print;
use kringle_common::config::Config;
use kringle_common::participant::Participant;
use kringle_core::roster;

pub fn check(input: &Path, cfg: &Config) -> anyhow::Result<()> {
    ensure!(input.is_file(), "Employee file '{}' not found.", input.display());

    let participants: Vec<Participant> =
        roster::read_participants(input).context("Error reading employee list")?;

    if participants.len() < 2 {
        warn!("At least two participants are needed to draw pairings");
    }

    let unnamed: usize = participants
        .iter()
        .filter(|participant| participant.name().trim().is_empty())
        .count();
    if unnamed > 0 {
        warn!("{unnamed} participants have no name, their email will be shown instead");
    }

    if cfg.quiet == 0 {
        print::set_key_width(["Source", "Participants"]);
        print::aligned_line("Source", input.display().to_string());
        print::aligned_line("Participants", participants.len().to_string());
    }

    info!("{} participants parsed successfully", participants.len());
    print::end_of_program(cfg.quiet);
    Ok(())
}
