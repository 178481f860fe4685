use crate::terminal::colors;
use colored::*;
use kringle_common::assignment::Pairing;
use kringle_common::participant::Participant;

type Detail = (String, ColoredString);

pub fn email_to_detail(participant: &Participant) -> Detail {
    (String::from("Email"), participant.email().color(colors::EMAIL))
}

pub fn pairing_to_details(pairing: &Pairing) -> Vec<Detail> {
    vec![
        email_to_detail(&pairing.giver),
        (
            String::from("Gives to"),
            display_name(&pairing.receiver).color(colors::PRIMARY).bold(),
        ),
        (
            String::from("Contact"),
            pairing.receiver.email().color(colors::EMAIL),
        ),
    ]
}

/// The name to show for `participant`, falling back to the email when the
/// roster left the name blank.
pub fn display_name(participant: &Participant) -> &str {
    match participant.name().trim() {
        "" => participant.email(),
        name => name,
    }
}
