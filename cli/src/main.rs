mod commands;
mod terminal;

use commands::{CommandLine, Commands, assign, check};
use kringle_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let quiet: u8 = commands.quiet;

    logging::init_logging(quiet);
    print::banner(quiet);

    match commands.command {
        Commands::Assign {
            input,
            constraint,
            output,
            seed,
        } => {
            let cfg = Config { quiet, seed };
            print::header("drawing secret santas", cfg.quiet);
            assign::assign(&input, constraint.as_deref(), &output, &cfg)
        }
        Commands::Check { input } => {
            let cfg = Config { quiet, seed: None };
            print::header("checking employee list", cfg.quiet);
            check::check(&input, &cfg)
        }
    }
}
