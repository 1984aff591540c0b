use clap::Parser;

use kstab::cli;
use kstab::cli_app::Cli;
use kstab::core::errors::KstabError;
use kstab::logger;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli::run(&cli) {
        Ok(()) => {}
        Err(err @ KstabError::InvalidInput { .. }) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
