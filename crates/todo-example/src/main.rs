use std::io;
use std::process::ExitCode;

use clap::Parser;
use replkit::{detect_terminal_width, set_page_width};
use todo_example::{logging, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if cli.width.is_none() {
        if let Some(width) = detect_terminal_width() {
            set_page_width(width);
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    match run(&cli, stdin.lock(), &mut stdout, &mut stderr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tdoo: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
