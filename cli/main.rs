use std::{fs, path::Path};

use log::SetLoggerError;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use structopt::StructOpt;

use freeio::{
    console::{Program, Script, Terminal},
    programs,
};

// argument parser and reporting
pub mod args;
pub mod status;

use crate::{
    args::{Args, Sample},
    status::Status,
};

fn main() {
    let args = Args::from_args();

    // logging is best-effort; carry on without it
    if let Err(e) = init_logging(args.log_level()) {
        Status::warning().log(&format!("Could not set up logging: {}", e));
    }

    let program = build(&args);
    let result = match &args.script {
        Some(path) => replay(program, path),
        None => program
            .run(&mut Terminal::stdio())
            .map_err(|e| e.to_string()),
    };

    match result {
        Ok(value) => Status::result().log(&value),
        Err(e) => {
            Status::fatal().log(&e);
            std::process::exit(1);
        },
    }
}

fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
}

/// Picks the sample program; every result is reported as text.
fn build(args: &Args) -> Program<String> {
    match args.program {
        Sample::Greeting => programs::greeting(),
        Sample::Shout    => programs::shout(),
        Sample::Age      => programs::age().map(|years| years.to_string()),
        Sample::Echo     => programs::echo(args.stop.clone()).map(|n| format!("{} line(s) echoed", n)),
    }
}

/// Runs the program against the lines of a file,
/// then prints what the program wrote.
fn replay(program: Program<String>, path: &Path) -> Result<String, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Could not read script '{}': {}", path.display(), e))?;

    let mut script = Script::new(contents.lines());
    let result = program.run(&mut script);
    Status::transcript().lines(script.output());

    result.map_err(|e| e.to_string())
}
