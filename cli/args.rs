use std::{path::PathBuf, str::FromStr};

use simplelog::LevelFilter;
use structopt::StructOpt;

/// The sample programs the binary knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Greeting,
    Shout,
    Age,
    Echo,
}

impl Sample {
    pub const NAMES: &'static [&'static str] = &["greeting", "shout", "age", "echo"];
}

impl FromStr for Sample {
    type Err = String;

    fn from_str(name: &str) -> Result<Sample, String> {
        match name {
            "greeting" => Ok(Sample::Greeting),
            "shout"    => Ok(Sample::Shout),
            "age"      => Ok(Sample::Age),
            "echo"     => Ok(Sample::Echo),
            other      => Err(format!("unknown program '{}'", other)),
        }
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = "freeio", bin_name = "freeio", about)]
pub struct Args {
    /// Which sample program to run
    #[structopt(default_value = "greeting", possible_values = Sample::NAMES)]
    pub program: Sample,

    /// Answer reads from the lines of this file instead of standard input,
    /// and print a transcript of everything written
    #[structopt(long, parse(from_os_str))]
    pub script: Option<PathBuf>,

    /// The line that ends the `echo` program
    #[structopt(long, default_value = "quit")]
    pub stop: String,

    /// Log more (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
