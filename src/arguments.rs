use crate::analysis::Options;
use clap::{crate_authors, value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Create a container for dealing with clap and being able to test arg parsing
pub enum ClapApp {
    App,
}

impl ClapApp {
    /// Create and return the clap::Command
    pub fn get(&self) -> Command {
        Command::new("Charge Transfer Diagnostics")
            .author(crate_authors!())
            .version(env!("CARGO_PKG_VERSION"))
            .about("Calculate the charge transfer distance (DCT) and transferred charge (qCT) from ground and excited state cube files.")
            .arg(Arg::new("ground")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf))
                .help("Cube file of the ground state density."))
            .arg(Arg::new("excited")
                .required(true)
                .index(2)
                .value_parser(value_parser!(PathBuf))
                .help("Cube file of the excited state density."))
            .arg(Arg::new("output")
                .short('o')
                .long("output")
                .alias("output_file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value("results.txt")
                .help("File the results are appended to.")
                .long_help(
"The results of every run are appended to this file along with the names of the
two input files. Previous results in the file are never overwritten."))
            .arg(Arg::new("log")
                .short('l')
                .long("log")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value("dct_qct_calculation.log")
                .help("File the diagnostics are written to.")
                .long_help(
"The diagnostics of the run, the progress of reading the files and the
intermediate sums, are written to this file. It is overwritten on each run."))
            .arg(Arg::new("log level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .default_value("debug")
                .help("Lowest level of diagnostics written to the log.")
                .long_help(
"The lowest level of diagnostics written to the log file. Setting the RUST_LOG
environment variable overrides this option."))
            .arg(Arg::new("threads")
                .short('J')
                .long("threads")
                .value_parser(value_parser!(usize))
                .default_value("0")
                .help("Number of threads to distribute the calculation over.")
                .long_help(
"The number of threads to be used by the program. A default value of 0 is used
to allow the program to best decide how to use the available hardware. At most
three threads are used, one for each Cartesian axis of the centroid."))
            .arg(Arg::new("tolerance")
                .short('t')
                .long("tolerance")
                .value_parser(value_parser!(f64))
                .default_value("1E-6")
                .help("Tolerance of the charge conservation check.")
                .long_help(
"A warning is logged if the density gained and the density lost on excitation
differ in magnitude by more than this value. The results are unaffected."))
            .arg(Arg::new("progress")
                .short('p')
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Display progress bars."))
    }
}

/// Holds the arguments passed to the program from the command-line
pub struct Args {
    pub ground: PathBuf,
    pub excited: PathBuf,
    pub output: PathBuf,
    pub log: PathBuf,
    pub log_level: String,
    pub threads: usize,
    pub tolerance: f64,
    pub progress: bool,
}

impl Args {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: ArgMatches) -> Self {
        let path = |id: &str| {
            arguments.get_one::<PathBuf>(id).cloned().unwrap_or_default()
        };
        let ground = path("ground");
        let excited = path("excited");
        let output = path("output");
        let log = path("log");
        let log_level = match arguments.get_one::<String>("log level") {
            Some(l) => l.clone(),
            None => String::from("debug"),
        };
        let threads = match arguments.get_one::<usize>("threads") {
            Some(0) | None => num_cpus::get(),
            Some(x) => *x,
        };
        let tolerance = match arguments.get_one::<f64>("tolerance") {
            Some(x) => *x,
            None => 1E-6,
        };
        let progress = arguments.get_flag("progress");
        Self { ground,
               excited,
               output,
               log,
               log_level,
               threads,
               tolerance,
               progress }
    }

    /// The settings of the calculation.
    pub fn options(&self) -> Options {
        Options { threads: self.threads,
                  conservation_tolerance: self.tolerance,
                  progress: self.progress }
    }
}
