use std::{ffi::OsString, path::PathBuf};

use clap::{ArgGroup, Parser};
use jlscope::{filter::MemberFilter, format::OutputType};

/// jlscope - list the members of Java classes as PScout, CSV, or class file listings
#[derive(Debug, Parser)]
#[command(name = "jlscope", version, about, long_about = None)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["classes", "file", "boot", "classpath_file"])
))]
pub struct Cli {
    /// List the given fully qualified class names.
    #[arg(short = 'c', value_name = "CLASS", num_args = 1..)]
    pub classes: Vec<String>,

    /// List the class names in FILE, one per line.
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// List the classes of the boot class path (detailed CSV, visible members).
    #[arg(long)]
    pub boot: bool,

    /// List the classes of the archives in FILE, one path per line.
    #[arg(long, value_name = "FILE")]
    pub classpath_file: Option<PathBuf>,

    /// Only list platform classes from the class path file.
    #[arg(long, conflicts_with_all = ["classes", "file", "boot"])]
    pub jdk_only: bool,

    /// Output format: pscout, csv, csv-detail, class-only.
    #[arg(long, value_name = "FORMAT", default_value = "pscout")]
    pub format: OutputType,

    /// Member filter: all, field, method, init, clinit, executable, native, visible.
    #[arg(long, value_name = "FILTER", default_value = "visible")]
    pub filter: MemberFilter,

    /// JSON class catalog used to resolve classes. Can be given more than once.
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalogs: Vec<PathBuf>,

    /// Write the listing to standard output instead of a file.
    #[arg(long, conflicts_with_all = ["output_dir", "json"])]
    pub stdout: bool,

    /// Directory for the output file.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the run summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the arguments, accepting the single dash `-boot` spelling.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::parse_from(args.into_iter().map(|arg| {
            let arg = arg.into();
            if arg == "-boot" {
                OsString::from("--boot")
            } else {
                arg
            }
        }))
    }
}
