// Main Entry Point
//
// Argument handling and the file-to-file conversion driven by `schegen`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use schegen_compiler::{compile, CompileOptions, CompileOutput};

use crate::config::SchegenConfig;
use crate::logging::{create_logger, Logger};
use crate::version::version_string;

pub const USAGE_MISSING_BOTH: &str =
    "Please specify both path to the declaration file and output file";
pub const USAGE_MISSING_OUTPUT: &str = "Please specify path to output file";

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    /// Extraction or I/O failed
    Failure,
    /// Missing positional arguments
    Usage,
    /// Input path does not exist
    InputNotFound,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failure => 1,
            ExitCode::Usage => 2,
            ExitCode::InputNotFound => 3,
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub namespace: Option<String>,
    pub indent: Option<usize>,
    pub verbose: bool,
    pub quiet: bool,
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            input: matches.get_one::<PathBuf>("input").cloned(),
            output: matches.get_one::<PathBuf>("output").cloned(),
            config: matches.get_one::<PathBuf>("config").cloned(),
            namespace: matches.get_one::<String>("namespace").cloned(),
            indent: matches.get_one::<usize>("indent").copied(),
            verbose: matches.get_flag("verbose"),
            quiet: matches.get_flag("quiet"),
        }
    }

    /// Options from the config file (if any) with command-line overrides.
    pub fn compile_options(&self) -> anyhow::Result<CompileOptions> {
        let config = match &self.config {
            Some(path) => SchegenConfig::load(path)?,
            None => SchegenConfig::default(),
        };
        Ok(config
            .with_overrides(self.namespace.as_deref(), self.indent)
            .into())
    }
}

/// Command-line definition. Both positionals are optional here so that
/// missing ones get the dedicated usage messages instead of clap's.
pub fn command() -> Command {
    Command::new("schegen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract enum declarations from a namespace into a YAML document")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .value_parser(value_parser!(PathBuf))
                .help("Declaration file to read"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .value_parser(value_parser!(PathBuf))
                .help("Document file to write"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("JSON config file"),
        )
        .arg(
            Arg::new("namespace")
                .short('n')
                .long("namespace")
                .value_name("NAME")
                .help("Namespace to extract (default: FlatData)"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Spaces before each member entry (default: 2)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every declaration found"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Suppress all logging"),
        )
}

/// Run the CLI. Every failure is reported on stderr and mapped to an
/// exit code; nothing propagates past this point.
pub fn main_fn(args: &CliArgs) -> ExitCode {
    let (input, output) = match (&args.input, &args.output) {
        (None, _) => {
            eprintln!("{}", USAGE_MISSING_BOTH);
            return ExitCode::Usage;
        }
        (Some(_), None) => {
            eprintln!("{}", USAGE_MISSING_OUTPUT);
            return ExitCode::Usage;
        }
        (Some(input), Some(output)) => (input, output),
    };

    if !input.exists() {
        eprintln!("Path '{}' doesn't exist", input.display());
        return ExitCode::InputNotFound;
    }

    let logger = create_logger(args.verbose, args.quiet);
    logger.debug(&version_string());
    let result = args
        .compile_options()
        .and_then(|options| convert(input, output, &options, logger.as_ref()));

    match result {
        Ok(_) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::Failure
        }
    }
}

/// Read `input`, extract its enums and write the document to `output`.
///
/// The output file is only touched once extraction has succeeded.
pub fn convert(
    input: &Path,
    output: &Path,
    options: &CompileOptions,
    logger: &dyn Logger,
) -> anyhow::Result<CompileOutput> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    logger.debug(&format!("read {} bytes from {}", source.len(), input.display()));

    let result = compile(&source, options)
        .with_context(|| format!("failed to convert {}", input.display()))?;
    logger.info(&format!("found namespace `{}`", result.namespace.name));
    for typedef in &result.typedefs {
        if typedef.is_enum() {
            logger.debug(&format!("enum {}", typedef.name));
        } else {
            logger.debug(&format!("skipping {} {}", typedef.kind, typedef.name));
        }
    }

    fs::write(output, &result.document)
        .with_context(|| format!("failed to write {}", output.display()))?;
    logger.info(&format!(
        "wrote {} enum(s) to {}",
        result.enum_count(),
        output.display()
    ));

    Ok(result)
}
