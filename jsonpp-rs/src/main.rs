//! jsonpp CLI.
//!
//! Validates, formats and runs conformance corpora over JSON-with-comments
//! documents. Documents come from a `.json` path or from stdin.
//!
//! Exit codes: 0 on success, 1 when a document or corpus fails, 2 when the
//! input cannot be read at all.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use jsonpp::conformance::CorpusRunner;
use jsonpp::json::{
    parse_with_limits, to_compact_string, to_pretty_string, Limits, MAX_NESTING_DEPTH,
};
use jsonpp::load::{self, LoadError};

#[derive(Parser)]
#[command(name = "jsonpp")]
#[command(about = "Validate and format JSON documents with comments", long_about = None)]
#[command(version)]
struct Cli {
    /// Maximum nesting depth of arrays and objects (capped at 1024)
    #[arg(long, global = true)]
    max_depth: Option<u64>,

    /// Maximum input size in bytes
    #[arg(long, global = true)]
    max_input_size: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a document and print a JSON report
    Check {
        /// Path to a .json file (stdin when omitted)
        path: Option<PathBuf>,
    },

    /// Parse a document and print it re-formatted
    Fmt {
        /// Path to a .json file (stdin when omitted)
        path: Option<PathBuf>,

        /// Print on a single line
        #[arg(long)]
        compact: bool,

        /// Spaces per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },

    /// Run a conformance corpus
    Corpus {
        /// Path to the corpus file
        path: PathBuf,
    },

    /// Show version information
    Version,
}

impl Cli {
    fn limits(&self) -> Limits {
        let mut limits = Limits::default();
        if let Some(depth) = self.max_depth {
            if depth > MAX_NESTING_DEPTH {
                debug!(depth, max = MAX_NESTING_DEPTH, "clamping --max-depth");
            }
            limits.max_nesting_depth = depth.min(MAX_NESTING_DEPTH);
        }
        if let Some(size) = self.max_input_size {
            limits.max_input_size = size;
        }
        limits
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read the document from `path`, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>, String> {
    match path {
        Some(path) => load::read_file(path).map_err(|e| e.to_string()),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            debug!(bytes = buf.len(), "read stdin");
            Ok(buf)
        }
    }
}

fn cmd_check(path: Option<&Path>, limits: Limits) -> ExitCode {
    let input = match read_input(path) {
        Ok(input) => input,
        Err(msg) => {
            eprintln!("error: {}", msg);
            return ExitCode::from(2);
        }
    };

    match parse_with_limits(&input, limits) {
        Ok(value) => {
            println!("{}", json!({ "ok": { "kind": value.type_name() } }));
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", json!({ "err": err }));
            ExitCode::FAILURE
        }
    }
}

fn cmd_fmt(path: Option<&Path>, limits: Limits, compact: bool, indent: usize) -> ExitCode {
    let input = match read_input(path) {
        Ok(input) => input,
        Err(msg) => {
            eprintln!("error: {}", msg);
            return ExitCode::from(2);
        }
    };

    match parse_with_limits(&input, limits) {
        Ok(value) => {
            let text = if compact {
                to_compact_string(&value)
            } else {
                to_pretty_string(&value, indent)
            };
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let err = LoadError::Parse {
                path: path.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("<stdin>")),
                source: err,
            };
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn cmd_corpus(path: &Path, limits: Limits) -> ExitCode {
    let runner = match CorpusRunner::load(path) {
        Ok(runner) => runner.with_limits(limits),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    info!(vectors = runner.vector_count(), "running corpus");
    let results = runner.run_all();

    for (id, result) in results.failures().iter().chain(results.error_details().iter()) {
        eprintln!("  {}: {:?}", id, result);
    }
    println!("{}", results.summary());

    if results.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let limits = cli.limits();

    match &cli.command {
        Some(Commands::Check { path }) => cmd_check(path.as_deref(), limits),
        Some(Commands::Fmt {
            path,
            compact,
            indent,
        }) => cmd_fmt(path.as_deref(), limits, *compact, *indent),
        Some(Commands::Corpus { path }) => cmd_corpus(path, limits),
        Some(Commands::Version) => {
            println!("jsonpp v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        None => {
            println!("jsonpp v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}
