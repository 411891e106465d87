use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use stressbench_core::{BenchmarkRunner, LoadFactor};
use tracing_subscriber::EnvFilter;


const TRACE_ENV: &str = "STRESSBENCH_TRACE";
const DEFAULT_TRACE_FILTER: &str = "stressbench=debug,stressbench_core=debug";
const LOAD_FACTOR_HINT: &str = "Where <load_factor> is a positive integer (e.g. 100, 500, 1000).";

#[derive(Debug, Parser)]
#[command(
    name = "stressbench",
    about = "Run the matrix, math and memory stress workloads and report their timings",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct CliArgs {
    /// Scales every workload: matrix side length and 100000x iterations for math and memory
    #[arg(value_name = "load_factor", value_parser = parse_load_factor, allow_negative_numbers = true)]
    load_factor: LoadFactor,
}

fn parse_load_factor(raw: &str) -> Result<LoadFactor, String> {
    LoadFactor::parse(raw).map_err(|e| e.to_string())
}

/// Diagnostic output requested through `STRESSBENCH_TRACE`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TraceSetting {
    Off,
    /// Plain toggle: use `RUST_LOG`, else the built-in filter.
    On,
    Filter(String),
}

impl TraceSetting {
    fn from_env_value(raw: &str) -> Self {
        let value = raw.trim();
        let is_any = |words: &[&str]| words.iter().any(|w| value.eq_ignore_ascii_case(w));
        if value.is_empty() || is_any(&["0", "false", "off"]) {
            Self::Off
        } else if is_any(&["1", "true", "on"]) {
            Self::On
        } else {
            Self::Filter(value.to_string())
        }
    }

    /// Unparseable expressions fall back to the default filter.
    fn env_filter(self, rust_log: Option<String>) -> Option<EnvFilter> {
        let expr = match self {
            Self::Off => return None,
            Self::On => rust_log,
            Self::Filter(expr) => Some(expr),
        };
        let filter = expr
            .and_then(|expr| EnvFilter::try_new(expr).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_TRACE_FILTER));
        Some(filter)
    }
}

/// Installs a stderr subscriber when tracing is requested. Stdout carries the
/// report only.
fn init_tracing(setting: TraceSetting) {
    let Some(filter) = setting.env_filter(std::env::var("RUST_LOG").ok()) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Exactly one argument must follow the program name. Clap alone would accept
/// `-- <n>`, since it swallows the `--` separator.
fn check_arg_count(args: &[OsString]) -> Result<(), clap::Error> {
    let given = args.len().saturating_sub(1);
    if given == 1 {
        return Ok(());
    }
    let mut cmd = CliArgs::command();
    if let Some(bin) = args.first().map(Path::new).and_then(Path::file_name) {
        cmd = cmd.bin_name(bin.to_string_lossy().into_owned());
    }
    Err(cmd.error(
        ErrorKind::WrongNumberOfValues,
        format!("expected exactly one <load_factor> argument, got {given}"),
    ))
}

/// Parses `args` (program name first), runs the benchmark on stdout and
/// returns the process exit code.
pub(crate) fn run<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let parsed = check_arg_count(&args).and_then(|_| CliArgs::try_parse_from(&args));
    let CliArgs { load_factor } = match parsed {
        Ok(parsed) => parsed,
        Err(err) => {
            // clap's rendering already carries the usage line and program name
            let _ = err.print();
            eprintln!("{LOAD_FACTOR_HINT}");
            return 1;
        }
    };

    let mut runner = BenchmarkRunner::new(io::stdout().lock());
    match runner.run_and_report(load_factor) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    }
}

fn main() -> ExitCode {
    if let Ok(raw) = std::env::var(TRACE_ENV) {
        init_tracing(TraceSetting::from_env_value(&raw));
    }
    ExitCode::from(run(std::env::args_os()))
}
