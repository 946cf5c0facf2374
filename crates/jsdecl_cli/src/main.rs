//! jsdecl: List the function declarations of JavaScript sources.
//!
//! Usage:
//!   jsdecl [options] [file...]
//!
//! Files and directories given on the command line are analyzed directly;
//! without them the sources are discovered from jsdecl.json.

mod report;

use clap::Parser as ClapParser;
use jsdecl_analyzer::{AnalyzerError, FileError, FileReport, Program, SourceFile, Summary};
use jsdecl_core::LineMap;
use jsdecl_options::{discover_source_files, parse_config_file, Config, OutputFormat, CONFIG_FILE_NAME};
use report::{format_anomaly, format_declaration, MalformedSourceReport};
use std::fmt;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::time::Instant;

#[derive(ClapParser, Debug)]
#[command(name = "jsdecl", version, about = "jsdecl - Extract function declarations from JavaScript")]
struct Cli {
    /// JavaScript files or directories to analyze.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Path to jsdecl.json.
    #[arg(short = 'p', long = "project", value_name = "CONFIG")]
    project: Option<String>,

    /// Output format: text or json.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Print aggregate counts after the report.
    #[arg(long)]
    summary: bool,

    /// Exit with a failure status when any anomaly is reported.
    #[arg(long = "fail-on-anomalies")]
    fail_on_anomalies: bool,

    /// List all files that are part of the analysis.
    #[arg(long = "list-files")]
    list_files: bool,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Initialize a jsdecl.json file.
    #[arg(long)]
    init: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.init {
        process::exit(run_init());
    }

    process::exit(run(&cli));
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> i32 {
    let start = Instant::now();

    let (mut config, root_dir) = match resolve_config(cli) {
        Ok(resolved) => resolved,
        Err(err) => {
            print_error(err);
            return 1;
        }
    };

    // CLI options override jsdecl.json
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.fail_on_anomalies {
        config.fail_on_anomalies = true;
    }

    let mut program = Program::new(config);
    let files = match resolve_input_files(cli, &program, &root_dir) {
        Ok(files) => files,
        Err(err) => {
            print_error(err);
            return 1;
        }
    };

    if cli.list_files {
        for file in &files {
            eprintln!("{}", file);
        }
    }

    program.load_files(&files);
    let reports = program.analyze();
    match program.options().format {
        OutputFormat::Text => print_text_report(program.source_files(), &reports),
        OutputFormat::Json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                print_error(err);
                return 1;
            }
        },
    }

    let summary = Summary::from_reports(&reports);
    if cli.summary {
        eprintln!("{}", summary);
    }
    log::debug!("analysis completed in {:.2}s", start.elapsed().as_secs_f64());

    exit_code(&summary, program.options().fail_on_anomalies)
}

fn exit_code(summary: &Summary, fail_on_anomalies: bool) -> i32 {
    if summary.failed > 0 || (fail_on_anomalies && summary.anomalies > 0) {
        2
    } else {
        0
    }
}

fn run_init() -> i32 {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        print_error(format!("A {} file already exists in the current directory.", CONFIG_FILE_NAME));
        return 1;
    }

    let content = match Config::default().to_json_pretty() {
        Ok(json) => json + "\n",
        Err(err) => {
            print_error(err);
            return 1;
        }
    };

    match std::fs::write(config_path, content) {
        Ok(()) => {
            println!("Successfully created a {} file.", CONFIG_FILE_NAME);
            0
        }
        Err(err) => {
            print_error(format!("Failed to create {}: {}", CONFIG_FILE_NAME, err));
            1
        }
    }
}

/// Load the configuration named by `-p`, or jsdecl.json in the working
/// directory, or the defaults. Returns it with the directory patterns are
/// relative to.
fn resolve_config(cli: &Cli) -> Result<(Config, String), AnalyzerError> {
    let path = match &cli.project {
        Some(project) => project.as_str(),
        None if Path::new(CONFIG_FILE_NAME).exists() => CONFIG_FILE_NAME,
        None => return Ok((Config::default(), ".".to_string())),
    };
    let config = parse_config_file(path)?;
    let root_dir = match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().to_string(),
        _ => ".".to_string(),
    };
    Ok((config, root_dir))
}

fn resolve_input_files(cli: &Cli, program: &Program, root_dir: &str) -> Result<Vec<String>, AnalyzerError> {
    if cli.files.is_empty() {
        return program.discover(root_dir);
    }

    let options = program.options();
    let mut files = Vec::new();
    for file in &cli.files {
        if Path::new(file).is_dir() {
            files.extend(discover_source_files(
                file,
                &options.include,
                &options.exclude,
                &options.extensions,
            ));
        } else {
            files.push(file.clone());
        }
    }
    if files.is_empty() {
        return Err(AnalyzerError::NoInputFiles);
    }
    Ok(files)
}

fn print_text_report(sources: &[SourceFile], reports: &[FileReport]) {
    let use_color = std::io::stdout().is_terminal();
    for (source, report) in sources.iter().zip(reports) {
        match &report.outcome {
            Ok(extraction) => {
                let line_map = LineMap::new(&source.text);
                for declaration in &extraction.declarations {
                    println!(
                        "{}",
                        format_declaration(&report.file_name, &line_map, declaration, use_color)
                    );
                }
                for anomaly in &extraction.anomalies {
                    eprintln!("{}", format_anomaly(anomaly, &line_map));
                }
            }
            Err(FileError::Malformed(err)) => {
                let diagnostic = MalformedSourceReport::new(&report.file_name, &source.text, err);
                eprintln!("{:?}", miette::Report::new(diagnostic));
            }
            Err(err) => {
                print_error(format!("{}: {}", report.file_name, err));
            }
        }
    }
}

fn print_error(err: impl fmt::Display) {
    eprintln!("{:?}", miette::miette!("{}", err));
}
