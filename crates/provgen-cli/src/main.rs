mod logging;
mod prompt;
mod settings;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use provgen_core::{
    Degree, DocumentSummary, GenerationInputs, ProvDocument, TotalNodes, document_json_schema,
    parse_degree, parse_total_nodes, summarize_document, validate_document,
    validate_document_json,
};
use provgen_generate::{
    GenerateOptions, GenerationEngine, GenerationError, OutputError, write_document, write_report,
};
use thiserror::Error;

use logging::init_logging;
use prompt::prompt_until;
use settings::{Settings, load_settings};

const DEFAULT_OUT: &str = "provenance_file.json";

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] provgen_core::Error),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("output error: {0}")]
    Output(#[from] OutputError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

#[derive(Parser, Debug)]
#[command(name = "provgen", version, about = "Mock provenance dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a provenance document.
    Generate(GenerateArgs),
    /// Validate and summarise an existing provenance document.
    Inspect(InspectArgs),
    /// Print the JSON Schema of the document format.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Total node count (even, 10..=2000). Prompted for when absent.
    #[arg(long, value_name = "COUNT", value_parser = parse_total_nodes)]
    nodes: Option<TotalNodes>,
    /// Relations per node (0..=3). Prompted for when absent.
    #[arg(long, value_name = "DEGREE", value_parser = parse_degree)]
    degree: Option<Degree>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum attempts to draw a valid assignment.
    #[arg(long)]
    max_attempts: Option<u32>,
    /// Output path for the document.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Optional output path for the generation report.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Config file (defaults to ./provgen.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Append JSON logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Document to inspect.
    path: PathBuf,
    /// Print the summary as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Schema => run_schema(),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        nodes,
        degree,
        seed,
        max_attempts,
        out,
        report,
        config,
        log_file,
    } = args;

    let settings: Settings = load_settings(config.as_deref())?;
    let log_file = log_file.or(settings.log_file);
    init_logging(log_file.as_deref())?;

    let inputs = collect_inputs(nodes, degree)?;

    let defaults = GenerateOptions::default();
    let options = GenerateOptions {
        seed: seed.or(settings.seed),
        max_attempts: max_attempts
            .or(settings.max_attempts)
            .unwrap_or(defaults.max_attempts),
    };
    let out = out
        .or(settings.out)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
    let report_path = report.or(settings.report);

    tracing::info!(
        event = "run_started",
        total_nodes = inputs.total_nodes.get(),
        degree = inputs.degree.get(),
        out = %out.display()
    );
    let timer = Instant::now();

    let engine = GenerationEngine::new(options);
    let result = engine.run(&inputs)?;

    let bytes = write_document(&out, &result.document)?;
    tracing::info!(event = "document_written", path = %out.display(), bytes);

    if let Some(path) = report_path {
        write_report(&path, &result.report)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        duration_ms = timer.elapsed().as_millis() as u64
    );

    println!("Provenance file written to '{}'.", out.display());
    Ok(())
}

fn collect_inputs(
    nodes: Option<TotalNodes>,
    degree: Option<Degree>,
) -> Result<GenerationInputs, CliError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let total_nodes = match nodes {
        Some(value) => value,
        None => prompt_until(
            &mut input,
            &mut output,
            "Total number of nodes (10 to 2000, even): ",
            parse_total_nodes,
        )?,
    };
    let degree = match degree {
        Some(value) => value,
        None => prompt_until(
            &mut input,
            &mut output,
            "Links per node (0 to 3): ",
            parse_degree,
        )?,
    };

    Ok(GenerationInputs::new(total_nodes, degree))
}

fn run_inspect(args: InspectArgs) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(&args.path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;

    let report = validate_document_json(&value)?;
    if !report.is_ok() {
        for issue in &report.errors {
            eprintln!("{} {}: {}", issue.code, issue.path, issue.message);
        }
        return Err(CliError::InvalidDocument(format!(
            "{} schema violation(s) in {}",
            report.errors.len(),
            args.path.display()
        )));
    }

    let document: ProvDocument = serde_json::from_value(value)?;
    validate_document(&document)?;
    let summary = summarize_document(&document);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &DocumentSummary) {
    println!("Nodes:       {}", summary.total_nodes);
    println!("Entities:    {}", summary.entity_count);
    println!("Activities:  {}", summary.activity_count);
    println!("Generations: {}", summary.generation_count);
    println!("Usages:      {}", summary.usage_count);
    println!("Derivations: {}", summary.derivation_count);
    match summary.regular_degree {
        Some(degree) => println!("Degree:      {degree} (regular)"),
        None => {
            let histogram: Vec<String> = summary
                .degree_histogram
                .iter()
                .map(|(degree, nodes)| format!("{degree}:{nodes}"))
                .collect();
            println!("Degree:      irregular [{}]", histogram.join(", "));
        }
    }
}

fn run_schema() -> Result<(), CliError> {
    let schema = document_json_schema()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
