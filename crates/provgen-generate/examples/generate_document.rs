use std::env;
use std::path::PathBuf;

use provgen_core::{GenerationInputs, parse_degree, parse_total_nodes};
use provgen_generate::{GenerateOptions, GenerationEngine, write_document};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut nodes: Option<String> = None;
    let mut degree: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut out = PathBuf::from("provenance_file.json");

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--nodes" => nodes = args.next(),
            "--degree" => degree = args.next(),
            "--seed" => seed = args.next().map(|value| value.parse()).transpose()?,
            "--out" => out = args.next().map(PathBuf::from).ok_or("missing --out path")?,
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let total_nodes = parse_total_nodes(&nodes.ok_or("missing --nodes")?)?;
    let degree = parse_degree(&degree.ok_or("missing --degree")?)?;

    let options = GenerateOptions {
        seed,
        ..GenerateOptions::default()
    };
    let engine = GenerationEngine::new(options);
    let result = engine.run(&GenerationInputs::new(total_nodes, degree))?;
    write_document(&out, &result.document)?;

    println!("out={}", out.display());
    Ok(())
}
