//! Breachpath CLI — run the attack-path engine over a dataset file
//!
//! Datasets are JSON files shaped `{"nodes": [...], "edges": [...]}` as
//! produced by the external graph loader.

use anyhow::Context;
use breachpath::{enhance, generate_threat_paths, Dataset, EngineConfig, ThreatPathScenario};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "breachpath", version, about = "Breachpath attack-path engine CLI")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ranked threat path scenarios from a dataset
    Analyze {
        /// Path to the dataset JSON file
        dataset: PathBuf,

        /// Minimum risk score a scenario must reach to be kept
        #[arg(long, default_value_t = 0.0)]
        risk_threshold: f64,

        /// Cap on the final result count
        #[arg(long, default_value_t = 20)]
        max_paths: i64,

        /// Hop bound for path enumeration
        #[arg(long, default_value_t = 6)]
        max_path_length: i64,

        /// Also allow workstation/user-account entry points
        #[arg(long)]
        include_external_threats: bool,

        /// Also allow any user-privileged node as an entry point
        #[arg(long)]
        include_insider_threats: bool,

        /// Comma-separated uids to force-include as high-value targets
        #[arg(long, value_delimiter = ',')]
        targets: Vec<String>,

        /// Inject the synthetic infrastructure catalogs
        #[arg(long)]
        synthesize: bool,

        /// Mark a random sample of nodes as suspected compromised
        #[arg(long)]
        simulate_compromise: bool,

        /// Seed for the compromise-simulation RNG
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Print the enriched graph for a dataset
    Enhance {
        /// Path to the dataset JSON file
        dataset: PathBuf,

        /// Inject the synthetic infrastructure catalogs
        #[arg(long)]
        synthesize: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Analyze {
            dataset,
            risk_threshold,
            max_paths,
            max_path_length,
            include_external_threats,
            include_insider_threats,
            targets,
            synthesize,
            simulate_compromise,
            seed,
        } => {
            let config = EngineConfig {
                risk_threshold,
                max_paths,
                max_path_length,
                include_external_threats,
                include_insider_threats,
                target_specific_assets: targets,
                synthesize_infrastructure: synthesize,
                simulate_compromise,
                compromise_seed: seed,
            };
            run_analyze(&dataset, &config, &cli.format)
        }
        Commands::Enhance { dataset, synthesize } => {
            let config = EngineConfig {
                synthesize_infrastructure: synthesize,
                ..EngineConfig::default()
            };
            run_enhance(&dataset, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    Dataset::from_json(&json).context("parsing dataset")
}

fn run_analyze(path: &Path, config: &EngineConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    let scenarios = generate_threat_paths(&dataset.nodes, &dataset.edges, config)
        .context("generating threat paths")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scenarios)?);
        }
        OutputFormat::Table => {
            print_scenario_table(&scenarios);
            println!("{} scenarios", scenarios.len());
        }
    }
    Ok(())
}

fn run_enhance(path: &Path, config: &EngineConfig) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    let (nodes, edges) = enhance(&dataset.nodes, &dataset.edges, config);
    let enriched = serde_json::json!({ "nodes": nodes, "edges": edges });
    println!("{}", serde_json::to_string_pretty(&enriched)?);
    Ok(())
}

fn print_scenario_table(scenarios: &[ThreatPathScenario]) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Id", "Severity", "Risk", "Likelihood", "Impact", "Entry", "Target", "Hops",
            "Detection",
        ]);

    for scenario in scenarios {
        table.add_row(vec![
            scenario.id.clone(),
            scenario.severity.to_string(),
            format!("{:.1}", scenario.risk_score),
            format!("{:.2}", scenario.likelihood),
            format!("{:.0}", scenario.impact),
            scenario.entry_point.clone(),
            scenario.target_asset.clone(),
            (scenario.path.len() - 1).to_string(),
            scenario.detection_difficulty.to_string(),
        ]);
    }

    println!("{table}");
}
