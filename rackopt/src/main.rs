use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rackopt::config::OptimizerConfig;
use rackopt::io;
use rackopt::io::cli::Cli;
use rackopt::io::output::SolutionOutput;
use rackopt::io::report::detailed_report;
use rackopt::opt::optimize;
use rackplan::io::{export_solution, import_problem};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            OptimizerConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed OptimizerConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_problem = io::read_problem(args.input_file.as_path())?;
    let (counts, layout) = import_problem(&ext_problem)?;

    let start = std::time::Instant::now();
    let solution = optimize(&counts, &layout, args.strategy, &config)?;
    let run_time_ms = start.elapsed().as_millis() as u64;

    info!(
        "[MAIN] placed {}/{} racks, score: {}",
        solution.metrics.total_racks,
        solution.racks.len(),
        solution.score
    );
    for rack in solution.unplaced() {
        warn!("[MAIN] {} could not be placed", rack.id());
    }

    let report_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.txt"));
    io::write_text(&detailed_report(&solution, &layout), &report_path)?;

    let output = SolutionOutput {
        problem: ext_problem,
        strategy: args.strategy,
        solution: export_solution(&solution, run_time_ms),
        config,
    };
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, &solution_path)
}
