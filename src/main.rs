use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use suiteplot::{LabelSet, NativeWindow, Policy, Visualizer, VisualizerConfig};

/// Overlay the frequency/error curves of a test suite on one chart.
#[derive(Parser, Debug)]
#[command(name = "suiteplot", version, about)]
struct Args {
    /// Directory holding the test files. Joined to each file name as-is,
    /// so include the trailing separator (e.g. `Tests/`).
    base_path: String,

    /// Labels to load, either `ABC` or `A,B,C`. Defaults to A-Z.
    #[arg(long)]
    labels: Option<String>,

    /// Skip files that fail to load instead of aborting.
    #[arg(long)]
    best_effort: bool,

    /// JSON config file; command line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<f32>,

    #[arg(long)]
    height: Option<f32>,
}

fn build_config(args: &Args) -> Result<VisualizerConfig, suiteplot::ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => VisualizerConfig::from_json_file(path)?,
        None => VisualizerConfig::default(),
    };
    if let Some(spec) = &args.labels {
        cfg.labels = LabelSet::parse(spec)?;
    }
    if args.best_effort {
        cfg.policy = Policy::BestEffort;
    }
    if let Some(w) = args.width {
        cfg.window.width = w;
    }
    if let Some(h) = args.height {
        cfg.window.height = h;
    }
    Ok(cfg)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = match build_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut window = NativeWindow::new(cfg.window.clone());
    match Visualizer::new(cfg).run(&args.base_path, &mut window) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
