use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sketchpad::config::{ConfigError, EngineConfig};
use sketchpad::engine::EngineCore;
use sketchpad::script::{self, ScriptError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Script(#[from] ScriptError),
}

#[derive(Parser, Debug)]
#[command(name = "sketchpad", about = "Replay a gesture script through the sketchpad engine")]
struct Cli {
    /// JSON-lines gesture script; reads stdin when omitted.
    script: Option<PathBuf>,

    /// Also print every action the engine emitted.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = EngineConfig::from_env()?;
    let events = match &cli.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open { path: path.clone(), source })?;
            script::parse(BufReader::new(file))?
        }
        None => script::parse(io::stdin().lock())?,
    };
    tracing::info!(events = events.len(), tool = config.default_tool.name(), "replaying script");

    let mut engine = EngineCore::from_config(config);
    let actions = script::replay(&mut engine, &events);
    if cli.verbose {
        for action in &actions {
            println!("action {action:?}");
        }
    }

    for element in engine.scene() {
        println!("{element}");
    }
    println!("history {}/{}", engine.history.cursor() + 1, engine.history.len());
    Ok(())
}
