//! Console front end.
//!
//! # Responsibility
//! - Read one command per stdin line and print the controller's reply.
//! - Map CLI flags and environment variables onto `CoreConfig`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lazytask_core::{
    default_log_level, init_logging, CoreConfig, TaskController, TaskStore, DEFAULT_MAX_TASKS,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const SEPARATOR: &str = "____________________________________________________________";

#[derive(Parser, Debug)]
#[command(name = "lazytask", version, about = "A small line-based task tracker")]
struct Cli {
    /// Save file override
    #[arg(long, env = "LAZYTASK_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "LAZYTASK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, env = "LAZYTASK_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Task ceiling; 0 disables it
    #[arg(long, default_value_t = DEFAULT_MAX_TASKS)]
    max_tasks: usize,

    /// Undo history depth; unbounded when omitted
    #[arg(long)]
    undo_limit: Option<usize>,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run a single command line and exit, e.g. `run todo read book`
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

impl Cli {
    fn core_config(&self) -> CoreConfig {
        let mut config = CoreConfig::default()
            .with_max_tasks((self.max_tasks > 0).then_some(self.max_tasks))
            .with_undo_limit(self.undo_limit);
        if let Some(path) = &self.data_file {
            config = config.with_save_path(path);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let mut controller = TaskController::open(&cli.core_config());

    match &cli.cmd {
        Some(Cmd::Run { words }) => {
            if let Some(warning) = controller.load_warning() {
                eprintln!("{warning}");
            }
            println!("{}", controller.respond(&words.join(" ")));
            Ok(())
        }
        None => run_console(&mut controller),
    }
}

fn run_console<S: TaskStore>(controller: &mut TaskController<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}\n{SEPARATOR}", controller.welcome_message())?;
    if let Some(warning) = controller.load_warning() {
        writeln!(stdout, "{SEPARATOR}\n{warning}\n{SEPARATOR}")?;
    }
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = controller.handle(&line);
        writeln!(stdout, "{SEPARATOR}\n{}\n{SEPARATOR}", response.text)?;
        stdout.flush()?;
        if response.exit {
            break;
        }
    }

    Ok(())
}
