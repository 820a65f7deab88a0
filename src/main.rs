//! termcalc - CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use termcalc::convert::convert;
use termcalc::history::{BackgroundHistory, FileHistory, HistorySink, NoHistory};
use termcalc::repl::{format_result, LineRepl, Session};
use termcalc::util::config::{
    get_config_path, load_config_from, load_user_config, save_user_config, UserConfig,
};
use termcalc::util::logger::{self, LogLevel};
use termcalc::{calculate, NAME, VERSION};
use tracing::debug;

/// Terminal calculator with unit conversion and history
#[derive(Parser, Debug)]
#[command(name = "termcalc")]
#[command(version = VERSION)]
#[command(about = "Terminal calculator", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file instead of the user-level one
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not record calculations
    #[arg(long, global = true)]
    no_history: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive calculator (default)
    Repl,

    /// Evaluate an expression and print the result
    Eval {
        /// Expression; several words are joined with spaces
        #[arg(value_name = "EXPR", required = true, allow_hyphen_values = true)]
        expr: Vec<String>,
    },

    /// Convert a value between units
    Convert {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: f64,
        #[arg(value_name = "FROM")]
        from: String,
        #[arg(value_name = "TO")]
        to: String,
    },

    /// Show recent calculations
    History {
        /// Number of entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the effective configuration
    Config {
        /// Write the defaults to the user config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    logger::init_with_level(if args.verbose {
        LogLevel::Debug
    } else {
        config.log.level
    });

    if args.verbose {
        eprintln!("{} version: {}", NAME, VERSION);
        eprintln!("Host: {}", std::env::consts::OS);
    }

    match args.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let session = Session::new(history_sink(&config, args.no_history))
                .with_history_limit(config.history.show_limit);
            let mut repl = LineRepl::new(session, config.repl.clone())
                .context("Failed to start the line editor")?;
            repl.run()?;
        }
        Commands::Eval { expr } => {
            let expression = expr.join(" ");
            let value = calculate(&expression)?;
            history_sink(&config, args.no_history).record(&expression, value);
            println!("{}", format_result(value));
        }
        Commands::Convert { value, from, to } => {
            let result = convert(value, &from, &to)
                .with_context(|| format!("Failed to convert {} {}", value, from))?;
            history_sink(&config, args.no_history)
                .record(&format!("convert {} {} to {}", value, from, to), result);
            println!("{} {} = {} {}", value, from, result, to);
        }
        Commands::History { limit } => {
            let Some(path) = config.history.resolve_file() else {
                bail!("Cannot determine the history file location");
            };
            let lines = FileHistory::new(path).load(limit.unwrap_or(config.history.show_limit));
            if lines.is_empty() {
                println!("No history found.");
            } else {
                println!("Calculation History:");
                for line in lines {
                    println!("{}", line);
                }
            }
        }
        Commands::Config { init } => {
            if init {
                save_user_config(&UserConfig::default())
                    .context("Failed to write the config file")?;
            }
            if let Some(path) = get_config_path() {
                println!("# {}", path.display());
            }
            let text = toml::to_string_pretty(&config).context("Failed to render the config")?;
            print!("{}", text);
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<UserConfig> {
    match path {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => load_user_config().context("Failed to load user config"),
    }
}

fn history_sink(
    config: &UserConfig,
    disabled: bool,
) -> Box<dyn HistorySink> {
    if disabled || !config.history.enabled {
        debug!("calculation history disabled");
        return Box::new(NoHistory);
    }
    match config.history.resolve_file() {
        Some(path) => {
            debug!(path = %path.display(), "recording history");
            Box::new(BackgroundHistory::spawn(FileHistory::new(path)))
        }
        None => Box::new(NoHistory),
    }
}
