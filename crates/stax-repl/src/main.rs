//! stax - interactive stack language
//!
//! Usage:
//!   stax                    # Interactive prompt
//!   stax 3 4 + .            # Run one line and exit
//!   stax --config my.stax   # Use another default script
//!
//! Every line is all-or-nothing: if any word faults, the stacks and the
//! dictionary go back to what they were before the line. Type `help` to
//! list words and `exit` (or Ctrl-D) to leave.

mod editor;

use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use stax_runtime::Interpreter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use editor::EditorHost;

const PROMPT: &str = "stax> ";

#[derive(ClapParser)]
#[command(name = "stax")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive stack language with transactional lines", long_about = None)]
struct Args {
    /// Words to run as a single line instead of starting the prompt
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    line: Vec<String>,

    /// Default script to load at startup and on `reload`
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip loading the default script
    #[arg(long)]
    no_default: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut interp = Interpreter::new().with_host(EditorHost::from_env());

    match args.config.clone().or_else(default_script_path) {
        Some(path) if !args.no_default => {
            if let Err(e) = interp.bootstrap(&path) {
                eprintln!("Error loading {}: {}", path.display(), e);
                process::exit(1);
            }
        }
        Some(path) => interp = interp.with_script_path(path),
        None => info!("no config directory; running without a default script"),
    }

    if args.line.is_empty() {
        repl_loop(&mut interp);
    } else {
        let line = args.line.join(" ");
        if interp.execute_line(&line).is_err() {
            process::exit(1);
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stax={level},stax_runtime={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main prompt loop
fn repl_loop(interp: &mut Interpreter) {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error initializing readline: {}", e);
            process::exit(1);
        }
    };

    let history_file = history_path();
    if let Some(ref path) = history_file {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                // The interpreter already printed the diagnostic
                if let Err(fault) = interp.execute_line(line) {
                    debug!(kind = fault.kind(), "line rolled back");
                }
                if interp.exit_requested() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_file {
        let _ = rl.save_history(path);
    }
}

/// `<config dir>/stax/default.stax`
fn default_script_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stax").join("default.stax"))
}

fn history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("stax_history"))
}
