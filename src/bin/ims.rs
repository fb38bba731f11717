//! Command-line front-end for IMS DB.
//!
//! ```bash
//! # Interactive session
//! ims
//!
//! # Run a single command
//! ims -c "SHOW TABLES"
//!
//! # Run every line of a file
//! ims -f inventory.sql
//! ```

use std::{
    fs,
    io::{stdin, stdout},
    path::PathBuf,
};

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ims_db::shell::{DEFAULT_PROMPT, Shell, ShellConfig};

/// In-memory inventory database shell
#[derive(Parser, Debug)]
#[command(name = "ims", version, about = "Interactive shell for the IMS in-memory database")]
struct Args {
    /// Prompt shown before each command
    #[arg(long, default_value = DEFAULT_PROMPT, env = "IMS_PROMPT")]
    prompt: String,

    /// Suppress banner and prompts (for scripting)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Execute a single SQL command and exit
    #[arg(short = 'c', long, conflicts_with = "file")]
    command: Option<String>,

    /// Execute SQL commands from file and exit
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(false)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(args.verbose);

    let mut shell = Shell::new(ShellConfig {
        prompt: args.prompt,
        quiet: args.quiet,
    });

    let mut stdout = stdout().lock();

    if let Some(command) = &args.command {
        shell.run_script(command, &mut stdout).into_diagnostic()
    } else if let Some(file) = &args.file {
        info!(file = %file.display(), "running script");
        let script = fs::read_to_string(file).into_diagnostic()?;
        shell.run_script(&script, &mut stdout).into_diagnostic()
    } else {
        shell.run(stdin().lock(), &mut stdout).into_diagnostic()
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "ims=debug,ims_db=debug" } else { "ims=warn,ims_db=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
