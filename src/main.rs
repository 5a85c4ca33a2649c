//! pullrule: pull bundled Cursor rule files into .cursor/rules

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pullrule::commands::{self, PullOptions};
use pullrule::config::{Environment, Layout, ENV_VAR};
use pullrule::diagnostics::Console;
use pullrule::prompt::TerminalPrompter;
use pullrule::rules::ModuleReader;

#[derive(Parser)]
#[command(name = "pullrule")]
#[command(about = "Pull Cursor rule files to your local .cursor/rules directory", long_about = None)]
#[command(version)]
struct Cli {
    /// Pull JavaScript rules
    #[arg(short, long)]
    js: bool,

    /// Pull Rust rules
    #[arg(short, long)]
    rust: bool,

    /// Pull common rules
    #[arg(short, long)]
    common: bool,

    /// Pull rules from a module by name (repeatable)
    #[arg(short, long = "module", value_name = "NAME")]
    modules: Vec<String>,

    /// List and select modules to pull all files from
    #[arg(short, long)]
    list: bool,

    /// Directory that receives .cursor/rules (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Read rule modules from this directory instead of the bundled rules
    #[arg(long, value_name = "DIR")]
    rules_dir: Option<PathBuf>,

    /// Where the bundled rules live: beside the working directory or the executable
    #[arg(long, env = ENV_VAR, value_enum, default_value_t = Environment::Production)]
    env: Environment,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Modules named by shorthand flags and --module, without duplicates
    fn requested_modules(&self) -> Vec<String> {
        let shorthands = [(self.js, "js"), (self.rust, "rust"), (self.common, "common")];

        let mut modules: Vec<String> = Vec::new();
        let named = shorthands
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, name)| name.to_string())
            .chain(self.modules.iter().cloned());

        for module in named {
            if !modules.contains(&module) {
                modules.push(module);
            }
        }
        modules
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pullrule=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pullrule=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let reader = match &cli.rules_dir {
        Some(dir) => ModuleReader::new(dir),
        None => ModuleReader::from_layout(&Layout::detect(cli.env)?),
    };
    tracing::debug!(root = %reader.root().display(), env = ?cli.env, "resolved rules root");

    let options = PullOptions {
        modules: cli.requested_modules(),
        target: cli.dir.clone(),
    };
    let mut prompter = TerminalPrompter::new();
    let mut diagnostics = Console;

    if cli.list {
        commands::list::execute(&reader, &options, &mut prompter, &mut diagnostics)?;
    } else {
        commands::pull::execute(&reader, &options, &mut prompter, &mut diagnostics)?;
    }

    Ok(())
}
