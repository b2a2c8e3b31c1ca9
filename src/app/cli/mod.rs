//! CLI Adapter.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, IconPolicy, Platform};
use crate::{GenerateOptions, GenerateOutcome};

#[derive(Parser)]
#[command(name = "pake-config")]
#[command(version)]
#[command(
    about = "Rewrite Pake packaging configuration from URL, NAME, TITLE and NAME_ZH",
    long_about = None
)]
struct Cli {
    /// Project root containing src-tauri/ (defaults to current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,
    /// Platform whose overlay is applied: linux, macos/darwin, windows/win32 (defaults to host)
    #[arg(short, long)]
    platform: Option<String>,
    /// Configuration file (defaults to pake-config.toml in the project root)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Icon overwrite policy: overwrite or preserve
    #[arg(long)]
    icon_policy: Option<IconPolicy>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version print to stdout and succeed; usage errors exit 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    init_tracing();

    if let Err(e) = run_generate(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .with_target(false)
        .init();
}

fn run_generate(cli: Cli) -> Result<(), AppError> {
    // Parameters are checked before any file is read.
    let params = crate::validate_env()?;

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let mut config = crate::load_config(&root, cli.config.as_deref())?;
    if let Some(policy) = cli.icon_policy {
        config.icon_policy = policy;
    }

    let platform = cli.platform.as_deref().map(Platform::parse).unwrap_or_else(Platform::detect);
    let options = GenerateOptions { platform, config };

    let outcome = crate::generate(root, &params, &options)?;
    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &GenerateOutcome) {
    for icon in &outcome.copied_icons {
        println!("  Copied default icon to {}", icon);
    }
    println!(
        "✅ Generated {} configuration ({} file(s) written)",
        outcome.target.label(),
        outcome.written.len()
    );
}
