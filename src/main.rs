//! compliance-suite: terminal dashboard for compliance operations.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use compliance_suite::{
    cli::{self, exit_codes, SummaryFormat},
    config::{generate_example_config, generate_json_schema, load_or_default},
    model::ViewId,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "compliance-suite")]
#[command(version)]
#[command(about = "Terminal dashboard for audit, reporting, AML, fraud and eKYC review", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Invalid view, filter or configuration
    3  Error occurred

EXAMPLES:
    # Open the dashboard on the reporting view
    compliance-suite --view reporting

    # Critical anomalies as JSON
    compliance-suite summary --view audit --filter critical --format json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// View to open first
    #[arg(long, value_enum)]
    view: Option<ViewId>,

    /// Color theme: dark, light or high-contrast
    #[arg(long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one view's table, optionally filtered
    Summary {
        /// View whose table to print
        #[arg(long, value_enum)]
        view: ViewId,

        /// Filter value for the view's primary field, or "all"
        #[arg(long)]
        filter: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: SummaryFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON Schema of the configuration file
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an example configuration file
    ConfigExample,
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        None => {
            let (mut config, loaded_from) = load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("using config file {}", path.display());
            }
            config.apply_overrides(cli.view, cli.theme.as_deref());
            cli::run_dashboard(&config, cli.theme.is_some())
        }

        Some(Commands::Summary {
            view,
            filter,
            format,
        }) => cli::run_summary(view, filter.as_deref(), format),

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "compliance-suite", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Some(Commands::ConfigSchema { output }) => {
            let schema = generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Some(Commands::ConfigExample) => {
            print!("{}", generate_example_config());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    // Help and version go to stdout and exit 0; parse errors are usage errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    init_logging(&cli);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
