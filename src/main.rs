//! mpstart - MicroProfile Starter in your terminal.
//!
//! Generates MicroProfile starter projects from the command line by talking
//! to the starter service's support matrix and project endpoints.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mpstart::starter::StarterApi;
use mpstart::{
    EditorWorkspace, ProjectWizard, StarterClient, TerminalNotifier, TerminalPrompts,
    WizardAnswers, DEFAULT_BASE_URL,
};

/// MicroProfile Starter in your terminal
#[derive(Parser)]
#[command(name = "mpstart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the starter service
    #[arg(long, global = true, env = "MPSTART_URL", default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a starter project (default)
    New {
        /// Maven group id (skips the prompt)
        #[arg(long)]
        group_id: Option<String>,

        /// Maven artifact id (skips the prompt)
        #[arg(long)]
        artifact_id: Option<String>,

        /// MicroProfile version, e.g. MP4.1 (skips the prompt)
        #[arg(long)]
        mp_version: Option<String>,

        /// Server runtime, e.g. LIBERTY (skips the prompt)
        #[arg(long)]
        server: Option<String>,

        /// Java SE version, e.g. SE17 (skips the prompt)
        #[arg(long)]
        java_se: Option<String>,

        /// Specification to include (repeatable, skips the prompt)
        #[arg(long = "spec")]
        specs: Option<Vec<String>>,

        /// Target directory (skips the prompt)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Don't offer to open the generated project
        #[arg(long)]
        no_open: bool,
    },

    /// Print the support matrix
    Matrix {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List specification identifiers and their descriptions
    #[command(disable_version_flag = true)]
    Specs {
        /// Limit to one MicroProfile version
        #[arg(long)]
        version: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("mpstart=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mpstart=warn"))
    };
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    match cli.command {
        None => run_wizard(&cli.url, WizardAnswers::default()),
        Some(Commands::New {
            group_id,
            artifact_id,
            mp_version,
            server,
            java_se,
            specs,
            dir,
            no_open,
        }) => {
            let answers = WizardAnswers {
                group_id,
                artifact_id,
                mp_version,
                server,
                java_se,
                specs,
                dir,
                no_open,
            };
            run_wizard(&cli.url, answers)
        }
        Some(Commands::Matrix { format }) => print_matrix(&cli.url, &format),
        Some(Commands::Specs { version }) => print_specs(&cli.url, version.as_deref()),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "mpstart", &mut io::stdout());
            Ok(())
        }
    }
}

/// Run the interactive wizard. Always exits zero: failures are reported to
/// the user inside the wizard, not propagated.
fn run_wizard(url: &str, answers: WizardAnswers) -> Result<()> {
    let client = StarterClient::with_url(url)?;
    let prompts = TerminalPrompts::new();
    let workspace = EditorWorkspace::detect();
    let notifier = TerminalNotifier::new();

    ProjectWizard::new(&client, &prompts, &workspace, &notifier, answers).run();
    Ok(())
}

fn print_matrix(url: &str, format: &str) -> Result<()> {
    let client = StarterClient::with_url(url)?;
    let matrix = client.fetch_support_matrix()?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    for version in matrix.versions() {
        let Some(config) = matrix.config(version) else { continue };
        println!("{version}");
        println!("  Servers: {}", config.supported_servers.join(", "));
        println!("  Specs:   {}", config.specs.join(", "));
    }
    Ok(())
}

fn print_specs(url: &str, version: Option<&str>) -> Result<()> {
    let client = StarterClient::with_url(url)?;
    let matrix = client.fetch_support_matrix()?;

    let spec_ids: Vec<String> = match version {
        Some(version) => {
            let Some(config) = matrix.config(version) else {
                anyhow::bail!(
                    "Unknown MicroProfile version '{version}'. Run 'mpstart matrix' to list versions."
                );
            };
            config.specs.clone()
        }
        None => {
            let mut ids: Vec<String> = matrix
                .configs
                .values()
                .flat_map(|c| c.specs.iter().cloned())
                .collect();
            ids.sort();
            ids.dedup();
            ids
        }
    };

    for id in &spec_ids {
        println!("{id:<24} {}", matrix.describe(id));
    }
    Ok(())
}
