//! cfshift: add gradual traffic shifting to a compiled CloudFormation template.

mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// cfshift - gradual Lambda traffic shifting for compiled templates
#[derive(Parser)]
#[command(name = "cfshift")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show which aliases would be added and which resources rewritten
  Plan {
    /// Path to the compiled template JSON
    #[arg(short, long)]
    template: PathBuf,

    /// Path to the deployment settings JSON
    #[arg(short, long)]
    config: PathBuf,

    /// Deployment stage
    #[arg(short, long, default_value = "dev")]
    stage: String,
  },

  /// Rewrite the template and write the result
  Apply {
    /// Path to the compiled template JSON
    #[arg(short, long)]
    template: PathBuf,

    /// Path to the deployment settings JSON
    #[arg(short, long)]
    config: PathBuf,

    /// Deployment stage
    #[arg(short, long, default_value = "dev")]
    stage: String,

    /// Where to write the rewritten template (defaults to in place)
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Plan {
      template,
      config,
      stage,
    } => cmd::cmd_plan(&template, &config, &stage),
    Commands::Apply {
      template,
      config,
      stage,
      output,
    } => cmd::cmd_apply(&template, &config, &stage, output.as_deref()),
  }
}
