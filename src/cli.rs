//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::infra::config::DEFAULT_CONFIG;
use crate::output::OutputContext;

/// Managed Kubernetes cluster lifecycle
#[derive(Parser)]
#[command(
    name = "berth",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the cluster configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install or destroy a cluster
    #[command(subcommand)]
    Cluster(ClusterCommand),

    /// Manage components on an existing cluster
    #[command(subcommand)]
    Component(ComponentCommand),

    /// Show version
    Version,
}

#[derive(Subcommand)]
pub enum ClusterCommand {
    /// Provision infrastructure, verify the control plane, install components
    Install,

    /// Destroy the cluster. Irreversible; requires --confirm
    Destroy {
        /// Confirm cluster destruction
        #[arg(long)]
        confirm: bool,
    },
}

#[derive(Subcommand)]
pub enum ComponentCommand {
    /// Install configured components (all, or only the named ones)
    Install {
        /// Component names to install; empty means all configured components
        names: Vec<String>,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails; the caller decides process
    /// exit. No command terminates the process itself.
    pub async fn run(self) -> Result<()> {
        let Cli {
            config,
            quiet,
            no_color,
            command,
        } = self;
        let ctx = OutputContext::new(no_color, quiet);
        match command {
            Command::Cluster(ClusterCommand::Install) => {
                commands::cluster::install(&ctx, &config).await
            }
            Command::Cluster(ClusterCommand::Destroy { confirm }) => {
                commands::cluster::destroy(&ctx, &config, confirm).await
            }
            Command::Component(ComponentCommand::Install { names }) => {
                commands::component::install(&ctx, &config, &names).await
            }
            Command::Version => commands::version::run(),
        }
    }
}
