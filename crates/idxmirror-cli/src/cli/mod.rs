//! CLI for the idxmirror directory-index mirroring tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use idxmirror_core::config::{self, MirrorConfig};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use commands::{run_mirror, run_sources, run_url};

/// Top-level CLI for idxmirror.
#[derive(Debug, Parser)]
#[command(name = "idxmirror")]
#[command(about = "Mirror HTML directory indexes (Apache-style) onto local storage", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/idxmirror/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not print the progress tree.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Mirror a configured source into <SAVE_PATH>/<SOURCE>.
    Mirror {
        /// Source name from the config (e.g. android, malware, normal, iot).
        source: String,
        /// Directory the source folder is created in.
        #[arg(long, default_value = ".", value_name = "DIR")]
        save_path: PathBuf,
    },

    /// Mirror an arbitrary index URL.
    Url {
        /// Listing URL to start from.
        url: String,
        /// Only follow top-level entries starting with this prefix.
        #[arg(long)]
        prefix: Option<String>,
        /// Local folder name (default: last path segment of the URL).
        #[arg(long)]
        name: Option<String>,
        /// Directory the folder is created in.
        #[arg(long, default_value = ".", value_name = "DIR")]
        save_path: PathBuf,
    },

    /// List configured sources.
    Sources,
}

fn load_config(path: Option<&Path>) -> Result<MirrorConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

fn progress_writer(quiet: bool) -> Box<dyn Write> {
    if quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stdout())
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let progress = progress_writer(cli.quiet);

        match cli.command {
            CliCommand::Mirror { source, save_path } => {
                run_mirror(&cfg, &source, &save_path, progress)?
            }
            CliCommand::Url {
                url,
                prefix,
                name,
                save_path,
            } => run_url(
                &cfg,
                &url,
                prefix.as_deref(),
                name.as_deref(),
                &save_path,
                progress,
            )?,
            CliCommand::Sources => run_sources(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
