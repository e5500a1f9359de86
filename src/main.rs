//! Molde - Gerador de estrutura GitOps
//!
//! O molde onde vertemos os manifests de cada serviço.
//!
//! # Uso
//! ```bash
//! molde init -n team-a-prod -t app -s billing
//! molde init -n team-a-int -t app -s billing -o deploy/
//! ```
//!
//! O nível de log vem de `LOG_LEVEL` (debug, warn, error; padrão info).

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

mod commands;
mod core;

#[derive(Parser)]
#[command(name = "molde")]
#[command(about = "🔨 Molde - Gera a estrutura GitOps de um serviço", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (força LOG_LEVEL=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cria patches/, resources/ e o manifest do ImageStream
    Init {
        /// Namespace (ex: team-a-prod)
        #[arg(short, long, required = true)]
        namespace: String,

        /// Tipo do recurso (ex: app, infra)
        #[arg(short = 't', long = "type", required = true)]
        kind: String,

        /// Nome do serviço
        #[arg(short, long, required = true)]
        service: String,

        /// Diretório onde a estrutura é criada
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        crate::core::logging::level_from_env()
    };
    crate::core::logging::init(level)?;
    tracing::info!("Starting the application");

    // Banner
    if !cli.quiet {
        println!("{}", "🔨 Molde - Gerador de estrutura GitOps".bright_cyan().bold());
        println!("{}", "   O molde onde vertemos os manifests".bright_black());
        println!();
    }

    match cli.command {
        Commands::Init {
            namespace,
            kind,
            service,
            output_dir,
        } => commands::init::run(&namespace, &kind, &service, &output_dir, cli.quiet)?,
    }

    Ok(())
}
