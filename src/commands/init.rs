//! Comando init - Gera a estrutura GitOps de um serviço
//!
//! Cria `{tipo}-{namespace}-{env}/{stage}/` com `patches/` e `resources/`
//! e renderiza o manifest do ImageStream em `resources/`.

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::core::logging::TracingDiagnostics;
use crate::core::template::Materializer;
use crate::core::utils;

pub fn run(namespace: &str, kind: &str, service: &str, output: &Path, quiet: bool) -> Result<()> {
    tracing::info!(namespace, kind, service, output = %output.display(), "init called");

    if !quiet {
        println!("{}", "🔨 Criando template...".bright_yellow());
        utils::print_field("Namespace", namespace);
        utils::print_field("Type", kind);
        utils::print_field("Service", service);
        println!();
    }

    let diagnostics = TracingDiagnostics;
    let done = Materializer::new(output, &diagnostics)
        .create(namespace, kind, service)
        .context("Falha ao criar template")?;

    if !quiet {
        utils::print_created(&done.layout.patches);
        utils::print_created(&done.layout.resources);
        utils::print_created(&done.layout.manifest);
        println!();
        println!(
            "{} ({})",
            "✓ Template criado com sucesso!".bright_green(),
            done.layout.environment.to_string().bright_cyan()
        );
    }

    Ok(())
}
