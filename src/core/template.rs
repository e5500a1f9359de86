//! Template module - Materializes the GitOps layout of a service
//!
//! Creates `patches/` and `resources/` under the derived base directory and
//! renders the embedded ImageStream template into `resources/`.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use gtmpl::{Context, Template, Value};

use crate::core::config::templates;
use crate::core::error::{DirKind, MaterializeError, Result};
use crate::core::layout::{Layout, NamespaceParts};
use crate::core::logging::{Diagnostics, Event};

/// Outcome of a successful `create`
#[derive(Debug)]
pub struct Materialized {
    pub layout: Layout,
}

/// Writes layouts under `root`
pub struct Materializer<'a> {
    root: PathBuf,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> Materializer<'a> {
    pub fn new(root: impl Into<PathBuf>, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            root: root.into(),
            diagnostics,
        }
    }

    /// Create the layout for `(namespace, kind, service)` and render the manifest.
    ///
    /// Stops at the first failing step. Directories created before the failure are kept.
    pub fn create(&self, namespace: &str, kind: &str, service: &str) -> Result<Materialized> {
        let layout = Layout::derive(&self.root, namespace, kind, service);
        let parts = NamespaceParts::split(namespace);
        let diag = self.diagnostics;

        diag.info(&Event::Environment {
            environment: layout.environment,
            namespace,
        });
        diag.info(&Event::Structure {
            namespace_without_suffix: parts.without_suffix,
            stage: parts.stage,
            base: &layout.base,
        });

        create_dir(diag, &layout.patches, DirKind::Patches)?;
        create_dir(diag, &layout.resources, DirKind::Resources)?;

        let tmpl = parse_template(templates::IMAGESTREAM_NAME, templates::IMAGESTREAM)
            .inspect_err(|e| diag.error(e))?;
        diag.info(&Event::TemplateParsed);

        let mut file = File::create(&layout.manifest)
            .map_err(|source| MaterializeError::FileCreate {
                path: layout.manifest.clone(),
                source,
            })
            .inspect_err(|e| diag.error(e))?;
        diag.info(&Event::FileCreated {
            file: &layout.manifest,
        });

        render(&tmpl, &mut file, &layout.manifest, service, namespace)
            .inspect_err(|e| diag.error(e))?;
        diag.debug(&Event::TemplateExecuted {
            name: service,
            namespace,
        });

        Ok(Materialized { layout })
    }
}

fn create_dir(diag: &dyn Diagnostics, path: &Path, which: DirKind) -> Result<()> {
    std::fs::create_dir_all(path)
        .map_err(|source| MaterializeError::DirectoryCreate {
            which,
            path: path.to_path_buf(),
            source,
        })
        .inspect_err(|e| diag.error(e))?;
    diag.info(&Event::DirectoryCreated {
        which,
        directory: path,
    });
    Ok(())
}

/// Parse a template source; a broken template is an error, never a panic.
pub fn parse_template(name: &str, source: &str) -> Result<Template> {
    let mut tmpl = Template::default();
    tmpl.parse(source)
        .map_err(|e| MaterializeError::TemplateParse {
            template: name.to_string(),
            reason: e.to_string(),
        })?;
    Ok(tmpl)
}

/// Execute `tmpl` into `writer`; `path` only names the destination in the error.
pub fn render<W: Write>(
    tmpl: &Template,
    writer: &mut W,
    path: &Path,
    service: &str,
    namespace: &str,
) -> Result<()> {
    let context = Context::from(substitutions(service, namespace));
    tmpl.execute(writer, &context)
        .map_err(|e| MaterializeError::TemplateRender {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Template data: `Name` is the service, `Namespace` the full namespace
fn substitutions(service: &str, namespace: &str) -> Value {
    let mut data = HashMap::new();
    data.insert("Name".to_string(), Value::from(service.to_string()));
    data.insert("Namespace".to_string(), Value::from(namespace.to_string()));
    Value::Map(data)
}
