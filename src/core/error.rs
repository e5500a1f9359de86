//! Error module - Failures of the template materializer

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two layout directories failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Patches,
    Resources,
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirKind::Patches => f.write_str("patches"),
            DirKind::Resources => f.write_str("resources"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("failed to create {which} directory {}", path.display())]
    DirectoryCreate {
        which: DirKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template '{template}': {reason}")]
    TemplateParse { template: String, reason: String },

    #[error("failed to create file {}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to execute template into {}: {reason}", path.display())]
    TemplateRender { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, MaterializeError>;
