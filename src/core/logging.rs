//! Logging module - Structured logs and the diagnostics collaborator
//!
//! The materializer never touches the global subscriber: it reports typed
//! [`Event`]s through a `Diagnostics` handed to it by the command.

use std::fmt;
use std::path::Path;

use anyhow::Result;
use tracing::Level;

use crate::core::config;
use crate::core::error::{DirKind, MaterializeError};
use crate::core::layout::Environment;

/// Progress of one `create` call, with the values worth logging
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    Environment {
        environment: Environment,
        namespace: &'a str,
    },
    Structure {
        namespace_without_suffix: &'a str,
        stage: &'a str,
        base: &'a Path,
    },
    DirectoryCreated {
        which: DirKind,
        directory: &'a Path,
    },
    TemplateParsed,
    FileCreated {
        file: &'a Path,
    },
    TemplateExecuted {
        name: &'a str,
        namespace: &'a str,
    },
}

impl Event<'_> {
    pub fn message(&self) -> &'static str {
        match self {
            Event::Environment { .. } => "Setting environment",
            Event::Structure { .. } => "Creating directory structure",
            Event::DirectoryCreated { .. } => "Created directory",
            Event::TemplateParsed => "Successfully parsed the imagestream template",
            Event::FileCreated { .. } => "Created imagestream file",
            Event::TemplateExecuted { .. } => "Executed template with data",
        }
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        match self {
            Event::Environment {
                environment,
                namespace,
            } => write!(f, " environment={environment} namespace={namespace}"),
            Event::Structure {
                namespace_without_suffix,
                stage,
                base,
            } => write!(
                f,
                " namespace_without_suffix={namespace_without_suffix} stage={stage} base={}",
                base.display()
            ),
            Event::DirectoryCreated { which, directory } => {
                write!(f, " which={which} directory={}", directory.display())
            }
            Event::TemplateParsed => Ok(()),
            Event::FileCreated { file } => write!(f, " file={}", file.display()),
            Event::TemplateExecuted { name, namespace } => {
                write!(f, " name={name} namespace={namespace}")
            }
        }
    }
}

/// Sink for the progress and failures of the core
pub trait Diagnostics {
    fn info(&self, event: &Event<'_>);
    fn debug(&self, event: &Event<'_>);
    fn error(&self, err: &MaterializeError);
}

/// Forwards to the `tracing` subscriber installed by [`init`]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

macro_rules! emit {
    ($level:expr, $event:expr) => {{
        let event = $event;
        let message = event.message();
        match *event {
            Event::Environment {
                environment,
                namespace,
            } => tracing::event!($level, %environment, namespace, "{message}"),
            Event::Structure {
                namespace_without_suffix,
                stage,
                base,
            } => tracing::event!(
                $level,
                namespace_without_suffix,
                stage,
                base = %base.display(),
                "{message}"
            ),
            Event::DirectoryCreated { which, directory } => {
                tracing::event!($level, %which, directory = %directory.display(), "{message}")
            }
            Event::TemplateParsed => tracing::event!($level, "{message}"),
            Event::FileCreated { file } => {
                tracing::event!($level, file = %file.display(), "{message}")
            }
            Event::TemplateExecuted { name, namespace } => {
                tracing::event!($level, data.name = name, data.namespace = namespace, "{message}")
            }
        }
    }};
}

impl Diagnostics for TracingDiagnostics {
    fn info(&self, event: &Event<'_>) {
        emit!(Level::INFO, event);
    }

    fn debug(&self, event: &Event<'_>) {
        emit!(Level::DEBUG, event);
    }

    fn error(&self, err: &MaterializeError) {
        match std::error::Error::source(err) {
            Some(cause) => tracing::error!(error = %err, %cause, "Failed to create template"),
            None => tracing::error!(error = %err, "Failed to create template"),
        }
    }
}

/// Map a `LOG_LEVEL` value to a level. Unknown or missing values are `INFO`.
pub fn parse_level(value: Option<&str>) -> Level {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("debug") => Level::DEBUG,
        Some("warn") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Level from the `LOG_LEVEL` environment variable
pub fn level_from_env() -> Level {
    let value = std::env::var(config::env::LOG_LEVEL).ok();
    parse_level(value.as_deref())
}

/// Install the JSON subscriber on stdout
pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stdout)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {e}"))
}
