//! Layout module - Derives environment, stage and output paths from a namespace
//!
//! Everything here is pure: no filesystem access, recomputed on every call.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::config::{environments, layout};

/// Environment classification of a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Prod,
    NonProd,
}

impl Environment {
    /// `Prod` iff the namespace ends with `-prod`. The suffix is only detected, never stripped.
    pub fn classify(namespace: &str) -> Self {
        if namespace.ends_with(environments::PROD_SUFFIX) {
            Environment::Prod
        } else {
            Environment::NonProd
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Prod => environments::PROD,
            Environment::NonProd => environments::NONPROD,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Namespace split at its last hyphen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceParts<'a> {
    /// Everything before the last `-`
    pub without_suffix: &'a str,
    /// Everything after the last `-`
    pub stage: &'a str,
}

impl<'a> NamespaceParts<'a> {
    /// Both parts are empty when the namespace has no `-`.
    pub fn split(namespace: &'a str) -> Self {
        match namespace.rfind('-') {
            Some(i) => NamespaceParts {
                without_suffix: &namespace[..i],
                stage: &namespace[i + 1..],
            },
            None => NamespaceParts {
                without_suffix: "",
                stage: "",
            },
        }
    }
}

/// Paths of one generated layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub environment: Environment,
    pub base: PathBuf,
    pub patches: PathBuf,
    pub resources: PathBuf,
    pub manifest: PathBuf,
}

impl Layout {
    /// Derive `{root}/{kind}-{namespaceWithoutSuffix}-{env}/{stage}` and the paths inside it.
    ///
    /// Empty segments are omitted: no doubled `-` in the directory name and no
    /// extra path component for an empty stage.
    pub fn derive(root: &Path, namespace: &str, kind: &str, service: &str) -> Self {
        let environment = Environment::classify(namespace);
        let parts = NamespaceParts::split(namespace);

        let mut base = root.join(base_dir_name(kind, parts.without_suffix, environment));
        if !parts.stage.is_empty() {
            base.push(parts.stage);
        }

        let patches = base.join(layout::PATCHES_DIR);
        let resources = base.join(layout::RESOURCES_DIR);
        let manifest = resources.join(manifest_file_name(service));

        Layout {
            environment,
            base,
            patches,
            resources,
            manifest,
        }
    }
}

fn base_dir_name(kind: &str, without_suffix: &str, environment: Environment) -> String {
    [kind, without_suffix, environment.as_str()]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(layout::SEGMENT_SEPARATOR)
}

/// `imagestream_{service}.yaml`
pub fn manifest_file_name(service: &str) -> String {
    format!(
        "{}{}.{}",
        layout::IMAGESTREAM_PREFIX,
        service,
        layout::MANIFEST_EXT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prod_suffix_is_prod() {
        assert_eq!(Environment::classify("team-a-prod"), Environment::Prod);
        assert_eq!(Environment::classify("-prod"), Environment::Prod);
    }

    #[test]
    fn everything_else_is_nonprod() {
        for ns in ["team-a-dev", "shared", "prod", "team-production", "team-prod-x", ""] {
            assert_eq!(Environment::classify(ns), Environment::NonProd, "{ns}");
        }
    }

    #[test]
    fn split_uses_last_hyphen() {
        let parts = NamespaceParts::split("team-a-prod");
        assert_eq!(parts.without_suffix, "team-a");
        assert_eq!(parts.stage, "prod");
    }

    #[test]
    fn split_recombines_to_namespace() {
        for ns in ["a-b", "team-a-int", "x--y", "-lead", "trail-", "-"] {
            let parts = NamespaceParts::split(ns);
            assert_eq!(format!("{}-{}", parts.without_suffix, parts.stage), ns);
        }
    }

    #[test]
    fn split_without_hyphen_is_empty() {
        let parts = NamespaceParts::split("shared");
        assert_eq!(parts.without_suffix, "");
        assert_eq!(parts.stage, "");
    }

    #[test]
    fn derive_prod_layout() {
        let layout = Layout::derive(Path::new("."), "team-a-prod", "app", "billing");

        assert_eq!(layout.environment, Environment::Prod);
        assert_eq!(layout.base, Path::new("./app-team-a-prod/prod"));
        assert_eq!(layout.patches, Path::new("./app-team-a-prod/prod/patches"));
        assert_eq!(layout.resources, Path::new("./app-team-a-prod/prod/resources"));
        assert_eq!(
            layout.manifest,
            Path::new("./app-team-a-prod/prod/resources/imagestream_billing.yaml")
        );
    }

    #[test]
    fn derive_nonprod_layout() {
        let layout = Layout::derive(Path::new("out"), "team-a-int", "app", "billing");

        assert_eq!(layout.environment, Environment::NonProd);
        assert_eq!(layout.base, Path::new("out/app-team-a-nonprod/int"));
    }

    #[test]
    fn derive_omits_empty_segments() {
        let layout = Layout::derive(Path::new("."), "shared", "infra", "gateway");

        assert_eq!(layout.environment, Environment::NonProd);
        assert_eq!(layout.base, Path::new("./infra-nonprod"));
        assert_eq!(
            layout.manifest,
            Path::new("./infra-nonprod/resources/imagestream_gateway.yaml")
        );
    }

    #[test]
    fn derive_with_empty_kind() {
        let layout = Layout::derive(Path::new("."), "team-dev", "", "api");
        assert_eq!(layout.base, Path::new("./team-nonprod/dev"));
    }

    #[test]
    fn manifest_name() {
        assert_eq!(manifest_file_name("billing"), "imagestream_billing.yaml");
    }
}
