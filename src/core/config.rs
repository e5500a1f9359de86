//! Configuration module - Layout names and constants

/// Directory and file names inside a generated layout
pub mod layout {
    /// Kustomize patches directory (created empty)
    pub const PATCHES_DIR: &str = "patches";

    /// Rendered resources directory
    pub const RESOURCES_DIR: &str = "resources";

    /// Manifest file prefix, followed by the service name
    pub const IMAGESTREAM_PREFIX: &str = "imagestream_";

    /// Manifest file extension
    pub const MANIFEST_EXT: &str = "yaml";

    /// Separator between the segments of the base directory name
    pub const SEGMENT_SEPARATOR: &str = "-";
}

/// Environment labels
pub mod environments {
    /// Namespaces ending with this suffix are production
    pub const PROD_SUFFIX: &str = "-prod";

    pub const PROD: &str = "prod";

    pub const NONPROD: &str = "nonprod";
}

/// Embedded templates
pub mod templates {
    /// Template name, used in errors and logs
    pub const IMAGESTREAM_NAME: &str = "imagestream";

    /// ImageStream manifest, placeholders `Name` and `Namespace`
    pub const IMAGESTREAM: &str = include_str!("templates/imagestream.yaml");
}

/// Environment variables
pub mod env {
    /// Log level (debug, warn, error; anything else is info)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}
