//! Unified error types for the tsforge scaffolder.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during a scaffolding run.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Manifest ---

    /// The project manifest (`package.json`) was not found in the target directory.
    #[error("package.json not found at {path} — run `npm init` first")]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest exists but contains invalid JSON.
    #[error("failed to parse package.json at {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Runtime detection ---

    /// The `node` executable could not be located on PATH.
    #[error("node executable not found — install Node.js: https://nodejs.org/")]
    NodeNotFound(#[source] which::Error),

    /// `node --version` produced output with no parseable major version.
    #[error("could not parse Node.js version from {0:?}")]
    VersionUnparseable(String),

    // --- Templates ---

    /// Handlebars template rendering failed (missing variable in strict mode,
    /// or malformed template syntax).
    #[error("template '{name}' failed to render: {reason}")]
    TemplateRender { name: String, reason: String },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
