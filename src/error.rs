use miette::Diagnostic;
use thiserror::Error;

/// Main error type for siam operations.
///
/// Parsing and resolving a system never fails; these errors come from the
/// layers around the core (files, manifests, serialization).
#[derive(Error, Diagnostic, Debug)]
pub enum SiamError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(siam::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(siam::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(siam::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SiamError>;
