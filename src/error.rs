use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("Unable to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("A problem was encountered reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ResponderError {
    /// Path of the response file involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ResponderError::Open { path, .. } | ResponderError::Read { path, .. } => Some(path),
            ResponderError::EnvVar(_) | ResponderError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResponderError>;
