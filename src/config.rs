use std::{
    env::{self, VarError},
    path::PathBuf,
};

use log::{debug, error, info};

use crate::error::Result;

/// File holding the keyword blocks when nothing else is configured.
pub const DEFAULT_RESPONSES_FILE: &str = "responses.txt";

/// File holding the fallback replies when nothing else is configured.
pub const DEFAULT_DEFAULTS_FILE: &str = "default.txt";

const RESPONSES_FILE_VAR: &str = "RESPONDER_RESPONSES_FILE";
const DEFAULTS_FILE_VAR: &str = "RESPONDER_DEFAULTS_FILE";

/// Locations of the two response files read at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub responses_path: PathBuf,
    pub defaults_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            responses_path: PathBuf::from(DEFAULT_RESPONSES_FILE),
            defaults_path: PathBuf::from(DEFAULT_DEFAULTS_FILE),
        }
    }
}

impl Config {
    pub fn new(responses_path: impl Into<PathBuf>, defaults_path: impl Into<PathBuf>) -> Self {
        Self {
            responses_path: responses_path.into(),
            defaults_path: defaults_path.into(),
        }
    }

    /// Reads the file locations from the environment (and `.env`), keeping the
    /// built-in names for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not valid unicode.
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let responses_path = path_var(RESPONSES_FILE_VAR, DEFAULT_RESPONSES_FILE)?;
        let defaults_path = path_var(DEFAULTS_FILE_VAR, DEFAULT_DEFAULTS_FILE)?;

        info!("Configuration loaded successfully");
        debug!("Responses file: {}", responses_path.display());
        debug!("Default responses file: {}", defaults_path.display());

        Ok(Self {
            responses_path,
            defaults_path,
        })
    }
}

fn path_var(name: &str, fallback: &str) -> Result<PathBuf> {
    match env::var(name) {
        Ok(value) => Ok(PathBuf::from(value)),
        Err(VarError::NotPresent) => Ok(PathBuf::from(fallback)),
        Err(e) => {
            error!("Failed to load {name} from environment: {e}");
            Err(e.into())
        }
    }
}
