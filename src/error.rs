use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("cannot read dependency list {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("the path {path:?} already exists")]
    ChrootExists { path: PathBuf },
    #[error("command `{command}` failed with status {}", .code.map_or_else(|| "unknown".to_owned(), |c| c.to_string()))]
    Subprocess { command: String, code: Option<i32> },
}

impl ProvisionError {
    /// Process exit status for this error. Subprocess failures pass the
    /// child's own status through when it exited normally.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProvisionError::Config { .. } => 1,
            ProvisionError::ChrootExists { .. } => 1,
            ProvisionError::Subprocess { code, .. } => code.unwrap_or(1),
        }
    }
}
