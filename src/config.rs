use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Name of the dependency list file, looked up in `deps_dir`.
pub const DEPENDENCY_FILE: &str = "build-dependencies";

/// Deployment parameters for one chroot. Defaults live on the command-line
/// options in `main.rs`; everything here is injected, nothing is discovered
/// from the environment.
pub struct Config {
    pub chroot_path: PathBuf,
    pub user: String,
    pub group: String,
    pub arch: String,
    pub suite: String,
    pub mirror: String,
    /// Directory containing the `build-dependencies` file.
    pub deps_dir: PathBuf,
}

impl Config {
    pub fn home_in_chroot(&self) -> PathBuf {
        self.chroot_path.join("home").join(&self.user)
    }

    pub fn owner_spec(&self) -> String {
        format!("{}:{}", self.user, self.group)
    }
}

/// Directory the running binary was installed to, used as the default
/// location of the dependency file.
pub fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Couldn't find the directory the program lives in"))?;
    Ok(dir.to_owned())
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
