use std::fs;
use std::path::Path;

use crate::config::DEPENDENCY_FILE;
use crate::error::ProvisionError;

/// Ordered list of package names to hand to debootstrap. Order follows the
/// input file; duplicates are kept as-is.
#[derive(Debug)]
pub struct DependencyList {
    packages: Vec<String>,
}

impl DependencyList {
    /// Parse the dependency file format: one package per non-blank line,
    /// first whitespace-delimited token only, rest of the line ignored.
    pub fn parse(text: &str) -> Self {
        let packages = text
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_owned)
            .collect();
        Self { packages }
    }

    pub fn load(dir: &Path) -> Result<Self, ProvisionError> {
        let path = dir.join(DEPENDENCY_FILE);
        let text = fs::read_to_string(&path)
            .map_err(|source| ProvisionError::Config { path, source })?;
        Ok(Self::parse(&text))
    }

    /// Comma-joined list for debootstrap's `--include=` argument.
    pub fn include_arg(&self) -> String {
        self.packages.join(",")
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
