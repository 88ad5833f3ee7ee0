//! Append-only reference list of known client names.
//! Kept in its own small YAML file, deliberately decoupled from the
//! cutting table (no transactional link). Insertion order is preserved
//! and duplicates are ignored.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Dropdown defaults of the original form.
pub const DEFAULT_CLIENTS: [&str; 3] = ["Decathlon", "Benetton", "Zara"];

pub struct ClientList {
    path: PathBuf,
    names: Vec<String>,
}

impl ClientList {
    /// Load the list, seeding the defaults when the file is missing.
    pub fn load<P: Into<PathBuf>>(path: P) -> AppResult<Self> {
        let path = path.into();

        let names = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("invalid clients file: {e}")))?
        } else {
            DEFAULT_CLIENTS.iter().map(|s| s.to_string()).collect()
        };

        Ok(Self { path, names })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add a name (dedup) and persist. Returns true when it was new.
    pub fn add(&mut self, name: &str) -> AppResult<bool> {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return Ok(false);
        }
        self.names.push(name.to_string());
        self.save()?;
        Ok(true)
    }

    /// Persist the current list (also used to materialize the seeded
    /// defaults during `init`).
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(&self.names)
            .map_err(|e| AppError::Config(format!("clients file serialization: {e}")))?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }
}
