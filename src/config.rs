//! Optional on-disk configuration
//!
//! A `roster.toml` next to the binary may override the database location;
//! everything else has a working default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RosterConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("roster.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("students.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<RosterConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: RosterConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let loaded = load_config(Some(&dir.path().join("roster.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_database_override_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, "database = \"/tmp/other.db\"\n").unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("/tmp/other.db"));
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::TempDir::new().unwrap();
        let db_path = dir.path().join("nested").join("students.db");

        ensure_db_dir(&db_path).unwrap();

        assert!(db_path.parent().unwrap().exists());
    }
}
