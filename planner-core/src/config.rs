//! Planner configuration
//!
//! Read once from the environment at startup.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Directory holding the database file
    pub data_dir: PathBuf,
    pub log_level: String,
    /// Daily-rolling log files land here when set
    pub log_dir: Option<PathBuf>,
}

impl PlannerConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("PLANNER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("planner-data")),
            log_level: std::env::var("PLANNER_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("PLANNER_LOG_DIR").ok().map(PathBuf::from),
        }
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("planner.redb")
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_under_data_dir() {
        let config = PlannerConfig::with_data_dir("/tmp/wedding");
        assert_eq!(config.db_path(), PathBuf::from("/tmp/wedding/planner.redb"));
    }
}
