//! Dashboard settings. The host page may embed them as JSON; every field
//! falls back to its default.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("pageSizeOptions must not be empty")]
    NoPageSizes,

    #[error("pageSizeOptions must not contain 0")]
    ZeroPageSize,

    #[error("defaultPageSize {0} is not one of pageSizeOptions")]
    DefaultPageSize(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    /// Added to the seed length to number the first created record.
    pub id_offset: u64,
    pub toast_duration_ms: u32,
    pub log_level: String,
    /// Subjects offered by the faculty forms and the subject filter.
    pub subjects: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size_options: vec![7, 10, 25, 50],
            default_page_size: 7,
            id_offset: 101,
            toast_duration_ms: 3000,
            log_level: "info".to_string(),
            subjects: [
                "Mathematics",
                "Physics",
                "Chemistry",
                "Biology",
                "History",
                "Literature",
                "Art",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizes);
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(ConfigError::DefaultPageSize(self.default_page_size));
        }
        Ok(())
    }

    /// Parsed `log_level`; unknown names mean `Info`.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.page_size_options, vec![7, 10, 25, 50]);
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let json = r#"{"pageSizeOptions":[5,20],"defaultPageSize":5,"logLevel":"debug"}"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.id_offset, 101);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn rejects_default_outside_options() {
        let err = DashboardConfig::from_json(r#"{"defaultPageSize":8}"#).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultPageSize(8)));
    }

    #[test]
    fn rejects_empty_and_zero_sizes() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{"pageSizeOptions":[]}"#),
            Err(ConfigError::NoPageSizes)
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{"pageSizeOptions":[0,7]}"#),
            Err(ConfigError::ZeroPageSize)
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = DashboardConfig::from_json("{pageSize").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid dashboard config"));
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = DashboardConfig {
            log_level: "loud".to_string(),
            ..DashboardConfig::default()
        };
        assert_eq!(config.log_level(), LevelFilter::Info);
    }
}
