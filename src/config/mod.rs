pub mod toml_config;

use crate::utils::error::{EventStatusError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use chrono::{DateTime, Utc};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "event-status"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Classify the last event of a group as done, active or inReview")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long))]
    pub group_id: String,

    #[cfg_attr(feature = "cli", arg(short, long, help = "TOML file with [[events]] fixtures"))]
    pub config: Option<String>,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Classify as of this RFC 3339 instant instead of the system time")
    )]
    pub now: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Print a JSON report and log as JSON"))]
    pub json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    pub fn now_override(&self) -> Result<Option<DateTime<Utc>>> {
        self.now
            .as_deref()
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw)
                    .map(|parsed| parsed.with_timezone(&Utc))
                    .map_err(|e| EventStatusError::ValidationError {
                        field: "now".to_string(),
                        value: raw.to_string(),
                        reason: format!("Expected an RFC 3339 timestamp: {}", e),
                    })
            })
            .transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("group_id", &self.group_id)?;
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        self.now_override()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cli(group_id: &str, now: Option<&str>) -> CliConfig {
        CliConfig {
            group_id: group_id.to_string(),
            config: None,
            now: now.map(str::to_string),
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_now_override_converts_offset_to_utc() {
        let config = cli("g1", Some("2024-05-01T14:00:00+02:00"));
        assert_eq!(
            config.now_override().unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert!(cli("", None).validate().is_err());
        assert!(cli(" ", None).validate().is_ok());
        assert!(cli("g1", Some("yesterday")).validate().is_err());
        assert_eq!(cli("g1", None).now_override().unwrap(), None);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_command_line() {
        let config = CliConfig::try_parse_from([
            "event-status",
            "--group-id",
            "any_group_id",
            "--config",
            "events.toml",
            "--json",
        ])
        .unwrap();

        assert_eq!(config.group_id, "any_group_id");
        assert_eq!(config.config.as_deref(), Some("events.toml"));
        assert!(config.json);
        assert!(!config.verbose);
    }
}
