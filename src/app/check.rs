use crate::adapters::clock::FixedClock;
use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::core::classifier::EventStatusClassifier;
use crate::core::{GroupId, StatusReport};
use crate::utils::error::Result;

/// Classify the group named on the command line against the events of `file`.
///
/// `--now` wins over `[clock].fixed_now`; with neither the system clock is used.
pub async fn check_last_event_status(cli: &CliConfig, file: &TomlConfig) -> Result<StatusReport> {
    let group_id = GroupId::new(cli.group_id.clone())?;
    let loader = file.to_loader()?;
    tracing::debug!(groups = loader.group_count().await, "loaded event fixtures");

    let status = match cli.now_override()?.or_else(|| file.fixed_now()) {
        Some(now) => {
            tracing::debug!(%now, "using pinned clock");
            EventStatusClassifier::with_clock(loader, FixedClock::new(now))
                .perform(&group_id)
                .await?
        }
        None => EventStatusClassifier::new(loader).perform(&group_id).await?,
    };

    Ok(StatusReport { group_id, status })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventStatus;

    const FIXTURES: &str = r#"
[clock]
fixed_now = "2024-05-01T12:00:00Z"

[[events]]
group_id = "g1"
end_date = "2024-05-01T12:00:00Z"
review_duration_in_hours = 1.0
"#;

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
    fn test_uses_clock_from_config_file() {
        let file = TomlConfig::from_toml_str(FIXTURES).unwrap();

        let report = tokio_test::block_on(check_last_event_status(&cli("g1", None), &file)).unwrap();

        assert_eq!(report.status, EventStatus::Active);
        assert_eq!(report.group_id.as_str(), "g1");
    }

    #[test]
    fn test_command_line_now_overrides_config_clock() {
        let file = TomlConfig::from_toml_str(FIXTURES).unwrap();
        let cli = cli("g1", Some("2024-05-01T12:00:00.001Z"));

        let report = tokio_test::block_on(check_last_event_status(&cli, &file)).unwrap();

        assert_eq!(report.status, EventStatus::InReview);
    }

    #[test]
    fn test_unknown_group_is_done() {
        let file = TomlConfig::from_toml_str(FIXTURES).unwrap();

        let report = tokio_test::block_on(check_last_event_status(&cli("g9", None), &file)).unwrap();

        assert_eq!(report.status, EventStatus::Done);
    }

    #[test]
    fn test_whitespace_group_without_events_is_done() {
        let file = TomlConfig::default();

        let report = tokio_test::block_on(check_last_event_status(&cli(" ", None), &file)).unwrap();

        assert_eq!(report.group_id.as_str(), " ");
        assert_eq!(report.status, EventStatus::Done);
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let file = TomlConfig::default();
        assert!(tokio_test::block_on(check_last_event_status(&cli("", None), &file)).is_err());
    }
}
