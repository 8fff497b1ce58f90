use crate::adapters::memory::InMemoryEventLoader;
use crate::core::{Event, GroupId};
use crate::utils::error::{EventStatusError, Result};
use crate::utils::validation::{validate_duration_hours, validate_non_empty_string, Validate};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub clock: Option<ClockConfig>,
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub events: Vec<EventFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    pub fixed_now: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFixture {
    pub group_id: String,
    pub end_date: DateTime<Utc>,
    pub review_duration_in_hours: f64,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EventStatusError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EventStatusError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${END_DATE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EventStatusError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        for (index, fixture) in self.events.iter().enumerate() {
            validate_non_empty_string(&format!("events[{}].group_id", index), &fixture.group_id)?;
            validate_duration_hours(
                &format!("events[{}].review_duration_in_hours", index),
                fixture.review_duration_in_hours,
            )?;
        }

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(EventStatusError::ValidationError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Unsupported level. Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn fixed_now(&self) -> Option<DateTime<Utc>> {
        self.clock.as_ref().and_then(|clock| clock.fixed_now)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|logging| logging.level.as_deref())
    }

    pub fn events(&self) -> Result<Vec<(GroupId, Event)>> {
        self.events
            .iter()
            .map(|fixture| {
                Ok((
                    GroupId::new(fixture.group_id.clone())?,
                    Event::new(fixture.end_date, fixture.review_duration_in_hours)?,
                ))
            })
            .collect()
    }

    pub fn to_loader(&self) -> Result<InMemoryEventLoader> {
        Ok(InMemoryEventLoader::from_events(self.events()?))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
