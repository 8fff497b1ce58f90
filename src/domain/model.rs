use crate::utils::error::Result;
use crate::utils::validation::{validate_duration_hours, validate_non_empty_string};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Opaque identifier of a group. The only rule is that it is not empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_non_empty_string("group_id", &value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The last event of a group: when it ends and how long it stays under review afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    end_date: DateTime<Utc>,
    review_duration_in_hours: f64,
}

impl Event {
    pub fn new(end_date: DateTime<Utc>, review_duration_in_hours: f64) -> Result<Self> {
        validate_duration_hours("review_duration_in_hours", review_duration_in_hours)?;
        Ok(Self {
            end_date,
            review_duration_in_hours,
        })
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn review_duration_in_hours(&self) -> f64 {
        self.review_duration_in_hours
    }

    /// `end_date` plus the review window, rounded to the millisecond.
    /// `None` when the sum does not fit in a timestamp.
    pub fn review_deadline(&self) -> Option<DateTime<Utc>> {
        let millis = (self.review_duration_in_hours * MILLIS_PER_HOUR).round() as i64;
        let window = TimeDelta::try_milliseconds(millis)?;
        self.end_date.checked_add_signed(window)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventStatus {
    Done,
    Active,
    InReview,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Active => "active",
            Self::InReview => "inReview",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the CLI prints for one classified group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub group_id: GroupId,
    pub status: EventStatus,
}
