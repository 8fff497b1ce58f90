use crate::domain::model::{Event, GroupId};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Source of the most recent event of a group.
///
/// `Ok(None)` means the group has no event. Errors are returned to the
/// caller of the classifier untouched.
#[async_trait]
pub trait LastEventLoader: Send + Sync {
    async fn load_last_event(&self, group_id: &GroupId) -> Result<Option<Event>>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
