use crate::core::{Event, GroupId, LastEventLoader, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Events kept in process memory, keyed by group. The "last" event of a group
/// is the one ending latest, regardless of insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventLoader {
    events: Arc<RwLock<HashMap<GroupId, Vec<Event>>>>,
}

impl InMemoryEventLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = (GroupId, Event)>,
    {
        let mut by_group: HashMap<GroupId, Vec<Event>> = HashMap::new();
        for (group_id, event) in events {
            by_group.entry(group_id).or_default().push(event);
        }
        Self {
            events: Arc::new(RwLock::new(by_group)),
        }
    }

    pub async fn insert(&self, group_id: GroupId, event: Event) {
        self.events.write().await.entry(group_id).or_default().push(event);
    }

    pub async fn group_count(&self) -> usize {
        self.events.read().await.len()
    }
}

#[async_trait]
impl LastEventLoader for InMemoryEventLoader {
    async fn load_last_event(&self, group_id: &GroupId) -> Result<Option<Event>> {
        let events = self.events.read().await;
        let last = events
            .get(group_id)
            .and_then(|events| events.iter().max_by_key(|event| event.end_date()))
            .cloned();
        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(hour: u32) -> Event {
        Event::new(Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(), 1.0).unwrap()
    }

    fn group(id: &str) -> GroupId {
        GroupId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_group_has_no_event() {
        let loader = InMemoryEventLoader::new();
        assert_eq!(loader.load_last_event(&group("missing")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_returns_latest_ending_event() {
        let loader = InMemoryEventLoader::from_events([
            (group("g1"), event(10)),
            (group("g1"), event(14)),
            (group("g1"), event(12)),
            (group("g2"), event(8)),
        ]);

        assert_eq!(loader.load_last_event(&group("g1")).await.unwrap(), Some(event(14)));
        assert_eq!(loader.load_last_event(&group("g2")).await.unwrap(), Some(event(8)));
        assert_eq!(loader.group_count().await, 2);
    }

    #[tokio::test]
    async fn test_insert_is_visible_to_clones() {
        let loader = InMemoryEventLoader::new();
        let shared = loader.clone();

        shared.insert(group("g1"), event(9)).await;

        assert_eq!(loader.load_last_event(&group("g1")).await.unwrap(), Some(event(9)));
    }
}
