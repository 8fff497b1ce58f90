use crate::adapters::clock::SystemClock;
use crate::core::{Clock, Event, EventStatus, GroupId, LastEventLoader};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Status of a group's last event at `now`.
///
/// The end of the event belongs to the active period. Once it has passed the
/// event is under review; there is no separate status for an expired review window.
pub fn classify(now: DateTime<Utc>, event: Option<&Event>) -> EventStatus {
    match event {
        None => EventStatus::Done,
        Some(event) if now <= event.end_date() => EventStatus::Active,
        Some(_) => EventStatus::InReview,
    }
}

pub struct EventStatusClassifier<L: LastEventLoader, C: Clock = SystemClock> {
    loader: L,
    clock: C,
}

impl<L: LastEventLoader> EventStatusClassifier<L, SystemClock> {
    pub fn new(loader: L) -> Self {
        Self::with_clock(loader, SystemClock)
    }
}

impl<L: LastEventLoader, C: Clock> EventStatusClassifier<L, C> {
    pub fn with_clock(loader: L, clock: C) -> Self {
        Self { loader, clock }
    }

    pub async fn perform(&self, group_id: &GroupId) -> Result<EventStatus> {
        let event = self.loader.load_last_event(group_id).await?;
        let now = self.clock.now();

        if let Some(event) = &event {
            match event.review_deadline() {
                Some(deadline) if now > deadline => {
                    tracing::trace!(group_id = %group_id, %deadline, "review window has elapsed");
                }
                None => {
                    tracing::trace!(group_id = %group_id, "review deadline is out of range");
                }
                _ => {}
            }
        }

        let status = classify(now, event.as_ref());
        tracing::debug!(group_id = %group_id, %status, has_event = event.is_some(), "classified last event");
        Ok(status)
    }
}
