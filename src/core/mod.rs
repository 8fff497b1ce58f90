pub mod classifier;

pub use crate::domain::model::{Event, EventStatus, GroupId, StatusReport};
pub use crate::domain::ports::{Clock, LastEventLoader};
pub use crate::utils::error::Result;
