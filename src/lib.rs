pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::clock::{FixedClock, SystemClock};
pub use crate::adapters::memory::InMemoryEventLoader;
pub use crate::app::check::check_last_event_status;
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::classifier::{classify, EventStatusClassifier};
pub use crate::core::{Clock, Event, EventStatus, GroupId, LastEventLoader, StatusReport};
pub use crate::utils::error::{EventStatusError, Result};
