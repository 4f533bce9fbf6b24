//! Lantern Settings
//!
//! Lifecycle and persistence for a user's presentation settings.
//!
//! # Example
//!
//! ```rust
//! use lantern_settings::{MemoryBackend, SettingsKey, SettingsStore, StoreState};
//! use serde_json::json;
//!
//! let mut store = SettingsStore::new(MemoryBackend::new(), SettingsKey::new("local"));
//! assert_eq!(store.load(), StoreState::Ready);
//!
//! let patch = lantern_settings::patch_of([
//!     ("colorMode", json!("dark")),
//!     ("backgroundStyle", json!("lava-lamp")),
//! ]);
//! let outcome = store.update_theme(&patch);
//! assert_eq!(outcome.rejected_fields().collect::<Vec<_>>(), ["backgroundStyle"]);
//! ```
//!
//! # Modules
//!
//! - [`backend`]: the persistence collaborator and its memory and file implementations
//! - [`patch`]: field-by-field validation of partial updates
//! - [`store`]: the [`SettingsStore`] state machine
//! - [`events`]: optional analytics notifications
//! - [`refresh`]: periodic weather tone refresh on tokio

pub mod backend;
pub mod error;
pub mod events;
pub mod patch;
pub mod refresh;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, SettingsBackend, SettingsDomain, SettingsKey};
pub use error::{Result, SettingsError, StorageError};
pub use events::{EventSink, PresentationEvent, RecordingSink, ResetScope, TracingSink};
pub use patch::{FieldRejection, UpdateOutcome};
pub use refresh::{Clock, ToneRefresher, WeatherSource};
pub use store::{patch_of, SettingsStore, StoreState};
