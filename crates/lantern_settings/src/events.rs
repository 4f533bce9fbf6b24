//! One-way change notifications

use crate::error::{Result, SettingsError};
use lantern_theme::ColorMode;
use serde::Serialize;
use std::sync::Mutex;

/// Which records a reset touched
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetScope {
    Theme,
    Scene,
    Colors,
    All,
}

/// Something a user did that an analytics collaborator may care about
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PresentationEvent {
    ThemeChanged { theme_id: String },
    ColorModeChanged { mode: ColorMode },
    SceneChanged { scene_id: Option<String> },
    SettingsReset { scope: ResetScope },
}

/// Receiver for [`PresentationEvent`]s
///
/// Errors are logged by the store and otherwise ignored.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &PresentationEvent) -> Result<()>;
}

/// Sink that keeps every event, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PresentationEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PresentationEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &PresentationEvent) -> Result<()> {
        self.events
            .lock()
            .map_err(|_| SettingsError::Sink("recording sink lock poisoned".into()))?
            .push(event.clone());
        Ok(())
    }
}

/// Sink that writes each event to the log
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &PresentationEvent) -> Result<()> {
        tracing::info!(?event, "presentation event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn poisoned_recording_sink_reports_sink_error() {
        let sink = Arc::new(RecordingSink::new());
        let poisoner = Arc::clone(&sink);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.events.lock().unwrap();
            panic!("poison the sink");
        })
        .join();

        let event = PresentationEvent::SettingsReset {
            scope: ResetScope::All,
        };
        assert!(matches!(sink.emit(&event), Err(SettingsError::Sink(_))));
        assert!(sink.events().is_empty());
    }
}
