//! Periodic weather tone refresh
//!
//! [`ToneRefresher`] asks a [`WeatherSource`] for conditions on a fixed
//! interval and publishes the mapped [`SeasonalContext`] on a watch channel.
//! A failing source is not an error for subscribers: they receive the
//! no-weather context instead.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use lantern_ambient::{tone_for, SeasonalContext, ToneConfig, WeatherSignal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Supplies current weather
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// `Ok(None)` when the source has no reading for now
    async fn current(&self) -> Result<Option<WeatherSignal>>;
}

/// Local wall-clock time, injectable for tests
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

fn local_clock() -> Clock {
    Arc::new(|| Local::now().naive_local())
}

/// Background task that keeps a [`SeasonalContext`] current
///
/// Dropping the refresher stops the task.
pub struct ToneRefresher {
    receiver: watch::Receiver<SeasonalContext>,
    task: Option<JoinHandle<()>>,
}

impl ToneRefresher {
    /// Start refreshing on the current tokio runtime using the local clock
    pub fn spawn<S>(source: S, config: ToneConfig) -> Self
    where
        S: WeatherSource + 'static,
    {
        Self::spawn_with_clock(source, config, local_clock())
    }

    pub fn spawn_with_clock<S>(source: S, config: ToneConfig, clock: Clock) -> Self
    where
        S: WeatherSource + 'static,
    {
        let initial = tone_for(None, clock(), &config);
        let (sender, receiver) = watch::channel(initial);
        let period = Duration::from_secs(config.refresh_interval_secs.max(1));

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            tracing::debug!(interval_secs = period.as_secs(), "tone refresh started");
            loop {
                interval.tick().await;
                let weather = match source.current().await {
                    Ok(weather) => weather,
                    Err(err) => {
                        tracing::warn!(error = %err, "weather unavailable, using neutral tone");
                        None
                    }
                };
                let context = tone_for(weather.as_ref(), clock(), &config);
                tracing::debug!(
                    tone = ?context.tone,
                    sunset_alert = context.sunset_alert,
                    "tone refreshed"
                );
                if sender.send(context).is_err() {
                    tracing::debug!("no tone subscribers left, stopping refresh");
                    break;
                }
            }
        });

        Self {
            receiver,
            task: Some(task),
        }
    }

    /// Latest published context
    pub fn current(&self) -> SeasonalContext {
        self.receiver.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SeasonalContext> {
        self.receiver.clone()
    }

    /// Stop the refresh timer and wait for the task to finish
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            tracing::debug!("tone refresh stopped");
        }
    }
}

impl Drop for ToneRefresher {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
