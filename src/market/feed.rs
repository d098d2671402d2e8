//! Background market-data feed.
//!
//! A single polling task refreshes the statistics on a fixed interval and on
//! explicit request. Requests arriving while a fetch is in flight coalesce
//! into it, a failed fetch starts a short cool-down before the next attempt,
//! and the newest response always wins on the UI side.

use std::time::Duration;

use chrono::{DateTime, Utc};
use crossbeam::channel::{unbounded, Receiver};

use super::client::MarketDataClient;
use super::types::MarketStats;

/// Fixed refresh period.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Cool-down after a failed fetch.
pub const FAILURE_COOLDOWN: Duration = Duration::from_secs(30);

/// Feed event delivered to the UI thread.
#[derive(Debug, Clone)]
pub enum MarketEvent {
    /// A fetch started.
    Loading,
    /// Fresh statistics arrived.
    Updated {
        stats: MarketStats,
        at: DateTime<Utc>,
    },
    /// The fetch failed; previously delivered data stays in effect.
    Failed { message: String },
}

/// Connectivity status surfaced to the user.
#[derive(Debug, Clone, Default)]
pub struct ApiStatus {
    pub connected: bool,
    pub loading: bool,
    pub last_update: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl ApiStatus {
    /// Fold a feed event into the status.
    pub fn apply(&mut self, event: &MarketEvent) {
        match event {
            MarketEvent::Loading => {
                self.loading = true;
                self.error = None;
            }
            MarketEvent::Updated { at, .. } => {
                self.loading = false;
                self.connected = true;
                self.last_update = Some(*at);
                self.error = None;
            }
            MarketEvent::Failed { message } => {
                self.loading = false;
                self.connected = false;
                self.last_update = None;
                self.error = Some(message.clone());
            }
        }
    }
}

/// Handle owning the runtime and the polling task.
///
/// Dropping the handle closes the refresh channel, which ends the task.
pub struct MarketFeed {
    // Dropped before the runtime, so the task sees the closed channel and
    // ends before shutdown.
    refresh_tx: tokio::sync::mpsc::UnboundedSender<()>,
    events: Receiver<MarketEvent>,
    _runtime: tokio::runtime::Runtime,
}

impl MarketFeed {
    /// Spawn the feed against the default endpoint.
    pub fn spawn() -> anyhow::Result<Self> {
        Self::with_client(MarketDataClient::new())
    }

    /// Spawn the feed with an explicit client.
    pub fn with_client(client: MarketDataClient) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let (event_tx, event_rx) = unbounded();
        let (refresh_tx, mut refresh_rx) = tokio::sync::mpsc::unbounded_channel::<()>();

        runtime.spawn(async move {
            let mut ticker = tokio::time::interval(REFRESH_INTERVAL);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    request = refresh_rx.recv() => {
                        if request.is_none() {
                            break;
                        }
                    }
                }

                let _ = event_tx.send(MarketEvent::Loading);
                match client.fetch_stats().await {
                    Ok(stats) => {
                        tracing::info!(
                            properties = stats.real_estate_count,
                            "market statistics updated"
                        );
                        let _ = event_tx.send(MarketEvent::Updated {
                            stats,
                            at: Utc::now(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!("market data fetch failed: {e}");
                        let _ = event_tx.send(MarketEvent::Failed {
                            message: e.to_string(),
                        });
                        tokio::time::sleep(FAILURE_COOLDOWN).await;
                    }
                }

                // Refresh requests that piled up during the fetch (or the
                // cool-down) collapse into the run that just completed.
                while refresh_rx.try_recv().is_ok() {}
            }

            tracing::debug!("market feed task ended");
        });

        Ok(Self {
            refresh_tx,
            events: event_rx,
            _runtime: runtime,
        })
    }

    /// Receiver of feed events for the UI thread.
    pub fn events(&self) -> Receiver<MarketEvent> {
        self.events.clone()
    }

    /// Ask for an immediate refresh.
    pub fn request_refresh(&self) {
        let _ = self.refresh_tx.send(());
    }
}
