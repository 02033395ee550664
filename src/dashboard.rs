//! Presentation state: the current selection and the refresh transitions.
//!
//! A [`Dashboard`] owns the user's [`Selection`]. Each [`Transition`]
//! recomputes everything it affects from scratch and returns a [`Render`];
//! nothing fetched is kept between cycles. A fetch error aborts the cycle.

use serde::{Deserialize, Serialize};

use crate::charts;
use crate::config;
use crate::error::{PolygraphError, Result};
use crate::frame::Frame;
use crate::models::ChartOption;
use crate::Polygraph;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub network: String,
    pub min_usd: u64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            network: config::DEFAULT_NETWORK.to_string(),
            min_usd: config::DEFAULT_USD_THRESHOLD,
        }
    }
}

impl Selection {
    /// Check the network against the registry and the threshold against
    /// the selector options.
    pub fn validate(&self, sdk: &Polygraph) -> Result<()> {
        sdk.subgraph(&self.network)?;
        validate_threshold(self.min_usd)
    }
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Rebind both fetchers to another subgraph and redraw everything.
    NetworkChanged(String),
    /// Re-run the swap feed only.
    ThresholdChanged(u64),
    /// Re-run both fetchers with the current selection.
    Tick,
}

impl Transition {
    /// Derive the transition that takes `current` to `requested`.
    ///
    /// A network change wins over a threshold change submitted with it, since
    /// it already refetches the swap feed.
    pub fn between(current: &Selection, requested: &Selection) -> Transition {
        if current.network != requested.network {
            Transition::NetworkChanged(requested.network.clone())
        } else if current.min_usd != requested.min_usd {
            Transition::ThresholdChanged(requested.min_usd)
        } else {
            Transition::Tick
        }
    }
}

// ---------------------------------------------------------------------------
// Render
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charts {
    pub transactions: ChartOption,
    pub active_users: ChartOption,
}

/// Output of one refresh cycle. `charts` is `None` when only the swap table
/// was recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Render {
    pub selection: Selection,
    pub charts: Option<Charts>,
    pub swaps: Frame,
    pub swaps_markdown: String,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub struct Dashboard {
    selection: Selection,
    since: i64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Selection::default())
    }
}

impl Dashboard {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            since: config::INITIAL_TIMESTAMP,
        }
    }

    /// Override the snapshot cutoff (defaults to `INITIAL_TIMESTAMP`).
    pub fn with_cutoff(mut self, since: i64) -> Self {
        self.since = since;
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Apply one transition and recompute its output.
    ///
    /// The selection is updated before fetching, so a failed cycle still
    /// leaves the new selection in place for the next one.
    pub fn apply(&mut self, sdk: &Polygraph, transition: Transition) -> Result<Render> {
        tracing::info!(?transition, "dashboard transition");
        let redraw_charts = match transition {
            Transition::NetworkChanged(network) => {
                sdk.subgraph(&network)?;
                self.selection.network = network;
                true
            }
            Transition::ThresholdChanged(min_usd) => {
                validate_threshold(min_usd)?;
                self.selection.min_usd = min_usd;
                false
            }
            Transition::Tick => true,
        };
        self.render(sdk, redraw_charts)
    }

    /// Submit a full selection; the transition is derived from what changed.
    pub fn submit(&mut self, sdk: &Polygraph, requested: &Selection) -> Result<Render> {
        let transition = Transition::between(&self.selection, requested);
        self.apply(sdk, transition)
    }

    fn render(&self, sdk: &Polygraph, redraw_charts: bool) -> Result<Render> {
        let subgraph = sdk.subgraph(&self.selection.network)?;

        let charts = if redraw_charts {
            let frame = sdk.metrics(subgraph).daily_snapshots(self.since)?;
            Some(Charts {
                transactions: charts::transactions_chart(&frame)?,
                active_users: charts::active_users_chart(&frame)?,
            })
        } else {
            None
        };

        let swaps = sdk.swaps(subgraph).latest(self.selection.min_usd)?;
        let swaps_markdown = swaps.to_markdown();

        Ok(Render {
            selection: self.selection.clone(),
            charts,
            swaps,
            swaps_markdown,
        })
    }
}

pub fn validate_threshold(min_usd: u64) -> Result<()> {
    if config::USD_THRESHOLDS.contains(&min_usd) {
        Ok(())
    } else {
        Err(PolygraphError::InvalidArgument(format!(
            "USD threshold must be one of {:?}, got {}",
            config::USD_THRESHOLDS,
            min_usd
        )))
    }
}
