//! Chart Manager
//!
//! Owns the two dashboard chart slots and runs the fetch-then-render
//! cycle.
//!
//! # Lifecycle
//!
//! ```text
//! slot: None ──initialize──▶ Some(a) ──initialize──▶ destroy(a), Some(b) ──▶ ...
//! ```
//!
//! A slot is only touched after its target resolves. Failures never
//! propagate: each one becomes exactly one report on the diagnostic sink.
//!
//! `update_charts` borrows the manager mutably for the whole cycle, so two
//! updates cannot interleave on the same manager. Share a manager between
//! tasks behind a `tokio::sync::Mutex` to serialize them.

use crate::chart::{ChartConfig, ChartDataPayload, ChartSlot, Period};
use crate::client::ChartDataClient;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::ChartError;
use crate::renderer::{ChartHandle, Renderer};

/// Default rendering target per slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTargets {
    pub revenue: String,
    pub hours: String,
}

impl ChartTargets {
    pub fn get(&self, slot: ChartSlot) -> &str {
        match slot {
            ChartSlot::Revenue => &self.revenue,
            ChartSlot::Hours => &self.hours,
        }
    }
}

impl Default for ChartTargets {
    fn default() -> Self {
        Self {
            revenue: ChartSlot::Revenue.default_target().to_string(),
            hours: ChartSlot::Hours.default_target().to_string(),
        }
    }
}

/// Holds at most one live chart per slot
pub struct ChartManager<R: Renderer, S: DiagnosticSink = TracingSink> {
    renderer: R,
    client: ChartDataClient,
    sink: S,
    targets: ChartTargets,
    revenue: Option<ChartHandle>,
    hours: Option<ChartHandle>,
}

impl<R: Renderer> ChartManager<R, TracingSink> {
    /// Create a manager that reports diagnostics through `tracing`
    pub fn new(renderer: R, client: ChartDataClient) -> Self {
        Self::with_sink(renderer, client, TracingSink)
    }
}

impl<R: Renderer, S: DiagnosticSink> ChartManager<R, S> {
    /// Create a manager with a custom diagnostic sink
    pub fn with_sink(renderer: R, client: ChartDataClient, sink: S) -> Self {
        Self {
            renderer,
            client,
            sink,
            targets: ChartTargets::default(),
            revenue: None,
            hours: None,
        }
    }

    /// Builder method: override the default targets
    pub fn targets(mut self, targets: ChartTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Current handle of a slot
    pub fn handle(&self, slot: ChartSlot) -> Option<&ChartHandle> {
        match slot {
            ChartSlot::Revenue => self.revenue.as_ref(),
            ChartSlot::Hours => self.hours.as_ref(),
        }
    }

    pub fn revenue_chart(&self) -> Option<&ChartHandle> {
        self.revenue.as_ref()
    }

    pub fn hours_chart(&self) -> Option<&ChartHandle> {
        self.hours.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn slot_mut(&mut self, slot: ChartSlot) -> &mut Option<ChartHandle> {
        match slot {
            ChartSlot::Revenue => &mut self.revenue,
            ChartSlot::Hours => &mut self.hours,
        }
    }

    /// Initialize the revenue chart, on `revenueChart` unless `target` is given
    pub fn init_revenue_chart(
        &mut self,
        data: &ChartDataPayload,
        target: Option<&str>,
    ) -> Option<ChartHandle> {
        self.initialize(ChartSlot::Revenue, data, target)
    }

    /// Initialize the hours chart, on `hoursChart` unless `target` is given
    pub fn init_hours_chart(
        &mut self,
        data: &ChartDataPayload,
        target: Option<&str>,
    ) -> Option<ChartHandle> {
        self.initialize(ChartSlot::Hours, data, target)
    }

    /// Draw a slot's chart from `data`, replacing the slot's previous instance
    ///
    /// Returns `None` and leaves the slot untouched when the target does not
    /// resolve.
    pub fn initialize(
        &mut self,
        slot: ChartSlot,
        data: &ChartDataPayload,
        target: Option<&str>,
    ) -> Option<ChartHandle> {
        let target = target.unwrap_or_else(|| self.targets.get(slot)).to_string();

        let Some(surface) = self.renderer.resolve(&target) else {
            self.sink.report(
                &format!("Failed to initialize {} chart", slot),
                &ChartError::TargetNotFound(target),
            );
            return None;
        };

        if !data.is_aligned() {
            tracing::warn!(
                "Chart data series lengths differ: {} labels, {} revenue, {} hours",
                data.labels.len(),
                data.revenue.len(),
                data.hours.len()
            );
        }

        if let Some(previous) = self.slot_mut(slot).take() {
            tracing::debug!("Destroying {} chart instance {}", slot, previous.id);
            self.renderer.destroy(previous);
        }

        let config = ChartConfig::for_slot(slot, data);
        match self.renderer.construct(surface, &config) {
            Ok(handle) => {
                tracing::debug!(
                    "Created {} chart instance {} on '{}' ({} points)",
                    slot,
                    handle.id,
                    handle.target_id,
                    handle.dataset_len
                );
                *self.slot_mut(slot) = Some(handle.clone());
                Some(handle)
            }
            Err(e) => {
                self.sink
                    .report(&format!("Failed to initialize {} chart", slot), &e);
                None
            }
        }
    }

    /// Fetch data for `period` and redraw both charts on their default targets
    ///
    /// `base_url` overrides the configured endpoint path. On any fetch or
    /// decode failure neither chart changes and one diagnostic is reported.
    pub async fn update_charts(&mut self, period: Period, base_url: Option<&str>) {
        match self.client.fetch(period, base_url).await {
            Ok(payload) => {
                for slot in ChartSlot::all() {
                    self.initialize(*slot, &payload, None);
                }
                tracing::info!("Updated charts for {} period ({} points)", period, payload.len());
            }
            Err(e) => {
                self.sink.report("Error fetching chart data", &e);
            }
        }
    }
}
