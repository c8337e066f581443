//! Chart rendering backends
//!
//! The chart manager never talks to a drawing library directly. It goes
//! through the [`Renderer`] capability, which resolves a target
//! identifier to a surface, constructs a chart instance on it and
//! destroys instances that are being replaced.
//!
//! - **memory**: In-process registry of surfaces and live instances
//! - **file**: Writes each live chart definition to a JSON file

mod file;
mod memory;

pub use file::FileRenderer;
pub use memory::{LiveChart, MemoryRenderer};

use serde::Serialize;

use crate::chart::{ChartConfig, ChartKind};
use crate::error::ChartResult;

/// Renderer-assigned identifier of a chart instance
pub type InstanceId = u64;

/// Handle to a live chart instance
///
/// Only the renderer that created a handle can destroy it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartHandle {
    pub id: InstanceId,
    /// Target the instance was drawn on
    pub target_id: String,
    pub kind: ChartKind,
    /// Points in the instance's dataset
    pub dataset_len: usize,
}

impl ChartHandle {
    pub fn new(id: InstanceId, target_id: impl Into<String>, config: &ChartConfig) -> Self {
        Self {
            id,
            target_id: target_id.into(),
            kind: config.kind,
            dataset_len: config.dataset_len(),
        }
    }
}

/// Capability for drawing charts onto named surfaces
pub trait Renderer {
    /// A resolved rendering target
    type Surface;

    /// Resolve a target identifier, `None` when no such surface exists
    fn resolve(&self, target_id: &str) -> Option<Self::Surface>;

    /// Create a chart instance on a surface
    fn construct(&mut self, surface: Self::Surface, config: &ChartConfig)
        -> ChartResult<ChartHandle>;

    /// Release a chart instance
    fn destroy(&mut self, handle: ChartHandle);
}
