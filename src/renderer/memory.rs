//! In-memory renderer
//!
//! Keeps registered surfaces and live chart instances in maps. Used for
//! dry runs and as the fake renderer in tests.

use std::collections::{HashMap, HashSet};

use super::{ChartHandle, InstanceId, Renderer};
use crate::chart::ChartConfig;
use crate::error::ChartResult;

/// A chart instance held by the memory renderer
#[derive(Debug, Clone)]
pub struct LiveChart {
    pub target_id: String,
    pub config: ChartConfig,
}

/// Renderer that keeps everything in process memory
#[derive(Debug, Default)]
pub struct MemoryRenderer {
    surfaces: HashSet<String>,
    live: HashMap<InstanceId, LiveChart>,
    destroyed: Vec<InstanceId>,
    constructed: usize,
    next_id: InstanceId,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given surfaces already registered
    pub fn with_surfaces<I, S>(surfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut renderer = Self::new();
        for surface in surfaces {
            renderer.add_surface(surface);
        }
        renderer
    }

    /// Register a surface
    pub fn add_surface(&mut self, target_id: impl Into<String>) {
        self.surfaces.insert(target_id.into());
    }

    /// Unregister a surface; instances already drawn on it stay live
    pub fn remove_surface(&mut self, target_id: &str) -> bool {
        self.surfaces.remove(target_id)
    }

    /// Number of instances not yet destroyed
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, id: InstanceId) -> bool {
        self.live.contains_key(&id)
    }

    /// Live instance by id
    pub fn instance(&self, id: InstanceId) -> Option<&LiveChart> {
        self.live.get(&id)
    }

    /// Ids of destroyed instances, in destroy order
    pub fn destroyed(&self) -> &[InstanceId] {
        &self.destroyed
    }

    /// Total instances ever constructed
    pub fn constructed_count(&self) -> usize {
        self.constructed
    }
}

impl Renderer for MemoryRenderer {
    type Surface = String;

    fn resolve(&self, target_id: &str) -> Option<Self::Surface> {
        self.surfaces.get(target_id).cloned()
    }

    fn construct(
        &mut self,
        surface: Self::Surface,
        config: &ChartConfig,
    ) -> ChartResult<ChartHandle> {
        self.next_id += 1;
        let id = self.next_id;
        let handle = ChartHandle::new(id, surface.clone(), config);

        self.live.insert(
            id,
            LiveChart {
                target_id: surface,
                config: config.clone(),
            },
        );
        self.constructed += 1;

        Ok(handle)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if self.live.remove(&handle.id).is_some() {
            self.destroyed.push(handle.id);
        } else {
            tracing::warn!("Chart instance {} was already destroyed", handle.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartDataPayload, ChartKind};

    fn config() -> ChartConfig {
        ChartConfig::hours(&ChartDataPayload::new(
            vec!["a".into(), "b".into()],
            vec![1.0, 2.0],
            vec![3.0, 4.0],
        ))
    }

    #[test]
    fn test_resolve() {
        let mut renderer = MemoryRenderer::with_surfaces(["hoursChart"]);
        assert_eq!(renderer.resolve("hoursChart"), Some("hoursChart".to_string()));
        assert_eq!(renderer.resolve("missing"), None);

        assert!(renderer.remove_surface("hoursChart"));
        assert_eq!(renderer.resolve("hoursChart"), None);
    }

    #[test]
    fn test_construct_destroy() {
        let mut renderer = MemoryRenderer::with_surfaces(["hoursChart"]);
        let surface = renderer.resolve("hoursChart").unwrap();

        let handle = renderer.construct(surface, &config()).unwrap();
        assert_eq!(handle.kind, ChartKind::Bar);
        assert_eq!(handle.dataset_len, 2);
        assert!(renderer.is_live(handle.id));
        assert_eq!(renderer.live_count(), 1);

        let id = handle.id;
        renderer.destroy(handle);
        assert!(!renderer.is_live(id));
        assert_eq!(renderer.destroyed(), &[id]);
        assert_eq!(renderer.constructed_count(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut renderer = MemoryRenderer::with_surfaces(["hoursChart"]);
        let a = renderer.construct("hoursChart".into(), &config()).unwrap();
        let b = renderer.construct("hoursChart".into(), &config()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
