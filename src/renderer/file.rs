//! File renderer
//!
//! Each registered target maps to `<output_dir>/<target>.json`. A live
//! chart instance is the serialized chart definition in that file, and
//! destroying the instance removes the file.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{ChartHandle, InstanceId, Renderer};
use crate::chart::ChartConfig;
use crate::error::ChartResult;

/// What is written to a chart file
#[derive(Debug, Serialize)]
struct ChartDocument<'a> {
    target: &'a str,
    instance: InstanceId,
    config: &'a ChartConfig,
}

/// Renderer that writes chart definitions into a directory
#[derive(Debug)]
pub struct FileRenderer {
    output_dir: PathBuf,
    targets: HashSet<String>,
    files: HashMap<InstanceId, PathBuf>,
    next_id: InstanceId,
}

impl FileRenderer {
    /// Create a renderer writing into `output_dir` for the given targets
    pub fn new<I, S>(output_dir: impl Into<PathBuf>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output_dir: output_dir.into(),
            targets: targets.into_iter().map(Into::into).collect(),
            files: HashMap::new(),
            next_id: 0,
        }
    }

    /// Path a target's chart is written to
    pub fn path_for(&self, target_id: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", target_id))
    }

    /// File backing a live instance
    pub fn file_of(&self, id: InstanceId) -> Option<&Path> {
        self.files.get(&id).map(PathBuf::as_path)
    }
}

impl Renderer for FileRenderer {
    /// Target id and the file it renders into
    type Surface = (String, PathBuf);

    fn resolve(&self, target_id: &str) -> Option<Self::Surface> {
        if self.targets.contains(target_id) {
            Some((target_id.to_string(), self.path_for(target_id)))
        } else {
            None
        }
    }

    fn construct(
        &mut self,
        surface: Self::Surface,
        config: &ChartConfig,
    ) -> ChartResult<ChartHandle> {
        let (target_id, path) = surface;
        let id = self.next_id + 1;

        let document = ChartDocument {
            target: &target_id,
            instance: id,
            config,
        };
        let json = serde_json::to_string_pretty(&document)?;

        std::fs::create_dir_all(&self.output_dir)?;
        std::fs::write(&path, json)?;

        self.next_id = id;
        self.files.insert(id, path.clone());
        tracing::debug!("Wrote chart {} for '{}' to {:?}", id, target_id, path);

        Ok(ChartHandle::new(id, target_id, config))
    }

    fn destroy(&mut self, handle: ChartHandle) {
        let Some(path) = self.files.remove(&handle.id) else {
            tracing::warn!("Chart instance {} was already destroyed", handle.id);
            return;
        };

        match std::fs::remove_file(&path) {
            Ok(()) => tracing::debug!("Removed chart {} at {:?}", handle.id, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove chart file {:?}: {}", path, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartDataPayload;
    use tempfile::TempDir;

    fn config() -> ChartConfig {
        ChartConfig::revenue(&ChartDataPayload::new(
            vec!["Jan 2026".into()],
            vec![1500.0],
            vec![40.0],
        ))
    }

    #[test]
    fn test_resolve_registered_targets_only() {
        let dir = TempDir::new().unwrap();
        let renderer = FileRenderer::new(dir.path(), ["revenueChart"]);

        let (target, path) = renderer.resolve("revenueChart").unwrap();
        assert_eq!(target, "revenueChart");
        assert_eq!(path, dir.path().join("revenueChart.json"));
        assert!(renderer.resolve("hoursChart").is_none());
    }

    #[test]
    fn test_construct_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut renderer = FileRenderer::new(dir.path().join("charts"), ["revenueChart"]);
        let surface = renderer.resolve("revenueChart").unwrap();

        let handle = renderer.construct(surface, &config()).unwrap();
        let path = renderer.file_of(handle.id).unwrap().to_path_buf();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["target"], "revenueChart");
        assert_eq!(written["instance"], handle.id);
        assert_eq!(written["config"]["type"], "line");
        assert_eq!(written["config"]["data"]["datasets"][0]["data"][0], 1500.0);
    }

    #[test]
    fn test_destroy_removes_file() {
        let dir = TempDir::new().unwrap();
        let mut renderer = FileRenderer::new(dir.path(), ["revenueChart"]);
        let surface = renderer.resolve("revenueChart").unwrap();

        let handle = renderer.construct(surface, &config()).unwrap();
        let path = renderer.path_for("revenueChart");
        assert!(path.exists());

        let id = handle.id;
        renderer.destroy(handle);
        assert!(!path.exists());
        assert!(renderer.file_of(id).is_none());
    }
}
