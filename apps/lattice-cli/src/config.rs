use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use torus_lattice::{Dimension, Point};

/// World settings read from a JSON file, e.g.
/// `{ "width": 40, "height": 30, "origin": { "x": 5, "y": 5 } }`.
///
/// Missing fields fall back to [`WorldConfig::default`]. The extent is kept
/// raw here and validated by [`WorldConfig::dimension`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: i64,
    pub height: i64,
    pub origin: Point,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            origin: Point::ORIGIN,
        }
    }
}

impl WorldConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening world file {}", path.display()))?;
        let config: Self = serde_json::from_reader(file)
            .with_context(|| format!("parsing world file {}", path.display()))?;
        tracing::debug!(?config, path = %path.display(), "loaded world file");
        Ok(config)
    }

    /// Command-line flags win over the file.
    pub fn with_overrides(mut self, width: Option<i64>, height: Option<i64>) -> Self {
        if let Some(w) = width {
            self.width = w;
        }
        if let Some(h) = height {
            self.height = h;
        }
        self
    }

    pub fn dimension(&self) -> torus_lattice::Result<Dimension> {
        Dimension::new(self.width, self.height)
    }
}
