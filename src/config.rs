use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, Result};

/// Default upper bound on the number of vertices a graph may hold.
pub const DEFAULT_MAX_VERTICES: usize = 4096;

/// Default number of slots in the breadth-first frontier queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 4096;

/// Default maximum tag length, in characters.
pub const DEFAULT_MAX_TAG_LEN: usize = 63;

/// Capacity limits applied when building and searching a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Maximum number of vertices; inserting past it fails with a capacity error.
    pub max_vertices: usize,
    /// Size of the bounded queue allocated for each breadth-first search.
    /// Must be at least `max_vertices`, since every vertex may be queued once.
    pub queue_capacity: usize,
    /// Longest tag accepted by vertex descriptors.
    pub max_tag_len: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            max_tag_len: DEFAULT_MAX_TAG_LEN,
        }
    }
}

impl GraphConfig {
    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_vertices == 0 {
            return Err(GraphError::Config {
                message: "max_vertices must be greater than zero".to_string(),
            });
        }
        if self.queue_capacity == 0 {
            return Err(GraphError::Config {
                message: "queue_capacity must be greater than zero".to_string(),
            });
        }
        if self.queue_capacity < self.max_vertices {
            return Err(GraphError::Config {
                message: format!(
                    "queue_capacity ({}) must be at least max_vertices ({})",
                    self.queue_capacity, self.max_vertices
                ),
            });
        }
        if self.max_tag_len == 0 {
            return Err(GraphError::Config {
                message: "max_tag_len must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Loads the configuration from a JSON file.
///
/// A missing file yields the defaults. Fields absent from the file keep
/// their default values.
pub fn load_config(path: &Path) -> Result<GraphConfig> {
    if !path.exists() {
        return Ok(GraphConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| GraphError::Config {
        message: format!("failed to read config file '{}': {}", path.display(), e),
    })?;

    let config: GraphConfig = serde_json::from_str(&contents).map_err(|e| GraphError::Config {
        message: format!("failed to parse config file '{}': {}", path.display(), e),
    })?;

    config.validate()?;
    Ok(config)
}

/// Saves the configuration as JSON using an atomic write.
pub fn save_config(path: &Path, config: &GraphConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GraphError::Config {
                message: format!(
                    "failed to create config directory '{}': {}",
                    parent.display(),
                    e
                ),
            })?;
        }
    }

    let tmp_path = path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| GraphError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| GraphError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| GraphError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            path.display(),
            e
        ),
    })?;

    Ok(())
}
