// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::{FONT_SIZE, NODE_SIZE};
use crate::model::{GraphLimits, MAX_CONTAINER_LINKS};

/// Largest accepted `node_size` (px).
pub const MAX_NODE_SIZE: f64 = 1000.0;

/// Largest accepted `font_size` (pt).
pub const MAX_FONT_SIZE: f64 = 200.0;

/// Diagram geometry and the per-node link capacity.
///
/// Loaded from an optional JSON file; missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub max_container_links: usize,
    pub node_size: f64,
    pub font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_container_links: MAX_CONTAINER_LINKS,
            node_size: NODE_SIZE,
            font_size: FONT_SIZE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid layout config")]
    Json(#[from] serde_json::Error),
    #[error("max_container_links must be at least 1")]
    ZeroCapacity,
    #[error("node_size must be a positive number, got {value}")]
    InvalidNodeSize { value: f64 },
    #[error("font_size must be a positive number, got {value}")]
    InvalidFontSize { value: f64 },
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge { field: &'static str, value: f64, max: f64 },
}

impl LayoutConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "loaded layout config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_container_links == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(self.node_size.is_finite() && self.node_size > 0.0) {
            return Err(ConfigError::InvalidNodeSize { value: self.node_size });
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConfigError::InvalidFontSize { value: self.font_size });
        }
        if self.node_size > MAX_NODE_SIZE {
            return Err(ConfigError::TooLarge {
                field: "node_size",
                value: self.node_size,
                max: MAX_NODE_SIZE,
            });
        }
        if self.font_size > MAX_FONT_SIZE {
            return Err(ConfigError::TooLarge {
                field: "font_size",
                value: self.font_size,
                max: MAX_FONT_SIZE,
            });
        }
        Ok(())
    }

    /// The matching construction-time limits for a graph laid out with this config.
    pub fn graph_limits(&self) -> GraphLimits {
        GraphLimits { max_container_links: self.max_container_links }
    }

    /// Distance between two neighbouring link slots on a node edge.
    pub fn link_spacing(&self) -> f64 {
        2.0 * self.node_size / self.max_container_links as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, LayoutConfig};

    #[test]
    fn defaults_match_catalog_geometry() {
        let config = LayoutConfig::default();
        assert_eq!(config.max_container_links, 10);
        assert_eq!(config.node_size, 50.0);
        assert_eq!(config.font_size, 10.0);
        assert_eq!(config.link_spacing(), 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            LayoutConfig::from_json_str(r#"{ "max_container_links": 4 }"#).expect("config");
        assert_eq!(config.max_container_links, 4);
        assert_eq!(config.node_size, 50.0);
        assert_eq!(config.graph_limits().max_container_links, 4);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            LayoutConfig::from_json_str(r#"{ "node": 3 }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            LayoutConfig::from_json_str(r#"{ "max_container_links": 0 }"#),
            Err(ConfigError::ZeroCapacity)
        ));
        assert!(matches!(
            LayoutConfig::from_json_str(r#"{ "node_size": -1.0 }"#),
            Err(ConfigError::InvalidNodeSize { .. })
        ));
        assert!(matches!(
            LayoutConfig::from_json_str(r#"{ "font_size": 0.0 }"#),
            Err(ConfigError::InvalidFontSize { .. })
        ));
    }

    #[test]
    fn rejects_oversized_geometry() {
        assert!(matches!(
            LayoutConfig::from_json_str(r#"{ "node_size": 1e9 }"#),
            Err(ConfigError::TooLarge { field: "node_size", .. })
        ));
        assert!(matches!(
            LayoutConfig::from_json_str(r#"{ "font_size": 500 }"#),
            Err(ConfigError::TooLarge { field: "font_size", .. })
        ));
        let largest = LayoutConfig::from_json_str(r#"{ "node_size": 1000, "font_size": 200 }"#)
            .expect("config at the limits");
        assert_eq!(largest.node_size, super::MAX_NODE_SIZE);
    }
}
