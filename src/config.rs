// src/config.rs

//! Configuration structures for tile sets.
//!
//! A `Config` is deserialized from JSON and names the ASCII-art patterns a
//! host wants built into surfaces, plus a background colour to clear its
//! target with. Every field has a default, so a partial document is valid.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::pattern::Pattern;
use crate::surface::Surface;

use anyhow::{Context, Result};
use log::debug;

/// The root configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colour a host should clear its target surface with.
    pub background: Color,
    /// Tile definitions, looked up by name.
    pub patterns: Vec<Pattern>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            background: Color::Packed(0),
            patterns: Vec::new(),
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(text).context("failed to parse surface configuration")?;
        debug!("Loaded configuration with {} patterns", config.patterns.len());
        Ok(config)
    }

    /// Serializes this configuration back to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize surface configuration")
    }

    /// Returns the pattern called `name`, if any.
    pub fn pattern(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Builds every pattern into a surface, in declaration order.
    pub fn build_patterns(&self) -> Result<Vec<(String, Surface)>> {
        self.patterns
            .iter()
            .map(|pattern| {
                let surface = pattern
                    .build()
                    .with_context(|| format!("failed to build pattern '{}'", pattern.name))?;
                Ok((pattern.name.clone(), surface))
            })
            .collect()
    }

    /// Allocates a `width` x `height` surface cleared to the background colour.
    pub fn background_surface(&self, width: i32, height: i32) -> Result<Surface> {
        let mut surface = Surface::new(width, height).context("failed to allocate background")?;
        surface.fill(self.background.to_packed());
        Ok(surface)
    }
}
