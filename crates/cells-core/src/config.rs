//! Render configuration
//!
//! One runtime value object replaces what used to be a family of
//! compile-time program variants differing only in frame size, source
//! count, falloff constant, and color mode.

use crate::error::{CellsError, Result};
use serde::{Deserialize, Serialize};

/// Pixel color policy for the per-frame scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Clamped influence on all three channels
    Monochrome,
    /// Clamped influence on the green channel only
    SingleChannel,
    /// Unclamped influence wrapped into a hue angle
    HueCycle,
    /// Static vertical palette bands, independent of the field
    StripeIdle,
}

impl RenderMode {
    /// Whether this mode reads the influence field at all
    pub fn uses_sources(&self) -> bool {
        !matches!(self, RenderMode::StripeIdle)
    }
}

/// Everything the simulation and renderer need to run one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub width: u32,
    pub height: u32,
    /// Number of moving sources spawned at startup
    pub source_count: usize,
    /// Radius shared by every spawned source
    pub source_radius: f32,
    /// Brightness constant K in the `K * r0 / d` influence term
    pub falloff_scale: u32,
    /// Symmetric boundary margin for the reflective bounce
    pub bounce_margin: i32,
    /// Initial per-axis speed magnitude range, inclusive
    pub speed_min: i32,
    pub speed_max: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::HueCycle,
            width: 550,
            height: 400,
            source_count: 7,
            source_radius: 50.0,
            falloff_scale: 80,
            bounce_margin: 5,
            speed_min: 3,
            speed_max: 7,
        }
    }
}

impl RenderConfig {
    /// Read and parse a config file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse a (possibly partial) TOML document; unset keys keep defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the renderer cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CellsError::InvalidConfig(format!(
                "frame size must be nonzero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.mode.uses_sources() && self.source_count == 0 {
            return Err(CellsError::InvalidConfig(
                "field modes need at least one source; use mode = \"stripe_idle\" \
                 for a sourceless display"
                    .to_string(),
            ));
        }
        if self.source_radius <= 0.0 {
            return Err(CellsError::InvalidConfig(format!(
                "source_radius must be positive, got {}",
                self.source_radius
            )));
        }
        if self.falloff_scale == 0 {
            return Err(CellsError::InvalidConfig(
                "falloff_scale must be positive".to_string(),
            ));
        }
        if self.speed_min < 1 || self.speed_max < self.speed_min {
            return Err(CellsError::InvalidConfig(format!(
                "speed range [{}, {}] must satisfy 1 <= min <= max",
                self.speed_min, self.speed_max
            )));
        }
        if self.bounce_margin < 0 {
            return Err(CellsError::InvalidConfig(format!(
                "bounce_margin must be non-negative, got {}",
                self.bounce_margin
            )));
        }
        Ok(())
    }
}
