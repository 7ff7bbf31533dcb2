//! Cells - animated metaball field viewer
//!
//! A set of moving circular sources sweeps a distance-weighted influence
//! field across the frame; each pixel's accumulated influence is mapped to
//! a color by the configured render mode and streamed to the window.
//!
//! Usage:
//!   cells run [--config cells.toml] [--mode hue-cycle] [--seed 42]
//!   cells snapshot --output frame.png [--frames 120]

mod app;
mod clock;
mod display;
mod snapshot;

use anyhow::{bail, Context, Result};
use cells_core::{RenderConfig, RenderMode};
use clap::{Args, Parser, Subcommand};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "cells")]
#[command(about = "Animated metaball field renderer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a window and animate the field
    Run {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Render frames headlessly and write one PNG
    Snapshot {
        /// Output image path
        #[arg(short, long, default_value = "frame.png")]
        output: String,

        /// Number of motion steps before the captured frame
        #[arg(long, default_value_t = 1)]
        frames: u32,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

/// Configuration file plus per-flag overrides, applied in that order
#[derive(Args)]
struct ConfigOverrides {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<String>,

    /// Render mode (monochrome, single-channel, hue-cycle, stripe-idle)
    #[arg(long)]
    mode: Option<String>,

    /// Frame width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Frame height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Number of moving sources
    #[arg(long)]
    sources: Option<usize>,

    /// Falloff scale constant (brightness)
    #[arg(long)]
    falloff: Option<u32>,

    /// PRNG seed; wall clock when absent
    #[arg(long)]
    seed: Option<u32>,
}

impl ConfigOverrides {
    fn resolve(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)
                .with_context(|| format!("Failed to load config file: {}", path))?,
            None => RenderConfig::default(),
        };

        if let Some(mode) = &self.mode {
            config.mode = parse_mode(mode)?;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(sources) = self.sources {
            config.source_count = sources;
        }
        if let Some(falloff) = self.falloff {
            config.falloff_scale = falloff;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(1)
        })
    }
}

fn parse_mode(s: &str) -> Result<RenderMode> {
    match s {
        "monochrome" => Ok(RenderMode::Monochrome),
        "single-channel" | "single_channel" => Ok(RenderMode::SingleChannel),
        "hue-cycle" | "hue_cycle" => Ok(RenderMode::HueCycle),
        "stripe-idle" | "stripe_idle" => Ok(RenderMode::StripeIdle),
        other => bail!(
            "Unknown mode: {} (expected monochrome, single-channel, hue-cycle, or stripe-idle)",
            other
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { overrides } => {
            let config = overrides.resolve()?;
            app::run(config, overrides.seed())
        }
        Commands::Snapshot {
            output,
            frames,
            overrides,
        } => {
            let config = overrides.resolve()?;
            snapshot::run(&config, overrides.seed(), frames, &output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_strings_parse() {
        assert_eq!(parse_mode("monochrome").unwrap(), RenderMode::Monochrome);
        assert_eq!(
            parse_mode("single-channel").unwrap(),
            RenderMode::SingleChannel
        );
        assert_eq!(parse_mode("hue_cycle").unwrap(), RenderMode::HueCycle);
        assert_eq!(parse_mode("stripe-idle").unwrap(), RenderMode::StripeIdle);
        assert!(parse_mode("plasma").is_err());
    }

    #[test]
    fn overrides_apply_over_defaults() {
        let overrides = ConfigOverrides {
            config: None,
            mode: Some("monochrome".to_string()),
            width: Some(320),
            height: None,
            sources: Some(3),
            falloff: None,
            seed: Some(7),
        };
        let config = overrides.resolve().unwrap();
        assert_eq!(config.mode, RenderMode::Monochrome);
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 400);
        assert_eq!(config.source_count, 3);
        assert_eq!(overrides.seed(), 7);
    }

    #[test]
    fn zero_source_override_is_rejected() {
        let overrides = ConfigOverrides {
            config: None,
            mode: None,
            width: None,
            height: None,
            sources: Some(0),
            falloff: None,
            seed: None,
        };
        assert!(overrides.resolve().is_err());
    }
}
