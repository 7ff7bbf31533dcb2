//! Cells Core - Foundational types for the cells renderer
//!
//! This crate provides the types the other cells crates depend on:
//! - `RenderConfig`, `RenderMode` - runtime render parameterization
//! - `Rgb8`, `Hsv8` and the fixed-point HSV to RGB conversion
//! - Error types and Result alias

mod color;
mod config;
mod error;

pub use color::{hsv_to_rgb, hue_region, Hsv8, Rgb8};
pub use config::{RenderConfig, RenderMode};
pub use error::{CellsError, Result};
