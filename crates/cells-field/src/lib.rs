//! Cells Field - the simulation half of the renderer
//!
//! Owns the moving influence sources, advances them with reflective
//! boundary bouncing, and computes the per-pixel influence sum the color
//! mapper consumes.

mod field;
mod rand;
mod source;

pub use field::{FieldAccumulator, HotSpotEvent};
pub use rand::FieldRng;
pub use source::{MotionModel, Source};
