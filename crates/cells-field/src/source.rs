//! Moving influence sources and the reflective-bounce motion model

use crate::rand::FieldRng;
use cells_core::RenderConfig;

/// A moving circular influence emitter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Source {
    pub pos: (i32, i32),
    pub vel: (i32, i32),
    /// Fixed for the lifetime of the source
    pub radius: f32,
}

/// Owns the source set and advances it once per simulation step.
///
/// The set is ordered: the first source's radius doubles as the global
/// scale radius in the influence formula, so reordering changes the image.
pub struct MotionModel {
    sources: Vec<Source>,
    width: u32,
    height: u32,
    margin: i32,
}

impl MotionModel {
    /// Spawn inset from the frame edges, shrunk for tiny frames
    const SPAWN_INSET: i32 = 50;

    /// Randomize initial positions and velocities per the config.
    ///
    /// Velocities point right and up (negative y) like the reference
    /// layout; bounces scatter them within a few frames.
    pub fn spawn(config: &RenderConfig, rng: &mut FieldRng) -> Self {
        let x_inset = Self::SPAWN_INSET.min(config.width as i32 / 2);
        let y_inset = Self::SPAWN_INSET.min(config.height as i32 / 2);

        let mut sources = Vec::with_capacity(config.source_count);
        for _ in 0..config.source_count {
            let x = rng.range_i32(x_inset, (config.width as i32 - x_inset).max(x_inset));
            let y = rng.range_i32(y_inset, (config.height as i32 - y_inset).max(y_inset));
            let vx = rng.range_i32(config.speed_min, config.speed_max);
            let vy = -rng.range_i32(config.speed_min, config.speed_max);
            sources.push(Source {
                pos: (x, y),
                vel: (vx, vy),
                radius: config.source_radius,
            });
        }

        Self {
            sources,
            width: config.width,
            height: config.height,
            margin: config.bounce_margin,
        }
    }

    /// Build a model from explicit sources. Used when the caller wants
    /// full control over placement.
    pub fn from_sources(sources: Vec<Source>, width: u32, height: u32, margin: i32) -> Self {
        Self {
            sources,
            width,
            height,
            margin,
        }
    }

    /// Snapshot of the current source set for a render pass
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Integrate one step: position += velocity, then reflect off the
    /// frame boundary. Each axis negates at most once per call, even when
    /// both of its boundary checks fire at the same time.
    pub fn advance(&mut self) {
        let margin = self.margin as f32;
        let width = self.width as f32;
        let height = self.height as f32;

        for s in &mut self.sources {
            s.pos.0 += s.vel.0;
            s.pos.1 += s.vel.1;

            let x = s.pos.0 as f32;
            let y = s.pos.1 as f32;
            if x + s.radius - margin > width || x - s.radius + margin < 0.0 {
                s.vel.0 = -s.vel.0;
            }
            if y + s.radius - margin > height || y - s.radius + margin < 0.0 {
                s.vel.1 = -s.vel.1;
            }
        }
    }
}
