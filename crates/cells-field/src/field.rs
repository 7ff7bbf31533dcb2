//! Per-pixel influence accumulation over the source set

use crate::source::Source;

/// Fired when a pixel lands exactly on a source center and the hot-spot
/// override saturates the accumulator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HotSpotEvent {
    pub x: i32,
    pub y: i32,
    pub source_index: usize,
}

/// Accumulates distance-weighted influence for one pixel.
///
/// The sum is returned raw, not clamped: whether values past 255 saturate
/// or wrap around the hue circle is the color mapper's policy.
#[derive(Clone, Copy, Debug)]
pub struct FieldAccumulator {
    /// Brightness constant K in the `K * r0 / d` term
    pub falloff_scale: u32,
}

impl FieldAccumulator {
    pub fn new(falloff_scale: u32) -> Self {
        Self { falloff_scale }
    }

    /// Raw influence sum for one pixel. Deterministic for fixed inputs.
    pub fn influence(&self, x: i32, y: i32, sources: &[Source]) -> u32 {
        self.influence_observed(x, y, sources, &mut |_| {})
    }

    /// Same as [`influence`](Self::influence), reporting each hot-spot
    /// override to the caller's hook.
    pub fn influence_observed(
        &self,
        x: i32,
        y: i32,
        sources: &[Source],
        on_hot_spot: &mut dyn FnMut(HotSpotEvent),
    ) -> u32 {
        // The first source's radius scales every contribution.
        let scale_radius = sources.first().map(|s| s.radius).unwrap_or(0.0);

        let mut influence: u32 = 0;
        for (source_index, s) in sources.iter().enumerate() {
            if (x, y) == s.pos {
                // Hot-spot override: a direct hit saturates the pixel in
                // place of the distance term, which has no singularity to
                // produce the glow on its own. Never reduces a larger sum.
                if influence < 0xff {
                    influence = 0xff;
                    on_hot_spot(HotSpotEvent { x, y, source_index });
                }
                continue;
            }

            let d = pixel_distance(x, y, s.pos.0, s.pos.1);
            // Saturating: validate() puts no upper bound on falloff_scale
            // or radius, and a wrapped sum would turn a blown-out pixel dim.
            influence = influence
                .saturating_add((self.falloff_scale as f32 * scale_radius / d.max(1) as f32) as u32);
        }
        influence
    }
}

/// Truncated integer Euclidean distance, clamped to one byte before use so
/// the division stays bounded. Truncation (not rounding) is part of the
/// reference field shape.
fn pixel_distance(x1: i32, y1: i32, x2: i32, y2: i32) -> u32 {
    let dx = (x1 - x2) as f64;
    let dy = (y1 - y2) as f64;
    let d = (dx * dx + dy * dy).sqrt() as u32;
    d.min(0xff)
}
