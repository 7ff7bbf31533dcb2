//! Influence-to-color policies, one per render mode

use cells_core::{hsv_to_rgb, Hsv8, RenderMode, Rgb8};

/// The fixed stripe palette, in band order left to right
pub const STRIPE_PALETTE: [Rgb8; 7] = [
    Rgb8::new(0xff, 0xff, 0xff), // white
    Rgb8::new(0xff, 0xf0, 0x00), // yellow
    Rgb8::new(0x00, 0xff, 0xd4), // cyan
    Rgb8::new(0x49, 0xff, 0x00), // green
    Rgb8::new(0xff, 0x00, 0xc9), // magenta
    Rgb8::new(0xff, 0x00, 0x00), // red
    Rgb8::new(0x00, 0x00, 0xff), // blue
];

/// Map a raw influence sum to a pixel color.
///
/// Monochrome and single-channel clamp; hue-cycle deliberately does not,
/// so sums past 255 wrap around the hue circle instead of saturating to
/// white. The wrap is what draws the banding rings.
///
/// Stripe color is positional, not influence-driven: callers in that mode
/// belong at [`stripe_color`], and debug builds assert if they land here.
pub fn map_influence(mode: RenderMode, influence: u32) -> Rgb8 {
    debug_assert!(
        mode.uses_sources(),
        "stripe color is positional; use stripe_color"
    );
    match mode {
        RenderMode::Monochrome => Rgb8::grey(influence.min(0xff) as u8),
        RenderMode::SingleChannel => Rgb8::new(0, influence.min(0xff) as u8, 0),
        RenderMode::HueCycle => hsv_to_rgb(Hsv8 {
            h: influence as u8,
            s: 0xff,
            v: 0xff,
        }),
        RenderMode::StripeIdle => Rgb8::BLACK,
    }
}

/// Stripe color for a column: equal-width bands of the palette, with any
/// remainder columns past the last full band taking the final color.
pub fn stripe_color(x: u32, width: u32) -> Rgb8 {
    let band = (width / STRIPE_PALETTE.len() as u32).max(1);
    let index = ((x / band) as usize).min(STRIPE_PALETTE.len() - 1);
    STRIPE_PALETTE[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_modes_stay_in_range() {
        for influence in [0u32, 254, 255, 256, 4000, u32::MAX] {
            let mono = map_influence(RenderMode::Monochrome, influence);
            assert!(mono.r <= 0xff && mono.r == mono.g && mono.g == mono.b);
            assert_eq!(mono.r, influence.min(255) as u8);

            let green = map_influence(RenderMode::SingleChannel, influence);
            assert_eq!(green.r, 0);
            assert_eq!(green.b, 0);
            assert_eq!(green.g, influence.min(255) as u8);
        }
    }

    #[test]
    fn hue_cycle_wraps_instead_of_clamping() {
        assert_eq!(
            map_influence(RenderMode::HueCycle, 256),
            map_influence(RenderMode::HueCycle, 0)
        );
        assert_eq!(
            map_influence(RenderMode::HueCycle, 300),
            map_influence(RenderMode::HueCycle, 44)
        );
        // 255 and 511 land on the same hue
        assert_eq!(
            map_influence(RenderMode::HueCycle, 511),
            map_influence(RenderMode::HueCycle, 255)
        );
    }

    #[test]
    fn hue_cycle_saturated_hit_is_red() {
        // hue 255 sits in the final sector: exact fixed-point value
        assert_eq!(
            map_influence(RenderMode::HueCycle, 255),
            Rgb8::new(255, 0, 15)
        );
    }

    #[test]
    fn stripe_bands_at_reference_width() {
        // width 550, 7 colors: 6 full bands of 78 columns, then the
        // 7th color from column 468 through the 4 remainder columns.
        let width = 550;
        let band = 78;
        for (i, color) in STRIPE_PALETTE.iter().enumerate().take(6) {
            for x in (i as u32 * band)..((i as u32 + 1) * band) {
                assert_eq!(stripe_color(x, width), *color, "column {}", x);
            }
        }
        for x in (6 * band)..width {
            assert_eq!(stripe_color(x, width), STRIPE_PALETTE[6], "column {}", x);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "stripe color is positional")]
    fn stripe_mode_rejects_influence_mapping() {
        map_influence(RenderMode::StripeIdle, 0);
    }

    #[test]
    fn stripe_survives_narrow_frames() {
        // Narrower than the palette: everything is still a valid color.
        for x in 0..3 {
            let c = stripe_color(x, 3);
            assert!(STRIPE_PALETTE.contains(&c));
        }
    }
}
