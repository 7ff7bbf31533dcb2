//! 8-bit color types and the fixed-point HSV to RGB conversion

use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels
    pub const fn grey(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// An 8-bit HSV triple
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsv8 {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Which of the six hue sectors a hue falls in.
///
/// Integer division by 43 gives slightly uneven sector widths (255/6 is
/// 42.5). That quantization is part of the reference palette and must not
/// be "corrected".
pub fn hue_region(hue: u8) -> u8 {
    hue / 43
}

/// Fixed-point HSV to RGB conversion.
///
/// All arithmetic is integer with truncating `>> 8` steps; the remainder
/// multiply wraps at the u8 boundary. Output is bit-exact for every input,
/// so any change here shifts the rendered palette.
pub fn hsv_to_rgb(hsv: Hsv8) -> Rgb8 {
    if hsv.s == 0 {
        return Rgb8::grey(hsv.v);
    }

    let region = hue_region(hsv.h);
    let remainder = (hsv.h - region * 43).wrapping_mul(6);

    let v = hsv.v as u16;
    let s = hsv.s as u16;
    let rem = remainder as u16;

    let p = ((v * (0xff - s)) >> 8) as u8;
    let q = ((v * (0xff - ((s * rem) >> 8))) >> 8) as u8;
    let t = ((v * (0xff - ((s * (0xff - rem)) >> 8))) >> 8) as u8;
    let v = hsv.v;

    match region {
        0 => Rgb8::new(v, t, p),
        1 => Rgb8::new(q, v, p),
        2 => Rgb8::new(p, v, t),
        3 => Rgb8::new(p, q, v),
        4 => Rgb8::new(t, p, v),
        _ => Rgb8::new(v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_saturation_is_grey() {
        for h in [0u8, 43, 86, 128, 255] {
            for v in [0u8, 17, 200, 255] {
                assert_eq!(hsv_to_rgb(Hsv8 { h, s: 0, v }), Rgb8::grey(v));
            }
        }
    }

    #[test]
    fn region_boundaries() {
        assert_eq!(hue_region(0), 0);
        assert_eq!(hue_region(42), 0);
        assert_eq!(hue_region(43), 1);
        assert_eq!(hue_region(85), 1);
        assert_eq!(hue_region(86), 2);
        assert_eq!(hue_region(128), 2);
        assert_eq!(hue_region(129), 3);
        assert_eq!(hue_region(214), 4);
        assert_eq!(hue_region(215), 5);
        assert_eq!(hue_region(255), 5);
    }

    #[test]
    fn full_saturation_exact_values() {
        // Hand-evaluated fixed-point results at the region boundaries.
        assert_eq!(hsv_to_rgb(Hsv8 { h: 0, s: 255, v: 255 }), Rgb8::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv8 { h: 42, s: 255, v: 255 }), Rgb8::new(255, 252, 0));
        assert_eq!(hsv_to_rgb(Hsv8 { h: 43, s: 255, v: 255 }), Rgb8::new(254, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv8 { h: 215, s: 255, v: 255 }), Rgb8::new(255, 0, 254));
        assert_eq!(hsv_to_rgb(Hsv8 { h: 255, s: 255, v: 255 }), Rgb8::new(255, 0, 15));
    }

    #[test]
    fn value_scales_output() {
        // v bounds every channel regardless of hue.
        for h in 0..=255u8 {
            let rgb = hsv_to_rgb(Hsv8 { h, s: 255, v: 100 });
            assert!(rgb.r <= 100 && rgb.g <= 100 && rgb.b <= 100);
        }
    }
}
