//! Bounds-checked pixel frame view and the full-frame scan

use crate::mapper::{map_influence, stripe_color};
use cells_core::{CellsError, RenderMode, Result, Rgb8};
use cells_field::{FieldAccumulator, HotSpotEvent, Source};

/// Slot size in the pixel buffer. Only the first three bytes of each slot
/// are ever written.
pub const BYTES_PER_PIXEL: usize = 4;

/// Mutable view over a caller-owned pixel buffer.
///
/// Rows are `pitch` bytes apart. Each pixel occupies a 4-byte slot at
/// `y * pitch + x * 4`, written in B, G, R byte order to match the BGRA8
/// streaming texture this system displays through; the 4th byte is left
/// untouched.
pub struct FrameView<'a> {
    buf: &'a mut [u8],
    width: u32,
    height: u32,
    pitch: usize,
}

impl<'a> FrameView<'a> {
    pub fn new(buf: &'a mut [u8], width: u32, height: u32, pitch: usize) -> Result<Self> {
        if width == 0 || height == 0 || pitch == 0 {
            return Err(CellsError::InvalidFrame(format!(
                "frame must be non-empty, got {}x{} with pitch {}",
                width, height, pitch
            )));
        }
        if pitch < width as usize * BYTES_PER_PIXEL {
            return Err(CellsError::InvalidFrame(format!(
                "pitch {} too small for width {}",
                pitch, width
            )));
        }
        if buf.len() < pitch * height as usize {
            return Err(CellsError::InvalidFrame(format!(
                "buffer of {} bytes too small for {} rows of pitch {}",
                buf.len(),
                height,
                pitch
            )));
        }
        Ok(Self {
            buf,
            width,
            height,
            pitch,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Write one pixel's three color bytes
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgb8) {
        debug_assert!(x < self.width && y < self.height);
        let i = y as usize * self.pitch + x as usize * BYTES_PER_PIXEL;
        self.buf[i] = color.b;
        self.buf[i + 1] = color.g;
        self.buf[i + 2] = color.r;
    }
}

/// Drives the width x height scan for one frame.
///
/// Pure function of the frame, mode, and source snapshot; the mutable
/// source borrow is released before `render` takes its shared one, so a
/// motion step can never interleave with a scan.
pub struct FrameRenderer {
    mode: RenderMode,
    accumulator: FieldAccumulator,
    hot_spot_hook: Option<Box<dyn FnMut(HotSpotEvent)>>,
}

impl FrameRenderer {
    pub fn new(mode: RenderMode, falloff_scale: u32) -> Self {
        Self {
            mode,
            accumulator: FieldAccumulator::new(falloff_scale),
            hot_spot_hook: None,
        }
    }

    /// Install an observer for hot-spot overrides. No-op when absent.
    pub fn with_hot_spot_hook(mut self, hook: impl FnMut(HotSpotEvent) + 'static) -> Self {
        self.hot_spot_hook = Some(Box::new(hook));
        self
    }

    /// Render one frame into the view
    pub fn render(&mut self, frame: &mut FrameView<'_>, sources: &[Source]) {
        if self.mode == RenderMode::StripeIdle {
            let width = frame.width();
            for y in 0..frame.height() {
                for x in 0..width {
                    frame.put(x, y, stripe_color(x, width));
                }
            }
            return;
        }

        let accumulator = self.accumulator;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let influence = match &mut self.hot_spot_hook {
                    Some(hook) => {
                        accumulator.influence_observed(x as i32, y as i32, sources, hook)
                    }
                    None => accumulator.influence(x as i32, y as i32, sources),
                };
                frame.put(x, y, map_influence(self.mode, influence));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::STRIPE_PALETTE;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn source_at(x: i32, y: i32) -> Source {
        Source {
            pos: (x, y),
            vel: (0, 0),
            radius: 50.0,
        }
    }

    fn pixel(buf: &[u8], pitch: usize, x: usize, y: usize) -> (u8, u8, u8) {
        let i = y * pitch + x * BYTES_PER_PIXEL;
        // (b, g, r) slots
        (buf[i], buf[i + 1], buf[i + 2])
    }

    #[test]
    fn view_rejects_bad_geometry() {
        let mut buf = vec![0u8; 64];
        assert!(FrameView::new(&mut buf, 0, 4, 16).is_err());
        assert!(FrameView::new(&mut buf, 4, 0, 16).is_err());
        // pitch smaller than a row
        assert!(FrameView::new(&mut buf, 8, 2, 16).is_err());
        // buffer shorter than height * pitch
        assert!(FrameView::new(&mut buf, 4, 8, 16).is_err());
        assert!(FrameView::new(&mut buf, 4, 4, 16).is_ok());
    }

    #[test]
    fn fourth_byte_is_never_touched() {
        let width = 4u32;
        let height = 3u32;
        let pitch = width as usize * BYTES_PER_PIXEL;
        let mut buf = vec![0xaau8; pitch * height as usize];

        let mut renderer = FrameRenderer::new(RenderMode::Monochrome, 80);
        let sources = [source_at(100, 100)];
        let mut frame = FrameView::new(&mut buf, width, height, pitch).unwrap();
        renderer.render(&mut frame, &sources);

        for y in 0..height as usize {
            for x in 0..width as usize {
                let i = y * pitch + x * BYTES_PER_PIXEL;
                assert_eq!(buf[i + 3], 0xaa, "slot ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn pitch_padding_is_preserved() {
        let width = 2u32;
        let height = 2u32;
        // 8 bytes of padding per row
        let pitch = width as usize * BYTES_PER_PIXEL + 8;
        let mut buf = vec![0x55u8; pitch * height as usize];

        let mut renderer = FrameRenderer::new(RenderMode::Monochrome, 80);
        let sources = [source_at(500, 500)];
        let mut frame = FrameView::new(&mut buf, width, height, pitch).unwrap();
        renderer.render(&mut frame, &sources);

        for y in 0..height as usize {
            for pad in width as usize * BYTES_PER_PIXEL..pitch {
                assert_eq!(buf[y * pitch + pad], 0x55);
            }
        }
    }

    #[test]
    fn hot_spot_pixel_renders_wrapped_red() {
        // A single source sitting on a pixel: influence forced to exactly
        // 255, which in hue-cycle mode lands in the final sector.
        let width = 8u32;
        let height = 4u32;
        let pitch = width as usize * BYTES_PER_PIXEL;
        let mut buf = vec![0u8; pitch * height as usize];

        let mut renderer = FrameRenderer::new(RenderMode::HueCycle, 80);
        let sources = [source_at(3, 2)];
        let mut frame = FrameView::new(&mut buf, width, height, pitch).unwrap();
        renderer.render(&mut frame, &sources);

        // (b, g, r) for hue 255 at full saturation/value
        assert_eq!(pixel(&buf, pitch, 3, 2), (15, 0, 255));
    }

    #[test]
    fn monochrome_clamps_every_pixel() {
        let width = 6u32;
        let height = 6u32;
        let pitch = width as usize * BYTES_PER_PIXEL;
        let mut buf = vec![0u8; pitch * height as usize];

        // Coincident sources produce adversarially large raw sums.
        let sources = vec![source_at(3, 3); 10];
        let mut renderer = FrameRenderer::new(RenderMode::Monochrome, 80);
        let mut frame = FrameView::new(&mut buf, width, height, pitch).unwrap();
        renderer.render(&mut frame, &sources);

        for y in 0..height as usize {
            for x in 0..width as usize {
                let (b, g, r) = pixel(&buf, pitch, x, y);
                assert_eq!(b, g);
                assert_eq!(g, r);
            }
        }
        // The shared center is fully saturated
        assert_eq!(pixel(&buf, pitch, 3, 3), (255, 255, 255));
    }

    #[test]
    fn single_channel_writes_green_only() {
        let width = 4u32;
        let height = 4u32;
        let pitch = width as usize * BYTES_PER_PIXEL;
        let mut buf = vec![0xffu8; pitch * height as usize];

        let sources = [source_at(1, 1)];
        let mut renderer = FrameRenderer::new(RenderMode::SingleChannel, 80);
        let mut frame = FrameView::new(&mut buf, width, height, pitch).unwrap();
        renderer.render(&mut frame, &sources);

        for y in 0..height as usize {
            for x in 0..width as usize {
                let (b, _, r) = pixel(&buf, pitch, x, y);
                assert_eq!(b, 0);
                assert_eq!(r, 0);
            }
        }
        assert_eq!(pixel(&buf, pitch, 1, 1), (0, 255, 0));
    }

    #[test]
    fn stripe_mode_ignores_sources() {
        let width = 550u32;
        let height = 2u32;
        let pitch = width as usize * BYTES_PER_PIXEL;
        let mut buf = vec![0u8; pitch * height as usize];

        let sources = [source_at(100, 0)];
        let mut renderer = FrameRenderer::new(RenderMode::StripeIdle, 80);
        let mut frame = FrameView::new(&mut buf, width, height, pitch).unwrap();
        renderer.render(&mut frame, &sources);

        // First band white, trailing remainder blue, on every row
        for y in 0..height as usize {
            assert_eq!(pixel(&buf, pitch, 0, y), (255, 255, 255));
            assert_eq!(pixel(&buf, pitch, 77, y), (255, 255, 255));
            let last = STRIPE_PALETTE[6];
            assert_eq!(pixel(&buf, pitch, 468, y), (last.b, last.g, last.r));
            assert_eq!(pixel(&buf, pitch, 549, y), (last.b, last.g, last.r));
        }
    }

    #[test]
    fn hook_fires_once_per_source_center() {
        let width = 16u32;
        let height = 16u32;
        let pitch = width as usize * BYTES_PER_PIXEL;
        let mut buf = vec![0u8; pitch * height as usize];

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut renderer = FrameRenderer::new(RenderMode::Monochrome, 80)
            .with_hot_spot_hook(move |e| sink.borrow_mut().push(e));

        // Far enough apart that neither center is already saturated by the
        // other source when its own override fires.
        let sources = [source_at(0, 0), source_at(15, 15)];
        let mut frame = FrameView::new(&mut buf, width, height, pitch).unwrap();
        renderer.render(&mut frame, &sources);

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], HotSpotEvent { x: 0, y: 0, source_index: 0 });
        assert_eq!(events[1], HotSpotEvent { x: 15, y: 15, source_index: 1 });
    }
}
