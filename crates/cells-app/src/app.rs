//! Windowed animation loop
//!
//! Per frame: advance the motion model on fixed clock steps, render the
//! full field into the CPU frame buffer, then hand the buffer to the
//! display session. The render pass always sees a stable source snapshot;
//! motion never interleaves with a scan.

use crate::clock::FrameClock;
use crate::display::DisplaySession;
use cells_core::RenderConfig;
use cells_field::{FieldRng, MotionModel};
use cells_render::{FrameRenderer, FrameView, BYTES_PER_PIXEL};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

pub fn run(config: RenderConfig, seed: u32) -> anyhow::Result<()> {
    println!(
        "Starting {}x{} with {} sources ({:?} mode)",
        config.width, config.height, config.source_count, config.mode
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CellsApp::new(config, seed);
    event_loop.run_app(&mut app)?;

    Ok(())
}

struct CellsApp {
    config: RenderConfig,
    motion: MotionModel,
    renderer: FrameRenderer,
    clock: FrameClock,
    frame_bytes: Vec<u8>,
    window: Option<Arc<Window>>,
    display: Option<DisplaySession>,
}

impl CellsApp {
    fn new(config: RenderConfig, seed: u32) -> Self {
        let mut rng = FieldRng::new(seed);
        let motion = MotionModel::spawn(&config, &mut rng);
        let renderer = FrameRenderer::new(config.mode, config.falloff_scale);
        let pitch = config.width as usize * BYTES_PER_PIXEL;
        let frame_bytes = vec![0u8; pitch * config.height as usize];

        Self {
            config,
            motion,
            renderer,
            clock: FrameClock::new(),
            frame_bytes,
            window: None,
            display: None,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title("Cells")
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
        self.window = Some(window.clone());

        let display = pollster::block_on(DisplaySession::new(
            window,
            self.config.width,
            self.config.height,
        ))
        .unwrap();
        self.display = Some(display);
    }

    fn tick(&mut self) {
        self.clock.tick();
        while self.clock.should_step() {
            self.motion.advance();
            self.clock.consume_step();
        }
    }

    fn redraw(&mut self) {
        let Some(display) = &mut self.display else {
            return;
        };

        let pitch = display.pitch();
        {
            let mut frame =
                match FrameView::new(&mut self.frame_bytes, self.config.width, self.config.height, pitch) {
                    Ok(frame) => frame,
                    Err(e) => {
                        eprintln!("Frame error: {}", e);
                        return;
                    }
                };
            self.renderer.render(&mut frame, self.motion.sources());
        }

        if let Err(e) = display.present(&self.frame_bytes) {
            eprintln!("Display error: {}", e);
        }
    }
}

impl ApplicationHandler for CellsApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(display) = &mut self.display {
                    display.resize(new_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.tick();
                self.redraw();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
