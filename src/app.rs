//! Window loop
//!
//! Owns the winit event loop and a softbuffer surface. The simulation is
//! advanced on a fixed ~16 ms cadence; rendering happens on redraw and
//! never touches simulation state.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::consts::*;
use crate::render::{self, Frame};
use crate::settings::Settings;
use crate::sim::{TickInput, World, tick};

/// Fatal startup errors. Once the loop is running, problems are logged and
/// the frame is skipped instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window creation failed: {0}")]
    CreateWindow(#[from] winit::error::OsError),
    #[error("graphics surface initialization failed: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

/// Window plus presentation surface, created on `resumed`
struct Graphics {
    window: Arc<Window>,
    // The context must outlive the surface
    _context: softbuffer::Context<Arc<Window>>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
}

fn init_graphics(event_loop: &ActiveEventLoop) -> Result<Graphics, AppError> {
    let attributes = Window::default_attributes()
        .with_title("Strider")
        .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
        .with_resizable(false);

    let window = Arc::new(event_loop.create_window(attributes)?);
    let context = softbuffer::Context::new(window.clone())?;
    let surface = softbuffer::Surface::new(&context, window.clone())?;

    let size = window.inner_size();
    log::info!(
        "Window created ({}x{} physical)",
        size.width,
        size.height
    );

    Ok(Graphics {
        window,
        _context: context,
        surface,
    })
}

/// The winit application: world state, pending input, and the surface
pub struct App {
    settings: Settings,
    world: World,
    input: TickInput,
    graphics: Option<Graphics>,
    next_tick: Instant,
    fatal: Option<AppError>,
}

impl App {
    pub fn new(settings: Settings, world: World) -> Self {
        Self {
            settings,
            world,
            input: TickInput::default(),
            graphics: None,
            next_tick: Instant::now() + TICK,
            fatal: None,
        }
    }

    /// Advance the simulation one tick and clear one-shot inputs
    fn step(&mut self) {
        tick(&mut self.world, &self.input);
        self.input.jump = false;

        if self.settings.tick_log && self.world.time_ticks % 60 == 0 {
            log::info!("tick {}", self.world.time_ticks);
        }
    }

    /// Draw the current world into the surface buffer and present it
    fn redraw(&mut self) {
        let Some(graphics) = &mut self.graphics else {
            return;
        };

        let size = graphics.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // Minimized; nothing to draw
            return;
        };

        if let Err(e) = graphics.surface.resize(w, h) {
            log::warn!("Surface resize failed: {e}");
            return;
        }

        match graphics.surface.buffer_mut() {
            Ok(mut buffer) => {
                let mut frame = Frame::new(&mut buffer, size.width, size.height);
                render::draw_world(&mut frame, &self.world);
                if let Err(e) = buffer.present() {
                    log::warn!("Present failed: {e}");
                }
            }
            Err(e) => log::warn!("Could not acquire frame buffer: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_none() {
            match init_graphics(event_loop) {
                Ok(graphics) => {
                    self.graphics = Some(graphics);
                    self.next_tick = Instant::now() + TICK;
                }
                Err(e) => {
                    self.fatal = Some(e);
                    event_loop.exit();
                }
            }
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
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                // Edge-triggered: key-down only, OS auto-repeat ignored
                if event.physical_key == PhysicalKey::Code(KeyCode::Space)
                    && event.state.is_pressed()
                    && !event.repeat
                {
                    log::debug!("Jump");
                    self.input.jump = true;
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_tick {
            self.step();
            if let Some(graphics) = &self.graphics {
                graphics.window.request_redraw();
            }

            self.next_tick += TICK;
            if self.next_tick <= now {
                // Fell behind (stall or suspend); re-anchor rather than
                // bursting ticks to catch up
                self.next_tick = now + TICK;
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

/// Run the main loop to completion
pub fn run(settings: Settings) -> Result<(), AppError> {
    let seed = settings.effective_seed();
    log::info!("World seed: {seed}");
    let world = World::new(seed);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + TICK));

    let mut app = App::new(settings, world);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
