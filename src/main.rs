//! quatcube - quaternion cube rotation visualizer
//!
//! Rotates a wireframe cube with quaternions and draws its perspective
//! projection, either from held keys or along a scripted slerp.

use std::error::Error;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use quatcube::cli::Cli;
use quatcube::config::AppConfig;
use quatcube::input::{InputAction, InputMapper};
use quatcube::systems::{LogSurface, RenderSystem, SimulationSystem, WindowSystem};
use quatcube_core::ScriptTarget;
use quatcube_input::KeyboardController;
use quatcube_render::RenderError;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    controller: KeyboardController,
    /// Error that ended the event loop, reported after it returns
    fatal: Option<Box<dyn Error>>,
}

impl App {
    fn new(config: AppConfig, target: Option<ScriptTarget>) -> Self {
        let simulation = SimulationSystem::new(&config, target);
        Self {
            config,
            window: None,
            render: None,
            simulation,
            controller: KeyboardController::new(),
            fatal: None,
        }
    }

    fn create_systems(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let render = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            (self.config.window.width, self.config.window.height),
            self.config.window.vsync,
        )?;
        window.update_title(self.simulation.orientation(), self.simulation.is_paused());
        window.request_redraw();

        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Box<dyn Error>) {
        log::error!("{}", error);
        self.fatal = Some(error);
        event_loop.exit();
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::TogglePause => {
                self.simulation.toggle_pause();
            }
            InputAction::ResetOrientation => self.simulation.reset(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render) = &mut self.render else {
            return;
        };

        match self.simulation.run_frame(&self.controller, render) {
            Ok(_) => {}
            Err(RenderError::SurfaceLost) => render.recover(),
            Err(e) if e.is_recoverable() => log::warn!("Surface error: {}", e),
            Err(e) => {
                self.fail(event_loop, Box::new(e));
                return;
            }
        }

        if let Some(window) = &self.window {
            window.update_title(self.simulation.orientation(), self.simulation.is_paused());
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_systems(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                // Key releases are not delivered while unfocused
                self.controller.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        if !event.repeat {
                            self.handle_action(event_loop, action);
                        }
                        return;
                    }
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

/// Run without a window and print the final projected points
fn run_headless(config: &AppConfig, target: Option<ScriptTarget>, frames: u64) {
    let mut simulation = SimulationSystem::new(config, target);
    let mut surface = LogSurface::new();
    for _ in 0..frames {
        simulation
            .run_frame(&(), &mut surface)
            .unwrap_or_else(|never| match never {});
    }

    let (axis, angle) = simulation.orientation().to_axis_angle();
    println!(
        "After {} frames: {:.4} rad about ({:.4}, {:.4}, {:.4})",
        surface.frames_presented(),
        angle,
        axis.x,
        axis.y,
        axis.z
    );
    for (i, p) in simulation.points().iter().enumerate() {
        println!("  p{} = ({}, {})", i, p.x, p.y);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Config first so its log level can seed the logger
    let (config, config_error) = match AppConfig::load_from(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting quatcube");

    // The command line wins over a target from config
    let target = cli.target()?.or(config.script.target);

    if let Some(frames) = cli.headless {
        run_headless(&config, target, frames);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, target);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
