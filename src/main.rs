//! Galaxy - procedural point field viewer
//!
//! Generates a spiral galaxy (or other point field presets) and shows it with
//! an orbit camera. A keyboard panel edits the generator parameters live.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use galaxy::config::AppConfig;
use galaxy::input::{InputAction, InputMapper};
use galaxy::presets;
use galaxy::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use galaxy_core::{CommandQueue, FieldCommand, FieldManager, PresetLibrary, Vec3};
use galaxy_input::{OrbitController, ParameterPanel};
use galaxy_render::OrbitCamera;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    field: FieldManager,
    commands: CommandQueue,
    presets: PresetLibrary,
    preset_index: usize,
    camera: OrbitCamera,
    controller: OrbitController,
    panel: ParameterPanel,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let presets = presets::load_library(&config.field.preset_file);
        let (preset_index, spec) = presets::initial_preset(&presets, &config.field.initial_preset);

        let seed = config.field.seed.unwrap_or_else(rand::random);
        let field = FieldManager::new(spec, seed)
            .or_else(|e| {
                log::warn!("Initial preset is invalid: {}. Using the default galaxy.", e);
                FieldManager::new(Default::default(), seed)
            })
            .unwrap_or_else(|e| panic!("Default field failed to generate: {}", e));

        let camera_config = &config.camera;
        let camera = OrbitCamera::looking_from(
            Vec3::from(camera_config.start_position),
            Vec3::from(camera_config.target),
        )
        .with_distance_limits(camera_config.min_distance, camera_config.max_distance);

        let controller = OrbitController::new()
            .with_rotate_sensitivity(config.controls.rotate_sensitivity)
            .with_zoom_sensitivity(config.controls.zoom_sensitivity)
            .with_damping_factor(config.controls.damping_factor)
            .with_damping(config.controls.damping_enabled);

        let commands = CommandQueue::new();
        let panel = ParameterPanel::new(commands.sender());

        Self {
            config,
            window: None,
            render: None,
            simulation: SimulationSystem::new(),
            field,
            commands,
            presets,
            preset_index,
            camera,
            controller,
            panel,
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetCamera => {
                self.camera.reset();
                self.controller.stop();
                log::info!("Camera reset to starting position");
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::Reseed => {
                let seed = rand::random();
                log::info!("Reseeding with {}", seed);
                self.commands.push(FieldCommand::Reseed(seed));
            }
            InputAction::NextPreset => {
                self.preset_index = (self.preset_index + 1) % self.presets.len().max(1);
                if let Some(preset) = self.presets.cycle(self.preset_index) {
                    log::info!("Switching to preset '{}'", preset.name);
                    self.commands.push(FieldCommand::Replace(preset.spec));
                }
            }
            InputAction::ToggleDamping => {
                let enabled = self.controller.toggle_damping();
                log::info!("Orbit damping: {}", if enabled { "ON" } else { "OFF" });
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = self.simulation.update(
            &mut self.field,
            &self.commands,
            &mut self.camera,
            &mut self.controller,
        );

        if let Some(render) = &mut self.render {
            if result.field_dirty {
                render.upload_field(self.field.field());
            }

            match render.render_frame(&self.camera, result.rotation_angle) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => log::debug!("Surface lost, reconfigured"),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        let spec = *self.field.spec();
        let panel = self
            .config
            .debug
            .show_panel_in_title
            .then(|| self.panel.summary(&spec));
        let preset = presets::display_name(&self.presets, self.preset_index, &spec);
        if let Some(window) = &mut self.window {
            window.update_title(&preset, self.field.field().len(), panel.as_deref());
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = WindowSystem::create(event_loop, &self.config.window)
            .unwrap_or_else(|e| panic!("{}", e));

        let render = RenderSystem::new(
            window.window().clone(),
            self.field.field(),
            self.config.rendering.clone(),
            self.config.camera.clone(),
            self.config.window.vsync,
        )
        .unwrap_or_else(|e| panic!("{}", e));

        let (width, height) = render.size();
        log::info!("Window ready at {}x{}", width, height);

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
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

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                        return;
                    }
                    let spec = *self.field.spec();
                    self.panel.process_keyboard(key, event.state, &spec);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.controller.process_scroll(lines);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&level);
    log::info!("Starting Galaxy");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
