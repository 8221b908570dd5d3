use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::WindowId,
};

use viewport_camera::cli::Cli;
use viewport_camera::config::ViewConfig;
use viewport_camera::types::UniformBlock;
use viewport_camera::view_manager::ViewManager;
use viewport_camera::window::{create_display_window, WinitViewport};

// === Application ===

struct App {
    config: ViewConfig,
    viewport: Option<WinitViewport>,
    view_manager: ViewManager,
    uniforms: UniformBlock,
}

impl App {
    fn new(config: ViewConfig) -> Self {
        Self {
            view_manager: ViewManager::new(&config),
            config,
            viewport: None,
            uniforms: UniformBlock::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewport.is_none() {
            match create_display_window(event_loop, &self.config.window) {
                Ok(window) => self.viewport = Some(WinitViewport::new(window)),
                Err(e) => {
                    log::error!("{:#}", e);
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
        let Some(viewport) = &mut self.viewport else {
            return;
        };

        if let Some(pointer) = viewport.process_event(&event) {
            self.view_manager.handle_pointer_event(pointer);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                self.view_manager
                    .prepare_scene_view(viewport, &mut self.uniforms);

                if self.uniforms.take_dirty() {
                    log::trace!("Uniform block ready ({} bytes)", self.uniforms.as_bytes().len());
                }

                if viewport.close_requested() {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let Some(viewport) = &mut self.viewport else {
            return;
        };

        if let Some(pointer) = viewport.process_device_event(&event) {
            self.view_manager.handle_pointer_event(pointer);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(viewport) = &self.viewport {
            viewport.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = ViewConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!("Controls: WASD move, Q/E up/down, mouse look, scroll speed, O projection, Escape quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
