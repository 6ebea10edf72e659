use anyhow::Result;
use mandelbrot::{app, canvas_scene::CanvasScene, config, gpu::Gpu, logging};
use winit::event_loop::EventLoop;

fn main() -> Result<()> {
    logging::init();

    let viewer = config::CANVAS_VIEWER;
    let event_loop = EventLoop::new();
    let window = app::create_window(&viewer, &event_loop)?;

    let gpu = pollster::block_on(Gpu::new(&window))?;
    let scene = CanvasScene::new(&gpu, viewer.screen(), viewer.max_iterations)?;

    app::run(&viewer, event_loop, window, gpu, scene)
}
