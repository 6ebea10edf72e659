use anyhow::Result;
use mandelbrot::{app, config, gpu::Gpu, logging, shader_scene::ShaderScene};
use winit::event_loop::EventLoop;

fn main() -> Result<()> {
    logging::init();

    let viewer = config::SHADER_VIEWER;
    let event_loop = EventLoop::new();
    let window = app::create_window(&viewer, &event_loop)?;

    let gpu = pollster::block_on(Gpu::new(&window))?;
    let scene = ShaderScene::new(&gpu, &config::shader_path(), viewer.max_iterations)?;

    app::run(&viewer, event_loop, window, gpu, scene)
}
