//! wgpu/winit front end shared by the two Mandelbrot viewers.

pub mod app;
pub mod canvas_scene;
pub mod config;
pub mod gpu;
pub mod input;
pub mod logging;
pub mod shader_scene;
