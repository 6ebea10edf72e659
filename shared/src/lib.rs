//! Windowing-free core of the Mandelbrot viewers: the viewport, the
//! escape-time evaluator, the CPU canvas and the input state machine.

pub use bytemuck;

pub mod canvas;
pub mod escape;
pub mod input;
pub mod viewport;

pub use canvas::Canvas;
pub use escape::{color, escape_time};
pub use input::{Controller, InputEvent, PointerState, Response};
pub use viewport::{ScreenSize, Viewport, ZoomDirection};

/// Uniform block consumed by the fragment shader. Layout matches `Params`
/// in `mandelbrot.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Params {
    pub resolution: [f32; 2],
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub max_iterations: u32,
    /// Non-zero when the render target sRGB-encodes on store, so the shader
    /// has to emit linear values to land on the gradient bytes.
    pub srgb_output: u32,
}

impl Params {
    pub fn new(screen: ScreenSize, viewport: &Viewport, max_iterations: u32) -> Self {
        let mut params = Self {
            resolution: [screen.width as f32, screen.height as f32],
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
            max_iterations,
            srgb_output: 0,
        };
        params.set_viewport(viewport);
        params
    }

    pub fn set_viewport(&mut self, viewport: &Viewport) {
        self.x_min = viewport.x_min as f32;
        self.x_max = viewport.x_max as f32;
        self.y_min = viewport.y_min as f32;
        self.y_max = viewport.y_max as f32;
    }

    pub fn set_srgb_output(&mut self, srgb: bool) {
        self.srgb_output = u32::from(srgb);
    }

    pub fn set_resolution(&mut self, screen: ScreenSize) {
        self.resolution = [screen.width as f32, screen.height as f32];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_fill_a_32_byte_uniform_block() {
        assert_eq!(std::mem::size_of::<Params>(), 32);

        let params = Params::new(ScreenSize::new(600, 600), &Viewport::default(), 500);
        let bytes = bytemuck::bytes_of(&params);
        assert_eq!(&bytes[0..4], &600.0_f32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &(-2.0_f32).to_ne_bytes());
        assert_eq!(&bytes[24..28], &500_u32.to_ne_bytes());
        assert_eq!(&bytes[28..32], &0_u32.to_ne_bytes());
    }

    #[test]
    fn srgb_flag_occupies_the_last_word() {
        let mut params = Params::new(ScreenSize::new(600, 600), &Viewport::default(), 500);
        params.set_srgb_output(true);

        assert_eq!(&bytemuck::bytes_of(&params)[28..32], &1_u32.to_ne_bytes());
        params.set_srgb_output(false);
        assert_eq!(params.srgb_output, 0);
    }

    #[test]
    fn params_follow_viewport_and_resolution() {
        let mut viewport = Viewport::default();
        let mut params = Params::new(ScreenSize::new(600, 600), &viewport, 500);

        viewport.zoom(ZoomDirection::In);
        params.set_viewport(&viewport);
        params.set_resolution(ScreenSize::new(1200, 1200));

        assert_eq!(params.x_min, viewport.x_min as f32);
        assert_eq!(params.y_max, viewport.y_max as f32);
        assert_eq!(params.resolution, [1200.0, 1200.0]);
        assert_eq!(params.max_iterations, 500);
    }
}
