use crate::{color, escape_time, ScreenSize, Viewport};

/// Fixed-size RGBA8 pixel buffer painted on the CPU.
pub struct Canvas {
    size: ScreenSize,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    pub fn new(size: ScreenSize) -> Self {
        Self {
            size,
            pixels: vec![[0, 0, 0, 255]; size.width as usize * size.height as usize],
        }
    }

    pub fn size(&self) -> ScreenSize {
        self.size
    }

    /// Raw bytes, rows top to bottom, ready for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Repaints every pixel for `viewport`.
    pub fn render(&mut self, viewport: &Viewport, max_iterations: u32) {
        let size = self.size;
        let width = size.width as usize;

        for (index, pixel) in self.pixels.iter_mut().enumerate() {
            let px = (index % width) as f64;
            let py = (index / width) as f64;
            let c = viewport.plane_point((px, py), size);
            *pixel = color(escape_time(c, max_iterations), max_iterations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Canvas {
        fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
            self.pixels[(y * self.size.width + x) as usize]
        }
    }

    #[test]
    fn new_canvas_is_black() {
        let canvas = Canvas::new(ScreenSize::new(4, 3));

        assert_eq!(canvas.as_bytes().len(), 4 * 3 * 4);
        assert!(canvas.as_bytes().chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn render_paints_members_black_and_outside_blue() {
        // 3 wide: column 0 is x = -2, column 2 is x = 0 on a [-2, 1] span.
        let mut canvas = Canvas::new(ScreenSize::new(3, 3));
        let viewport = Viewport::default();
        canvas.render(&viewport, 100);

        // Row 1 is y = 0.5, column 2 is x = 0: 0.5i stays bounded.
        assert_eq!(canvas.pixel(2, 1), [0, 0, 0, 255]);
        // Top-left is -2 + 1.5i, outside the radius-2 disk.
        assert_eq!(canvas.pixel(0, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn render_overwrites_the_whole_buffer() {
        let size = ScreenSize::new(16, 12);
        let mut canvas = Canvas::new(size);
        let far_away = Viewport {
            x_min: 10.0,
            x_max: 11.0,
            y_min: 10.0,
            y_max: 11.0,
        };

        canvas.render(&Viewport::default(), 50);
        canvas.render(&far_away, 50);

        assert!(canvas.as_bytes().chunks(4).all(|p| p == [0, 0, 255, 255]));
    }
}
