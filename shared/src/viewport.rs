/// Zoom factor applied for one scroll step towards the set.
pub const ZOOM_IN_FACTOR: f64 = 0.9;
/// Zoom factor applied for one scroll step away from the set.
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Direction picked by the sign of a scroll delta, `None` for zero.
    pub fn from_scroll(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

/// Size of the display surface in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Rectangle of the complex plane mapped onto the display surface.
///
/// Column 0 of the screen maps to `x_min`, row 0 maps to `y_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Viewport {
    pub const DEFAULT: Self = Self {
        x_min: -2.0,
        x_max: 1.0,
        y_min: -1.5,
        y_max: 1.5,
    };

    pub fn x_range(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_range(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        self.scale(direction.factor());
    }

    /// Scales both ranges by `factor` around the current center.
    pub fn scale(&mut self, factor: f64) {
        let (x_center, y_center) = self.center();
        let x_range = self.x_range() * factor;
        let y_range = self.y_range() * factor;

        self.x_min = x_center - x_range / 2.0;
        self.x_max = x_center + x_range / 2.0;
        self.y_min = y_center - y_range / 2.0;
        self.y_max = y_center + y_range / 2.0;
    }

    /// Translates the viewport by a pointer drag of `(dx, dy)` screen pixels so
    /// that the picture follows the pointer.
    pub fn pan(&mut self, (dx, dy): (f64, f64), screen: ScreenSize) {
        let dx = dx * self.x_range() / f64::from(screen.width);
        let dy = dy * self.y_range() / f64::from(screen.height);

        self.x_min -= dx;
        self.x_max -= dx;
        self.y_min += dy;
        self.y_max += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    /// Complex coordinate of the pixel at `(px, py)`.
    pub fn plane_point(&self, (px, py): (f64, f64), screen: ScreenSize) -> (f64, f64) {
        (
            self.x_min + px * self.x_range() / f64::from(screen.width),
            self.y_max - py * self.y_range() / f64::from(screen.height),
        )
    }
}
