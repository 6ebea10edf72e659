use std::{ffi::OsString, path::PathBuf};

use shared::ScreenSize;

/// Environment variable overriding the location of the fragment shader.
pub const SHADER_PATH_VAR: &str = "MANDELBROT_SHADER";

#[derive(Clone, Copy, Debug)]
pub struct ViewerConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    /// Redraw ceiling in frames per second, `None` redraws only on demand.
    pub frame_rate: Option<u32>,
}

impl ViewerConfig {
    pub fn screen(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }
}

pub const SHADER_VIEWER: ViewerConfig = ViewerConfig {
    title: "Mandelbrot Set - Shader",
    width: 600,
    height: 600,
    max_iterations: 500,
    frame_rate: Some(60),
};

pub const CANVAS_VIEWER: ViewerConfig = ViewerConfig {
    title: "Mandelbrot Set - CPU",
    width: 800,
    height: 600,
    max_iterations: 256,
    frame_rate: None,
};

pub fn bundled_shader_path() -> PathBuf {
    PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/shaders/mandelbrot.wgsl"
    ))
}

/// Fragment shader location, `MANDELBROT_SHADER` first.
pub fn shader_path() -> PathBuf {
    resolve_shader_path(std::env::var_os(SHADER_PATH_VAR))
}

fn resolve_shader_path(overridden: Option<OsString>) -> PathBuf {
    overridden
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(bundled_shader_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_shader_exists() {
        let path = bundled_shader_path();
        assert!(path.ends_with("shaders/mandelbrot.wgsl"));
        assert!(path.is_file(), "{}", path.display());
    }

    #[test]
    fn override_wins_over_bundled_shader() {
        assert_eq!(
            resolve_shader_path(Some("/tmp/custom.wgsl".into())),
            PathBuf::from("/tmp/custom.wgsl")
        );
        assert_eq!(resolve_shader_path(None), bundled_shader_path());
        assert_eq!(resolve_shader_path(Some("".into())), bundled_shader_path());
    }

    #[test]
    fn shader_path_reads_the_environment() {
        // Only this test touches the variable.
        std::env::set_var(SHADER_PATH_VAR, "/opt/shaders/julia.wgsl");
        let path = shader_path();
        std::env::remove_var(SHADER_PATH_VAR);

        assert_eq!(path, PathBuf::from("/opt/shaders/julia.wgsl"));
        assert_eq!(shader_path(), bundled_shader_path());
    }

    #[test]
    fn viewers_use_their_window_sizes() {
        assert_eq!(SHADER_VIEWER.screen(), ScreenSize::new(600, 600));
        assert_eq!(CANVAS_VIEWER.screen(), ScreenSize::new(800, 600));
        assert_eq!(SHADER_VIEWER.frame_rate, Some(60));
        assert_eq!(CANVAS_VIEWER.frame_rate, None);
    }
}
