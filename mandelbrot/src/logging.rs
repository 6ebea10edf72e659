use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` is honoured, wgpu internals are
/// kept at `warn` unless asked for explicitly.
pub fn init() {
    let mut filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    for loud_crate in ["naga", "wgpu_core", "wgpu_hal"] {
        if !filter.contains(&format!("{loud_crate}=")) {
            filter += &format!(",{loud_crate}=warn");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}
