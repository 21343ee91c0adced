use env_logger::Env;

/// Installs the global logger. Honors `RUST_LOG`, defaults to `info`.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .try_init();
}
