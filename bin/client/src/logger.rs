/// Initialize the host logger
/// Sets up env_logger with default filter; RUST_LOG overrides it
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
