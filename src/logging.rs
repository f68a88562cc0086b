//! Logger bootstrap for native and web targets.
//!
//! Library code only talks to the `log` facade. Binaries (and the wasm entry point)
//! call [`init_logger`] once at startup to install a backend.

cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        /// Installs `console_log` at info level and routes panics to the browser
        /// console. Later calls are no-ops.
        pub fn init_logger() {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            let _ = console_log::init_with_level(log::Level::Info);
        }
    } else {
        /// Installs `env_logger` writing to stdout, filtered by `RUST_LOG`.
        /// Later calls are no-ops.
        pub fn init_logger() {
            let _ = env_logger::Builder::new()
                .target(env_logger::Target::Stdout)
                .parse_env("RUST_LOG")
                .try_init();
        }
    }
}
