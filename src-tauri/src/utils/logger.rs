use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

pub fn init_logger() {
    // Base filter, overridable through environment variables
    let env = Env::default().filter_or("RUST_LOG", "warn,dubmaster=info");

    let mut builder = Builder::from_env(env);

    // Silence the chattier framework modules
    builder
        .filter_module("wry", LevelFilter::Error)
        .filter_module("tracing", LevelFilter::Error)
        .filter_module("mio", LevelFilter::Error)
        .filter_module("hyper", LevelFilter::Error)
        .filter_module("tauri", LevelFilter::Warn)
        .filter_module("tao", LevelFilter::Error)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr) // Keep output on stderr for the Tauri console
        .init();
}
