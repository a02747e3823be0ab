use log::LevelFilter;
use std::io::Write;
use std::str::FromStr;

/// Installs the process logger once; later calls only move the level.
fn install_logger(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[ironlog {} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .filter_level(LevelFilter::Trace)
        .try_init();

    log::set_max_level(level);
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "warning" => Some(LevelFilter::Warn),
        other => LevelFilter::from_str(other).ok(),
    }
}

#[uniffi::export]
pub fn set_debug_log_level() {
    install_logger(LevelFilter::Debug);
}

/// Returns false for an unknown level name.
#[uniffi::export]
pub fn set_log_level(level: &str) -> bool {
    match parse_level(level) {
        Some(filter) => {
            install_logger(filter);
            true
        }
        None => false,
    }
}
