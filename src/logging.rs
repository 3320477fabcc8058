//! Logger setup shared by the binaries

use std::io::Write;

/// Route `log` records to stderr.
///
/// The default level is `info`, or `debug` when `debug` is set; `RUST_LOG`
/// overrides both.
pub fn init(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}
