//! Structured leveled logging to stderr, so stdout stays clean for the human or `--json` report
//! a verb produces. Default level `info`, raised to `debug` by `-v`/`--verbose`.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. Safe to call once per process; a second call is a
/// logic error in the caller, not something this function guards against.
///
/// Level is fixed by `-v`/`--verbose` alone — the engine carries no environment-variable
/// configuration, so this never consults one.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
