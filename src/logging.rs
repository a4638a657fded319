use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` wins when set. Otherwise debug output is shown when `verbose`
/// is true and info and above when it is not.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());

    // A logger may already be installed (tests call this repeatedly).
    let _ = Builder::from_env(env).try_init();
}
