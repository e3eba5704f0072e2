use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Terminal-only logging: errors and warnings to stderr, the rest to stdout,
/// interleaved with the child processes' own output.
pub fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    if TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        eprintln!("cuesplit: logger already initialized");
    }
}
