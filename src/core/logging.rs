//! Logger setup. Diagnostics go to stderr so report output on stdout
//! stays machine-readable.

use log::{Level, LevelFilter};

use crate::types::config;

pub fn init_logging() {
    let level = match config::config().log().level() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {} {}",
                chrono::Local::now().format("%H:%M:%S"),
                painted_level(record.level()),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    // A second init (e.g. from tests) keeps the first logger.
    let _ = dispatch.apply();
}

fn painted_level(level: Level) -> String {
    let text = format!("{level:<5}");
    if !config::colors_enabled() {
        return text;
    }
    let painted = match level {
        Level::Error => console::style(text).red().bold(),
        Level::Warn => console::style(text).yellow(),
        Level::Info => console::style(text).green(),
        Level::Debug => console::style(text).cyan(),
        Level::Trace => console::style(text).dim(),
    };
    // colors_enabled() already decided, so bypass console's tty detection
    painted.force_styling(true).to_string()
}
