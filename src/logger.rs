//! Logging setup
//!
//! Installs a `fern` dispatcher so the warnings emitted by the validation
//! helpers (and anything else using the `log` macros) reach stderr with
//! timestamps. Library consumers with their own logger can skip this.

use log::LevelFilter;

/// Initialize stderr logging at the given level.
///
/// Calling this twice returns an error from `log::set_boxed_logger`;
/// initialize once at program start.
pub fn init(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
