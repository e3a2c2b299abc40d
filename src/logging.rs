use color_eyre::{eyre::bail, Result};
use log::LevelFilter;

/// Sends log records to stderr, one `-v` per step from info down to trace.
///
/// Dependencies only speak up at warn, so the listing's own debug output
/// stays readable.
pub fn init(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        2 => LevelFilter::Trace,
        n => bail!("Expected at most two -v flags, got {n}"),
    };
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level("dirlist", level)
        .init()?;
    Ok(())
}
