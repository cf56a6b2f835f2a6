use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr so stdout only carries the check result.
/// `RUST_LOG` takes precedence over the level passed on the command line.
pub fn init(level: LevelFilter) -> Result<()> {
    SimpleLogger::new().with_level(level).env().init()?;

    Ok(())
}
