use color_eyre::eyre::Result;
use log::LevelFilter;
use std::path::Path;
use tui_logger::{init_logger, set_default_level, TuiLoggerFile};

/// Installs the in-memory logger shown in the log panel and mirrors
/// records to `log_file`.
pub fn setup_logger(level: LevelFilter, log_file: &Path) -> Result<()> {
    init_logger(LevelFilter::Trace)?;
    set_default_level(level);
    for target in ["mio::poll", "crossterm::event"] {
        tui_logger::set_level_for_target(target, LevelFilter::Info);
    }

    tui_logger::set_log_file(TuiLoggerFile::new(&log_file.to_string_lossy()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logger_installs_with_log_file() {
        let dir = tempdir().unwrap();
        let log_file = dir.path().join("vue-primer.log");
        setup_logger(LevelFilter::Info, &log_file).unwrap();
        log::info!("logger ready");
    }
}
