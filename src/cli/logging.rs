use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command line flags
pub fn log_level(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the level picked from the flags
pub fn init_logging(debug: bool, quiet: bool) -> LevelFilter {
    let level = log_level(debug, quiet);

    // Only fails when a logger is already installed, which then keeps working
    if SimpleLogger::new().with_level(level).init().is_err() {
        log::set_max_level(level);
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false, false), LevelFilter::Info);
        assert_eq!(log_level(true, false), LevelFilter::Debug);
        assert_eq!(log_level(false, true), LevelFilter::Warn);
        assert_eq!(log_level(true, true), LevelFilter::Debug);
    }
}
