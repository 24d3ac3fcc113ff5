use std::io::Write;

use log::LevelFilter;

/// Installs an `env_logger` writing to stderr. `RUST_LOG` takes precedence over `level`.
/// Calling it twice is harmless (the second call is ignored).
pub fn build_logger_for_level(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:>5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .parse_env("RUST_LOG")
        .try_init();
}

/// Maps the number of `-v` flags to a level filter
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_from_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_from_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_from_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn logger_can_be_built_twice() {
        build_logger_for_level(LevelFilter::Debug);
        build_logger_for_level(LevelFilter::Info);
        log::debug!("still alive");
    }
}
