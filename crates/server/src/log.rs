use std::{fmt, io::Write};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

const TIME_FORMAT: &str = "%b %d %H:%M:%S";

pub struct Entry<'a> {
    pub time: DateTime<Local>,
    pub level: Level,
    pub target: &'a str,
    pub message: String,
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}: {}",
            self.time.format(TIME_FORMAT),
            self.level,
            self.target,
            self.message
        )
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let entry = Entry {
                time: Local::now(),
                level: record.level(),
                target: record.target(),
                message: record.args().to_string(),
            };
            let _ = writeln!(std::io::stderr().lock(), "{entry}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Level::Info, "listening on 127.0.0.1:8080", "Mar 07 09:05:03 INFO scheda_server: listening on 127.0.0.1:8080")]
    #[case(Level::Warn, "Testo mancante", "Mar 07 09:05:03 WARN scheda_server: Testo mancante")]
    fn test_entry_display(#[case] level: Level, #[case] message: &str, #[case] expected: &str) {
        let entry = Entry {
            time: Local.with_ymd_and_hms(2025, 3, 7, 9, 5, 3).unwrap(),
            level,
            target: "scheda_server",
            message: message.to_string(),
        };
        assert_eq!(entry.to_string(), expected);
    }

    #[test]
    fn test_init_twice() {
        let _ = init(LevelFilter::Warn);
        assert!(init(LevelFilter::Warn).is_err());
    }
}
