use chrono::Utc;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    // ANSI color for console output.
    fn color(self) -> &'static str {
        match self {
            LogLevel::Info => "\x1b[96m",
            LogLevel::Warn => "\x1b[93m",
            LogLevel::Error => "\x1b[91m",
        }
    }
}

/// Leveled logger writing either to the console (with colors) or to an
/// append-mode file.
pub struct Logger {
    file: Option<File>,
    log_to_file: bool,
}

impl Logger {
    /// Creates a new `Logger` instance.
    ///
    /// # Parameters
    /// - `log_to_file`: write messages to a file (`true`) or to the console (`false`).
    /// - `log_file`: optional file path; defaults to "default.log".
    ///
    /// If the log file cannot be opened the logger falls back to the
    /// console instead of failing.
    pub fn new(log_to_file: bool, log_file: Option<&str>) -> Self {
        let file = if log_to_file {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file.unwrap_or("default.log"))
                .ok()
        } else {
            None
        };
        Logger { file, log_to_file }
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        if self.log_to_file {
            if let Some(file) = &mut self.file {
                if file
                    .write_all(line.as_bytes())
                    .and_then(|_| file.flush())
                    .is_ok()
                {
                    return;
                }
            }
            // Opening or writing the file failed; at least keep the line.
            eprint!("{}", line);
            return;
        }

        print!("{}{}\x1b[0m", level.color(), line);
        let _ = io::stdout().flush();
    }

    /// Logs an informational message.
    pub fn info(&mut self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning message.
    pub fn warn(&mut self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message.
    pub fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_console_logging_does_not_panic() {
        let mut logger = Logger::new(false, None);
        logger.info("info message");
        logger.warn("warning message");
        logger.error("error message");
    }

    #[test]
    fn test_file_logging_appends_messages() {
        let path = std::env::temp_dir().join("flight-organizer-logger-test.log");
        let path_str = path.to_str().unwrap();
        let _ = fs::remove_file(&path);

        let mut logger = Logger::new(true, Some(path_str));
        logger.info("first line");
        logger.warn("second line");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[INFO]"));
        assert!(contents.contains("first line"));
        assert!(contents.contains("[WARN]"));
        assert!(contents.contains("second line"));

        let _ = fs::remove_file(&path);
    }
}
