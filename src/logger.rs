//! Leveled logger writing colorized lines to stdout/stderr or plain lines to a file
//!
//! Every emit call funnels into [`LevelLogger::write`], which filters by the
//! configured mode, resolves a [`Destination`] and formats the line for it.

use chrono::Local;
use log::{Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::config::Config;
use crate::error::Error;
use crate::level::Level;
use crate::output::{Destination, Output};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, second precision
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Line written to a log file (no styling)
pub fn file_line(timestamp: &str, level: Level, message: &str) -> String {
    format!("{} {}: {}", timestamp, level, message)
}

/// Line written to stdout/stderr, message wrapped in the level's style
pub fn console_line(timestamp: &str, level: Level, message: &str) -> String {
    format!("{} {}", timestamp, level.paint(message))
}

/// Logger with a severity threshold and a single output target
#[derive(Debug)]
pub struct LevelLogger {
    name: String,
    mode: Level,
    // also serializes emission so concurrent appends don't interleave
    output: Mutex<Output>,
    log_file: Option<PathBuf>,
    use_error: bool,
}

impl LevelLogger {
    /// Create a logger.
    ///
    /// An unknown `mode` silently becomes `warning`. `output` is validated
    /// lazily, on the first write that passes the filter. An empty
    /// `log_file` means no file is configured.
    pub fn new(
        name: impl Into<String>,
        mode: &str,
        output: &str,
        log_file: impl AsRef<Path>,
        use_error: bool,
    ) -> Self {
        let log_file = log_file.as_ref();
        LevelLogger {
            name: name.into(),
            mode: mode.parse().unwrap_or(Level::Warning),
            output: Mutex::new(Output::parse(output)),
            log_file: if log_file.as_os_str().is_empty() {
                None
            } else {
                Some(log_file.to_path_buf())
            },
            use_error,
        }
    }

    /// Mode `warning`, output `out`, no file, errors redirected to stderr
    pub fn with_defaults(name: impl Into<String>) -> Self {
        LevelLogger::new(name, "warning", "out", "", true)
    }

    pub fn from_config(cfg: &Config) -> Self {
        LevelLogger::new(
            cfg.name.as_str(),
            &cfg.mode,
            &cfg.output,
            cfg.log_file.as_deref().unwrap_or(Path::new("")),
            cfg.use_error,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Level {
        self.mode
    }

    /// Snapshot of the configured output
    pub fn output(&self) -> Output {
        self.lock_output().clone()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn use_error(&self) -> bool {
        self.use_error
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.mode.allows(level)
    }

    /// Log at the current mode; always passes the filter
    pub fn log(&self, message: &str) -> Result<(), Error> {
        match self.mode {
            Level::Error => self.error(message),
            Level::Warning => self.warning(message),
            Level::Info => self.info(message),
            Level::Debug => self.debug(message),
        }
    }

    pub fn debug(&self, message: &str) -> Result<(), Error> {
        self.write(Level::Debug, message)
    }

    pub fn info(&self, message: &str) -> Result<(), Error> {
        self.write(Level::Info, message)
    }

    pub fn warning(&self, message: &str) -> Result<(), Error> {
        self.write(Level::Warning, message)
    }

    pub fn error(&self, message: &str) -> Result<(), Error> {
        self.write(Level::Error, message)
    }

    /// Where a message at `level` would go, or `None` when it is filtered.
    ///
    /// Like [`LevelLogger::write`], this replaces an unknown configured
    /// output with `out` when the level passes.
    pub fn resolve_destination(&self, level: Level) -> Option<Destination> {
        let mut output = self.lock_output();
        self.resolve(&mut output, level)
    }

    /// Filter, route and emit one message.
    ///
    /// Filtered messages return `Ok(())`. File output with no configured
    /// path, or a failed open/append, is an error.
    pub fn write(&self, level: Level, message: &str) -> Result<(), Error> {
        let mut output = self.lock_output();
        let Some(destination) = self.resolve(&mut output, level) else {
            return Ok(());
        };

        let ts = timestamp();
        match destination {
            Destination::File => self.append(&file_line(&ts, level, message)),
            Destination::Stdout => {
                writeln!(io::stdout().lock(), "{}", console_line(&ts, level, message))?;
                Ok(())
            }
            Destination::Stderr => {
                writeln!(io::stderr().lock(), "{}", console_line(&ts, level, message))?;
                Ok(())
            }
        }
    }

    /// Install as the global `log` facade logger
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let filter = self.mode.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn resolve(&self, output: &mut Output, level: Level) -> Option<Destination> {
        if !self.mode.allows(level) {
            return None;
        }
        if level == Level::Error && *output == Output::Out && self.use_error {
            return Some(Destination::Stderr);
        }
        if !output.is_valid() {
            // persists for every later call
            *output = Output::Out;
        }
        Some(Destination::of(output))
    }

    fn append(&self, line: &str) -> Result<(), Error> {
        let path = self.log_file.as_ref().ok_or(Error::MissingLogFile)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    fn lock_output(&self) -> MutexGuard<'_, Output> {
        self.output.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Log for LevelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere to report a failure from inside the facade
            let _ = self.write(Level::from(record.level()), &record.args().to_string());
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

/// Load the environment and dotenv config, then build a logger named `name`
pub fn get_logger(name: impl Into<String>) -> LevelLogger {
    let cfg = Config {
        name: name.into(),
        ..Config::load(None)
    };
    LevelLogger::from_config(&cfg)
}
