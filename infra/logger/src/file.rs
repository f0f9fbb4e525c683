//! Rolling file sink configuration for native targets.

use std::fs;
use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::error::LoggerError;

const FILE_SUFFIX: &str = "log";
const DEFAULT_KEEP: usize = 10;

/// Where and how log files are written.
///
/// Attach one to a builder with [`LoggerBuilder::file`](crate::LoggerBuilder::file).
/// Files land in `dir` as `<name>.<date>.log`, rotated daily unless
/// configured otherwise, with the oldest files pruned past the retention
/// count.
#[derive(Debug, Clone)]
pub struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    keep: usize,
    json: bool,
}

impl FileOutput {
    /// A daily-rotated sink under `dir`, keeping the last ten files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), rotation: Rotation::DAILY, keep: DEFAULT_KEEP, json: false }
    }

    /// Change how often a new file is started.
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// How many rotated files to retain before pruning. Must be at least one.
    #[must_use]
    pub const fn keep(mut self, count: usize) -> Self {
        self.keep = count;
        self
    }

    /// Write newline-delimited JSON instead of the plain text format.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    pub(crate) const fn json_lines(&self) -> bool {
        self.json
    }

    /// Creates the log directory and opens the rolling appender, with `name`
    /// as the file prefix.
    pub(crate) fn appender(&self, name: &str) -> Result<RollingFileAppender, LoggerError> {
        if self.keep == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "file retention must keep at least one file".into(),
            });
        }

        fs::create_dir_all(&self.dir).map_err(|e| LoggerError::Internal {
            message: format!("cannot create log directory {}: {e}", self.dir.display()).into(),
        })?;

        let appender = RollingFileAppender::builder()
            .rotation(self.rotation.clone())
            .filename_prefix(name)
            .filename_suffix(FILE_SUFFIX)
            .max_log_files(self.keep)
            .build(&self.dir)?;

        Ok(appender)
    }
}
