//! # Logger
//!
//! Tracing setup shared by every binary in the workspace.
//!
//! The global subscriber is assembled through [`Logger::builder`]: name it,
//! pick the sinks, call [`init`](LoggerBuilder::init). Terminal output is on
//! by default. On native targets a [`FileOutput`] adds a rolling log file fed
//! through a non-blocking background worker; in the browser the terminal sink
//! becomes the developer console via `tracing-web`.
//!
//! Filtering follows `RUST_LOG` when present, with the builder level as the
//! default, or an explicit directive string set through
//! [`env_filter`](LoggerBuilder::env_filter).
//!
//! ## Example
//!
//! ```rust
//! use folio_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("folio-demo")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;
#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use crate::error::LoggerError;
#[cfg(not(target_arch = "wasm32"))]
pub use crate::file::FileOutput;
pub use tracing::level_filters::LevelFilter;
#[cfg(not(target_arch = "wasm32"))]
pub use tracing_appender::rolling::Rotation;

#[cfg(not(target_arch = "wasm32"))]
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
#[cfg(target_arch = "wasm32")]
use tracing_web::MakeWebConsoleWriter;

/// Builder stage before a name has been chosen.
#[derive(Debug, Default)]
pub struct Unnamed;

/// Builder stage carrying the chosen subscriber name, used as the log file
/// prefix and reported on startup.
#[derive(Debug)]
pub struct Named(String);

mod sealed {
    pub trait Stage {}

    impl Stage for super::Unnamed {}
    impl Stage for super::Named {}
}

/// Configures and installs the global tracing subscriber.
///
/// The type parameter tracks whether [`name`](LoggerBuilder::name) has been
/// called yet; `init` only exists once it has.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct LoggerBuilder<S: sealed::Stage = Unnamed> {
    stage: S,
    console: bool,
    level: LevelFilter,
    filter: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    file: Option<FileOutput>,
}

impl LoggerBuilder<Unnamed> {
    /// Names the subscriber, unlocking [`init`](LoggerBuilder::init).
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder {
            stage: Named(name.into()),
            console: self.console,
            level: self.level,
            filter: self.filter,
            #[cfg(not(target_arch = "wasm32"))]
            file: self.file,
        }
    }
}

impl<S: sealed::Stage> LoggerBuilder<S> {
    /// Default level for events no filter directive matches. `INFO` unless
    /// overridden.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Replaces the `RUST_LOG` lookup with a fixed directive string such as
    /// `"folio=debug,hyper=info"`.
    ///
    /// An unparsable string surfaces as an error from
    /// [`init`](LoggerBuilder::init).
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    /// Toggles the terminal sink (the browser console on `wasm32`). On by
    /// default.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Adds a rolling file sink.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn file(mut self, output: FileOutput) -> Self {
        self.file = Some(output);
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the configured subscriber as the global default.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, a bad
    /// filter string, or a configuration with every sink disabled, and
    /// [`LoggerError::Subscriber`] when a global subscriber is already
    /// installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = self.stage;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "logger name cannot be empty".into(),
            });
        }

        let filter = match self.filter {
            Some(directives) => EnvFilter::builder()
                .with_default_directive(self.level.into())
                .parse(&directives)
                .map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("bad filter directives '{directives}': {e}").into(),
                })?,
            None => EnvFilter::builder().with_default_directive(self.level.into()).from_env_lossy(),
        };

        let mut sinks = Vec::new();

        if self.console {
            #[cfg(not(target_arch = "wasm32"))]
            sinks.push(layer().compact().with_ansi(true).boxed());

            // Wall-clock reads panic in the browser, so timestamps stay off.
            #[cfg(target_arch = "wasm32")]
            sinks.push(
                layer()
                    .with_ansi(false)
                    .without_time()
                    .with_writer(MakeWebConsoleWriter::new())
                    .boxed(),
            );
        }

        #[cfg(not(target_arch = "wasm32"))]
        let guard = match self.file {
            Some(output) => {
                let (writer, guard) = tracing_appender::non_blocking(output.appender(&name)?);
                let sink = layer().with_writer(writer).with_ansi(false);
                sinks.push(if output.json_lines() { sink.json().boxed() } else { sink.boxed() });
                Some(guard)
            }
            None => None,
        };

        if sinks.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "every sink is disabled, nothing would be logged".into(),
            });
        }

        tracing_subscriber::registry().with(filter).with(sinks).try_init()?;
        tracing::debug!(name = %name, "Tracing subscriber installed");

        Ok(Logger {
            #[cfg(not(target_arch = "wasm32"))]
            _guard: guard,
        })
    }
}

/// Handle over the installed subscriber.
///
/// On native targets it owns the file worker guard; drop it only at shutdown
/// or buffered log lines are lost.
#[must_use = "dropping this handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    #[cfg(not(target_arch = "wasm32"))]
    _guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a fresh [`LoggerBuilder`] with the terminal sink enabled at
    /// `INFO`.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            stage: Unnamed,
            console: true,
            level: LevelFilter::INFO,
            filter: None,
            #[cfg(not(target_arch = "wasm32"))]
            file: None,
        }
    }
}
