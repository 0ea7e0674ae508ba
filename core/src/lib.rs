use std::path::Path;

use log::{LevelFilter, SetLoggerError};
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub mod cipher;
pub mod config;
pub mod constants;
pub mod modals;
pub mod pattern;
pub mod timeline;

const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

/// Initializes the process-wide logger.
///
/// Always attaches a stderr appender filtered to `log_level`; when `log_file`
/// is given, a file appender capturing everything down to trace is added as
/// well so a quiet console run still leaves a full record on disk.
///
/// Must be called at most once per process (log4rs rejects re-initialization).
pub fn init_logging(log_level: LevelFilter, log_file: Option<&Path>) -> Result<(), SetLoggerError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
        .build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(log_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root_builder = Root::builder().appender("stderr");
    let mut root_level = log_level;

    if let Some(path) = log_file {
        match FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
            .build(path)
        {
            Ok(logfile) => {
                config_builder = config_builder
                    .appender(Appender::builder().build("logfile", Box::new(logfile)));
                root_builder = root_builder.appender("logfile");
                root_level = LevelFilter::Trace;
            }
            Err(e) => {
                eprintln!("Failed to open log file {}: {}", path.display(), e);
            }
        }
    }

    let config = config_builder
        .build(root_builder.build(root_level))
        .expect("logger config is statically valid");

    let _handle = log4rs::init_config(config)?;

    Ok(())
}
