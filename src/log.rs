use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::conf::Log;
use crate::erx::{self, ResultEX};

static _LOG_WORKER_GUARD: OnceLock<Mutex<Vec<WorkerGuard>>> = OnceLock::new();

/// install the global tracing subscriber described by `log_conf`
///
/// a second call, or a call after another subscriber was installed, is a no-op
pub fn logging_initialize(log_conf: &Log) -> ResultEX {
    let thrower = "log::logging_initialize";
    if _LOG_WORKER_GUARD.get().is_some() {
        return Ok(());
    }

    let mut guards: Vec<WorkerGuard> = vec![];

    let console = if log_conf.console {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);
        Some(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(true))
    } else {
        None
    };

    let logs_dir = log_conf.dirs.trim();
    let persist = if logs_dir.len() > 0 {
        if !Path::new(logs_dir).is_dir() {
            return Err(erx::Erx::new(thrower, &format!("log dir is not a directory: {}", logs_dir)));
        }
        let prefix = file_prefix(&crate::conf::rebit().read().map(|r| r.name.clone()).unwrap_or_default());
        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(logs_dir, prefix));
        guards.push(guard);
        Some(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
    } else {
        None
    };

    let filter = tracing_subscriber::EnvFilter::try_new(&log_conf.level).map_err(erx::amp(thrower))?;

    if _LOG_WORKER_GUARD.set(Mutex::new(guards)).is_err() {
        return Ok(());
    }

    if let Err(e) = tracing_subscriber::registry().with(console).with(persist).with(filter).try_init() {
        tracing::debug!("subscriber already installed: {}", e);
    }
    Ok(())
}

/// daily rolling file name, the appender adds the date
fn file_prefix(app_name: &str) -> String {
    format!("{}.log", app_name)
}
