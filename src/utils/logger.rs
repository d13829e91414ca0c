use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::error::Result;

/// Appends plain-text records to the given log file. The console is left
/// to the per-recipient progress lines, so the subscriber writes to the
/// file only.
pub fn init_file_logger<P: AsRef<Path>>(log_file: P, verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("small_reminder=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("small_reminder=info"))
    };

    // a = append. We want a history across scheduled runs.
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
