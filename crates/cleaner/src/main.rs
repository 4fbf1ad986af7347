//! `dataviz-cleaner` binary entrypoint.
//!
//! Runs the critical-reading filter once over the local dataset and exits.
//! There are no CLI flags; paths default to the co-located file names.
//!
//! # Environment variables
//!
//! | Variable         | Required | Default             | Description            |
//! |------------------|----------|---------------------|------------------------|
//! | `CLEANER_INPUT`  | no       | `data.json`         | Readings dataset path  |
//! | `CLEANER_OUTPUT` | no       | `filtered_data.csv` | CSV output path        |

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dataviz_cleaner::CleanerError;
use dataviz_core::CoreError;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dataviz_cleaner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let input =
        PathBuf::from(std::env::var("CLEANER_INPUT").unwrap_or_else(|_| "data.json".into()));
    let output = PathBuf::from(
        std::env::var("CLEANER_OUTPUT").unwrap_or_else(|_| "filtered_data.csv".into()),
    );

    // A failed run is reported, not fatal: the process always exits normally.
    match dataviz_cleaner::run(&input, &output) {
        Ok(count) => {
            tracing::info!(count, "Script finished successfully");
        }
        Err(CleanerError::Core(CoreError::NotFound { path })) => {
            tracing::error!(path = %path.display(), "Input file not found");
        }
        Err(err) => {
            tracing::error!(error = %err, "An unexpected error occurred");
        }
    }
}
