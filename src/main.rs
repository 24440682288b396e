//! Runs the manifest cleaning pipeline on the default paths.
//!
//! Takes no arguments. Failures are logged and the process still exits
//! successfully.

mod logging;

use titanic_prep::config::PipelineConfig;
use titanic_prep::run;
use tracing::error;

fn main() {
    logging::init_logging();

    if let Err(err) = run(&PipelineConfig::default()) {
        error!("[ERROR] {}", err);
    }
}
