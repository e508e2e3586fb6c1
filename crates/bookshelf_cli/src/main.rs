//! Catalog workflow driver.
//!
//! # Responsibility
//! - Run the scripted workflow against a fresh store written to `books.json`.
//! - Log any failure with its detail, then always log elapsed time.
//! - Exit with status 0 on the normal path, even after a logged failure.

use bookshelf_core::{
    init_logging, run_workflow, CoreConfig, ServiceResult, WorkflowConfig, WorkflowReport,
};
use log::{error, info};
use std::time::Instant;

fn main() {
    let config = CoreConfig::default();
    if let Err(err) = init_logging(&config.log_level, config.log_target.clone()) {
        eprintln!("bookshelf: logging unavailable: {err}");
    }

    drive(&config, &WorkflowConfig::default());
}

/// Runs the workflow once and logs its outcome plus elapsed time.
///
/// Failures are logged, never propagated.
fn drive(config: &CoreConfig, workflow: &WorkflowConfig) -> Option<WorkflowReport> {
    let started_at = Instant::now();
    info!(
        "event=driver_start module=cli status=start version={}",
        bookshelf_core::core_version()
    );

    let outcome = match execute(config, workflow) {
        Ok(report) => {
            info!(
                "event=driver_done module=cli status=ok merges={} rounds={} books={} complexity={}",
                report.merges,
                report.optimization_rounds,
                report.books_remaining,
                report.final_complexity
            );
            Some(report)
        }
        Err(err) => {
            error!("event=driver_done module=cli status=error error={err}");
            None
        }
    };

    info!(
        "event=driver_elapsed module=cli status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    outcome
}

fn execute(config: &CoreConfig, workflow: &WorkflowConfig) -> ServiceResult<WorkflowReport> {
    // Each run starts empty; a previous `books.json` is overwritten, not read.
    let mut service = config.fresh_service();
    let mut rng = rand::thread_rng();
    run_workflow(&mut service, workflow, &mut rng)
}
