use stockmax::app::{resident_memory_bytes, to_mib};
use stockmax::prelude::*;

fn main() {
    CliApp::new("stockmax")
        .with_args(RunConfig::from_args)
        .run(run_max_value);
}

/// Reduce the configured file and print the best record
async fn run_max_value(mut writers: Writers, config: RunConfig) -> Result<(), AppError> {
    let outcome = MaxValueSession::new(config.batch_size)
        .run_file(&config.input)
        .await?;

    write_result(outcome.best.as_ref(), &mut writers.stdout).await?;

    // Diagnostic only, goes to stderr so stdout stays machine readable
    match resident_memory_bytes() {
        Some(bytes) => eprintln!(
            "Done. {} records in {} batches, memory usage approximately {} MiB",
            outcome.summary.records_read,
            outcome.summary.batches_emitted,
            to_mib(bytes)
        ),
        None => eprintln!(
            "Done. {} records in {} batches",
            outcome.summary.records_read, outcome.summary.batches_emitted
        ),
    }

    Ok(())
}
