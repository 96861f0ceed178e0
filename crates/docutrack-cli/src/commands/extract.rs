//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docutrack_extractor::{DocumentExtraction, Extractor, ExtractorError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

type FileOutcome = (usize, PathBuf, std::result::Result<DocumentExtraction, ExtractorError>);

/// Execute the extract command.
///
/// Files are processed concurrently and reported in the order given.
/// Every file is attempted before a failure is returned.
pub async fn execute_extract(
    args: ExtractArgs,
    extractor: Arc<Extractor>,
    formatter: &Formatter,
) -> Result<()> {
    let total = args.files.len();
    let outcomes = run_all(args.files, extractor).await?;

    let mut failed = 0;
    for (_, path, outcome) in outcomes {
        let file = path.display().to_string();
        match outcome {
            Ok(extraction) => {
                println!("{}", formatter.format_document(&file, &extraction.fields)?);
            }
            Err(e) => {
                failed += 1;
                warn!("Extraction failed for {}: {}", file, e);
                eprintln!("{}", formatter.error(&format!("{}: {}", file, e)));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::BatchFailed { failed, total });
    }
    Ok(())
}

async fn run_all(files: Vec<PathBuf>, extractor: Arc<Extractor>) -> Result<Vec<FileOutcome>> {
    let mut tasks = JoinSet::new();
    for (index, path) in files.into_iter().enumerate() {
        let extractor = Arc::clone(&extractor);
        tasks.spawn(async move {
            let outcome = extractor.extract_path(&path).await;
            (index, path, outcome)
        });
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let outcome = joined.map_err(|e| ExtractorError::Task(e.to_string()))?;
        debug!("Finished {}", outcome.1.display());
        outcomes.push(outcome);
    }

    outcomes.sort_by_key(|(index, _, _)| *index);
    Ok(outcomes)
}
