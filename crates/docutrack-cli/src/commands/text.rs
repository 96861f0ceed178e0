//! Text command implementation.

use crate::cli::TextArgs;
use crate::error::Result;
use docutrack_extractor::Extractor;

/// Execute the text command.
///
/// Only decodes the document; no fields are extracted.
pub async fn execute_text(args: TextArgs, extractor: &Extractor) -> Result<()> {
    let text = extractor.decode_path(&args.file).await?;
    print!("{}", text);
    Ok(())
}
