//! Fields command implementation.

use crate::cli::FieldsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docutrack_extractor::Extractor;
use std::fs;
use std::io::{self, Read};

/// Execute the fields command.
pub fn execute_fields(args: FieldsArgs, extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    let text = read_input(args)?;
    let fields = extractor.extract_from_text(&text);
    println!("{}", formatter.format_fields(&fields)?);
    Ok(())
}

fn read_input(args: FieldsArgs) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(path) = args.file {
        Ok(fs::read_to_string(path)?)
    } else if let Some(text) = args.text {
        Ok(text)
    } else {
        Err(CliError::InvalidInput(
            "Must specify TEXT, --file or --stdin".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_inline_text() {
        let args = FieldsArgs {
            text: Some("Lease Agreement".to_string()),
            file: None,
            stdin: false,
        };
        assert_eq!(read_input(args).unwrap(), "Lease Agreement");
    }

    #[test]
    fn test_read_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "between Acme and Globex").unwrap();

        let args = FieldsArgs {
            text: None,
            file: Some(file.path().to_path_buf()),
            stdin: false,
        };
        assert_eq!(read_input(args).unwrap(), "between Acme and Globex");
    }

    #[test]
    fn test_no_input() {
        let args = FieldsArgs {
            text: None,
            file: None,
            stdin: false,
        };
        assert!(matches!(read_input(args), Err(CliError::InvalidInput(_))));
    }
}
