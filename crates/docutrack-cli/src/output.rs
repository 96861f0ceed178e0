//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docutrack_domain::{ExtractedFields, MetadataValue};
use serde_json::{json, Map, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const MISSING: &str = "-";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extracted fields.
    pub fn format_fields(&self, fields: &ExtractedFields) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&fields_json(fields))?),
            OutputFormat::Table => Ok(self.format_fields_table(fields)),
            OutputFormat::Quiet => Ok(fields.contract_type.clone()),
        }
    }

    /// Format the fields extracted from a named file.
    pub fn format_document(&self, file: &str, fields: &ExtractedFields) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = fields_json(fields);
                if let Value::Object(map) = &mut value {
                    map.insert("file".to_string(), Value::String(file.to_string()));
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.colorize(file, "cyan"),
                self.format_fields_table(fields)
            )),
            OutputFormat::Quiet => Ok(fields.contract_type.clone()),
        }
    }

    /// Format fields as a two-column table.
    fn format_fields_table(&self, fields: &ExtractedFields) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        builder.push_record(["Contract Type", fields.contract_type.as_str()]);
        builder.push_record(["Parties", join_or_missing(&fields.party_names).as_str()]);
        builder.push_record(["Amount", fields.amount.as_deref().unwrap_or(MISSING)]);
        builder.push_record(["Date", fields.date.as_deref().unwrap_or(MISSING)]);
        builder.push_record([
            "Expiration Date",
            fields.expiration_date.as_deref().unwrap_or(MISSING),
        ]);
        builder.push_record(["Signatures", join_or_missing(&fields.signatures).as_str()]);

        for (key, value) in &fields.metadata {
            builder.push_record([key.clone(), value.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON view of extracted fields, keyed the way API clients expect.
pub fn fields_json(fields: &ExtractedFields) -> Value {
    let other_fields: Map<String, Value> = fields
        .metadata
        .iter()
        .map(|(key, value)| {
            let value = match value {
                MetadataValue::Integer(n) => json!(n),
                MetadataValue::Text(s) => json!(s),
            };
            (key.clone(), value)
        })
        .collect();

    json!({
        "contractType": fields.contract_type,
        "partyNames": fields.party_names,
        "amount": fields.amount,
        "date": fields.date,
        "expirationDate": fields.expiration_date,
        "signatures": fields.signatures,
        "otherFields": other_fields,
    })
}

fn join_or_missing(values: &[String]) -> String {
    if values.is_empty() {
        MISSING.to_string()
    } else {
        values.join(", ")
    }
}
