//! End-to-end tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::docx::build_docx;
    use crate::{
        extract_fields, extract_fields_parallel, extract_text, extract_text_from_reader,
        Extractor, ExtractorConfig, ExtractorError, EXTRACTION_METHOD,
    };
    use docutrack_domain::{ContractRecord, ExtractionStatus, ExtractionTrigger};
    use proptest::prelude::*;

    const LEASE_TEXT: &str = "RESIDENTIAL LEASE AGREEMENT\n\
        This Lease Agreement is made between Acme Properties and Jane Doe.\n\
        Monthly rent: $2,450.00, deposit $4,900.00\n\
        Commencing January 1, 2024 and ending 31/12/2024.\n\
        The tenant also signs an NDA.\n\
        Signature: Jane Doe\n\
        Signature: Robert Acme\n";

    #[test]
    fn test_full_lease_extraction() {
        let fields = extract_fields(LEASE_TEXT);

        assert_eq!(fields.contract_type, "Lease Agreement");
        assert_eq!(fields.party_names, vec!["Acme Properties", "Jane Doe"]);
        assert_eq!(fields.amount.as_deref(), Some("$2,450.00"));
        assert_eq!(fields.date.as_deref(), Some("January 1, 2024"));
        assert_eq!(fields.expiration_date.as_deref(), Some("31/12/2024"));
        assert_eq!(fields.signatures, vec!["Jane Doe", "Robert Acme"]);
        assert_eq!(fields.text_length(), Some(LEASE_TEXT.chars().count() as i64));
        assert_eq!(fields.extraction_method(), Some(EXTRACTION_METHOD));
    }

    #[test]
    fn test_confidentiality_agreement_classifies_as_nda() {
        let fields = extract_fields("CONFIDENTIALITY AGREEMENT between Hooli and Raviga");
        assert_eq!(fields.contract_type, "Non-Disclosure Agreement");
        assert_eq!(fields.party_names, vec!["Hooli", "Raviga"]);
    }

    #[test]
    fn test_unknown_contract() {
        let fields = extract_fields("Meeting notes, nothing contractual here.");
        assert_eq!(fields.contract_type, "Unknown");
        assert!(fields.is_unknown_type());
    }

    #[test]
    fn test_date_pair_rule() {
        let fields = extract_fields("signed 01/02/2020 ... expires 05/06/2021");
        assert_eq!(fields.date.as_deref(), Some("01/02/2020"));
        assert_eq!(fields.expiration_date.as_deref(), Some("05/06/2021"));

        let fields = extract_fields("signed 01/02/2020");
        assert_eq!(fields.date.as_deref(), Some("01/02/2020"));
        assert_eq!(fields.expiration_date, None);
    }

    #[test]
    fn test_amount_first_rule() {
        let fields = extract_fields("$100 and later $200");
        assert_eq!(fields.amount.as_deref(), Some("$100"));
    }

    #[test]
    fn test_party_rule() {
        let fields = extract_fields("This agreement is between Acme Corp. and Globex Inc");
        assert_eq!(fields.party_names, vec!["Acme Corp.", "Globex Inc"]);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(extract_fields(LEASE_TEXT), extract_fields(LEASE_TEXT));
    }

    #[test]
    fn test_docx_round_trip_and_entry_point_equivalence() {
        let bytes = build_docx(&["Hello", "", "World"]);

        let from_slice = extract_text(&bytes).unwrap();
        let from_reader = extract_text_from_reader(bytes.as_slice()).unwrap();

        assert_eq!(from_slice, "Hello\n\nWorld\n");
        assert_eq!(from_slice, from_reader);
    }

    #[test]
    fn test_decode_failure_is_not_empty_text() {
        let result = extract_text(b"PK\x03\x04 truncated zip");
        assert!(matches!(result, Err(ExtractorError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_document_to_fields() {
        let bytes = build_docx(&[
            "EMPLOYMENT AGREEMENT",
            "This agreement is entered into between Initech and Peter Gibbons.",
            "Salary: $85,000.00 per year starting March 15, 2024.",
            "",
            "Signature: Peter Gibbons",
        ]);

        let text = extract_text(&bytes).unwrap();
        let fields = extract_fields(&text);

        assert_eq!(fields.contract_type, "Employment Contract");
        assert_eq!(fields.party_names, vec!["Initech", "Peter Gibbons"]);
        assert_eq!(fields.amount.as_deref(), Some("$85,000.00"));
        assert_eq!(fields.date.as_deref(), Some("March 15, 2024"));
        assert_eq!(fields.expiration_date, None);
        assert_eq!(fields.signatures, vec!["Peter Gibbons"]);
    }

    #[tokio::test]
    async fn test_upload_then_reprocess_lifecycle() {
        let bytes = build_docx(&["Consulting Agreement", "Fee $1,000"]);
        let extractor = Extractor::new(ExtractorConfig::default());
        let cap = extractor.config().stored_text_cap;

        let mut record = ContractRecord::new("consulting.docx", bytes.len() as u64);

        // Upload
        let outcome = extractor.extract_document(bytes.clone()).await.unwrap();
        assert!(record.apply_extraction(
            outcome.fields,
            &outcome.text,
            ExtractionTrigger::Automatic,
            cap
        ));
        assert_eq!(record.status, ExtractionStatus::AutoExtracted);

        // Manual edit
        let mut edited = extract_fields("");
        edited.contract_type = "Service Agreement".to_string();
        edited.amount = Some("$1,500".to_string());
        record.apply_manual_edit(edited);

        // Automatic re-run leaves the manual values alone
        let outcome = extractor.extract_document(bytes.clone()).await.unwrap();
        assert!(!record.apply_extraction(
            outcome.fields,
            &outcome.text,
            ExtractionTrigger::Automatic,
            cap
        ));
        assert_eq!(
            record.fields.as_ref().and_then(|f| f.amount.as_deref()),
            Some("$1,500")
        );

        // Explicit reprocess replaces them
        let outcome = extractor.extract_document(bytes).await.unwrap();
        assert!(record.apply_extraction(
            outcome.fields,
            &outcome.text,
            ExtractionTrigger::Reprocess,
            cap
        ));
        assert_eq!(record.status, ExtractionStatus::AutoExtracted);
        assert_eq!(
            record.fields.as_ref().and_then(|f| f.amount.as_deref()),
            Some("$1,000")
        );
    }

    #[test]
    fn test_stored_text_cap_applies() {
        let paragraph = "x".repeat(100);
        let paragraphs: Vec<&str> = std::iter::repeat(paragraph.as_str()).take(3).collect();
        let bytes = build_docx(&paragraphs);

        let mut config = ExtractorConfig::default();
        config.stored_text_cap = 50;
        let extractor = Extractor::new(config);

        let outcome = tokio_test::block_on(extractor.extract_document(bytes)).unwrap();
        assert_eq!(outcome.text.chars().count(), 303);
        assert_eq!(outcome.stored_text.chars().count(), 50);
        assert!(outcome.is_truncated());
    }

    proptest! {
        #[test]
        fn prop_extract_fields_is_total(text in any::<String>()) {
            let fields = extract_fields(&text);
            prop_assert_eq!(fields.text_length(), Some(text.chars().count() as i64));
            prop_assert!(!fields.contract_type.is_empty());
            if fields.expiration_date.is_some() {
                prop_assert!(fields.date.is_some());
            }
            prop_assert_eq!(fields.party_names.len() % 2, 0);
        }

        #[test]
        fn prop_extract_fields_is_deterministic(text in "[ -~\\n]{0,200}") {
            let first = extract_fields(&text);
            prop_assert_eq!(&first, &extract_fields(&text));
            prop_assert_eq!(&first, &extract_fields_parallel(&text));
        }
    }
}
