use std::collections::HashMap;

use crate::models::DocumentFormat;
use crate::utils::PassportError;

/// One fixed-width field of an MRZ layout. `line` is 0-based; the range is
/// half-open in characters. `end == None` means "to the end of the line".
struct FieldSpec {
    name: &'static str,
    line: usize,
    start: usize,
    end: Option<usize>,
}

const fn field(name: &'static str, line: usize, start: usize, end: usize) -> FieldSpec {
    FieldSpec {
        name,
        line,
        start,
        end: Some(end),
    }
}

const fn open_field(name: &'static str, line: usize, start: usize) -> FieldSpec {
    FieldSpec {
        name,
        line,
        start,
        end: None,
    }
}

const TD1_FIELDS: &[FieldSpec] = &[
    field("document_type", 0, 0, 2),
    field("issuing_country", 0, 2, 5),
    field("document_number", 0, 5, 14),
    field("date_of_birth", 1, 0, 6),
    field("gender", 1, 7, 8),
    field("expiration_date", 1, 8, 14),
    field("nationality", 1, 15, 18),
    open_field("name_block", 2, 0),
];

const TD2_FIELDS: &[FieldSpec] = &[
    field("document_type", 0, 0, 2),
    field("issuing_country", 0, 2, 5),
    open_field("name_block", 0, 5),
    field("document_number", 1, 0, 9),
    field("nationality", 1, 10, 13),
    field("date_of_birth", 1, 13, 19),
    field("gender", 1, 20, 21),
    field("expiration_date", 1, 21, 27),
    field("personal_number", 1, 28, 35),
];

const TD3_FIELDS: &[FieldSpec] = &[
    field("passport_type", 0, 0, 2),
    field("issuing_country", 0, 2, 5),
    field("name_block", 0, 5, 44),
    field("passport_number", 1, 0, 9),
    field("nationality", 1, 10, 13),
    field("date_of_birth", 1, 13, 19),
    field("gender", 1, 20, 21),
    field("expiration_date", 1, 21, 27),
    field("personal_number", 1, 28, 42),
];

/// Raw fixed-offset substrings of an MRZ, keyed by field name. Values are
/// untouched: fillers and any stray characters survive until the
/// normalization step.
#[derive(Debug, Clone)]
pub struct RawFields {
    format: DocumentFormat,
    lines: Vec<String>,
    values: HashMap<&'static str, String>,
}

impl RawFields {
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

pub struct FieldSlicer;

impl FieldSlicer {
    /// Cut MRZ lines into the fixed-width fields of the given layout.
    ///
    /// Offsets come from a static per-format table; they are never derived
    /// from content. A field whose range extends past the actual end of
    /// its line is a structural error, not a silent short slice: the
    /// classifier's length check bounds whole lines, but an OCR line can
    /// still be "long enough" overall and short of one field's end.
    pub fn slice(lines: &[String], format: DocumentFormat) -> Result<RawFields, PassportError> {
        let specs = match format {
            DocumentFormat::TD1 => TD1_FIELDS,
            DocumentFormat::TD2 => TD2_FIELDS,
            DocumentFormat::TD3 => TD3_FIELDS,
            DocumentFormat::Unrecognized => {
                return Err(PassportError::UnrecognizedFormat(
                    "no field layout for unrecognized input".to_string(),
                ))
            }
        };

        let mut values = HashMap::with_capacity(specs.len());
        for spec in specs {
            let line = lines
                .get(spec.line)
                .ok_or(PassportError::StructuralError {
                    field: spec.name,
                    line: spec.line + 1,
                })?;
            let value =
                Self::slice_chars(line, spec.start, spec.end).ok_or(PassportError::StructuralError {
                    field: spec.name,
                    line: spec.line + 1,
                })?;
            values.insert(spec.name, value);
        }

        Ok(RawFields {
            format,
            lines: lines.to_vec(),
            values,
        })
    }

    // Character-based substring with bounds checking. Byte slicing would
    // panic on a non-ASCII boundary if the OCR step leaks one through.
    fn slice_chars(line: &str, start: usize, end: Option<usize>) -> Option<String> {
        let total = line.chars().count();
        let end = end.unwrap_or(total);
        if start > total || end > total || start > end {
            return None;
        }
        Some(line.chars().skip(start).take(end - start).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn td3_lines() -> Vec<String> {
        vec![
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<".to_string(),
            "L898902C<3UTO6908061F9406236<<<<<<<<<<<<<<<4".to_string(),
        ]
    }

    #[test]
    fn test_specimen_lines_are_44_chars() {
        for line in td3_lines() {
            assert_eq!(line.chars().count(), 44);
        }
    }

    #[test]
    fn test_td3_slicing() {
        let raw = FieldSlicer::slice(&td3_lines(), DocumentFormat::TD3).unwrap();
        assert_eq!(raw.format(), DocumentFormat::TD3);
        assert_eq!(raw.get("passport_type"), Some("P<"));
        assert_eq!(raw.get("issuing_country"), Some("UTO"));
        assert_eq!(
            raw.get("name_block"),
            Some("ERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<")
        );
        assert_eq!(raw.get("passport_number"), Some("L898902C<"));
        assert_eq!(raw.get("nationality"), Some("UTO"));
        assert_eq!(raw.get("date_of_birth"), Some("690806"));
        assert_eq!(raw.get("gender"), Some("F"));
        assert_eq!(raw.get("expiration_date"), Some("940623"));
        assert_eq!(raw.get("personal_number"), Some("<<<<<<<<<<<<<<"));
    }

    #[test]
    fn test_td1_slicing() {
        let lines = vec![
            "I<UTOD231458907<<<<<<<<<<<<<<<".to_string(),
            "7408122F1204159UTO<<<<<<<<<<<6".to_string(),
            "ERIKSSON<<ANNA<MARIA<<<<<<<<<<".to_string(),
        ];
        let raw = FieldSlicer::slice(&lines, DocumentFormat::TD1).unwrap();
        assert_eq!(raw.get("document_type"), Some("I<"));
        assert_eq!(raw.get("issuing_country"), Some("UTO"));
        assert_eq!(raw.get("document_number"), Some("D23145890"));
        assert_eq!(raw.get("date_of_birth"), Some("740812"));
        assert_eq!(raw.get("gender"), Some("F"));
        assert_eq!(raw.get("expiration_date"), Some("120415"));
        assert_eq!(raw.get("nationality"), Some("UTO"));
        assert_eq!(raw.get("name_block"), Some("ERIKSSON<<ANNA<MARIA<<<<<<<<<<"));
    }

    #[test]
    fn test_td2_name_block_runs_to_end_of_line() {
        let lines = vec![
            "I<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<".to_string(),
            "D231458907UTO7408122F1204159<<<<<<<2".to_string(),
        ];
        let raw = FieldSlicer::slice(&lines, DocumentFormat::TD2).unwrap();
        assert_eq!(raw.get("name_block"), Some("ERIKSSON<<ANNA<MARIA<<<<<<<<<<<"));
        assert_eq!(raw.get("document_number"), Some("D23145890"));
        assert_eq!(raw.get("personal_number"), Some("<<<<<<<"));
    }

    #[test]
    fn test_unrecognized_format_is_rejected() {
        let result = FieldSlicer::slice(&td3_lines(), DocumentFormat::Unrecognized);
        assert!(matches!(result, Err(PassportError::UnrecognizedFormat(_))));
    }

    #[test]
    fn test_short_line_is_a_structural_error() {
        // 40-character second line: long enough for most fields, short of
        // the TD3 personal number's end offset.
        let lines = vec![
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<".to_string(),
            "L898902C<3UTO6908061F9406236<<<<<<<<<<<<".to_string(),
        ];
        match FieldSlicer::slice(&lines, DocumentFormat::TD3) {
            Err(PassportError::StructuralError { field, line }) => {
                assert_eq!(field, "personal_number");
                assert_eq!(line, 2);
            }
            other => panic!("expected structural error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_line_is_a_structural_error() {
        let lines = vec!["I<UTOD231458907<<<<<<<<<<<<<<<".to_string()];
        assert!(matches!(
            FieldSlicer::slice(&lines, DocumentFormat::TD1),
            Err(PassportError::StructuralError { line: 2, .. })
        ));
    }
}
