use chrono::{Local, NaiveDate};

use crate::models::{ParseWarning, PassportRecord};
use crate::parsing::fields::RawFields;
use crate::parsing::normalize::{normalize_gender, parse_date_on, sanitize, split_name_block};

/// Turns raw fixed-offset substrings into a normalized record. This is
/// the one place that knows which fields exist for which layout: TD1 has
/// no personal number, and TD3 names its document fields after the
/// passport. A field that fails to normalize degrades to null/Unknown
/// with a warning; assembly itself never fails.
pub struct RecordAssembler;

impl RecordAssembler {
    pub fn assemble(raw: &RawFields) -> PassportRecord {
        Self::assemble_on(raw, Local::now().naive_local().date())
    }

    /// Assemble against an explicit reference date. Two-digit MRZ years
    /// are disambiguated relative to `today`.
    pub fn assemble_on(raw: &RawFields, today: NaiveDate) -> PassportRecord {
        let mut warnings = Vec::new();

        let document_type = sanitize(Self::first(raw, &["document_type", "passport_type"]));
        let document_number = sanitize(Self::first(raw, &["document_number", "passport_number"]));
        let issuing_country = sanitize(raw.get("issuing_country").unwrap_or(""));
        let nationality = sanitize(raw.get("nationality").unwrap_or(""));

        let (surname, given_names) = split_name_block(raw.get("name_block").unwrap_or(""));

        let date_of_birth = Self::date_field(raw, "date_of_birth", true, today, &mut warnings);
        let expiration_date =
            Self::date_field(raw, "expiration_date", false, today, &mut warnings);

        let gender = normalize_gender(raw.get("gender").unwrap_or(""));

        // Present on TD2/TD3 even when it sanitizes down to nothing;
        // absent on TD1, which has no such field.
        let personal_number = raw.get("personal_number").map(sanitize);

        PassportRecord {
            format: raw.format(),
            document_type,
            issuing_country,
            document_number,
            surname,
            given_names,
            nationality,
            date_of_birth,
            gender,
            expiration_date,
            personal_number,
            raw_mrz_lines: raw.lines().to_vec(),
            warnings,
        }
    }

    fn first<'a>(raw: &'a RawFields, names: &[&str]) -> &'a str {
        names
            .iter()
            .find_map(|name| raw.get(name))
            .unwrap_or("")
    }

    fn date_field(
        raw: &RawFields,
        field: &'static str,
        fix_century: bool,
        today: NaiveDate,
        warnings: &mut Vec<ParseWarning>,
    ) -> Option<NaiveDate> {
        let text = raw.get(field).unwrap_or("");
        let parsed = parse_date_on(text, fix_century, today);
        if parsed.is_none() {
            warnings.push(ParseWarning {
                field,
                message: format!("cannot read '{}' as a YYMMDD date", text),
            });
        }
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentFormat, Gender};
    use crate::parsing::fields::FieldSlicer;

    fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_td3_specimen_assembly() {
        let lines = vec![
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<".to_string(),
            "L898902C<3UTO6908061F9406236<<<<<<<<<<<<<<<4".to_string(),
        ];
        let raw = FieldSlicer::slice(&lines, DocumentFormat::TD3).unwrap();
        let record = RecordAssembler::assemble_on(&raw, reference_day());

        assert_eq!(record.format, DocumentFormat::TD3);
        assert_eq!(record.document_type, "P");
        assert_eq!(record.issuing_country, "UTO");
        assert_eq!(record.document_number, "L898902C");
        assert_eq!(record.surname, "ERIKSSON");
        assert_eq!(record.given_names, "ANNA MARIA");
        assert_eq!(record.nationality, "UTO");
        assert_eq!(
            record.date_of_birth,
            NaiveDate::from_ymd_opt(1969, 8, 6)
        );
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(
            record.expiration_date,
            NaiveDate::from_ymd_opt(1994, 6, 23)
        );
        assert_eq!(record.personal_number.as_deref(), Some(""));
        assert_eq!(record.raw_mrz_lines, lines);
        assert!(record.warnings.is_empty());
    }

    #[test]
    fn test_td1_specimen_assembly() {
        let lines = vec![
            "I<UTOD231458907<<<<<<<<<<<<<<<".to_string(),
            "7408122F1204159UTO<<<<<<<<<<<6".to_string(),
            "ERIKSSON<<ANNA<MARIA<<<<<<<<<<".to_string(),
        ];
        let raw = FieldSlicer::slice(&lines, DocumentFormat::TD1).unwrap();
        let record = RecordAssembler::assemble_on(&raw, reference_day());

        assert_eq!(record.format, DocumentFormat::TD1);
        assert_eq!(record.document_type, "I");
        assert_eq!(record.document_number, "D23145890");
        assert_eq!(record.surname, "ERIKSSON");
        assert_eq!(record.given_names, "ANNA MARIA");
        assert_eq!(
            record.date_of_birth,
            NaiveDate::from_ymd_opt(1974, 8, 12)
        );
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(
            record.expiration_date,
            NaiveDate::from_ymd_opt(2012, 4, 15)
        );
        // TD1 carries no personal number field at all.
        assert_eq!(record.personal_number, None);
        assert!(record.warnings.is_empty());
    }

    #[test]
    fn test_bad_date_degrades_to_null_with_warning() {
        // Birth date digits corrupted by OCR; the rest of the record must
        // still come through.
        let lines = vec![
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<".to_string(),
            "L898902C<3UTO69O8O61F9406236<<<<<<<<<<<<<<<4".to_string(),
        ];
        let raw = FieldSlicer::slice(&lines, DocumentFormat::TD3).unwrap();
        let record = RecordAssembler::assemble_on(&raw, reference_day());

        assert_eq!(record.date_of_birth, None);
        assert_eq!(record.surname, "ERIKSSON");
        assert_eq!(
            record.expiration_date,
            NaiveDate::from_ymd_opt(1994, 6, 23)
        );
        assert_eq!(record.warnings.len(), 1);
        assert_eq!(record.warnings[0].field, "date_of_birth");
    }
}
