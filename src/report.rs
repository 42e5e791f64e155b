use crate::models::{display_date, PassportRecord};
use chrono::NaiveDate;

/// Render a record as a human-readable sheet. Kept separate from parsing:
/// the core returns values, and whoever embeds it decides whether (and
/// where) to print.
pub fn render_report(record: &PassportRecord) -> String {
    let mut out = String::new();

    out.push_str("===============================================\n");
    out.push_str("        MRZ EXTRACTION REPORT\n");
    out.push_str("===============================================\n\n");

    out.push_str(&format!("  Format          : {}\n", record.format));
    out.push_str(&format!("  Document type   : {}\n", record.document_type));
    out.push_str(&format!("  Issuing country : {}\n", record.issuing_country));
    out.push_str(&format!("  Document number : {}\n", record.document_number));
    out.push_str(&format!("  Surname         : {}\n", record.surname));
    out.push_str(&format!("  Given names     : {}\n", record.given_names));
    out.push_str(&format!("  Nationality     : {}\n", record.nationality));
    out.push_str(&format!(
        "  Date of birth   : {}\n",
        date_or_dash(&record.date_of_birth)
    ));
    out.push_str(&format!("  Gender          : {}\n", record.gender));
    out.push_str(&format!(
        "  Expiration date : {}\n",
        date_or_dash(&record.expiration_date)
    ));
    if let Some(personal_number) = &record.personal_number {
        out.push_str(&format!("  Personal number : {}\n", personal_number));
    }

    if !record.warnings.is_empty() {
        out.push_str("\nWARNINGS:\n");
        for warning in &record.warnings {
            out.push_str(&format!("  - [{}] {}\n", warning.field, warning.message));
        }
    }

    out
}

fn date_or_dash(date: &Option<NaiveDate>) -> String {
    match date {
        Some(date) => display_date(date),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentFormat;
    use crate::parsing::{FieldSlicer, RecordAssembler};
    use chrono::NaiveDate;

    #[test]
    fn test_report_lists_fields_and_warnings() {
        let lines = vec![
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<".to_string(),
            "L898902C<3UTO69O8O61F9406236<<<<<<<<<<<<<<<4".to_string(),
        ];
        let raw = FieldSlicer::slice(&lines, DocumentFormat::TD3).unwrap();
        let record =
            RecordAssembler::assemble_on(&raw, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        let report = render_report(&record);
        assert!(report.contains("Surname         : ERIKSSON"));
        assert!(report.contains("Expiration date : 23/06/1994"));
        assert!(report.contains("Date of birth   : -"));
        assert!(report.contains("WARNINGS:"));
        assert!(report.contains("[date_of_birth]"));
    }
}
