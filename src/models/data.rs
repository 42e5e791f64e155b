use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentFormat {
    TD1,          // ID Card, 3 MRZ lines of 30 characters
    TD2,          // ID Card, 2 MRZ lines of 36 characters
    TD3,          // Passport, 2 MRZ lines of 44 characters
    Unrecognized, // Line count/length matches no known layout
}

impl DocumentFormat {
    pub fn mrz_lines(&self) -> usize {
        match self {
            DocumentFormat::TD1 => 3,
            DocumentFormat::TD2 => 2,
            DocumentFormat::TD3 => 2,
            DocumentFormat::Unrecognized => 0,
        }
    }

    pub fn mrz_chars_per_line(&self) -> usize {
        match self {
            DocumentFormat::TD1 => 30,
            DocumentFormat::TD2 => 36,
            DocumentFormat::TD3 => 44,
            DocumentFormat::Unrecognized => 0,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocumentFormat::TD1 => write!(f, "TD1"),
            DocumentFormat::TD2 => write!(f, "TD2"),
            DocumentFormat::TD3 => write!(f, "TD3"),
            DocumentFormat::Unrecognized => write!(f, "Unrecognized"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
            Gender::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A non-fatal, per-field normalization problem. The record is still
/// produced; the offending field is left null/Unknown.
#[derive(Debug, Clone, Serialize)]
pub struct ParseWarning {
    pub field: &'static str,
    pub message: String,
}

/// Identity data recovered from the machine readable zone of a travel
/// document. Field names are canonical across layouts; `personal_number`
/// does not exist on TD1 documents. Never mutated after assembly.
#[derive(Debug, Clone, Serialize)]
pub struct PassportRecord {
    pub format: DocumentFormat,
    pub document_type: String,
    pub issuing_country: String,
    pub document_number: String,
    pub surname: String,
    pub given_names: String,
    pub nationality: String,
    #[serde(serialize_with = "serialize_opt_date")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    #[serde(serialize_with = "serialize_opt_date")]
    pub expiration_date: Option<NaiveDate>,
    pub personal_number: Option<String>,
    pub raw_mrz_lines: Vec<String>,
    pub warnings: Vec<ParseWarning>,
}

/// Dates are reported in DD/MM/YYYY form.
pub fn display_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn serialize_opt_date<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&display_date(date)),
        None => serializer.serialize_none(),
    }
}
