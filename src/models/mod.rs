pub mod data;

pub use data::{display_date, DocumentFormat, Gender, ParseWarning, PassportRecord};
