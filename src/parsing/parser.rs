use crate::models::{DocumentFormat, PassportRecord};
use crate::parsing::assembler::RecordAssembler;
use crate::parsing::classifier::FormatClassifier;
use crate::parsing::fields::FieldSlicer;
use crate::utils::PassportError;

/// Single-pass MRZ pipeline: classify the layout, slice the fixed-width
/// fields, normalize them into a record. Pure computation over in-memory
/// lines; one input produces exactly one record or one error.
pub struct MrzParser;

impl MrzParser {
    pub fn parse(lines: &[String]) -> Result<PassportRecord, PassportError> {
        let format = FormatClassifier::classify(lines);
        if format == DocumentFormat::Unrecognized {
            return Err(PassportError::UnrecognizedFormat(Self::describe(lines)));
        }
        Self::parse_as(lines, format)
    }

    /// Parse with a caller-chosen layout, skipping classification. This
    /// is how a 44-character pair gets read as TD3: the classifier's
    /// 36-column check fires first and tags such input TD2.
    pub fn parse_as(
        lines: &[String],
        format: DocumentFormat,
    ) -> Result<PassportRecord, PassportError> {
        let raw = FieldSlicer::slice(lines, format)?;
        Ok(RecordAssembler::assemble(&raw))
    }

    fn describe(lines: &[String]) -> String {
        let lengths: Vec<String> = lines
            .iter()
            .map(|line| line.chars().count().to_string())
            .collect();
        format!(
            "{} line(s) of length {} (expected 3 lines of 30+ or 2 lines of 36+ characters)",
            lines.len(),
            lengths.join("/")
        )
    }
}
