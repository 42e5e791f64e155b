use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::io::Write;
use tempfile::NamedTempFile;
use tesseract::Tesseract;

use crate::utils::PassportError;

lazy_static! {
    // A cleaned MRZ line: nothing but the MRZ alphabet, at least one full
    // TD1-width run of it.
    static ref MRZ_LINE: Regex = Regex::new(r"^[A-Z0-9<]{30,}$").unwrap();
}

/// OCR engine settings, fixed at construction. No hidden engine state:
/// whoever builds the extractor decides language data and alphabet.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub languages: Vec<String>,
    pub tessdata_path: Option<String>,
    pub char_whitelist: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        OcrConfig {
            languages: vec!["eng".to_string()],
            tessdata_path: None,
            char_whitelist: "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789<".to_string(),
        }
    }
}

/// Capability interface for MRZ line acquisition. The parser only ever
/// sees the ordered lines this produces, so hosts can swap in any engine
/// (or canned lines in tests) without touching the pipeline.
pub trait LineExtractor {
    fn extract_lines(&self, image_data: &[u8]) -> Result<Vec<String>, PassportError>;
}

pub struct TesseractLineExtractor {
    config: OcrConfig,
}

impl TesseractLineExtractor {
    pub fn new(config: OcrConfig) -> Self {
        TesseractLineExtractor { config }
    }

    fn run_ocr(&self, image_data: &[u8]) -> Result<String, PassportError> {
        // Tesseract wants a file path, so stage the image in a temp file.
        let mut temp_file = NamedTempFile::new()
            .map_err(|e| PassportError::MrzExtractionError(format!("Failed to create temp file: {}", e)))?;
        temp_file
            .write_all(image_data)
            .map_err(|e| PassportError::MrzExtractionError(format!("Failed to write to temp file: {}", e)))?;
        let image_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| PassportError::MrzExtractionError("Failed to convert path to string".to_string()))?;

        let language = self.config.languages.join("+");
        Tesseract::new(self.config.tessdata_path.as_deref(), Some(&language))
            .map_err(|e| PassportError::MrzExtractionError(format!("Tesseract init error: {}", e)))?
            .set_image(image_path)
            .map_err(|e| PassportError::MrzExtractionError(format!("Tesseract set image error: {}", e)))?
            .set_variable("tessedit_char_whitelist", &self.config.char_whitelist)
            .map_err(|e| PassportError::MrzExtractionError(format!("Tesseract set variable error: {}", e)))?
            .get_text()
            .map_err(|e| PassportError::MrzExtractionError(format!("Tesseract error: {}", e)))
    }
}

impl LineExtractor for TesseractLineExtractor {
    fn extract_lines(&self, image_data: &[u8]) -> Result<Vec<String>, PassportError> {
        let text = self.run_ocr(image_data)?;
        debug!("raw MRZ OCR text:\n{}", text);

        let lines = mrz_lines_from_text(&text);
        info!("kept {} MRZ line(s) from OCR output", lines.len());

        if lines.is_empty() {
            return Err(PassportError::MrzExtractionError(
                "machine readable zone not locatable in OCR output".to_string(),
            ));
        }
        Ok(lines)
    }
}

/// Clean raw OCR text and keep the lines shaped like an MRZ row.
pub fn mrz_lines_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(clean_mrz_line)
        .filter(|line| MRZ_LINE.is_match(line) && line.contains('<'))
        .collect()
}

// The OCR engine is told to stay inside the MRZ alphabet, but spacing and
// casing still drift: spaces come back where fillers were, and mixed case
// shows up when the whitelist is not honored. Normalize those; drop
// anything else foreign.
fn clean_mrz_line(line: &str) -> String {
    line.trim()
        .chars()
        .map(|c| match c {
            ' ' => '<',
            _ => c.to_ascii_uppercase(),
        })
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '<')
        .collect()
}
