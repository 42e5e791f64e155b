use std::path::Path;

use crate::models::PassportRecord;
use crate::parsing::MrzParser;
use crate::processing::{ImageProcessor, LineExtractor};
use crate::utils::PassportError;

/// End-to-end reader: image in, structured MRZ record out. The OCR engine
/// arrives as an injected capability so hosts control its configuration
/// and tests can feed canned lines.
pub struct PassportReader {
    extractor: Box<dyn LineExtractor>,
}

impl PassportReader {
    pub fn new(extractor: Box<dyn LineExtractor>) -> Self {
        PassportReader { extractor }
    }

    pub fn read_image(&self, image_path: &Path) -> Result<PassportRecord, PassportError> {
        // Step 1: Prepare the image for OCR
        let processed_image = ImageProcessor::process_image(image_path)?;

        // Step 2: Recover the MRZ text lines
        let lines = self.extractor.extract_lines(&processed_image)?;

        // Step 3: Parse the lines into a record
        MrzParser::parse(&lines)
    }
}
