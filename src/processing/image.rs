use crate::utils::PassportError;
use image::imageops::{contrast, resize, FilterType};
use image::{DynamicImage, ImageFormat};
use imageproc::contrast::adaptive_threshold;
use log::debug;
use std::io::Cursor;
use std::path::Path;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Prepare a document photo for MRZ OCR. Returns PNG-encoded bytes.
    pub fn process_image(image_path: &Path) -> Result<Vec<u8>, PassportError> {
        let img = image::open(image_path)
            .map_err(|e| PassportError::ImageProcessingError(format!("Failed to open image: {}", e)))?;
        Self::preprocess_image(&img)
    }

    fn preprocess_image(img: &DynamicImage) -> Result<Vec<u8>, PassportError> {
        let gray = img.to_luma8();
        let (width, height) = gray.dimensions();
        debug!("preprocessing {}x{} image for OCR", width, height);

        // Double the resolution before thresholding; the OCR engine reads
        // the small MRZ glyphs far more reliably at 2x.
        let upscaled = resize(&gray, width * 2, height * 2, FilterType::CatmullRom);

        let enhanced = contrast(&upscaled, 15.0);
        let binary = adaptive_threshold(&enhanced, 15);

        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        DynamicImage::ImageLuma8(binary)
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| {
                PassportError::ImageProcessingError(format!("Failed to encode processed image: {}", e))
            })?;

        Ok(buffer)
    }
}
