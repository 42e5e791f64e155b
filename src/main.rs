// MRZ passport reader
// Extracts identity data from the machine readable zone of a document photo

use clap::Parser;
use std::path::PathBuf;
use std::process;

use mrzreader::processing::{OcrConfig, TesseractLineExtractor};
use mrzreader::{report, PassportReader};

#[derive(Parser)]
#[command(name = "mrzreader", about = "Read the machine readable zone of a travel document")]
struct Args {
    /// Path to the document photo
    #[arg(long)]
    image_path: PathBuf,

    /// Emit the record as JSON instead of a formatted report
    #[arg(long)]
    json: bool,

    /// OCR languages, comma separated (tesseract traineddata names)
    #[arg(long, default_value = "eng")]
    lang: String,

    /// Directory holding tesseract traineddata files
    #[arg(long)]
    tessdata: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = OcrConfig {
        languages: args.lang.split(',').map(|s| s.trim().to_string()).collect(),
        tessdata_path: args.tessdata,
        ..OcrConfig::default()
    };
    let reader = PassportReader::new(Box::new(TesseractLineExtractor::new(config)));

    match reader.read_image(&args.image_path) {
        Ok(record) => {
            if args.json {
                match serde_json::to_string_pretty(&record) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("Error serializing record: {}", err);
                        process::exit(1);
                    }
                }
            } else {
                print!("{}", report::render_report(&record));
            }
        }
        Err(err) => {
            eprintln!("Error reading document: {}", err);
            process::exit(1);
        }
    }
}
