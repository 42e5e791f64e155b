use mrzreader::models::DocumentFormat;
use mrzreader::parsing::MrzParser;
use mrzreader::report::render_report;
use mrzreader::utils::PassportError;

fn main() -> Result<(), PassportError> {
    env_logger::init();

    println!("MRZ Parser Demo");
    println!("---------------");

    // ICAO Doc 9303 specimen passport data page
    let passport_lines = vec![
        "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<".to_string(),
        "L898902C<3UTO6908061F9406236<<<<<<<<<<<<<<<4".to_string(),
    ];

    println!("\nParsing specimen passport as TD3...");
    let record = MrzParser::parse_as(&passport_lines, DocumentFormat::TD3)?;
    print!("{}", render_report(&record));

    // Specimen ID card, three lines of 30
    let id_lines = vec![
        "I<UTOD231458907<<<<<<<<<<<<<<<".to_string(),
        "7408122F1204159UTO<<<<<<<<<<<6".to_string(),
        "ERIKSSON<<ANNA<MARIA<<<<<<<<<<".to_string(),
    ];

    println!("\nParsing specimen ID card...");
    let record = MrzParser::parse(&id_lines)?;
    print!("{}", render_report(&record));

    Ok(())
}
