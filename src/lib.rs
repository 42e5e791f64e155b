pub mod models;
pub mod parsing;
pub mod passport_reader;
pub mod processing;
pub mod report;
pub mod utils;

pub use passport_reader::PassportReader;
