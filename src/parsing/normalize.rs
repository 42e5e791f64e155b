// Field-level normalizers. All of these are pure, total over their inputs,
// and silent: a value that cannot be normalized comes back as None/Unknown
// and the caller decides how to surface that.

use chrono::{Datelike, Local, NaiveDate};

use crate::models::Gender;

/// Strip everything that is not an ASCII letter or digit and uppercase
/// the remainder. Idempotent.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Parse a 6-character `YYMMDD` MRZ date against today's date.
pub fn parse_date(text: &str, fix_century: bool) -> Option<NaiveDate> {
    parse_date_on(text, fix_century, Local::now().naive_local().date())
}

/// Parse a 6-character `YYMMDD` MRZ date against an explicit reference
/// date.
///
/// The two-digit year lands within 50 years of the reference year: it is
/// expanded with the reference century, then moved 100 years toward the
/// reference if it ends up 50 or more years away. With `fix_century` set
/// (birth dates), a year still in the future after expansion is pulled
/// back a century; expiry dates legitimately lie in the future and never
/// get that correction.
pub fn parse_date_on(text: &str, fix_century: bool, today: NaiveDate) -> Option<NaiveDate> {
    if text.len() != 6 || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let yy: i32 = text[0..2].parse().ok()?;
    let month: u32 = text[2..4].parse().ok()?;
    let day: u32 = text[4..6].parse().ok()?;

    let mut year = expand_two_digit_year(yy, today);
    if fix_century && year > today.year() {
        year -= 100;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn expand_two_digit_year(yy: i32, today: NaiveDate) -> i32 {
    let century = today.year() / 100 * 100;
    let mut year = century + yy;
    if (year - today.year()).abs() >= 50 {
        if year < today.year() {
            year += 100;
        } else {
            year -= 100;
        }
    }
    year
}

/// Map an MRZ sex code to a gender. Anything but `M`/`F` (in either case)
/// is Unknown, including the `<` filler.
pub fn normalize_gender(text: &str) -> Gender {
    match text.to_ascii_uppercase().as_str() {
        "M" => Gender::Male,
        "F" => Gender::Female,
        _ => Gender::Unknown,
    }
}

/// Split an MRZ name block into surname and given names. Fillers become
/// spaces; the first token is the surname, the remaining tokens joined by
/// single spaces are the given names. Either part may come out empty.
pub fn split_name_block(text: &str) -> (String, String) {
    let replaced = text.replace('<', " ");
    let mut tokens = replaced.split_whitespace();
    let surname = tokens.next().unwrap_or("").to_string();
    let given_names = tokens.collect::<Vec<_>>().join(" ");
    (surname, given_names)
}
