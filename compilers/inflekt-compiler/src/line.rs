use unicode_general_category::{get_general_category, GeneralCategory};

use nom::{
    bytes::complete::{take_while, take_while1},
    multi::many0,
    sequence::preceded,
    IResult,
};

/// What a single dictionary source line means to the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty, whitespace-only, or nothing but separators.
    Blank,
    /// Starts with a digit: the next data line is a normal-form header.
    BlockMarker,
    /// A word followed by its tags.
    Data { word: &'a str, tags: Vec<&'a str> },
}

/// Spaces, commas and tabs separate the word from its tags and the tags from each other.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | ',' | '\t')
}

/// Any script's decimal digit (general category Nd), not just ASCII.
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

fn field(input: &str) -> IResult<&str, &str> {
    preceded(take_while(is_separator), take_while1(|c: char| !is_separator(c)))(input)
}

pub fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }

    // Only the very first character counts; a leading space makes it a data line.
    if line.starts_with(is_decimal_digit) {
        return Line::BlockMarker;
    }

    let fields = match many0(field)(line) {
        Ok((_, fields)) => fields,
        Err(_) => return Line::Blank,
    };

    match fields.split_first() {
        Some((&word, tags)) => Line::Data {
            word,
            tags: tags.to_vec(),
        },
        None => Line::Blank,
    }
}
