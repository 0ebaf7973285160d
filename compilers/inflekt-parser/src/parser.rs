use nom::{
    bytes::complete::{take_till1, take_while, take_while1},
    character::complete::multispace0,
    multi::many0,
    sequence::preceded,
    IResult,
};

use crate::token::{Span, Token, TokenKind};

/// Token boundaries: the same characters `multispace0` skips.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters that open, separate and close a tag specifier.
fn is_specifier_delim(c: char) -> bool {
    matches!(c, '{' | ',' | '}')
}

fn piece(input: &str) -> IResult<&str, &str> {
    preceded(
        take_while(is_specifier_delim),
        take_while1(|c: char| !is_specifier_delim(c)),
    )(input)
}

/// Splits one whitespace-free token into its word and requested tags.
pub fn parse_token(text: &str) -> TokenKind<'_> {
    let pieces = match many0(piece)(text) {
        Ok((_, pieces)) => pieces,
        Err(_) => return TokenKind::Delimiters,
    };

    match pieces.split_first() {
        None => TokenKind::Delimiters,
        Some((&word, [])) => TokenKind::Plain(word),
        Some((&word, tags)) => TokenKind::Tagged {
            word,
            tags: tags.to_vec(),
        },
    }
}

pub fn parse_with_spans(original_input: &str) -> Vec<Token<'_>> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        let parsed: IResult<&str, &str> = take_till1(is_blank)(input);
        let (next_input, text) = match parsed {
            Ok(res) => res,
            Err(_) => break,
        };

        let start = original_input.len() - input.len();
        result.push(Token {
            span: Span::new(start, start + text.len()),
            text,
            kind: parse_token(text),
        });
        input = next_input;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kinds() {
        assert_eq!(parse_token("СЛОВО"), TokenKind::Plain("СЛОВО"));
        assert_eq!(parse_token("СЛОВО{}"), TokenKind::Plain("СЛОВО"));
        assert_eq!(
            parse_token("СЛОВО{sp1}"),
            TokenKind::Tagged { word: "СЛОВО", tags: vec!["sp1"] }
        );
        assert_eq!(
            parse_token("СЛОВО{sp1,,tag1}"),
            TokenKind::Tagged { word: "СЛОВО", tags: vec!["sp1", "tag1"] }
        );
        assert_eq!(parse_token("{}"), TokenKind::Delimiters);
    }

    #[test]
    fn test_word_is_first_piece_even_after_leading_brace() {
        assert_eq!(
            parse_token("{a,b}"),
            TokenKind::Tagged { word: "a", tags: vec!["b"] }
        );
    }

    #[test]
    fn test_spans_skip_whitespace_runs() {
        let input = "  WORD1 \t\r\n WORD2{a,b}  ";
        let tokens = parse_with_spans(input);

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "WORD1");
        assert_eq!(&input[tokens[0].span.start..tokens[0].span.end], "WORD1");
        assert_eq!(tokens[1].text, "WORD2{a,b}");
        assert_eq!(tokens[1].span, Span::new(input.len() - 12, input.len() - 2));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_with_spans("").is_empty());
        assert!(parse_with_spans(" \n\t ").is_empty());
    }
}
