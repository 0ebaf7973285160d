use inflekt_morph::FormResolver;

use crate::parser::parse_with_spans;
use crate::token::TokenKind;

/// Rewrites a template sentence, inflecting every `WORD{tags}` token.
#[derive(Debug, Clone, Copy)]
pub struct SentenceRenderer<'d> {
    resolver: FormResolver<'d>,
}

impl<'d> SentenceRenderer<'d> {
    pub fn new(resolver: FormResolver<'d>) -> Self {
        Self { resolver }
    }

    /// Tokens come back in input order, joined by single spaces.
    pub fn render(&self, sentence: &str) -> String {
        let tokens = parse_with_spans(sentence);
        let mut words: Vec<&str> = Vec::with_capacity(tokens.len());

        for token in &tokens {
            let word = match &token.kind {
                TokenKind::Plain(word) => *word,
                TokenKind::Tagged { word, tags } => self.resolver.resolve(word, tags),
                TokenKind::Delimiters => {
                    tracing::trace!(
                        start = token.span.start,
                        end = token.span.end,
                        text = token.text,
                        "specifier without a word, kept as is"
                    );
                    token.text
                }
            };
            words.push(word);
        }

        words.join(" ")
    }
}
