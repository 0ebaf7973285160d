pub mod parser;
pub mod render;
pub mod token;

use std::io::BufRead;

use inflekt_compiler::{compile, compile_reader, CompileError, CompiledDictionary};
use inflekt_protocol::Resolution;

use crate::parser::parse_token;
use crate::render::SentenceRenderer;
use crate::token::TokenKind;

/// A compiled dictionary ready to inflect template sentences.
///
/// Built once, then only read: a `Morpher` can be shared across threads as is.
#[derive(Debug, Clone, Default)]
pub struct Morpher {
    dict: CompiledDictionary,
}

impl Morpher {
    /// Compiles dictionary lines. Never fails; lines that make no sense are dropped.
    pub fn compile<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { dict: compile(lines) }
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CompileError> {
        Ok(Self {
            dict: compile_reader(reader)?,
        })
    }

    /// Primary entry point: template sentence -> inflected sentence.
    pub fn morph(&self, sentence: &str) -> String {
        SentenceRenderer::new(self.dict.resolver()).render(sentence)
    }

    /// Closest form of a single word.
    pub fn resolve<S: AsRef<str>>(&self, word: &str, tags: &[S]) -> String {
        self.dict.resolver().resolve(word, tags).to_string()
    }

    pub fn explain<S: AsRef<str>>(&self, word: &str, tags: &[S]) -> Resolution {
        self.dict.resolver().explain(word, tags)
    }

    /// Explains a single `WORD{tags}` token as it would appear in a sentence.
    pub fn explain_token(&self, token: &str) -> Resolution {
        match parse_token(token.trim()) {
            TokenKind::Plain(word) => self.explain::<&str>(word, &[]),
            TokenKind::Tagged { word, tags } => self.explain(word, &tags),
            TokenKind::Delimiters => self.explain::<&str>(token.trim(), &[]),
        }
    }

    pub fn dictionary(&self) -> &CompiledDictionary {
        &self.dict
    }
}
