/// Byte range of a token inside the rendered sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// A word without tags (`WORD` or `WORD{}`): passed through as the bare word.
    Plain(&'a str),
    /// A word with a tag specifier (`WORD{tag1,tag2}`).
    Tagged { word: &'a str, tags: Vec<&'a str> },
    /// Nothing but braces and commas: passed through untouched.
    Delimiters,
}

#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub span: Span,
    pub text: &'a str,
    pub kind: TokenKind<'a>,
}
