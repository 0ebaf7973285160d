//! Dictionary source -> (tag registry, form table).
//!
//! Source format, one entry per line:
//!
//! ```text
//! 1                          block marker (first character is a digit)
//! СЛОВО sp1,tag1,tag2        header: declares the normal form
//! СЛОВО1 sp1,tag1,tag2,tag3  forms of that normal form
//! ```

pub mod compiler;
pub mod error;
pub mod line;

use std::io::BufRead;

pub use compiler::{CompileStats, CompiledDictionary, DictionaryCompiler};
pub use error::CompileError;

/// Compiles an in-memory line sequence. Malformed lines are discarded, never rejected.
pub fn compile<I, S>(lines: I) -> CompiledDictionary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut compiler = DictionaryCompiler::new();
    for line in lines {
        compiler.feed(line.as_ref());
    }
    compiler.finish()
}

/// Compiles a dictionary read line by line from `reader`.
pub fn compile_reader<R: BufRead>(reader: R) -> Result<CompiledDictionary, CompileError> {
    let mut compiler = DictionaryCompiler::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CompileError::Io {
            line: index + 1,
            source,
        })?;
        let line = match index {
            0 => line.strip_prefix('\u{FEFF}').unwrap_or(&line),
            _ => &line,
        };
        compiler.feed(line);
    }
    Ok(compiler.finish())
}
