use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to read dictionary line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}
