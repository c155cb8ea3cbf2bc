use std::io;

use thiserror::Error;

/// Why a console handler could not carry on.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The program asked for a line, but there were none left.
    #[error("input ended while the program was still reading")]
    EndOfInput,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ConsoleError::EndOfInput)
    }
}
