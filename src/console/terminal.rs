use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::{trace, warn};

use crate::{
    console::{Console, ConsoleError, ConsoleF},
    free::Runtime,
};

/// The reference console handler.
/// Writes go to `output` one line at a time,
/// reads take one line from `input`, minus its line terminator.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input:  R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal bound to the process' standard input and output.
    pub fn stdio() -> Terminal<StdinLock<'static>, Stdout> {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Terminal<R, W> {
        Terminal { input, output }
    }

    /// Gives back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("standard input closed while a line was expected");
            return Err(ConsoleError::EndOfInput);
        }

        strip_terminator(&mut line);
        Ok(line)
    }
}

/// Removes one trailing `\n` or `\r\n`, if present.
fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

impl<R: BufRead, W: Write> Runtime<ConsoleF> for Terminal<R, W> {
    type Error = ConsoleError;

    fn perform<K: 'static>(&mut self, instruction: Console<K>) -> Result<K, ConsoleError> {
        match instruction {
            Console::WriteText { text, next } => {
                trace!("write: {:?}", text);
                self.write_line(&text)?;
                Ok(next)
            },
            Console::ReadText { resume } => {
                let line = self.read_line()?;
                trace!("read: {:?}", line);
                Ok(resume(line))
            },
        }
    }
}
