use std::collections::VecDeque;

use log::{trace, warn};

use crate::{
    console::{Console, ConsoleError, ConsoleF},
    free::Runtime,
};

/// A console that answers from a fixed list of lines
/// and keeps everything written in memory.
/// Runs a program the same way a terminal would, minus the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    input:  VecDeque<String>,
    output: Vec<String>,
}

impl Script {
    /// A script that will answer reads with `lines`, in order.
    pub fn new<I>(lines: I) -> Script
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Script {
            input:  lines.into_iter().map(Into::into).collect(),
            output: vec![],
        }
    }

    /// Every line written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn into_output(self) -> Vec<String> {
        self.output
    }

    /// How many input lines have not been read yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Runtime<ConsoleF> for Script {
    type Error = ConsoleError;

    fn perform<K: 'static>(&mut self, instruction: Console<K>) -> Result<K, ConsoleError> {
        match instruction {
            Console::WriteText { text, next } => {
                trace!("script write: {:?}", text);
                self.output.push(text);
                Ok(next)
            },
            Console::ReadText { resume } => {
                let line = self.input.pop_front().ok_or_else(|| {
                    warn!("script ran out of input after {} line(s) of output", self.output.len());
                    ConsoleError::EndOfInput
                })?;
                trace!("script read: {:?}", line);
                Ok(resume(line))
            },
        }
    }
}
