//! The console instruction set: write a line, read a line.
//! Programs over it are built with [`write`], [`read`], and [`ask`],
//! and run by a [`Terminal`] or a [`Script`].

pub mod error;
pub mod script;
pub mod terminal;

use std::fmt;

use crate::free::{Free, Functor};

pub use error::ConsoleError;
pub use script::Script;
pub use terminal::Terminal;

/// A program that talks to the console.
pub type Program<A> = Free<ConsoleF, A>;

/// One console instruction, with `K` as what to do next.
pub enum Console<K> {
    /// Emit `text` as a line, then continue with `next`.
    WriteText { text: String, next: K },
    /// Obtain a line of input and hand it to `resume`.
    ReadText { resume: Box<dyn FnOnce(String) -> K> },
}

impl<K: 'static> Console<K> {
    pub fn write_text(text: impl Into<String>, next: K) -> Console<K> {
        Console::WriteText { text: text.into(), next }
    }

    pub fn read_text(resume: impl FnOnce(String) -> K + 'static) -> Console<K> {
        Console::ReadText { resume: Box::new(resume) }
    }

    /// Transforms what happens next, and nothing else.
    /// The text of a write is never touched;
    /// a read composes `f` after its `resume`.
    pub fn map_k<B: 'static>(self, f: impl FnOnce(K) -> B + 'static) -> Console<B> {
        match self {
            Console::WriteText { text, next } => Console::WriteText { text, next: f(next) },
            Console::ReadText { resume } => Console::ReadText {
                resume: Box::new(move |line: String| f(resume(line))),
            },
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Console<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Console::WriteText { text, next } => f
                .debug_struct("WriteText")
                .field("text", text)
                .field("next", next)
                .finish(),
            Console::ReadText { .. } => f.debug_struct("ReadText").finish_non_exhaustive(),
        }
    }
}

/// Names the `Console` type constructor, so that `Free` can be built over it.
pub enum ConsoleF {}

impl Functor for ConsoleF {
    type Of<K> = Console<K>;

    fn map<K, B, G>(fa: Console<K>, f: G) -> Console<B>
    where
        K: 'static,
        B: 'static,
        G: FnOnce(K) -> B + 'static,
    {
        fa.map_k(f)
    }
}

/// Writes `text` as a line.
pub fn write(text: impl Into<String>) -> Program<()> {
    Free::lift(Console::write_text(text, ()))
}

/// Reads one line, without its line terminator.
pub fn read() -> Program<String> {
    Free::lift(Console::read_text(|line| line))
}

/// Writes `prompt`, then reads the answer.
pub fn ask(prompt: impl Into<String>) -> Program<String> {
    write(prompt).then(read())
}
