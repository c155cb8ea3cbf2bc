//! # freeio
//! Console programs as plain data.
//! A program is described once, as a tree of instructions,
//! and run later by whichever handler is plugged in:
//! a real terminal, or a script of canned answers in tests.
//!
//! ## Writing a program
//! Programs are built from the console factories and glued together with
//! `chain`, `map`, and `then`:
//! ```
//! use freeio::console::{self, Program};
//!
//! fn greet() -> Program<String> {
//!     console::ask("What's your name?")
//!         .chain(|name| console::write(format!("Hi, {}!", name)).map(move |()| name))
//! }
//! ```
//! Building `greet()` performs no I/O at all.
//!
//! ## Running a program
//! ```
//! use freeio::console::{self, Script};
//!
//! let program = console::read().map(|line| line.len());
//! let mut script = Script::new(["four"]);
//! assert_eq!(program.run(&mut script).unwrap(), 4);
//! ```
//! `run` drives the program in a loop, so long-running programs do not grow
//! the stack. `interpret` is the recursive alternative, where the handler
//! itself keeps interpreting after each instruction.
//!
//! ## Layout
//! - `free` holds the instruction-agnostic machinery.
//! - `console` holds the console instruction set and its handlers.
//! - `programs` holds a few sample programs.

pub mod console;
pub mod free;
pub mod programs;

pub use free::{Free, Functor, Handler, Runtime, Step};
