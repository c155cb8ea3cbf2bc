//! A handful of small console programs.
//! None of these perform any I/O when called; they only describe it.

use crate::{
    console::{self, Program},
    free::Free,
};

/// Asks for a name and greets whoever answers.
/// Returns the name.
pub fn greeting() -> Program<String> {
    console::ask("Hello! What's your name?").chain(|name| {
        console::write(format!("Hello, {}!", name)).map(move |()| name)
    })
}

/// Reads a line and returns it upper-cased.
pub fn shout() -> Program<String> {
    console::read().map(|line| line.to_uppercase())
}

/// Asks for an age until the answer is a whole number.
pub fn age() -> Program<u32> {
    console::ask("How old are you?").chain(|answer| match answer.trim().parse::<u32>() {
        Ok(years) => Free::pure(years),
        Err(_) => console::write(format!("{} is not a number, try again.", answer))
            .then(Free::defer(age)),
    })
}

/// Echoes every line back until `stop` is read.
/// Returns how many lines were echoed.
pub fn echo(stop: impl Into<String>) -> Program<usize> {
    echo_from(stop.into(), 0)
}

fn echo_from(stop: String, echoed: usize) -> Program<usize> {
    console::read().chain(move |line| {
        if line == stop {
            return Free::pure(echoed);
        }
        console::write(line).then(Free::defer(move || echo_from(stop, echoed + 1)))
    })
}
