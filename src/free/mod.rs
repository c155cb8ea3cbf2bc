//! The instruction-agnostic half of the crate.
//! Nothing in here knows about consoles:
//! any `Functor` can be rolled up into a sequential program,
//! and any `Handler` or `Runtime` for it can run that program.

pub mod functor;
pub mod handler;

use std::{any::Any, collections::VecDeque, fmt, marker::PhantomData};

use log::debug;

pub use functor::Functor;
pub use handler::{Handler, Runtime};

/// A sequential program over the instruction set `F`, producing an `A`.
///
/// Observed through [`Free::resume`], a program is always exactly one of:
/// - `Pure`, a finished computation holding its result, or
/// - `Suspended`, one pending instruction whose continuation is the rest
///   of the program.
///
/// Programs are immutable and consumed once: every operation takes `self`.
pub struct Free<F: Functor, A> {
    raw:    Raw<F>,
    result: PhantomData<fn() -> A>,
}

// Intermediate results travel between continuations boxed.
// Each continuation is pushed by a typed `chain`, so the value it receives
// is always the type that `chain` was called on.
type Value = Box<dyn Any>;
type Cont<F> = Box<dyn FnOnce(Value) -> Raw<F>>;

/// An untyped program: a head, then the continuations to feed it through,
/// leftmost first. Keeping the binds in a flat queue means a left-nested
/// tower of `chain` calls never has to be unwound recursively.
struct Raw<F: Functor> {
    head:  Head<F>,
    conts: VecDeque<Cont<F>>,
}

enum Head<F: Functor> {
    Pure(Value),
    Roll(Box<F::Of<Raw<F>>>),
    // Not yet computed; forced by `resume`.
    Defer(Box<dyn FnOnce() -> Raw<F>>),
}

impl<F: Functor> Raw<F> {
    fn new(head: Head<F>) -> Raw<F> {
        Raw { head, conts: VecDeque::new() }
    }

    /// Runs `self`, then the continuations in `rest`.
    fn followed_by(self, mut rest: VecDeque<Cont<F>>) -> Raw<F> {
        splice(self.conts, &mut rest);
        Raw { head: self.head, conts: rest }
    }
}

/// Puts `front` ahead of `rest`, moving whichever queue is shorter.
fn splice<F: Functor>(mut front: VecDeque<Cont<F>>, rest: &mut VecDeque<Cont<F>>) {
    if front.len() <= rest.len() {
        while let Some(cont) = front.pop_back() {
            rest.push_front(cont);
        }
    } else {
        front.append(rest);
        *rest = front;
    }
}

fn downcast<A: 'static>(value: Value) -> A {
    match value.downcast::<A>() {
        Ok(value) => *value,
        Err(_) => unreachable!("continuation fed a value of the wrong type"),
    }
}

/// The observable state of a program, as returned by [`Free::resume`].
pub enum Step<F: Functor, A> {
    Pure(A),
    Suspended(F::Of<Free<F, A>>),
}

impl<F: Functor, A: 'static> Free<F, A> {
    fn from_raw(raw: Raw<F>) -> Free<F, A> {
        Free { raw, result: PhantomData }
    }

    /// A program that does nothing and returns `value`.
    pub fn pure(value: A) -> Free<F, A> {
        Free::from_raw(Raw::new(Head::Pure(Box::new(value))))
    }

    /// A program that starts with `instruction`.
    /// The instruction's continuation is the rest of the program.
    pub fn roll(instruction: F::Of<Free<F, A>>) -> Free<F, A> {
        let instruction = F::map::<Free<F, A>, Raw<F>, _>(instruction, |next| next.raw);
        Free::from_raw(Raw::new(Head::Roll(Box::new(instruction))))
    }

    /// A program made of a single instruction,
    /// whose result is whatever ends up in the continuation slot.
    pub fn lift(instruction: F::Of<A>) -> Free<F, A> {
        Free::roll(F::map::<A, Free<F, A>, _>(instruction, Free::pure))
    }

    /// A program that is only built once it is reached.
    /// Lets a program refer to itself without being built forever.
    pub fn defer(thunk: impl FnOnce() -> Free<F, A> + 'static) -> Free<F, A> {
        Free::from_raw(Raw::new(Head::Defer(Box::new(move || thunk().raw))))
    }

    /// Runs `self`, feeds its result to `f`, then runs whatever `f` returns.
    ///
    /// The continuation is queued behind the ones already pending,
    /// so `chain` is constant time however the calls are nested.
    pub fn chain<B: 'static>(self, f: impl FnOnce(A) -> Free<F, B> + 'static) -> Free<F, B> {
        let mut raw = self.raw;
        raw.conts.push_back(Box::new(move |value: Value| f(downcast::<A>(value)).raw));
        Free::from_raw(raw)
    }

    /// Transforms the result of the program without adding any steps.
    pub fn map<B: 'static>(self, f: impl FnOnce(A) -> B + 'static) -> Free<F, B> {
        self.chain(move |value| Free::pure(f(value)))
    }

    /// Runs `self`, discards its result, then runs `next`.
    pub fn then<B: 'static>(self, next: Free<F, B>) -> Free<F, B> {
        self.chain(move |_| next)
    }

    /// Reduces the program to its observable state.
    ///
    /// Pending continuations are applied and deferred parts forced in a
    /// loop, not by recursion. Each continuation is applied once, so the
    /// work done here is proportional to the binds actually reached.
    pub fn resume(self) -> Step<F, A> {
        let Raw { mut head, mut conts } = self.raw;
        loop {
            let next = match head {
                Head::Pure(value) => match conts.pop_front() {
                    Some(cont) => cont(value),
                    None       => return Step::Pure(downcast::<A>(value)),
                },
                Head::Defer(thunk) => thunk(),
                Head::Roll(instruction) => {
                    return Step::Suspended(F::map::<Raw<F>, Free<F, A>, _>(
                        *instruction,
                        move |next| Free::from_raw(next.followed_by(conts)),
                    ));
                },
            };

            splice(next.conts, &mut conts);
            head = next.head;
        }
    }

    /// Interprets the program with a recursive handler.
    /// A pure program returns its value; otherwise the pending instruction
    /// goes to `handler`, which is trusted to finish the job.
    pub fn interpret<H>(self, handler: &mut H) -> A
    where
        H: Handler<F, A> + ?Sized,
    {
        match self.resume() {
            Step::Pure(value)             => value,
            Step::Suspended(instruction) => handler.handle(instruction),
        }
    }

    /// Runs the program to completion, one instruction at a time.
    /// Stack usage stays flat however long the program runs,
    /// and however its `chain` calls are nested.
    /// Stops at the first error the runtime reports.
    pub fn run<R>(self, runtime: &mut R) -> Result<A, R::Error>
    where
        R: Runtime<F>,
    {
        let mut tree = self;
        let mut performed = 0usize;

        loop {
            match tree.resume() {
                Step::Pure(value) => {
                    debug!("program finished after {} instruction(s)", performed);
                    return Ok(value);
                },
                Step::Suspended(instruction) => {
                    tree = runtime.perform::<Free<F, A>>(instruction)?;
                    performed += 1;
                },
            }
        }
    }
}

// Only a finished program shows its value;
// anything else may still hide work that has not been forced yet.
impl<F: Functor, A: fmt::Debug + 'static> fmt::Debug for Free<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.raw.head, self.raw.conts.is_empty()) {
            (Head::Pure(value), true) => match value.downcast_ref::<A>() {
                Some(value) => f.debug_tuple("Pure").field(value).finish(),
                None        => f.write_str("Free(..)"),
            },
            _ => f.write_str("Free(..)"),
        }
    }
}
