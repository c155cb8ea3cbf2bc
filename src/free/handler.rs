use crate::free::{Free, Functor};

/// Performs one instruction and finishes the rest of the program.
///
/// A handler is handed the pending instruction together with the rest of
/// the tree. It performs the effect, then keeps going by calling
/// [`Free::interpret`] on the continuation, passing itself along.
/// The handler, not the tree, drives interpretation to completion.
pub trait Handler<F: Functor, A> {
    fn handle(&mut self, instruction: F::Of<Free<F, A>>) -> A;
}

/// Performs a single instruction and hands back its continuation.
///
/// Unlike a [`Handler`], a runtime never recurses:
/// [`Free::run`] calls `perform` in a loop until the program is done.
/// Failures (a closed input stream, a broken pipe) are the runtime's own
/// business and come back as `Self::Error`.
pub trait Runtime<F: Functor> {
    type Error;

    fn perform<K: 'static>(&mut self, instruction: F::Of<K>) -> Result<K, Self::Error>;
}

// Any runtime can also play the recursive handler, as long as the program
// reports into a `Result` so that failures have somewhere to go.
impl<F, A, R> Handler<F, Result<A, R::Error>> for R
where
    F: Functor,
    A: 'static,
    R: Runtime<F>,
    R::Error: 'static,
{
    fn handle(&mut self, instruction: F::Of<Free<F, Result<A, R::Error>>>) -> Result<A, R::Error> {
        let next = self.perform::<Free<F, Result<A, R::Error>>>(instruction)?;
        next.interpret(self)
    }
}
