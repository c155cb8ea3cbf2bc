/// A type constructor whose values carry a continuation slot.
///
/// Rust has no higher-kinded types, so the constructor is named by a marker
/// type implementing this trait, and `Of<K>` is the instruction set
/// applied to a continuation of type `K`.
///
/// `map` must only touch the continuation:
/// - `map(fa, |k| k)` behaves like `fa`,
/// - `map(map(fa, f), g)` behaves like `map(fa, |k| g(f(k)))`,
/// - domain data carried next to the continuation is left alone.
///
/// Programs are consumed once, so `f` is `FnOnce`: each instruction
/// continues along exactly one path.
pub trait Functor: Sized + 'static {
    type Of<K>;

    fn map<K, B, G>(fa: Self::Of<K>, f: G) -> Self::Of<B>
    where
        K: 'static,
        B: 'static,
        G: FnOnce(K) -> B + 'static;
}
