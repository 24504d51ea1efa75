/// A container supporting a structure-preserving `fmap`,
/// such that `Self` is `Container<Unwrapped>`, via a function
/// `Fn(Unwrapped) -> B` producing a value `To` such that `To` is
/// `Container<B>`.
///
/// Implementations must obey the functor laws:
///   - identity: `c.fmap(|x| x)` is observationally equal to `c`
///   - composition: `c.fmap(|x| f(g(x)))` is observationally equal to
///     `c.fmap(g).fmap(f)`
///
/// The `'static` bound exists for the deferred containers ([`crate::Io`],
/// [`crate::Task`]), which store `f` and apply it only when the effect is
/// explicitly run; the strict containers apply it immediately.
///
/// ```rust
/// use pointfree::{Functor, Maybe};
///
/// let doubled = Maybe::of(21).fmap(|n| n * 2);
/// assert_eq!(doubled, Maybe::of(42));
/// ```
pub trait Functor<B> {
    // where Self = Container<A>
    type Unwrapped; // A
    type To; // Container<B>

    fn fmap<F>(self, f: F) -> Self::To
    where
        F: Fn(Self::Unwrapped) -> B + 'static;
}
