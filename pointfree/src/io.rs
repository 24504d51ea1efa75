use crate::functor::Functor;

/// A deferred, possibly impure computation represented as data: a wrapped
/// zero-argument thunk.
///
/// Construction and mapping never run the thunk; `map` only stacks another
/// function on top of it. [`Io::perform`] is the single point at which the
/// effect executes, and each call re-runs it from scratch — results are not
/// memoized.
pub struct Io<T> {
    thunk: Box<dyn Fn() -> T>,
}

impl<T: 'static> Io<T> {
    pub fn new(thunk: impl Fn() -> T + 'static) -> Self {
        Io {
            thunk: Box::new(thunk),
        }
    }

    /// Lift a plain value into a deferred computation that yields it.
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        Io::new(move || value.clone())
    }

    /// Defer `f` on top of the held thunk: the result holds
    /// `|| f(thunk())`, with nothing executed yet.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Io<U> {
        let thunk = self.thunk;
        Io::new(move || f(thunk()))
    }

    /// Run the deferred computation and return its result. Side effects
    /// happen here and nowhere else.
    pub fn perform(&self) -> T {
        (self.thunk)()
    }
}

impl<A: 'static, B: 'static> Functor<B> for Io<A> {
    type Unwrapped = A;
    type To = Io<B>;

    fn fmap<F>(self, f: F) -> Io<B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(f)
    }
}
