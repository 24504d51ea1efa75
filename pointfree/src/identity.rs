use crate::functor::Functor;

/// The trivial container: holds exactly one value, with no effect attached.
///
/// Mapping applies the function to the held value and rewraps; the original
/// container is consumed, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<T>(T);

impl<T> Identity<T> {
    pub fn of(value: T) -> Self {
        Identity(value)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Identity<U> {
        Identity(f(self.0))
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<A, B> Functor<B> for Identity<A> {
    type Unwrapped = A;
    type To = Identity<B>;

    fn fmap<F>(self, f: F) -> Identity<B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(f)
    }
}
