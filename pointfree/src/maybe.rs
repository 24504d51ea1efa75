use crate::functor::Functor;

pub use Maybe::{Just, Nothing};

/// A container for a value that may be absent.
///
/// Absence is a variant, not an exception: `Nothing.map(f)` yields `Nothing`
/// without invoking `f`, so once a chain goes absent every later stage is
/// skipped and no partial side effects occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maybe<T> {
    Just(T),
    Nothing,
}

impl<T> Maybe<T> {
    pub fn of(value: T) -> Self {
        Just(value)
    }

    pub fn nothing() -> Self {
        Nothing
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Just(value) => Just(f(value)),
            Nothing => Nothing,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Just(value) => Some(value),
            Nothing => None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<A, B> Functor<B> for Maybe<A> {
    type Unwrapped = A;
    type To = Maybe<B>;

    fn fmap<F>(self, f: F) -> Maybe<B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(f)
    }
}
