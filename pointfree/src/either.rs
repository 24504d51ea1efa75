use crate::functor::Functor;

pub use Either::{Left, Right};

/// Branching computation with an explanatory failure value.
///
/// `Right` is the success branch and the one `map` applies to; `Left` carries
/// a failure explanation and passes through every mapped stage untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Map over the `Right` value; a `Left` is returned unchanged and `f` is
    /// never invoked.
    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(f(r)),
        }
    }

    /// Map over the `Left` value, the dual of [`Either::map`].
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Left(l) => Left(f(l)),
            Right(r) => Right(r),
        }
    }

    /// Collapse both branches to a common type by applying exactly one of the
    /// two handlers.
    pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Left(l) => on_left(l),
            Right(r) => on_right(r),
        }
    }

    pub fn left(&self) -> Option<&L> {
        match self {
            Left(l) => Some(l),
            Right(_) => None,
        }
    }

    pub fn right(&self) -> Option<&R> {
        match self {
            Left(_) => None,
            Right(r) => Some(r),
        }
    }
}

impl<L, A, B> Functor<B> for Either<L, A> {
    type Unwrapped = A;
    type To = Either<L, B>;

    fn fmap<F>(self, f: F) -> Either<L, B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(f)
    }
}
