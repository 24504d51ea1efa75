//! Fixed-arity currying wrappers.
//!
//! Rust exposes no runtime arity inspection, so currying is provided through
//! wrapper types of known arity: [`curry2`] and [`curry3`]. Each wrapper
//! accepts any prefix of its arguments, returning a partial-application value
//! awaiting the remainder; the wrapped function runs exactly once, when the
//! final argument arrives. Wrappers are `Clone` whenever the function and the
//! captured arguments are, so a partially applied function can be reused:
//!
//! ```rust
//! use pointfree::curry2;
//!
//! let add = curry2(|x: i64, y: i64| x + y);
//! let add5 = add.apply(5);
//! assert_eq!(add5.clone().apply(5), 10);
//! assert_eq!(add5.apply(37), 42);
//! ```

/// Wrap a 2-ary function for stepwise application.
pub fn curry2<F>(f: F) -> Curry2<F> {
    Curry2 { f }
}

/// Wrap a 3-ary function for stepwise application.
pub fn curry3<F>(f: F) -> Curry3<F> {
    Curry3 { f }
}

/// A 2-ary function awaiting both arguments.
#[derive(Clone, Copy)]
pub struct Curry2<F> {
    f: F,
}

/// A 2-ary function with its first argument captured.
#[derive(Clone, Copy)]
pub struct Curry2P1<F, A> {
    f: F,
    a: A,
}

impl<F> Curry2<F> {
    pub fn apply<A>(self, a: A) -> Curry2P1<F, A> {
        Curry2P1 { f: self.f, a }
    }

    /// Full application in one step.
    pub fn apply2<A, B, R>(self, a: A, b: B) -> R
    where
        F: FnOnce(A, B) -> R,
    {
        (self.f)(a, b)
    }
}

impl<F, A> Curry2P1<F, A> {
    pub fn apply<B, R>(self, b: B) -> R
    where
        F: FnOnce(A, B) -> R,
    {
        (self.f)(self.a, b)
    }
}

/// A 3-ary function awaiting all three arguments.
#[derive(Clone, Copy)]
pub struct Curry3<F> {
    f: F,
}

/// A 3-ary function with its first argument captured.
#[derive(Clone, Copy)]
pub struct Curry3P1<F, A> {
    f: F,
    a: A,
}

/// A 3-ary function with its first two arguments captured.
#[derive(Clone, Copy)]
pub struct Curry3P2<F, A, B> {
    f: F,
    a: A,
    b: B,
}

impl<F> Curry3<F> {
    pub fn apply<A>(self, a: A) -> Curry3P1<F, A> {
        Curry3P1 { f: self.f, a }
    }

    pub fn apply2<A, B>(self, a: A, b: B) -> Curry3P2<F, A, B> {
        Curry3P2 { f: self.f, a, b }
    }

    /// Full application in one step.
    pub fn apply3<A, B, C, R>(self, a: A, b: B, c: C) -> R
    where
        F: FnOnce(A, B, C) -> R,
    {
        (self.f)(a, b, c)
    }
}

impl<F, A> Curry3P1<F, A> {
    pub fn apply<B>(self, b: B) -> Curry3P2<F, A, B> {
        Curry3P2 {
            f: self.f,
            a: self.a,
            b,
        }
    }

    pub fn apply2<B, C, R>(self, b: B, c: C) -> R
    where
        F: FnOnce(A, B, C) -> R,
    {
        (self.f)(self.a, b, c)
    }
}

impl<F, A, B> Curry3P2<F, A, B> {
    pub fn apply<C, R>(self, c: C) -> R
    where
        F: FnOnce(A, B, C) -> R,
    {
        (self.f)(self.a, self.b, c)
    }
}
