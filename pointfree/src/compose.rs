//! Function composition for pointfree pipelines.

/// Right-to-left composition: `compose(f, g)` is the function `|x| f(g(x))`.
///
/// Both stages are always invoked; there is no short-circuiting. Stages are
/// typically curried functions supplied with all but their last argument.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

/// Left-to-right dual of [`compose`]: `pipe(g, f)` is the function
/// `|x| f(g(x))`, reading in application order.
pub fn pipe<A, B, C>(g: impl Fn(A) -> B, f: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

/// Pass-through observation of a value mid-pipeline.
///
/// The observer is an injected effect, handed the value by reference before
/// it flows on unchanged. Insert between composition stages to trace
/// intermediate values without a process-global logger:
///
/// ```rust
/// use std::cell::RefCell;
/// use pointfree::{compose, tap};
///
/// let seen = RefCell::new(Vec::new());
/// let shout = compose(
///     |s: String| format!("{s}!"),
///     tap(|s: &String| seen.borrow_mut().push(s.clone())),
/// );
/// assert_eq!(shout("hi there".to_uppercase()), "HI THERE!");
/// drop(shout);
/// assert_eq!(seen.into_inner(), vec!["HI THERE".to_string()]);
/// ```
pub fn tap<T>(observer: impl Fn(&T)) -> impl Fn(T) -> T {
    move |x| {
        observer(&x);
        x
    }
}

/// Right-to-left composition of any number of unary functions:
/// `compose!(f1, f2, ..., fn)` is the function `|x| f1(f2(...fn(x)))`.
///
/// A single function composes to itself. Zero functions do not compose; the
/// empty invocation is rejected at compile time.
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::compose($f, $crate::compose!($($rest),+))
    };
}
