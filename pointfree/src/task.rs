//! An asynchronous computation that will eventually succeed or fail.
//!
//! [`Task`] mirrors [`crate::Io`]'s laziness for single-shot asynchronous
//! effects: construction wraps a registration callback without invoking it,
//! `map` stacks transformations on the eventual success value, and
//! [`Task::fork`] is the one explicit execution trigger.
//!
//! The model is single-threaded and callback-driven. A registration may
//! settle synchronously or hand its `resolve`/`reject` callback to a local
//! executor for later; nothing here is `Send`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[cfg(feature = "experimental")]
use futures::future::LocalBoxFuture;

/// Failure callback handed to a [`Task`] registration.
pub type Reject<E> = Box<dyn FnOnce(E)>;
/// Success callback handed to a [`Task`] registration.
pub type Resolve<T> = Box<dyn FnOnce(T)>;

/// A lazy asynchronous computation settling with either a failure of type
/// `E` or a success of type `T`.
///
/// Each [`Task::fork`] runs the registration afresh: results are not
/// memoized, and two forks of the same task are independent executions.
///
/// ```rust
/// use pointfree::Task;
///
/// let task = Task::<&str, i32>::of(5).map(|n| n * 2);
/// task.fork(
///     |_err| unreachable!("registration only resolves"),
///     |n| assert_eq!(n, 10),
/// );
/// ```
pub struct Task<E, T> {
    run: Rc<dyn Fn(Reject<E>, Resolve<T>)>,
}

impl<E, T> Clone for Task<E, T> {
    fn clone(&self) -> Self {
        Task {
            run: Rc::clone(&self.run),
        }
    }
}

impl<E: 'static, T: 'static> Task<E, T> {
    /// Wrap a registration callback. It is not invoked until [`Task::fork`].
    ///
    /// The registration must eventually call exactly one of its two
    /// callbacks, exactly once. Surplus settlements are discarded by the
    /// per-fork latch rather than signalled.
    pub fn new(run: impl Fn(Reject<E>, Resolve<T>) + 'static) -> Self {
        Task { run: Rc::new(run) }
    }

    /// A task that resolves immediately with `value` when forked.
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        Task::new(move |_reject, resolve| resolve(value.clone()))
    }

    /// A task that rejects immediately with `err` when forked.
    pub fn rejected(err: E) -> Self
    where
        E: Clone,
    {
        Task::new(move |reject, _resolve| reject(err.clone()))
    }

    /// Transform the eventual success value. A rejection bypasses `f`
    /// entirely and propagates unchanged.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Task<E, U> {
        let run = self.run;
        let f = Rc::new(f);
        Task::new(move |reject, resolve| {
            let f = Rc::clone(&f);
            (*run)(reject, Box::new(move |value| resolve((*f)(value))))
        })
    }

    /// Transform the eventual rejection value, the dual of [`Task::map`].
    pub fn map_rejected<D: 'static>(self, f: impl Fn(E) -> D + 'static) -> Task<D, T> {
        let run = self.run;
        let f = Rc::new(f);
        Task::new(move |reject, resolve| {
            let f = Rc::clone(&f);
            (*run)(Box::new(move |err| reject((*f)(err))), resolve)
        })
    }

    /// Sequence a dependent task after this one's success.
    ///
    /// On resolution, the task produced by `f` is forked with the same final
    /// handlers; a rejection at either stage short-circuits past everything
    /// downstream.
    pub fn and_then<U: 'static>(self, f: impl Fn(T) -> Task<E, U> + 'static) -> Task<E, U> {
        let run = self.run;
        let f = Rc::new(f);
        Task::new(move |reject, resolve| {
            let f = Rc::clone(&f);
            // one FnOnce rejection handler, reachable from both stages;
            // only the stage that actually fails takes it
            let reject = Rc::new(RefCell::new(Some(reject)));
            let late_reject = Rc::clone(&reject);
            (*run)(
                Box::new(move |err| {
                    if let Some(reject) = reject.borrow_mut().take() {
                        reject(err)
                    }
                }),
                Box::new(move |value| {
                    (*f)(value).fork(
                        move |err| {
                            if let Some(reject) = late_reject.borrow_mut().take() {
                                reject(err)
                            }
                        },
                        resolve,
                    )
                }),
            )
        })
    }

    /// Execute the (possibly composed) registration.
    ///
    /// Exactly one of `on_reject`/`on_resolve` is eventually invoked, exactly
    /// once, with the final error or final mapped value: a per-fork latch
    /// moves the execution from pending to settled on the first callback and
    /// discards anything after. Forking again re-runs the underlying effect
    /// independently.
    pub fn fork(&self, on_reject: impl FnOnce(E) + 'static, on_resolve: impl FnOnce(T) + 'static) {
        let settled = Rc::new(Cell::new(false));
        let latch = Rc::clone(&settled);
        (*self.run)(
            Box::new(move |err| {
                if !settled.replace(true) {
                    on_reject(err)
                }
            }),
            Box::new(move |value| {
                if !latch.replace(true) {
                    on_resolve(value)
                }
            }),
        )
    }

    /// Adapt a future-producing function into a task.
    ///
    /// Each fork calls `make` afresh and spawns the future on the current
    /// thread's `LocalSet`, settling from its output. Must be forked within
    /// a `tokio::task::LocalSet` context.
    #[cfg(feature = "experimental")]
    pub fn from_future<M>(make: M) -> Self
    where
        M: Fn() -> LocalBoxFuture<'static, Result<T, E>> + 'static,
    {
        Task::new(move |reject, resolve| {
            let fut = make();
            tokio::task::spawn_local(async move {
                match fut.await {
                    Ok(value) => resolve(value),
                    Err(err) => reject(err),
                }
            });
        })
    }
}

impl<E: 'static, A: 'static, B: 'static> crate::functor::Functor<B> for Task<E, A> {
    type Unwrapped = A;
    type To = Task<E, B>;

    fn fmap<F>(self, f: F) -> Task<E, B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(f)
    }
}
