//! Currying, composition, and functor containers for building pointfree
//! pipelines.
//!
//! Plain functions are lifted into containers ([`Identity`], [`Maybe`],
//! [`Either`], [`Io`], [`Task`]) so that absence, branching failure, and
//! deferred or asynchronous effects are expressed structurally, once, instead
//! of via repeated conditional checks at every call site.

pub mod compose;
pub mod curry;
pub mod either;
pub mod functor;
pub mod identity;
pub mod io;
pub mod maybe;
pub mod task;

pub use crate::compose::{compose, pipe, tap};
pub use crate::curry::{curry2, curry3};
pub use crate::either::{Either, Left, Right};
pub use crate::functor::Functor;
pub use crate::identity::Identity;
pub use crate::io::Io;
pub use crate::maybe::{Just, Maybe, Nothing};
pub use crate::task::{Reject, Resolve, Task};
