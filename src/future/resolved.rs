// Copyright 2016 The vow Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::Rejection;
use crate::future::core::Settled;
use crate::future::Future;

/// What a settlement is made from
///
/// Either an immediate outcome, or another future whose eventual outcome is
/// adopted once it settles. Continuation handlers and combinator inputs
/// convert into this through `From`, so a plain `Result` or a `Future` can
/// be handed back wherever a `Resolved` is expected.
pub enum Resolved<T, E> {
    /// An immediate settlement
    Done(Settled<T, E>),
    /// Adopt the eventual outcome of another future
    Pending(Future<T, E>),
}

impl<T, E> Resolved<T, E> {
    /// An immediate fulfillment
    pub fn value(value: T) -> Resolved<T, E> {
        Resolved::Done(Ok(value))
    }

    /// Re-raise an existing rejection without wrapping it again
    pub fn rethrow(rejection: Rejection<E>) -> Resolved<T, E> {
        Resolved::Done(Err(rejection))
    }
}

impl<T, E> From<Result<T, E>> for Resolved<T, E> {
    fn from(result: Result<T, E>) -> Resolved<T, E> {
        match result {
            Ok(value) => Resolved::Done(Ok(value)),
            Err(reason) => Resolved::Done(Err(Rejection::Reason(reason))),
        }
    }
}

impl<T, E> From<Future<T, E>> for Resolved<T, E> {
    fn from(future: Future<T, E>) -> Resolved<T, E> {
        Resolved::Pending(future)
    }
}

impl<E> From<()> for Resolved<(), E> {
    fn from(_: ()) -> Resolved<(), E> {
        Resolved::Done(Ok(()))
    }
}
