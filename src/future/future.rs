// Copyright 2016 The vow Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::rc::Rc;

use crate::error::Rejection;
use crate::future::core::{Core, Settled};
use crate::future::{make, Completer, Resolved, Status};

/// An eventual value, fulfilled with a `T` or rejected with a `Rejection<E>`
///
/// A `Future` is a cheap clone of a shared settlement core. Any number of
/// observers may chain continuations onto the same core; each continuation
/// receives its own copy of the settled outcome, which is why the observer
/// API asks for `Clone`.
pub struct Future<T, E>(Rc<Core<T, E>>);

impl<T, E> Clone for Future<T, E> {
    fn clone(&self) -> Future<T, E> {
        Future(self.0.clone())
    }
}

impl<T, E> Future<T, E>
    where T: Clone + 'static,
          E: Clone + 'static
{
    pub(crate) fn with_core(core: Rc<Core<T, E>>) -> Future<T, E> {
        Future(core)
    }

    pub(crate) fn core(&self) -> &Rc<Core<T, E>> {
        &self.0
    }

    /// Construct a future driven by an executor
    ///
    /// The executor runs synchronously and settles the future through the
    /// completer it receives. Returning `Err` rejects the future, unless the
    /// executor settled it first.
    pub fn new<F>(executor: F) -> Future<T, E>
        where F: FnOnce(Completer<T, E>) -> Result<(), E>
    {
        let (completer, future) = make();
        let core = future.0.clone();

        if let Err(reason) = executor(completer) {
            core.settle(Err(Rejection::Reason(reason)));
        }

        future
    }

    /// A future fulfilled with `value`
    pub fn resolved(value: T) -> Future<T, E> {
        Future(Core::new(Some(Ok(value))))
    }

    /// A future rejected with `reason`
    pub fn rejected(reason: E) -> Future<T, E> {
        Future(Core::new(Some(Err(Rejection::Reason(reason)))))
    }

    /// Current settlement state
    pub fn status(&self) -> Status {
        self.0.status()
    }

    /// The settled outcome, if there is one yet
    pub fn result(&self) -> Option<Settled<T, E>> {
        self.0.result()
    }

    /// Register a continuation on the raw settled outcome
    ///
    /// The continuation is dispatched through the scheduler even when the
    /// future has already settled, so it never runs inside this call.
    pub fn subscribe<F>(&self, f: F)
        where F: FnOnce(Settled<T, E>) + 'static
    {
        self.0.subscribe(f);
    }

    /// Chain both settlement paths
    ///
    /// Whichever handler runs, its return value settles the derived future:
    /// a `Result` settles it immediately, a `Future` is adopted, and an
    /// explicit `Resolved` does either. `then` always returns before either
    /// handler can run.
    pub fn then<U, F, R, FO, RO>(&self, on_fulfilled: F, on_rejected: R) -> Future<U, E>
        where U: Clone + 'static,
              F: FnOnce(T) -> FO + 'static,
              R: FnOnce(Rejection<E>) -> RO + 'static,
              FO: Into<Resolved<U, E>>,
              RO: Into<Resolved<U, E>>
    {
        let (completer, future) = make();

        self.subscribe(move |settled| {
            let resolved = match settled {
                Ok(value) => on_fulfilled(value).into(),
                Err(rejection) => on_rejected(rejection).into(),
            };

            completer.settle(resolved);
        });

        future
    }

    /// Chain the fulfillment path, passing rejections through unchanged
    pub fn success<U, F, FO>(&self, on_fulfilled: F) -> Future<U, E>
        where U: Clone + 'static,
              F: FnOnce(T) -> FO + 'static,
              FO: Into<Resolved<U, E>>
    {
        self.then(on_fulfilled, Resolved::rethrow)
    }

    /// Chain the rejection path, passing fulfillments through unchanged
    pub fn catch<R, RO>(&self, on_rejected: R) -> Future<T, E>
        where R: FnOnce(Rejection<E>) -> RO + 'static,
              RO: Into<Resolved<T, E>>
    {
        self.then(Resolved::value, on_rejected)
    }

    /// Run `on_finally` on either settlement path, then pass the original
    /// outcome through unchanged
    ///
    /// `on_finally` does not observe the outcome. If it hands back a future,
    /// the original outcome is withheld until that future settles; a
    /// rejection raised by `on_finally` itself takes the outcome's place.
    pub fn finally<F, FO>(&self, on_finally: F) -> Future<T, E>
        where F: FnOnce() -> FO + 'static,
              FO: Into<Resolved<(), E>>
    {
        let (completer, future) = make();

        self.subscribe(move |settled| {
            let resolved: Resolved<(), E> = on_finally().into();
            let gate = Future::from(resolved);

            gate.subscribe(move |ran| match ran {
                Ok(()) => completer.settle(Resolved::Done(settled)),
                Err(rejection) => completer.settle(Resolved::rethrow(rejection)),
            });
        });

        future
    }
}

impl<T, E> From<Resolved<T, E>> for Future<T, E>
    where T: Clone + 'static,
          E: Clone + 'static
{
    /// A future from any settlement source
    ///
    /// A source that is already a future comes back unchanged, without a
    /// second layer of wrapping.
    fn from(resolved: Resolved<T, E>) -> Future<T, E> {
        match resolved {
            Resolved::Pending(future) => future,
            Resolved::Done(result) => Future(Core::new(Some(result))),
        }
    }
}

impl<T, E> From<Result<T, E>> for Future<T, E>
    where T: Clone + 'static,
          E: Clone + 'static
{
    fn from(result: Result<T, E>) -> Future<T, E> {
        Future::from(Resolved::from(result))
    }
}
