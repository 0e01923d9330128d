// Copyright 2016 The vow Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::rc::Rc;

use crate::error::Rejection;
use crate::future::core::Core;
use crate::future::Resolved;

/// The write half of a future
///
/// A `Completer` is consumed by whichever settlement method runs first, so a
/// second settlement through the same capability is impossible by
/// construction; the core additionally ignores late settlements arriving
/// from an adopted future.
pub struct Completer<T, E>(Rc<Core<T, E>>);

impl<T, E> Completer<T, E>
    where T: Clone + 'static,
          E: Clone + 'static
{
    pub(crate) fn with_core(core: Rc<Core<T, E>>) -> Completer<T, E> {
        Completer(core)
    }

    /// Fulfill the future with a value
    pub fn resolve(self, value: T) {
        self.settle(Resolved::Done(Ok(value)));
    }

    /// Reject the future with a reason
    pub fn reject(self, reason: E) {
        self.settle(Resolved::Done(Err(Rejection::Reason(reason))));
    }

    /// Settle the future from any settlement source
    ///
    /// An immediate outcome settles the future directly. Another future is
    /// adopted: once it settles, its outcome carries over unchanged. A
    /// future backed by this completer's own core would wait on itself, so
    /// that case rejects with `Rejection::Cycle` instead of hanging.
    pub fn settle(self, resolved: Resolved<T, E>) {
        let Completer(core) = self;

        match resolved {
            Resolved::Done(result) => core.settle(result),
            Resolved::Pending(future) => {
                if Rc::ptr_eq(future.core(), &core) {
                    core.settle(Err(Rejection::Cycle));
                } else {
                    future.subscribe(move |settled| core.settle(settled));
                }
            }
        }
    }
}
