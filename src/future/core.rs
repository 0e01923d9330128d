// Copyright 2016 The vow Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use crate::error::Rejection;
use crate::future::Status;
use crate::scheduler::Scheduler;

/// The settled form of a future
pub type Settled<T, E> = Result<T, Rejection<E>>;

type Continuation<T, E> = Box<dyn FnOnce(Settled<T, E>) + 'static>;

/// Shared settlement state
///
/// Settling is exactly-once; a late settlement is a silent no-op.
/// Continuations registered while pending are dispatched in registration
/// order at settlement, each with its own copy of the outcome, and every
/// dispatch goes through the scheduler.
pub struct Core<T, E> {
    inner: RefCell<Inner<T, E>>,
}

struct Inner<T, E> {
    status: Status,
    result: Option<Settled<T, E>>,
    continuations: Vec<Continuation<T, E>>,
}

impl<T, E> Core<T, E>
    where T: Clone + 'static,
          E: Clone + 'static
{
    pub fn new(result: Option<Settled<T, E>>) -> Rc<Core<T, E>> {
        let status = match result {
            None => Status::Pending,
            Some(Ok(..)) => Status::Fulfilled,
            Some(Err(..)) => Status::Rejected,
        };

        Rc::new(Core {
            inner: RefCell::new(Inner {
                status: status,
                result: result,
                continuations: Vec::new(),
            }),
        })
    }

    /// Settle the core, first write wins
    pub fn settle(&self, result: Settled<T, E>) {
        let continuations = {
            let mut inner = self.inner.borrow_mut();

            if inner.status != Status::Pending {
                trace!("ignoring settlement of an already settled future");
                return;
            }

            inner.status = match result {
                Ok(..) => Status::Fulfilled,
                Err(..) => Status::Rejected,
            };
            inner.result = Some(result.clone());

            mem::replace(&mut inner.continuations, Vec::new())
        };

        for continuation in continuations {
            let result = result.clone();
            Scheduler::schedule(move || continuation(result));
        }
    }

    /// Register a continuation on the settled outcome
    ///
    /// If the core has already settled the continuation is scheduled right
    /// away; either way it never runs synchronously inside this call.
    pub fn subscribe<F>(&self, f: F)
        where F: FnOnce(Settled<T, E>) + 'static
    {
        let settled = {
            let mut inner = self.inner.borrow_mut();

            if inner.status == Status::Pending {
                inner.continuations.push(Box::new(f));
                return;
            }

            inner.result.clone().expect("settled without a result")
        };

        Scheduler::schedule(move || f(settled));
    }

    pub fn status(&self) -> Status {
        self.inner.borrow().status
    }

    pub fn result(&self) -> Option<Settled<T, E>> {
        self.inner.borrow().result.clone()
    }
}
