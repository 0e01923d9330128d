// Copyright 2016 The vow Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Aggregate combinators
//!
//! Every combinator accepts any iterable of settlement sources, so inputs
//! may freely mix futures with plain already-resolved values. Completion
//! bookkeeping is shared, unlocked state; single-threaded cooperative
//! dispatch means each continuation runs to completion before the next one
//! can touch it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Rejection;
use crate::future::core::Settled;
use crate::future::{make, Completer, Future, Resolved};

/// Per-input record produced by `Future::all_settled`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Fulfilled(T),
    Rejected(Rejection<E>),
}

impl<T, E> From<Settled<T, E>> for Outcome<T, E> {
    fn from(settled: Settled<T, E>) -> Outcome<T, E> {
        match settled {
            Ok(value) => Outcome::Fulfilled(value),
            Err(rejection) => Outcome::Rejected(rejection),
        }
    }
}

struct AllState<T, E> {
    slots: Vec<Option<T>>,
    waiting: usize,
    completer: Option<Completer<Vec<T>, E>>,
}

struct SettledState<T, E> {
    slots: Vec<Option<Outcome<T, E>>>,
    waiting: usize,
    completer: Option<Completer<Vec<Outcome<T, E>>, E>>,
}

struct AnyState<T, E> {
    rejections: Vec<Rejection<E>>,
    waiting: usize,
    completer: Option<Completer<T, E>>,
}

fn normalize<I, T, E>(inputs: I) -> Vec<Future<T, E>>
    where I: IntoIterator,
          I::Item: Into<Resolved<T, E>>,
          T: Clone + 'static,
          E: Clone + 'static
{
    inputs
        .into_iter()
        .map(|input| {
            let resolved: Resolved<T, E> = input.into();
            Future::from(resolved)
        })
        .collect()
}

impl<T, E> Future<T, E>
    where T: Clone + 'static,
          E: Clone + 'static
{
    /// Fulfill with every input's value in input order, or reject with the
    /// first rejection
    ///
    /// The first rejection settles the result immediately; whatever the
    /// remaining inputs do afterwards is ignored. An empty input fulfills
    /// with an empty vector right away.
    pub fn all<I>(inputs: I) -> Future<Vec<T>, E>
        where I: IntoIterator,
              I::Item: Into<Resolved<T, E>>
    {
        let sources = normalize(inputs);
        let (completer, future) = make();

        if sources.is_empty() {
            completer.resolve(Vec::new());
            return future;
        }

        let state = Rc::new(RefCell::new(AllState {
            slots: vec![None; sources.len()],
            waiting: sources.len(),
            completer: Some(completer),
        }));

        for (index, source) in sources.into_iter().enumerate() {
            let state = state.clone();

            source.subscribe(move |settled| {
                let mut state = state.borrow_mut();

                if state.completer.is_none() {
                    return;
                }

                match settled {
                    Ok(value) => {
                        state.slots[index] = Some(value);
                        state.waiting -= 1;

                        if state.waiting == 0 {
                            let completer = state.completer.take().expect("completer missing");
                            let values = state
                                .slots
                                .drain(..)
                                .map(|slot| slot.expect("slot missing"))
                                .collect();
                            completer.resolve(values);
                        }
                    }
                    Err(rejection) => {
                        let completer = state.completer.take().expect("completer missing");
                        completer.settle(Resolved::rethrow(rejection));
                    }
                }
            });
        }

        future
    }

    /// Adopt whichever input settles first, by either verb
    ///
    /// An empty input never settles.
    pub fn race<I>(inputs: I) -> Future<T, E>
        where I: IntoIterator,
              I::Item: Into<Resolved<T, E>>
    {
        let sources = normalize(inputs);
        let (completer, future) = make();
        let slot = Rc::new(RefCell::new(Some(completer)));

        for source in sources {
            let slot = slot.clone();

            source.subscribe(move |settled| {
                if let Some(completer) = slot.borrow_mut().take() {
                    completer.settle(Resolved::Done(settled));
                }
            });
        }

        future
    }

    /// Fulfill with one outcome record per input once every input settles
    ///
    /// Never rejects; records keep input order regardless of completion
    /// order. An empty input fulfills with an empty vector right away.
    pub fn all_settled<I>(inputs: I) -> Future<Vec<Outcome<T, E>>, E>
        where I: IntoIterator,
              I::Item: Into<Resolved<T, E>>
    {
        let sources = normalize(inputs);
        let (completer, future) = make();

        if sources.is_empty() {
            completer.resolve(Vec::new());
            return future;
        }

        let state = Rc::new(RefCell::new(SettledState {
            slots: vec![None; sources.len()],
            waiting: sources.len(),
            completer: Some(completer),
        }));

        for (index, source) in sources.into_iter().enumerate() {
            let state = state.clone();

            source.subscribe(move |settled| {
                let mut state = state.borrow_mut();

                state.slots[index] = Some(Outcome::from(settled));
                state.waiting -= 1;

                if state.waiting == 0 {
                    let completer = state.completer.take().expect("completer missing");
                    let outcomes = state
                        .slots
                        .drain(..)
                        .map(|slot| slot.expect("slot missing"))
                        .collect();
                    completer.resolve(outcomes);
                }
            });
        }

        future
    }

    /// Fulfill with the first input to fulfill
    ///
    /// If every input rejects, reject with the aggregate of all their
    /// rejections in completion order. An empty input rejects with an empty
    /// aggregate right away.
    pub fn any<I>(inputs: I) -> Future<T, E>
        where I: IntoIterator,
              I::Item: Into<Resolved<T, E>>
    {
        let sources = normalize(inputs);
        let (completer, future) = make();

        if sources.is_empty() {
            completer.settle(Resolved::rethrow(Rejection::Aggregate(Vec::new())));
            return future;
        }

        let state = Rc::new(RefCell::new(AnyState {
            rejections: Vec::new(),
            waiting: sources.len(),
            completer: Some(completer),
        }));

        for source in sources {
            let state = state.clone();

            source.subscribe(move |settled| {
                let mut state = state.borrow_mut();

                if state.completer.is_none() {
                    return;
                }

                match settled {
                    Ok(value) => {
                        let completer = state.completer.take().expect("completer missing");
                        completer.resolve(value);
                    }
                    Err(rejection) => {
                        state.rejections.push(rejection);
                        state.waiting -= 1;

                        if state.waiting == 0 {
                            let completer = state.completer.take().expect("completer missing");
                            let rejections = state.rejections.drain(..).collect();
                            completer.settle(Resolved::rethrow(Rejection::Aggregate(rejections)));
                        }
                    }
                }
            });
        }

        future
    }
}
