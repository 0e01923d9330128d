// Copyright 2016 The vow Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate env_logger;
extern crate vow;

use vow::{make, Future};

fn main() {
    env_logger::init();

    vow::run(|| {
        let (slow, pending) = make::<i32, &str>();

        let total = Future::all(vec![Future::resolved(1), Future::resolved(2), pending.clone()]);
        total.success(|values| {
            println!("all      -> {:?}", values);
            Ok(())
        });

        let winner = Future::race(vec![pending.clone(), Future::resolved(10)]);
        winner.success(|value| {
            println!("race     -> {:?}", value);
            Ok(())
        });

        let report = Future::all_settled(vec![pending.clone(), Future::rejected("down")]);
        report.success(|outcomes| {
            println!("settled  -> {:?}", outcomes);
            Ok(())
        });

        let survivor = Future::any(vec![Future::rejected("down"), pending]);
        survivor.success(|value| {
            println!("any      -> {:?}", value);
            Ok(())
        });

        slow.resolve(3);
    });
}
