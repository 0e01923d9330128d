// Copyright 2016 The vow Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate env_logger;
extern crate vow;

use vow::{Future, Rejection};

fn main() {
    env_logger::init();

    let settled = vow::run(|| {
        let future = Future::new(|completer| {
            if true {
                completer.resolve(1.23);
                Ok(())
            } else {
                Err("final error")
            }
        });

        future.then(
            |price| {
                assert_eq!(price, 1.23);
                Ok(34)
            },
            |err| {
                assert_eq!(err, Rejection::Reason("final error"));
                Ok(35)
            },
        )
    });

    assert_eq!(settled.result(), Some(Ok(34)));
    println!("chain settled with {:?}", settled.result());
}
