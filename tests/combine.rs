extern crate vow;

use vow::{make, Future, Outcome, Rejection, Resolved, Scheduler, Status};

#[test]
fn test_all_keeps_input_order() {
    let (slow, pending) = make::<i32, &str>();
    let combined = Future::all(vec![pending, Future::resolved(2), Future::resolved(3)]);

    slow.resolve(1);
    Scheduler::run_until_idle();

    assert_eq!(combined.result(), Some(Ok(vec![1, 2, 3])));
}

#[test]
fn test_all_of_nothing_fulfills_immediately() {
    let combined = Future::all(Vec::<Future<i32, &str>>::new());

    assert_eq!(combined.result(), Some(Ok(Vec::new())));
}

#[test]
fn test_all_mixes_futures_and_plain_values() {
    let inputs: Vec<Resolved<i32, &str>> = vec![
        Resolved::value(1),
        Resolved::from(Ok(2)),
        Resolved::Pending(Future::resolved(3)),
    ];

    let combined = Future::all(inputs);
    Scheduler::run_until_idle();

    assert_eq!(combined.result(), Some(Ok(vec![1, 2, 3])));
}

#[test]
fn test_all_rejects_with_the_first_rejection() {
    let (never, pending) = make::<i32, &str>();
    let combined = Future::all(vec![Future::rejected("boom"), pending]);

    Scheduler::run_until_idle();
    assert_eq!(combined.result(), Some(Err(Rejection::Reason("boom"))));

    // the forever pending input is never revisited
    drop(never);
    Scheduler::run_until_idle();
    assert_eq!(combined.result(), Some(Err(Rejection::Reason("boom"))));
}

#[test]
fn test_all_ignores_fulfillments_after_a_rejection() {
    let (late, pending) = make::<i32, &str>();
    let combined = Future::all(vec![Future::rejected("boom"), pending]);

    Scheduler::run_until_idle();
    late.resolve(5);
    Scheduler::run_until_idle();

    assert_eq!(combined.result(), Some(Err(Rejection::Reason("boom"))));
}

#[test]
fn test_race_rejects_with_the_first_settlement() {
    let (slow, delayed) = make::<&str, &str>();
    let winner = Future::race(vec![delayed, Future::rejected("b")]);

    slow.resolve("a");
    Scheduler::run_until_idle();

    assert_eq!(winner.result(), Some(Err(Rejection::Reason("b"))));
}

#[test]
fn test_race_adopts_the_first_to_settle() {
    let (first, fa) = make::<i32, &str>();
    let (second, fb) = make::<i32, &str>();
    let winner = Future::race(vec![fa, fb]);

    second.resolve(2);
    first.resolve(1);
    Scheduler::run_until_idle();

    assert_eq!(winner.result(), Some(Ok(2)));
}

#[test]
fn test_race_of_nothing_never_settles() {
    let winner = Future::race(Vec::<Future<i32, &str>>::new());

    Scheduler::run_until_idle();
    assert_eq!(winner.status(), Status::Pending);
}

#[test]
fn test_all_settled_reports_every_outcome() {
    let combined = Future::all_settled(vec![Future::resolved(1), Future::rejected("e")]);

    Scheduler::run_until_idle();
    assert_eq!(
        combined.result(),
        Some(Ok(vec![
            Outcome::Fulfilled(1),
            Outcome::Rejected(Rejection::Reason("e")),
        ]))
    );
}

#[test]
fn test_all_settled_keeps_input_order_regardless_of_completion() {
    let (first, fa) = make::<i32, &str>();
    let (second, fb) = make::<i32, &str>();
    let combined = Future::all_settled(vec![fa, fb]);

    second.reject("late");
    first.resolve(1);
    Scheduler::run_until_idle();

    assert_eq!(
        combined.result(),
        Some(Ok(vec![
            Outcome::Fulfilled(1),
            Outcome::Rejected(Rejection::Reason("late")),
        ]))
    );
}

#[test]
fn test_all_settled_of_nothing_fulfills_immediately() {
    let combined = Future::all_settled(Vec::<Future<i32, &str>>::new());

    assert_eq!(combined.result(), Some(Ok(Vec::new())));
}

#[test]
fn test_any_takes_the_first_fulfillment() {
    let combined = Future::any(vec![Future::rejected("a"), Future::resolved(42)]);

    Scheduler::run_until_idle();
    assert_eq!(combined.result(), Some(Ok(42)));
}

#[test]
fn test_any_aggregates_rejections_in_completion_order() {
    let (first, fa) = make::<i32, &str>();
    let (second, fb) = make::<i32, &str>();
    let combined = Future::any(vec![fa, fb]);

    second.reject("b");
    first.reject("a");
    Scheduler::run_until_idle();

    assert_eq!(
        combined.result(),
        Some(Err(Rejection::Aggregate(vec![
            Rejection::Reason("b"),
            Rejection::Reason("a"),
        ])))
    );
}

#[test]
fn test_any_aggregates_already_rejected_inputs_in_order() {
    let combined: Future<i32, &str> =
        Future::any(vec![Future::rejected("a"), Future::rejected("b")]);

    Scheduler::run_until_idle();

    assert_eq!(
        combined.result(),
        Some(Err(Rejection::Aggregate(vec![
            Rejection::Reason("a"),
            Rejection::Reason("b"),
        ])))
    );
}

#[test]
fn test_any_of_nothing_rejects_immediately() {
    let combined = Future::any(Vec::<Future<i32, &str>>::new());

    assert_eq!(combined.result(), Some(Err(Rejection::Aggregate(Vec::new()))));
}

#[test]
fn test_any_ignores_rejections_after_a_fulfillment() {
    let (late, pending) = make::<i32, &str>();
    let combined = Future::any(vec![Future::resolved(1), pending]);

    Scheduler::run_until_idle();
    late.reject("late");
    Scheduler::run_until_idle();

    assert_eq!(combined.result(), Some(Ok(1)));
}
