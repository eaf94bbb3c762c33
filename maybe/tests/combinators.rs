use maybe::Maybe;
use std::cell::Cell;

fn probe<'a, T: 'a>(counter: &'a Cell<u32>, value: T) -> impl 'a + FnOnce() -> T {
    move || {
        counter.set(counter.get() + 1);
        value
    }
}

#[test]
fn unwrap_or_returns_value_or_default() {
    assert_eq!(Maybe::some(3).unwrap_or(9), 3);
    assert_eq!(Maybe::none().unwrap_or(9), 9);
}

#[test]
fn unwrap_or_else_is_lazy() {
    let calls = Cell::new(0);
    assert_eq!(Maybe::some(3).unwrap_or_else(probe(&calls, 9)), 3);
    assert_eq!(calls.get(), 0);
    assert_eq!(Maybe::none().unwrap_or_else(probe(&calls, 9)), 9);
    assert_eq!(calls.get(), 1);
}

#[test]
fn map_only_runs_when_present() {
    let calls = Cell::new(0);
    let double = |v: i32| {
        calls.set(calls.get() + 1);
        v * 2
    };
    assert_eq!(Maybe::some(4).map(double).unwrap(), 8);
    assert_eq!(calls.get(), 1);
    assert_eq!(Maybe::none().map(double), Maybe::none());
    assert_eq!(calls.get(), 1);
}

#[test]
fn map_or_and_map_or_else() {
    assert_eq!(Maybe::some("foo").map_or(42, |s| s.len()), 3);
    assert_eq!(Maybe::<&str>::none().map_or(42, |s| s.len()), 42);

    let calls = Cell::new(0);
    assert_eq!(
        Maybe::some("foo").map_or_else(probe(&calls, 42), |s| s.len()),
        3
    );
    assert_eq!(calls.get(), 0);
    assert_eq!(
        Maybe::<&str>::none().map_or_else(probe(&calls, 42), |s| s.len()),
        42
    );
    assert_eq!(calls.get(), 1);
}

#[test]
fn and_returns_other_only_when_present() {
    assert_eq!(Maybe::some(2).and(Maybe::some("x")), Maybe::some("x"));
    assert_eq!(Maybe::some(2).and(Maybe::<&str>::none()), Maybe::none());
    assert_eq!(Maybe::<i32>::none().and(Maybe::some("x")), Maybe::none());
}

#[test]
fn and_then_short_circuits() {
    let calls = Cell::new(0);
    let checked_half = |v: i32| {
        calls.set(calls.get() + 1);
        if v % 2 == 0 {
            Maybe::some(v / 2)
        } else {
            Maybe::none()
        }
    };
    assert_eq!(Maybe::some(8).and_then(checked_half), Maybe::some(4));
    assert_eq!(Maybe::some(3).and_then(checked_half), Maybe::none());
    assert_eq!(calls.get(), 2);
    assert_eq!(Maybe::none().and_then(checked_half), Maybe::none());
    assert_eq!(calls.get(), 2);
}

#[test]
fn filter_keeps_matching_values() {
    let is_even = |v: &i32| v % 2 == 0;
    assert_eq!(Maybe::some(4).filter(is_even), Maybe::some(4));
    assert_eq!(Maybe::some(3).filter(is_even), Maybe::none());
    assert_eq!(Maybe::none().filter(is_even), Maybe::none());
}

#[test]
fn or_prefers_receiver() {
    assert_eq!(Maybe::some(2).or(Maybe::some(100)), Maybe::some(2));
    assert_eq!(Maybe::none().or(Maybe::some(100)), Maybe::some(100));
    assert_eq!(Maybe::some(2).or(Maybe::none()), Maybe::some(2));
    assert_eq!(Maybe::<i32>::none().or(Maybe::none()), Maybe::none());
}

#[test]
fn or_else_is_lazy() {
    let calls = Cell::new(0);
    assert_eq!(
        Maybe::some("a").or_else(probe(&calls, Maybe::some("b"))),
        Maybe::some("a")
    );
    assert_eq!(calls.get(), 0);
    assert_eq!(
        Maybe::none().or_else(probe(&calls, Maybe::some("b"))),
        Maybe::some("b")
    );
    assert_eq!(calls.get(), 1);
}

#[test]
fn xor_keeps_the_single_present_side() {
    assert_eq!(Maybe::some(4).xor(Maybe::some(5)), Maybe::none());
    assert_eq!(Maybe::some(4).xor(Maybe::none()), Maybe::some(4));
    assert_eq!(Maybe::none().xor(Maybe::some(5)), Maybe::some(5));
    assert_eq!(Maybe::<i32>::none().xor(Maybe::none()), Maybe::none());
}

#[test]
fn zip_pairs_present_values() {
    assert_eq!(Maybe::some(1).zip(Maybe::some("hi")), Maybe::some((1, "hi")));
    assert_eq!(Maybe::some(1).zip(Maybe::<&str>::none()), Maybe::none());
    assert_eq!(Maybe::<i32>::none().zip(Maybe::some("hi")), Maybe::none());
    assert_eq!(
        Maybe::some((1, "hi")).unzip(),
        (Maybe::some(1), Maybe::some("hi"))
    );
}

#[test]
fn flatten_removes_one_level() {
    assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());
}

#[test]
fn contains_compares_by_value() {
    assert!(Maybe::some(String::from("a")).contains(&"a"));
    assert!(!Maybe::some(2).contains(&3));
    assert!(!Maybe::<i32>::none().contains(&2));
}

#[test]
fn take_leaves_absent_behind() {
    let mut x = Maybe::some(2);
    assert_eq!(x.take(), Maybe::some(2));
    assert!(x.is_absent());
    assert_eq!(x.take(), Maybe::none());
    assert!(x.is_absent());
}

#[test]
fn replace_returns_prior_state() {
    let mut x = Maybe::some(2);
    let old = x.replace(5);
    assert_eq!(x, Maybe::some(5));
    assert_eq!(old, Maybe::some(2));

    let mut y = Maybe::none();
    let old = y.replace(3);
    assert_eq!(y, Maybe::some(3));
    assert_eq!(old, Maybe::none());
}

#[test]
fn get_or_insert_keeps_existing_value() {
    let mut x = Maybe::none();
    assert_eq!(*x.get_or_insert(5), 5);
    assert_eq!(*x.get_or_insert(7), 5);
    assert_eq!(x, Maybe::some(5));

    let mut y: Maybe<Vec<i32>> = Maybe::none();
    y.get_or_insert_default().push(1);
    y.get_or_insert_default().push(2);
    assert_eq!(y, Maybe::some(vec![1, 2]));
}

#[test]
fn get_or_insert_with_is_lazy() {
    let calls = Cell::new(0);
    let mut x = Maybe::none();
    assert_eq!(*x.get_or_insert_with(probe(&calls, 1)), 1);
    assert_eq!(calls.get(), 1);
    assert_eq!(*x.get_or_insert_with(probe(&calls, 2)), 1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn combinators_leave_the_receiver_untouched() {
    let x = Maybe::some(String::from("kept"));
    let _ = x.as_ref().map(|s| s.len());
    let _ = x.iter().count();
    assert!(x.contains(&"kept"));
    assert_eq!(x.clone().filter(|_| false), Maybe::none());
    assert_eq!(x, Maybe::some(String::from("kept")));
}

#[test]
fn reference_adapters() {
    let mut x = Maybe::some(1);
    if let Maybe::Present(v) = x.as_mut() {
        *v = 2;
    }
    assert_eq!(x.as_ref().copied(), Maybe::some(2));
    let s = Maybe::some(String::from("s"));
    assert_eq!(s.as_ref().cloned(), s);
}

#[test]
fn predicates_with_closures() {
    assert!(Maybe::some(2).is_present_and(|v| v > 1));
    assert!(!Maybe::<i32>::none().is_present_and(|v| v > 1));
    assert!(Maybe::<i32>::none().is_absent_or(|v| v > 1));
    assert!(!Maybe::some(0).is_absent_or(|v| v > 1));
}

#[test]
fn inspect_sees_present_values_only() {
    let seen = Cell::new(0);
    let x = Maybe::some(7).inspect(|v| seen.set(*v));
    assert_eq!(seen.get(), 7);
    assert_eq!(x, Maybe::some(7));
    Maybe::<i32>::none().inspect(|_| seen.set(-1));
    assert_eq!(seen.get(), 7);
}
