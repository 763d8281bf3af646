#![cfg(test)]

use std::cell::Cell;

use super::*;

#[derive(Default)]
struct Tracked {
    items: Vec<u32>,
    calculations: Cell<usize>,
}

fn count(tracked: &Tracked) -> usize {
    tracked.calculations.set(tracked.calculations.get() + 1);
    tracked.items.len()
}

fn doubled(tracked: &Tracked) -> usize {
    tracked.items.len() * 2
}

#[test]
fn test_cache() {
    let mut tracked = Tracked::default();
    let size = SizeController::new(count);

    assert_eq!(size.cached(), None, "A new controller shouldn't have a cached count.");
    assert_eq!(size.get(&tracked), 0);
    assert_eq!(size.get(&tracked), 0);
    assert_eq!(
        tracked.calculations.get(),
        1,
        "The second read should be served from the cache."
    );

    size.get_forced(&tracked);
    assert_eq!(tracked.calculations.get(), 2, "A forced read should always recalculate.");

    size.mutate(&mut tracked, |tracked| tracked.items.push(7));
    assert_eq!(size.cached(), None, "Mutating should clear the cache.");
    assert_eq!(size.get(&tracked), 1);
    assert_eq!(tracked.calculations.get(), 3);
}

#[test]
fn test_mutate_returns_result() {
    let mut tracked = Tracked::default();
    let size = SizeController::new(count);
    size.get(&tracked);

    let popped = size.mutate(&mut tracked, |tracked| tracked.items.pop());
    assert_eq!(popped, None, "The write's result should be passed through.");
    assert_eq!(
        size.cached(),
        None,
        "The cache should be cleared even if the write changed nothing."
    );
}

#[test]
fn test_set_calculate() {
    let tracked = Tracked {
        items: vec![1, 2, 3],
        ..Tracked::default()
    };
    let mut size = SizeController::new(count);
    assert_eq!(size.get(&tracked), 3);

    size.set_calculate(doubled);
    assert_eq!(size.cached(), None, "Replacing the calculation should clear the cache.");
    assert_eq!(size.get(&tracked), 6);
}

#[test]
fn test_max_size_and_mode() {
    let tracked = Tracked {
        items: vec![1, 2, 3],
        ..Tracked::default()
    };
    let mut size = SizeController::new(count);

    assert_eq!(size.max_size(), MaxSize::Unbounded);
    assert_eq!(size.mode(), SizeMode::Dynamic);
    assert_eq!(size.capacity(&tracked), Capacity::Unbounded);
    assert!(!size.is_full(&tracked), "An unbounded controller is never full.");

    size.set_max_size(MaxSize::Limited(5));
    assert_eq!(size.mode(), SizeMode::Fixed, "A finite max size should fix the size.");
    assert_eq!(size.capacity(&tracked), Capacity::Limited(2));
    assert!(!size.is_full(&tracked));

    size.set_max_size(MaxSize::Limited(3));
    assert!(size.is_full(&tracked));

    size.set_max_size(MaxSize::Limited(1));
    assert_eq!(
        size.capacity(&tracked),
        Capacity::Limited(-2),
        "Capacity shouldn't be clamped when the max size is below the count."
    );

    size.set_max_size(MaxSize::Unbounded);
    assert_eq!(size.mode(), SizeMode::Dynamic, "Unbounding should make the size dynamic again.");
    assert_eq!(size.max_size(), MaxSize::from(None::<usize>));
}

#[test]
fn test_predicates() {
    let tracked = Tracked {
        items: vec![1, 2],
        ..Tracked::default()
    };
    let size = SizeController::new(count);

    assert!(!size.is_empty(&tracked));
    assert!(size.is_in_bounds(&tracked, 0));
    assert!(size.is_in_bounds(&tracked, 1));
    assert!(!size.is_in_bounds(&tracked, 2), "The count itself is out of bounds.");

    let empty = Tracked::default();
    assert!(size.bind(&empty).get_forced() == 0 && size.is_empty(&empty));
    assert!(!size.is_in_bounds(&empty, 0), "Nothing is in bounds when empty.");
}

#[test]
fn test_assertions() {
    let tracked = Tracked {
        items: vec![1, 2],
        ..Tracked::default()
    };
    let size = SizeController::new(count)
        .with_max_size(MaxSize::Limited(2))
        .with_messages(SizeMessages {
            overflow: String::from("stack overflow"),
            ..SizeMessages::default()
        });

    let overflow = size.assert_not_full(&tracked).unwrap_err();
    assert_eq!(
        overflow,
        CapacityOverflow {
            len: 2,
            max_size: 2,
            message: String::from("stack overflow"),
        }
    );
    assert!(
        overflow.to_string().starts_with("stack overflow"),
        "Custom messages should be used in the error."
    );

    assert_eq!(size.assert_not_empty(&tracked), Ok(()));
    assert_eq!(size.assert_in_bounds(&tracked, 1), Ok(()));

    let out_of_bounds = size.assert_in_bounds(&tracked, 4).unwrap_err();
    assert_eq!((out_of_bounds.index, out_of_bounds.len), (4, 2));
    assert_eq!(out_of_bounds.message, SizeMessages::default().out_of_bounds);

    let empty = Tracked::default();
    size.invalidate();
    assert_eq!(
        size.assert_not_empty(&empty),
        Err(CapacityUnderflow {
            message: SizeMessages::default().underflow,
        })
    );
}

#[test]
fn test_zero_max_size() {
    let tracked = Tracked::default();
    let size = SizeController::new(count).with_max_size(MaxSize::Limited(0));

    assert_eq!(size.mode(), SizeMode::Fixed, "Zero is still a finite max size.");
    assert!(size.is_full(&tracked), "A zero max size is full even when empty.");
    assert!(size.assert_not_full(&tracked).is_err());
    assert_eq!(size.capacity(&tracked), Capacity::Limited(0));
}

#[test]
fn test_bound_view() {
    let tracked = Tracked {
        items: vec![4, 5, 6],
        ..Tracked::default()
    };
    let controller = SizeController::new(count).with_max_size(MaxSize::Limited(4));
    let size = controller.bind(&tracked);

    assert_eq!(size.get(), 3);
    assert_eq!(size.cached(), Some(3));
    assert_eq!(size.capacity(), Capacity::Limited(1));
    assert!(size.assert_not_full().is_ok());
    assert!(size.assert_room_for(1).is_ok());
    assert_eq!(
        size.assert_room_for(2).map_err(|error| error.len),
        Err(3),
        "Two more won't fit under a max size of four."
    );
    assert!(size.assert_in_bounds(3).is_err());
    assert_eq!(size.messages(), &SizeMessages::default());
}
