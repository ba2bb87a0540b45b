use super::*;
use crossbeam::scope;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Droppable(Arc<AtomicUsize>);

impl Drop for Droppable {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_basic_add_get() {
    let mut v = DynamicArray::new();
    v.add(1);
    v.add(2);
    v.add(3);
    assert_eq!(v.len(), 3);
    assert_eq!(v.get(0), Ok(&1));
    assert_eq!(v.get(2), Ok(&3));
    assert_eq!(v[1], 2);
    assert_eq!(v.pop(), Some(3));
    assert_eq!(v.pop(), Some(2));
    assert_eq!(v.pop(), Some(1));
    assert_eq!(v.pop(), None);
}

#[test]
fn test_new_does_not_allocate() {
    let v: DynamicArray<u64> = DynamicArray::new();
    assert_eq!(v.capacity(), 0);
    assert!(v.is_empty());
}

#[test]
fn test_insert_remove() {
    let mut v = DynamicArray::new();
    v.add(1);
    v.add(3);
    v.insert_at(1, 2).unwrap();
    assert_eq!(v.as_ref(), &[1, 2, 3]);
    assert_eq!(v.remove_at(1), Ok(2));
    assert_eq!(v.as_ref(), &[1, 3]);
}

#[test]
fn test_insert_at_len_appends() {
    let mut v = dynamic_array![1, 2];
    v.insert_at(2, 3).unwrap();
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn test_insert_into_full_buffer_grows() {
    let mut v = DynamicArray::with_capacity(2);
    v.add('a');
    v.add('c');
    assert_eq!(v.capacity(), 2);
    v.insert_at(1, 'b').unwrap();
    assert_eq!(v, ['a', 'b', 'c']);
    assert!(v.capacity() > 2);
}

#[test]
fn test_growth_never_shrinks() {
    let mut v = DynamicArray::with_capacity(2);
    assert_eq!(v.capacity(), 2);
    v.add(1);
    v.add(2);
    v.add(3);
    let grown = v.capacity();
    assert!(grown >= 3);
    while v.pop().is_some() {}
    assert_eq!(v.capacity(), grown);
    v.clear();
    assert_eq!(v.capacity(), grown);
}

#[test]
fn test_reserve_is_amortized() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    v.reserve(10);
    assert_eq!(v.capacity(), 10);
    v.reserve(10);
    assert_eq!(v.capacity(), 10);

    v.add_range(0..10);
    v.reserve(1);
    assert_eq!(v.capacity(), 20);
}

#[test]
fn test_set_returns_previous() {
    let mut v = dynamic_array![String::from("Peter"), String::from("Maria")];
    let old = v.set(1, String::from("Monika")).unwrap();
    assert_eq!(old, "Maria");
    assert_eq!(v.to_string(), "[Peter, Monika]");
}

#[test]
fn test_failed_calls_leave_array_untouched() {
    let mut v = dynamic_array![10, 20];
    let cap = v.capacity();

    assert!(v.set(2, 0).is_err());
    assert!(v.insert_at(3, 0).is_err());
    assert!(v.remove_at(2).is_err());
    assert!(v.exchange(0, 2).is_err());
    assert!(v.exchange(2, 0).is_err());

    assert_eq!(v, [10, 20]);
    assert_eq!(v.capacity(), cap);
}

#[test]
fn test_error_carries_operation() {
    let mut v = dynamic_array![1];
    let err = v.insert_at(5, 0).unwrap_err();
    assert_eq!(err, IndexOutOfRange { operation: Operation::InsertAt, index: 5, len: 1 });
    let err = v.exchange(0, 9).unwrap_err();
    assert_eq!(err.operation, Operation::Exchange);
    assert_eq!(err.index, 9);
}

#[test]
fn test_exchange_same_index() {
    let mut v = dynamic_array![1, 2, 3];
    v.exchange(1, 1).unwrap();
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn test_get_mut() {
    let mut v = dynamic_array![1, 2];
    *v.get_mut(0).unwrap() += 10;
    assert_eq!(v, [11, 2]);
    assert!(v.get_mut(2).is_err());
}

#[test]
fn test_raii_drop() {
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let mut v = DynamicArray::new();
        for _ in 0..10 {
            v.add(Droppable(counter.clone()));
        }
    }
    assert_eq!(counter.load(Ordering::SeqCst), 10);
}

#[test]
fn test_set_and_remove_drop_exactly_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut v = DynamicArray::new();
    for _ in 0..4 {
        v.add(Droppable(counter.clone()));
    }

    drop(v.set(0, Droppable(counter.clone())).unwrap());
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    drop(v.remove_at(1).unwrap());
    assert_eq!(counter.load(Ordering::SeqCst), 2);

    v.clear();
    assert_eq!(counter.load(Ordering::SeqCst), 5);

    drop(v);
    assert_eq!(counter.load(Ordering::SeqCst), 5);
}

#[test]
fn test_partially_consumed_into_iter_drops_rest() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut v = DynamicArray::new();
    for _ in 0..5 {
        v.add(Droppable(counter.clone()));
    }
    let mut iter = v.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.load(Ordering::SeqCst), 2);
    assert_eq!(iter.len(), 3);
    drop(iter);
    assert_eq!(counter.load(Ordering::SeqCst), 5);
}

#[test]
fn test_iterators() {
    let mut v = DynamicArray::new();
    v.add(10);
    v.add(20);
    v.add(30);

    let mut sum = 0;
    for &x in &v {
        sum += x;
    }
    assert_eq!(sum, 60);

    for x in &mut v {
        *x += 1;
    }
    assert_eq!(v[0], 11);

    let collected: Vec<i32> = v.into_iter().collect();
    assert_eq!(collected, vec![11, 21, 31]);
}

#[test]
fn test_collect_and_extend() {
    let mut v: DynamicArray<u32> = (1..=3).collect();
    v.extend([4, 5]);
    v.extend(&[6, 7]);
    assert_eq!(v.to_string(), "[1, 2, 3, 4, 5, 6, 7]");

    let from_vec = DynamicArray::from(vec![1, 2]);
    let from_slice = DynamicArray::from(&[1, 2][..]);
    assert_eq!(from_vec, from_slice);
}

#[test]
fn test_add_range_empty_is_noop() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    v.add_range(std::iter::empty());
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_add_range_without_size_hint() {
    let mut v = dynamic_array![0];
    v.add_range((1..100).filter(|n| n % 2 == 0));
    assert_eq!(v.len(), 50);
    assert_eq!(v[49], 98);
    assert!(v.capacity() >= v.len());
}

#[test]
fn test_clone_is_deep() {
    let original = dynamic_array![String::from("a"), String::from("b")];
    let mut copy = original.clone();
    copy.set(0, String::from("z")).unwrap();
    assert_eq!(original.to_string(), "[a, b]");
    assert_eq!(copy.to_string(), "[z, b]");
}

#[test]
fn test_zero_sized_elements() {
    let mut v = DynamicArray::new();
    for _ in 0..1000 {
        v.add(());
    }
    assert_eq!(v.len(), 1000);
    assert!(v.capacity() >= 1000);
    v.insert_at(500, ()).unwrap();
    assert_eq!(v.remove_at(0), Ok(()));
    assert_eq!(v.len(), 1000);
    assert_eq!(v.into_iter().count(), 1000);
}

#[test]
fn test_concurrent_reads() {
    let mut v = DynamicArray::new();
    for i in 0..100 {
        v.add(i);
    }

    scope(|s| {
        s.spawn(|_| {
            let sum: i32 = v.iter().sum();
            assert_eq!(sum, 4950);
        });
        s.spawn(|_| {
            assert_eq!(v.to_string().matches(", ").count(), 99);
        });
    })
    .unwrap();
}

#[test]
fn test_ownership_moves_across_threads() {
    let v = dynamic_array![1, 2, 3];
    let handle = std::thread::spawn(move || {
        let mut v = v;
        v.add(4);
        v
    });
    let v = handle.join().unwrap();
    assert_eq!(v, [1, 2, 3, 4]);
}
