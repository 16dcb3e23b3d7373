//! Integration tests for signals and properties working together.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_accordion_core::{Property, Signal};

#[test]
fn test_property_change_drives_signal() {
    let value = Property::new(0usize);
    let changed = Signal::<usize>::new();
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_clone = seen.clone();
    changed.connect(move |v| seen_clone.store(*v, Ordering::SeqCst));

    for next in [3, 3, 5] {
        if value.set(next) {
            changed.emit(next);
        }
    }
    assert_eq!(seen.load(Ordering::SeqCst), 5);
    assert_eq!(value.get(), 5);
}

#[test]
fn test_emit_from_many_threads() {
    let signal = Arc::new(Signal::<usize>::new());
    let total = Arc::new(AtomicUsize::new(0));
    let total_clone = total.clone();
    let id = signal.connect(move |v| {
        total_clone.fetch_add(*v, Ordering::SeqCst);
    });

    let handles: Vec<_> = (1..=4)
        .map(|i| {
            let signal = signal.clone();
            std::thread::spawn(move || signal.emit(i))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
    assert_eq!(total.load(Ordering::SeqCst), 10);

    assert!(signal.disconnect(id));
    assert_eq!(signal.emit(100), 0);
    assert_eq!(total.load(Ordering::SeqCst), 10);
}

#[test]
fn test_slot_may_disconnect_during_emit() {
    let signal = Arc::new(Signal::<()>::new());
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    let weak = Arc::downgrade(&signal);
    signal.connect(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        if let Some(signal) = weak.upgrade() {
            signal.disconnect_all();
        }
    });

    signal.emit(());
    signal.emit(());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
