use std::sync::Mutex;
use vecta::{Delegate, OwnedService, RegisterError, Route, testing::RecordingCallback};

mod common;
use common::{entries, tagged};

// Valid ids are 10, 11 and 12.
type Service<'a> = OwnedService<'a, 3, 10>;

#[test]
fn test_registered_id_reaches_only_its_handler() {
    let log = Mutex::new(Vec::new());
    let h10 = tagged("h10", &log);
    let h11 = tagged("h11", &log);
    let h12 = tagged("h12", &log);

    let mut service = Service::new();
    service.register(10, &h10);
    service.register(11, &h11);
    service.register(12, &h12);

    service.call(11);

    assert_eq!(entries(&log), vec![("h11", 11)]);
}

#[test]
fn test_offset_scenario() {
    let log = Mutex::new(Vec::new());
    let handler = tagged("handler", &log);
    let fallback = tagged("fallback", &log);

    let mut service = Service::new();
    service.register(11, &handler);

    // Nothing bound for unhandled ids yet: dropped silently.
    service.call(9);
    service.call(10);
    service.call(13);
    service.call(11);
    assert_eq!(entries(&log), vec![("handler", 11)]);

    service.register_unhandled(&fallback);
    service.call(9);
    service.call(10);
    service.call(13);
    service.call(11);

    assert_eq!(
        entries(&log),
        vec![
            ("handler", 11),
            ("fallback", 9),
            ("fallback", 10),
            ("fallback", 13),
            ("handler", 11),
        ]
    );
}

#[test]
fn test_const_and_runtime_calls_agree() {
    let log = Mutex::new(Vec::new());
    let h10 = tagged("h10", &log);
    let h12 = tagged("h12", &log);
    let fallback = tagged("fallback", &log);

    let mut service = Service::new();
    service.register_const::<10>(&h10);
    service.register_const::<12>(&h12);
    service.register_unhandled(&fallback);

    service.call_const::<10>();
    service.call(10);
    service.call_const::<11>();
    service.call(11);
    service.call_const::<12>();
    service.call(12);

    assert_eq!(
        entries(&log),
        vec![
            ("h10", 10),
            ("h10", 10),
            ("fallback", 11),
            ("fallback", 11),
            ("h12", 12),
            ("h12", 12),
        ]
    );
}

#[test]
fn test_reregistration_overwrites() {
    let a = RecordingCallback::new();
    let b = RecordingCallback::new();

    let mut service = Service::new();
    service.register(12, &a);
    service.register(12, &b);
    service.call(12);

    service.register_const::<10>(&a);
    service.register_const::<10>(&b);
    service.call_const::<10>();

    assert!(a.ids().is_empty());
    assert_eq!(b.ids(), vec![12, 10]);
}

#[test]
fn test_out_of_range_register_is_a_no_op() {
    let stray = RecordingCallback::new();
    let fallback = RecordingCallback::new();

    let mut service = Service::new();
    service.register_unhandled(&fallback);
    let before: Vec<Route> = (0..20).map(|id| service.resolve(id)).collect();

    service.register(9, &stray);
    service.register(13, &stray);
    service.register(usize::MAX, &stray);

    let after: Vec<Route> = (0..20).map(|id| service.resolve(id)).collect();
    assert_eq!(before, after);

    for id in [9, 10, 11, 12, 13, usize::MAX] {
        service.call(id);
    }
    assert!(stray.ids().is_empty());
    assert_eq!(fallback.ids(), vec![9, 10, 11, 12, 13, usize::MAX]);
}

#[test]
fn test_try_register_rejects_out_of_range() {
    let handler = RecordingCallback::new();
    let mut service = Service::new();

    let err = service.try_register(42, &handler).unwrap_err();
    assert_eq!(
        err,
        RegisterError::OutOfRange {
            id: 42,
            start: 10,
            end: 13
        }
    );
    assert_eq!(
        err.to_string(),
        "callback id 42 is outside the dispatch range 10..13"
    );
}

#[test]
fn test_unhandled_registration_last_write_wins() {
    let first = RecordingCallback::new();
    let second = RecordingCallback::new();

    let mut service = Service::new();
    service.register_unhandled(&first);
    service.register_unhandled(&second);
    service.call(10);
    service.call(50);

    assert!(first.ids().is_empty());
    assert_eq!(second.ids(), vec![10, 50]);
}

#[test]
fn test_free_function_handlers() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static LAST: AtomicUsize = AtomicUsize::new(0);
    fn store(id: usize) {
        LAST.store(id, Ordering::SeqCst);
    }

    let mut service = OwnedService::<4>::new();
    service.register(3, store as fn(usize));
    service.register_unhandled(Delegate::from_fn(store));

    service.call(3);
    assert_eq!(LAST.load(Ordering::SeqCst), 3);
    service.call(8);
    assert_eq!(LAST.load(Ordering::SeqCst), 8);
}
