use std::panic::Location;

use crate::logging::panic_message;

#[test]
fn test_panic_message_with_str_payload() {
    let location = Location::caller();
    let message = panic_message(Some(location), &"store exploded");

    assert!(message.starts_with("PANIC: at "));
    assert!(message.contains(location.file()));
    assert!(message.ends_with("store exploded"));
}

#[test]
fn test_panic_message_with_string_payload() {
    let payload = String::from("bad route");
    assert_eq!(panic_message(None, &payload), "PANIC: bad route");
}

#[test]
fn test_panic_message_unknown_payload() {
    assert_eq!(panic_message(None, &42u8), "PANIC: Unknown panic payload");
}
